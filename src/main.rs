use std::io::{self, BufReader};

use anyhow::Result;
use tracing::info;

use noughts_cli::{Controller, SessionConfig};

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();
    info!("noughts starting");
    Controller::new(SessionConfig::default(), io::stdout()).run(BufReader::new(io::stdin()))?;
    Ok(())
}

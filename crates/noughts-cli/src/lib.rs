//! Line-protocol game controller for noughts.

pub mod command;
pub mod controller;
pub mod error;
pub mod session;

pub use command::{Command, SessionOption};
pub use controller::Controller;
pub use error::CliError;
pub use session::{Session, SessionConfig};

//! Game-tree search for noughts.

pub mod search;

pub use search::minimax::{DRAW_SCORE, INF, WIN_SCORE};
pub use search::{Player, SearchResult};

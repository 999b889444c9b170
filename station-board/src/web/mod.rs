//! Web layer for the station board.
//!
//! Serves computed boards as JSON.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, board_response, create_router};
pub use state::AppState;

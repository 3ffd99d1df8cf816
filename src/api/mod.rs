//! API layer - HTTP endpoints and wire types

pub mod health;
pub mod models;
pub mod router;
pub mod spell;
pub mod state;
pub mod summarize;
pub mod types;

pub use router::{create_router, create_router_with_state};
pub use state::AppState;

//! Pokevoz relay server — HTTP surface over the relay runtime.

pub mod error;
pub mod routes;
pub mod state;

pub use routes::build_router;
pub use state::AppState;

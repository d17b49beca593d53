pub mod config;
pub mod error;
pub mod middleware;
pub mod page;
pub mod routes;
pub mod session;
pub mod state;

pub use routes::build_router;
pub use state::AppState;

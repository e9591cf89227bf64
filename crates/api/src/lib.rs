//! HTTP layer adapting the trigger bridge to the ingestion handler.

pub mod response;
pub mod routes;
pub mod state;

pub use routes::router;
pub use state::AppState;

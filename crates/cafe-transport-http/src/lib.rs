//! HTTP/JSON transport adapter for the cafe service.
//! Maps each route onto a single `CafeRepository` call.

pub mod auth;
mod error;
pub mod params;
pub mod router;
pub mod server;

pub use error::{ApiError, HttpTransportError};
pub use router::{build_router, AppState};
pub use server::{shutdown_signal, HttpServer};

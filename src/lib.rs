//! Bus network guider.
//!
//! Reads stops, bus routes and routing settings, then answers questions about
//! stops, buses and the fastest trip between two stops.

pub mod error;
pub mod guider;
pub mod io;
pub mod network;
pub mod query;
pub mod routing;

pub use error::{GuiderError, Result};
pub use guider::TransportGuider;
pub use query::{response::Response, Request, RequestDocument};

/// Runs a whole document through a fresh guider.
pub fn run(document: RequestDocument) -> Result<Vec<Response>> {
    TransportGuider::new().process_all(document.into_requests())
}

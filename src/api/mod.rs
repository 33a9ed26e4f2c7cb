pub mod client;
pub mod models;
pub mod response;
pub mod streaming;

pub use client::{ApiClient, Credential};
pub use models::{ApiResponse, OutputItem, RequestBody};
pub use streaming::process_streaming_response;

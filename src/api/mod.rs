// CodeVigil backend API client
// The backend owns collection and computation; this module only consumes it.

pub mod client;
pub mod errors;
pub mod types;

pub use client::ApiClient;
pub use errors::ApiError;
pub use types::*;

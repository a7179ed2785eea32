pub mod client;
pub mod models;

pub use client::AuthApiClient;
pub use models::{AuthApiError, RemoteUser};

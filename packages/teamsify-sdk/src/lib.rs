pub mod client;
pub mod error;

pub use client::{DEFAULT_TIMEOUT, WebhookClient};
pub use error::{SdkError, SdkResult};

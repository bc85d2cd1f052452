//! Form relay client for submitting the finished form over HTTP

mod client;
mod error;
mod traits;

pub use client::RelayClient;
pub use error::SubmitError;
pub use traits::FormRelay;

#[cfg(test)]
pub use traits::MockFormRelay;

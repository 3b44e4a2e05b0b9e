//! Core components of the `stockview-rs` client.
//!
//! This module contains the foundational building blocks of the library:
//! - The [`PredictClient`] and its builder.
//! - The primary [`PredictError`] type.
//! - Internal networking helpers.

/// The prediction client (`PredictClient`), builder, and configuration keys.
pub mod client;
/// The primary error type (`PredictError`) for the crate.
pub mod error;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::PredictClient`
pub use client::{ENDPOINT_ENV, PredictClient, PredictClientBuilder};
pub use error::PredictError;

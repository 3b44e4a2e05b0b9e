//! Centralized constants for configuration keys and the UA.

/// User agent sent with every prediction request.
pub(crate) const USER_AGENT: &str = concat!("stockview-rs/", env!("CARGO_PKG_VERSION"));

/// Environment variable holding the prediction endpoint address.
pub const ENDPOINT_ENV: &str = "PREDICTION_API_URL";

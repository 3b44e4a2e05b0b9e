//! Public client surface + builder.
//! Configuration keys and the UA live in `constants`.

mod constants;

pub use constants::ENDPOINT_ENV;

use crate::core::PredictError;
use crate::report::{self, StockReport};
use constants::USER_AGENT;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// HTTP client bound to a single prediction endpoint.
///
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct PredictClient {
    http: Client,
    endpoint: Url,
}

impl PredictClient {
    /// Create a new builder.
    pub fn builder() -> PredictClientBuilder {
        PredictClientBuilder::default()
    }

    /// Build a client whose endpoint comes from the `PREDICTION_API_URL` environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`PredictError::Config`] when the variable is unset and
    /// [`PredictError::Url`] when it is not a valid URL.
    pub fn from_env() -> Result<Self, PredictError> {
        let raw = std::env::var(ENDPOINT_ENV)
            .map_err(|_| PredictError::Config(format!("{ENDPOINT_ENV} is not set")))?;
        Self::builder().endpoint(Url::parse(&raw)?).build()
    }

    /// The address every submission is posted to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    /// Posts `symbol` to the prediction endpoint and parses the report.
    ///
    /// The symbol is sent exactly as given; an empty string is a valid request.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, on any status other than `200 OK`,
    /// or when the body is not a report document.
    #[tracing::instrument(level = "debug", skip(self), fields(endpoint = %self.endpoint))]
    pub async fn submit(&self, symbol: &str) -> Result<StockReport, PredictError> {
        report::fetch_report(self, symbol).await
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct PredictClientBuilder {
    endpoint: Option<Url>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl PredictClientBuilder {
    /// Set the prediction endpoint. Required.
    #[must_use]
    pub fn endpoint(mut self, url: Url) -> Self {
        self.endpoint = Some(url);
        self
    }

    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub const fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub const fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Finish configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PredictError::Config`] if no endpoint was set, or
    /// [`PredictError::Http`] if the HTTP client cannot be constructed.
    pub fn build(self) -> Result<PredictClient, PredictError> {
        let endpoint = self
            .endpoint
            .ok_or_else(|| PredictError::Config("no prediction endpoint configured".into()))?;

        let mut httpb =
            Client::builder().user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        Ok(PredictClient {
            http: httpb.build()?,
            endpoint,
        })
    }
}

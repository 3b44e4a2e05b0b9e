//! stockview-rs: terminal viewer for stock reports served by a prediction API.
//!
//! A ticker is posted to the configured endpoint; the returned report
//! (company info, forecast records, news) is kept in a [`ViewState`] and
//! rendered into a [`Page`] that a frontend lays out.
//!
//! ```no_run
//! # use stockview::{PredictClient, ViewState, render_page};
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = PredictClient::from_env()?;
//! let mut state = ViewState::default();
//! state.query_mut().symbol = "TSLA".into();
//!
//! let sub = state.begin_submit();
//! let result = client.submit(&sub.symbol).await;
//! state.apply_completion(stockview::Completion { ticket: sub.ticket, symbol: sub.symbol, result });
//!
//! let page = render_page(&state);
//! println!("{}", stockview::render::text::to_text(&page));
//! # Ok(())
//! # }
//! ```

pub mod chart;
pub mod core;
pub mod render;
pub mod report;
pub mod state;

pub use chart::{ChartOptions, ChartSeries, LineChartBackend, map_series};
pub use crate::core::{ENDPOINT_ENV, PredictClient, PredictClientBuilder, PredictError};
pub use render::{Page, render_page};
pub use report::{
    CompanyInfo, ForecastDate, ForecastPoint, NewsItem, Officer, StockReport, parse_report,
};
pub use state::{Applied, Completion, Phase, Resolution, Submission, Ticket, TickerQuery, ViewState};

//! The prediction report: request, wire decoding, and public model.

mod api;
mod model;
mod wire;

pub use api::parse_report;
pub(crate) use api::fetch_report;
pub use model::{
    CompanyInfo, ForecastDate, ForecastPoint, NewsItem, Officer, StockReport, Thumbnail,
    ThumbnailResolution,
};

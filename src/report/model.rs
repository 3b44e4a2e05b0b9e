use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

/// The full prediction response for one ticker.
///
/// Every section is optional; a backend that omits one simply leaves the
/// corresponding part of the screen empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StockReport {
    /// Company and market attributes.
    pub info: Option<CompanyInfo>,
    /// Forecasted price records, in the order the backend sent them.
    pub future: Option<Vec<ForecastPoint>>,
    /// News items, in the order the backend sent them.
    pub news: Option<Vec<NewsItem>>,
}

impl StockReport {
    /// Officers listed under `info.companyOfficers`, or an empty slice.
    pub fn officers(&self) -> &[Officer] {
        self.info
            .as_ref()
            .and_then(|i| i.company_officers.as_deref())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CompanyInfo {
    pub symbol: Option<String>,
    pub long_name: Option<String>,
    pub sector: Option<String>,
    pub industry: Option<String>,
    pub address1: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub country: Option<String>,
    pub website: Option<String>,
    pub currency: Option<String>,

    pub current_price: Option<f64>,
    pub previous_close: Option<f64>,
    pub open: Option<f64>,
    pub day_high: Option<f64>,
    pub day_low: Option<f64>,
    pub volume: Option<f64>,
    pub average_daily_volume_10_day: Option<f64>,

    pub market_cap: Option<f64>,
    pub beta: Option<f64>,
    pub book_value: Option<f64>,
    pub trailing_pe: Option<f64>,
    pub forward_pe: Option<f64>,
    /// Fraction, e.g. `0.15` for 15%.
    pub profit_margins: Option<f64>,
    /// Fraction, e.g. `0.15` for 15%.
    pub revenue_growth: Option<f64>,
    pub total_revenue: Option<f64>,
    pub ebitda: Option<f64>,

    /// Fraction, e.g. `0.15` for 15%.
    pub held_percent_insiders: Option<f64>,
    /// Fraction, e.g. `0.15` for 15%.
    pub held_percent_institutions: Option<f64>,
    pub short_ratio: Option<f64>,
    pub shares_short: Option<f64>,

    pub recommendation_key: Option<String>,
    pub target_high_price: Option<f64>,
    pub target_low_price: Option<f64>,
    pub target_mean_price: Option<f64>,

    pub audit_risk: Option<f64>,
    pub board_risk: Option<f64>,
    pub share_holder_rights_risk: Option<f64>,
    pub overall_risk: Option<f64>,

    pub company_officers: Option<Vec<Officer>>,
}

/// A company executive with optional compensation attributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Officer {
    pub name: Option<String>,
    pub title: Option<String>,
    pub age: Option<u32>,
    pub year_born: Option<u32>,
    pub fiscal_year: Option<u32>,
    pub total_pay: Option<f64>,
    pub exercised_value: Option<f64>,
    pub unexercised_value: Option<f64>,
}

/// The date attached to a forecast record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ForecastDate {
    /// A calendar day recognised from an ISO/RFC string or epoch milliseconds.
    Day(NaiveDate),
    /// A string the client could not interpret; shown verbatim.
    Unparsed(String),
    /// No usable date in the record.
    Missing,
}

/// One forecasted price record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastPoint {
    pub date: ForecastDate,
    pub low: Option<f64>,
    pub high: Option<f64>,
    pub close: Option<f64>,
}

/// A single news item for a ticker.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NewsItem {
    pub uuid: Option<String>,
    pub title: Option<String>,
    pub publisher: Option<String>,
    pub link: Option<String>,
    pub provider_publish_time: Option<DateTime<Utc>>,
    pub kind: Option<String>,
    pub thumbnail: Option<Thumbnail>,
    pub related_tickers: Vec<String>,
}

impl NewsItem {
    /// URL of the first thumbnail resolution, if it exists and is non-empty.
    pub fn thumbnail_url(&self) -> Option<&str> {
        self.thumbnail
            .as_ref()?
            .resolutions
            .first()?
            .url
            .as_deref()
            .filter(|u| !u.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Thumbnail {
    pub resolutions: Vec<ThumbnailResolution>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ThumbnailResolution {
    pub url: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub tag: Option<String>,
}

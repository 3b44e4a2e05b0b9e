use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use reqwest::StatusCode;
use serde::Serialize;

use crate::{
    core::{PredictClient, PredictError, net},
    report::{
        model::{
            CompanyInfo, ForecastDate, ForecastPoint, NewsItem, Officer, StockReport, Thumbnail,
            ThumbnailResolution,
        },
        wire::{self, to_u32_round},
    },
};

#[derive(Serialize)]
struct PredictPayload<'a> {
    stock: &'a str,
}

pub(crate) async fn fetch_report(
    client: &PredictClient,
    symbol: &str,
) -> Result<StockReport, PredictError> {
    let payload = PredictPayload { stock: symbol };

    let resp = client
        .http()
        .post(client.endpoint().clone())
        .json(&payload)
        .send()
        .await?;

    if resp.status() != StatusCode::OK {
        return Err(PredictError::Status {
            status: resp.status().as_u16(),
            url: resp.url().to_string(),
        });
    }

    let body = net::get_text(resp, symbol).await?;
    parse_report(&body)
}

/// Decode a report document from its JSON text.
///
/// # Errors
///
/// Returns [`PredictError::Json`] if the text is not a JSON object of the
/// expected shape. Unknown fields are ignored and malformed scalar values
/// are treated as absent.
pub fn parse_report(body: &str) -> Result<StockReport, PredictError> {
    let envelope: wire::ReportEnvelope = serde_json::from_str(body)?;
    Ok(assemble_report(envelope))
}

fn assemble_report(env: wire::ReportEnvelope) -> StockReport {
    StockReport {
        info: env.info.map(assemble_info),
        future: env
            .future
            .map(|rows| rows.into_iter().map(assemble_point).collect()),
        news: env
            .news
            .map(|items| items.into_iter().map(assemble_news).collect()),
    }
}

fn assemble_info(n: wire::InfoNode) -> CompanyInfo {
    CompanyInfo {
        symbol: n.symbol,
        long_name: n.long_name,
        sector: n.sector,
        industry: n.industry,
        address1: n.address1,
        city: n.city,
        state: n.state,
        zip: n.zip,
        country: n.country,
        website: n.website,
        currency: n.currency,
        current_price: n.current_price,
        previous_close: n.previous_close,
        open: n.open,
        day_high: n.day_high,
        day_low: n.day_low,
        volume: n.volume,
        average_daily_volume_10_day: n.average_daily_volume_10_day,
        market_cap: n.market_cap,
        beta: n.beta,
        book_value: n.book_value,
        trailing_pe: n.trailing_pe,
        forward_pe: n.forward_pe,
        profit_margins: n.profit_margins,
        revenue_growth: n.revenue_growth,
        total_revenue: n.total_revenue,
        ebitda: n.ebitda,
        held_percent_insiders: n.held_percent_insiders,
        held_percent_institutions: n.held_percent_institutions,
        short_ratio: n.short_ratio,
        shares_short: n.shares_short,
        recommendation_key: n.recommendation_key,
        target_high_price: n.target_high_price,
        target_low_price: n.target_low_price,
        target_mean_price: n.target_mean_price,
        audit_risk: n.audit_risk,
        board_risk: n.board_risk,
        share_holder_rights_risk: n.share_holder_rights_risk,
        overall_risk: n.overall_risk,
        company_officers: n
            .company_officers
            .map(|list| list.into_iter().map(assemble_officer).collect()),
    }
}

fn assemble_officer(o: wire::OfficerNode) -> Officer {
    Officer {
        name: o.name,
        title: o.title,
        age: to_u32_round(o.age),
        year_born: to_u32_round(o.year_born),
        fiscal_year: to_u32_round(o.fiscal_year),
        total_pay: o.total_pay,
        exercised_value: o.exercised_value,
        unexercised_value: o.unexercised_value,
    }
}

fn assemble_point(p: wire::FutureNode) -> ForecastPoint {
    ForecastPoint {
        date: p.date.map_or(ForecastDate::Missing, parse_forecast_date),
        low: p.low,
        high: p.high,
        close: p.close,
    }
}

fn assemble_news(n: wire::NewsNode) -> NewsItem {
    NewsItem {
        uuid: n.uuid,
        title: n.title,
        publisher: n.publisher,
        link: n.link,
        provider_publish_time: n.provider_publish_time.and_then(secs_to_datetime),
        kind: n.kind,
        thumbnail: n.thumbnail.map(|t| Thumbnail {
            resolutions: t
                .resolutions
                .unwrap_or_default()
                .into_iter()
                .map(|r| ThumbnailResolution {
                    url: r.url,
                    width: to_u32_round(r.width),
                    height: to_u32_round(r.height),
                    tag: r.tag,
                })
                .collect(),
        }),
        related_tickers: n.related_tickers.unwrap_or_default(),
    }
}

fn parse_forecast_date(raw: wire::RawDate) -> ForecastDate {
    match raw {
        wire::RawDate::Millis(ms) => millis_to_day(ms),
        wire::RawDate::FractionalMillis(ms) => {
            truncate_to_i64(ms).map_or(ForecastDate::Missing, millis_to_day)
        }
        wire::RawDate::Text(s) => parse_date_text(&s)
            .map_or_else(|| ForecastDate::Unparsed(s), ForecastDate::Day),
        wire::RawDate::Other(_) => ForecastDate::Missing,
    }
}

#[allow(clippy::cast_possible_truncation)]
fn truncate_to_i64(v: f64) -> Option<i64> {
    (v.is_finite() && v.abs() < 9.0e15).then(|| v.trunc() as i64)
}

/// News publish times are whole seconds since the epoch.
fn secs_to_datetime(secs: f64) -> Option<DateTime<Utc>> {
    truncate_to_i64(secs).and_then(|s| DateTime::from_timestamp(s, 0))
}

fn millis_to_day(ms: i64) -> ForecastDate {
    DateTime::from_timestamp_millis(ms)
        .map_or(ForecastDate::Missing, |dt| ForecastDate::Day(dt.date_naive()))
}

/// Recognises plain ISO dates, ISO date-times (with or without offset) and
/// RFC 2822 strings such as Flask's default datetime encoding.
fn parse_date_text(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }
    DateTime::parse_from_rfc2822(s).ok().map(|dt| dt.date_naive())
}

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
pub(crate) struct ReportEnvelope {
    pub(crate) info: Option<InfoNode>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub(crate) future: Option<Vec<FutureNode>>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub(crate) news: Option<Vec<NewsNode>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct InfoNode {
    #[serde(default, deserialize_with = "lenient_string")]
    pub(crate) symbol: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub(crate) long_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub(crate) sector: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub(crate) industry: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub(crate) address1: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub(crate) city: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub(crate) state: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub(crate) zip: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub(crate) country: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub(crate) website: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub(crate) currency: Option<String>,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub(crate) current_price: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub(crate) previous_close: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub(crate) open: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub(crate) day_high: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub(crate) day_low: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub(crate) volume: Option<f64>,
    #[serde(
        rename = "averageDailyVolume10Day",
        default,
        deserialize_with = "lenient_f64"
    )]
    pub(crate) average_daily_volume_10_day: Option<f64>,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub(crate) market_cap: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub(crate) beta: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub(crate) book_value: Option<f64>,
    #[serde(rename = "trailingPE", default, deserialize_with = "lenient_f64")]
    pub(crate) trailing_pe: Option<f64>,
    #[serde(rename = "forwardPE", default, deserialize_with = "lenient_f64")]
    pub(crate) forward_pe: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub(crate) profit_margins: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub(crate) revenue_growth: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub(crate) total_revenue: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub(crate) ebitda: Option<f64>,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub(crate) held_percent_insiders: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub(crate) held_percent_institutions: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub(crate) short_ratio: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub(crate) shares_short: Option<f64>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub(crate) recommendation_key: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub(crate) target_high_price: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub(crate) target_low_price: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub(crate) target_mean_price: Option<f64>,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub(crate) audit_risk: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub(crate) board_risk: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub(crate) share_holder_rights_risk: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub(crate) overall_risk: Option<f64>,

    #[serde(default, deserialize_with = "lenient_vec")]
    pub(crate) company_officers: Option<Vec<OfficerNode>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OfficerNode {
    #[serde(default, deserialize_with = "lenient_string")]
    pub(crate) name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub(crate) title: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub(crate) age: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub(crate) year_born: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub(crate) fiscal_year: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub(crate) total_pay: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub(crate) exercised_value: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub(crate) unexercised_value: Option<f64>,
}

#[derive(Deserialize)]
pub(crate) struct FutureNode {
    #[serde(rename = "Date")]
    pub(crate) date: Option<RawDate>,
    #[serde(rename = "Low", default, deserialize_with = "lenient_f64")]
    pub(crate) low: Option<f64>,
    #[serde(rename = "High", default, deserialize_with = "lenient_f64")]
    pub(crate) high: Option<f64>,
    #[serde(rename = "Close", default, deserialize_with = "lenient_f64")]
    pub(crate) close: Option<f64>,
}

/// A forecast date as the backend may emit it: a date string or epoch milliseconds.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum RawDate {
    Millis(i64),
    FractionalMillis(f64),
    Text(String),
    Other(IgnoredAny),
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NewsNode {
    #[serde(default, deserialize_with = "lenient_string")]
    pub(crate) uuid: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub(crate) title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub(crate) publisher: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub(crate) link: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub(crate) provider_publish_time: Option<f64>,
    #[serde(rename = "type", default, deserialize_with = "lenient_string")]
    pub(crate) kind: Option<String>,
    pub(crate) thumbnail: Option<ThumbnailNode>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub(crate) related_tickers: Option<Vec<String>>,
}

#[derive(Deserialize)]
pub(crate) struct ThumbnailNode {
    #[serde(default, deserialize_with = "lenient_vec")]
    pub(crate) resolutions: Option<Vec<ResolutionNode>>,
}

#[derive(Deserialize)]
pub(crate) struct ResolutionNode {
    #[serde(default, deserialize_with = "lenient_string")]
    pub(crate) url: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub(crate) width: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub(crate) height: Option<f64>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub(crate) tag: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AnyScalar {
    Num(f64),
    Text(String),
    Other(IgnoredAny),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AnySeq<T> {
    Seq(Vec<T>),
    Other(IgnoredAny),
}

/// Accepts a JSON array of `T`; any other value (or an array with a malformed
/// element) becomes `None` so the rest of the report still decodes.
fn lenient_vec<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(match Option::<AnySeq<T>>::deserialize(deserializer)? {
        Some(AnySeq::Seq(items)) => Some(items),
        _ => None,
    })
}

/// Accepts a JSON number or a numeric string; anything else (including `null`) becomes `None`.
fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<AnyScalar>::deserialize(deserializer)? {
        Some(AnyScalar::Num(n)) if n.is_finite() => Some(n),
        Some(AnyScalar::Text(s)) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    })
}

/// Accepts a JSON string or a number (rendered as text); anything else becomes `None`.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<AnyScalar>::deserialize(deserializer)? {
        Some(AnyScalar::Text(s)) => Some(s),
        Some(AnyScalar::Num(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Rounds a non-negative float into a `u32`, rejecting values out of range.
pub(crate) fn to_u32_round(v: Option<f64>) -> Option<u32> {
    v.and_then(|v| {
        let rounded = v.round();
        if rounded >= 0.0 && rounded <= f64::from(u32::MAX) {
            // This cast is safe as we check the bounds of rounded.
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            Some(rounded as u32)
        } else {
            None
        }
    })
}

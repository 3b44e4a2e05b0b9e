//! View state to visual tree.
//!
//! [`render_page`] is a pure function: the same state always produces the
//! same [`Page`]. It runs on every frame, so the chart series are re-derived
//! from the report each time rather than cached.

pub mod format;
pub mod text;
mod tree;

pub use tree::{
    Accent, Body, Card, ChartContent, ChartPanel, Field, Header, NewsCard, NewsContent,
    NewsSection, OfficerBlock, Page, SearchForm, Sidebar, SidebarContent,
};

use crate::chart::{self, ChartOptions};
use crate::report::{CompanyInfo, NewsItem, Officer, StockReport};
use crate::state::ViewState;
use format::{dollars, dollars_grouped, grouped, number, percent, plain};

pub const APP_TITLE: &str = "AI/ML Stock Information Viewer";
pub const TAGLINE: &str = "Explore real-time and historical market data with advanced predictive \
modeling at your fingertips. Our AI/ML Stock Information Viewer harnesses cutting-edge analytics \
to help you make informed investment decisions. Dive deep into stock trends, visualize future \
performance, and stay ahead of the curve, all in one convenient platform.";
pub const INPUT_PLACEHOLDER: &str = "Enter stock symbol, e.g. TSLA";
pub const NO_OFFICERS: &str = "No company officers found.";
pub const NO_CHART: &str = "No chart data available.";
pub const NO_NEWS: &str = "No news available.";
pub const THUMBNAIL_FALLBACK: &str = "https://via.placeholder.com/200";
pub const DISCLAIMER: &str = "Disclaimer: All information is provided for educational purposes. \
This does not constitute financial advice. Always do your own research.";
pub const FOOTER: &str = "© 2025 Old Alex Hub. All rights reserved.";

/// Renders the whole screen for the current state.
pub fn render_page(state: &ViewState) -> Page {
    let report = state.report();
    Page {
        sidebar: render_sidebar(report),
        header: Header {
            title: APP_TITLE,
            tagline: TAGLINE,
        },
        form: SearchForm {
            value: state.query().symbol.clone(),
            placeholder: INPUT_PLACEHOLDER,
            button: "Search",
            loading: state.in_flight() > 0,
        },
        body: report.map(render_body),
        disclaimer: DISCLAIMER,
        footer: FOOTER,
    }
}

/// The officer sidebar; a placeholder when no officers are listed.
pub fn render_sidebar(report: Option<&StockReport>) -> Sidebar {
    let officers = report.map(StockReport::officers).unwrap_or_default();
    let content = if officers.is_empty() {
        SidebarContent::Placeholder(NO_OFFICERS)
    } else {
        SidebarContent::Officers(officers.iter().map(officer_block).collect())
    };
    Sidebar {
        title: "Company Officers",
        content,
    }
}

/// A value counts as present whenever the payload carries it, zero included.
fn officer_block(o: &Officer) -> OfficerBlock {
    let fields = [
        format::text("Title", o.title.as_deref()),
        number("Age", o.age.map(f64::from), plain),
        number("Total Pay", o.total_pay, dollars_grouped),
        number("Exercised Value", o.exercised_value, dollars_grouped),
        number("Unexercised Value", o.unexercised_value, dollars_grouped),
    ];
    OfficerBlock {
        name: o.name.clone().unwrap_or_default(),
        fields: fields.into_iter().flatten().collect(),
    }
}

/// Chart, metric cards and news for a received report.
pub fn render_body(report: &StockReport) -> Body {
    let content = match chart::map_series(Some(report)) {
        Some(series) => ChartContent::Series {
            series,
            options: ChartOptions::default(),
        },
        None => ChartContent::Placeholder(NO_CHART),
    };

    let empty = CompanyInfo::default();
    let info = report.info.as_ref().unwrap_or(&empty);

    Body {
        chart: ChartPanel {
            title: "Stock Chart",
            content,
        },
        cards: vec![
            general_card(info),
            stock_card(info),
            financial_card(info),
            holdings_card(info),
            analyst_card(info),
            risk_card(info),
        ],
        news: render_news(report.news.as_deref()),
    }
}

fn card(
    title: &'static str,
    accent: Accent,
    headline: Option<String>,
    fields: impl IntoIterator<Item = Option<Field>>,
) -> Card {
    Card {
        title,
        accent,
        headline,
        fields: fields.into_iter().flatten().collect(),
    }
}

fn general_card(i: &CompanyInfo) -> Card {
    let address = format::address(
        i.address1.as_deref(),
        i.city.as_deref(),
        i.state.as_deref(),
        i.zip.as_deref(),
        i.country.as_deref(),
    );
    card(
        "General Information",
        Accent::Primary,
        i.long_name.clone(),
        [
            format::text("Sector", i.sector.as_deref()),
            format::text("Industry", i.industry.as_deref()),
            format::text("Address", address.as_deref()),
            format::text("Website", i.website.as_deref()),
            format::text("Currency", i.currency.as_deref()),
        ],
    )
}

fn stock_card(i: &CompanyInfo) -> Card {
    card(
        "Stock Information",
        Accent::Info,
        None,
        [
            number("Current Price", i.current_price, dollars),
            number("Previous Close", i.previous_close, dollars),
            number("Open", i.open, dollars),
            number("Day High", i.day_high, dollars),
            number("Day Low", i.day_low, dollars),
            number("Volume", i.volume, grouped),
            number("Avg Volume (10d)", i.average_daily_volume_10_day, grouped),
        ],
    )
}

fn financial_card(i: &CompanyInfo) -> Card {
    card(
        "Financial Metrics",
        Accent::Success,
        None,
        [
            number("Market Cap", i.market_cap, dollars_grouped),
            number("Beta", i.beta, plain),
            number("Book Value", i.book_value, dollars),
            number("Trailing PE", i.trailing_pe, plain),
            number("Forward PE", i.forward_pe, plain),
            number("Profit Margins", i.profit_margins, percent),
            number("Revenue Growth", i.revenue_growth, percent),
            number("Total Revenue", i.total_revenue, dollars_grouped),
            number("EBITDA", i.ebitda, dollars_grouped),
        ],
    )
}

fn holdings_card(i: &CompanyInfo) -> Card {
    card(
        "Insider & Institutional",
        Accent::Warning,
        None,
        [
            number("Insider Holdings", i.held_percent_insiders, percent),
            number("Institutional Holdings", i.held_percent_institutions, percent),
            number("Short Ratio", i.short_ratio, plain),
            number("Shares Short", i.shares_short, grouped),
        ],
    )
}

fn analyst_card(i: &CompanyInfo) -> Card {
    let recommendation = i.recommendation_key.as_deref().map(str::to_uppercase);
    card(
        "Analyst Ratings",
        Accent::Danger,
        None,
        [
            format::text("Recommendation", recommendation.as_deref()),
            number("Target High", i.target_high_price, dollars),
            number("Target Low", i.target_low_price, dollars),
            number("Target Mean", i.target_mean_price, dollars),
        ],
    )
}

fn risk_card(i: &CompanyInfo) -> Card {
    card(
        "Risk Metrics",
        Accent::Secondary,
        None,
        [
            number("Audit Risk", i.audit_risk, plain),
            number("Board Risk", i.board_risk, plain),
            number("Shareholder Rights Risk", i.share_holder_rights_risk, plain),
            number("Overall Risk", i.overall_risk, plain),
        ],
    )
}

/// News cards in received order; a placeholder when the list is missing or empty.
pub fn render_news(news: Option<&[NewsItem]>) -> NewsSection {
    let content = match news {
        Some(items) if !items.is_empty() => {
            NewsContent::Items(items.iter().map(news_card).collect())
        }
        _ => NewsContent::Placeholder(NO_NEWS),
    };
    NewsSection {
        title: "Latest News",
        content,
    }
}

fn news_card(n: &NewsItem) -> NewsCard {
    NewsCard {
        title: n.title.clone().unwrap_or_default(),
        publisher: n.publisher.clone(),
        link: n.link.clone(),
        link_label: "Read more",
        thumbnail_url: n
            .thumbnail_url()
            .unwrap_or(THUMBNAIL_FALLBACK)
            .to_string(),
    }
}

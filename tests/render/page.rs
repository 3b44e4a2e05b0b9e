use stockview::chart::LegendPosition;
use stockview::render::text::to_text;
use stockview::render::{
    self, Accent, ChartContent, NewsContent, SidebarContent, THUMBNAIL_FALLBACK,
};
use stockview::{
    CompanyInfo, Completion, ForecastDate, ForecastPoint, NewsItem, Officer, StockReport,
    ViewState, render_page,
};

use crate::common::tsla_report;

fn loaded(report: StockReport) -> ViewState {
    let mut state = ViewState::default();
    let sub = state.begin_submit();
    state.apply_completion(Completion {
        ticket: sub.ticket,
        symbol: sub.symbol,
        result: Ok(report),
    });
    state
}

fn with_officers(officers: Vec<Officer>) -> StockReport {
    StockReport {
        info: Some(CompanyInfo {
            company_officers: Some(officers),
            ..CompanyInfo::default()
        }),
        ..StockReport::default()
    }
}

#[test]
fn idle_page_shows_form_only() {
    let mut state = ViewState::default();
    state.query_mut().symbol = "TS".into();
    let page = render_page(&state);

    assert!(page.body.is_none());
    assert_eq!(page.form.value, "TS");
    assert_eq!(page.form.placeholder, "Enter stock symbol, e.g. TSLA");
    assert!(!page.form.loading);
    assert_eq!(
        page.sidebar.content,
        SidebarContent::Placeholder("No company officers found.")
    );
    assert_eq!(page.header.title, "AI/ML Stock Information Viewer");
}

#[test]
fn tesla_scenario() {
    let page = render_page(&loaded(tsla_report()));
    let body = page.body.as_ref().expect("report body");

    match &body.chart.content {
        ChartContent::Series { series, .. } => {
            assert_eq!(series.len(), 3);
            assert_eq!(series.labels[0], "1/1/2025");
        }
        ChartContent::Placeholder(_) => panic!("expected a chart"),
    }

    let general = page.card("General Information").unwrap();
    assert_eq!(general.headline.as_deref(), Some("Tesla, Inc."));
    assert_eq!(general.accent, Accent::Primary);
    assert_eq!(
        general.field("Address"),
        Some("1 Tesla Road, Austin, TX 78725, United States")
    );
    assert_eq!(general.field("Website"), Some("https://www.tesla.com"));

    let stock = page.card("Stock Information").unwrap();
    assert_eq!(stock.field("Current Price"), Some("$248.5"));
    assert_eq!(stock.field("Open"), Some("$250"));
    assert_eq!(stock.field("Volume"), Some("98,765,432"));
    assert_eq!(stock.field("Avg Volume (10d)"), Some("101,234,567"));

    let fin = page.card("Financial Metrics").unwrap();
    assert_eq!(fin.field("Market Cap"), Some("$792,345,678,912"));
    assert_eq!(fin.field("Revenue Growth"), Some("7.80%"));
    assert_eq!(fin.field("Total Revenue"), Some("$97,150,001,152"));
    assert_eq!(fin.field("EBITDA"), Some("$13,244,000,256"));

    let holdings = page.card("Insider & Institutional").unwrap();
    assert_eq!(holdings.field("Insider Holdings"), Some("12.95%"));
    assert_eq!(holdings.field("Shares Short"), Some("82,645,010"));

    let analyst = page.card("Analyst Ratings").unwrap();
    assert_eq!(analyst.field("Recommendation"), Some("HOLD"));
    assert_eq!(analyst.field("Target High"), Some("$411"));

    let risk = page.card("Risk Metrics").unwrap();
    assert_eq!(risk.field("Overall Risk"), Some("10"));
}

#[test]
fn cards_appear_in_fixed_order() {
    let page = render_page(&loaded(tsla_report()));
    let titles: Vec<_> = page.body.unwrap().cards.iter().map(|c| c.title).collect();
    assert_eq!(
        titles,
        [
            "General Information",
            "Stock Information",
            "Financial Metrics",
            "Insider & Institutional",
            "Analyst Ratings",
            "Risk Metrics",
        ]
    );
}

#[test]
fn missing_future_shows_chart_placeholder() {
    let report = StockReport {
        info: tsla_report().info,
        ..StockReport::default()
    };
    let page = render_page(&loaded(report));
    let body = page.body.unwrap();
    assert_eq!(
        body.chart.content,
        ChartContent::Placeholder("No chart data available.")
    );
}

#[test]
fn empty_future_still_draws_a_chart() {
    let report = StockReport {
        future: Some(Vec::new()),
        ..StockReport::default()
    };
    let body = render::render_body(&report);
    assert!(matches!(body.chart.content, ChartContent::Series { ref series, .. } if series.is_empty()));
}

#[test]
fn absent_fields_drop_their_rows() {
    let body = render::render_body(&StockReport::default());

    assert_eq!(body.cards.len(), 6);
    assert!(body.cards.iter().all(|c| c.fields.is_empty()));
    assert!(body.cards[0].headline.is_none());
    assert_eq!(body.news.content, NewsContent::Placeholder("No news available."));
}

#[test]
fn partial_address_joins_present_parts() {
    let report = StockReport {
        info: Some(CompanyInfo {
            city: Some("Austin".into()),
            zip: Some("78725".into()),
            ..CompanyInfo::default()
        }),
        ..StockReport::default()
    };
    let page = render_page(&loaded(report));
    assert_eq!(
        page.card("General Information").unwrap().field("Address"),
        Some("Austin, 78725")
    );
}

#[test]
fn officer_without_age_has_no_age_line() {
    let report = with_officers(vec![Officer {
        name: Some("Jane Doe".into()),
        title: Some("CFO".into()),
        ..Officer::default()
    }]);
    let sidebar = render::render_sidebar(Some(&report));

    let SidebarContent::Officers(blocks) = sidebar.content else {
        panic!("expected officer blocks");
    };
    assert_eq!(blocks[0].name, "Jane Doe");
    assert_eq!(blocks[0].field("Title"), Some("CFO"));
    assert_eq!(blocks[0].field("Age"), None);
    assert_eq!(blocks[0].field("Total Pay"), None);
}

#[test]
fn zero_values_count_as_present_for_every_officer_field() {
    let report = with_officers(vec![Officer {
        name: Some("Zero Person".into()),
        age: Some(0),
        total_pay: Some(0.0),
        exercised_value: Some(0.0),
        unexercised_value: Some(0.0),
        ..Officer::default()
    }]);
    let sidebar = render::render_sidebar(Some(&report));

    let SidebarContent::Officers(blocks) = sidebar.content else {
        panic!("expected officer blocks");
    };
    assert_eq!(blocks[0].field("Age"), Some("0"));
    assert_eq!(blocks[0].field("Total Pay"), Some("$0"));
    assert_eq!(blocks[0].field("Exercised Value"), Some("$0"));
    assert_eq!(blocks[0].field("Unexercised Value"), Some("$0"));
}

#[test]
fn officers_render_in_received_order() {
    let page = render_page(&loaded(tsla_report()));
    let SidebarContent::Officers(blocks) = &page.sidebar.content else {
        panic!("expected officer blocks");
    };
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0].name, "Mr. Elon R. Musk");
    assert_eq!(blocks[0].field("Total Pay"), None);
    assert_eq!(blocks[1].field("Total Pay"), Some("$278,000"));
    assert_eq!(blocks[1].field("Unexercised Value"), Some("$202,075,632"));
}

#[test]
fn empty_officer_list_uses_placeholder() {
    let sidebar = render::render_sidebar(Some(&with_officers(Vec::new())));
    assert_eq!(
        sidebar.content,
        SidebarContent::Placeholder("No company officers found.")
    );
}

#[test]
fn news_falls_back_to_placeholder_thumbnail() {
    let page = render_page(&loaded(tsla_report()));
    let NewsContent::Items(items) = page.body.unwrap().news.content else {
        panic!("expected news items");
    };
    assert_eq!(items[0].thumbnail_url, "https://s.yimg.com/original.jpg");
    assert_eq!(items[1].thumbnail_url, THUMBNAIL_FALLBACK);
    assert_eq!(items[1].publisher.as_deref(), Some("Bloomberg"));
}

#[test]
fn empty_thumbnail_url_also_falls_back() {
    let news = vec![NewsItem {
        title: Some("x".into()),
        thumbnail: Some(stockview::report::Thumbnail {
            resolutions: vec![stockview::report::ThumbnailResolution {
                url: Some(String::new()),
                ..Default::default()
            }],
        }),
        ..NewsItem::default()
    }];
    let section = render::render_news(Some(&news));
    let NewsContent::Items(items) = section.content else {
        panic!("expected news items");
    };
    assert_eq!(items[0].thumbnail_url, THUMBNAIL_FALLBACK);
}

#[test]
fn unparsed_dates_are_shown_verbatim_on_the_axis() {
    let report = StockReport {
        future: Some(vec![ForecastPoint {
            date: ForecastDate::Unparsed("week 1".into()),
            low: None,
            high: None,
            close: Some(1.0),
        }]),
        ..StockReport::default()
    };
    let body = render::render_body(&report);
    let ChartContent::Series { series, .. } = body.chart.content else {
        panic!("expected a chart");
    };
    assert_eq!(series.labels, vec!["week 1".to_string()]);
}

#[test]
fn text_layout_contains_every_section() {
    let text = to_text(&render_page(&loaded(tsla_report())));
    for needle in [
        "AI/ML Stock Information Viewer",
        "== Company Officers ==",
        "== Stock Chart ==",
        "== General Information ==",
        "Tesla, Inc.",
        "== Latest News ==",
        "Publisher: Reuters",
        "Disclaimer:",
        "Old Alex Hub",
    ] {
        assert!(text.contains(needle), "missing {needle:?} in:\n{text}");
    }
}

#[test]
fn chart_legend_can_be_moved() {
    let page = render_page(&loaded(tsla_report())).with_chart_legend(LegendPosition::Bottom);
    let ChartContent::Series { options, .. } = &page.body.as_ref().unwrap().chart.content else {
        panic!("expected a chart");
    };
    assert_eq!(options.legend, LegendPosition::Bottom);

    let idle = render_page(&ViewState::default()).with_chart_legend(LegendPosition::Bottom);
    assert!(idle.body.is_none());
}

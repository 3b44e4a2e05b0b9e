//! The visual tree produced by [`render_page`](super::render_page).
//!
//! Frontends (the terminal UI, the plain-text printer) only lay these nodes
//! out; every presence check and number format has already been applied.

use crate::chart::{ChartOptions, ChartSeries, LegendPosition};

#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub sidebar: Sidebar,
    pub header: Header,
    pub form: SearchForm,
    /// Chart, cards and news; `None` until a report has been received.
    pub body: Option<Body>,
    pub disclaimer: &'static str,
    pub footer: &'static str,
}

impl Page {
    /// Finds a metric card by title.
    pub fn card(&self, title: &str) -> Option<&Card> {
        self.body.as_ref()?.cards.iter().find(|c| c.title == title)
    }

    /// Moves the chart legend; a no-op while there is no chart to draw.
    #[must_use]
    pub fn with_chart_legend(mut self, legend: LegendPosition) -> Self {
        if let Some(body) = self.body.as_mut()
            && let ChartContent::Series { options, .. } = &mut body.chart.content
        {
            options.legend = legend;
        }
        self
    }
}

/// A labelled, already formatted value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sidebar {
    pub title: &'static str,
    pub content: SidebarContent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidebarContent {
    Placeholder(&'static str),
    Officers(Vec<OfficerBlock>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfficerBlock {
    pub name: String,
    pub fields: Vec<Field>,
}

impl OfficerBlock {
    pub fn field(&self, label: &str) -> Option<&str> {
        find_field(&self.fields, label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub title: &'static str,
    pub tagline: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchForm {
    pub value: String,
    pub placeholder: &'static str,
    pub button: &'static str,
    /// At least one request is in flight.
    pub loading: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub chart: ChartPanel,
    pub cards: Vec<Card>,
    pub news: NewsSection,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartPanel {
    pub title: &'static str,
    pub content: ChartContent,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChartContent {
    Series {
        series: ChartSeries,
        options: ChartOptions,
    },
    Placeholder(&'static str),
}

/// Colour role of a card header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Primary,
    Info,
    Success,
    Warning,
    Danger,
    Secondary,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub title: &'static str,
    pub accent: Accent,
    pub headline: Option<String>,
    pub fields: Vec<Field>,
}

impl Card {
    pub fn field(&self, label: &str) -> Option<&str> {
        find_field(&self.fields, label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsSection {
    pub title: &'static str,
    pub content: NewsContent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewsContent {
    Placeholder(&'static str),
    Items(Vec<NewsCard>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsCard {
    pub title: String,
    pub publisher: Option<String>,
    pub link: Option<String>,
    pub link_label: &'static str,
    pub thumbnail_url: String,
}

fn find_field<'a>(fields: &'a [Field], label: &str) -> Option<&'a str> {
    fields
        .iter()
        .find(|f| f.label == label)
        .map(|f| f.value.as_str())
}

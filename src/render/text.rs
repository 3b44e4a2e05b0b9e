//! Plain-text layout of a [`Page`], used for one-shot output.

use std::fmt::Write as _;

use crate::chart::{ChartOptions, ChartSeries, LineChartBackend};
use crate::render::format::plain;

use super::tree::{ChartContent, NewsContent, Page, SidebarContent};

/// Draws a chart as a table: one row per label, one column per dataset.
#[derive(Debug, Default)]
pub struct TextChart {
    out: String,
}

impl TextChart {
    pub fn into_string(self) -> String {
        self.out
    }
}

impl LineChartBackend for TextChart {
    fn draw_line_chart(&mut self, series: &ChartSeries, options: &ChartOptions) {
        let _ = write!(self.out, "{:<12}", options.x_title);
        for d in &series.datasets {
            let _ = write!(self.out, " {:>12}", d.label);
        }
        let _ = writeln!(self.out, "   ({})", options.y_title);

        for (i, label) in series.labels.iter().enumerate() {
            let _ = write!(self.out, "{label:<12}");
            for d in &series.datasets {
                let cell = d.data.get(i).copied().flatten().map_or_else(|| "-".to_string(), plain);
                let _ = write!(self.out, " {cell:>12}");
            }
            self.out.push('\n');
        }
    }
}

/// Lays the page out top to bottom: header, form, officers, chart, cards,
/// news, disclaimer, footer.
pub fn to_text(page: &Page) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", page.header.title);
    let _ = writeln!(out, "{}\n", page.header.tagline);

    let shown = if page.form.value.is_empty() {
        page.form.placeholder
    } else {
        page.form.value.as_str()
    };
    let _ = writeln!(
        out,
        "[{shown}] [{}]{}\n",
        page.form.button,
        if page.form.loading { " loading..." } else { "" }
    );

    let _ = writeln!(out, "== {} ==", page.sidebar.title);
    match &page.sidebar.content {
        SidebarContent::Placeholder(msg) => {
            let _ = writeln!(out, "{msg}");
        }
        SidebarContent::Officers(blocks) => {
            for b in blocks {
                let _ = writeln!(out, "* {}", b.name);
                for f in &b.fields {
                    let _ = writeln!(out, "    {}: {}", f.label, f.value);
                }
            }
        }
    }
    out.push('\n');

    if let Some(body) = &page.body {
        let _ = writeln!(out, "== {} ==", body.chart.title);
        match &body.chart.content {
            ChartContent::Series { series, options } => {
                let mut chart = TextChart::default();
                chart.draw_line_chart(series, options);
                out.push_str(&chart.into_string());
            }
            ChartContent::Placeholder(msg) => {
                let _ = writeln!(out, "{msg}");
            }
        }
        out.push('\n');

        for card in &body.cards {
            let _ = writeln!(out, "== {} ==", card.title);
            if let Some(h) = &card.headline {
                let _ = writeln!(out, "{h}");
            }
            for f in &card.fields {
                let _ = writeln!(out, "  {}: {}", f.label, f.value);
            }
            out.push('\n');
        }

        let _ = writeln!(out, "== {} ==", body.news.title);
        match &body.news.content {
            NewsContent::Placeholder(msg) => {
                let _ = writeln!(out, "{msg}");
            }
            NewsContent::Items(items) => {
                for n in items {
                    let _ = writeln!(out, "* {}", n.title);
                    if let Some(p) = &n.publisher {
                        let _ = writeln!(out, "    Publisher: {p}");
                    }
                    if let Some(link) = &n.link {
                        let _ = writeln!(out, "    {}: {link}", n.link_label);
                    }
                    let _ = writeln!(out, "    Thumbnail: {}", n.thumbnail_url);
                }
            }
        }
        out.push('\n');
    }

    let _ = writeln!(out, "{}", page.disclaimer);
    let _ = writeln!(out, "{}", page.footer);
    out
}

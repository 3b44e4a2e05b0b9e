//! Lays a rendered [`Page`] out on the terminal with ratatui.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{
        Axis, Block, Borders, Chart, Dataset, GraphType, LegendPosition as TuiLegend, Paragraph,
        Wrap,
    },
};
use stockview::chart::{ChartOptions, ChartSeries, LegendPosition, LineChartBackend, Rgb};
use stockview::render::{
    Accent, Body, Card, ChartContent, NewsContent, Page, SearchForm, Sidebar, SidebarContent,
};

pub fn draw(frame: &mut Frame, page: &Page, scroll: u16) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25), Constraint::Percentage(75)])
        .split(frame.area());

    draw_sidebar(frame, &page.sidebar, columns[0]);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Header
            Constraint::Length(3), // Search form
            Constraint::Min(8),    // Report
            Constraint::Length(3), // Disclaimer + footer
        ])
        .split(columns[1]);

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            page.header.title,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            page.header.tagline,
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    frame.render_widget(header, rows[0]);

    draw_form(frame, &page.form, rows[1]);

    if let Some(body) = &page.body {
        draw_body(frame, body, rows[2], scroll);
    }

    let footer = Paragraph::new(vec![
        Line::from(page.disclaimer),
        Line::from(page.footer),
    ])
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    frame.render_widget(footer, rows[3]);
}

fn draw_sidebar(frame: &mut Frame, sidebar: &Sidebar, area: Rect) {
    let lines: Vec<Line> = match &sidebar.content {
        SidebarContent::Placeholder(msg) => vec![Line::from(*msg)],
        SidebarContent::Officers(blocks) => blocks
            .iter()
            .flat_map(|b| {
                let name = Line::from(Span::styled(
                    b.name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ));
                let fields = b.fields.iter().map(|f| {
                    Line::from(vec![
                        Span::styled(format!("{}: ", f.label), Style::default().fg(Color::Gray)),
                        Span::raw(f.value.clone()),
                    ])
                });
                std::iter::once(name).chain(fields).chain(std::iter::once(Line::raw("")))
            })
            .collect(),
    };

    let widget = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", sidebar.title)),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(widget, area);
}

fn draw_form(frame: &mut Frame, form: &SearchForm, area: Rect) {
    let mut spans = if form.value.is_empty() {
        vec![Span::styled(form.placeholder, Style::default().fg(Color::DarkGray))]
    } else {
        vec![Span::raw(form.value.clone())]
    };
    if form.loading {
        spans.push(Span::styled("  loading…", Style::default().fg(Color::Yellow)));
    }

    let widget = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} (Enter) · Esc to quit ", form.button)),
    );
    frame.render_widget(widget, area);

    #[allow(clippy::cast_possible_truncation)]
    let typed = form.value.chars().count().min(usize::from(u16::MAX)) as u16;
    let x = area.x.saturating_add(1).saturating_add(typed);
    frame.set_cursor_position((x.min(area.right().saturating_sub(2)), area.y + 1));
}

fn draw_body(frame: &mut Frame, body: &Body, area: Rect, scroll: u16) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(14), // Chart
            Constraint::Length(24), // Cards
            Constraint::Min(4),     // News
        ])
        .split(area);

    match &body.chart.content {
        ChartContent::Series { series, options } => {
            let mut surface = FrameChart {
                frame: &mut *frame,
                area: rows[0],
                title: body.chart.title,
            };
            surface.draw_line_chart(series, options);
        }
        ChartContent::Placeholder(msg) => {
            let widget = Paragraph::new(*msg)
                .style(Style::default().fg(Color::DarkGray))
                .block(titled(body.chart.title, Color::DarkGray));
            frame.render_widget(widget, rows[0]);
        }
    }

    draw_cards(frame, &body.cards, rows[1]);

    let news_lines: Vec<Line> = match &body.news.content {
        NewsContent::Placeholder(msg) => vec![Line::from(*msg)],
        NewsContent::Items(items) => items
            .iter()
            .flat_map(|n| {
                let mut lines = vec![Line::from(Span::styled(
                    n.title.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ))];
                if let Some(p) = &n.publisher {
                    lines.push(Line::from(Span::styled(
                        format!("Publisher: {p}"),
                        Style::default().fg(Color::DarkGray),
                    )));
                }
                if let Some(link) = &n.link {
                    lines.push(Line::from(vec![
                        Span::raw(format!("{}: ", n.link_label)),
                        Span::styled(link.clone(), Style::default().fg(Color::Blue)),
                    ]));
                }
                lines.push(Line::from(Span::styled(
                    format!("Image: {}", n.thumbnail_url),
                    Style::default().fg(Color::DarkGray),
                )));
                lines.push(Line::raw(""));
                lines
            })
            .collect(),
    };
    let news = Paragraph::new(news_lines)
        .block(titled(body.news.title, Color::White))
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(news, rows[2]);
}

fn draw_cards(frame: &mut Frame, cards: &[Card], area: Rect) {
    let bands = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    for (band, chunk) in bands.iter().zip(cards.chunks(3)) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 3); 3])
            .split(*band);
        for (slot, card) in cols.iter().zip(chunk) {
            draw_card(frame, card, *slot);
        }
    }
}

fn draw_card(frame: &mut Frame, card: &Card, area: Rect) {
    let mut lines = Vec::with_capacity(card.fields.len() + 1);
    if let Some(h) = &card.headline {
        lines.push(Line::from(Span::styled(
            h.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )));
    }
    lines.extend(card.fields.iter().map(|f| {
        Line::from(vec![
            Span::styled(
                format!("{}: ", f.label),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(f.value.clone()),
        ])
    }));

    let widget = Paragraph::new(lines)
        .block(titled(card.title, accent_color(card.accent)))
        .wrap(Wrap { trim: true });
    frame.render_widget(widget, area);
}

fn titled(title: &str, color: Color) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
}

const fn accent_color(accent: Accent) -> Color {
    match accent {
        Accent::Primary => Color::Blue,
        Accent::Info => Color::Cyan,
        Accent::Success => Color::Green,
        Accent::Warning => Color::Yellow,
        Accent::Danger => Color::Red,
        Accent::Secondary => Color::Gray,
    }
}

const fn tui_color(c: Rgb) -> Color {
    Color::Rgb(c.0, c.1, c.2)
}

/// ratatui's `Chart` widget behind the crate's chart capability.
struct FrameChart<'a, 'f> {
    frame: &'a mut Frame<'f>,
    area: Rect,
    title: &'static str,
}

impl LineChartBackend for FrameChart<'_, '_> {
    fn draw_line_chart(&mut self, series: &ChartSeries, options: &ChartOptions) {
        #[allow(clippy::cast_precision_loss)]
        let points: Vec<Vec<(f64, f64)>> = series
            .datasets
            .iter()
            .map(|d| {
                d.data
                    .iter()
                    .enumerate()
                    .filter_map(|(i, v)| v.map(|y| (i as f64, y)))
                    .collect()
            })
            .collect();

        let datasets = series
            .datasets
            .iter()
            .zip(&points)
            .map(|(d, pts)| {
                Dataset::default()
                    .name(d.label)
                    .marker(symbols::Marker::Braille)
                    .graph_type(GraphType::Line)
                    .style(Style::default().fg(tui_color(d.color)))
                    .data(pts)
            })
            .collect::<Vec<_>>();

        let (lo, hi) = series.y_bounds().unwrap_or((0.0, 1.0));
        let pad = ((hi - lo) * 0.02).max(0.5);
        let (y_min, y_max) = (lo - pad, hi + pad);

        #[allow(clippy::cast_precision_loss)]
        let x_max = series.len().saturating_sub(1).max(1) as f64;

        let x_labels: Vec<Span> = match series.labels.as_slice() {
            [] => Vec::new(),
            [only] => vec![Span::raw(only.clone())],
            [first, .., last] => vec![
                Span::raw(first.clone()),
                Span::raw(series.labels[series.labels.len() / 2].clone()),
                Span::raw(last.clone()),
            ],
        };

        let legend = match options.legend {
            LegendPosition::Top => TuiLegend::Top,
            LegendPosition::Bottom => TuiLegend::Bottom,
        };

        let chart = Chart::new(datasets)
            .block(titled(self.title, Color::White))
            .legend_position(Some(legend))
            .x_axis(
                Axis::default()
                    .title(options.x_title)
                    .style(Style::default().fg(Color::Gray))
                    .bounds([0.0, x_max])
                    .labels(x_labels),
            )
            .y_axis(
                Axis::default()
                    .title(options.y_title)
                    .style(Style::default().fg(Color::Gray))
                    .bounds([y_min, y_max])
                    .labels(vec![
                        Span::raw(format!("{y_min:.1}")),
                        Span::raw(format!("{y_max:.1}")),
                    ]),
            );

        self.frame.render_widget(chart, self.area);
    }
}

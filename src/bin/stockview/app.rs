//! Interactive event loop.
//!
//! Requests run on the tokio runtime and hand their results back over a
//! channel; the view state is only ever touched from this thread.

use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::DefaultTerminal;
use stockview::chart::LegendPosition;
use stockview::{Completion, PredictClient, Resolution, Submission, Ticket, ViewState, render_page};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::draw;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

struct App {
    state: ViewState,
    client: PredictClient,
    runtime: Handle,
    tx: Sender<Completion>,
    rx: Receiver<Completion>,
    /// The newest request, kept so it can be aborted when superseded.
    latest_task: Option<(Ticket, JoinHandle<()>)>,
    legend: LegendPosition,
    scroll: u16,
    should_quit: bool,
}

pub fn run(
    runtime: Handle,
    client: PredictClient,
    resolution: Resolution,
    legend: LegendPosition,
    initial_symbol: Option<String>,
) -> Result<()> {
    let (tx, rx) = mpsc::channel();
    let mut app = App {
        state: ViewState::new(resolution),
        client,
        runtime,
        tx,
        rx,
        latest_task: None,
        legend,
        scroll: 0,
        should_quit: false,
    };

    let mut terminal = ratatui::try_init()?;

    if let Some(symbol) = initial_symbol {
        app.state.query_mut().symbol = symbol;
        app.submit();
    }

    let result = app.event_loop(&mut terminal);
    ratatui::restore();
    result
}

impl App {
    fn event_loop(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while !self.should_quit {
            self.drain_completions();

            let page = render_page(&self.state).with_chart_legend(self.legend);
            terminal.draw(|f| draw::draw(f, &page, self.scroll))?;

            if event::poll(POLL_INTERVAL)?
                && let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                self.on_key(key);
            }
        }
        Ok(())
    }

    fn on_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => self.state.query_mut().backspace(),
            KeyCode::Char(c) => self.state.query_mut().push(c),
            KeyCode::Down => self.scroll = self.scroll.saturating_add(1),
            KeyCode::Up => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::PageDown => self.scroll = self.scroll.saturating_add(10),
            KeyCode::PageUp => self.scroll = self.scroll.saturating_sub(10),
            _ => {}
        }
    }

    /// Posts the current input. Under `LatestSubmitted` the previous request,
    /// if still running, is aborted first.
    fn submit(&mut self) {
        let Submission { ticket, symbol } = self.state.begin_submit();

        if self.state.resolution() == Resolution::LatestSubmitted
            && let Some((old, handle)) = self.latest_task.take()
        {
            handle.abort();
            self.state.cancel(old);
        }

        let client = self.client.clone();
        let tx = self.tx.clone();
        let handle = self.runtime.spawn(async move {
            let result = client.submit(&symbol).await;
            // The receiver only disappears when the UI has exited.
            let _ = tx.send(Completion {
                ticket,
                symbol,
                result,
            });
        });
        self.latest_task = Some((ticket, handle));
    }

    fn drain_completions(&mut self) {
        while let Ok(done) = self.rx.try_recv() {
            if self
                .latest_task
                .as_ref()
                .is_some_and(|(t, _)| *t == done.ticket)
            {
                self.latest_task = None;
            }
            self.state.apply_completion(done);
        }
    }
}

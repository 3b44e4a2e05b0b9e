//! The single view-state cell.
//!
//! One writer ([`ViewState::apply_completion`]) and many readers (the render
//! functions). Writes only ever happen on the UI thread.

use std::collections::BTreeSet;

use crate::core::PredictError;
use crate::report::StockReport;

/// The text currently in the search box.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickerQuery {
    pub symbol: String,
}

impl TickerQuery {
    pub fn push(&mut self, c: char) {
        self.symbol.push(c);
    }

    pub fn backspace(&mut self) {
        self.symbol.pop();
    }

    pub fn clear(&mut self) {
        self.symbol.clear();
    }
}

/// How overlapping submissions are reconciled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Resolution {
    /// Only the most recently submitted request may update the view.
    #[default]
    LatestSubmitted,
    /// Whichever response arrives last wins, regardless of submission order.
    LastResolved,
}

/// Identifies one submission; later submissions get larger tickets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

/// What the caller needs to issue the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub ticket: Ticket,
    pub symbol: String,
}

/// The outcome of one request, delivered back to the UI thread.
#[derive(Debug)]
pub struct Completion {
    pub ticket: Ticket,
    pub symbol: String,
    pub result: Result<StockReport, PredictError>,
}

/// What [`ViewState::apply_completion`] did with a completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// The report replaced whatever was shown before.
    Replaced,
    /// A newer submission exists; the report was dropped.
    Superseded,
    /// The request failed; nothing changed.
    Failed,
}

/// Coarse screen state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Loaded,
}

#[derive(Debug, Default)]
pub struct ViewState {
    query: TickerQuery,
    report: Option<StockReport>,
    resolution: Resolution,
    issued: u64,
    latest: Option<Ticket>,
    pending: BTreeSet<Ticket>,
}

impl ViewState {
    pub fn new(resolution: Resolution) -> Self {
        Self {
            resolution,
            ..Self::default()
        }
    }

    pub fn query(&self) -> &TickerQuery {
        &self.query
    }

    pub fn query_mut(&mut self) -> &mut TickerQuery {
        &mut self.query
    }

    /// The last accepted report, if any.
    pub fn report(&self) -> Option<&StockReport> {
        self.report.as_ref()
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// Number of requests issued but not yet completed.
    pub fn in_flight(&self) -> usize {
        self.pending.len()
    }

    pub fn phase(&self) -> Phase {
        if !self.pending.is_empty() {
            Phase::Loading
        } else if self.report.is_some() {
            Phase::Loaded
        } else {
            Phase::Idle
        }
    }

    /// Registers a new submission of the current input, taken verbatim.
    pub fn begin_submit(&mut self) -> Submission {
        self.issued += 1;
        let ticket = Ticket(self.issued);
        self.latest = Some(ticket);
        self.pending.insert(ticket);
        tracing::debug!(ticket = ticket.0, symbol = %self.query.symbol, "submitting");
        Submission {
            ticket,
            symbol: self.query.symbol.clone(),
        }
    }

    /// Marks a submission as abandoned without a result (its task was aborted).
    pub fn cancel(&mut self, ticket: Ticket) {
        if self.pending.remove(&ticket) {
            tracing::debug!(ticket = ticket.0, "request cancelled");
        }
    }

    /// Applies a finished request.
    ///
    /// Failures are logged once and leave the view untouched. Successes
    /// replace the report wholesale unless the resolution policy says a
    /// newer submission takes precedence.
    pub fn apply_completion(&mut self, done: Completion) -> Applied {
        self.pending.remove(&done.ticket);

        let report = match done.result {
            Ok(report) => report,
            Err(e) => {
                tracing::error!(symbol = %done.symbol, error = %e, "error fetching stock data");
                return Applied::Failed;
            }
        };

        if self.resolution == Resolution::LatestSubmitted && self.latest != Some(done.ticket) {
            tracing::debug!(
                ticket = done.ticket.0,
                symbol = %done.symbol,
                "dropping response from superseded submission"
            );
            return Applied::Superseded;
        }

        tracing::info!(symbol = %done.symbol, "report received");
        self.report = Some(report);
        Applied::Replaced
    }
}

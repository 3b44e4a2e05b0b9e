use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use stockview::Resolution;
use stockview::chart::LegendPosition;
use url::Url;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Prediction endpoint the ticker is posted to.
    #[arg(long, env = "PREDICTION_API_URL")]
    pub api_url: Url,

    /// Overall request timeout; requests never time out when omitted.
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// How overlapping submissions are reconciled.
    #[arg(long, value_enum, default_value = "latest-submitted")]
    pub resolution: ResolutionArg,

    /// Where the chart legend is drawn.
    #[arg(long, value_enum, default_value = "top")]
    pub legend: LegendArg,

    /// Symbol to submit immediately on start.
    #[arg(long)]
    pub symbol: Option<String>,

    /// Print a single plain-text report for `--symbol` and exit.
    #[arg(long, requires = "symbol")]
    pub once: bool,

    /// Where the interactive UI writes its log.
    #[arg(long, default_value = "stockview.log")]
    pub log_file: PathBuf,
}

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum ResolutionArg {
    /// Only the newest submission may update the screen; older requests are aborted.
    LatestSubmitted,
    /// The response that arrives last wins.
    LastResolved,
}

impl From<ResolutionArg> for Resolution {
    fn from(arg: ResolutionArg) -> Self {
        match arg {
            ResolutionArg::LatestSubmitted => Self::LatestSubmitted,
            ResolutionArg::LastResolved => Self::LastResolved,
        }
    }
}

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum LegendArg {
    Top,
    Bottom,
}

impl From<LegendArg> for LegendPosition {
    fn from(arg: LegendArg) -> Self {
        match arg {
            LegendArg::Top => Self::Top,
            LegendArg::Bottom => Self::Bottom,
        }
    }
}

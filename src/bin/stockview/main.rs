use std::time::Duration;

use anyhow::{Result, bail};
use clap::Parser;
use stockview::render::text::to_text;
use stockview::{Completion, PredictClient, Resolution, ViewState, render_page};
use tokio::runtime::Runtime;

mod app;
mod cli;
mod draw;
mod logging;

fn preprocess() {
    // grant access to .env
    dotenv::dotenv().ok();
}

fn main() -> Result<()> {
    preprocess();
    let cli = cli::Cli::parse();

    let target = if cli.once {
        logging::LogTarget::Stderr
    } else {
        logging::LogTarget::File(cli.log_file.clone())
    };
    logging::init(target)?;
    tracing::debug!("Command line input recorded: {cli:?}");

    let mut builder = PredictClient::builder().endpoint(cli.api_url.clone());
    if let Some(secs) = cli.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    let client = builder.build()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    match (cli.once, cli.symbol) {
        (true, Some(symbol)) => run_once(&runtime, &client, symbol),
        (_, symbol) => app::run(
            runtime.handle().clone(),
            client,
            cli.resolution.into(),
            cli.legend.into(),
            symbol,
        ),
    }
}

/// Submits one symbol, prints the rendered page, and fails if the request did.
fn run_once(runtime: &Runtime, client: &PredictClient, symbol: String) -> Result<()> {
    let mut state = ViewState::new(Resolution::LatestSubmitted);
    state.query_mut().symbol = symbol;

    let sub = state.begin_submit();
    let result = runtime.block_on(client.submit(&sub.symbol));
    let failed = result.is_err();
    state.apply_completion(Completion {
        ticket: sub.ticket,
        symbol: sub.symbol.clone(),
        result,
    });

    print!("{}", to_text(&render_page(&state)));

    if failed {
        bail!("request for {:?} failed; see log output", sub.symbol);
    }
    Ok(())
}

#![allow(dead_code)]

use std::io;
use std::sync::{Arc, Mutex};
use std::{fs, path::PathBuf};

use httpmock::MockServer;
use stockview::{PredictClient, StockReport, parse_report};
use tracing_subscriber::fmt::MakeWriter;
use url::Url;

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

pub fn read_fixture(name: &str) -> String {
    fs::read_to_string(fixtures_dir().join(name)).unwrap()
}

/// The recorded TSLA report, decoded.
pub fn tsla_report() -> StockReport {
    parse_report(&read_fixture("report_TSLA.json")).unwrap()
}

/// A client pointed at `/predict` on the mock server.
pub fn client_for(server: &MockServer) -> PredictClient {
    PredictClient::builder()
        .endpoint(Url::parse(&format!("{}/predict", server.base_url())).unwrap())
        .build()
        .unwrap()
}

/// In-memory log sink for asserting on emitted diagnostics.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }

    pub fn count_level(&self, level: &str) -> usize {
        self.contents()
            .lines()
            .filter(|l| l.contains(level))
            .count()
    }

    /// Installs a subscriber capturing everything on the current thread.
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(self.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

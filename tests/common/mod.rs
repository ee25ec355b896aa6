#![allow(dead_code)]

use httpmock::{Method::GET, Mock, MockServer};
use idx_alert::{IdxClient, MatchResult, Notifier, NotifyOutcome, IdxError};
use idx_alert::notify::NotifyFuture;
use std::sync::Mutex;
use std::{fs, path::Path};
use url::Url;

pub const ENDPOINT: &str = "/primary/NewsAnnouncement/GetNewsAnnouncement";

pub fn fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(format!("{name}.json"));
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

pub fn client_for(server: &MockServer) -> IdxClient {
    IdxClient::builder()
        .base_announcements(Url::parse(&format!("{}{}", server.base_url(), ENDPOINT)).unwrap())
        .build()
        .unwrap()
}

pub fn mock_page<'a>(server: &'a MockServer, body: &str) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET).path(ENDPOINT);
        then.status(200)
            .header("content-type", "application/json")
            .body(body);
    })
}

/// Records every batch it receives and answers with a fixed result.
pub struct RecordingNotifier {
    pub batches: Mutex<Vec<Vec<MatchResult>>>,
    fail: bool,
    outcome: NotifyOutcome,
}

impl RecordingNotifier {
    pub fn sending() -> Self {
        Self { batches: Mutex::new(Vec::new()), fail: false, outcome: NotifyOutcome::Sent }
    }

    pub fn skipping() -> Self {
        Self { batches: Mutex::new(Vec::new()), fail: false, outcome: NotifyOutcome::Skipped }
    }

    pub fn failing() -> Self {
        Self { batches: Mutex::new(Vec::new()), fail: true, outcome: NotifyOutcome::Sent }
    }

    pub fn calls(&self) -> usize {
        self.batches.lock().unwrap().len()
    }
}

impl Notifier for RecordingNotifier {
    fn notify<'a>(&'a self, matches: &'a [MatchResult]) -> NotifyFuture<'a> {
        self.batches.lock().unwrap().push(matches.to_vec());
        let result = if self.fail {
            Err(IdxError::Config("smtp unreachable".to_string()))
        } else {
            Ok(self.outcome)
        };
        Box::pin(async move { result })
    }
}

use chrono::{DateTime, TimeZone, Utc};
use httpmock::Method::GET;
use httpmock::MockServer;
use idx_alert::{Config, KeywordSet, RunOutcome, run_once};

use crate::common::{ENDPOINT, RecordingNotifier, client_for, fixture, mock_page};

/// 2024-05-02 14:10:00 WIB; the 40 minute window opens at 13:30:00 WIB.
fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 2, 7, 10, 0).unwrap()
}

#[tokio::test]
async fn matches_in_window_are_sent_in_feed_order() {
    let server = MockServer::start();
    let mock = mock_page(&server, &fixture("announcements_page"));
    let notifier = RecordingNotifier::sending();

    let outcome = run_once(
        &client_for(&server),
        &Config::default(),
        &KeywordSet::default(),
        &notifier,
        now(),
    )
    .await;
    mock.assert();

    assert_eq!(outcome, RunOutcome::Notified { matches: 2 });
    let batches = notifier.batches.lock().unwrap();
    assert_eq!(batches.len(), 1);
    let codes: Vec<_> = batches[0].iter().filter_map(|m| m.code.as_deref()).collect();
    // The 13:30:00 tender offer sits exactly on the boundary and is left out.
    assert_eq!(codes, ["BRMS", "PTBA"]);
    assert_eq!(batches[0][0].published_at, "2024-05-02T14:05:33");
}

#[tokio::test]
async fn empty_keyword_set_never_invokes_notifier() {
    let server = MockServer::start();
    let _mock = mock_page(&server, &fixture("announcements_page"));
    let notifier = RecordingNotifier::sending();

    let outcome = run_once(
        &client_for(&server),
        &Config::default(),
        &KeywordSet::empty(),
        &notifier,
        now(),
    )
    .await;

    assert_eq!(outcome, RunOutcome::NoMatches { checked: 6 });
    assert_eq!(notifier.calls(), 0);
}

#[tokio::test]
async fn fetch_failure_stops_the_run() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path(ENDPOINT);
        then.status(503).body("Service Unavailable");
    });
    let notifier = RecordingNotifier::sending();

    let outcome = run_once(
        &client_for(&server),
        &Config::default(),
        &KeywordSet::default(),
        &notifier,
        now(),
    )
    .await;

    // No in-process retry.
    mock.assert_hits(1);
    assert_eq!(outcome, RunOutcome::FetchFailed);
    assert_eq!(notifier.calls(), 0);
}

#[tokio::test]
async fn notifier_failure_is_absorbed() {
    let server = MockServer::start();
    let _mock = mock_page(&server, &fixture("announcements_page"));
    let notifier = RecordingNotifier::failing();

    let outcome = run_once(
        &client_for(&server),
        &Config::default(),
        &KeywordSet::default(),
        &notifier,
        now(),
    )
    .await;

    assert_eq!(outcome, RunOutcome::NotifyFailed { matches: 2 });
    assert_eq!(notifier.calls(), 1);
}

#[tokio::test]
async fn unconfigured_delivery_is_reported_as_skipped() {
    let server = MockServer::start();
    let _mock = mock_page(&server, &fixture("announcements_page"));
    let notifier = RecordingNotifier::skipping();

    let outcome = run_once(
        &client_for(&server),
        &Config::default(),
        &KeywordSet::default(),
        &notifier,
        now(),
    )
    .await;

    assert_eq!(outcome, RunOutcome::NotifySkipped { matches: 2 });
}

#[tokio::test]
async fn config_controls_page_size_language_and_window() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path(ENDPOINT)
            .query_param("pageSize", "20")
            .query_param("lang", "en");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("announcements_page"));
    });
    let notifier = RecordingNotifier::sending();
    let config = Config {
        page_size: 20,
        lang: "en".to_string(),
        window_minutes: 10,
        ..Config::default()
    };

    let outcome = run_once(
        &client_for(&server),
        &config,
        &KeywordSet::default(),
        &notifier,
        now(),
    )
    .await;
    mock.assert();

    // Only the 14:05:33 record is inside a 10 minute window.
    assert_eq!(outcome, RunOutcome::Notified { matches: 1 });
}

#[tokio::test]
async fn record_at_extreme_year_does_not_abort_the_run() {
    let server = MockServer::start();
    let _mock = mock_page(
        &server,
        r#"{"Results": [
            {"EmitenCode": "EDGE", "Title": "Akuisisi", "PublishedDate": "-262143-01-01T03:00:00"},
            {"EmitenCode": "BRMS", "Title": "Rencana Akuisisi", "PublishedDate": "2024-05-02T14:05:33"},
            {"EmitenCode": "PTBA", "Title": "Kontrak Baru", "PublishedDate": "2024-05-02T13:31:02"}
        ]}"#,
    );
    let notifier = RecordingNotifier::sending();

    let outcome = run_once(
        &client_for(&server),
        &Config::default(),
        &KeywordSet::default(),
        &notifier,
        now(),
    )
    .await;

    assert_eq!(outcome, RunOutcome::Notified { matches: 2 });
    let batches = notifier.batches.lock().unwrap();
    let codes: Vec<_> = batches[0].iter().filter_map(|m| m.code.as_deref()).collect();
    assert_eq!(codes, ["BRMS", "PTBA"]);
}

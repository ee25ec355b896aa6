//! One scheduled pass: fetch, filter, notify.

use chrono::{DateTime, Utc};

use crate::{
    announcements::AnnouncementsBuilder,
    config::Config,
    core::IdxClient,
    matcher::{KeywordSet, filter_recent_matches, window_threshold},
    notify::{Notifier, NotifyOutcome},
};

/// How a run ended. Every variant is a normal termination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The feed could not be read; nothing was matched or sent.
    FetchFailed,
    /// The feed was read but nothing in the window matched.
    NoMatches { checked: usize },
    /// Matches were delivered.
    Notified { matches: usize },
    /// Matches were found but delivery is not configured.
    NotifySkipped { matches: usize },
    /// Matches were found but delivery failed; they are lost for this run.
    NotifyFailed { matches: usize },
}

/// Runs the pipeline once against `now`.
///
/// Failures are logged and folded into the returned [`RunOutcome`]; nothing
/// propagates to the caller.
pub async fn run_once(
    client: &IdxClient,
    config: &Config,
    keywords: &KeywordSet,
    notifier: &dyn Notifier,
    now: DateTime<Utc>,
) -> RunOutcome {
    tracing::info!("fetching data from IDX");
    let records = match AnnouncementsBuilder::new(client)
        .page_size(config.page_size)
        .lang(config.lang.clone())
        .fetch()
        .await
    {
        Ok(r) => r,
        Err(e) => {
            tracing::error!(error = %e, "error fetching announcements");
            return RunOutcome::FetchFailed;
        }
    };

    let threshold = window_threshold(now, config.window_minutes);
    tracing::info!(
        "checking news published after {} UTC",
        threshold.format("%H:%M")
    );

    let matches = filter_recent_matches(&records, keywords, now, config.window_minutes);
    if matches.is_empty() {
        tracing::info!(
            "checked {} items, no new matches in the last {} minutes",
            records.len(),
            config.window_minutes
        );
        return RunOutcome::NoMatches {
            checked: records.len(),
        };
    }

    let count = matches.len();
    match notifier.notify(&matches).await {
        Ok(NotifyOutcome::Sent) => RunOutcome::Notified { matches: count },
        Ok(NotifyOutcome::Skipped) => RunOutcome::NotifySkipped { matches: count },
        Err(e) => {
            tracing::error!(error = %e, "email failed");
            RunOutcome::NotifyFailed { matches: count }
        }
    }
}

//! Time-windowed keyword matching over fetched announcements.
//!
//! The feed publishes naive exchange-local timestamps (WIB). They are converted
//! to UTC with a fixed offset before being compared against the window, so all
//! comparisons happen on one time reference.

mod keywords;

pub use keywords::KeywordSet;

use chrono::{DateTime, NaiveDateTime, TimeDelta, Utc};

use crate::announcements::Announcement;

/// Hours the exchange's local clock runs ahead of UTC. The exchange has no DST.
pub const EXCHANGE_UTC_OFFSET_HOURS: i64 = 7;

/// Trailing window used by the scheduled run.
pub const DEFAULT_WINDOW_MINUTES: i64 = 40;

/// Format of the feed's `PublishedDate` field.
pub const PUBLISHED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// An announcement that fell inside the window and hit a keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    /// Ticker code of the issuer, when the feed provided one.
    pub code: Option<String>,
    /// The headline as received.
    pub title: String,
    /// The exchange-local timestamp string as received, unconverted.
    pub published_at: String,
}

/// Parses a feed timestamp (`YYYY-MM-DDTHH:MM:SS`, exchange-local, no offset).
pub fn parse_published_at(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, PUBLISHED_AT_FORMAT).ok()
}

/// Converts an exchange-local timestamp to a UTC instant.
///
/// Returns `None` when the shift leaves chrono's representable range.
pub fn local_to_utc(local: NaiveDateTime) -> Option<DateTime<Utc>> {
    local
        .checked_sub_signed(TimeDelta::hours(EXCHANGE_UTC_OFFSET_HOURS))
        .map(|utc| utc.and_utc())
}

/// Converts a UTC instant to the exchange's local wall clock.
pub fn utc_to_local(instant: DateTime<Utc>) -> NaiveDateTime {
    let naive = instant.naive_utc();
    naive
        .checked_add_signed(TimeDelta::hours(EXCHANGE_UTC_OFFSET_HOURS))
        .unwrap_or(naive)
}

/// Start of the trailing window, `now - window_minutes`.
///
/// A window too large for chrono saturates to the earliest representable
/// instant, so every parseable record counts as recent.
pub fn window_threshold(now: DateTime<Utc>, window_minutes: i64) -> DateTime<Utc> {
    TimeDelta::try_minutes(window_minutes)
        .and_then(|window| now.checked_sub_signed(window))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Returns the records published strictly after `now - window_minutes` whose
/// lower-cased title contains at least one keyword, in input order.
///
/// Records with a missing, empty or malformed `published_at` are skipped.
pub fn filter_recent_matches(
    records: &[Announcement],
    keywords: &KeywordSet,
    now: DateTime<Utc>,
    window_minutes: i64,
) -> Vec<MatchResult> {
    let threshold = window_threshold(now, window_minutes);

    records
        .iter()
        .filter_map(|record| {
            let raw = record.published_at.as_deref().filter(|s| !s.is_empty())?;
            let published = local_to_utc(parse_published_at(raw)?)?;
            if published <= threshold {
                return None;
            }
            if !keywords.matches(&record.title) {
                return None;
            }

            tracing::info!(code = record.code.as_deref().unwrap_or(""), "match found");
            Some(MatchResult {
                code: record.code.clone(),
                title: record.title.clone(),
                published_at: raw.to_string(),
            })
        })
        .collect()
}

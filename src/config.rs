//! Runtime configuration read from environment variables.

use std::ops::RangeInclusive;
use std::str::FromStr;
use std::time::Duration;

use crate::announcements::{DEFAULT_LANG, DEFAULT_PAGE_SIZE};
use crate::matcher::DEFAULT_WINDOW_MINUTES;

/// Default SMTP relay.
pub const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";
/// SMTP submission port (STARTTLS).
pub const DEFAULT_SMTP_PORT: u16 = 587;
/// Overall HTTP timeout for the feed request.
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Accepted trailing windows: one minute up to one week.
const WINDOW_MINUTES_RANGE: RangeInclusive<i64> = 1..=10_080;
const PAGE_SIZE_RANGE: RangeInclusive<u32> = 1..=1_000;
const SMTP_PORT_RANGE: RangeInclusive<u16> = 1..=u16::MAX;
const HTTP_TIMEOUT_SECS_RANGE: RangeInclusive<u64> = 1..=600;

/// Settings for one run.
///
/// Sender and password are optional: without them the run still fetches and
/// matches, but the email step is skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub sender: Option<String>,
    pub password: Option<String>,
    pub recipient: Option<String>,
    pub smtp_host: String,
    pub smtp_port: u16,
    pub window_minutes: i64,
    pub page_size: u32,
    pub lang: String,
    pub http_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sender: None,
            password: None,
            recipient: None,
            smtp_host: DEFAULT_SMTP_HOST.to_string(),
            smtp_port: DEFAULT_SMTP_PORT,
            window_minutes: DEFAULT_WINDOW_MINUTES,
            page_size: DEFAULT_PAGE_SIZE,
            lang: DEFAULT_LANG.to_string(),
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Reads the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Self {
            sender: get("EMAIL_SENDER"),
            password: get("EMAIL_PASSWORD"),
            recipient: get("EMAIL_RECIPIENT"),
            smtp_host: get("SMTP_HOST").unwrap_or(defaults.smtp_host),
            smtp_port: parse_in(
                get("SMTP_PORT"),
                "SMTP_PORT",
                SMTP_PORT_RANGE,
                defaults.smtp_port,
            ),
            window_minutes: parse_in(
                get("IDX_WINDOW_MINUTES"),
                "IDX_WINDOW_MINUTES",
                WINDOW_MINUTES_RANGE,
                defaults.window_minutes,
            ),
            page_size: parse_in(
                get("IDX_PAGE_SIZE"),
                "IDX_PAGE_SIZE",
                PAGE_SIZE_RANGE,
                defaults.page_size,
            ),
            lang: get("IDX_LANG").unwrap_or(defaults.lang),
            http_timeout_secs: parse_in(
                get("IDX_HTTP_TIMEOUT_SECS"),
                "IDX_HTTP_TIMEOUT_SECS",
                HTTP_TIMEOUT_SECS_RANGE,
                defaults.http_timeout_secs,
            ),
        }
    }

    /// Overall timeout applied to the feed request.
    pub const fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    /// True when both sender address and secret are present.
    pub fn has_credentials(&self) -> bool {
        self.sender.is_some() && self.password.is_some()
    }
}

fn parse_in<T>(raw: Option<String>, key: &str, range: RangeInclusive<T>, default: T) -> T
where
    T: FromStr + PartialOrd + Copy,
{
    let Some(v) = raw else {
        return default;
    };
    match v.trim().parse::<T>() {
        Ok(parsed) if range.contains(&parsed) => parsed,
        _ => {
            tracing::warn!(key, value = %v, "unparseable or out-of-range value, using default");
            default
        }
    }
}

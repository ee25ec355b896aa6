/// A single disclosure as listed by the feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    /// Ticker code of the issuer (e.g. "BBCA"). `None` when absent or blank.
    pub code: Option<String>,
    /// The headline. Empty when the feed omitted it.
    pub title: String,
    /// Exchange-local publish time as sent by the feed (`YYYY-MM-DDTHH:MM:SS`).
    pub published_at: Option<String>,
}

//! Centralized constants for the default endpoint and the browser disguise headers.

/// Desktop Chrome UA; the feed rejects obvious non-browser clients.
pub(crate) const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/120.0.0.0 Safari/537.36"
);

/// IDX announcement listing endpoint.
pub(crate) const DEFAULT_BASE_ANNOUNCEMENTS: &str =
    "https://www.idx.co.id/primary/NewsAnnouncement/GetNewsAnnouncement";

/// The disclosure page that issues the AJAX call in a real browser.
pub(crate) const REFERER: &str = "https://www.idx.co.id/id/berita/keterbukaan-informasi/";

pub(crate) const ACCEPT: &str = "application/json, text/javascript, */*; q=0.01";

pub(crate) const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9,id;q=0.8";

/// `X-Requested-With` and `Sec-Fetch-*` hints of an in-page XHR.
pub(crate) const XHR_HINTS: [(&str, &str); 4] = [
    ("x-requested-with", "XMLHttpRequest"),
    ("sec-fetch-dest", "empty"),
    ("sec-fetch-mode", "cors"),
    ("sec-fetch-site", "same-origin"),
];

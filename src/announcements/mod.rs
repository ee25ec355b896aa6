mod api;
mod model;
mod wire;

pub use model::Announcement;

use chrono::{Datelike, Utc};

use crate::{IdxClient, IdxError, matcher::utc_to_local};

/// First page of the listing.
pub const DEFAULT_INDEX_FROM: u32 = 0;
/// Page size of the scheduled run.
pub const DEFAULT_PAGE_SIZE: u32 = 50;
/// Locale of the listing (`id` = Bahasa Indonesia titles).
pub const DEFAULT_LANG: &str = "id";

/// A builder for fetching one page of the disclosure listing.
pub struct AnnouncementsBuilder {
    client: IdxClient,
    index_from: u32,
    page_size: u32,
    year: Option<i32>,
    lang: String,
}

impl AnnouncementsBuilder {
    /// Creates a new `AnnouncementsBuilder` with the default page parameters.
    pub fn new(client: &IdxClient) -> Self {
        Self {
            client: client.clone(),
            index_from: DEFAULT_INDEX_FROM,
            page_size: DEFAULT_PAGE_SIZE,
            year: None,
            lang: DEFAULT_LANG.to_string(),
        }
    }

    /// Sets the zero-based index of the first record.
    #[must_use]
    pub const fn index_from(mut self, index_from: u32) -> Self {
        self.index_from = index_from;
        self
    }

    /// Sets the number of records requested.
    #[must_use]
    pub const fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Sets the listing year. Defaults to the current year on the exchange's clock.
    #[must_use]
    pub const fn year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Sets the two-letter locale code.
    #[must_use]
    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    /// Executes the request and returns the listed announcements in feed order.
    ///
    /// # Errors
    ///
    /// Returns an `IdxError` on transport failure, on any status other than
    /// 200 OK, or if the body is not valid JSON. A body without `Results`
    /// yields an empty list.
    pub async fn fetch(self) -> Result<Vec<Announcement>, IdxError> {
        let year = self
            .year
            .unwrap_or_else(|| utc_to_local(Utc::now()).year());
        api::fetch_announcements(
            &self.client,
            self.index_from,
            self.page_size,
            year,
            &self.lang,
        )
        .await
    }
}

use crate::{
    announcements::{model::Announcement, wire},
    core::{IdxClient, IdxError, net},
};

pub(super) async fn fetch_announcements(
    client: &IdxClient,
    index_from: u32,
    page_size: u32,
    year: i32,
    lang: &str,
) -> Result<Vec<Announcement>, IdxError> {
    let mut url = client.base_announcements().clone();
    url.query_pairs_mut()
        .append_pair("indexFrom", &index_from.to_string())
        .append_pair("pageSize", &page_size.to_string())
        .append_pair("year", &year.to_string())
        .append_pair("lang", lang);

    tracing::info!(%url, "fetching announcements");
    let resp = client.http().get(url).send().await?;

    if resp.status() != reqwest::StatusCode::OK {
        let status = resp.status().as_u16();
        let url = resp.url().to_string();
        let body = resp.text().await.unwrap_or_default();
        let snippet: String = body.chars().take(100).collect();
        tracing::warn!(status, body = %snippet, "announcement feed refused the request");
        return Err(IdxError::Status { status, url });
    }

    let body = net::get_text(resp, "announcements").await?;
    let envelope: wire::AnnouncementEnvelope = serde_json::from_str(&body)?;

    let results = envelope
        .results
        .unwrap_or_default()
        .into_iter()
        .map(|raw| Announcement {
            code: raw
                .emiten_code
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty()),
            title: raw.title.unwrap_or_default(),
            published_at: raw.published_date,
        })
        .collect();

    Ok(results)
}

use serde::Deserialize;

#[derive(Deserialize)]
pub(crate) struct AnnouncementEnvelope {
    #[serde(rename = "Results")]
    pub(crate) results: Option<Vec<RawAnnouncement>>,
}

#[derive(Deserialize)]
pub(crate) struct RawAnnouncement {
    #[serde(rename = "EmitenCode")]
    pub(crate) emiten_code: Option<String>,
    #[serde(rename = "Title")]
    pub(crate) title: Option<String>,
    #[serde(rename = "PublishedDate")]
    pub(crate) published_date: Option<String>,
}

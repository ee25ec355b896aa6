/// Read the response body as text, logging its size under the given endpoint label.
pub(crate) async fn get_text(
    resp: reqwest::Response,
    endpoint: &str,
) -> Result<String, reqwest::Error> {
    let text = resp.text().await?;
    tracing::debug!(endpoint, bytes = text.len(), "response body received");
    Ok(text)
}

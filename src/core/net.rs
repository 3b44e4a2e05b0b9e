/// Read the response body as text, tracing its size.
pub(crate) async fn get_text(resp: reqwest::Response, symbol: &str) -> Result<String, reqwest::Error> {
    let text = resp.text().await?;
    tracing::trace!(symbol, bytes = text.len(), "read report body");
    Ok(text)
}

use crate::download_client::DownloadClient;
use scraper::Html;

/// Fetches `url` and parses it as an HTML listing.
///
/// A failed request is logged and yields `None`: the caller then works with an empty link
/// set instead of aborting. The body itself is always parsed; invalid UTF-8 is replaced.
pub async fn fetch_document<D: DownloadClient>(client: &D, url: &str) -> Option<Html> {
    let body = match client.fetch_page(url).await {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!("{:#}", e);
            return None;
        }
    };

    let text = String::from_utf8_lossy(&body);
    let document = Html::parse_document(&text);
    for error in &document.errors {
        tracing::debug!("Recovered from malformed markup in {}: {}", url, error);
    }
    Some(document)
}

/// Collects the `href` of every `<a>` element in document order, duplicates included.
pub fn extract_links(document: Option<&Html>) -> Vec<String> {
    let Some(document) = document else {
        return Vec::new();
    };

    // `descendants` walks the tree depth-first, parents before children
    document
        .tree
        .root()
        .descendants()
        .filter_map(|node| node.value().as_element())
        .filter(|element| element.name() == "a")
        .filter_map(|element| element.attr("href"))
        .map(str::to_string)
        .collect()
}

/// Drops links that look like directories (leading or trailing `/`), keeping order.
pub fn filter_files(links: &[String]) -> Vec<String> {
    links
        .iter()
        .filter(|link| !link.starts_with('/') && !link.ends_with('/'))
        .cloned()
        .collect()
}

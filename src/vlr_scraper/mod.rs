pub(crate) mod events;
pub(crate) mod matches;
pub(crate) mod news;
pub(crate) mod normalize;
pub(crate) mod player;
pub(crate) mod rankings;
pub(crate) mod search;
pub(crate) mod stats;
pub(crate) mod team;
pub(crate) mod transfers;

pub(crate) use ::scraper::Html;
use tracing::debug;

use crate::dom::DomNode;
use crate::error::{Result, VlrError};

pub(crate) const BASE_URL: &str = "https://www.vlr.gg";

/// Fetch a URL and parse the response body as an HTML document.
pub(crate) async fn get_document(client: &reqwest::Client, url: &str) -> Result<Html> {
    debug!(url, "fetching page");

    let response = client.get(url).send().await.map_err(|e| VlrError::Http {
        url: url.to_owned(),
        source: e,
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(VlrError::UnexpectedStatus {
            url: url.to_owned(),
            status,
        });
    }

    let body = response.text().await.map_err(|e| VlrError::ResponseBody {
        url: url.to_owned(),
        source: e,
    })?;

    Ok(Html::parse_document(&body))
}

/// Append `?page=N` (or `&page=N`) only for pages after the first.
pub(crate) fn paged_url(base: &str, page: u32) -> String {
    if page > 1 {
        let separator = if base.contains('?') { '&' } else { '?' };
        format!("{base}{separator}page={page}")
    } else {
        base.to_string()
    }
}

/// First element matching `selector` inside `node`.
pub(crate) fn select_first<N: DomNode>(node: &N, selector: &str) -> Result<Option<N>> {
    Ok(node.select(selector)?.into_iter().next())
}

/// Normalized text of the first element matching `selector`.
/// Returns an empty string if nothing matches.
pub(crate) fn select_text<N: DomNode>(node: &N, selector: &str) -> Result<String> {
    Ok(select_first(node, selector)?
        .map(|e| e.text())
        .unwrap_or_default())
}

/// Direct text of the first element matching `selector`, leaving out nested elements.
pub(crate) fn select_own_text<N: DomNode>(node: &N, selector: &str) -> Result<String> {
    Ok(select_first(node, selector)?
        .map(|e| e.own_text())
        .unwrap_or_default())
}

/// Text of every element matching `selector`, joined with single spaces.
pub(crate) fn select_all_text<N: DomNode>(node: &N, selector: &str) -> Result<String> {
    Ok(node
        .select(selector)?
        .iter()
        .map(DomNode::text)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" "))
}

/// Attribute of the first element matching `selector`, if present and non-empty.
pub(crate) fn select_attr<N: DomNode>(node: &N, selector: &str, attr: &str) -> Result<Option<String>> {
    Ok(select_first(node, selector)?
        .and_then(|e| e.attr(attr))
        .and_then(non_empty))
}

pub(crate) fn non_empty(text: String) -> Option<String> {
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// A named extraction strategy over a document root.
pub(crate) type Strategy<N, T> = (&'static str, fn(&N) -> Result<Vec<T>>);

/// Run `strategies` in order and return the first non-empty result.
pub(crate) fn first_non_empty<N: DomNode, T>(node: &N, strategies: &[Strategy<N, T>]) -> Result<Vec<T>> {
    for (name, strategy) in strategies {
        let found = strategy(node)?;
        if !found.is_empty() {
            debug!(strategy = *name, count = found.len(), "extraction strategy matched");
            return Ok(found);
        }
    }
    Ok(Vec::new())
}

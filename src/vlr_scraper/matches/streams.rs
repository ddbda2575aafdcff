use std::collections::HashSet;

use tracing::{debug, instrument};

use crate::dom::DomNode;
use crate::error::Result;
use crate::model::{StreamLink, StreamPlatform};
use crate::vlr_scraper::normalize::normalize_url;
use crate::vlr_scraper::{self, non_empty, select_attr};

#[instrument(skip(client))]
pub(crate) async fn get_match_streams(client: &reqwest::Client, match_url: &str) -> Result<Vec<StreamLink>> {
    let url = normalize_url(match_url);
    let document = vlr_scraper::get_document(client, &url).await?;
    let streams = parse_match_streams(&document.root_element())?;
    debug!(count = streams.len(), "parsed match streams");
    Ok(streams)
}

/// Stream buttons and any Twitch or YouTube link on a match page, unique by URL.
pub(crate) fn parse_match_streams<N: DomNode>(root: &N) -> Result<Vec<StreamLink>> {
    let mut seen = HashSet::new();
    let mut streams = Vec::new();
    for element in root.select(".match-streams-btn, a[href*='twitch.tv'], a[href*='youtube.com']")? {
        let Some(url) = element.attr("href").and_then(non_empty) else {
            continue;
        };
        if !seen.insert(url.clone()) {
            continue;
        }
        streams.push(StreamLink {
            platform: StreamPlatform::from_url(&url),
            language: select_attr(&element, ".flag", "title")?,
            url,
        });
    }
    Ok(streams)
}

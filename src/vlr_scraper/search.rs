use std::collections::HashSet;

use tracing::{debug, instrument};
use url::Url;

use crate::dom::DomNode;
use crate::error::Result;
use crate::model::{PlayerSearchResult, TeamSearchResult};
use crate::vlr_scraper::normalize::{image_url, normalize_url};
use crate::vlr_scraper::{self, non_empty, select_text, BASE_URL};

/// Search page URL with the query percent-encoded.
pub(crate) fn search_url(query: &str) -> Result<String> {
    let mut url = Url::parse(&format!("{BASE_URL}/search/"))?;
    url.query_pairs_mut().append_pair("q", query);
    Ok(url.into())
}

#[instrument(skip(client))]
pub(crate) async fn search_teams(client: &reqwest::Client, query: &str) -> Result<Vec<TeamSearchResult>> {
    let document = vlr_scraper::get_document(client, &search_url(query)?).await?;
    let results = parse_team_results(&document.root_element())?;
    debug!(count = results.len(), "parsed team search results");
    Ok(results)
}

#[instrument(skip(client))]
pub(crate) async fn search_players(client: &reqwest::Client, query: &str) -> Result<Vec<PlayerSearchResult>> {
    let document = vlr_scraper::get_document(client, &search_url(query)?).await?;
    let results = parse_player_results(&document.root_element())?;
    debug!(count = results.len(), "parsed player search results");
    Ok(results)
}

/// Second path segment of a profile link, e.g. `/team/2/sentinels` gives `2`.
fn profile_id(href: &str) -> Option<String> {
    href.split('/').nth(2).map(str::to_string).and_then(non_empty)
}

pub(crate) fn parse_team_results<N: DomNode>(root: &N) -> Result<Vec<TeamSearchResult>> {
    let mut seen = HashSet::new();
    let mut results = Vec::new();
    for link in root.select("a[href*='/team/']")? {
        let href = link.attr("href").unwrap_or_default();
        let Some(id) = profile_id(&href) else {
            continue;
        };
        let name = select_text(&link, ".search-item-title, .team-name")?;
        if name.is_empty() || !seen.insert(id.clone()) {
            continue;
        }
        results.push(TeamSearchResult {
            id,
            name,
            tag: select_text(&link, ".search-item-desc, .team-tag")?,
            region: select_text(&link, ".search-item-region")?,
            logo: image_url(&link, "img")?,
            url: normalize_url(&href),
        });
    }
    Ok(results)
}

pub(crate) fn parse_player_results<N: DomNode>(root: &N) -> Result<Vec<PlayerSearchResult>> {
    let mut seen = HashSet::new();
    let mut results = Vec::new();
    for link in root.select("a[href*='/player/']")? {
        let href = link.attr("href").unwrap_or_default();
        let Some(id) = profile_id(&href) else {
            continue;
        };
        let name = select_text(&link, ".search-item-title, .player-name")?;
        if name.is_empty() || !seen.insert(id.clone()) {
            continue;
        }
        results.push(PlayerSearchResult {
            id,
            name,
            real_name: non_empty(select_text(&link, ".search-item-desc, .player-real-name")?),
            team: non_empty(select_text(&link, ".search-item-team")?),
            country: non_empty(select_text(&link, ".search-item-country")?),
            url: normalize_url(&href),
        });
    }
    Ok(results)
}

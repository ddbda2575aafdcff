use std::collections::HashSet;

use tracing::{debug, instrument};

use crate::dom::DomNode;
use crate::error::Result;
use crate::model::Transfer;
use crate::vlr_scraper::normalize::normalize_url;
use crate::vlr_scraper::{self, non_empty, paged_url, select_text, BASE_URL};

const FREE_AGENT: &str = "Free Agent";
/// Blocks with more text than this are page sections, not transfer rows.
const MAX_ROW_TEXT_LEN: usize = 500;

#[instrument(skip(client))]
pub(crate) async fn get_transfers(client: &reqwest::Client, page: u32) -> Result<Vec<Transfer>> {
    let url = paged_url(&format!("{BASE_URL}/transfers"), page);
    let document = vlr_scraper::get_document(client, &url).await?;
    let transfers = parse_transfers(&document.root_element())?;
    debug!(count = transfers.len(), "parsed transfers");
    Ok(transfers)
}

/// Any block holding exactly one player link and at least one team link counts
/// as a row. Nested blocks repeat the same player, so rows are unique by player URL.
pub(crate) fn parse_transfers<N: DomNode>(root: &N) -> Result<Vec<Transfer>> {
    let mut seen = HashSet::new();
    let mut transfers = Vec::new();

    for row in root.select("div, tr")? {
        let player_links = row.select("a[href*='/player/']")?;
        let [player_link] = player_links.as_slice() else {
            continue;
        };
        let team_links = row.select("a[href*='/team/']")?;
        if team_links.is_empty() {
            continue;
        }
        let url = normalize_url(&player_link.attr("href").unwrap_or_default());
        if seen.contains(&url) || row.text().chars().count() >= MAX_ROW_TEXT_LEN {
            continue;
        }

        let team = |index: usize| {
            team_links
                .get(index)
                .map(DomNode::text)
                .and_then(non_empty)
                .unwrap_or_else(|| FREE_AGENT.to_string())
        };
        let date = match non_empty(select_text(&row, ".transfer-date, .wf-date")?) {
            Some(date) => date,
            None => "Recent".to_string(),
        };

        seen.insert(url.clone());
        transfers.push(Transfer {
            player: player_link.text(),
            from_team: team(0),
            to_team: team(1),
            date,
            url,
        });
    }
    Ok(transfers)
}

use tracing::{debug, instrument};

use super::list::MatchItemFields;
use crate::dom::DomNode;
use crate::error::Result;
use crate::model::LiveMatch;
use crate::vlr_scraper::{self, select_text, BASE_URL};

#[instrument(skip(client))]
pub(crate) async fn get_live_matches(client: &reqwest::Client) -> Result<Vec<LiveMatch>> {
    let document = vlr_scraper::get_document(client, &format!("{BASE_URL}/")).await?;
    let matches = parse_live_matches(&document.root_element())?;
    debug!(count = matches.len(), "parsed live matches");
    Ok(matches)
}

/// Live match cards of the home page. A score cell that is empty or holds a
/// dash placeholder reads as `"0"`.
pub(crate) fn parse_live_matches<N: DomNode>(root: &N) -> Result<Vec<LiveMatch>> {
    let mut matches = Vec::new();
    for card in root.select(".wf-card.mod-live")? {
        let Some(fields) = MatchItemFields::parse(&card)? else {
            continue;
        };
        matches.push(LiveMatch {
            team1: fields.team1,
            team2: fields.team2,
            score1: fields.score1.unwrap_or_else(|| "0".to_string()),
            score2: fields.score2.unwrap_or_else(|| "0".to_string()),
            event: fields.event,
            status: select_text(&card, ".match-item-eta")?,
            team1_country_flag: fields.team1_country_flag,
            team2_country_flag: fields.team2_country_flag,
            event_icon: fields.event_icon,
            url: fields.url,
        });
    }
    Ok(matches)
}

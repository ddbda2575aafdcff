use tracing::{debug, instrument};

use crate::dom::DomNode;
use crate::error::Result;
use crate::model::Match;
use crate::vlr_scraper::normalize::{flag_url_of, image_url, normalize_url};
use crate::vlr_scraper::{self, non_empty, paged_url, select_first, select_text, BASE_URL};

#[instrument(skip(client))]
pub(crate) async fn get_upcoming_matches(client: &reqwest::Client, page: u32) -> Result<Vec<Match>> {
    // The schedule always carries the page parameter, the first page included.
    let url = format!("{BASE_URL}/matches/?page={page}");
    get_match_list(client, &url).await
}

#[instrument(skip(client))]
pub(crate) async fn get_completed_matches(client: &reqwest::Client, page: u32) -> Result<Vec<Match>> {
    let url = paged_url(&format!("{BASE_URL}/matches/results"), page);
    get_match_list(client, &url).await
}

#[instrument(skip(client))]
pub(crate) async fn get_matches_by_region(
    client: &reqwest::Client,
    region: &str,
    page: u32,
) -> Result<Vec<Match>> {
    let url = paged_url(&format!("{BASE_URL}/matches?region={region}"), page);
    get_match_list(client, &url).await
}

#[instrument(skip(client))]
pub(crate) async fn get_matches_by_event(
    client: &reqwest::Client,
    event_id: &str,
    page: u32,
) -> Result<Vec<Match>> {
    let url = paged_url(&format!("{BASE_URL}/event/matches/{event_id}"), page);
    get_match_list(client, &url).await
}

async fn get_match_list(client: &reqwest::Client, url: &str) -> Result<Vec<Match>> {
    let document = vlr_scraper::get_document(client, url).await?;
    let matches = parse_matches(&document.root_element())?;
    debug!(url, count = matches.len(), "parsed match list");
    Ok(matches)
}

/// Every `.match-item` block of a schedule or results page.
pub(crate) fn parse_matches<N: DomNode>(root: &N) -> Result<Vec<Match>> {
    root.select(".match-item")?
        .iter()
        .map(|item| Ok(MatchItemFields::parse(item)?.map(MatchItemFields::into_match)))
        .filter_map(Result::transpose)
        .collect()
}

/// Fields shared by schedule items and live cards.
pub(super) struct MatchItemFields {
    pub(super) team1: String,
    pub(super) team2: String,
    pub(super) score1: Option<String>,
    pub(super) score2: Option<String>,
    pub(super) time: String,
    pub(super) event: String,
    pub(super) team1_country_flag: Option<String>,
    pub(super) team2_country_flag: Option<String>,
    pub(super) event_icon: Option<String>,
    pub(super) url: String,
}

impl MatchItemFields {
    /// `None` when the item has no link or is missing a team name.
    pub(super) fn parse<N: DomNode>(item: &N) -> Result<Option<Self>> {
        let Some(href) = item.attr("href").and_then(non_empty) else {
            debug!("skipping match item without link");
            return Ok(None);
        };

        let names = item
            .select(".match-item-vs-team-name")?
            .iter()
            .map(DomNode::text)
            .collect::<Vec<_>>();
        let (Some(team1), Some(team2)) = (
            names.first().cloned().and_then(non_empty),
            names.get(1).cloned().and_then(non_empty),
        ) else {
            debug!(%href, "skipping match item without both team names");
            return Ok(None);
        };

        let scores = item
            .select(".match-item-vs-team-score")?
            .iter()
            .map(|score| played_score(score.text()))
            .collect::<Vec<_>>();

        let teams = item.select(".match-item-vs-team")?;
        let flag = |index: usize| -> Result<Option<String>> {
            match teams.get(index) {
                Some(team) => match select_first(team, ".flag")? {
                    Some(flag) => flag_url_of(&flag),
                    None => Ok(None),
                },
                None => Ok(None),
            }
        };

        Ok(Some(Self {
            team1,
            team2,
            score1: scores.first().cloned().flatten(),
            score2: scores.get(1).cloned().flatten(),
            time: select_text(item, ".match-item-time")?,
            event: select_text(item, ".match-item-event")?,
            team1_country_flag: flag(0)?,
            team2_country_flag: flag(1)?,
            event_icon: image_url(item, ".match-item-icon img")?,
            url: normalize_url(&href),
        }))
    }

    fn into_match(self) -> Match {
        Match {
            team1: self.team1,
            team2: self.team2,
            time: self.time,
            event: self.event,
            score1: self.score1,
            score2: self.score2,
            url: self.url,
            team1_country_flag: self.team1_country_flag,
            team2_country_flag: self.team2_country_flag,
            event_icon: self.event_icon,
        }
    }
}

/// Unplayed matches show an empty cell or a dash placeholder (`-`, `–`, `—`);
/// those read as no score. Any other text, `0` included, is kept as shown.
fn played_score(text: String) -> Option<String> {
    non_empty(text).filter(|score| !matches!(score.as_str(), "-" | "–" | "—"))
}

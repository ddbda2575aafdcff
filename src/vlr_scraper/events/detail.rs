use std::collections::HashSet;

use tracing::{debug, instrument};

use super::{event_id_from_url, parse_brackets};
use crate::dom::DomNode;
use crate::error::{Result, VlrError};
use crate::model::{EventDetail, EventTeam};
use crate::vlr_scraper::normalize::{country_code, image_url, labeled_value, normalize_url};
use crate::vlr_scraper::{self, non_empty, select_first, select_text, BASE_URL};

/// Link text longer than this is not a team name.
const MAX_TEAM_NAME_LEN: usize = 80;

#[instrument(skip(client))]
pub(crate) async fn get_event_detail(client: &reqwest::Client, event_id: &str) -> Result<EventDetail> {
    let url = format!("{BASE_URL}/event/{event_id}");
    fetch_event_detail(client, event_id, &url).await
}

#[instrument(skip(client))]
pub(crate) async fn get_event_detail_by_url(client: &reqwest::Client, event_url: &str) -> Result<EventDetail> {
    let url = normalize_url(event_url);
    let event_id = event_id_from_url(&url).ok_or_else(|| VlrError::MissingId {
        kind: "event",
        url: url.clone(),
    })?;
    fetch_event_detail(client, &event_id, &url).await
}

async fn fetch_event_detail(client: &reqwest::Client, event_id: &str, url: &str) -> Result<EventDetail> {
    let document = vlr_scraper::get_document(client, url).await?;
    let detail = parse_event_detail(&document.root_element(), event_id, url)?;
    debug!(
        event_id,
        teams = detail.teams.len(),
        brackets = detail.brackets.len(),
        "parsed event detail"
    );
    Ok(detail)
}

pub(crate) fn parse_event_detail<N: DomNode>(root: &N, event_id: &str, url: &str) -> Result<EventDetail> {
    let name = match non_empty(select_text(root, "h1.wf-title")?) {
        Some(name) => name,
        None => select_text(root, ".wf-title")?,
    };

    let region = match select_first(root, ".event-desc-item-value .flag")? {
        Some(flag) => country_code(&flag.class_names().join(" "))?,
        None => None,
    };

    Ok(EventDetail {
        id: event_id.to_string(),
        name,
        dates: header_value(root, "Dates", ".event-header-subtitle")?.unwrap_or_default(),
        prize_pool: header_value(root, "Prize", ".event-prize")?,
        teams: parse_event_teams(root)?,
        brackets: parse_brackets(root)?,
        location: header_value(root, "Location", ".event-header-location")?,
        format: non_empty(select_text(root, ".event-format")?),
        logo_url: image_url(root, ".event-header-thumb img")?,
        region,
        url: url.to_string(),
    })
}

/// A header description value by its label, or the older dedicated element.
fn header_value<N: DomNode>(root: &N, label: &str, fallback: &str) -> Result<Option<String>> {
    match labeled_value(root, ".event-desc-item-label", label)? {
        Some(value) => Ok(Some(value)),
        None => Ok(non_empty(select_text(root, fallback)?)),
    }
}

/// Teams from the participant cards, then any other team link not seen yet.
fn parse_event_teams<N: DomNode>(root: &N) -> Result<Vec<EventTeam>> {
    let mut seen = HashSet::new();
    let mut teams = Vec::new();

    for card in root.select(".event-team, .event-team-item")? {
        let Some(team) = parse_team_card(&card)? else {
            continue;
        };
        if seen.insert(team.url.clone()) {
            teams.push(team);
        }
    }
    let from_cards = teams.len();

    for link in root.select("a[href*='/team/']")? {
        let Some(href) = link.attr("href").and_then(non_empty) else {
            continue;
        };
        let url = normalize_url(&href);
        let name = link.text();
        if name.is_empty() || name.chars().count() > MAX_TEAM_NAME_LEN || seen.contains(&url) {
            continue;
        }
        seen.insert(url.clone());
        teams.push(EventTeam {
            name,
            tag: None,
            standing: None,
            logo_url: image_url(&link, "img")?,
            url,
        });
    }

    debug!(from_cards, total = teams.len(), "collected event teams");
    Ok(teams)
}

fn parse_team_card<N: DomNode>(card: &N) -> Result<Option<EventTeam>> {
    let link = if card.tag_name() == "a" {
        Some(card.attr("href").and_then(non_empty))
    } else {
        select_first(card, "a[href*='/team/']")?.map(|a| a.attr("href").and_then(non_empty))
    };
    let Some(Some(href)) = link else {
        return Ok(None);
    };

    let name = match non_empty(select_text(card, ".event-team-name, .text-of")?) {
        Some(name) => name,
        None => return Ok(None),
    };

    Ok(Some(EventTeam {
        name,
        tag: non_empty(select_text(card, ".event-team-tag")?),
        standing: non_empty(select_text(card, ".event-team-rank")?),
        logo_url: image_url(card, "img")?,
        url: normalize_url(&href),
    }))
}

//! Team rankings.
//!
//! Region pages use a div card layout, the world page a table split by region
//! headers. Layouts are tried in order until one yields rows.

use tracing::{debug, instrument};

use crate::dom::DomNode;
use crate::error::Result;
use crate::model::{RegionRankings, TeamRanking};
use crate::vlr_scraper::normalize::{image_url, normalize_url};
use crate::vlr_scraper::{
    self, first_non_empty, non_empty, select_first, select_own_text, select_text, Strategy,
    BASE_URL,
};

const WORLD: &str = "World";

#[instrument(skip(client))]
pub(crate) async fn get_global_rankings(client: &reqwest::Client) -> Result<Vec<RegionRankings>> {
    let document = vlr_scraper::get_document(client, &format!("{BASE_URL}/rankings")).await?;
    let groups = parse_region_rankings(&document.root_element())?;
    debug!(regions = groups.len(), "parsed global rankings");
    Ok(groups)
}

#[instrument(skip(client))]
pub(crate) async fn get_rankings_by_region(client: &reqwest::Client, region: &str) -> Result<Vec<TeamRanking>> {
    let url = format!("{BASE_URL}/rankings/{region}");
    let document = vlr_scraper::get_document(client, &url).await?;
    let rankings = parse_rankings(&document.root_element())?;
    debug!(count = rankings.len(), "parsed region rankings");
    Ok(rankings)
}

/// Rankings grouped by region, from whichever layout the page uses.
pub(crate) fn parse_region_rankings<N: DomNode>(root: &N) -> Result<Vec<RegionRankings>> {
    let strategies: [Strategy<N, RegionRankings>; 3] = [
        ("card layout", from_cards::<N>),
        ("table by region", from_grouped_table::<N>),
        ("table as one region", from_flat_table::<N>),
    ];
    first_non_empty(root, &strategies)
}

/// All ranking rows of the page, regardless of region.
pub(crate) fn parse_rankings<N: DomNode>(root: &N) -> Result<Vec<TeamRanking>> {
    Ok(parse_region_rankings(root)?
        .into_iter()
        .flat_map(|group| group.rankings)
        .collect())
}

fn from_cards<N: DomNode>(root: &N) -> Result<Vec<RegionRankings>> {
    let mut rankings = Vec::new();
    for item in root.select("div.rank-item")? {
        if let Some(ranking) = parse_card(&item)? {
            rankings.push(ranking);
        }
    }
    if rankings.is_empty() {
        return Ok(Vec::new());
    }
    let region = non_empty(select_text(root, "h1.wf-title")?).unwrap_or_else(|| WORLD.to_string());
    Ok(vec![RegionRankings { region, rankings }])
}

fn parse_card<N: DomNode>(item: &N) -> Result<Option<TeamRanking>> {
    let Some(rank) = non_empty(select_text(item, ".rank-item-rank-num")?) else {
        return Ok(None);
    };
    let Some(link) = select_first(item, "a.rank-item-team")? else {
        return Ok(None);
    };

    let team_name = match link.attr("data-sort-value").and_then(non_empty) {
        Some(name) => name,
        None => select_own_text(&link, ".ge-text")?,
    };
    if team_name.is_empty() {
        return Ok(None);
    }

    Ok(Some(TeamRanking {
        rank,
        team_name,
        region: select_text(&link, ".rank-item-team-country")?,
        points: select_text(item, ".rank-item-rating")?,
        url: normalize_url(&link.attr("href").unwrap_or_default()),
        logo_url: image_url(&link, "img")?,
    }))
}

fn from_grouped_table<N: DomNode>(root: &N) -> Result<Vec<RegionRankings>> {
    let mut groups: Vec<RegionRankings> = Vec::new();
    for element in root.select(":is(div.wf-label.mod-large, table.wf-faux-table tr.wf-card)")? {
        if element.has_class("wf-label") {
            groups.push(RegionRankings {
                region: element.text(),
                rankings: Vec::new(),
            });
            continue;
        }
        // Rows before the first header have no region to go under.
        let Some(group) = groups.last_mut() else {
            continue;
        };
        if let Some(ranking) = parse_table_row(&element, &group.region)? {
            group.rankings.push(ranking);
        }
    }
    groups.retain(|group| !group.rankings.is_empty());
    Ok(groups)
}

fn from_flat_table<N: DomNode>(root: &N) -> Result<Vec<RegionRankings>> {
    let mut rankings = Vec::new();
    for row in root.select("table.wf-faux-table tr.wf-card")? {
        if let Some(ranking) = parse_table_row(&row, "")? {
            rankings.push(ranking);
        }
    }
    if rankings.is_empty() {
        return Ok(Vec::new());
    }
    Ok(vec![RegionRankings {
        region: WORLD.to_string(),
        rankings,
    }])
}

/// A `tr.wf-card` row. The team's country label is used as region when present.
fn parse_table_row<N: DomNode>(row: &N, group_region: &str) -> Result<Option<TeamRanking>> {
    let Some(rank_cell) = select_first(row, "td.rank-item-rank")? else {
        return Ok(None);
    };
    let rank = non_empty(select_text(&rank_cell, "a")?).unwrap_or_else(|| rank_cell.text());

    let Some(link) = select_first(row, "td.rank-item-team a")? else {
        return Ok(None);
    };
    let team_div = select_first(&link, "div")?;
    let team_name = team_div.as_ref().map(|div| div.own_text()).unwrap_or_default();
    if team_name.is_empty() {
        return Ok(None);
    }
    let country = match &team_div {
        Some(div) => select_text(div, ".rank-item-team-country")?,
        None => String::new(),
    };

    Ok(Some(TeamRanking {
        rank,
        team_name,
        region: non_empty(country).unwrap_or_else(|| group_region.to_string()),
        points: select_text(row, "td.rank-item-rating")?,
        url: normalize_url(&link.attr("href").unwrap_or_default()),
        logo_url: image_url(&link, "img")?,
    }))
}

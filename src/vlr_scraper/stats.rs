use regex::Regex;
use tracing::{debug, instrument};

use crate::dom::DomNode;
use crate::error::Result;
use crate::model::PlayerStat;
use crate::vlr_scraper::matches::agent_from_icon;
use crate::vlr_scraper::{self, non_empty, select_first, select_text, BASE_URL};

#[instrument(skip(client))]
pub(crate) async fn get_stats(client: &reqwest::Client) -> Result<Vec<PlayerStat>> {
    let document = vlr_scraper::get_document(client, &format!("{BASE_URL}/stats")).await?;
    let stats = parse_stats(&document.root_element())?;
    debug!(count = stats.len(), "parsed player stats");
    Ok(stats)
}

/// Rows of the player stats table. Rows without a player link are skipped.
pub(crate) fn parse_stats<N: DomNode>(root: &N) -> Result<Vec<PlayerStat>> {
    let extra_agents = Regex::new(r"\(\+(\d+)\)")?;
    let mut stats = Vec::new();

    for row in root.select("tbody tr")? {
        let Some(player_link) = select_first(&row, ".mod-player a")? else {
            continue;
        };
        let (player, team) = player_and_team(&player_link)?;

        let mut agents = row
            .select(".mod-agents img")?
            .iter()
            .filter_map(|img| img.attr("src"))
            .filter(|src| src.contains("/img/vlr/game/agents/"))
            .filter_map(|src| agent_from_icon(&src))
            .collect::<Vec<_>>();
        let agents_text = select_text(&row, ".mod-agents")?;
        if let Some(more) = extra_agents.captures(&agents_text).and_then(|c| c.get(1)) {
            agents.push(format!("+{}", more.as_str()));
        }

        let cells = row.select("td")?;
        let column = |index: usize, default: &str| {
            cells
                .get(index)
                .map(DomNode::text)
                .and_then(non_empty)
                .unwrap_or_else(|| default.to_string())
        };

        stats.push(PlayerStat {
            player,
            team,
            agents,
            maps_played: column(2, "0"),
            rating: column(3, "0"),
            acs: column(4, "0"),
            kd: column(5, "0"),
            kast: column(6, "0%"),
            adr: column(7, "0"),
            kpr: column(8, "0"),
            apr: column(9, "0"),
            fkpr: column(10, "0"),
            fdpr: column(11, "0"),
            hs_percentage: column(12, "0%"),
            cl_percentage: column(13, "0%"),
            clutches: column(14, "0"),
            max_kills: column(15, "0"),
            kills: column(16, "0"),
            deaths: column(17, "0"),
            assists: column(18, "0"),
            first_kills: column(19, "0"),
            first_deaths: column(20, "0"),
        });
    }
    Ok(stats)
}

/// The player link holds the name and, in a second line, the team tag.
fn player_and_team<N: DomNode>(link: &N) -> Result<(String, String)> {
    let lines = link.select("div")?;
    let player = match select_first(link, ".text-of")? {
        Some(name) => name.text(),
        None => lines.first().map_or_else(|| link.text(), DomNode::text),
    };
    let team = match select_first(link, ".stats-player-country")? {
        Some(team) => team.text(),
        None if lines.len() > 1 => lines.last().map(DomNode::text).unwrap_or_default(),
        None => String::new(),
    };
    Ok((player, team))
}

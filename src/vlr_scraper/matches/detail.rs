use itertools::Itertools;
use regex::Regex;
use tracing::{debug, instrument, warn};

use crate::dom::DomNode;
use crate::error::Result;
use crate::model::{
    MapResult, MapStats, MapStatsData, MatchDetail, MatchStatus, PlayerMatchStat, Round,
    StreamInfo, TeamInfo, TeamScore, TeamSlot, WinCondition,
};
use crate::vlr_scraper::normalize::{first_own_text, image_url, normalize_url, side_stat};
use crate::vlr_scraper::{self, non_empty, select_all_text, select_first, select_text};

const ALL_MAPS: &str = "All Maps";

#[instrument(skip(client))]
pub(crate) async fn get_match_details(client: &reqwest::Client, match_url: &str) -> Result<MatchDetail> {
    let url = normalize_url(match_url);
    let document = vlr_scraper::get_document(client, &url).await?;
    let detail = parse_match_detail(&document.root_element())?;
    debug!(
        maps = detail.maps.len(),
        status = %detail.status,
        "parsed match detail"
    );
    Ok(detail)
}

pub(crate) fn parse_match_detail<N: DomNode>(root: &N) -> Result<MatchDetail> {
    let event_header = select_first(root, "a.match-header-event")?;
    let (event_name, event_image, match_subtitle) = match &event_header {
        Some(header) => (
            select_text(header, "div > div:first-child")?,
            image_url(header, "img")?,
            select_text(header, ".match-header-event-series")?,
        ),
        None => (String::new(), None, String::new()),
    };

    let (date, time, patch) = match select_first(root, "div.match-header-date")? {
        Some(header_date) => {
            let moments = header_date.select("div.moment-tz-convert")?;
            let patch = header_date
                .select("div")?
                .last()
                .map(DomNode::text)
                .filter(|text| text.contains("Patch"));
            (
                moments.first().map(DomNode::text).unwrap_or_default(),
                moments.get(1).map(DomNode::text).unwrap_or_default(),
                patch,
            )
        }
        None => (String::new(), String::new(), None),
    };

    let scores = root
        .select("div.match-header-vs-score .js-spoiler span:not(.match-header-vs-score-colon)")?
        .iter()
        .map(|span| non_empty(span.text()))
        .collect_vec();
    let team1 = parse_team_info(root, "a.match-header-link.mod-1", scores.first().cloned().flatten())?;
    let team2 = parse_team_info(root, "a.match-header-link.mod-2", scores.get(1).cloned().flatten())?;

    let notes = root
        .select("div.match-header-vs-note")?
        .iter()
        .map(DomNode::text)
        .collect_vec();
    let (status, format, time_until_match) = classify_notes(&notes)?;

    let streams = root
        .select("div.match-streams a.match-streams-btn")?
        .iter()
        .map(|button| {
            Ok(StreamInfo {
                name: select_text(button, "span")?,
                url: button.attr("href").unwrap_or_default(),
            })
        })
        .filter_ok(|stream| !stream.name.is_empty() && !stream.url.is_empty())
        .collect::<Result<Vec<_>>>()?;

    let games = root.select("div.vm-stats-game")?;
    let maps = games
        .iter()
        .filter(|game| game.attr("data-game-id").as_deref() != Some("all"))
        .map(parse_map_result)
        .filter_map(Result::transpose)
        .collect::<Result<Vec<_>>>()?;

    let mut map_data = Vec::new();
    for game in &games {
        if let Some(data) = parse_map_stats(root, game)? {
            map_data.push(data);
        }
    }

    Ok(MatchDetail {
        event_name,
        event_image,
        match_subtitle,
        date,
        time,
        patch,
        team1,
        team2,
        status,
        time_until_match,
        format,
        bans_picks_info: non_empty(select_all_text(root, "div.match-header-note")?),
        streams,
        maps,
        map_stats: split_map_stats(map_data),
    })
}

fn parse_team_info<N: DomNode>(root: &N, selector: &str, score: Option<String>) -> Result<TeamInfo> {
    let Some(link) = select_first(root, selector)? else {
        return Ok(TeamInfo {
            name: String::new(),
            logo: None,
            link: None,
            score,
        });
    };
    Ok(TeamInfo {
        name: select_text(&link, "div.wf-title-med")?,
        logo: image_url(&link, "img")?,
        link: link.attr("href").and_then(non_empty).map(|href| normalize_url(&href)),
        score,
    })
}

/// Sort the header notes into status, series format and countdown.
fn classify_notes(notes: &[String]) -> Result<(MatchStatus, String, Option<String>)> {
    let series = Regex::new(r"(?i)^Bo\d+$")?;
    let countdown = Regex::new(r"(?i)\d+[hmd]")?;

    let mut status = MatchStatus::Upcoming;
    let mut format = String::new();
    let mut time_until_match = None;
    for note in notes {
        if series.is_match(note) {
            format = note.clone();
        } else if countdown.is_match(note) {
            time_until_match = Some(note.clone());
        } else if note.eq_ignore_ascii_case("final") {
            status = MatchStatus::Completed;
        } else if note.eq_ignore_ascii_case("live") {
            status = MatchStatus::Live;
        }
    }
    Ok((status, format, time_until_match))
}

/// Header of one played map. `None` when the map has no header or name.
fn parse_map_result<N: DomNode>(game: &N) -> Result<Option<MapResult>> {
    let Some(header) = select_first(game, ".vm-stats-game-header")? else {
        warn!(game_id = ?game.attr("data-game-id"), "map container without header");
        return Ok(None);
    };

    let map_cell = select_first(&header, ".map")?;
    let (map_name, duration) = match &map_cell {
        Some(cell) => (
            map_name_of(cell).unwrap_or_default(),
            non_empty(select_text(cell, ".map-duration")?),
        ),
        None => (String::new(), None),
    };
    if map_name.is_empty() {
        return Ok(None);
    }

    let teams = header.select(".team")?;
    let (team1_score, team1_won) = parse_team_score(teams.first())?;
    let (team2_score, team2_won) = parse_team_score(teams.get(1))?;
    let winner = match (team1_won, team2_won) {
        (true, _) => Some(TeamSlot::Team1),
        (_, true) => Some(TeamSlot::Team2),
        _ => None,
    };

    let picked_by = if !game.select(".picked.mod-1")?.is_empty() {
        Some(TeamSlot::Team1)
    } else if !game.select(".picked.mod-2")?.is_empty() {
        Some(TeamSlot::Team2)
    } else {
        None
    };

    Ok(Some(MapResult {
        map_name,
        team1_score,
        team2_score,
        winner,
        picked_by,
        duration,
    }))
}

/// Map name in a header `.map` cell, ignoring the pick badge and duration
/// nested next to it.
fn map_name_of<N: DomNode>(cell: &N) -> Option<String> {
    first_own_text(cell)?.split_whitespace().next().map(str::to_string)
}

fn parse_team_score<N: DomNode>(team: Option<&N>) -> Result<(TeamScore, bool)> {
    let Some(team) = team else {
        return Ok((
            TeamScore {
                total: String::new(),
                attack: None,
                defend: None,
            },
            false,
        ));
    };
    let score = select_first(team, ".score")?;
    Ok((
        TeamScore {
            total: score.as_ref().map(DomNode::text).unwrap_or_default(),
            attack: non_empty(select_all_text(team, ".mod-t")?),
            defend: non_empty(select_all_text(team, ".mod-ct")?),
        },
        score.is_some_and(|s| s.has_class("mod-win")),
    ))
}

/// Player rows and rounds of one stats container, `None` when it lists no players.
fn parse_map_stats<N: DomNode>(root: &N, game: &N) -> Result<Option<MapStatsData>> {
    let game_id = game.attr("data-game-id").unwrap_or_default();
    let is_aggregate = game_id == "all";

    let nav_name = root
        .select(".vm-stats-gamesnav-item")?
        .into_iter()
        .find(|item| item.attr("data-game-id").as_deref() == Some(game_id.as_str()))
        .map(|item| item.text())
        .and_then(non_empty);
    let map_name = match nav_name {
        Some(name) => name,
        None if is_aggregate => ALL_MAPS.to_string(),
        None => match select_first(game, ".vm-stats-game-header .map")?.and_then(|cell| map_name_of(&cell)) {
            Some(name) => name,
            None => return Ok(None),
        },
    };

    let mut player_stats = Vec::new();
    for row in game.select("table tbody tr")? {
        if let Some(stat) = parse_player_row(&row)? {
            player_stats.push(stat);
        }
    }
    if player_stats.is_empty() {
        return Ok(None);
    }

    let rounds = if is_aggregate {
        Vec::new()
    } else {
        game.select(".vlr-rounds .vlr-rounds-row-col[title]")?
            .iter()
            .map(parse_round)
            .filter_map(Result::transpose)
            .collect::<Result<Vec<_>>>()?
    };

    Ok(Some(MapStatsData {
        map_name,
        player_stats,
        rounds,
    }))
}

fn parse_player_row<N: DomNode>(row: &N) -> Result<Option<PlayerMatchStat>> {
    let cells = row.select("td")?;
    if cells.len() < 14 {
        return Ok(None);
    }
    let name_parts = cells[0].select("a div")?;
    let Some(player_name) = name_parts.first().map(DomNode::text) else {
        return Ok(None);
    };
    let team = name_parts.last().map(DomNode::text).unwrap_or_default();

    let agents = cells[1]
        .select("img")?
        .iter()
        .filter_map(|img| {
            img.attr("title")
                .and_then(non_empty)
                .or_else(|| img.attr("alt").and_then(non_empty))
                .or_else(|| {
                    img.attr("src")
                        .filter(|src| src.contains("/agents/"))
                        .and_then(|src| agent_from_icon(&src))
                })
        })
        .collect_vec();

    let stat = |index: usize| side_stat(cells.get(index));
    Ok(Some(PlayerMatchStat {
        player_name,
        team,
        agents,
        rating: stat(2)?,
        acs: stat(3)?,
        kills: stat(4)?,
        deaths: stat(5)?,
        assists: stat(6)?,
        kd_diff: stat(7)?,
        kast: stat(8)?,
        adr: stat(9)?,
        hs: stat(10)?,
        fk: stat(11)?,
        fd: stat(12)?,
        fk_diff: stat(13)?,
    }))
}

/// `/img/vlr/game/agents/jett.png` gives `jett`.
pub(crate) fn agent_from_icon(src: &str) -> Option<String> {
    let file = src.rsplit('/').next()?;
    let stem = file.rsplit_once('.').map_or(file, |(stem, _)| stem);
    non_empty(stem.to_string())
}

/// One round column. The two squares are taken to be team 1 and team 2 in
/// page order; the winning square's side class decides who attacked.
/// Columns without exactly two squares or without a winner are skipped.
fn parse_round<N: DomNode>(column: &N) -> Result<Option<Round>> {
    let number = select_text(column, ".rnd-num")?;
    let squares = column.select(".rnd-sq")?;
    if number.is_empty() || squares.len() != 2 {
        return Ok(None);
    }
    let Some((index, win_square)) = squares.iter().find_position(|sq| sq.has_class("mod-win")) else {
        return Ok(None);
    };
    let Some(winner) = TeamSlot::from_index(index) else {
        return Ok(None);
    };

    let (t, ct) = if win_square.has_class("mod-t") {
        (Some(winner), Some(winner.other()))
    } else if win_square.has_class("mod-ct") {
        (Some(winner.other()), Some(winner))
    } else {
        (None, None)
    };

    let icon = select_first(win_square, "img")?
        .and_then(|img| img.attr("src"))
        .and_then(non_empty);

    Ok(Some(Round {
        number,
        score: column.attr("title").unwrap_or_default(),
        winner,
        t,
        ct,
        win_condition: icon
            .as_deref()
            .map_or(WinCondition::Unknown, WinCondition::from_icon),
        win_icon_url: icon.map(|src| normalize_url(&src)),
    }))
}

/// Separate the series aggregate from the individual maps, by name.
fn split_map_stats(map_data: Vec<MapStatsData>) -> MapStats {
    let (aggregate, individual): (Vec<_>, Vec<_>) = map_data
        .into_iter()
        .partition(|data| data.map_name.eq_ignore_ascii_case(ALL_MAPS));
    let mut individual = individual.into_iter();
    MapStats {
        all_maps: aggregate.into_iter().next(),
        map1: individual.next(),
        map2: individual.next(),
        map3: individual.next(),
        map4: individual.next(),
        map5: individual.next(),
    }
}

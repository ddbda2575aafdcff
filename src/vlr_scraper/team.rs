use std::collections::BTreeMap;

use tracing::{debug, instrument};

use crate::dom::DomNode;
use crate::error::Result;
use crate::model::{
    EventPlacement, FormRating, PlacementResult, RankingHistoryEntry, RatingHistoryEntry, Team,
    TeamMatch, TeamPlayer,
};
use crate::vlr_scraper::normalize::{image_url, labeled_value, normalize_url, social_platform};
use crate::vlr_scraper::{self, non_empty, select_first, select_text, BASE_URL};

#[instrument(skip(client))]
pub(crate) async fn get_team(client: &reqwest::Client, team_id: &str) -> Result<Team> {
    let url = format!("{BASE_URL}/team/{team_id}");
    let document = vlr_scraper::get_document(client, &url).await?;
    let team = parse_team(&document.root_element(), team_id, &url)?;
    debug!(
        team_id,
        roster = team.roster.len(),
        recent = team.recent_matches.len(),
        upcoming = team.upcoming_matches.len(),
        "parsed team"
    );
    Ok(team)
}

pub(crate) fn parse_team<N: DomNode>(root: &N, team_id: &str, url: &str) -> Result<Team> {
    let mut social_links = BTreeMap::new();
    for link in root.select(".team-header-links a")? {
        if let Some(href) = link.attr("href").and_then(non_empty) {
            social_links.insert(social_platform(&href).to_string(), href);
        }
    }

    let (upcoming_matches, recent_matches): (Vec<_>, Vec<_>) = parse_team_matches(root)?
        .into_iter()
        .partition(|m| m.is_upcoming);
    let (form_rating, ranking_history) = parse_rating_timeline(root)?;

    Ok(Team {
        id: team_id.to_string(),
        name: select_text(root, ".team-header-name h1, h1.wf-title")?,
        tag: non_empty(select_text(root, ".team-header-tag")?),
        logo_url: image_url(root, ".team-header-logo img")?,
        region: non_empty(select_text(root, ".team-header-country")?),
        social_links,
        total_winnings: labeled_value(root, ".wf-module-label", "Total Winnings")?,
        roster: parse_roster(root)?,
        recent_matches,
        upcoming_matches,
        event_placements: parse_placements(root)?,
        rating_history: parse_rating_history(root)?,
        form_rating,
        ranking_history,
        url: url.to_string(),
    })
}

/// Player links inside a card; loose mentions elsewhere on the page are ignored.
fn parse_roster<N: DomNode>(root: &N) -> Result<Vec<TeamPlayer>> {
    let mut roster = Vec::new();
    for link in root.select("a[href^='/player/']")? {
        if link.closest(".wf-card")?.is_none() {
            continue;
        }
        let alias = select_text(&link, ".team-roster-item-name-alias")?;
        if alias.is_empty() {
            continue;
        }
        let roles = link
            .select(".team-roster-item-name-role")?
            .iter()
            .map(DomNode::text)
            .filter(|role| !role.is_empty())
            .collect();
        roster.push(TeamPlayer {
            alias,
            real_name: non_empty(select_text(&link, ".team-roster-item-name-real")?),
            url: normalize_url(&link.attr("href").unwrap_or_default()),
            image_url: image_url(&link, ".team-roster-item-img img")?,
            roles,
        });
    }
    Ok(roster)
}

fn parse_team_matches<N: DomNode>(root: &N) -> Result<Vec<TeamMatch>> {
    let mut matches = Vec::new();
    for item in root.select("a.m-item")? {
        let event_name = match non_empty(select_text(&item, ".m-item-event div[style*=font-weight]")?) {
            Some(name) => name,
            None => select_text(&item, ".m-item-event .text-of")?,
        };
        let opponent = select_text(&item, ".m-item-team.mod-right")?;
        if event_name.is_empty() || opponent.is_empty() {
            continue;
        }

        let event_stage = non_empty(select_text(&item, ".m-item-event")?.replacen(&event_name, "", 1));

        let spans = item.select(".m-item-result span")?;
        let score = match spans.as_slice() {
            [first, second, ..] => Some(format!("{}:{}", first.text(), second.text())),
            _ => non_empty(select_text(&item, ".m-item-result")?),
        };

        let date = match select_first(&item, ".m-item-date div")? {
            Some(div) => div.text(),
            None => select_text(&item, ".m-item-date")?,
        };

        matches.push(TeamMatch {
            event_name,
            event_stage,
            opponent,
            is_upcoming: is_upcoming_score(score.as_deref()),
            score,
            date,
            url: normalize_url(&item.attr("href").unwrap_or_default()),
        });
    }
    Ok(matches)
}

/// Played matches show a `2:1` style score; upcoming ones a countdown like `53m`.
pub(crate) fn is_upcoming_score(score: Option<&str>) -> bool {
    score.is_some_and(|score| !score.contains(':'))
}

fn parse_placements<N: DomNode>(root: &N) -> Result<Vec<EventPlacement>> {
    let mut placements = Vec::new();
    for item in root.select("a.team-event-item")? {
        let event_name = select_text(&item, ".text-of")?;

        let mut results = Vec::new();
        for line in item.select("div[style*=margin-top]")? {
            let Some(series) = select_first(&line, "span.team-event-item-series")? else {
                continue;
            };
            let prize = line
                .select("span")?
                .iter()
                .map(DomNode::text)
                .find(|text| text.contains('$'));
            let position = series.text();
            let (stage, rank) = match position
                .split_once(" – ")
                .or_else(|| position.split_once(" - "))
            {
                Some((stage, rank)) => (stage.trim().to_string(), rank.trim().to_string()),
                None => (String::new(), position.clone()),
            };
            if rank.is_empty() {
                continue;
            }
            results.push(PlacementResult { stage, rank, prize });
        }

        if event_name.is_empty() || results.is_empty() {
            continue;
        }
        placements.push(EventPlacement {
            event_name,
            year: item.children().get(1).map(DomNode::text).unwrap_or_default(),
            results,
            url: normalize_url(&item.attr("href").unwrap_or_default()),
        });
    }
    Ok(placements)
}

fn parse_rating_history<N: DomNode>(root: &N) -> Result<Vec<RatingHistoryEntry>> {
    let mut history = Vec::new();
    for link in root.select("a[href*='/rankings/']")? {
        let rank = select_text(&link, ".rank-num")?;
        let region = select_text(&link, ".rating-txt")?;
        if rank.is_empty() || region.is_empty() {
            continue;
        }
        history.push(RatingHistoryEntry {
            rank,
            region,
            url: normalize_url(&link.attr("href").unwrap_or_default()),
        });
    }
    Ok(history)
}

/// Split the rating timeline into match results and rank updates.
///
/// Rank updates reuse the match-result markup: their result is empty and
/// their opponent cell holds the rank (`#4`), the event cell the date and
/// the date cell the event.
fn parse_rating_timeline<N: DomNode>(root: &N) -> Result<(Vec<FormRating>, Vec<RankingHistoryEntry>)> {
    let mut form = Vec::new();
    let mut ranking = Vec::new();
    for item in root.select(".rating-history-item")? {
        let date = select_text(&item, ".rating-history-date")?;
        let opponent = select_text(&item, ".rating-history-opponent")?;
        let event = select_text(&item, ".rating-history-event")?;
        let result = select_text(&item, ".rating-history-result")?;
        let core_id = item.attr("data-core-id").unwrap_or_default();

        if result.is_empty() && opponent.starts_with('#') {
            ranking.push(RankingHistoryEntry {
                date: event,
                event: date,
                rank: opponent,
                core_id,
            });
        } else {
            form.push(FormRating {
                date,
                opponent,
                event,
                result,
                current_rating: parse_rating(&select_text(&item, ".rating-history-rating")?),
                opponent_rating: parse_rating(&select_text(&item, ".rating-history-opponent-rating")?),
                core_id,
            });
        }
    }
    Ok((form, ranking))
}

/// `1,874` gives `1874`.
fn parse_rating(text: &str) -> Option<i32> {
    text.chars()
        .filter(|c| c.is_ascii_digit() || *c == '-')
        .collect::<String>()
        .parse()
        .ok()
}

#[cfg(test)]
mod tests {
    use scraper::Html;

    use super::*;

    const TEAM_PAGE: &str = r#"
        <div class="team-header">
            <div class="team-header-logo"><img src="//owcdn.net/img/sen.png"></div>
            <div class="team-header-name"><h1 class="wf-title">Sentinels</h1><h2 class="team-header-tag">SEN</h2></div>
            <div class="team-header-country"><i class="flag mod-us"></i> United States</div>
            <div class="team-header-links">
                <a href="https://sentinels.gg">sentinels.gg</a>
                <a href="https://x.com/Sentinels">@Sentinels</a>
            </div>
        </div>
        <a href="/rankings/north-america"><div class="rank-num">#3</div><div class="rating-txt">North America</div></a>
        <div class="wf-card">
            <div class="wf-module-label">Total Winnings</div>
            <span>$2,134,000</span>
        </div>
        <div class="wf-card">
            <div class="team-roster-item">
                <a href="/player/9/tenz">
                    <div class="team-roster-item-img"><img src="//owcdn.net/img/tenz.png"></div>
                    <div class="team-roster-item-name-alias">TenZ</div>
                    <div class="team-roster-item-name-real">Tyson Ngo</div>
                </a>
            </div>
            <div class="team-roster-item">
                <a href="/player/3/kaplan">
                    <div class="team-roster-item-name-alias">kaplan</div>
                    <div class="team-roster-item-name-role">manager</div>
                </a>
            </div>
        </div>
        <p>Shoutout to <a href="/player/99/fan">a fan</a></p>
        <div class="wf-card">
            <a class="wf-module-item m-item" href="/500/sen-vs-loud">
                <div class="m-item-event"><div style="font-weight: 700;">Champions Tour</div> Playoffs ⋅ GF</div>
                <div class="m-item-team mod-right"><span class="m-item-team-name">LOUD</span></div>
                <div class="m-item-result"><span>2</span><span>1</span></div>
                <div class="m-item-date"><div>2025/08/03</div>3:00 pm</div>
            </a>
            <a class="wf-module-item m-item" href="/501/sen-vs-g2">
                <div class="m-item-event"><div class="text-of">Masters</div></div>
                <div class="m-item-team mod-right">G2 Esports</div>
                <div class="m-item-result">53m</div>
            </a>
            <a class="wf-module-item m-item" href="/502/x">
                <div class="m-item-team mod-right">No Event</div>
            </a>
        </div>
        <a class="team-event-item" href="/event/1/masters-madrid">
            <div class="text-of">Masters Madrid</div>
            <div>2024</div>
            <div style="margin-top: 5px;"><span class="team-event-item-series">Playoffs – 1st</span> <span>$350,000</span></div>
            <div style="margin-top: 5px;"><span class="team-event-item-series">Champion</span></div>
            <div style="margin-top: 5px;"><span class="team-event-item-series">Group Stage – 3rd–4th</span></div>
            <div style="margin-top: 5px;"><span class="team-event-item-series">5th–8th</span></div>
        </a>
        <div class="rating-history">
            <div class="rating-history-item" data-core-id="77">
                <div class="rating-history-date">2025/08/03</div>
                <div class="rating-history-opponent">LOUD</div>
                <div class="rating-history-event">Champions Tour</div>
                <div class="rating-history-result">W</div>
                <div class="rating-history-rating">1,874</div>
                <div class="rating-history-opponent-rating">1,802</div>
            </div>
            <div class="rating-history-item" data-core-id="78">
                <div class="rating-history-date">Champions Tour</div>
                <div class="rating-history-opponent">#4</div>
                <div class="rating-history-event">2025/08/04</div>
                <div class="rating-history-result"></div>
            </div>
        </div>
    "#;

    fn team() -> Team {
        let document = Html::parse_document(TEAM_PAGE);
        parse_team(&document.root_element(), "2", "https://www.vlr.gg/team/2").unwrap()
    }

    #[test]
    fn header_and_links() {
        let team = team();
        assert_eq!(team.name, "Sentinels");
        assert_eq!(team.tag.as_deref(), Some("SEN"));
        assert_eq!(team.logo_url.as_deref(), Some("https://owcdn.net/img/sen.png"));
        assert_eq!(team.region.as_deref(), Some("United States"));
        assert_eq!(team.social_links.get("twitter").map(String::as_str), Some("https://x.com/Sentinels"));
        assert_eq!(team.social_links.get("website").map(String::as_str), Some("https://sentinels.gg"));
        assert_eq!(team.total_winnings.as_deref(), Some("$2,134,000"));
        assert_eq!(
            team.rating_history,
            vec![RatingHistoryEntry {
                rank: "#3".into(),
                region: "North America".into(),
                url: "https://www.vlr.gg/rankings/north-america".into(),
            }]
        );
    }

    #[test]
    fn roster_only_from_cards() {
        let team = team();
        let aliases: Vec<_> = team.roster.iter().map(|p| p.alias.as_str()).collect();
        assert_eq!(aliases, vec!["TenZ", "kaplan"]);
        assert_eq!(team.roster[0].real_name.as_deref(), Some("Tyson Ngo"));
        assert_eq!(team.roster[0].image_url.as_deref(), Some("https://owcdn.net/img/tenz.png"));
        assert_eq!(team.roster[1].roles, vec!["manager"]);
        assert_eq!(team.roster[1].image_url, None);
    }

    #[test]
    fn matches_split_by_score_separator() {
        assert!(is_upcoming_score(Some("53m")));
        assert!(!is_upcoming_score(Some("2:1")));
        assert!(!is_upcoming_score(None));

        let team = team();
        assert_eq!(team.recent_matches.len(), 1);
        assert_eq!(team.upcoming_matches.len(), 1);

        let recent = &team.recent_matches[0];
        assert_eq!(recent.score.as_deref(), Some("2:1"));
        assert_eq!(recent.opponent, "LOUD");
        assert_eq!(recent.event_name, "Champions Tour");
        assert_eq!(recent.event_stage.as_deref(), Some("Playoffs ⋅ GF"));
        assert_eq!(recent.date, "2025/08/03");

        let upcoming = &team.upcoming_matches[0];
        assert_eq!(upcoming.score.as_deref(), Some("53m"));
        assert!(upcoming.is_upcoming);
        assert_eq!(upcoming.event_name, "Masters");
        assert_eq!(upcoming.event_stage, None);
    }

    #[test]
    fn placements_keep_rank_ranges_whole() {
        let team = team();
        let madrid = &team.event_placements[0];
        assert_eq!(madrid.event_name, "Masters Madrid");
        assert_eq!(madrid.year, "2024");
        assert_eq!(
            madrid.results,
            vec![
                PlacementResult { stage: "Playoffs".into(), rank: "1st".into(), prize: Some("$350,000".into()) },
                PlacementResult { stage: String::new(), rank: "Champion".into(), prize: None },
                PlacementResult { stage: "Group Stage".into(), rank: "3rd–4th".into(), prize: None },
                PlacementResult { stage: String::new(), rank: "5th–8th".into(), prize: None },
            ]
        );
    }

    #[test]
    fn rating_timeline_shapes() {
        let team = team();
        assert_eq!(
            team.form_rating,
            vec![FormRating {
                date: "2025/08/03".into(),
                opponent: "LOUD".into(),
                event: "Champions Tour".into(),
                result: "W".into(),
                current_rating: Some(1874),
                opponent_rating: Some(1802),
                core_id: "77".into(),
            }]
        );
        assert_eq!(
            team.ranking_history,
            vec![RankingHistoryEntry {
                date: "2025/08/04".into(),
                event: "Champions Tour".into(),
                rank: "#4".into(),
                core_id: "78".into(),
            }]
        );
    }
}

use itertools::Itertools;
use tracing::{debug, instrument};

use crate::dom::DomNode;
use crate::error::Result;
use crate::model::{PastTeam, Player};
use crate::vlr_scraper::normalize::{flag_url_of, normalize_url};
use crate::vlr_scraper::{
    self, first_non_empty, non_empty, select_all_text, select_first, select_text, Strategy,
    BASE_URL,
};

#[instrument(skip(client))]
pub(crate) async fn get_player(client: &reqwest::Client, player_id: &str) -> Result<Player> {
    let url = format!("{BASE_URL}/player/{player_id}");
    let document = vlr_scraper::get_document(client, &url).await?;
    let player = parse_player(&document.root_element(), player_id, &url)?;
    debug!(
        player_id,
        agents = player.agents.len(),
        past_teams = player.past_teams.len(),
        "parsed player"
    );
    Ok(player)
}

pub(crate) fn parse_player<N: DomNode>(root: &N, player_id: &str, url: &str) -> Result<Player> {
    let country_flag = match select_first(root, ".player-header-country .flag")? {
        Some(flag) => flag_url_of(&flag)?,
        None => None,
    };

    let team = match section_card(root, "Current Teams")? {
        Some(card) => select_first(&card, "a.wf-module-item")?
            .map(|link| team_link_name(&link))
            .transpose()?,
        None => None,
    };
    let team = match team.and_then(non_empty) {
        Some(team) => Some(team),
        None => non_empty(select_text(root, ".wf-module-item a[href*='/team/']")?),
    };

    let agents = root
        .select(".mod-agents img")?
        .iter()
        .filter_map(|img| img.attr("title").and_then(non_empty))
        .unique()
        .collect();

    let strategies: [Strategy<N, PastTeam>; 2] = [
        ("past teams section", past_teams_from_section::<N>),
        ("summary links", past_teams_from_summary::<N>),
    ];
    let past_teams = first_non_empty(root, &strategies)?
        .into_iter()
        .filter(|past| Some(&past.name) != team.as_ref())
        .unique_by(|past| past.name.clone())
        .collect();

    Ok(Player {
        id: player_id.to_string(),
        name: select_text(root, ".wf-title")?,
        real_name: non_empty(select_text(root, ".player-real-name, .player-header-name")?),
        country: non_empty(select_text(root, ".player-header-country")?),
        country_flag,
        team,
        agents,
        past_teams,
        url: url.to_string(),
    })
}

/// The card following the `h2.wf-label` whose text contains `title`.
fn section_card<N: DomNode>(root: &N, title: &str) -> Result<Option<N>> {
    Ok(root
        .select("h2.wf-label")?
        .into_iter()
        .find(|label| label.text().contains(title))
        .and_then(|label| label.next_sibling()))
}

/// Team name inside a team module link: the bold line, else the whole link text.
fn team_link_name<N: DomNode>(link: &N) -> Result<String> {
    let bold = link
        .select("div")?
        .into_iter()
        .find(|div| div.attr("style").is_some_and(|style| style.contains("font-weight")))
        .map(|div| div.text());
    Ok(bold.and_then(non_empty).unwrap_or_else(|| link.text()))
}

fn past_teams_from_section<N: DomNode>(root: &N) -> Result<Vec<PastTeam>> {
    let Some(card) = section_card(root, "Past Teams")? else {
        return Ok(Vec::new());
    };
    let mut teams = Vec::new();
    for link in card.select("a.wf-module-item")? {
        let name = team_link_name(&link)?;
        if name.is_empty() {
            continue;
        }
        teams.push(PastTeam {
            name,
            period: non_empty(select_all_text(&link, ".ge-text-light")?),
            url: normalize_url(&link.attr("href").unwrap_or_default()),
        });
    }
    Ok(teams)
}

fn past_teams_from_summary<N: DomNode>(root: &N) -> Result<Vec<PastTeam>> {
    let mut teams = Vec::new();
    for link in root.select(".player-summary-container a[href*='/team/']")? {
        let name = link.text();
        if name.is_empty() {
            continue;
        }
        let period = link
            .parent()
            .map(|parent| parent.text().replacen(&name, "", 1))
            .and_then(non_empty);
        teams.push(PastTeam {
            period,
            url: normalize_url(&link.attr("href").unwrap_or_default()),
            name,
        });
    }
    Ok(teams)
}

#[cfg(test)]
mod tests {
    use scraper::Html;

    use super::*;

    const PLAYER_PAGE: &str = r#"
        <div class="player-header">
            <h1 class="wf-title">TenZ</h1>
            <h2 class="player-real-name">Tyson Ngo</h2>
            <div class="player-header-country"><i class="flag mod-ca"></i> Canada</div>
        </div>
        <h2 class="wf-label">Current Teams</h2>
        <div class="wf-card">
            <a class="wf-module-item" href="/team/2/sentinels">
                <div><div style="font-weight: 500;">Sentinels</div><div class="ge-text-light">joined in March 2021</div></div>
            </a>
        </div>
        <h2 class="wf-label">Past Teams</h2>
        <div class="wf-card">
            <a class="wf-module-item" href="/team/2/sentinels">
                <div><div style="font-weight: 500;">Sentinels</div><div class="ge-text-light">2020 – 2021</div></div>
            </a>
            <a class="wf-module-item" href="/team/5/cloud9">
                <div><div style="font-weight: 500;">Cloud9 Blue</div><div class="ge-text-light">2020</div></div>
            </a>
            <a class="wf-module-item" href="/team/5/cloud9">
                <div><div style="font-weight: 500;">Cloud9 Blue</div></div>
            </a>
        </div>
        <table><tbody>
            <tr><td class="mod-agents"><img title="jett"><img title="raze"></td></tr>
            <tr><td class="mod-agents"><img title="jett"><img title=""></td></tr>
        </tbody></table>
    "#;

    #[test]
    fn player_profile() {
        let document = Html::parse_document(PLAYER_PAGE);
        let player =
            parse_player(&document.root_element(), "9", "https://www.vlr.gg/player/9").unwrap();

        assert_eq!(player.name, "TenZ");
        assert_eq!(player.real_name.as_deref(), Some("Tyson Ngo"));
        assert_eq!(player.country.as_deref(), Some("Canada"));
        assert_eq!(
            player.country_flag.as_deref(),
            Some("https://www.vlr.gg/img/icons/flags/16/ca.png")
        );
        assert_eq!(player.team.as_deref(), Some("Sentinels"));
        assert_eq!(player.agents, vec!["jett", "raze"]);
    }

    #[test]
    fn past_teams_skip_current_and_duplicates() {
        let document = Html::parse_document(PLAYER_PAGE);
        let player = parse_player(&document.root_element(), "9", "").unwrap();

        assert_eq!(
            player.past_teams,
            vec![PastTeam {
                name: "Cloud9 Blue".into(),
                period: Some("2020".into()),
                url: "https://www.vlr.gg/team/5/cloud9".into(),
            }]
        );
    }

    #[test]
    fn past_teams_from_summary_links() {
        let document = Html::parse_document(
            r#"<h1 class="wf-title">yay</h1>
               <div class="player-summary-container">
                   <div><a href="/team/188/optic">OpTic Gaming</a> 2022 – 2023</div>
               </div>"#,
        );
        let player = parse_player(&document.root_element(), "1", "").unwrap();

        assert_eq!(player.team, None);
        assert_eq!(player.past_teams[0].name, "OpTic Gaming");
        assert_eq!(player.past_teams[0].period.as_deref(), Some("2022 – 2023"));
        assert_eq!(player.real_name, None);
        assert!(player.agents.is_empty());
    }
}

//! Bracket trees of an event page.
//!
//! Markup is a set of `.bracket-container` blocks (modified by `mod-upper`,
//! `mod-lower` or `mod-middle`), each split into `.bracket-col` columns with a
//! `.bracket-col-label` and a list of `.bracket-item` matches.

use tracing::debug;

use crate::dom::DomNode;
use crate::error::Result;
use crate::model::{EventBracketGroup, EventBracketMatch, EventBracketRound, EventBracketTeam};
use crate::vlr_scraper::normalize::{image_url, normalize_url};
use crate::vlr_scraper::{non_empty, select_attr, select_text};

const DEFAULT_GROUP: &str = "Main";

type GroupStrategy<N> = (&'static str, fn(&str, &N) -> Option<String>);

pub(crate) fn parse_brackets<N: DomNode>(root: &N) -> Result<Vec<EventBracketGroup>> {
    let strategies: [GroupStrategy<N>; 2] = [
        ("round label", group_from_label::<N>),
        ("container class", group_from_container::<N>),
    ];

    let mut groups: Vec<EventBracketGroup> = Vec::new();
    for container in root.select(".bracket-container")? {
        for (index, column) in container.select(".bracket-col")?.iter().enumerate() {
            let matches = column
                .select(".bracket-item")?
                .iter()
                .map(parse_bracket_match)
                .collect::<Result<Vec<_>>>()?;
            if matches.is_empty() {
                continue;
            }

            let label = select_text(column, ".bracket-col-label")?;
            let group_name = strategies
                .iter()
                .find_map(|(name, strategy)| {
                    let group = strategy(&label, &container)?;
                    debug!(strategy = *name, %group, "resolved bracket group");
                    Some(group)
                })
                .unwrap_or_else(|| DEFAULT_GROUP.to_string());

            let round = EventBracketRound {
                name: non_empty(label).unwrap_or_else(|| format!("Round {}", index + 1)),
                matches,
            };
            match groups.iter_mut().find(|group| group.name == group_name) {
                Some(group) => group.rounds.push(round),
                None => groups.push(EventBracketGroup {
                    name: group_name,
                    rounds: vec![round],
                }),
            }
        }
    }
    Ok(groups)
}

/// `Upper Round 1` gives `Upper`.
fn group_from_label<N: DomNode>(label: &str, _container: &N) -> Option<String> {
    let (word, _) = label.split_once(" Round")?;
    let word = word.trim();
    (!word.is_empty() && !word.contains(char::is_whitespace)).then(|| word.to_string())
}

fn group_from_container<N: DomNode>(_label: &str, container: &N) -> Option<String> {
    [("mod-upper", "Upper"), ("mod-lower", "Lower"), ("mod-middle", "Middle")]
        .into_iter()
        .find(|(class, _)| container.has_class(class))
        .map(|(_, name)| name.to_string())
}

fn parse_bracket_match<N: DomNode>(item: &N) -> Result<EventBracketMatch> {
    let mut slots = item
        .select(".bracket-item-team")?
        .iter()
        .map(parse_bracket_team)
        .collect::<Result<Vec<_>>>()?
        .into_iter();

    let href = match item.attr("href").and_then(non_empty) {
        Some(href) => Some(href),
        None => select_attr(item, "a", "href")?,
    };

    Ok(EventBracketMatch {
        team1: slots.next().unwrap_or_else(EventBracketTeam::tbd),
        team2: slots.next().unwrap_or_else(EventBracketTeam::tbd),
        status: non_empty(select_text(item, ".bracket-item-status")?),
        url: href.map(|href| normalize_url(&href)),
    })
}

fn parse_bracket_team<N: DomNode>(slot: &N) -> Result<EventBracketTeam> {
    Ok(EventBracketTeam {
        name: non_empty(select_text(slot, ".bracket-item-team-name")?)
            .unwrap_or_else(|| EventBracketTeam::TBD.to_string()),
        score: non_empty(select_text(slot, ".bracket-item-team-score")?),
        is_winner: slot.has_class("mod-winner"),
        logo_url: image_url(slot, "img")?,
    })
}

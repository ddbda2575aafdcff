mod bracket;
mod detail;
mod list;

use bracket::parse_brackets;
pub(crate) use detail::{get_event_detail, get_event_detail_by_url};
pub(crate) use list::get_events;

/// Numeric id following `/event/` in an event link, e.g. `/event/2283/champions` gives `2283`.
pub(crate) fn event_id_from_url(url: &str) -> Option<String> {
    let (_, rest) = url.split_once("/event/")?;
    let rest = rest.strip_prefix("matches/").unwrap_or(rest);
    let id = rest.split(['/', '?']).next()?;
    (!id.is_empty() && id.chars().all(|c| c.is_ascii_digit())).then(|| id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_ids() {
        assert_eq!(event_id_from_url("/event/2283/valorant-champions-2025").as_deref(), Some("2283"));
        assert_eq!(event_id_from_url("https://www.vlr.gg/event/2283").as_deref(), Some("2283"));
        assert_eq!(event_id_from_url("/event/matches/2283/?series_id=all").as_deref(), Some("2283"));
        assert_eq!(event_id_from_url("/events"), None);
        assert_eq!(event_id_from_url("/event/champions"), None);
    }
}

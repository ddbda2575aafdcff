use tracing::{debug, instrument};

use super::event_id_from_url;
use crate::dom::DomNode;
use crate::error::Result;
use crate::model::{Event, EventStatus};
use crate::vlr_scraper::normalize::{country_code, image_url, normalize_url};
use crate::vlr_scraper::{
    self, non_empty, select_first, select_own_text, select_text, BASE_URL,
};

#[instrument(skip(client))]
pub(crate) async fn get_events(client: &reqwest::Client) -> Result<Vec<Event>> {
    let document = vlr_scraper::get_document(client, &format!("{BASE_URL}/events")).await?;
    let events = parse_events(&document.root_element())?;
    debug!(count = events.len(), "parsed events");
    Ok(events)
}

pub(crate) fn parse_events<N: DomNode>(root: &N) -> Result<Vec<Event>> {
    root.select("a.event-item")?
        .iter()
        .map(parse_event)
        .filter_map(Result::transpose)
        .collect()
}

fn parse_event<N: DomNode>(item: &N) -> Result<Option<Event>> {
    let Some(href) = item.attr("href").and_then(non_empty) else {
        return Ok(None);
    };

    // Description values carry their label as a child element.
    let prize_text = select_own_text(item, ".event-item-desc-item.mod-prize")?;
    let prize_pool = prize_text
        .split(" Prize Pool")
        .next()
        .unwrap_or_default()
        .trim()
        .to_string();

    let region = match select_first(item, ".event-item-desc-item.mod-location .flag")? {
        Some(flag) => country_code(&flag.class_names().join(" "))?.unwrap_or_default(),
        None => String::new(),
    };

    Ok(Some(Event {
        id: event_id_from_url(&href).unwrap_or_default(),
        name: select_text(item, ".event-item-title")?,
        status: parse_status(item)?,
        dates: select_own_text(item, ".event-item-desc-item.mod-dates")?,
        region,
        prize_pool,
        image: image_url(item, ".event-item-thumb img")?,
        url: normalize_url(&href),
    }))
}

/// Status from the `mod-<status>` class, falling back to the displayed text.
fn parse_status<N: DomNode>(item: &N) -> Result<EventStatus> {
    let Some(status) = select_first(item, "[class*=event-item-desc-item-status]")? else {
        return Ok(EventStatus::Unknown);
    };
    let from_class = status
        .class_names()
        .iter()
        .filter_map(|class| class.strip_prefix("mod-"))
        .find_map(|name| name.parse::<EventStatus>().ok());
    Ok(from_class
        .or_else(|| status.text().parse().ok())
        .unwrap_or_default())
}

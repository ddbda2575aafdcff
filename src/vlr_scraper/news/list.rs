use itertools::Itertools;
use regex::Regex;
use tracing::{debug, instrument};

use crate::dom::DomNode;
use crate::error::Result;
use crate::model::NewsItem;
use crate::vlr_scraper::normalize::normalize_url;
use crate::vlr_scraper::{self, non_empty, paged_url, BASE_URL};

const BULLET: char = '•';

#[instrument(skip(client))]
pub(crate) async fn get_news(client: &reqwest::Client, page: u32) -> Result<Vec<NewsItem>> {
    let url = paged_url(&format!("{BASE_URL}/news"), page);
    let document = vlr_scraper::get_document(client, &url).await?;
    let news = parse_news(&document.root_element())?;
    debug!(count = news.len(), "parsed news");
    Ok(news)
}

/// Article links of the news listing.
///
/// The listing has no stable item class, so an article is any `/<id>/<slug>`
/// link that is not a match or team link and whose text reads
/// `title • date • by author`.
pub(crate) fn parse_news<N: DomNode>(root: &N) -> Result<Vec<NewsItem>> {
    let article_href = Regex::new(r"^/\d+/")?;

    let mut news = Vec::new();
    for link in root.select("a[href]")? {
        let href = link.attr("href").unwrap_or_default();
        if !article_href.is_match(&href) || href.contains("/match/") || href.contains("/team/") {
            continue;
        }
        let text = link.text();
        if !text.contains(BULLET) {
            continue;
        }

        let parts: Vec<&str> = text.split(BULLET).map(str::trim).collect();
        let [title @ .., date, author] = parts.as_slice() else {
            continue;
        };
        let Some(title) = non_empty(title.iter().filter(|part| !part.is_empty()).join(" • ")) else {
            continue;
        };

        news.push(NewsItem {
            title,
            description: String::new(),
            author: author.strip_prefix("by ").unwrap_or(*author).to_string(),
            date: date.to_string(),
            url: normalize_url(&href),
        });
    }
    Ok(news)
}

use tracing::{debug, instrument};

use super::thread::{build_comment_forest, FlatPost};
use crate::dom::DomNode;
use crate::error::Result;
use crate::model::NewsDetail;
use crate::vlr_scraper::normalize::normalize_url;
use crate::vlr_scraper::{self, select_all_text, select_attr, select_text};

#[instrument(skip(client))]
pub(crate) async fn get_news_detail(client: &reqwest::Client, url: &str) -> Result<NewsDetail> {
    let url = normalize_url(url);
    let document = vlr_scraper::get_document(client, &url).await?;
    let detail = parse_news_detail(&document.root_element(), &url)?;
    debug!(title = %detail.title, comments = detail.comments.len(), "parsed news article");
    Ok(detail)
}

pub(crate) fn parse_news_detail<N: DomNode>(root: &N, url: &str) -> Result<NewsDetail> {
    let mut posts = Vec::new();
    for post in root.select(".post")? {
        posts.push(FlatPost {
            depth: thread_depth(&post),
            author: select_text(&post, ".post-header-author")?,
            content: select_text(&post, ".post-body")?,
            url: select_attr(&post, "a.post-header-num", "href")?.map(|href| normalize_url(&href)),
        });
    }

    let content = match select_all_text(root, ".article-body p")? {
        paragraphs if !paragraphs.is_empty() => paragraphs,
        _ => select_text(root, ".article-body")?,
    };

    Ok(NewsDetail {
        title: select_text(root, ".article-header h1, .wf-title")?,
        author: select_text(root, ".article-meta-author")?,
        date: select_text(root, ".article-meta .js-date-toggle")?,
        content,
        url: url.to_string(),
        comments: build_comment_forest(posts),
    })
}

/// Posts sit in one `.threading` container per nesting level, the outermost
/// holding the top-level posts.
fn thread_depth<N: DomNode>(post: &N) -> usize {
    let mut containers: usize = 0;
    let mut node = post.parent();
    while let Some(current) = node {
        if current.has_class("threading") {
            containers += 1;
        }
        node = current.parent();
    }
    containers.saturating_sub(1)
}

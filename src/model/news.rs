use serde::{Deserialize, Serialize};

/// An article from the news listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub description: String,
    pub author: String,
    pub date: String,
    pub url: String,
}

/// A full article with its discussion thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsDetail {
    pub title: String,
    pub author: String,
    pub date: String,
    pub content: String,
    pub url: String,
    pub comments: Vec<ThreadComment>,
}

/// A post in a discussion thread and the replies nested under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadComment {
    pub author: String,
    pub content: String,
    pub url: Option<String>,
    #[serde(default)]
    pub children: Vec<ThreadComment>,
}

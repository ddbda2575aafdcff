mod detail;
mod list;
mod thread;

pub(crate) use detail::get_news_detail;
pub(crate) use list::get_news;
pub use thread::{build_comment_forest, FlatPost};

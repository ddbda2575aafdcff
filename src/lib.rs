//! Valorant esports data from vlr.gg.
//!
//! [`VlrClient`] fetches a page and turns it into typed records from
//! [`model`]. [`VlrDataService`] puts a [`cache::CacheStore`] in front of the
//! client so repeated lookups stay off the site.

pub mod cache;
mod client;
mod config;
pub mod dom;
mod error;
pub mod model;
mod service;
mod vlr_scraper;

pub use client::VlrClient;
pub use config::CacheConfig;
pub use error::{CacheError, Result, VlrError};
pub use service::VlrDataService;
pub use vlr_scraper::news::{build_comment_forest, FlatPost};

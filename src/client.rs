use tracing::instrument;

use crate::error::Result;
use crate::model::*;
use crate::vlr_scraper;

/// Uncached access to vlr.gg.
///
/// Every method fetches one page and extracts its records. Wrap the client in
/// a [`VlrDataService`](crate::VlrDataService) to cache results.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> vlr_data::Result<()> {
/// use vlr_data::VlrClient;
///
/// let client = VlrClient::new();
/// let live = client.get_live_matches().await?;
/// println!("{} matches live", live.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct VlrClient {
    http: reqwest::Client,
}

impl VlrClient {
    /// Create a new client with default settings.
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }

    /// Create a new client using the provided [`reqwest::Client`].
    ///
    /// Use this when you need to configure timeouts, proxies, headers, etc.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { http: client }
    }

    /// Upcoming matches, one listing page at a time.
    #[instrument(skip(self))]
    pub async fn get_upcoming_matches(&self, page: u32) -> Result<Vec<Match>> {
        vlr_scraper::matches::get_upcoming_matches(&self.http, page).await
    }

    /// Completed matches from the results listing.
    #[instrument(skip(self))]
    pub async fn get_completed_matches(&self, page: u32) -> Result<Vec<Match>> {
        vlr_scraper::matches::get_completed_matches(&self.http, page).await
    }

    /// Matches filtered by a region slug such as `europe`.
    #[instrument(skip(self))]
    pub async fn get_matches_by_region(&self, region: &str, page: u32) -> Result<Vec<Match>> {
        vlr_scraper::matches::get_matches_by_region(&self.http, region, page).await
    }

    #[instrument(skip(self))]
    pub async fn get_matches_by_event(&self, event_id: &str, page: u32) -> Result<Vec<Match>> {
        vlr_scraper::matches::get_matches_by_event(&self.http, event_id, page).await
    }

    /// Matches currently live on the home page.
    #[instrument(skip(self))]
    pub async fn get_live_matches(&self) -> Result<Vec<LiveMatch>> {
        vlr_scraper::matches::get_live_matches(&self.http).await
    }

    #[instrument(skip(self))]
    pub async fn get_events(&self) -> Result<Vec<Event>> {
        vlr_scraper::events::get_events(&self.http).await
    }

    #[instrument(skip(self))]
    pub async fn get_event_detail(&self, event_id: &str) -> Result<EventDetail> {
        vlr_scraper::events::get_event_detail(&self.http, event_id).await
    }

    /// Event detail for an absolute or root-relative event URL.
    #[instrument(skip(self))]
    pub async fn get_event_detail_by_url(&self, event_url: &str) -> Result<EventDetail> {
        vlr_scraper::events::get_event_detail_by_url(&self.http, event_url).await
    }

    /// Player statistics table.
    #[instrument(skip(self))]
    pub async fn get_stats(&self) -> Result<Vec<PlayerStat>> {
        vlr_scraper::stats::get_stats(&self.http).await
    }

    #[instrument(skip(self))]
    pub async fn get_news(&self, page: u32) -> Result<Vec<NewsItem>> {
        vlr_scraper::news::get_news(&self.http, page).await
    }

    /// An article and its comment thread.
    #[instrument(skip(self))]
    pub async fn get_news_detail(&self, url: &str) -> Result<NewsDetail> {
        vlr_scraper::news::get_news_detail(&self.http, url).await
    }

    #[instrument(skip(self))]
    pub async fn get_transfers(&self, page: u32) -> Result<Vec<Transfer>> {
        vlr_scraper::transfers::get_transfers(&self.http, page).await
    }

    /// Team profile with roster, matches, placements and rating history.
    #[instrument(skip(self))]
    pub async fn get_team(&self, team_id: &str) -> Result<Team> {
        vlr_scraper::team::get_team(&self.http, team_id).await
    }

    #[instrument(skip(self))]
    pub async fn get_player(&self, player_id: &str) -> Result<Player> {
        vlr_scraper::player::get_player(&self.http, player_id).await
    }

    #[instrument(skip(self))]
    pub async fn search_teams(&self, query: &str) -> Result<Vec<TeamSearchResult>> {
        vlr_scraper::search::search_teams(&self.http, query).await
    }

    #[instrument(skip(self))]
    pub async fn search_players(&self, query: &str) -> Result<Vec<PlayerSearchResult>> {
        vlr_scraper::search::search_players(&self.http, query).await
    }

    #[instrument(skip(self))]
    pub async fn get_match_streams(&self, match_url: &str) -> Result<Vec<StreamLink>> {
        vlr_scraper::matches::get_match_streams(&self.http, match_url).await
    }

    /// Rankings of every region, grouped by region.
    #[instrument(skip(self))]
    pub async fn get_global_rankings(&self) -> Result<Vec<RegionRankings>> {
        vlr_scraper::rankings::get_global_rankings(&self.http).await
    }

    #[instrument(skip(self))]
    pub async fn get_rankings_by_region(&self, region: &str) -> Result<Vec<TeamRanking>> {
        vlr_scraper::rankings::get_rankings_by_region(&self.http, region).await
    }

    /// Full match page: teams, maps, per-map player stats and rounds.
    #[instrument(skip(self))]
    pub async fn get_match_details(&self, match_url: &str) -> Result<MatchDetail> {
        vlr_scraper::matches::get_match_details(&self.http, match_url).await
    }
}

impl Default for VlrClient {
    fn default() -> Self {
        Self::new()
    }
}

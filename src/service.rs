use std::future::Future;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{info, instrument};

use crate::cache::{get_or_compute, CacheKey, CacheStore, MemoryStore, Resource};
use crate::client::VlrClient;
use crate::config::CacheConfig;
use crate::error::Result;
use crate::model::*;

/// [`VlrClient`] behind a cache.
///
/// Each method looks its record up under a resource-specific key and only
/// fetches from vlr.gg on a miss. Expiry follows [`CacheConfig::ttl_for`].
#[derive(Debug, Clone)]
pub struct VlrDataService<S> {
    client: VlrClient,
    store: S,
    config: CacheConfig,
}

impl VlrDataService<MemoryStore> {
    /// A service with a default client and an in-process store sized by `config`.
    pub fn in_memory(config: CacheConfig) -> Self {
        let store = MemoryStore::new(config.max_capacity);
        Self::new(VlrClient::new(), store, config)
    }
}

impl<S: CacheStore> VlrDataService<S> {
    pub fn new(client: VlrClient, store: S, config: CacheConfig) -> Self {
        Self { client, store, config }
    }

    pub fn client(&self) -> &VlrClient {
        &self.client
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    async fn cached<T, F, Fut>(&self, key: CacheKey, compute: F) -> Result<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let ttl = self.config.ttl_for(key.resource());
        get_or_compute(&self.store, &key, ttl, compute).await
    }

    /// Drop every cached record.
    #[instrument(skip(self))]
    pub async fn invalidate(&self) -> Result<()> {
        self.store.invalidate().await?;
        info!("cache invalidated");
        Ok(())
    }

    pub async fn get_upcoming_matches(&self, page: u32) -> Result<Vec<Match>> {
        let key = CacheKey::new(Resource::UpcomingMatches).param(page);
        self.cached(key, || self.client.get_upcoming_matches(page)).await
    }

    pub async fn get_completed_matches(&self, page: u32) -> Result<Vec<Match>> {
        let key = CacheKey::new(Resource::CompletedMatches).param(page);
        self.cached(key, || self.client.get_completed_matches(page)).await
    }

    pub async fn get_matches_by_region(&self, region: &str, page: u32) -> Result<Vec<Match>> {
        let key = CacheKey::new(Resource::MatchesByRegion).param(region).param(page);
        self.cached(key, || self.client.get_matches_by_region(region, page)).await
    }

    pub async fn get_matches_by_event(&self, event_id: &str, page: u32) -> Result<Vec<Match>> {
        let key = CacheKey::new(Resource::MatchesByEvent).param(event_id).param(page);
        self.cached(key, || self.client.get_matches_by_event(event_id, page)).await
    }

    pub async fn get_live_matches(&self) -> Result<Vec<LiveMatch>> {
        let key = CacheKey::new(Resource::LiveMatches);
        self.cached(key, || self.client.get_live_matches()).await
    }

    pub async fn get_events(&self) -> Result<Vec<Event>> {
        let key = CacheKey::new(Resource::Events);
        self.cached(key, || self.client.get_events()).await
    }

    pub async fn get_event_detail(&self, event_id: &str) -> Result<EventDetail> {
        let key = CacheKey::new(Resource::EventDetail).param(event_id);
        self.cached(key, || self.client.get_event_detail(event_id)).await
    }

    pub async fn get_event_detail_by_url(&self, event_url: &str) -> Result<EventDetail> {
        let key = CacheKey::new(Resource::EventDetailUrl).param(event_url);
        self.cached(key, || self.client.get_event_detail_by_url(event_url)).await
    }

    pub async fn get_stats(&self) -> Result<Vec<PlayerStat>> {
        let key = CacheKey::new(Resource::Stats);
        self.cached(key, || self.client.get_stats()).await
    }

    pub async fn get_news(&self, page: u32) -> Result<Vec<NewsItem>> {
        let key = CacheKey::new(Resource::News).param(page);
        self.cached(key, || self.client.get_news(page)).await
    }

    pub async fn get_news_detail(&self, url: &str) -> Result<NewsDetail> {
        let key = CacheKey::new(Resource::NewsDetail).param(url);
        self.cached(key, || self.client.get_news_detail(url)).await
    }

    pub async fn get_transfers(&self, page: u32) -> Result<Vec<Transfer>> {
        let key = CacheKey::new(Resource::Transfers).param(page);
        self.cached(key, || self.client.get_transfers(page)).await
    }

    pub async fn get_team(&self, team_id: &str) -> Result<Team> {
        let key = CacheKey::new(Resource::Team).param(team_id);
        self.cached(key, || self.client.get_team(team_id)).await
    }

    pub async fn get_player(&self, player_id: &str) -> Result<Player> {
        let key = CacheKey::new(Resource::Player).param(player_id);
        self.cached(key, || self.client.get_player(player_id)).await
    }

    pub async fn search_teams(&self, query: &str) -> Result<Vec<TeamSearchResult>> {
        let key = CacheKey::new(Resource::SearchTeams).param(query);
        self.cached(key, || self.client.search_teams(query)).await
    }

    pub async fn search_players(&self, query: &str) -> Result<Vec<PlayerSearchResult>> {
        let key = CacheKey::new(Resource::SearchPlayers).param(query);
        self.cached(key, || self.client.search_players(query)).await
    }

    pub async fn get_match_streams(&self, match_url: &str) -> Result<Vec<StreamLink>> {
        let key = CacheKey::new(Resource::MatchStreams).param(match_url);
        self.cached(key, || self.client.get_match_streams(match_url)).await
    }

    pub async fn get_global_rankings(&self) -> Result<Vec<RegionRankings>> {
        let key = CacheKey::new(Resource::GlobalRankings);
        self.cached(key, || self.client.get_global_rankings()).await
    }

    pub async fn get_rankings_by_region(&self, region: &str) -> Result<Vec<TeamRanking>> {
        let key = CacheKey::new(Resource::RankingsByRegion).param(region);
        self.cached(key, || self.client.get_rankings_by_region(region)).await
    }

    pub async fn get_match_details(&self, match_url: &str) -> Result<MatchDetail> {
        let key = CacheKey::new(Resource::MatchDetails).param(match_url);
        self.cached(key, || self.client.get_match_details(match_url)).await
    }
}

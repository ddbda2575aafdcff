use tracing_subscriber::EnvFilter;

use vlr_data::{CacheConfig, VlrDataService};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("vlr_data=debug".parse()?))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let service = VlrDataService::in_memory(CacheConfig::from_env()?);

    let live = service.get_live_matches().await?;
    println!("{} matches live", live.len());
    for m in &live {
        println!("  {} {}-{} {} ({})", m.team1, m.score1, m.score2, m.team2, m.event);
    }

    // The second lookup is served from the cache.
    let rankings = service.get_global_rankings().await?;
    let rankings_again = service.get_global_rankings().await?;
    assert_eq!(rankings, rankings_again);

    for region in &rankings {
        println!("{} ({} teams)", region.region, region.rankings.len());
        for team in region.rankings.iter().take(3) {
            println!("  #{} {} {}", team.rank, team.team_name, team.points);
        }
    }

    let top = rankings.first().and_then(|r| r.rankings.first());
    if let Some(team) = top {
        println!("{}", serde_json::to_string_pretty(team)?);
    }
    Ok(())
}

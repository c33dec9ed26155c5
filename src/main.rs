use nigeria_geo::{Config, NigeriaGeo};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Load .env file BEFORE initializing logger so RUST_LOG is available
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;
    tracing::info!("Configuration loaded successfully");

    let geo = NigeriaGeo::from_config(&config.data)
        .map_err(|e| anyhow::anyhow!("Failed to build geo index: {}", e))?;

    let metadata = geo.metadata();
    tracing::info!(
        "Hierarchy loaded: states={}, lgas={}, regions={}",
        metadata.total_states,
        metadata.total_lgas,
        metadata.regions.len()
    );

    if let Some(lagos) = geo.states().get_state_with_lgas("LA") {
        tracing::info!(
            "{} ({}): capital={}, region={}, lgas={}",
            lagos.state.name,
            lagos.state.code,
            lagos.state.capital,
            lagos.state.region,
            lagos.lga_count
        );
    }

    if config.report.include_regions {
        for stats in geo.regions().get_all_region_stats() {
            let names: Vec<&str> = stats.states.iter().map(|s| s.name.as_str()).collect();
            tracing::info!(
                "{}: {} states, {} LGAs [{}]",
                stats.region,
                stats.state_count,
                stats.lga_count,
                names.join(", ")
            );
        }
    }

    Ok(())
}

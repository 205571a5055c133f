//! Graphite demo binary
//!
//! Runs the lending desk and the marketplace against a locally seeded
//! provider for the configured wallet.

use std::sync::Arc;

use anyhow::Result;
use rust_decimal_macros::dec;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use graphite_apps::{TrustLendingApp, TrustMarketplace};
use graphite_client::{AccountState, ClientConfig, GraphiteClient, InMemoryTrustProvider};
use graphite_common::{Address, VERSION};

/// Wallet used when GRAPHITE_WALLET_ADDRESS is unset
const DEMO_WALLET: &str = "0x52908400098527886e0f7030069857d2e4169ee7";

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Graphite demo v{}", VERSION);

    // Load configuration
    let config = ClientConfig::load()?;
    info!("Loaded configuration: {:?}", config);

    let wallet = match &config.wallet_address {
        Some(addr) => addr.clone(),
        None => Address::parse(DEMO_WALLET)?,
    };

    // Activated, email-verified wallet with mid-range reputation
    let provider = Arc::new(InMemoryTrustProvider::new(wallet.clone()).with_account(
        wallet.clone(),
        AccountState::new(true, 600, 1).with_balance(dec!(100)),
    ));

    let client = GraphiteClient::connect(config.clone(), provider.clone())?;

    if let Some(stats) = client.network_stats().await {
        info!(latest_block = stats.latest_block, "Network reachable");
    }

    let report = client.get_trust_profile(None).await?;
    info!(
        tier = %report.trust_tier,
        features = ?report.eligible_features,
        "Wallet trust profile"
    );

    // Lending desk
    let lending = TrustLendingApp::new(client);
    let application = lending
        .process_loan_application(&wallet, dec!(5000), "Business expansion")
        .await?;
    info!(
        decision = ?application.decision,
        pool_remaining = %lending.available(),
        "Loan application processed"
    );

    // Marketplace
    let marketplace = TrustMarketplace::new(GraphiteClient::connect(config, provider)?);
    for (value, name) in [(dec!(500), "Vintage Watch"), (dec!(15000), "Luxury Car")] {
        let decision = marketplace.create_listing(&wallet, value, name).await?;
        info!(item = name, ?decision, "Listing processed");
    }

    info!("Demo finished");
    Ok(())
}

//! # Pickup Match Bot Main Entry Point
//!
//! Initializes logging, loads configuration, creates the shared match record,
//! starts the alarm and expiration jobs, and runs the Telegram bot next to the
//! health check server.

use anyhow::Result;
use teloxide::prelude::*;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pickup_match_bot::bot::handlers::BotHandler;
use pickup_match_bot::config::Config;
use pickup_match_bot::models::MatchRecord;
use pickup_match_bot::services::health::HealthService;
use pickup_match_bot::services::scheduler::MatchScheduler;
use pickup_match_bot::utils::logging::log_system_event;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pickup_match_bot=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    info!("Starting Pickup Match Bot v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration loaded - HTTP Port: {}, prices: {:?}",
        config.http_port, config.prices
    );

    let state = MatchRecord::new(config.prices).into_shared();

    // Initialize bot
    let bot = Bot::new(&config.telegram_bot_token);
    let handler = BotHandler::new(state.clone());
    info!("Telegram bot initialized successfully");

    // Alarm and expiration jobs
    let mut scheduler = match MatchScheduler::new(bot.clone(), state.clone()).await {
        Ok(scheduler) => scheduler,
        Err(e) => {
            tracing::error!("Failed to create match scheduler: {}", e);
            return Err(anyhow::anyhow!("Failed to create match scheduler: {}", e));
        }
    };
    if let Err(e) = scheduler.start().await {
        tracing::error!("Failed to start match scheduler: {}", e);
        return Err(anyhow::anyhow!("Failed to start match scheduler: {}", e));
    }
    info!("Match scheduler started successfully");

    let health_service = HealthService::new(state.clone());
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.http_port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to port {}: {}", config.http_port, e))?;

    info!("Health check server starting on port {}", config.http_port);

    let bot_task = tokio::spawn(async move {
        Dispatcher::builder(bot, handler.schema())
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;
    });

    let health_task = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, health_service.router).await {
            tracing::error!("Health server error: {}", e);
        }
    });

    // Either task ending means shutdown
    tokio::select! {
        result = bot_task => {
            if let Err(e) = result {
                tracing::error!("Bot task error: {}", e);
            }
        }
        result = health_task => {
            if let Err(e) = result {
                tracing::error!("Health task error: {}", e);
            }
        }
    }

    if let Err(e) = scheduler.stop().await {
        tracing::warn!("Error stopping match scheduler: {}", e);
    }

    log_system_event("shutdown", Some("application stopped"));
    Ok(())
}

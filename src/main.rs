#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::unreadable_literal)]

use std::{sync::Arc, time::Instant};

use serenity::{http::Http, prelude::GatewayIntents, Client};
use tracing::{error, info};

mod commands;
mod common;
mod engine;
mod events;
mod models;

use crate::{
    common::notifier::DiscordNotifier,
    engine::{GiveawayEngine, TokioClock},
    models::{config::Config, handler::Handler},
};

#[tokio::main]
async fn main() {
    let config = Config::from_env();

    let log_level = match &config {
        Ok(config) if config.debug => tracing::Level::DEBUG,
        _ => tracing::Level::INFO,
    };
    tracing_subscriber::fmt().with_max_level(log_level).init();

    info!("Getting environment variables");
    let config = match config {
        Ok(config) => Arc::new(config),
        Err(err) => {
            error!("Could not load configuration: {}", err);
            return;
        }
    };

    let notifier = Arc::new(DiscordNotifier::new(Arc::new(Http::new(
        &config.discord_token,
    ))));
    let handler = Handler {
        giveaways: GiveawayEngine::new(Arc::new(TokioClock), notifier.clone()),
        notifier,
        config: config.clone(),
        start_time: Instant::now(),
    };

    let intents = GatewayIntents::non_privileged();
    let mut client = match Client::builder(&config.discord_token, intents)
        .event_handler(handler)
        .await
    {
        Ok(client) => client,
        Err(err) => {
            error!("Could not create the Discord client: {}", err);
            return;
        }
    };

    if let Err(err) = client.start().await {
        error!(
            "Attempted to start the Discord client, but failed with error: {}",
            err
        );
    }
}

use std::{sync::Arc, time::Instant};

use crate::{common::notifier::DiscordNotifier, engine::GiveawayEngine};

use super::config::Config;

#[derive(Clone)]
pub struct Handler {
    pub giveaways: GiveawayEngine,
    pub notifier: Arc<DiscordNotifier>,
    pub config: Arc<Config>,
    pub start_time: Instant,
}

#![warn(clippy::perf)]
#![warn(clippy::unwrap_used)]

mod commands;
mod errors;
mod framework;
mod games;
mod gateway;

mod utils;

use poise::serenity_prelude::{self as serenity, GatewayIntents};
use tracing::{error, info};
use tracing_unwrap::ResultExt;

use framework::data::PoiseData;

#[tokio::main]
async fn main() {
    framework::logging::init_tracing();

    info!("gamebot {}", env!("CARGO_PKG_VERSION"));

    let data = PoiseData::new().expect_or_log("bot data should load");
    let token = data.config().bot.token().to_owned();

    let framework = framework::poise::build(data);

    let intents = GatewayIntents::non_privileged() | GatewayIntents::MESSAGE_CONTENT;

    let mut client = serenity::Client::builder(token, intents)
        .framework(framework)
        .await
        .expect_or_log("client should be valid");

    if let Err(err) = client.start().await {
        error!(%err, "client stopped");
    }
}

use tracing::instrument;

use super::LogCommands;
use crate::{
    gateway::Gateway,
    games::chance::Coin,
    utils::{poise::CommandResult, Context},
};

/// flip a coin
#[instrument(skip_all)]
#[poise::command(
    slash_command,
    prefix_command,
    discard_spare_arguments,
    required_bot_permissions = "SEND_MESSAGES | VIEW_CHANNEL"
)]
pub async fn flip(ctx: Context<'_>) -> CommandResult {
    ctx.log_command().await;
    flip_coin(&ctx).await
}

async fn flip_coin(gateway: &impl Gateway) -> CommandResult {
    gateway
        .say(format!("{} flipped {}", gateway.author_name(), Coin::flip()))
        .await?;

    Ok(())
}

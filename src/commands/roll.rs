use tracing::instrument;

use super::LogCommands;
use crate::{
    gateway::Gateway,
    games::chance::Die,
    utils::{poise::CommandResult, Context},
};

/// roll a die
#[instrument(skip_all)]
#[poise::command(
    slash_command,
    prefix_command,
    discard_spare_arguments,
    required_bot_permissions = "SEND_MESSAGES | VIEW_CHANNEL"
)]
pub async fn roll(
    ctx: Context<'_>,
    #[description = "how many sides the die has (default 6)"] sides: Option<u32>,
) -> CommandResult {
    ctx.log_command().await;
    roll_die(&ctx, sides).await
}

async fn roll_die(gateway: &impl Gateway, sides: Option<u32>) -> CommandResult {
    let die = Die::new(sides.unwrap_or(Die::DEFAULT_FACES))?;

    gateway
        .say(format!("{} rolled {}", gateway.author_name(), die.roll()))
        .await?;

    Ok(())
}

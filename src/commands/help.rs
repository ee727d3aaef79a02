use tracing::instrument;

use super::LogCommands;
use crate::{
    errors::SendMessageError,
    utils::{poise::CommandResult, Context},
};

/// list the games, or show help for one of them
#[instrument(skip_all)]
#[poise::command(
    slash_command,
    prefix_command,
    discard_spare_arguments,
    required_bot_permissions = "SEND_MESSAGES | VIEW_CHANNEL"
)]
pub async fn help(
    ctx: Context<'_>,
    #[description = "specific command to display help for"] command: Option<String>,
) -> CommandResult {
    ctx.log_command().await;

    let config = poise::builtins::HelpConfiguration {
        extra_text_at_bottom: "Each game also has its own `help` subcommand, like `hangman help`.",
        ..Default::default()
    };

    poise::builtins::help(ctx, command.as_deref(), config)
        .await
        .map_err(SendMessageError::from)?;

    Ok(())
}

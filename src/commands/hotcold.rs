use std::sync::OnceLock;

use poise::serenity_prelude::ChannelId;
use regex::Regex;
use tracing::{debug, instrument};

use super::{play, respond, stop_session, LogCommands, Turn};
use crate::{
    framework::config::HotColdConfig,
    gateway::Gateway,
    games::{Game, GameError, HotCold, Outcome, SessionStore},
    utils::{poise::CommandResult, Context},
};

fn usage(prefix: &str) -> String {
    format!(
        "**{prefix}hotcold start**: start a new Hot Or Cold game\n\
         **{prefix}hotcold stop**: stop current Hot Or Cold game\n\
         **{prefix}hotcold <number>**: guess number"
    )
}

fn guess_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^\s*(?P<guess>\d+)\s*$").expect("hard-coded regex should be valid")
    })
}

fn parse_guess(text: &str) -> Result<i64, GameError> {
    guess_pattern()
        .captures(text)
        .and_then(|captures| captures["guess"].parse().ok())
        .ok_or_else(|| GameError::invalid_guess(text))
}

/// play hot or cold in this channel
#[instrument(skip_all)]
#[poise::command(
    prefix_command,
    subcommands("start", "stop", "help", "guess"),
    required_bot_permissions = "SEND_MESSAGES | VIEW_CHANNEL"
)]
pub async fn hotcold(
    ctx: Context<'_>,
    #[rest]
    #[description = "the number to guess"]
    number: Option<String>,
) -> CommandResult {
    ctx.log_command().await;
    guess_or_usage(&ctx, ctx.data().games().hot_cold(), number).await
}

/// start a new hot or cold game
#[instrument(skip_all)]
#[poise::command(prefix_command, discard_spare_arguments)]
pub async fn start(ctx: Context<'_>) -> CommandResult {
    ctx.log_command().await;

    let games = ctx.data().games();
    start_session(&ctx, games.hot_cold(), games.hot_cold_config()).await
}

/// stop the current hot or cold game
#[instrument(skip_all)]
#[poise::command(prefix_command, discard_spare_arguments)]
pub async fn stop(ctx: Context<'_>) -> CommandResult {
    ctx.log_command().await;
    stop_session(&ctx, ctx.data().games().hot_cold()).await
}

/// show how to play hot or cold
#[instrument(skip_all)]
#[poise::command(prefix_command, discard_spare_arguments)]
pub async fn help(ctx: Context<'_>) -> CommandResult {
    ctx.log_command().await;
    respond(&ctx, Ok(usage(&ctx.prefix()))).await
}

/// guess the number
#[instrument(skip_all)]
#[poise::command(prefix_command)]
pub async fn guess(
    ctx: Context<'_>,
    #[rest]
    #[description = "the number to guess"]
    number: String,
) -> CommandResult {
    ctx.log_command().await;
    make_guess(&ctx, ctx.data().games().hot_cold(), &number).await
}

async fn guess_or_usage(
    gateway: &impl Gateway,
    sessions: &SessionStore<HotCold>,
    number: Option<String>,
) -> CommandResult {
    match number {
        Some(number) if sessions.exists(gateway.channel_id()).await => {
            make_guess(gateway, sessions, &number).await
        }
        _ => respond(gateway, Ok(usage(&gateway.prefix()))).await,
    }
}

async fn start_session(
    gateway: &impl Gateway,
    sessions: &SessionStore<HotCold>,
    config: &HotColdConfig,
) -> CommandResult {
    respond(gateway, started(sessions, gateway.channel_id(), config).await).await
}

async fn started(
    sessions: &SessionStore<HotCold>,
    channel: ChannelId,
    config: &HotColdConfig,
) -> Result<String, GameError> {
    let session = sessions.create(channel).await?;
    let active = sessions.len().await;
    debug!(active, "hot or cold session started");

    // with no guesses allowed the game is lost before anyone plays
    let outcome = session.lock().await.outcome();
    if let Some(Outcome::Won { answer } | Outcome::Lost { answer }) = outcome {
        sessions.release(channel, &session).await;
        return Ok(format!("Unlucky! The number was {answer}"));
    }

    Ok(format!(
        "Started new Hot Or Cold session. Guess a number between {} and {}. You have {} guesses!",
        config.min, config.max, config.guesses
    ))
}

async fn make_guess(
    gateway: &impl Gateway,
    sessions: &SessionStore<HotCold>,
    text: &str,
) -> CommandResult {
    let reply = match parse_guess(text) {
        Ok(number) => play(sessions, gateway.channel_id(), number).await,
        Err(err) => Err(err),
    };

    let reply = reply.map(|turn| match turn {
        Turn::Continue(state) => format!("```{state}```"),
        Turn::Finished(Outcome::Won { answer }) => format!(
            "Congratulations {}! The number was {answer}",
            gateway.author_name()
        ),
        Turn::Finished(Outcome::Lost { answer }) => format!("Unlucky! The number was {answer}"),
    });

    respond(gateway, reply).await
}

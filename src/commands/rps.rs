use std::time::Duration;

use tokio::time;
use tracing::{debug, instrument};

use super::{respond, LogCommands};
use crate::{
    gateway::Gateway,
    games::{
        rps::{Choice, Results},
        GameError, GameKind, RockPaperScissors, SessionStore,
    },
    utils::{poise::CommandResult, Context},
};

fn usage(prefix: &str) -> String {
    format!(
        "**{prefix}rps start**: start a new Rock-Paper-Scissors game\n\
         **{prefix}rps [r|rock]**: choose rock\n\
         **{prefix}rps [p|paper]**: choose paper\n\
         **{prefix}rps [s|scissors]**: choose scissors\n"
    )
}

/// play rock-paper-scissors with everyone in this channel
#[instrument(skip_all)]
#[poise::command(
    prefix_command,
    subcommands("start", "help", "rock", "paper", "scissors"),
    required_bot_permissions = "SEND_MESSAGES | VIEW_CHANNEL"
)]
pub async fn rps(ctx: Context<'_>) -> CommandResult {
    ctx.log_command().await;
    respond(&ctx, Ok(usage(&ctx.prefix()))).await
}

/// start a round and count everyone in
#[instrument(skip_all)]
#[poise::command(prefix_command, discard_spare_arguments)]
pub async fn start(ctx: Context<'_>) -> CommandResult {
    ctx.log_command().await;
    start_round(&ctx, ctx.data().games().rps()).await
}

/// show how to play rock-paper-scissors
#[instrument(skip_all)]
#[poise::command(prefix_command, discard_spare_arguments)]
pub async fn help(ctx: Context<'_>) -> CommandResult {
    ctx.log_command().await;
    respond(&ctx, Ok(usage(&ctx.prefix()))).await
}

/// choose rock
#[instrument(skip_all)]
#[poise::command(prefix_command, aliases("r"), discard_spare_arguments)]
pub async fn rock(ctx: Context<'_>) -> CommandResult {
    ctx.log_command().await;
    choose(&ctx, ctx.data().games().rps(), Choice::Rock).await
}

/// choose paper
#[instrument(skip_all)]
#[poise::command(prefix_command, aliases("p"), discard_spare_arguments)]
pub async fn paper(ctx: Context<'_>) -> CommandResult {
    ctx.log_command().await;
    choose(&ctx, ctx.data().games().rps(), Choice::Paper).await
}

/// choose scissors
#[instrument(skip_all)]
#[poise::command(prefix_command, aliases("s"), discard_spare_arguments)]
pub async fn scissors(ctx: Context<'_>) -> CommandResult {
    ctx.log_command().await;
    choose(&ctx, ctx.data().games().rps(), Choice::Scissors).await
}

async fn start_round(
    gateway: &impl Gateway,
    sessions: &SessionStore<RockPaperScissors>,
) -> CommandResult {
    let channel = gateway.channel_id();

    let session = match sessions.create(channel).await {
        Ok(session) => session,
        Err(err) => return respond(gateway, Err(err)).await,
    };
    let active = sessions.len().await;
    debug!(active, "rps round started");

    // the round still has to be opened, closed and released if the countdown fails
    let counted = countdown(gateway).await;

    let closes_at = session.lock().await.open();
    time::sleep_until(closes_at).await;

    let results = {
        let mut game = session.lock().await;
        game.close();
        game.results()
    };

    if !sessions.release(channel, &session).await {
        debug!(%channel, "rps session was replaced before it closed");
    }

    respond(gateway, results.map(|results| report(&results))).await?;
    counted
}

async fn countdown(gateway: &impl Gateway) -> CommandResult {
    let mut text = "Ready?\n".to_owned();
    let message = gateway.say(text.clone()).await?;

    time::sleep(Duration::from_millis(800)).await;

    for part in ["Rock. ", "Paper. ", "Scissors. "] {
        text.push_str(part);
        gateway.edit(&message, text.clone()).await?;
        time::sleep(Duration::from_millis(300)).await;
    }

    text.push_str("GO!");
    gateway.edit(&message, text).await?;

    Ok(())
}

fn report(results: &Results) -> String {
    if results.choices.is_empty() {
        return "Game over! No one chose anything".to_owned();
    }

    if results.wins.is_empty() && results.draws.is_empty() {
        return "Game over! There were no wins or draws".to_owned();
    }

    let section = |title: &str, lines: Vec<String>| {
        format!("{title}\n{}\n{}", "-".repeat(title.len()), lines.join("\n"))
    };

    let choices = results
        .choices
        .iter()
        .map(|(user, choice)| format!(" - {user} chose {choice}"))
        .collect();
    let wins = results
        .wins
        .iter()
        .map(|(winner, loser)| format!(" - {winner} beat {loser}"))
        .collect();
    let draws = results
        .draws
        .iter()
        .map(|(first, second)| format!(" - {first} drew with {second}"))
        .collect();

    format!(
        "Game over!\n\n```\n{}\n\n{}\n\n{}```",
        section("Choices", choices),
        section("Wins", wins),
        section("Draws", draws)
    )
}

async fn choose(
    gateway: &impl Gateway,
    sessions: &SessionStore<RockPaperScissors>,
    choice: Choice,
) -> CommandResult {
    respond(gateway, chosen(gateway, sessions, choice).await).await
}

async fn chosen(
    gateway: &impl Gateway,
    sessions: &SessionStore<RockPaperScissors>,
    choice: Choice,
) -> Result<String, GameError> {
    let user = gateway.author_name();
    let channel = gateway.channel_id();
    let session = sessions.get(channel).await?;
    let mut game = session.lock().await;

    // still counting down
    if !game.is_open() {
        return Err(GameError::SessionNotFound {
            kind: GameKind::RockPaperScissors,
            channel,
        });
    }

    if let Some(earlier) = game.choice_of(&user) {
        return Ok(format!("You've already chosen {earlier}, {user}"));
    }

    game.make_choice(user.clone(), choice)?;
    Ok(format!("{user} chose {choice}"))
}

use poise::serenity_prelude::ChannelId;
use tracing::info;

use crate::{
    gateway::Gateway,
    games::{Game, GameError, SessionStore},
    utils::{
        poise::{CommandResult, ContextExt},
        Context,
    },
};

macro_rules! list {
    ($($pub:vis $module:ident),+) => {
        $(
            $pub mod $module;
            use $module::$module;
        )+

        pub fn list() -> Vec<crate::utils::poise::Command> {
            vec![
                $($module()),+
            ]
        }
    };
}

list! {
    hangman,
    hotcold,
    rps,
    roll,
    flip,
    help
}

trait LogCommands {
    async fn log_command(&self);
}

impl LogCommands for Context<'_> {
    async fn log_command(&self) {
        let ctx = *self;

        let channel = if ctx.in_guild() {
            ctx.channel_id()
                .name(ctx.http())
                .await
                .map_or_else(|_| "unknown channel".to_owned(), |c| format!("#{c}"))
        } else {
            "dms".to_owned()
        };

        info!(
            "@{} ({}): {}",
            ctx.author().name,
            channel,
            ctx.invocation_string()
        );
    }
}

/// Sends the one reply a game command produces.
///
/// Game errors are expected here (no session, bad guess and so on) and become
/// the reply text instead of failing the command.
async fn respond(gateway: &impl Gateway, reply: Result<String, GameError>) -> CommandResult {
    let text = reply.unwrap_or_else(|err| {
        err.trace();
        err.to_string()
    });

    gateway.say(text).await?;
    Ok(())
}

enum Turn<O> {
    Continue(String),
    Finished(O),
}

/// Applies a move to the channel's session, destroying it if the game ended.
async fn play<G: Game>(
    sessions: &SessionStore<G>,
    channel: ChannelId,
    player_move: G::Move,
) -> Result<Turn<G::Outcome>, GameError> {
    let session = sessions.get(channel).await?;
    let mut game = session.lock().await;

    game.submit(player_move)?;

    let Some(outcome) = game.outcome() else {
        return Ok(Turn::Continue(game.render()));
    };

    sessions.release(channel, &session).await;
    Ok(Turn::Finished(outcome))
}

async fn stop_session<G: Game>(gateway: &impl Gateway, sessions: &SessionStore<G>) -> CommandResult {
    let reply = sessions
        .destroy(gateway.channel_id())
        .await
        .map(|()| format!("{} session ended", G::KIND.title()));

    respond(gateway, reply).await
}

use poise::serenity_prelude::ChannelId;
use tracing::{debug, instrument};

use super::{play, respond, stop_session, LogCommands, Turn};
use crate::{
    gateway::Gateway,
    games::{Game, GameError, Hangman, Outcome, SessionStore},
    utils::{poise::CommandResult, Context},
};

fn usage(prefix: &str) -> String {
    format!(
        "**{prefix}hangman start**: start a new Hangman game\n\
         **{prefix}hangman stop**: stop current Hangman game\n\
         **{prefix}hangman guess <letter or word>**: guess letter or word"
    )
}

/// play hangman in this channel
#[instrument(skip_all)]
#[poise::command(
    prefix_command,
    subcommands("start", "stop", "help", "guess"),
    required_bot_permissions = "SEND_MESSAGES | VIEW_CHANNEL"
)]
pub async fn hangman(
    ctx: Context<'_>,
    #[rest]
    #[description = "a letter or word to guess"]
    letter_or_word: Option<String>,
) -> CommandResult {
    ctx.log_command().await;
    guess_or_usage(&ctx, ctx.data().games().hangman(), letter_or_word).await
}

/// start a new hangman game
#[instrument(skip_all)]
#[poise::command(prefix_command, discard_spare_arguments)]
pub async fn start(ctx: Context<'_>) -> CommandResult {
    ctx.log_command().await;
    start_session(&ctx, ctx.data().games().hangman()).await
}

/// stop the current hangman game
#[instrument(skip_all)]
#[poise::command(prefix_command, discard_spare_arguments)]
pub async fn stop(ctx: Context<'_>) -> CommandResult {
    ctx.log_command().await;
    stop_session(&ctx, ctx.data().games().hangman()).await
}

/// show how to play hangman
#[instrument(skip_all)]
#[poise::command(prefix_command, discard_spare_arguments)]
pub async fn help(ctx: Context<'_>) -> CommandResult {
    ctx.log_command().await;
    respond(&ctx, Ok(usage(&ctx.prefix()))).await
}

/// guess a letter or the whole word
#[instrument(skip_all)]
#[poise::command(prefix_command)]
pub async fn guess(
    ctx: Context<'_>,
    #[rest]
    #[description = "a letter or word to guess"]
    letter_or_word: String,
) -> CommandResult {
    ctx.log_command().await;
    make_guess(&ctx, ctx.data().games().hangman(), letter_or_word).await
}

async fn guess_or_usage(
    gateway: &impl Gateway,
    sessions: &SessionStore<Hangman>,
    letter_or_word: Option<String>,
) -> CommandResult {
    match letter_or_word {
        Some(letter_or_word) if sessions.exists(gateway.channel_id()).await => {
            make_guess(gateway, sessions, letter_or_word).await
        }
        _ => respond(gateway, Ok(usage(&gateway.prefix()))).await,
    }
}

async fn start_session(gateway: &impl Gateway, sessions: &SessionStore<Hangman>) -> CommandResult {
    respond(gateway, started(sessions, gateway.channel_id()).await).await
}

async fn started(sessions: &SessionStore<Hangman>, channel: ChannelId) -> Result<String, GameError> {
    let session = sessions.create(channel).await?;
    let active = sessions.len().await;
    debug!(active, "hangman session started");

    let hangman = session.lock().await;

    Ok(format!(
        "Started new hangman session...```\n{}```",
        hangman.render()
    ))
}

async fn make_guess(
    gateway: &impl Gateway,
    sessions: &SessionStore<Hangman>,
    letter_or_word: String,
) -> CommandResult {
    let reply = play(sessions, gateway.channel_id(), letter_or_word)
        .await
        .map(|turn| match turn {
            Turn::Continue(state) => format!("```{state}```"),
            Turn::Finished(Outcome::Won { answer }) => format!(
                "Congratulations {}! The word was {answer}",
                gateway.author_name()
            ),
            Turn::Finished(Outcome::Lost { answer }) => {
                format!("Unlucky! The word was {answer}")
            }
        });

    respond(gateway, reply).await
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tracing_test::traced_test;

    use super::{guess_or_usage, make_guess, start_session, stop_session};
    use crate::{
        gateway::{testing::TestGateway, Gateway},
        games::{Hangman, SessionStore, WordsList},
    };

    fn sessions(words: &str) -> SessionStore<Hangman> {
        let words = WordsList::parse(words).expect("has words");
        SessionStore::new(move || Hangman::new(words.random_answer(&mut rand::thread_rng())))
    }

    #[tokio::test]
    #[traced_test]
    async fn guessing_every_letter_wins_and_ends_the_session() {
        let sessions = sessions("bar");
        let alice = TestGateway::new(1, "alice");

        start_session(&alice, &sessions).await.expect("sent");
        assert!(alice.last().starts_with("Started new hangman session..."));
        assert!(alice.last().contains("_ _ _"));

        {
            let session = sessions.get(alice.channel_id()).await.expect("started");
            assert_eq!(session.lock().await.answer(), "bar");
        }

        for letter in ["b", "a"] {
            make_guess(&alice, &sessions, letter.to_owned())
                .await
                .expect("sent");
            assert!(alice.last().starts_with("```"));
        }

        make_guess(&alice, &sessions, "r".to_owned())
            .await
            .expect("sent");
        assert_eq!(alice.last(), "Congratulations alice! The word was bar");
        assert!(!sessions.exists(alice.channel_id()).await);

        make_guess(&alice, &sessions, "x".to_owned())
            .await
            .expect("sent");
        assert_eq!(alice.last(), "No hangman session in progress");
    }

    #[tokio::test]
    async fn losing_reveals_the_word() {
        let sessions = sessions("bar");
        let bob = TestGateway::new(1, "bob");

        start_session(&bob, &sessions).await.expect("sent");
        for letter in ["q", "w", "e", "t", "y", "u"] {
            make_guess(&bob, &sessions, letter.to_owned())
                .await
                .expect("sent");
        }

        assert_eq!(bob.last(), "Unlucky! The word was bar");
        assert!(!sessions.exists(bob.channel_id()).await);
    }

    fn assert_send<T: Send>(_: &T) {}

    #[test]
    fn start_can_move_between_threads() {
        let sessions = sessions("bar");
        let alice = TestGateway::new(1, "alice");

        assert_send(&start_session(&alice, &sessions));
    }

    #[tokio::test]
    async fn second_start_is_rejected() {
        let sessions = sessions("bar");
        let alice = TestGateway::new(1, "alice");

        start_session(&alice, &sessions).await.expect("sent");
        start_session(&alice, &sessions).await.expect("sent");

        assert_eq!(alice.last(), "Hangman session already in progress");
    }

    #[tokio::test]
    async fn channels_do_not_share_sessions() {
        let sessions = sessions("bar");
        let here = TestGateway::new(1, "alice");
        let there = TestGateway::new(2, "alice");

        start_session(&here, &sessions).await.expect("sent");
        make_guess(&there, &sessions, "b".to_owned())
            .await
            .expect("sent");

        assert_eq!(there.last(), "No hangman session in progress");
    }

    #[tokio::test]
    async fn stop_ends_the_session() {
        let sessions = sessions("bar");
        let alice = TestGateway::new(1, "alice");

        stop_session(&alice, &sessions).await.expect("sent");
        assert_eq!(alice.last(), "No hangman session in progress");

        start_session(&alice, &sessions).await.expect("sent");
        stop_session(&alice, &sessions).await.expect("sent");
        assert_eq!(alice.last(), "Hangman session ended");
        assert!(!sessions.exists(alice.channel_id()).await);
    }

    #[tokio::test]
    async fn bare_word_guesses_only_during_a_game() {
        let sessions = sessions("bar");
        let alice = TestGateway::new(1, "alice");

        guess_or_usage(&alice, &sessions, Some("bar".to_owned()))
            .await
            .expect("sent");
        assert!(alice.last().starts_with("**!hangman start**"));

        start_session(&alice, &sessions).await.expect("sent");
        guess_or_usage(&alice, &sessions, Some("BAR".to_owned()))
            .await
            .expect("sent");
        assert_eq!(alice.last(), "Congratulations alice! The word was bar");
    }

    #[tokio::test]
    async fn malformed_guess_is_reported() {
        let sessions = sessions("bar");
        let alice = TestGateway::new(1, "alice");

        start_session(&alice, &sessions).await.expect("sent");
        make_guess(&alice, &sessions, "b a".to_owned())
            .await
            .expect("sent");

        assert_eq!(alice.last(), "Invalid guess: \"b a\"");
        assert!(sessions.exists(alice.channel_id()).await);
    }
}

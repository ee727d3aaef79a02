use poise::{
    serenity_prelude::{self as serenity, Permissions},
    BoxFuture, FrameworkError,
};

use thiserror::Error as ThisError;
use tracing::{error, error_span, warn, Instrument};

use crate::{
    framework::data::PoiseData,
    games::{chance::ChanceError, GameError},
};

pub fn handle_framework_error(
    err: FrameworkError<'_, PoiseData, CommandError>,
) -> BoxFuture<'_, ()> {
    Box::pin(async {
        match err {
            FrameworkError::Command { error, ctx, .. } => {
                let command = ctx.invoked_command_name();
                let span = error_span!("", command);

                async {
                    error.trace();

                    if let Err(err) = ctx.reply(error.to_string()).await {
                        error!(%err, "sending error message failed");
                    }
                }
                .instrument(span)
                .await;
            }
            FrameworkError::MissingBotPermissions {
                missing_permissions,
                ctx,
                ..
            } => {
                let command = ctx.invoked_command_name();
                let span = error_span!("", command);
                let _enter = span.enter();

                error!(%missing_permissions, "bot is missing permissions");
            }
            _ => {
                if let Err(err) = poise::builtins::on_error(err).await {
                    error!(%err, "failed to handle framework error");
                }
            }
        };
    })
}

#[derive(Debug, ThisError)]
pub enum CommandError {
    #[error(transparent)]
    SendMessage(#[from] SendMessageError),

    #[error("other serenity error: {0}")]
    Serenity(#[from] serenity::Error),

    #[error(transparent)]
    Game(#[from] GameError),

    #[error("couldn't roll that: {0}")]
    Chance(#[from] ChanceError),
}

impl CommandError {
    pub fn trace(&self) {
        match self {
            Self::SendMessage(err) => err.trace(),
            Self::Serenity(err) => error!(%err, "{self}"),
            Self::Game(err) => err.trace(),
            Self::Chance(err) => warn!(%err, "{self}"),
        }
    }
}

#[derive(Debug, ThisError)]
pub enum SendMessageError {
    #[error(transparent)]
    Permissions(#[from] MissingPermissionsError),

    #[error(transparent)]
    MessageTooLong(#[from] MessageTooLongError),

    #[error("failed to send message: {0}")]
    Other(serenity::Error),
}

impl SendMessageError {
    pub fn trace(&self) {
        match self {
            Self::Permissions(err) => {
                error!(required = %err.required, present = %err.present, "{err}")
            }
            Self::MessageTooLong(err) => error!(length = err.length, "{err}"),
            Self::Other(err) => error!(%err, "{self}"),
        }
    }
}

impl From<serenity::Error> for SendMessageError {
    fn from(value: serenity::Error) -> Self {
        match value {
            serenity::Error::Model(ref model) => match model {
                serenity::ModelError::InvalidPermissions { required, present } => {
                    Self::Permissions(MissingPermissionsError {
                        required: *required,
                        present: *present,
                    })
                }
                serenity::ModelError::MessageTooLong(len) => {
                    Self::MessageTooLong(MessageTooLongError { length: *len })
                }
                _ => Self::Other(value),
            },
            _ => Self::Other(value),
        }
    }
}

#[derive(Debug, ThisError)]
#[error("missing permissions: {}", self.missing())]
pub struct MissingPermissionsError {
    required: Permissions,
    present: Permissions,
}

impl MissingPermissionsError {
    fn missing(&self) -> Permissions {
        self.required.difference(self.present)
    }
}

#[derive(Debug, ThisError)]
#[error("message is too long")]
pub struct MessageTooLongError {
    pub length: usize,
}

use crate::{errors::CommandError, framework::data::PoiseData};

pub type Context<'a> = poise::Context<'a, PoiseData, CommandError>;

pub type Error = CommandError;
pub type Command = poise::Command<PoiseData, Error>;
pub type CommandResult = Result<(), Error>;

pub trait ContextExt {
    fn in_guild(&self) -> bool;
}

impl ContextExt for Context<'_> {
    fn in_guild(&self) -> bool {
        self.guild_id().is_some()
    }
}

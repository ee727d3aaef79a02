use poise::PrefixFrameworkOptions;
use tracing::{error, info, trace};

use crate::{commands, errors, utils::serenity::channel::ChannelIdExt};

use super::data::PoiseData;

pub fn build(data: PoiseData) -> poise::Framework<PoiseData, errors::CommandError> {
    poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: commands::list(),
            prefix_options: PrefixFrameworkOptions {
                prefix: Some(data.config().bot.prefix().to_owned()),
                ..Default::default()
            },
            on_error: errors::handle_framework_error,
            ..Default::default()
        })
        .setup(|ctx, ready, framework| {
            Box::pin(async move {
                let http = ctx.http.clone();
                let commands = framework.options().commands.as_ref();

                if let Some(guild_id) = data.config().bot.testing_server() {
                    poise::builtins::register_in_guild(&http, commands, *guild_id).await?;
                }

                poise::builtins::register_globally(&http, commands).await?;

                ctx.set_activity(data.config().bot.activity());

                info!(user = %ready.user.name, "logged in");
                trace!("finished setup, accepting commands");

                if let Some(status_channel) = data.config().bot.status_channel() {
                    if let Err(err) = status_channel.say_ext(http, "ready!").await {
                        error!(%err, "could not post to the status channel");
                    }
                }

                Ok(data)
            })
        })
        .build()
}

use poise::{serenity_prelude::ChannelId, CreateReply, ReplyHandle};

use crate::{errors::SendMessageError, utils::Context};

/// The chat side of a command invocation.
///
/// Commands only ever talk to the channel they were invoked in, so this
/// carries the invocation's channel and author alongside the ability to send
/// and edit messages there.
#[allow(async_fn_in_trait)]
pub trait Gateway {
    type Handle;

    fn channel_id(&self) -> ChannelId;

    fn author_name(&self) -> String;

    fn prefix(&self) -> String;

    async fn say(&self, text: String) -> Result<Self::Handle, SendMessageError>;

    async fn edit(&self, handle: &Self::Handle, text: String) -> Result<(), SendMessageError>;
}

impl<'a> Gateway for Context<'a> {
    type Handle = ReplyHandle<'a>;

    // inherent methods on a copied context take precedence over this trait's

    fn channel_id(&self) -> ChannelId {
        let ctx = *self;
        ctx.channel_id()
    }

    fn author_name(&self) -> String {
        let ctx = *self;
        ctx.author().name.clone()
    }

    fn prefix(&self) -> String {
        let ctx = *self;
        ctx.prefix().to_owned()
    }

    async fn say(&self, text: String) -> Result<Self::Handle, SendMessageError> {
        let ctx = *self;
        Ok(ctx.say(text).await?)
    }

    async fn edit(&self, handle: &Self::Handle, text: String) -> Result<(), SendMessageError> {
        let builder = CreateReply::default().content(text);
        Ok(handle.edit(*self, builder).await?)
    }
}

#[cfg(test)]
pub mod testing {
    use std::sync::{Arc, Mutex};

    use poise::serenity_prelude::ChannelId;

    use super::Gateway;
    use crate::errors::SendMessageError;

    /// Records every message instead of sending it.
    #[derive(Clone, Debug)]
    pub struct TestGateway {
        channel: ChannelId,
        author: String,
        sent: Arc<Mutex<Vec<String>>>,
    }

    impl TestGateway {
        pub fn new(channel: u64, author: &str) -> Self {
            Self {
                channel: ChannelId::new(channel),
                author: author.to_owned(),
                sent: Arc::default(),
            }
        }

        /// Another user in the same channel, sharing the message log.
        pub fn as_user(&self, author: &str) -> Self {
            Self {
                author: author.to_owned(),
                ..self.clone()
            }
        }

        pub fn sent(&self) -> Vec<String> {
            self.sent.lock().expect("not poisoned").clone()
        }

        pub fn last(&self) -> String {
            self.sent().pop().expect("a message was sent")
        }
    }

    impl Gateway for TestGateway {
        type Handle = usize;

        fn channel_id(&self) -> ChannelId {
            self.channel
        }

        fn author_name(&self) -> String {
            self.author.clone()
        }

        fn prefix(&self) -> String {
            "!".to_owned()
        }

        async fn say(&self, text: String) -> Result<usize, SendMessageError> {
            let mut sent = self.sent.lock().expect("not poisoned");
            sent.push(text);
            Ok(sent.len() - 1)
        }

        async fn edit(&self, handle: &usize, text: String) -> Result<(), SendMessageError> {
            self.sent.lock().expect("not poisoned")[*handle] = text;
            Ok(())
        }
    }
}

use poise::serenity_prelude::{CacheHttp, ChannelId, Message};

use crate::errors::SendMessageError;

pub trait ChannelIdExt {
    async fn say_ext(
        self,
        cache_http: impl CacheHttp,
        text: impl Into<String>,
    ) -> Result<Message, SendMessageError>;
}

impl ChannelIdExt for ChannelId {
    async fn say_ext(
        self,
        cache_http: impl CacheHttp,
        text: impl Into<String>,
    ) -> Result<Message, SendMessageError> {
        Ok(self.say(cache_http.http(), text).await?)
    }
}

use std::{collections::HashMap, fmt, sync::Arc};

use poise::serenity_prelude::ChannelId;
use tokio::sync::{Mutex, RwLock};
use tracing::trace;

use super::{Game, GameError, Result};

pub type Session<G> = Arc<Mutex<G>>;

type Factory<G> = Arc<dyn Fn() -> Result<G> + Send + Sync>;

/// Active games of one kind, at most one per channel.
///
/// Sessions are never evicted; a channel that goes quiet mid-game keeps its
/// session until someone stops it or the process exits.
pub struct SessionStore<G> {
    sessions: Arc<RwLock<HashMap<ChannelId, Session<G>>>>,
    factory: Factory<G>,
}

impl<G> Clone for SessionStore<G> {
    fn clone(&self) -> Self {
        Self {
            sessions: self.sessions.clone(),
            factory: self.factory.clone(),
        }
    }
}

impl<G> fmt::Debug for SessionStore<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("sessions", &self.sessions.try_read().map(|map| map.len()).ok())
            .finish_non_exhaustive()
    }
}

impl<G: Game> SessionStore<G> {
    pub fn new(factory: impl Fn() -> Result<G> + Send + Sync + 'static) -> Self {
        Self {
            sessions: Arc::default(),
            factory: Arc::new(factory),
        }
    }

    fn not_found(channel: ChannelId) -> GameError {
        GameError::SessionNotFound {
            kind: G::KIND,
            channel,
        }
    }

    pub async fn exists(&self, channel: ChannelId) -> bool {
        self.sessions.read().await.contains_key(&channel)
    }

    pub async fn get(&self, channel: ChannelId) -> Result<Session<G>> {
        let guard = self.sessions.read().await;
        guard
            .get(&channel)
            .cloned()
            .ok_or_else(|| Self::not_found(channel))
    }

    pub async fn create(&self, channel: ChannelId) -> Result<Session<G>> {
        let mut guard = self.sessions.write().await;

        if guard.contains_key(&channel) {
            return Err(GameError::SessionAlreadyExists {
                kind: G::KIND,
                channel,
            });
        }

        let session = Arc::new(Mutex::new((self.factory)()?));
        guard.insert(channel, session.clone());
        trace!(kind = %G::KIND, %channel, "created session");

        Ok(session)
    }

    pub async fn get_or_create(&self, channel: ChannelId) -> Result<Session<G>> {
        let mut guard = self.sessions.write().await;

        if let Some(session) = guard.get(&channel) {
            return Ok(session.clone());
        }

        let session = Arc::new(Mutex::new((self.factory)()?));
        guard.insert(channel, session.clone());
        trace!(kind = %G::KIND, %channel, "created session");

        Ok(session)
    }

    pub async fn destroy(&self, channel: ChannelId) -> Result<()> {
        let mut guard = self.sessions.write().await;

        guard
            .remove(&channel)
            .map(|_| trace!(kind = %G::KIND, %channel, "destroyed session"))
            .ok_or_else(|| Self::not_found(channel))
    }

    /// Removes the channel's session only if it is still `session`.
    ///
    /// Returns `false` when the channel has since been stopped or holds a
    /// newer session.
    pub async fn release(&self, channel: ChannelId, session: &Session<G>) -> bool {
        let mut guard = self.sessions.write().await;

        match guard.get(&channel) {
            Some(current) if Arc::ptr_eq(current, session) => {
                guard.remove(&channel);
                trace!(kind = %G::KIND, %channel, "released finished session");
                true
            }
            _ => false,
        }
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

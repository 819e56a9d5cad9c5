use crate::model::{Session, SessionData};
use chrono::Duration;
use common::{Now, RandomSource, SecureRandom, SystemNow};
use dashmap::DashMap;
use shared::session::DEFAULT_SESSION_MAX_AGE_SECS;
use std::marker::PhantomData;
use std::sync::Arc;

/// Length of generated session identifiers.
const SESSION_ID_LEN: usize = 24;

/// Session storage interface.
///
/// Lookups for unknown or expired ids yield `None`, never an error: "no
/// session" is a normal state. A production variant would put a shared
/// backend behind this trait; the authentication flow does not care.
pub trait SessionStore: Send + Sync + 'static {
    /// Allocates a new, empty session with a globally unique id.
    fn create(&self) -> Session;

    /// Returns a snapshot of the live session, or `None` if unknown or
    /// expired.
    fn get(&self, id: &str) -> Option<Session>;

    /// Runs `f` against the live session under its entry lock, so
    /// read-modify-write cycles on a single session cannot lose updates.
    /// Returns `None` if the session is unknown or expired.
    fn with_session<T>(&self, id: &str, f: impl FnOnce(&mut Session) -> T) -> Option<T>;

    /// Refreshes the expiry window when sliding expiration is configured.
    /// Returns whether the session is live.
    fn touch(&self, id: &str) -> bool;

    /// Removes the session immediately; returns whether it existed.
    fn destroy(&self, id: &str) -> bool;

    /// Removes every expired entry and returns how many were dropped.
    /// Driven by a background interval, never by request handling.
    fn sweep_expired(&self) -> usize;
}

impl<S: SessionStore> SessionStore for Arc<S> {
    fn create(&self) -> Session {
        (**self).create()
    }

    fn get(&self, id: &str) -> Option<Session> {
        (**self).get(id)
    }

    fn with_session<T>(&self, id: &str, f: impl FnOnce(&mut Session) -> T) -> Option<T> {
        (**self).with_session(id, f)
    }

    fn touch(&self, id: &str) -> bool {
        (**self).touch(id)
    }

    fn destroy(&self, id: &str) -> bool {
        (**self).destroy(id)
    }

    fn sweep_expired(&self) -> usize {
        (**self).sweep_expired()
    }
}

/// Session store configuration.
#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// Session lifetime.
    pub max_age: Duration,

    /// Whether the expiry window is refreshed on access (sliding) or fixed
    /// at creation (absolute).
    pub sliding: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_age: Duration::seconds(DEFAULT_SESSION_MAX_AGE_SECS),
            sliding: false,
        }
    }
}

/// In-memory implementation backed by a concurrent hash map. Per-entry
/// locking serializes access per session id; entries found expired on
/// access are dropped eagerly.
pub struct InMemorySessionStore<G = SecureRandom, N = SystemNow> {
    sessions: DashMap<String, Session>,
    config: SessionConfig,
    _random: PhantomData<G>,
    _now: PhantomData<N>,
}

impl<G, N> InMemorySessionStore<G, N> {
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        Self {
            sessions: DashMap::new(),
            config,
            _random: PhantomData,
            _now: PhantomData,
        }
    }

    /// Number of live entries, expired or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl<G, N> SessionStore for InMemorySessionStore<G, N>
where
    G: RandomSource,
    N: Now,
{
    fn create(&self) -> Session {
        let now = N::now();
        loop {
            let id = G::alphanumeric(SESSION_ID_LEN);
            match self.sessions.entry(id.clone()) {
                dashmap::mapref::entry::Entry::Occupied(_) => continue,
                dashmap::mapref::entry::Entry::Vacant(vac) => {
                    let session = Session {
                        id,
                        created_at: now,
                        expires_at: now + self.config.max_age,
                        data: SessionData::default(),
                    };
                    vac.insert(session.clone());
                    return session;
                }
            }
        }
    }

    fn get(&self, id: &str) -> Option<Session> {
        let now = N::now();
        let entry = self.sessions.get(id)?;
        if entry.is_expired(now) {
            drop(entry);
            self.sessions.remove(id);
            return None;
        }
        Some(entry.value().clone())
    }

    fn with_session<T>(&self, id: &str, f: impl FnOnce(&mut Session) -> T) -> Option<T> {
        let now = N::now();
        let mut entry = self.sessions.get_mut(id)?;
        if entry.is_expired(now) {
            drop(entry);
            self.sessions.remove(id);
            return None;
        }
        Some(f(entry.value_mut()))
    }

    fn touch(&self, id: &str) -> bool {
        let now = N::now();
        let Some(mut entry) = self.sessions.get_mut(id) else {
            return false;
        };
        if entry.is_expired(now) {
            drop(entry);
            self.sessions.remove(id);
            return false;
        }
        if self.config.sliding {
            entry.expires_at = now + self.config.max_age;
        }
        true
    }

    fn destroy(&self, id: &str) -> bool {
        self.sessions.remove(id).is_some()
    }

    fn sweep_expired(&self) -> usize {
        let now = N::now();
        let stale: Vec<_> = self
            .sessions
            .iter()
            .filter_map(|entry| entry.is_expired(now).then(|| entry.key().clone()))
            .collect();

        let mut removed = 0;
        for key in stale {
            if self.sessions.remove(&key).is_some() {
                removed += 1;
            }
        }
        removed
    }
}

/// Spawns the periodic expiry sweep, decoupled from request handling so
/// abandoned sessions cannot grow the map without bound.
pub fn spawn_sweeper<S: SessionStore>(
    store: S,
    every: std::time::Duration,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(every);
        // The first tick completes immediately
        interval.tick().await;
        loop {
            interval.tick().await;
            let removed = store.sweep_expired();
            if removed > 0 {
                tracing::debug!(removed, "swept expired sessions");
            }
        }
    })
}

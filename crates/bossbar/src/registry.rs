//! # Keyed Boss Bar Registry
//!
//! Bars addressable by a stable string key, so independent subsystems can
//! look up and manage each other's bars without passing handles around.
//! The registry enforces one bar per key; a keyed bar unregisters itself
//! when its roster is cleared.

use crate::bar::BossBar;
use crate::builder::BossBarBuilder;
use crate::error::BossBarError;
use dashmap::DashMap;
use proxy_api::ProxyContext;
use std::sync::{Arc, Weak};
use std::time::Duration;
use tracing::debug;

/// Validated identifier for a registered bar.
///
/// Keys are non-empty and restricted to lowercase alphanumerics plus
/// `_ - . /`, so they stay usable in commands and log lines. The slash is
/// conventionally used to namespace by owning subsystem, e.g.
/// `events/blood-moon`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BarKey(String);

impl BarKey {
    /// Validates and wraps a key string.
    ///
    /// # Errors
    ///
    /// Returns [`BossBarError::InvalidKey`] if the string is empty or
    /// contains a character outside the allowed set.
    pub fn new(key: impl Into<String>) -> Result<Self, BossBarError> {
        let key = key.into();
        if key.is_empty() {
            return Err(BossBarError::InvalidKey("key is empty".to_owned()));
        }
        let valid = key
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || "_-./".contains(c));
        if !valid {
            return Err(BossBarError::InvalidKey(key));
        }
        Ok(Self(key))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BarKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for BarKey {
    type Err = BossBarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for BarKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A registered bar together with its key.
///
/// Wraps a [`BossBar`] (accessible through [`bar`](KeyedBossBar::bar)) and
/// overrides roster clearing: emptying a keyed bar also unregisters it,
/// since an empty keyed bar is finished rather than dormant.
#[derive(Debug, Clone)]
pub struct KeyedBossBar {
    key: BarKey,
    bar: BossBar,
    registry: Weak<DashMap<BarKey, BossBar>>,
}

impl KeyedBossBar {
    /// The key this bar is registered under.
    pub fn key(&self) -> &BarKey {
        &self.key
    }

    /// The underlying bar, for the full mutation surface.
    pub fn bar(&self) -> &BossBar {
        &self.bar
    }

    /// Empties the roster and unregisters the bar from its registry.
    /// Idempotent: repeating it is harmless.
    pub async fn remove_all_players(&self) {
        self.bar.remove_all_players().await;
        if let Some(bars) = self.registry.upgrade() {
            if bars.remove(&self.key).is_some() {
                debug!(key = %self.key, bar = %self.bar.id(), "unregistered boss bar");
            }
        }
    }

    /// Empties the roster and unregisters once `delay` has elapsed, on the
    /// host scheduler.
    pub fn remove_all_players_after(&self, delay: Duration) {
        let keyed = self.clone();
        self.bar.context().schedule(
            delay,
            Box::pin(async move {
                keyed.remove_all_players().await;
            }),
        );
    }
}

/// Concurrent key-to-bar map bound to one host context.
///
/// # Examples
///
/// ```rust,no_run
/// use bossbar::{BarKey, BossBar, BossBarRegistry};
/// use proxy_api::ProxyContext;
/// use std::sync::Arc;
///
/// async fn event_bar(context: Arc<dyn ProxyContext>) -> Result<(), bossbar::BossBarError> {
///     let registry = BossBarRegistry::new(context);
///     let key = BarKey::new("events/blood-moon")?;
///     let keyed = registry
///         .create(key.clone(), BossBar::builder().title("Blood Moon"))
///         .await?;
///     keyed.bar().add_online_players().await;
///
///     // Later, from anywhere holding the registry:
///     if let Some(keyed) = registry.get(&key) {
///         keyed.remove_all_players().await;
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct BossBarRegistry {
    bars: Arc<DashMap<BarKey, BossBar>>,
    context: Arc<dyn ProxyContext>,
}

impl BossBarRegistry {
    /// Creates an empty registry bound to the given host context.
    pub fn new(context: Arc<dyn ProxyContext>) -> Self {
        Self {
            bars: Arc::new(DashMap::new()),
            context,
        }
    }

    /// Builds and registers a bar under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`BossBarError::KeyTaken`] if a bar is already registered
    /// under the key (the existing bar is untouched), or the builder's
    /// progress validation error.
    pub async fn create(
        &self,
        key: BarKey,
        builder: BossBarBuilder,
    ) -> Result<KeyedBossBar, BossBarError> {
        if self.bars.contains_key(&key) {
            return Err(BossBarError::KeyTaken(key));
        }
        let bar = builder.build(self.context.clone()).await?;
        debug!(key = %key, bar = %bar.id(), "registered boss bar");
        self.bars.insert(key.clone(), bar.clone());
        Ok(KeyedBossBar {
            key,
            bar,
            registry: Arc::downgrade(&self.bars),
        })
    }

    /// Looks up the bar registered under `key`.
    pub fn get(&self, key: &BarKey) -> Option<KeyedBossBar> {
        self.bars.get(key).map(|entry| KeyedBossBar {
            key: key.clone(),
            bar: entry.value().clone(),
            registry: Arc::downgrade(&self.bars),
        })
    }

    /// Unregisters the bar under `key` without touching its viewers.
    /// Returns the bar handle if one was registered.
    pub fn remove(&self, key: &BarKey) -> Option<BossBar> {
        self.bars.remove(key).map(|(_, bar)| bar)
    }

    /// Returns every registered key.
    pub fn keys(&self) -> Vec<BarKey> {
        self.bars.iter().map(|entry| entry.key().clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Removes every registered bar from its viewers' screens. Used on
    /// subsystem shutdown so no bar outlives its owner.
    pub async fn clear(&self) {
        let keys = self.keys();
        for key in keys {
            if let Some((_, bar)) = self.bars.remove(&key) {
                bar.remove_all_players().await;
            }
        }
    }
}

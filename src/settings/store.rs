use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use super::Settings;
use crate::core::FatouraError;

/// Callback invoked with the new settings after each change.
pub type Listener = Box<dyn Fn(&Settings) + Send + Sync>;

/// Handle returned by [`SettingsProvider::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Source of settings injected into document screens and renderers.
pub trait SettingsProvider: Send + Sync {
    /// Snapshot of the current settings.
    fn current(&self) -> Settings;

    /// Register a change listener.
    fn subscribe(&self, listener: Listener) -> SubscriptionId;

    /// Remove a listener. Returns false if it was not registered.
    fn unsubscribe(&self, id: SubscriptionId) -> bool;
}

/// Thread-safe in-memory settings with synchronous change notification.
#[derive(Default)]
pub struct SettingsStore {
    settings: RwLock<Settings>,
    listeners: Mutex<Vec<(SubscriptionId, Arc<Listener>)>>,
    next_id: AtomicU64,
}

impl std::fmt::Debug for SettingsStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingsStore")
            .field("settings", &self.current())
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl SettingsStore {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: RwLock::new(settings),
            listeners: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(0),
        }
    }

    /// Load settings from their JSON form. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, FatouraError> {
        let settings: Settings = serde_json::from_str(json)
            .map_err(|e| FatouraError::Settings(format!("invalid settings JSON: {e}")))?;
        Ok(Self::new(settings))
    }

    /// Serialize the current settings to JSON.
    pub fn to_json(&self) -> Result<String, FatouraError> {
        serde_json::to_string_pretty(&self.current())
            .map_err(|e| FatouraError::Settings(format!("cannot serialize settings: {e}")))
    }

    /// Apply `change`, then notify every listener with the result.
    pub fn update(&self, change: impl FnOnce(&mut Settings)) {
        let snapshot = {
            let mut guard = self.settings.write().unwrap_or_else(PoisonError::into_inner);
            change(&mut guard);
            guard.clone()
        };
        self.notify(&snapshot);
    }

    /// Replace the settings wholesale and notify listeners.
    pub fn replace(&self, settings: Settings) {
        self.update(|s| *s = settings);
    }

    pub fn listener_count(&self) -> usize {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn notify(&self, settings: &Settings) {
        // Listeners run outside the lock so they may subscribe or read again.
        let listeners: Vec<Arc<Listener>> = self
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, l)| Arc::clone(l))
            .collect();
        tracing::debug!(listeners = listeners.len(), "settings changed");
        for listener in listeners {
            (*listener)(settings);
        }
    }
}

impl SettingsProvider for SettingsStore {
    fn current(&self) -> Settings {
        self.settings
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn subscribe(&self, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, Arc::new(listener)));
        tracing::debug!(id = id.0, "settings listener subscribed");
        id
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.lock().unwrap_or_else(PoisonError::into_inner);
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }
}

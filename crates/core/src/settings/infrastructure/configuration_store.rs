use std::sync::{Arc, PoisonError, RwLock};

use crate::settings::domain::configuration::Configuration;
use crate::settings::domain::toggle_event::ToggleEvent;

/// Thread-safe holder for the live configuration.
///
/// Cloning yields another handle to the same state. The input thread calls
/// [`apply`](Self::apply); the frame loop calls [`snapshot`](Self::snapshot)
/// once per tick. The lock is only held for the copy in or out.
#[derive(Clone, Debug)]
pub struct ConfigurationStore {
    inner: Arc<RwLock<Configuration>>,
}

impl ConfigurationStore {
    pub fn new(initial: Configuration) -> Self {
        Self {
            inner: Arc::new(RwLock::new(initial)),
        }
    }

    pub fn snapshot(&self) -> Configuration {
        // Plain `Copy` data: a poisoned lock still holds a whole value.
        *self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Applies one input event and returns the resulting configuration.
    pub fn apply(&self, event: ToggleEvent) -> Configuration {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        event.apply_to(&mut guard);
        let updated = *guard;
        drop(guard);
        log::debug!(
            "{:?} -> {:?} = {}",
            event,
            event.flag(),
            updated.flag(event.flag())
        );
        updated
    }
}

impl Default for ConfigurationStore {
    fn default() -> Self {
        Self::new(Configuration::default())
    }
}

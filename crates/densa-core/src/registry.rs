//! Implementation registry
//!
//! Maps an implementation identifier to a prototype array of that kind.
//! Callers look an identifier up to get a factory for new arrays. Entries
//! are only added through explicit registration; re-registering an
//! identifier replaces the previous entry.

use crate::array::DenseArray;
use crate::backend::Backend;
use crate::ops::CreationOps;
use log::debug;
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::collections::BTreeMap;
use std::sync::{OnceLock, RwLock};

/// Description of a registered implementation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImplementationInfo {
    pub id: String,
    pub backend: String,
    pub version: String,
}

struct Entry {
    info: ImplementationInfo,
    prototype: Box<dyn Any + Send + Sync>,
}

#[derive(Default)]
pub struct ImplementationRegistry {
    entries: BTreeMap<String, Entry>,
}

impl ImplementationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `prototype` under `id` for backend `B`.
    ///
    /// Returns the info of the entry it replaced, if any.
    pub fn register_implementation<B>(
        &mut self,
        id: impl Into<String>,
        prototype: <B as CreationOps>::Array,
    ) -> Option<ImplementationInfo>
    where
        B: Backend,
        <B as CreationOps>::Array: Send + Sync + 'static,
    {
        let id = id.into();
        let info = ImplementationInfo {
            id: id.clone(),
            backend: B::name().to_string(),
            version: B::version().to_string(),
        };
        let previous = self.entries.insert(
            id.clone(),
            Entry {
                info,
                prototype: Box::new(prototype),
            },
        );
        match &previous {
            Some(old) => debug!("replaced implementation {:?} (was {})", id, old.info.backend),
            None => debug!("registered implementation {:?} ({})", id, B::name()),
        }
        previous.map(|entry| entry.info)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn info(&self, id: &str) -> Option<&ImplementationInfo> {
        self.entries.get(id).map(|entry| &entry.info)
    }

    /// Registered identifiers in sorted order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Clone of the prototype registered under `id`, if it is an `A`
    pub fn prototype<A: DenseArray + 'static>(&self, id: &str) -> Option<A> {
        self.entries
            .get(id)
            .and_then(|entry| entry.prototype.downcast_ref::<A>())
            .cloned()
    }

    /// Constructor of zero-filled arrays of the kind registered under `id`
    pub fn factory<A: DenseArray + 'static>(&self, id: &str) -> Option<fn(usize, usize) -> A> {
        self.entries
            .get(id)
            .filter(|entry| entry.prototype.is::<A>())
            .map(|_| A::zeros as fn(usize, usize) -> A)
    }
}

impl std::fmt::Debug for ImplementationRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.entries.values().map(|entry| &entry.info))
            .finish()
    }
}

/// The process-wide registry. Starts empty and lives for the whole process.
pub fn global() -> &'static RwLock<ImplementationRegistry> {
    static GLOBAL: OnceLock<RwLock<ImplementationRegistry>> = OnceLock::new();
    GLOBAL.get_or_init(|| RwLock::new(ImplementationRegistry::new()))
}

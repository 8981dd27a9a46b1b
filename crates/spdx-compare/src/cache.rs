//! Concurrent memoization of rendered strings.
//!
//! A [`Memo`] holds one slot per key. The map lock is only held while the slot
//! is looked up; the computation runs under the slot's own lock, so callers
//! for different keys proceed in parallel while callers for the same key wait
//! for the first one to finish.

use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

type Slot = Mutex<Option<Arc<str>>>;

/// Compute-once string cache.
pub struct Memo<K> {
    slots: Mutex<HashMap<K, Arc<Slot>>>,
}

impl<K> Default for Memo<K> {
    fn default() -> Self {
        Self {
            slots: Mutex::new(HashMap::new()),
        }
    }
}

impl<K> fmt::Debug for Memo<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memo").finish_non_exhaustive()
    }
}

impl<K: Eq + Hash> Memo<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached string for `key`, computing it with `compute` if
    /// no caller has stored one yet.
    ///
    /// A failed computation leaves the slot empty: the error goes to this
    /// caller, and the next caller for the key runs its own computation.
    pub fn get_or_try_insert_with<E, F>(&self, key: K, compute: F) -> Result<Arc<str>, E>
    where
        F: FnOnce() -> Result<String, E>,
    {
        let slot = {
            let mut slots = lock(&self.slots);
            Arc::clone(slots.entry(key).or_default())
        };
        let mut value = lock(&*slot);
        if let Some(cached) = value.as_ref() {
            return Ok(Arc::clone(cached));
        }
        let rendered: Arc<str> = compute()?.into();
        *value = Some(Arc::clone(&rendered));
        Ok(rendered)
    }

    /// Returns the cached string for `key` without computing it.
    pub fn get(&self, key: &K) -> Option<Arc<str>> {
        let slot = lock(&self.slots).get(key).map(Arc::clone)?;
        let value = lock(&*slot).clone();
        value
    }

    /// Number of keys holding a computed value.
    pub fn len(&self) -> usize {
        let slots: Vec<Arc<Slot>> = lock(&self.slots).values().map(Arc::clone).collect();
        slots.iter().filter(|slot| lock(&***slot).is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A slot whose computation panicked is still usable: it holds `None` and is
/// recomputed by the next caller.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Cache key comparing `Arc`s by address instead of content.
///
/// Holding the `Arc` keeps the allocation alive, so an address cannot be
/// reused by another value while the key is in a cache.
pub struct ByAddress<T: ?Sized>(pub Arc<T>);

impl<T: ?Sized> ByAddress<T> {
    pub fn new(value: &Arc<T>) -> Self {
        Self(Arc::clone(value))
    }
}

impl<T: ?Sized> PartialEq for ByAddress<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<T: ?Sized> Eq for ByAddress<T> {}

impl<T: ?Sized> Hash for ByAddress<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Arc::as_ptr(&self.0).cast::<()>().hash(state);
    }
}

impl<T: ?Sized> fmt::Debug for ByAddress<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ByAddress({:p})", Arc::as_ptr(&self.0).cast::<()>())
    }
}

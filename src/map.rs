use crate::error::AttrError;
use crate::key::{Key, Symbol};
use crate::registry::{self, KeySpace};
use parking_lot::Mutex;
use std::any::TypeId;
use std::collections::HashMap;
use std::sync::Arc;

/// A thread-safe map that grows named accessors for its keys on first use.
///
/// `AttrMap` is an ordinary associative container keyed by [`Key`] — either a
/// symbolic (interned) or textual (string) key — with one addition: any stored
/// key can also be read and written by name through [`attr`](AttrMap::attr),
/// [`set_attr`](AttrMap::set_attr) and friends. The first time a name is used
/// that way, the map checks whether a matching key exists (symbolic space
/// first, then textual) and, if so, binds an accessor for that name on the map
/// *type*; later accesses for the same name skip the check and go straight
/// through the binding.
///
/// Cloning an `AttrMap` yields a handle to the same underlying map.
///
/// # Examples
///
/// ```
/// use attrmap::{AttrMap, AttrError, Symbol};
///
/// fn main() -> Result<(), AttrError> {
///     let map = AttrMap::new();
///     map.set(Symbol::intern("one"), 1);
///     map.set("two", 2);
///
///     map.set_attr("one", 3)?;
///     map.set_attr("two", 4)?;
///     println!("One is {} and Two is {}", map.attr("one")?, map.attr("two")?);
///     // > One is 3 and Two is 4
///     Ok(())
/// }
/// ```
pub struct AttrMap<V> {
    items: Arc<Mutex<HashMap<Key, V>>>,
}

impl<V> AttrMap<V>
where
    V: Send + Sync + 'static,
{
    /// Creates a new, empty map.
    pub fn new() -> Self {
        Self {
            items: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Creates a map seeded from a collection of entries.
    ///
    /// Each entry keeps whichever key space its key already has; symbolic and
    /// textual keys are never coerced into each other.
    ///
    /// ```
    /// use attrmap::{AttrMap, Key, Symbol};
    ///
    /// let map = AttrMap::from_entries([
    ///     (Key::from(Symbol::intern("host")), "localhost".to_string()),
    ///     (Key::from("port"), "8080".to_string()),
    /// ]);
    /// assert_eq!(map.len(), 2);
    /// ```
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Key, V)>,
    {
        Self {
            items: Arc::new(Mutex::new(entries.into_iter().collect())),
        }
    }

    /// Stores a value under `key`, replacing any previous value.
    pub fn set(&self, key: impl Into<Key>, value: V) {
        self.items.lock().insert(key.into(), value);
    }

    /// Retrieves a clone of the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `AttrError::KeyNotFound` if the key doesn't exist.
    pub fn get(&self, key: impl Into<Key>) -> Result<V, AttrError>
    where
        V: Clone,
    {
        let key = key.into();
        self.items
            .lock()
            .get(&key)
            .cloned()
            .ok_or_else(|| AttrError::KeyNotFound(format!("{:?}", key)))
    }

    /// Accesses the value stored under `key` with a read-only closure.
    ///
    /// Useful for inspecting values without requiring `V: Clone`.
    ///
    /// # Errors
    ///
    /// Returns `AttrError::KeyNotFound` if the key doesn't exist.
    pub fn with<F, R>(&self, key: impl Into<Key>, f: F) -> Result<R, AttrError>
    where
        F: FnOnce(&V) -> R,
    {
        let key = key.into();
        let items = self.items.lock();
        let value = items
            .get(&key)
            .ok_or_else(|| AttrError::KeyNotFound(format!("{:?}", key)))?;
        Ok(f(value))
    }

    /// Accesses the value stored under `key` with a read-write closure.
    ///
    /// # Errors
    ///
    /// Returns `AttrError::KeyNotFound` if the key doesn't exist.
    pub fn with_mut<F, R>(&self, key: impl Into<Key>, f: F) -> Result<R, AttrError>
    where
        F: FnOnce(&mut V) -> R,
    {
        let key = key.into();
        let mut items = self.items.lock();
        let value = items
            .get_mut(&key)
            .ok_or_else(|| AttrError::KeyNotFound(format!("{:?}", key)))?;
        Ok(f(value))
    }

    /// Removes the value stored under `key`.
    ///
    /// Returns `true` if the key was present and removed, `false` otherwise.
    pub fn remove(&self, key: impl Into<Key>) -> bool {
        self.items.lock().remove(&key.into()).is_some()
    }

    /// Returns `true` if the map contains `key`.
    pub fn contains_key(&self, key: impl Into<Key>) -> bool {
        self.items.lock().contains_key(&key.into())
    }

    /// Returns all keys currently in the map.
    pub fn keys(&self) -> Vec<Key> {
        self.items.lock().keys().cloned().collect()
    }

    /// Returns clones of all values currently in the map.
    pub fn values(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.items.lock().values().cloned().collect()
    }

    /// Returns the number of entries in the map.
    pub fn len(&self) -> usize {
        self.items.lock().len()
    }

    /// Returns `true` if the map contains no entries.
    pub fn is_empty(&self) -> bool {
        self.items.lock().is_empty()
    }

    /// Reads the value behind the accessor `name`.
    ///
    /// Resolution follows the accessor table first: if `name` is already bound
    /// for this map type, the bound key is fetched directly. Otherwise the
    /// name is matched against this instance's keys — symbolic space first,
    /// textual second — and the winning space is bound for the whole type.
    ///
    /// ```
    /// use attrmap::{AttrMap, AttrError};
    ///
    /// let map = AttrMap::new();
    /// map.set("one", 1);
    ///
    /// assert_eq!(map.attr("one"), Ok(1));
    /// assert!(matches!(map.attr("two"), Err(AttrError::UnknownAttr(_))));
    /// ```
    ///
    /// # Errors
    ///
    /// - Returns `AttrError::UnknownAttr` if `name` is not yet bound and
    ///   matches no key in either space on this instance
    /// - Returns `AttrError::KeyNotFound` if `name` is bound (possibly by
    ///   another instance of this map type) but this instance doesn't hold
    ///   the bound key
    pub fn attr(&self, name: &str) -> Result<V, AttrError>
    where
        V: Clone,
    {
        self.get(self.resolve(name)?)
    }

    /// Accesses the value behind the accessor `name` with a read-only closure.
    ///
    /// Same resolution as [`attr`](AttrMap::attr), without requiring
    /// `V: Clone`.
    ///
    /// # Errors
    ///
    /// Same as [`attr`](AttrMap::attr).
    pub fn with_attr<F, R>(&self, name: &str, f: F) -> Result<R, AttrError>
    where
        F: FnOnce(&V) -> R,
    {
        self.with(self.resolve(name)?, f)
    }

    /// Accesses the value behind the accessor `name` with a read-write
    /// closure.
    ///
    /// # Errors
    ///
    /// Same as [`attr`](AttrMap::attr).
    pub fn with_attr_mut<F, R>(&self, name: &str, f: F) -> Result<R, AttrError>
    where
        F: FnOnce(&mut V) -> R,
    {
        self.with_mut(self.resolve(name)?, f)
    }

    /// Writes `value` through the accessor `name`.
    ///
    /// A trailing `=` on `name` is accepted and ignored. Resolution is the
    /// same as [`attr`](AttrMap::attr); on success the value is stored under
    /// the bound key, inserting it if this instance didn't hold it yet, so a
    /// write through an already-bound accessor never misses.
    ///
    /// # Errors
    ///
    /// Returns `AttrError::UnknownAttr` if `name` is not yet bound and
    /// matches no key in either space on this instance.
    pub fn set_attr(&self, name: &str, value: V) -> Result<(), AttrError> {
        let key = self.resolve(name)?;
        self.items.lock().insert(key, value);
        Ok(())
    }

    /// Returns `true` if `name` can be accessed as an attribute right now.
    ///
    /// This performs the same binding side effect as a real access, so
    /// probing a not-yet-bound, key-backed name creates the accessor. Generic
    /// code that probes and then reads therefore resolves the name exactly
    /// once, and `responds_to(name)` agrees with whether `attr(name)` would
    /// fail with `UnknownAttr`.
    pub fn responds_to(&self, name: &str) -> bool {
        self.resolve(name).is_ok()
    }

    /// Resolves `name` to its bound key, binding it first if needed.
    ///
    /// The existence check runs against this instance, but the resulting
    /// binding is installed for the whole map type and never removed. The
    /// symbolic space is checked first and wins if both spaces hold a key of
    /// the same rendered name.
    fn resolve(&self, name: &str) -> Result<Key, AttrError> {
        let name = name.strip_suffix('=').unwrap_or(name);
        let sym = Symbol::intern(name);
        let owner = TypeId::of::<Self>();
        if let Some(space) = registry::lookup(owner, sym) {
            return Ok(space.bound_key(sym));
        }
        let space = {
            let items = self.items.lock();
            if items.contains_key(&Key::Symbol(sym)) {
                KeySpace::Symbolic
            } else if items.contains_key(&Key::Str(name.to_owned())) {
                KeySpace::Textual
            } else {
                return Err(AttrError::UnknownAttr(name.to_owned()));
            }
        };
        // First writer wins if two threads race to bind the same name.
        Ok(registry::install(owner, sym, space).bound_key(sym))
    }
}

impl<V> Clone for AttrMap<V> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
        }
    }
}

impl<V> Default for AttrMap<V>
where
    V: Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V> FromIterator<(Key, V)> for AttrMap<V>
where
    V: Send + Sync + 'static,
{
    fn from_iter<I: IntoIterator<Item = (Key, V)>>(iter: I) -> Self {
        Self::from_entries(iter)
    }
}

impl<V> Extend<(Key, V)> for AttrMap<V>
where
    V: Send + Sync + 'static,
{
    fn extend<I: IntoIterator<Item = (Key, V)>>(&mut self, iter: I) {
        self.items.lock().extend(iter);
    }
}

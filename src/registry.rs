//! Process-wide accessor table.
//!
//! Synthesized accessors belong to the map *type*, not the instance: once a
//! name has been bound for one `AttrMap<V>`, every other `AttrMap<V>` in the
//! process resolves that name through the same binding. The table is empty at
//! process start, append-only, and never cleared.

use crate::key::{Key, Symbol};
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::any::TypeId;
use std::collections::HashMap;

/// Which key space an accessor was bound to at synthesis time.
///
/// The binding is fixed once installed and never re-evaluated, even if a key
/// of the same rendered name later appears in the other space.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum KeySpace {
    /// Bound to the symbolic key `:name`
    Symbolic,
    /// Bound to the textual key `"name"`
    Textual,
}

impl KeySpace {
    /// The key this binding fetches and stores.
    pub(crate) fn bound_key(self, name: Symbol) -> Key {
        match self {
            KeySpace::Symbolic => Key::Symbol(name),
            KeySpace::Textual => Key::Str(name.as_str().to_owned()),
        }
    }
}

static ACCESSORS: Lazy<Mutex<HashMap<(TypeId, Symbol), KeySpace>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// Returns the binding already installed for `name` on the map type `owner`,
/// if any.
pub(crate) fn lookup(owner: TypeId, name: Symbol) -> Option<KeySpace> {
    ACCESSORS.lock().get(&(owner, name)).copied()
}

/// Installs a binding for `name` on `owner`, first writer wins.
///
/// Returns the binding that ended up installed, which is `space` unless
/// another thread raced this one and installed first.
pub(crate) fn install(owner: TypeId, name: Symbol, space: KeySpace) -> KeySpace {
    *ACCESSORS.lock().entry((owner, name)).or_insert(space)
}

use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::fmt;

static INTERNER: Lazy<Mutex<Interner>> = Lazy::new(|| Mutex::new(Interner::default()));

#[derive(Default)]
struct Interner {
    ids: HashMap<&'static str, u32>,
    names: Vec<&'static str>,
}

/// An interned, identity-comparable name.
///
/// Interning the same string twice yields the same `Symbol`, so equality and
/// hashing are a single integer comparison. Interned names live for the rest
/// of the process.
///
/// ```
/// use attrmap::Symbol;
///
/// let a = Symbol::intern("speed");
/// let b = Symbol::intern("speed");
/// assert_eq!(a, b);
/// assert_eq!(a.as_str(), "speed");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Symbol(u32);

impl Symbol {
    /// Interns `name`, returning its symbol.
    pub fn intern(name: &str) -> Symbol {
        let mut interner = INTERNER.lock();
        if let Some(&id) = interner.ids.get(name) {
            return Symbol(id);
        }
        let name: &'static str = Box::leak(name.to_owned().into_boxed_str());
        let id = interner.names.len() as u32;
        interner.ids.insert(name, id);
        interner.names.push(name);
        Symbol(id)
    }

    /// Returns the interned string.
    pub fn as_str(self) -> &'static str {
        INTERNER.lock().names[self.0 as usize]
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ":{}", self.as_str())
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A map key in one of the two key spaces.
///
/// `Key::Symbol` and `Key::Str` are distinct entries even when they render
/// the same: `Key::from(Symbol::intern("foo"))` and `Key::from("foo")` can
/// coexist in one map with different values.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Key {
    /// A symbolic (interned) key
    Symbol(Symbol),
    /// A textual (arbitrary string) key
    Str(String),
}

impl From<Symbol> for Key {
    fn from(sym: Symbol) -> Self {
        Key::Symbol(sym)
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::Str(s.to_owned())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::Str(s)
    }
}

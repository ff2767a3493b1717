//! # attrmap
//!
//! A thread-safe key-value container that lazily grows named accessors for
//! its keys.
//!
//! [`AttrMap`] behaves like an ordinary map keyed by [`Key`] — either a
//! symbolic (interned) or a textual (string) key — until a caller asks for an
//! entry *by name* through the attribute surface. The first such access runs
//! a one-time decision: does a key matching that name exist on this instance?
//! If so, the name is bound to the matching key space and memoized for the
//! whole map type; if not, the access fails the way any unknown member would.
//! From then on, every access for that name on any map of the same type goes
//! straight through the memoized binding.
//!
//! ## Key Features
//!
//! - **Two key spaces**: symbolic and textual keys of the same rendered name
//!   are distinct entries; the symbolic space wins when an accessor name
//!   matches both
//! - **Bind once**: accessor resolution runs at most once per map type and
//!   name, then becomes a table lookup
//! - **Thread-safe**: built on `Arc<Mutex<_>>`, with a first-writer-wins
//!   install discipline for the shared accessor table
//! - **Unconstrained values**: `AttrMap<V>` stores any `V: Send + Sync`
//!
//! ## Usage Examples
//!
//! ### Basic Usage
//!
//! ```rust
//! use attrmap::{AttrMap, AttrError};
//!
//! fn main() -> Result<(), AttrError> {
//!     let map = AttrMap::new();
//!
//!     // Ordinary map operations, textual key
//!     map.set("one", 1);
//!     assert_eq!(map.get("one")?, 1);
//!
//!     // The same entry, as an attribute
//!     assert_eq!(map.attr("one")?, 1);
//!     map.set_attr("one", 3)?;
//!     assert_eq!(map.get("one")?, 3);
//!
//!     // Names with no matching key fail like any unknown member
//!     match map.attr("two") {
//!         Err(AttrError::UnknownAttr(name)) => assert_eq!(name, "two"),
//!         other => panic!("unexpected: {:?}", other),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ### Symbolic and Textual Keys
//!
//! ```rust
//! use attrmap::{AttrMap, AttrError, Symbol};
//!
//! fn main() -> Result<(), AttrError> {
//!     let map = AttrMap::new();
//!
//!     // Distinct entries that render the same
//!     map.set(Symbol::intern("x"), 5);
//!     map.set("x", 9);
//!
//!     // The accessor binds to the symbolic entry
//!     assert_eq!(map.attr("x")?, 5);
//!     // The textual entry is still reachable by direct indexing
//!     assert_eq!(map.get("x")?, 9);
//!     Ok(())
//! }
//! ```
//!
//! ### Probing Before Access
//!
//! ```rust
//! use attrmap::AttrMap;
//!
//! let map = AttrMap::new();
//! map.set("retries", 3u32);
//!
//! // responds_to agrees with attr, and binds the accessor as a real
//! // access would, so the probe-then-read pattern resolves the name once.
//! if map.responds_to("retries") {
//!     assert_eq!(map.attr("retries").unwrap(), 3);
//! }
//! assert!(!map.responds_to("backoff"));
//! ```
//!
//! ## Scope of a Binding
//!
//! Accessor bindings belong to the map *type*, not the instance. Once
//! `attr("speed")` has succeeded on one `AttrMap<V>`, the name is bound for
//! every `AttrMap<V>` in the process: a sibling map that never held the key
//! fails with [`AttrError::KeyNotFound`] (the binding exists, the key
//! doesn't) rather than [`AttrError::UnknownAttr`], and a write through the
//! bound accessor simply inserts the key. Bindings are never removed for the
//! lifetime of the process.

mod error;
mod key;
mod map;
mod registry;

pub use error::AttrError;
pub use key::{Key, Symbol};
pub use map::AttrMap;

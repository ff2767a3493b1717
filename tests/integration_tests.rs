use attrmap::{AttrError, AttrMap, Key, Symbol};
use std::sync::Arc;
use std::thread;

#[test]
fn test_plain_map_operations() {
    let map: AttrMap<i32> = AttrMap::new();
    assert!(map.is_empty());

    map.set("plain_a", 1);
    map.set(Symbol::intern("plain_b"), 2);

    assert!(map.contains_key("plain_a"));
    assert!(map.contains_key(Symbol::intern("plain_b")));
    assert_eq!(map.len(), 2);
    assert_eq!(map.get("plain_a").unwrap(), 1);

    let mut keys = map.keys();
    keys.sort_by_key(|k| format!("{:?}", k));
    assert_eq!(keys.len(), 2);

    assert!(map.remove("plain_a"));
    assert!(!map.remove("plain_a"));
    assert!(!map.contains_key("plain_a"));
    assert_eq!(map.len(), 1);

    // Direct lookup of a missing key is a key miss, not an unknown member
    assert!(matches!(
        map.get("plain_a"),
        Err(AttrError::KeyNotFound(_))
    ));
}

#[test]
fn test_textual_entry_as_attribute() {
    // c = {}; c["one"] = 1; c.one == 1; c.one = 3; c["one"] == 3;
    // c.two raises
    let map: AttrMap<i32> = AttrMap::new();
    map.set("one", 1);

    assert_eq!(map.attr("one").unwrap(), 1);

    map.set_attr("one", 3).unwrap();
    assert_eq!(map.get("one").unwrap(), 3);

    match map.attr("two") {
        Err(AttrError::UnknownAttr(name)) => assert_eq!(name, "two"),
        other => panic!("expected UnknownAttr, got {:?}", other),
    }
    match map.set_attr("two", 2) {
        Err(AttrError::UnknownAttr(name)) => assert_eq!(name, "two"),
        other => panic!("expected UnknownAttr, got {:?}", other),
    }
}

#[test]
fn test_symbolic_entry_wins_over_textual() {
    // c[:x] = 5; c["x"] = 9; c.x == 5; c["x"] == 9
    let map: AttrMap<i32> = AttrMap::new();
    map.set(Symbol::intern("x"), 5);
    map.set("x", 9);

    assert_eq!(map.attr("x").unwrap(), 5);
    assert_eq!(map.get("x").unwrap(), 9);

    // Writes through the accessor land on the symbolic entry only
    map.set_attr("x", 7).unwrap();
    assert_eq!(map.get(Symbol::intern("x")).unwrap(), 7);
    assert_eq!(map.get("x").unwrap(), 9);
}

#[test]
fn test_seeded_construction_keeps_key_spaces() {
    let map = AttrMap::from_entries([
        (Key::from(Symbol::intern("seeded_sym")), 1),
        (Key::from("seeded_text"), 2),
    ]);

    assert_eq!(map.attr("seeded_sym").unwrap(), 1);
    assert_eq!(map.attr("seeded_text").unwrap(), 2);
    assert!(map.contains_key(Symbol::intern("seeded_sym")));
    assert!(!map.contains_key("seeded_sym"));
}

#[test]
fn test_probe_then_read() {
    let map: AttrMap<i32> = AttrMap::new();
    map.set("probe_hit", 10);

    assert!(map.responds_to("probe_hit"));
    assert_eq!(map.attr("probe_hit").unwrap(), 10);

    assert!(!map.responds_to("probe_miss"));
    assert!(matches!(
        map.attr("probe_miss"),
        Err(AttrError::UnknownAttr(_))
    ));

    // The writer form probes too
    assert!(map.responds_to("probe_hit="));
}

#[test]
fn test_binding_survives_instance() {
    #[derive(Clone, Debug, PartialEq)]
    struct Val(i32);

    let first: AttrMap<Val> = AttrMap::new();
    first.set(Symbol::intern("shared_name"), Val(1));
    assert_eq!(first.attr("shared_name").unwrap(), Val(1));

    // A fresh instance of the same map type sees the binding: the name is
    // known, the key is not.
    let second: AttrMap<Val> = AttrMap::new();
    assert!(second.responds_to("shared_name"));
    assert!(matches!(
        second.attr("shared_name"),
        Err(AttrError::KeyNotFound(_))
    ));

    // Writing through the bound accessor inserts the key
    second.set_attr("shared_name", Val(2)).unwrap();
    assert_eq!(second.attr("shared_name").unwrap(), Val(2));
    // The original instance is untouched
    assert_eq!(first.attr("shared_name").unwrap(), Val(1));
}

#[test]
fn test_removed_key_keeps_binding() {
    #[derive(Clone, Debug, PartialEq)]
    struct Val(i32);

    let map: AttrMap<Val> = AttrMap::new();
    map.set("ephemeral", Val(1));
    assert_eq!(map.attr("ephemeral").unwrap(), Val(1));

    // Removing the entry does not unbind the accessor; reads now miss the
    // key instead of the member, and a write recreates the entry.
    assert!(map.remove("ephemeral"));
    assert!(map.responds_to("ephemeral"));
    assert!(matches!(
        map.attr("ephemeral"),
        Err(AttrError::KeyNotFound(_))
    ));
    map.set_attr("ephemeral", Val(3)).unwrap();
    assert_eq!(map.get("ephemeral").unwrap(), Val(3));
}

#[test]
fn test_thread_safety() {
    struct Counter(i32);

    let map = Arc::new(AttrMap::new());
    map.set("counter", Counter(0));

    // Threads race both the first binding of the name and the updates
    let mut handles = vec![];
    for _ in 0..10 {
        let map = Arc::clone(&map);
        handles.push(thread::spawn(move || {
            for _ in 0..100 {
                map.with_attr_mut("counter", |c: &mut Counter| c.0 += 1)
                    .unwrap();
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }

    let total = map.with_attr("counter", |c: &Counter| c.0).unwrap();
    assert_eq!(total, 1000);
}

#[test]
fn test_shared_handles() {
    let map: AttrMap<String> = AttrMap::new();
    let handle = map.clone();

    handle.set("greeting", "hello".to_string());
    assert_eq!(map.attr("greeting").unwrap(), "hello");

    map.set_attr("greeting", "goodbye".to_string()).unwrap();
    assert_eq!(handle.get("greeting").unwrap(), "goodbye");
}

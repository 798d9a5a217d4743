/// Unit tests for bean keys

use gof_creational::Key;
use std::any::TypeId;
use std::collections::HashSet;

#[test]
fn test_type_key_display_name() {
    let key = Key::of::<String>();
    assert_eq!(key.display_name(), "alloc::string::String");
    assert_eq!(key.bean_name(), None);
    assert_eq!(key.bean_type(), TypeId::of::<String>());
}

#[test]
fn test_named_key() {
    let key = Key::named::<u32>("port");
    assert_eq!(key.display_name(), "u32");
    assert_eq!(key.bean_name(), Some("port"));
    assert!(key.is_type::<u32>());
    assert!(!key.is_type::<u64>());
}

#[test]
fn test_key_equality() {
    assert_eq!(Key::of::<u32>(), Key::of::<u32>());
    assert_ne!(Key::of::<u32>(), Key::of::<u64>());
    assert_ne!(Key::of::<u32>(), Key::named::<u32>("port"));
    assert_ne!(Key::named::<u32>("port"), Key::named::<u32>("timeout"));
    assert_eq!(Key::named::<u32>("port"), Key::named::<u32>("port".to_string()));
}

#[test]
fn test_key_hashing() {
    let mut keys = HashSet::new();
    keys.insert(Key::of::<String>());
    keys.insert(Key::of::<String>());
    keys.insert(Key::named::<String>("hello"));

    assert_eq!(keys.len(), 2);
    assert!(keys.contains(&Key::named::<String>("hello")));
}

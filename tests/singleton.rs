/// Singleton holder tests: accessor identity, constructor escape hatch,
/// and serialization round-trips with and without the resolution hook.

use gof_creational::{
    from_bytes, read_object, to_bytes, write_object, DeclaredConstructors, EnumSettings, PatternError, PlainSettings,
    Settings, Snapshot,
};
use serial_test::serial;
use std::io::Cursor;

// ===== Accessor =====

#[test]
fn test_get_instance_gives_singleton() {
    let settings1 = Settings::get_instance();
    let settings2 = Settings::get_instance();

    assert!(std::ptr::eq(settings1, settings2));
    assert!(std::ptr::eq(settings1, Settings::get_instance()));
}

#[test]
fn test_plain_get_instance_gives_singleton() {
    assert!(std::ptr::eq(PlainSettings::get_instance(), PlainSettings::get_instance()));
}

#[test]
#[serial]
fn test_number_is_shared_through_accessor() {
    Settings::get_instance().set_number(26);
    assert_eq!(Settings::get_instance().number(), Some(26));

    Settings::get_instance().set_number(None);
    assert_eq!(Settings::get_instance().number(), None);
}

#[test]
#[serial]
fn test_enum_number_is_shared() {
    EnumSettings::Instance.set_number(7);
    assert_eq!(EnumSettings::get_instance().number(), Some(7));
    EnumSettings::Instance.set_number(None);
}

// ===== Constructor escape hatch =====

#[test]
fn test_constructor_breaks_singleton() {
    let settings1 = Settings::get_instance();

    let mut constructor = Settings::declared_constructors().remove(0);
    constructor.set_accessible(true);
    let settings2 = constructor.new_instance(&[]).unwrap();

    assert!(!std::ptr::eq(settings1, &*settings2));
    // The accessor still hands out the original
    assert!(std::ptr::eq(settings1, Settings::get_instance()));
}

#[test]
fn test_constructor_requires_accessible() {
    let constructor = PlainSettings::declared_constructors().remove(0);
    assert!(!constructor.is_accessible());
    assert_eq!(
        constructor.new_instance(&[]).unwrap_err(),
        PatternError::IllegalAccess("constructor is not accessible")
    );
}

#[test]
fn test_rogue_instance_has_own_state() {
    let mut constructor = PlainSettings::declared_constructors().remove(0);
    constructor.set_accessible(true);
    let rogue = constructor.new_instance(&[]).unwrap();

    rogue.set_number(99);
    assert_eq!(rogue.number(), Some(99));
    assert_ne!(PlainSettings::get_instance().number(), Some(99));
}

#[test]
fn test_enum_constructor_needs_access_first() {
    let constructor = EnumSettings::declared_constructors().remove(0);
    let err = constructor.new_instance(&["INSTANCE"]).unwrap_err();
    assert!(matches!(err, PatternError::IllegalAccess(_)));
}

#[test]
fn test_enum_blocks_constructor() {
    let declared = EnumSettings::declared_constructors();
    assert!(!declared.is_empty());

    for mut constructor in declared {
        constructor.set_accessible(true);
        let err = constructor.new_instance(&["INSTANCE"]).unwrap_err();
        assert!(matches!(err, PatternError::IllegalConstruction(_)));
    }
}

// ===== Serialization =====

#[test]
fn test_no_resolve_hook_breaks_singleton() {
    let settings1 = PlainSettings::get_instance();

    let mut out = Vec::new();
    write_object(settings1, &mut out).unwrap();
    let settings2 = read_object::<PlainSettings, _>(Cursor::new(out)).unwrap();

    assert!(!settings2.is_canonical());
    assert!(!std::ptr::eq(settings1, &*settings2));
}

#[test]
fn test_resolve_hook_sustains_singleton() {
    let settings1 = Settings::get_instance();

    let mut out = Vec::new();
    write_object(settings1, &mut out).unwrap();
    let settings2 = read_object::<Settings, _>(Cursor::new(out)).unwrap();

    assert!(settings2.is_canonical());
    assert!(std::ptr::eq(settings1, &*settings2));
}

#[test]
#[serial]
fn test_fresh_copy_carries_number() {
    let plain = PlainSettings::get_instance();
    plain.set_number(5);

    let decoded = from_bytes::<PlainSettings>(&to_bytes(plain).unwrap()).unwrap();
    assert_eq!(decoded.number(), Some(5));

    // Diverges from the original afterwards
    decoded.set_number(6);
    assert_eq!(plain.number(), Some(5));
    plain.set_number(None);
}

#[test]
fn test_enum_serialization_keeps_singleton() {
    let settings1 = EnumSettings::Instance;

    let bytes = to_bytes(&settings1).unwrap();
    let settings2 = from_bytes::<EnumSettings>(&bytes).unwrap();

    assert_eq!(settings1, *settings2);
}

#[test]
fn test_snapshot_rebuilds_only_through_decoder() {
    let wire = Settings::get_instance().snapshot();
    let bytes = serde_json::to_vec(&wire).unwrap();

    let decoded = from_bytes::<Settings>(&bytes).unwrap();
    assert!(decoded.is_canonical());
}

#[test]
fn test_truncated_input_fails() {
    let err = from_bytes::<Settings>(b"{\"number\":").unwrap_err();
    assert!(matches!(err, PatternError::Serialization(_)));
}

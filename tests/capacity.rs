use assert_fs::prelude::*;
use assert_fs::TempDir;

use dropzone::zone::{ZoneError, ZoneRegistry, ZoneStore, DEFAULT_CAPACITY, DEFAULT_ZONE_COUNT};

#[test]
fn four_defaults_plus_four_then_refusal() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut registry = ZoneRegistry::with_default_zones(temp.path(), DEFAULT_CAPACITY, DEFAULT_ZONE_COUNT)?;
    for _ in 0..4 {
        registry.create_zone(None, None)?;
    }
    assert!(registry.is_full());

    let err = registry.create_zone(Some("Overflow"), None).unwrap_err();
    assert!(matches!(err, ZoneError::CapacityReached { capacity: 8 }));
    assert_eq!(registry.len(), 8);
    assert!(registry.zones().iter().all(|z| z.name != "Overflow"));
    Ok(())
}

#[test]
fn removal_frees_a_slot() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut registry = ZoneRegistry::with_default_zones(temp.path(), 2, 2)?;
    let first = registry.zones()[0].id;
    registry.remove_zone(first)?;
    registry.create_zone(Some("Fresh"), None)?;
    assert_eq!(registry.len(), 2);
    temp.child("Area1").assert(predicates::path::is_dir());
    Ok(())
}

#[test]
fn store_round_trip_respects_a_smaller_capacity() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let registry = ZoneRegistry::with_default_zones(temp.child("base").path(), 8, 6)?;
    let store = ZoneStore::new(temp.child("zones.toml").path());
    store.save(&registry)?;
    temp.child("zones.toml").assert(predicates::str::contains("[[zone]]"));

    let restored = store
        .load()?
        .expect("store was written")
        .into_registry(temp.child("base").path(), 4)?;
    assert!(restored.unavailable.is_empty());
    assert_eq!(restored.registry.len(), 4);
    assert_eq!(restored.registry.zones()[3].name, "Zone 4");
    Ok(())
}

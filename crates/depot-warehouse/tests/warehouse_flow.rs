use chrono::{TimeZone, Utc};
use depot_codec::Format;
use depot_store::{InMemoryRepository, ItemStore, StoreError};
use depot_types::{ElectronicItem, InventoryItem, ItemId};
use depot_warehouse::{BufferedPresenter, WarehouseConfig, WarehouseError, WarehouseManager};

fn manager() -> WarehouseManager {
    let clock = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
    WarehouseManager::with_config(WarehouseConfig::at(clock))
        .with_presenter(BufferedPresenter::new())
}

#[test]
fn laptop_scenario() {
    let repo = InMemoryRepository::new();
    repo.add(ElectronicItem::new(1, "Laptop", 10, "Dell", 24)).unwrap();

    let dup = repo.add(ElectronicItem::new(1, "Tablet", 5, "Apple", 12));
    assert_eq!(dup, Err(StoreError::DuplicateItem { id: ItemId::new(1) }));

    let neg = repo.update_quantity(ItemId::new(1), -5);
    assert_eq!(neg, Err(StoreError::InvalidQuantity { quantity: -5 }));

    repo.update_quantity(ItemId::new(1), 15).unwrap();
    assert_eq!(repo.get_by_id(ItemId::new(1)).unwrap().quantity(), 15);

    repo.remove(ItemId::new(1)).unwrap();
    assert_eq!(
        repo.remove(ItemId::new(1)),
        Err(StoreError::ItemNotFound { id: ItemId::new(1) })
    );
}

#[test]
fn bulk_operations_continue_after_failures() {
    let m = manager();
    m.seed_sample_data().unwrap();

    // A batch with bad entries in the middle still applies the good ones.
    let results: Vec<Option<i64>> = [(1, 5), (99, 5), (2, -100), (3, 1)]
        .into_iter()
        .map(|(id, delta)| m.increase_stock(m.electronics(), ItemId::new(id), delta))
        .collect();
    assert_eq!(results, vec![Some(15), None, None, Some(51)]);

    let removed: Vec<bool> = [3, 3, 7]
        .into_iter()
        .map(|id| m.remove_by_id(m.groceries(), ItemId::new(id)))
        .collect();
    assert_eq!(removed, vec![true, false, false]);
    assert_eq!(m.groceries().len(), 2);
}

#[test]
fn save_and_load_preserves_every_field() {
    let dir = tempfile::tempdir().unwrap();

    for format in [Format::Json, Format::Bincode] {
        let path = dir.path().join(format!("inventory.{format}"));
        let original = manager();
        original.seed_sample_data().unwrap();
        original.increase_stock(original.groceries(), ItemId::new(1), 4);
        assert_eq!(original.save(&path, format).unwrap(), 6);

        let restored = manager();
        assert_eq!(restored.load(&path, format).unwrap(), Some(6));
        assert_eq!(restored.snapshot(), original.snapshot());
        assert_eq!(restored.electronics().list_all(), original.electronics().list_all());
        assert_eq!(restored.groceries().list_all(), original.groceries().list_all());
    }
}

#[test]
fn load_missing_snapshot_is_none() {
    let dir = tempfile::tempdir().unwrap();
    let m = manager();
    assert_eq!(m.load(&dir.path().join("inventory.json"), Format::Json).unwrap(), None);
    assert!(m.electronics().is_empty());
}

#[test]
fn load_into_populated_manager_reports_duplicate() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.json");
    let m = manager();
    m.seed_sample_data().unwrap();
    m.save(&path, Format::Json).unwrap();

    let err = m.load(&path, Format::Json).unwrap_err();
    assert!(
        matches!(err, WarehouseError::Store(StoreError::DuplicateItem { .. })),
        "expected duplicate, got: {err}"
    );
}

#[test]
fn load_rejects_negative_quantity_in_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.json");
    std::fs::write(
        &path,
        r#"{"version":1,"records":[{"electronic":{"id":1,"name":"Laptop","quantity":-7,"brand":"Dell","warranty_months":24}}]}"#,
    )
    .unwrap();

    let m = manager();
    let err = m.load(&path, Format::Json).unwrap_err();
    assert!(
        matches!(
            err,
            WarehouseError::Store(StoreError::InvalidQuantity { quantity: -7 })
        ),
        "expected invalid quantity, got: {err}"
    );
    assert!(m.electronics().is_empty());
}

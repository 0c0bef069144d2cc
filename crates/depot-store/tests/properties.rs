use std::collections::HashSet;

use depot_store::{InMemoryRepository, ItemStore, StoreError};
use depot_types::{ElectronicItem, InventoryItem, ItemId};
use proptest::prelude::*;

fn item(id: i32, quantity: i64) -> ElectronicItem {
    ElectronicItem::new(id, format!("item-{id}"), quantity, "Acme", 12)
}

#[derive(Clone, Debug)]
enum Op {
    Add(i32, i64),
    Remove(i32),
    Update(i32, i64),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0i32..16, 0i64..100).prop_map(|(id, q)| Op::Add(id, q)),
        (0i32..16).prop_map(Op::Remove),
        (0i32..16, -50i64..100).prop_map(|(id, q)| Op::Update(id, q)),
    ]
}

proptest! {
    #[test]
    fn at_most_one_item_per_id(ids in prop::collection::vec(0i32..32, 0..64)) {
        let repo = InMemoryRepository::new();
        let mut seen = HashSet::new();

        for (n, id) in ids.iter().copied().enumerate() {
            let result = repo.add(item(id, n as i64));
            if seen.insert(id) {
                prop_assert!(result.is_ok());
            } else {
                prop_assert_eq!(result, Err(StoreError::DuplicateItem { id: ItemId::new(id) }));
            }
        }

        prop_assert_eq!(repo.len(), seen.len());
        // The first insertion wins.
        for id in &seen {
            let first = ids.iter().position(|x| x == id).unwrap() as i64;
            prop_assert_eq!(repo.get_by_id(ItemId::new(*id)).unwrap().quantity(), first);
        }
    }

    #[test]
    fn absent_ids_fail_everywhere(
        present in prop::collection::hash_set(0i32..32, 0..16),
        target in 0i32..32,
        quantity in 0i64..100,
    ) {
        let repo = InMemoryRepository::new();
        for id in &present {
            repo.add(item(*id, 1)).unwrap();
        }
        // Removed ids behave like never-inserted ones.
        if present.contains(&target) {
            repo.remove(ItemId::new(target)).unwrap();
        }

        let id = ItemId::new(target);
        let missing = StoreError::ItemNotFound { id };
        prop_assert_eq!(repo.get_by_id(id).unwrap_err(), missing.clone());
        prop_assert_eq!(repo.remove(id).unwrap_err(), missing.clone());
        prop_assert_eq!(repo.update_quantity(id, quantity).unwrap_err(), missing);
    }

    #[test]
    fn update_rejects_exactly_negative_quantities(
        stored in any::<bool>(),
        quantity in -1_000i64..1_000,
    ) {
        let repo = InMemoryRepository::new();
        if stored {
            repo.add(item(7, 5)).unwrap();
        }

        let result = repo.update_quantity(ItemId::new(7), quantity);
        if quantity < 0 {
            prop_assert_eq!(result, Err(StoreError::InvalidQuantity { quantity }));
        } else if stored {
            prop_assert!(result.is_ok());
            prop_assert_eq!(repo.get_by_id(ItemId::new(7)).unwrap().quantity(), quantity);
        } else {
            prop_assert_eq!(result, Err(StoreError::ItemNotFound { id: ItemId::new(7) }));
        }
    }

    #[test]
    fn stored_quantities_never_negative(ops in prop::collection::vec(op(), 0..80)) {
        let repo = InMemoryRepository::new();
        for op in ops {
            let _ = match op {
                Op::Add(id, q) => repo.add(item(id, q)),
                Op::Remove(id) => repo.remove(ItemId::new(id)).map(|_| ()),
                Op::Update(id, q) => repo.update_quantity(ItemId::new(id), q),
            };
            prop_assert!(repo.list_all().iter().all(|i| i.quantity() >= 0));
        }
    }

    #[test]
    fn snapshot_mutation_is_isolated(
        ids in prop::collection::hash_set(0i32..64, 1..20),
        bump in 1i64..1_000,
    ) {
        let repo = InMemoryRepository::new();
        for id in &ids {
            repo.add(item(*id, 3)).unwrap();
        }

        let before = repo.list_all();
        let mut snapshot = repo.list_all();
        for entry in snapshot.iter_mut() {
            entry.set_quantity(entry.quantity() + bump);
        }
        snapshot.clear();

        prop_assert_eq!(repo.list_all(), before);
    }
}

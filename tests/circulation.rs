//! Circulation integration tests
//!
//! Exercises the full flow (CSV ingestion -> circulation service) and the
//! concurrency guarantee: two racing borrows of one unique id, one winner.

use std::collections::HashSet;
use std::thread;

use circulib::{ingest, CatalogStore, CirculationService, Item, ItemKind, User};

const INVENTORY_CSV: &str = "\
uniqueId,itemId,type,title
1,100,Book,Pi
2,100,Book,Pi
3,200,DVD,Dune
4,300,VHS,Alien
5,400,CD,Kind of Blue
";

fn service_from_csv() -> CirculationService {
    let mut store = CatalogStore::new();
    ingest::load_inventory(&mut store, INVENTORY_CSV.as_bytes()).expect("inventory should load");
    CirculationService::new(store)
}

/// Every unique id is available XOR held by exactly one user
fn assert_partition_invariant(service: &CirculationService, users: &[User], all_ids: &[i32]) {
    for &id in all_ids {
        let available = service.items().contains_key(&id);
        let holders = users
            .iter()
            .filter(|u| {
                service
                    .borrowed_items(u)
                    .iter()
                    .any(|item| item.unique_id == id)
            })
            .count();
        assert!(
            (available && holders == 0) || (!available && holders == 1),
            "id {id}: available={available}, holders={holders}"
        );
    }
}

#[test]
fn test_full_borrow_return_flow() {
    let service = service_from_csv();
    let alice = User::new("Alice");
    let bob = User::new("Bob");
    let users = [alice.clone(), bob.clone()];
    let all_ids = [1, 2, 3, 4, 5];

    assert_partition_invariant(&service, &users, &all_ids);

    assert!(service.borrow(1, &alice));
    assert!(service.borrow(3, &bob));
    assert_partition_invariant(&service, &users, &all_ids);
    assert!(!service.is_available(1));
    assert!(service.is_available(2));

    // A second copy of the same work is still borrowable
    assert!(service.borrow(2, &bob));
    assert_eq!(service.borrowed_items(&bob).len(), 2);
    assert_partition_invariant(&service, &users, &all_ids);

    assert!(service.return_item(1, &alice));
    assert!(service.is_available(1));
    assert!(service.borrowed_items(&alice).is_empty());
    assert_partition_invariant(&service, &users, &all_ids);
}

#[test]
fn test_inventory_titles_deduped_after_ingestion() {
    let service = service_from_csv();
    let expected: Vec<String> = ["Pi", "Dune", "Alien", "Kind of Blue"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(service.inventory(), expected);
}

#[test]
fn test_concurrent_borrow_same_id_one_winner() {
    // Repeat the race; a single run can pass by accident
    for _ in 0..50 {
        let service = service_from_csv();
        let alice = User::new("Alice");
        let bob = User::new("Bob");

        let handles: Vec<_> = [alice.clone(), bob.clone()]
            .into_iter()
            .map(|user| {
                let service = service.clone();
                thread::spawn(move || service.borrow(3, &user))
            })
            .collect();

        let outcomes: Vec<bool> = handles
            .into_iter()
            .map(|h| h.join().expect("borrower thread panicked"))
            .collect();

        assert_eq!(
            outcomes.iter().filter(|&&won| won).count(),
            1,
            "exactly one racing borrow must succeed"
        );

        let alice_has = service
            .borrowed_items(&alice)
            .iter()
            .any(|item| item.unique_id == 3);
        let bob_has = service
            .borrowed_items(&bob)
            .iter()
            .any(|item| item.unique_id == 3);
        assert!(alice_has ^ bob_has, "item must end up with exactly one user");
        assert!(!service.is_available(3));
    }
}

#[test]
fn test_concurrent_borrows_of_distinct_ids_all_succeed() {
    let service = service_from_csv();

    let handles: Vec<_> = (1..=5)
        .map(|id| {
            let service = service.clone();
            thread::spawn(move || {
                let user = User::new(format!("user-{id}"));
                service.borrow(id, &user)
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().expect("borrower thread panicked"));
    }
    assert!(service.items().is_empty());
}

#[test]
fn test_overdue_items_appear_exactly_once() {
    use chrono::{Duration, Local};

    let today = Local::now().date_naive();
    let mut store = CatalogStore::new();
    let alice = User::new("Alice");
    let bob = User::new("Bob");

    for (id, user, days_late) in [(1, &alice, 3), (2, &alice, 1), (3, &bob, 2)] {
        let mut item = Item::new(id, 100, ItemKind::Book, format!("Book {id}"));
        item.due_date = Some(today - Duration::days(days_late));
        item.borrowed_by = Some(user.clone());
        store.add_loan(user, item);
    }
    // Borrowed but not yet due
    let mut fresh = Item::new(4, 100, ItemKind::Book, "Fresh");
    fresh.due_date = Some(today + Duration::days(5));
    fresh.borrowed_by = Some(bob.clone());
    store.add_loan(&bob, fresh);
    // Never borrowed
    store.add_item(Item::new(5, 100, ItemKind::Book, "Shelved")).unwrap();

    let service = CirculationService::new(store);
    let overdue_ids: HashSet<i32> = service
        .overdue_items()
        .iter()
        .map(|item| item.unique_id)
        .collect();

    assert_eq!(service.overdue_items().len(), 3, "no duplicates");
    assert_eq!(overdue_ids, HashSet::from([1, 2, 3]));
}

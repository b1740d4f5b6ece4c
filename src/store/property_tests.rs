//! Property-Based Tests for Store Module
//!
//! Uses proptest to check identity assignment, replacement and pagination
//! against arbitrary operation sequences.

use proptest::prelude::*;
use std::collections::HashSet;

use crate::store::{Employee, EmployeeId, EmployeeStore, PageRequest};

// == Strategies ==
/// Generates arbitrary employee records, including a client-chosen id
fn employee_strategy() -> impl Strategy<Value = Employee> {
    (
        any::<i64>(),
        "[a-zA-Z ]{0,32}",
        "[a-zA-Z ]{0,32}",
        0.0f64..1_000_000.0,
    )
        .prop_map(|(id, name, position, salary)| Employee {
            id,
            name,
            position,
            salary,
        })
}

/// Generates a sequence of store operations for testing
#[derive(Debug, Clone)]
enum StoreOp {
    Create(Employee),
    Update(EmployeeId, Employee),
    Delete(EmployeeId),
}

fn store_op_strategy() -> impl Strategy<Value = StoreOp> {
    prop_oneof![
        employee_strategy().prop_map(StoreOp::Create),
        (1i64..40, employee_strategy()).prop_map(|(id, e)| StoreOp::Update(id, e)),
        (1i64..40).prop_map(StoreOp::Delete),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Creating a record and reading it back yields the same fields with the
    // assigned id.
    #[test]
    fn prop_create_get_roundtrip(employee in employee_strategy()) {
        let store = EmployeeStore::new();

        let id = tokio_test::block_on(store.create(employee.clone()));
        let stored = tokio_test::block_on(store.get(id));

        prop_assert_eq!(stored, Some(employee.with_id(id)));
    }

    // Ids handed out by successive creates are distinct and strictly increasing.
    #[test]
    fn prop_ids_strictly_increasing(ops in prop::collection::vec(store_op_strategy(), 1..60)) {
        let store = EmployeeStore::new();
        let mut assigned: Vec<EmployeeId> = Vec::new();

        tokio_test::block_on(async {
            for op in ops {
                match op {
                    StoreOp::Create(e) => assigned.push(store.create(e).await),
                    StoreOp::Update(id, e) => {
                        store.update(id, e).await;
                    }
                    StoreOp::Delete(id) => {
                        store.delete(id).await;
                    }
                }
            }
        });

        for pair in assigned.windows(2) {
            prop_assert!(pair[0] < pair[1], "ids {} and {} out of order", pair[0], pair[1]);
        }
        let unique: HashSet<_> = assigned.iter().collect();
        prop_assert_eq!(unique.len(), assigned.len());

        let last_id = tokio_test::block_on(store.last_id());
        prop_assert_eq!(last_id, assigned.last().copied().unwrap_or(0));
    }

    // Updating id X with a payload carrying some other id leaves the record at X.
    #[test]
    fn prop_update_preserves_identity(
        original in employee_strategy(),
        replacement in employee_strategy()
    ) {
        let store = EmployeeStore::new();

        let (id, updated, stored) = tokio_test::block_on(async {
            let id = store.create(original).await;
            let updated = store.update(id, replacement.clone()).await;
            (id, updated, store.get(id).await)
        });

        prop_assert!(updated);
        prop_assert_eq!(stored, Some(replacement.with_id(id)));
    }

    // After a successful delete the record is gone and a second delete fails.
    #[test]
    fn prop_delete_is_terminal(employee in employee_strategy()) {
        let store = EmployeeStore::new();

        let (first, found, second) = tokio_test::block_on(async {
            let id = store.create(employee).await;
            let first = store.delete(id).await;
            (first, store.get(id).await, store.delete(id).await)
        });

        prop_assert!(first);
        prop_assert!(found.is_none());
        prop_assert!(!second);
    }

    // A page never holds more than page_size records, and a single page sized
    // to the whole store returns every record.
    #[test]
    fn prop_pagination_bounds(
        count in 0usize..60,
        page in -2i64..10,
        page_size in -2i64..25
    ) {
        let store = EmployeeStore::new();

        let (paged, whole) = tokio_test::block_on(async {
            for i in 0..count {
                store.create(Employee::new(format!("emp{}", i), "Staff", 1.0)).await;
            }
            let paged = store.list(PageRequest::new(page, page_size)).await;
            let whole = store.list(PageRequest::new(1, count as i64)).await;
            (paged, whole)
        });

        prop_assert!(paged.len() as i64 <= page_size.max(0));

        let ids: HashSet<EmployeeId> = whole.iter().map(|e| e.id).collect();
        prop_assert_eq!(ids.len(), count);
        prop_assert_eq!(ids, (1..=count as i64).collect::<HashSet<_>>());
    }

    // Walking every page in turn visits each record exactly once.
    #[test]
    fn prop_pages_partition_store(count in 0usize..60, page_size in 1i64..15) {
        let store = EmployeeStore::new();

        let seen = tokio_test::block_on(async {
            for _ in 0..count {
                store.create(Employee::new("Ann", "QA", 1.0)).await;
            }
            let mut seen = Vec::new();
            let mut page = 1;
            loop {
                let records = store.list(PageRequest::new(page, page_size)).await;
                if records.is_empty() {
                    break;
                }
                seen.extend(records.into_iter().map(|e| e.id));
                page += 1;
            }
            seen
        });

        prop_assert_eq!(seen, (1..=count as i64).collect::<Vec<_>>());
    }
}

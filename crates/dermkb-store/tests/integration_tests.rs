//! Integration tests for dermkb-store
//!
//! These tests verify the full put/get/delete cycle and the invariant that
//! the store and the term index are updated together.

use dermkb_domain::traits::{RecordFilter, RecordStore};
use dermkb_domain::{KnowledgeRecord, RecordId};
use dermkb_store::{MemoryStore, StoreError};

fn qa(id: &str, question: &str, answer: &str, category: &str) -> KnowledgeRecord {
    KnowledgeRecord::qa(
        RecordId::from(id),
        question,
        answer,
        category,
        vec![],
        90.0,
        vec![],
        1000,
    )
}

#[test]
fn test_seeded_store_contents() {
    let store = MemoryStore::with_seed().unwrap();

    assert_eq!(store.len(), 3);

    let record = store.get(&RecordId::from("1")).unwrap();
    assert_eq!(record.title, "What causes eczema flare-ups?");
    assert_eq!(record.category, "Eczema");
    assert_eq!(record.tags, vec!["triggers", "flare-ups", "management"]);
}

#[test]
fn test_put_and_get_roundtrip() {
    let store = MemoryStore::new();
    let record = qa("10", "Does sunscreen prevent melasma?", "It helps.", "Melasma");

    let id = store.put(record.clone()).unwrap();
    assert_eq!(id, RecordId::from("10"));

    let retrieved = store.get(&id).unwrap();
    assert_eq!(retrieved, record);
}

#[test]
fn test_get_missing_fails() {
    let store = MemoryStore::with_seed().unwrap();
    let result = store.get(&RecordId::from("999"));
    assert!(matches!(result, Err(StoreError::NotFound(_))));
}

#[test]
fn test_every_record_reachable_from_index() {
    let store = MemoryStore::with_seed().unwrap();

    // Each record must be reachable through at least its own title terms
    for record in store.list(&RecordFilter::default()) {
        let terms = dermkb_domain::tokenize(&record.title);
        assert!(!terms.is_empty());

        let reachable = terms
            .iter()
            .any(|term| store.lookup(term).contains(&record.id));
        assert!(reachable, "record {} unreachable from index", record.id);
    }
}

#[test]
fn test_delete_removes_store_and_index_together() {
    let store = MemoryStore::with_seed().unwrap();
    store
        .put(qa(
            "doc",
            "Unique xanthoma observations",
            "Xanthoma lesions respond to lipid control.",
            "Xanthoma",
        ))
        .unwrap();

    assert_eq!(store.lookup("xanthoma"), vec![RecordId::from("doc")]);

    store.delete(&RecordId::from("doc")).unwrap();

    // No dangling index entries after deletion
    assert!(store.lookup("xanthoma").is_empty());
    assert!(matches!(
        store.get(&RecordId::from("doc")),
        Err(StoreError::NotFound(_))
    ));

    // Seeded records unaffected
    assert_eq!(store.len(), 3);
    assert!(!store.lookup("eczema").is_empty());
}

#[test]
fn test_list_insertion_order() {
    let store = MemoryStore::new();
    for i in 0..5 {
        store
            .put(qa(
                &format!("{}", i),
                &format!("question number {}", i),
                "answer",
                if i % 2 == 0 { "Acne" } else { "Rosacea" },
            ))
            .unwrap();
    }

    let all = store.list(&RecordFilter::default());
    let ids: Vec<String> = all.iter().map(|r| r.id.to_string()).collect();
    assert_eq!(ids, vec!["0", "1", "2", "3", "4"]);

    let rosacea = store.list(&RecordFilter::by_category("rosacea"));
    let ids: Vec<String> = rosacea.iter().map(|r| r.id.to_string()).collect();
    assert_eq!(ids, vec!["1", "3"]);
}

#[test]
fn test_concurrent_reads_during_lookup() {
    use std::sync::Arc;
    use std::thread;

    let store = Arc::new(MemoryStore::with_seed().unwrap());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for _ in 0..100 {
                    assert_eq!(store.lookup("psoriasis").len(), 1);
                    assert!(store.get(&RecordId::from("2")).is_ok());
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

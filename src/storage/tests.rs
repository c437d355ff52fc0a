//! Storage Module Tests
//!
//! Validates the document-collection mechanics every other subsystem leans
//! on.
//!
//! ## Test Scopes
//! - **Collection**: Id assignment, ordered retrieval, predicate queries.
//! - **Uniqueness**: The single-field guard used for user emails.
//! - **Batch insert**: Input-order results and all-or-nothing behavior.

#[cfg(test)]
mod tests {
    use crate::storage::memory::Collection;
    use std::collections::HashSet;

    // Test data structure
    #[derive(Debug, Clone, PartialEq)]
    struct TestDoc {
        label: String,
        group: u32,
    }

    fn doc(label: &str, group: u32) -> TestDoc {
        TestDoc {
            label: label.to_string(),
            group,
        }
    }

    // ============================================================
    // BASIC INSERT / GET
    // ============================================================

    #[test]
    fn test_insert_assigns_distinct_ids() {
        let collection = Collection::new("docs");

        let mut ids = HashSet::new();
        for i in 0..50 {
            let stored = collection.insert(doc(&format!("doc-{}", i), 0)).unwrap();
            ids.insert(stored.id);
        }

        assert_eq!(ids.len(), 50, "Every document should get its own id");
    }

    #[test]
    fn test_get_returns_stored_document() {
        let collection = Collection::new("docs");
        let stored = collection.insert(doc("alpha", 1)).unwrap();

        let fetched = collection.get(&stored.id).unwrap();

        assert_eq!(fetched.id, stored.id);
        assert_eq!(fetched.doc, stored.doc);
    }

    #[test]
    fn test_get_nonexistent_id() {
        let collection: Collection<TestDoc> = Collection::new("docs");
        assert!(collection.get("missing").is_none());
    }

    // ============================================================
    // ORDERED RETRIEVAL
    // ============================================================

    #[test]
    fn test_find_all_preserves_insertion_order() {
        let collection = Collection::new("docs");
        for label in ["first", "second", "third", "fourth"] {
            collection.insert(doc(label, 0)).unwrap();
        }

        let labels: Vec<String> = collection
            .find_all()
            .unwrap()
            .into_iter()
            .map(|stored| stored.doc.label)
            .collect();

        assert_eq!(labels, vec!["first", "second", "third", "fourth"]);
    }

    #[test]
    fn test_find_filters_by_predicate() {
        let collection = Collection::new("docs");
        collection.insert(doc("a", 1)).unwrap();
        collection.insert(doc("b", 2)).unwrap();
        collection.insert(doc("c", 1)).unwrap();

        let group_one = collection.find(|d| d.group == 1).unwrap();

        assert_eq!(group_one.len(), 2);
        assert_eq!(group_one[0].doc.label, "a");
        assert_eq!(group_one[1].doc.label, "c");
    }

    #[test]
    fn test_find_one_returns_first_match() {
        let collection = Collection::new("docs");
        collection.insert(doc("early", 7)).unwrap();
        collection.insert(doc("late", 7)).unwrap();

        let found = collection.find_one(|d| d.group == 7).unwrap().unwrap();
        assert_eq!(found.doc.label, "early");
    }

    #[test]
    fn test_find_one_no_match() {
        let collection: Collection<TestDoc> = Collection::new("docs");
        assert!(collection.find_one(|_| true).unwrap().is_none());
    }

    // ============================================================
    // UNIQUE INSERT
    // ============================================================

    #[test]
    fn test_insert_unique_rejects_duplicate_key() {
        let collection = Collection::new("docs");
        collection
            .insert_unique_by(doc("alice", 0), "label", |d| &d.label)
            .unwrap();

        let result = collection.insert_unique_by(doc("alice", 1), "label", |d| &d.label);

        assert!(result.is_err());
        assert_eq!(collection.count(), 1, "Rejected insert must not be stored");
    }

    #[test]
    fn test_insert_unique_allows_distinct_keys() {
        let collection = Collection::new("docs");
        collection
            .insert_unique_by(doc("alice", 0), "label", |d| &d.label)
            .unwrap();
        collection
            .insert_unique_by(doc("bob", 0), "label", |d| &d.label)
            .unwrap();

        assert_eq!(collection.count(), 2);
    }

    // ============================================================
    // BATCH INSERT
    // ============================================================

    #[test]
    fn test_insert_many_returns_input_order() {
        let collection = Collection::new("docs");

        let created = collection
            .insert_many(vec![doc("one", 0), doc("two", 0), doc("three", 0)])
            .unwrap();

        let labels: Vec<_> = created.iter().map(|s| s.doc.label.clone()).collect();
        assert_eq!(labels, vec!["one", "two", "three"]);

        // Every returned id resolves back to its document
        for stored in &created {
            assert_eq!(collection.get(&stored.id).unwrap().doc, stored.doc);
        }
    }

    #[test]
    fn test_insert_many_empty_batch() {
        let collection: Collection<TestDoc> = Collection::new("docs");

        let created = collection.insert_many(vec![]).unwrap();

        assert!(created.is_empty());
        assert_eq!(collection.count(), 0);
    }

    #[test]
    fn test_insert_many_appends_in_retrieval_order() {
        let collection = Collection::new("docs");
        collection.insert(doc("seed", 0)).unwrap();
        collection
            .insert_many(vec![doc("batch-a", 0), doc("batch-b", 0)])
            .unwrap();

        let labels: Vec<String> = collection
            .find_all()
            .unwrap()
            .into_iter()
            .map(|stored| stored.doc.label)
            .collect();

        assert_eq!(labels, vec!["seed", "batch-a", "batch-b"]);
    }
}

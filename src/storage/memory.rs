use crate::auth::types::User;
use crate::tasks::types::TaskRecord;

use dashmap::DashMap;
use std::sync::RwLock;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("duplicate value for unique field `{field}` in collection `{collection}`")]
    DuplicateKey {
        collection: &'static str,
        field: &'static str,
    },
}

/// A document together with its store-assigned identifier.
#[derive(Debug, Clone)]
pub struct Stored<V> {
    pub id: String,
    pub doc: V,
}

/// A named collection of documents.
///
/// Documents are held in a `DashMap` keyed by UUID ids. A separate insertion
/// index preserves the store's natural retrieval order; every write takes the
/// index lock, which also serializes batch inserts so they land atomically.
pub struct Collection<V> {
    name: &'static str,
    index: RwLock<Vec<String>>,
    documents: DashMap<String, V>,
}

impl<V> Collection<V>
where
    V: Clone + Send + Sync,
{
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            index: RwLock::new(Vec::new()),
            documents: DashMap::new(),
        }
    }

    pub fn insert(&self, doc: V) -> Result<Stored<V>, StoreError> {
        let mut index = self
            .index
            .write()
            .map_err(|_| StoreError::Unavailable(format!("collection `{}` poisoned", self.name)))?;

        let id = Uuid::new_v4().to_string();
        self.documents.insert(id.clone(), doc.clone());
        index.push(id.clone());

        Ok(Stored { id, doc })
    }

    /// Inserts a document unless another document already carries the same
    /// value for the named unique field.
    pub fn insert_unique_by<F>(
        &self,
        doc: V,
        field: &'static str,
        key: F,
    ) -> Result<Stored<V>, StoreError>
    where
        F: Fn(&V) -> &str,
    {
        let mut index = self
            .index
            .write()
            .map_err(|_| StoreError::Unavailable(format!("collection `{}` poisoned", self.name)))?;

        let wanted = key(&doc).to_string();
        let collision = index.iter().any(|id| {
            self.documents
                .get(id)
                .map(|existing| key(existing.value()) == wanted)
                .unwrap_or(false)
        });
        if collision {
            return Err(StoreError::DuplicateKey {
                collection: self.name,
                field,
            });
        }

        let id = Uuid::new_v4().to_string();
        self.documents.insert(id.clone(), doc.clone());
        index.push(id.clone());

        Ok(Stored { id, doc })
    }

    /// Writes the whole batch under one index lock. Either every document is
    /// stored and returned with its id, in input order, or none is.
    pub fn insert_many(&self, docs: Vec<V>) -> Result<Vec<Stored<V>>, StoreError> {
        let mut index = self
            .index
            .write()
            .map_err(|_| StoreError::Unavailable(format!("collection `{}` poisoned", self.name)))?;

        let mut created = Vec::with_capacity(docs.len());
        for doc in docs {
            let id = Uuid::new_v4().to_string();
            self.documents.insert(id.clone(), doc.clone());
            index.push(id.clone());
            created.push(Stored { id, doc });
        }

        Ok(created)
    }

    pub fn get(&self, id: &str) -> Option<Stored<V>> {
        self.documents.get(id).map(|entry| Stored {
            id: id.to_string(),
            doc: entry.value().clone(),
        })
    }

    /// All documents in natural retrieval order.
    pub fn find_all(&self) -> Result<Vec<Stored<V>>, StoreError> {
        self.find(|_| true)
    }

    /// Documents matching the predicate, in natural retrieval order.
    pub fn find<P>(&self, predicate: P) -> Result<Vec<Stored<V>>, StoreError>
    where
        P: Fn(&V) -> bool,
    {
        let index = self
            .index
            .read()
            .map_err(|_| StoreError::Unavailable(format!("collection `{}` poisoned", self.name)))?;

        let mut found = Vec::new();
        for id in index.iter() {
            if let Some(entry) = self.documents.get(id)
                && predicate(entry.value())
            {
                found.push(Stored {
                    id: id.clone(),
                    doc: entry.value().clone(),
                });
            }
        }

        Ok(found)
    }

    pub fn find_one<P>(&self, predicate: P) -> Result<Option<Stored<V>>, StoreError>
    where
        P: Fn(&V) -> bool,
    {
        Ok(self.find(predicate)?.into_iter().next())
    }

    pub fn count(&self) -> usize {
        self.documents.len()
    }
}

/// The application's document store: one collection per entity kind.
///
/// Shared across request handlers as `Arc<Store>` via an axum `Extension`.
pub struct Store {
    users: Collection<User>,
    tasks: Collection<TaskRecord>,
}

impl Store {
    pub fn new() -> Self {
        Self {
            users: Collection::new("users"),
            tasks: Collection::new("tasks"),
        }
    }

    pub fn users(&self) -> &Collection<User> {
        &self.users
    }

    pub fn tasks(&self) -> &Collection<TaskRecord> {
        &self.tasks
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

use std::{collections::HashMap, sync::Arc};

use parking_lot::RwLock;
use uuid::Uuid;

/// A value that can live in a [`Collection`], addressed by its generated id.
pub trait Record: Clone + Send + Sync + 'static {
    fn id(&self) -> Uuid;
}

#[derive(Debug)]
struct Rows<T> {
    ordered: Vec<T>,
    positions: HashMap<Uuid, usize>,
}

/// Append-only, insertion-ordered in-memory table.
///
/// Every read or write takes the lock once and never awaits while holding it,
/// so a single operation is never observed half-done by another caller.
#[derive(Debug)]
pub struct Collection<T: Record> {
    rows: Arc<RwLock<Rows<T>>>,
}

impl<T: Record> Clone for Collection<T> {
    fn clone(&self) -> Self {
        Collection { rows: Arc::clone(&self.rows) }
    }
}

impl<T: Record> Default for Collection<T> {
    fn default() -> Self {
        Collection {
            rows: Arc::new(RwLock::new(Rows {
                ordered: Vec::new(),
                positions: HashMap::new(),
            })),
        }
    }
}

impl<T: Record> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws an id not yet present in the collection, builds the record around
    /// it and appends it.
    pub fn insert_with<F>(&self, build: F) -> T
    where
        F: FnOnce(Uuid) -> T,
    {
        let mut rows = self.rows.write();
        let id = fresh_id(&rows.positions);
        let record = build(id);
        debug_assert_eq!(record.id(), id);

        let position = rows.ordered.len();
        rows.positions.insert(id, position);
        rows.ordered.push(record.clone());
        record
    }

    /// Like [`Collection::insert_with`], but refuses to insert when any stored
    /// record matches `conflicts`. Check and insert happen under one lock.
    pub fn insert_unless<P, F>(&self, conflicts: P, build: F) -> Option<T>
    where
        P: Fn(&T) -> bool,
        F: FnOnce(Uuid) -> T,
    {
        let mut rows = self.rows.write();
        if rows.ordered.iter().any(|record| conflicts(record)) {
            return None;
        }

        let id = fresh_id(&rows.positions);
        let record = build(id);
        debug_assert_eq!(record.id(), id);

        let position = rows.ordered.len();
        rows.positions.insert(id, position);
        rows.ordered.push(record.clone());
        Some(record)
    }

    pub fn get(&self, id: &Uuid) -> Option<T> {
        let rows = self.rows.read();
        rows.positions
            .get(id)
            .and_then(|&position| rows.ordered.get(position))
            .cloned()
    }

    pub fn find<P>(&self, predicate: P) -> Option<T>
    where
        P: Fn(&T) -> bool,
    {
        self.rows.read().ordered.iter().find(|record| predicate(record)).cloned()
    }

    pub fn filter<P>(&self, predicate: P) -> Vec<T>
    where
        P: Fn(&T) -> bool,
    {
        self.rows
            .read()
            .ordered
            .iter()
            .filter(|record| predicate(record))
            .cloned()
            .collect()
    }

    pub fn all(&self) -> Vec<T> {
        self.rows.read().ordered.clone()
    }

    pub fn len(&self) -> usize {
        self.rows.read().ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn fresh_id(taken: &HashMap<Uuid, usize>) -> Uuid {
    loop {
        let id = Uuid::new_v4();
        if !taken.contains_key(&id) {
            return id;
        }
    }
}

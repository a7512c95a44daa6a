/// In-memory holder for one fetched dataset.
///
/// "Not loaded yet" and "loaded, zero records" are different states: the
/// first is `None`, the second `Some(vec![])`. Both are valid for the whole
/// session, a fetch may never complete.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionStore<T> {
    rows: Option<Vec<T>>,
}

impl<T> Default for CollectionStore<T> {
    fn default() -> Self {
        Self { rows: None }
    }
}

impl<T> CollectionStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the result of a completed fetch
    pub fn populate(&mut self, rows: Vec<T>) {
        self.rows = Some(rows);
    }

    pub fn is_loaded(&self) -> bool {
        self.rows.is_some()
    }

    /// Current records, empty while not loaded
    pub fn rows(&self) -> &[T] {
        self.rows.as_deref().unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.rows().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows().is_empty()
    }

    /// Mutate the first record matching `predicate` in place.
    ///
    /// Returns `false` when nothing matched; the store is then untouched.
    pub fn update_first<P, F>(&mut self, predicate: P, mutate: F) -> bool
    where
        P: Fn(&T) -> bool,
        F: FnOnce(&mut T),
    {
        let Some(rows) = self.rows.as_mut() else {
            return false;
        };
        match rows.iter_mut().find(|row| predicate(row)) {
            Some(row) => {
                mutate(row);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unloaded_and_empty_are_distinct() {
        let unloaded: CollectionStore<u32> = CollectionStore::new();
        let mut empty: CollectionStore<u32> = CollectionStore::new();
        empty.populate(Vec::new());

        assert!(!unloaded.is_loaded());
        assert!(empty.is_loaded());
        assert!(unloaded.rows().is_empty());
        assert!(empty.rows().is_empty());
        assert_ne!(unloaded, empty);
    }

    #[test]
    fn test_update_first_touches_one_row() {
        let mut store = CollectionStore::new();
        store.populate(vec![(1, 'a'), (2, 'b'), (2, 'c')]);

        assert!(store.update_first(|r| r.0 == 2, |r| r.1 = 'z'));
        assert_eq!(store.rows(), &[(1, 'a'), (2, 'z'), (2, 'c')]);
    }

    #[test]
    fn test_update_first_miss_is_noop() {
        let mut store = CollectionStore::new();
        store.populate(vec![1, 2, 3]);

        assert!(!store.update_first(|r| *r == 99, |r| *r = 0));
        assert_eq!(store.rows(), &[1, 2, 3]);

        let mut unloaded: CollectionStore<i32> = CollectionStore::new();
        assert!(!unloaded.update_first(|_| true, |r| *r = 0));
        assert!(!unloaded.is_loaded());
    }
}

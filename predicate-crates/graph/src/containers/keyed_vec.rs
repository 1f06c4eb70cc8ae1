use std::marker::PhantomData;

/// Append-only storage for elements of type `Value` which can only be indexed by `Key`.
///
/// Elements are never removed, so a key handed out by [`KeyedVec::push`] stays valid for the
/// lifetime of the container.
#[derive(Debug, Hash, PartialEq, Eq)]
pub(crate) struct KeyedVec<Key, Value> {
    key: PhantomData<Key>,
    elements: Vec<Value>,
}

impl<Key, Value: Clone> Clone for KeyedVec<Key, Value> {
    fn clone(&self) -> Self {
        Self {
            key: PhantomData,
            elements: self.elements.clone(),
        }
    }
}

impl<Key, Value> Default for KeyedVec<Key, Value> {
    fn default() -> Self {
        Self {
            key: PhantomData,
            elements: Vec::default(),
        }
    }
}

impl<Key: StorageKey, Value> KeyedVec<Key, Value> {
    pub(crate) fn len(&self) -> usize {
        self.elements.len()
    }

    /// Add a new value to the vector.
    ///
    /// Returns the key for the inserted value.
    pub(crate) fn push(&mut self, value: Value) -> Key {
        self.elements.push(value);

        Key::create_from_index(self.elements.len() - 1)
    }

    pub(crate) fn get(&self, key: Key) -> Option<&Value> {
        self.elements.get(key.index())
    }

    /// Iterate over the keys and values in insertion order.
    pub(crate) fn iter_with_keys(&self) -> impl Iterator<Item = (Key, &'_ Value)> {
        self.elements
            .iter()
            .enumerate()
            .map(|(idx, value)| (Key::create_from_index(idx), value))
    }
}

/// A simple trait which requires that the structures implementing this trait can generate an index.
pub(crate) trait StorageKey: Clone {
    fn index(&self) -> usize;

    fn create_from_index(index: usize) -> Self;
}

impl StorageKey for usize {
    fn index(&self) -> usize {
        *self
    }

    fn create_from_index(index: usize) -> Self {
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_follow_insertion_order() {
        let mut keyed_vec: KeyedVec<usize, &str> = KeyedVec::default();

        let first = keyed_vec.push("first");
        let second = keyed_vec.push("second");

        assert_eq!((0, 1), (first, second));
        assert_eq!(2, keyed_vec.len());
        assert_eq!(Some(&"second"), keyed_vec.get(second));
        assert_eq!(vec![(0, &"first"), (1, &"second")], keyed_vec.iter_with_keys().collect::<Vec<_>>());
    }

    #[test]
    fn get_out_of_bounds() {
        let keyed_vec: KeyedVec<usize, u8> = KeyedVec::default();

        assert_eq!(0, keyed_vec.len());
        assert_eq!(None, keyed_vec.get(3));
    }
}

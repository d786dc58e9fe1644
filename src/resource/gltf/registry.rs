use std::collections::HashMap;

/// Append-only collection of entities addressed by the user-chosen id they
/// carry in the document.
///
/// An id gets its index on first sight, whether that is a reference from
/// another entity or the entity's own definition. Indices are dense and never
/// move, so they stay valid for the lifetime of the registry.
#[derive(Debug, Clone)]
pub struct Registry<T> {
    entries: Vec<T>,
    ids: Vec<String>,
    index: HashMap<String, usize>,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self {
            entries: vec![],
            ids: vec![],
            index: HashMap::new(),
        }
    }
}

impl<T: Default> Registry<T> {
    /// Returns the index for `id`, appending a placeholder entity if the id
    /// has not been seen before.
    pub fn intern(&mut self, id: &str) -> usize {
        if let Some(&index) = self.index.get(id) {
            return index;
        }

        let index = self.entries.len();
        self.entries.push(T::default());
        self.ids.push(id.to_string());
        self.index.insert(id.to_string(), index);

        index
    }
}

impl<T> Registry<T> {
    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.entries.get(index)
    }

    pub fn get_by_id(&self, id: &str) -> Option<&T> {
        self.position(id).and_then(|index| self.get(index))
    }

    /// User-chosen id of the entity at `index`.
    pub fn id(&self, index: usize) -> &str {
        &self.ids[index]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &str, &T)> {
        self.entries
            .iter()
            .zip(self.ids.iter())
            .enumerate()
            .map(|(index, (entry, id))| (index, id.as_str(), entry))
    }
}

impl<T> std::ops::Index<usize> for Registry<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.entries[index]
    }
}

impl<T> std::ops::IndexMut<usize> for Registry<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.entries[index]
    }
}

use std::collections::HashMap;
use std::rc::Rc;

use crate::model::Author;

/// Deduplicating author store.
///
/// At most one [`Author`] per distinct case-insensitive name; first-seen
/// order is preserved for listing. The registry is the sole owner of author
/// identities, materials hold shared `Rc` handles.
#[derive(Debug, Default)]
pub struct AuthorRegistry {
    /// Lookup index keyed by lowercased name.
    by_name: HashMap<String, Rc<Author>>,
    /// First-seen insertion order.
    ordered: Vec<Rc<Author>>,
}

impl AuthorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Find-or-create by case-insensitive name. Always succeeds; on a miss
    /// the registry grows by one entry and the new instance keeps the casing
    /// of the first reference.
    pub fn resolve(&mut self, name: &str) -> Rc<Author> {
        let key = name.to_lowercase();
        if let Some(existing) = self.by_name.get(&key) {
            return Rc::clone(existing);
        }
        let author = Rc::new(Author::new(name));
        self.by_name.insert(key, Rc::clone(&author));
        self.ordered.push(Rc::clone(&author));
        author
    }

    /// Authors in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &Rc<Author>> {
        self.ordered.iter()
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}

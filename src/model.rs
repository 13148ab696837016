/// A named group of builtins, in source order.
///
/// `builtins` preserves insertion order and duplicates exactly as found in
/// the scanned file; no uniqueness is enforced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub label: String,
    pub builtins: Vec<String>,
}

impl Category {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            builtins: Vec::new(),
        }
    }
}

/// The ordered collection of categories produced by scanning one file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pub categories: Vec<Category>,
}

impl Catalog {
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Open a new category at the end of the catalog and make it current.
    pub fn open_category(&mut self, label: impl Into<String>) {
        self.categories.push(Category::new(label));
    }

    /// Append a builtin name to the current (last-opened) category.
    ///
    /// If no category has been opened yet, an "Uncategorized" category is
    /// created first, so builtins registered before the first category
    /// comment still appear in the output, ahead of any real category.
    pub fn push_builtin(&mut self, name: impl Into<String>) {
        if self.categories.is_empty() {
            self.open_category("Uncategorized");
        }
        if let Some(current) = self.categories.last_mut() {
            current.builtins.push(name.into());
        }
    }
}

//! High-level research over any relationship browser.

use super::relationships::RelationshipBrowser;

/// Answers questions about families without knowing how they are stored.
///
/// # Example
///
/// ```rust
/// use solid::dependency_inversion::{Person, Relationships, Research};
///
/// let parent = Person::new("John");
/// let mut relationships = Relationships::new();
/// relationships.add_parent_and_child(&parent, &Person::new("Chris"));
/// relationships.add_parent_and_child(&parent, &Person::new("Matt"));
///
/// let research = Research::new(relationships);
/// assert_eq!(
///     research.findings("John"),
///     vec!["John has a child called Chris", "John has a child called Matt"]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Research<B> {
    browser: B,
}

impl<B: RelationshipBrowser> Research<B> {
    pub fn new(browser: B) -> Self {
        Self { browser }
    }

    /// One sentence per child of `name`, in recorded order.
    pub fn findings(&self, name: &str) -> Vec<String> {
        self.browser
            .find_all_children_of(name)
            .into_iter()
            .map(|child| format!("{} has a child called {}", name, child.name))
            .collect()
    }
}

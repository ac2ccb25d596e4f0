//! Low-level storage of family relationships.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
}

impl Person {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Relationship {
    Parent,
    Child,
    Sibling,
}

/// Abstraction the high-level module depends on.
pub trait RelationshipBrowser {
    /// Everyone recorded as a child of the person called `name`.
    fn find_all_children_of(&self, name: &str) -> Vec<&Person>;
}

/// Relationship triples, `(subject, relationship, object)`.
#[derive(Debug, Clone, Default)]
pub struct Relationships {
    relations: Vec<(Person, Relationship, Person)>,
}

impl Relationships {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a parent/child pair in both directions.
    pub fn add_parent_and_child(&mut self, parent: &Person, child: &Person) {
        self.relations
            .push((parent.clone(), Relationship::Parent, child.clone()));
        self.relations
            .push((child.clone(), Relationship::Child, parent.clone()));
        tracing::debug!("Recorded {} as parent of {}", parent.name, child.name);
    }

    /// Record two people as siblings of each other.
    pub fn add_siblings(&mut self, first: &Person, second: &Person) {
        self.relations
            .push((first.clone(), Relationship::Sibling, second.clone()));
        self.relations
            .push((second.clone(), Relationship::Sibling, first.clone()));
    }

    pub fn relations(&self) -> &[(Person, Relationship, Person)] {
        &self.relations
    }
}

impl RelationshipBrowser for Relationships {
    fn find_all_children_of(&self, name: &str) -> Vec<&Person> {
        self.relations
            .iter()
            .filter(|(subject, relationship, _)| {
                subject.name == name && *relationship == Relationship::Parent
            })
            .map(|(_, _, child)| child)
            .collect()
    }
}

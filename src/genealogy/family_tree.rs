//! The generated family tree.
//!
//! Owns every person in an arena. Relationships between people are stored
//! as `PersonId`s, so parent, child and partner links never own each other.

use std::collections::HashMap;

use crate::genealogy::{Person, PersonId};

/// All people produced by one generation run, in insertion order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FamilyTree {
    founders: Vec<PersonId>,
    people: Vec<Person>,
    index: HashMap<PersonId, usize>,
}

impl FamilyTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add_founder(&mut self, person: Person) {
        self.founders.push(person.id);
        self.add_person(person);
    }

    pub(crate) fn add_person(&mut self, person: Person) {
        self.index.insert(person.id, self.people.len());
        self.people.push(person);
    }

    pub fn person(&self, id: PersonId) -> Option<&Person> {
        self.index.get(&id).map(|&i| &self.people[i])
    }

    pub(crate) fn person_mut(&mut self, id: PersonId) -> Option<&mut Person> {
        match self.index.get(&id) {
            Some(&i) => self.people.get_mut(i),
            None => None,
        }
    }

    /// Every person, in the order they were added.
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn founders(&self) -> Vec<&Person> {
        self.founders.iter().filter_map(|&id| self.person(id)).collect()
    }

    pub fn founder_ids(&self) -> &[PersonId] {
        &self.founders
    }

    pub fn total_count(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// The partner of `id`, if any.
    pub fn partner_of(&self, id: PersonId) -> Option<&Person> {
        self.person(id)?.partner.and_then(|p| self.person(p))
    }

    /// Real parents of `id`. A placeholder co-parent has no entry.
    pub fn parents_of(&self, id: PersonId) -> Vec<&Person> {
        match self.person(id) {
            Some(child) => child.parent_ids().filter_map(|p| self.person(p)).collect(),
            None => Vec::new(),
        }
    }

    pub fn children_of(&self, id: PersonId) -> Vec<&Person> {
        match self.person(id) {
            Some(parent) => parent.children.iter().filter_map(|&c| self.person(c)).collect(),
            None => Vec::new(),
        }
    }

    /// Link two people as partners of each other.
    pub(crate) fn link_partners(&mut self, a: PersonId, b: PersonId) {
        if self.person(a).is_none() || self.person(b).is_none() {
            return;
        }
        if let Some(p) = self.person_mut(a) {
            p.partner = Some(b);
        }
        if let Some(p) = self.person_mut(b) {
            p.partner = Some(a);
        }
    }

    /// Append `child` to the children of `parent`.
    pub(crate) fn add_child(&mut self, parent: PersonId, child: PersonId) {
        if let Some(p) = self.person_mut(parent) {
            p.add_child(child);
        }
    }
}

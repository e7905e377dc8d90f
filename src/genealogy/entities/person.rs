//! A single simulated person.

use std::fmt;
use std::str::FromStr;

use crate::genealogy::{Decade, PersonId};

/// Gender as recorded in the demographic tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn all() -> [Gender; 2] {
        [Gender::Male, Gender::Female]
    }

    pub fn opposite(&self) -> Gender {
        match self {
            Gender::Male => Gender::Female,
            Gender::Female => Gender::Male,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            other => Err(format!("unknown gender {:?}", other)),
        }
    }
}

/// A person in the family tree.
///
/// Attributes are fixed by the factory. Only the partner link and the
/// children list change afterwards, and only from inside the crate.
#[derive(Clone, Debug, PartialEq)]
pub struct Person {
    pub id: PersonId,
    pub first_name: String,
    pub last_name: String,
    pub gender: Gender,
    pub year_born: i32,
    /// `None` means still alive at the simulation horizon.
    pub year_died: Option<i32>,
    pub generation: u32,

    // Family
    pub parents: (Option<PersonId>, Option<PersonId>),
    pub partner: Option<PersonId>,
    pub children: Vec<PersonId>,
}

impl Person {
    pub fn new(
        id: PersonId,
        first_name: String,
        last_name: String,
        gender: Gender,
        year_born: i32,
        year_died: Option<i32>,
        generation: u32,
    ) -> Self {
        Self {
            id,
            first_name,
            last_name,
            gender,
            year_born,
            year_died,
            generation,
            parents: (None, None),
            partner: None,
            children: Vec::new(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn birth_decade(&self) -> Decade {
        Decade::of_year(self.year_born)
    }

    /// Founders and partners who married into the tree have no parents.
    pub fn has_parents(&self) -> bool {
        self.parents.0.is_some() || self.parents.1.is_some()
    }

    /// Alive during `year`: born on or before it and not yet dead.
    pub fn is_alive(&self, year: i32) -> bool {
        if year < self.year_born {
            return false;
        }
        match self.year_died {
            Some(died) => year < died,
            None => true,
        }
    }

    /// Age in years at a given year.
    pub fn age_at(&self, year: i32) -> i32 {
        year - self.year_born
    }

    /// Whether a child born in `year` fits this person's parenting window.
    pub fn can_have_children(&self, year: i32, min_age: i32, max_age: i32) -> bool {
        let age = self.age_at(year);
        (min_age..=max_age).contains(&age) && self.is_alive(year)
    }

    /// Record a child. Children are only ever appended.
    pub(crate) fn add_child(&mut self, child: PersonId) {
        if !self.children.contains(&child) {
            self.children.push(child);
        }
    }

    /// Both real parent ids, skipping any placeholder slot.
    pub fn parent_ids(&self) -> impl Iterator<Item = PersonId> {
        [self.parents.0, self.parents.1].into_iter().flatten()
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Person(id={}, name={}, born={}, gen={})",
            self.id.0,
            self.full_name(),
            self.year_born,
            self.generation
        )
    }
}

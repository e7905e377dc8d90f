//! Read-only queries over a generated family tree.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use crate::genealogy::{Decade, FamilyTree};

/// Total number of people in the tree.
pub fn total_people(tree: &FamilyTree) -> usize {
    tree.total_count()
}

/// Number of people born in each decade, earliest decade first.
pub fn people_by_decade(tree: &FamilyTree) -> BTreeMap<Decade, usize> {
    let mut counts = BTreeMap::new();
    for person in tree.people() {
        *counts.entry(person.birth_decade()).or_insert(0) += 1;
    }
    counts
}

/// Full names held by more than one person, sorted.
pub fn duplicate_names(tree: &FamilyTree) -> Vec<String> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for person in tree.people() {
        *counts.entry(person.full_name()).or_insert(0) += 1;
    }
    let mut duplicates: Vec<String> = counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(name, _)| name)
        .collect();
    duplicates.sort();
    duplicates
}

/// Headline numbers for one generated tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeSummary {
    pub total_people: usize,
    pub founders_partnered: bool,
    pub generations: u32,
    pub partnered_people: usize,
    /// People with no determined death year.
    pub alive_at_horizon: usize,
}

impl fmt::Display for TreeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Family Tree Summary ===")?;
        writeln!(f, "People:             {}", self.total_people)?;
        writeln!(f, "Generations:        {}", self.generations)?;
        writeln!(f, "Founders partnered: {}", if self.founders_partnered { "yes" } else { "no" })?;
        writeln!(f, "Partnered people:   {}", self.partnered_people)?;
        write!(f, "Alive at horizon:   {}", self.alive_at_horizon)
    }
}

pub fn summary(tree: &FamilyTree) -> TreeSummary {
    let founders_partnered = match tree.founder_ids() {
        [a, b] => tree.person(*a).and_then(|p| p.partner) == Some(*b),
        _ => false,
    };
    let generations = tree.people().iter().map(|p| p.generation + 1).max().unwrap_or(0);

    TreeSummary {
        total_people: tree.total_count(),
        founders_partnered,
        generations,
        partnered_people: tree.people().iter().filter(|p| p.partner.is_some()).count(),
        alive_at_horizon: tree.people().iter().filter(|p| p.year_died.is_none()).count(),
    }
}

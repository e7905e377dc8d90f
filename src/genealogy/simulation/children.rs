//! Child planning: how many children a person has and when they are born.

use rand::Rng;

use crate::genealogy::config::GenerationConfig;
use crate::genealogy::Person;

/// Inclusive range of years in which children may be born.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BirthWindow {
    pub start: i32,
    pub end: i32,
}

impl BirthWindow {
    pub fn len(&self) -> i32 {
        self.end - self.start + 1
    }

    pub fn contains(&self, year: i32) -> bool {
        (self.start..=self.end).contains(&year)
    }
}

/// Number of children for a person whose birth decade has `birth_rate`.
///
/// The rate is perturbed, lowered by the single-parent penalty when there is
/// no partner, rounded, and floored at zero.
pub fn child_count(
    birth_rate: f64,
    partnered: bool,
    config: &GenerationConfig,
    rng: &mut impl Rng,
) -> usize {
    let mut expected = birth_rate + super::perturbation(rng, config.child_count_spread);
    if !partnered {
        expected -= config.single_parent_penalty;
    }
    let rounded = expected.round();
    if rounded.is_finite() && rounded > 0.0 {
        rounded as usize
    } else {
        0
    }
}

/// Years in which every given parent is within the parenting age range,
/// still alive, and the child is not past the horizon.
///
/// `None` when no such year exists.
pub fn birth_window(parents: &[&Person], config: &GenerationConfig) -> Option<BirthWindow> {
    let start = parents.iter().map(|p| p.year_born + config.min_parent_age).max()?;
    let end = parents
        .iter()
        .flat_map(|p| [Some(p.year_born + config.max_parent_age), p.year_died.map(|d| d - 1)])
        .flatten()
        .chain(std::iter::once(config.horizon_year))
        .min()?;

    if start > end {
        return None;
    }
    Some(BirthWindow { start, end })
}

/// Spread `count` birth years evenly over the window, ends included.
pub fn distribute_birth_years(window: BirthWindow, count: usize) -> Vec<i32> {
    match count {
        0 => Vec::new(),
        1 => vec![(window.start + window.end).div_euclid(2)],
        n => {
            let interval = (window.end - window.start) as f64 / (n - 1) as f64;
            (0..n)
                .map(|i| {
                    let year = (window.start as f64 + i as f64 * interval).floor() as i32;
                    // Rounding must never push a year past the window
                    year.min(window.end)
                })
                .collect()
        }
    }
}

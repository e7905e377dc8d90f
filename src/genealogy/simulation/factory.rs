//! Person factory.
//!
//! Synthesizes fully-attributed people for the three situations the engine
//! needs: founders, children, and partners. Every attribute is drawn from
//! the demographic tables for the person's birth decade.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::genealogy::config::GenerationConfig;
use crate::genealogy::data::DemographicData;
use crate::genealogy::{Decade, Gender, IdGenerator, Person, PersonId};

/// Name used when the tables have no candidates.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Stand-in second parent for a child of a single parent.
///
/// Only its birth year is ever consulted. It is never added to the tree and
/// never receives an id.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaceholderParent {
    pub gender: Gender,
    pub year_born: i32,
}

impl PlaceholderParent {
    /// Opposite-gender placeholder old enough to parent a child born in `child_year`.
    pub fn sample(
        parent: &Person,
        child_year: i32,
        config: &GenerationConfig,
        rng: &mut impl Rng,
    ) -> Option<Self> {
        let earliest = child_year - config.max_parent_age;
        let latest = child_year - config.min_parent_age;
        if earliest > latest {
            return None;
        }
        Some(Self {
            gender: parent.gender.opposite(),
            year_born: rng.gen_range(earliest..=latest),
        })
    }
}

/// The second parent passed to `PersonFactory::create_child`.
#[derive(Clone, Copy, Debug)]
pub enum CoParent<'a> {
    Partner(&'a Person),
    Placeholder(PlaceholderParent),
}

impl CoParent<'_> {
    /// Tree id of a real partner; `None` for a placeholder.
    pub fn id(&self) -> Option<PersonId> {
        match self {
            CoParent::Partner(p) => Some(p.id),
            CoParent::Placeholder(_) => None,
        }
    }

    pub fn year_born(&self) -> i32 {
        match self {
            CoParent::Partner(p) => p.year_born,
            CoParent::Placeholder(ph) => ph.year_born,
        }
    }
}

/// Creates people and hands out their ids.
pub struct PersonFactory<'a> {
    data: &'a DemographicData,
    config: &'a GenerationConfig,
    ids: IdGenerator,
}

impl<'a> PersonFactory<'a> {
    pub fn new(data: &'a DemographicData, config: &'a GenerationConfig) -> Self {
        Self {
            data,
            config,
            ids: IdGenerator::new(),
        }
    }

    /// A founder born in the epoch year.
    pub fn create_founder(&mut self, rng: &mut impl Rng) -> Person {
        let year_born = self.config.epoch_year;
        let decade = Decade::of_year(year_born);

        let gender = self.select_gender(decade, rng);
        let first_name = self.select_first_name(decade, gender, rng);
        let last_name = self.select_last_name(decade, rng);
        let year_died = self.death_year(year_born, rng);

        Person::new(self.ids.next_person(), first_name, last_name, gender, year_born, year_died, 0)
    }

    /// A child of `parent1` and `co_parent` born in `year_born`.
    ///
    /// The surname always comes from `parent1`.
    pub fn create_child(
        &mut self,
        parent1: &Person,
        co_parent: &CoParent<'_>,
        year_born: i32,
        rng: &mut impl Rng,
    ) -> Person {
        let decade = Decade::of_year(year_born);

        let gender = self.select_gender(decade, rng);
        let first_name = self.select_first_name(decade, gender, rng);
        let last_name = parent1.last_name.clone();
        let year_died = self.death_year(year_born, rng);

        let mut child = Person::new(
            self.ids.next_person(),
            first_name,
            last_name,
            gender,
            year_born,
            year_died,
            parent1.generation + 1,
        );
        child.parents = (Some(parent1.id), co_parent.id());
        child
    }

    /// A partner for `person`, born within the partner age spread of them.
    pub fn create_partner(&mut self, person: &Person, rng: &mut impl Rng) -> Person {
        let offset = super::year_offset(rng, self.config.partner_age_spread);
        let year_born = (person.year_born + offset).min(self.config.horizon_year);
        let decade = Decade::of_year(year_born);

        let gender = self.select_gender(decade, rng);
        let first_name = self.select_first_name(decade, gender, rng);
        let last_name = self.select_last_name(decade, rng);
        let year_died = self.death_year(year_born, rng);

        Person::new(
            self.ids.next_person(),
            first_name,
            last_name,
            gender,
            year_born,
            year_died,
            person.generation,
        )
    }

    fn select_gender(&self, decade: Decade, rng: &mut impl Rng) -> Gender {
        let split = self.data.gender_probabilities(decade);
        let genders = Gender::all();
        match genders[..].choose_weighted(rng, |g| split.weight(*g)) {
            Ok(gender) => *gender,
            Err(e) => {
                log::warn!("Unusable gender weights for {}: {}; using an even split", decade, e);
                if rng.gen_bool(0.5) { Gender::Male } else { Gender::Female }
            }
        }
    }

    fn select_first_name(&self, decade: Decade, gender: Gender, rng: &mut impl Rng) -> String {
        let candidates = self.data.first_names(decade, gender);
        pick_name(candidates, rng).unwrap_or_else(|| {
            log::warn!("No {} first names for {}", gender, decade);
            UNKNOWN_NAME.to_string()
        })
    }

    fn select_last_name(&self, decade: Decade, rng: &mut impl Rng) -> String {
        let candidates = self.data.last_names(decade);
        pick_name(&candidates, rng).unwrap_or_else(|| {
            log::warn!("No last names for {}", decade);
            UNKNOWN_NAME.to_string()
        })
    }

    /// Birth year plus perturbed life expectancy, truncated. Past the horizon
    /// the death year stays open.
    fn death_year(&self, year_born: i32, rng: &mut impl Rng) -> Option<i32> {
        let expectancy = self.data.life_expectancy(year_born);
        let variation = super::perturbation(rng, self.config.death_year_spread);
        let year_died = (year_born as f64 + expectancy + variation) as i32;

        if year_died > self.config.horizon_year {
            return None;
        }
        Some(year_died.max(year_born + 1))
    }
}

/// Weighted choice over (name, weight) pairs. `None` if nothing is pickable.
fn pick_name(candidates: &[(String, f64)], rng: &mut impl Rng) -> Option<String> {
    candidates
        .choose_weighted(rng, |(_, weight)| *weight)
        .ok()
        .map(|(name, _)| name.clone())
}

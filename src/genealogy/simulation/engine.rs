//! Family tree generation engine.
//!
//! Creates the two founders, decides whether they partner, then expands the
//! tree breadth-first: each dequeued person may have children, each child
//! may find a partner, and every child joins the queue. Expansion stops on
//! its own once every lineage runs out of valid birth years.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::genealogy::config::GenerationConfig;
use crate::genealogy::data::DemographicData;
use crate::genealogy::family_tree::FamilyTree;
use crate::genealogy::{Decade, Person, PersonId};

use super::children::{birth_window, child_count, distribute_birth_years};
use super::factory::{CoParent, PersonFactory, PlaceholderParent};

/// The family tree generation engine.
///
/// One RNG stream feeds every draw, so a seed reproduces the same tree.
pub struct GenerationEngine {
    pub rng: ChaCha8Rng,
    seed: u64,
}

impl GenerationEngine {
    /// Create a new engine with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Run the complete generation.
    pub fn generate(&mut self, data: &DemographicData, config: &GenerationConfig) -> FamilyTree {
        log::info!(
            "Generating family tree (seed {}, {} to {})",
            self.seed, config.epoch_year, config.horizon_year
        );

        let mut factory = PersonFactory::new(data, config);
        let mut tree = FamilyTree::new();

        let founder1 = factory.create_founder(&mut self.rng);
        let founder2 = factory.create_founder(&mut self.rng);
        let (id1, id2) = (founder1.id, founder2.id);
        tree.add_founder(founder1);
        tree.add_founder(founder2);

        let marriage_rate = data.marriage_rate(Decade::of_year(config.epoch_year));
        if self.rng.gen::<f64>() < marriage_rate {
            tree.link_partners(id1, id2);
            log::debug!("Founders {} and {} are partners", id1, id2);
        }

        let mut queue: VecDeque<PersonId> = VecDeque::from([id1, id2]);
        let mut deepest_generation = 0;

        while let Some(id) = queue.pop_front() {
            let Some(person) = tree.person(id) else { continue };

            // A partner already given children through the other half of the couple
            if !person.children.is_empty() {
                continue;
            }

            if person.generation > deepest_generation {
                deepest_generation = person.generation;
                log::debug!(
                    "Reached generation {} ({} people, {} queued)",
                    deepest_generation,
                    tree.total_count(),
                    queue.len() + 1,
                );
            }

            let partner = person.partner.and_then(|p| tree.person(p));
            let partner_id = partner.map(|p| p.id);
            let children = self.spawn_children(&mut factory, person, partner, data, config);

            for child in children {
                let child_id = child.id;
                let partner = if self.rng.gen::<f64>() < data.marriage_rate(child.birth_decade()) {
                    Some(factory.create_partner(&child, &mut self.rng))
                } else {
                    None
                };

                tree.add_person(child);
                tree.add_child(id, child_id);
                if let Some(p) = partner_id {
                    tree.add_child(p, child_id);
                }

                if let Some(child_partner) = partner {
                    let child_partner_id = child_partner.id;
                    tree.add_person(child_partner);
                    tree.link_partners(child_id, child_partner_id);
                }

                queue.push_back(child_id);
            }
        }

        log::info!(
            "Generated {} people across {} generations",
            tree.total_count(),
            deepest_generation + 1,
        );
        tree
    }

    /// Create the children of `person` (and `partner`, if any). Not yet in the tree.
    fn spawn_children(
        &mut self,
        factory: &mut PersonFactory<'_>,
        person: &Person,
        partner: Option<&Person>,
        data: &DemographicData,
        config: &GenerationConfig,
    ) -> Vec<Person> {
        let birth_rate = data.birth_rate(person.birth_decade());
        let count = child_count(birth_rate, partner.is_some(), config, &mut self.rng);
        if count == 0 {
            return Vec::new();
        }

        let window = match partner {
            Some(p) => birth_window(&[person, p], config),
            None => birth_window(&[person], config),
        };
        let Some(window) = window else {
            log::trace!("{} has no valid birth years", person);
            return Vec::new();
        };

        let mut children = Vec::with_capacity(count);
        for year in distribute_birth_years(window, count) {
            if year > config.horizon_year {
                break;
            }

            let co_parent = match partner {
                Some(p) => CoParent::Partner(p),
                None => match PlaceholderParent::sample(person, year, config, &mut self.rng) {
                    Some(placeholder) => CoParent::Placeholder(placeholder),
                    None => break,
                },
            };
            children.push(factory.create_child(person, &co_parent, year, &mut self.rng));
        }
        children
    }
}

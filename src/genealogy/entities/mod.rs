//! Entity definitions: people and their genders.

pub mod person;

pub use person::{Gender, Person};

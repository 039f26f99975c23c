//! Entity records for the three catalog domains.

mod animal;
mod breed;
mod breeder;

pub use animal::{truncate_to_micros, Cat, Dog};
pub use breed::{average_weight, Breed};
pub use breeder::Breeder;

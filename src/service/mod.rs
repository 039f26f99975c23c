//! Services: the only layer handlers talk to, and the only layer holding a repository.
//! Validation and derived fields belong here.

mod breeder;
mod cat;
mod dog;

pub use breeder::BreederService;
pub use cat::CatService;
pub use dog::DogService;

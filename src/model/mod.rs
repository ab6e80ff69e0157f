//! Pure data types: resource ledger, recipes, brew parameters, schedules.

pub mod brew;
pub mod outcome;
pub mod recipe;
pub mod resource;
pub mod schedule;

pub use brew::*;
pub use outcome::*;
pub use recipe::*;
pub use resource::*;
pub use schedule::*;

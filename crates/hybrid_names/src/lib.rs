//! Generates hybrid names by pairing a romanized Japanese given name from JMnedict
//! with a Western surname from census data.

pub mod acquire;
pub mod combiner;
pub mod error;
pub mod given_names;
pub mod input;
pub mod pool;
pub mod pool_cache;
pub mod romaji;
pub mod surnames;

pub use combiner::{generate_hybrid_name, HybridName};
pub use error::{Error, Result};
pub use given_names::{extract_given_names, GivenName, GivenNamePool, NameFilter};
pub use surnames::{extract_surnames, Surname, SurnamePool};

//! Combines a given name and a surname into a hybrid name.

use crate::{
    given_names::{GivenName, GivenNamePool},
    surnames::{Surname, SurnamePool},
};
use rand::Rng;
use serde::{Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HybridName {
    pub given: GivenName,
    pub surname: Surname,
}

impl HybridName {
    /// Lowercase with hyphens instead of spaces, e.g. `tarou-smith`.
    pub fn slug(&self) -> String {
        self.to_string()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-")
            .to_lowercase()
    }
}

impl fmt::Display for HybridName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.given, self.surname)
    }
}

impl Serialize for HybridName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Output<'a> {
            name: String,
            slug: String,
            given: &'a GivenName,
            surname: &'a Surname,
        }

        Output {
            name: self.to_string(),
            slug: self.slug(),
            given: &self.given,
            surname: &self.surname,
        }
        .serialize(serializer)
    }
}

/// Draws a given name and a surname independently and uniformly, with replacement.
pub fn generate_hybrid_name<R: Rng + ?Sized>(
    given_pool: &GivenNamePool,
    surname_pool: &SurnamePool,
    rng: &mut R,
) -> HybridName {
    HybridName {
        given: given_pool.choose(rng).clone(),
        surname: surname_pool.choose(rng).clone(),
    }
}

//! Types modeling the input files.

pub mod census;
pub mod jmnedict;

//! Species-data lookups against PokeAPI.
//!
//! The relay only needs a handful of fields out of the (large) PokeAPI
//! payload; everything else is ignored on deserialization.

pub mod client;
pub mod types;

pub use client::{PokeApiClient, SpeciesSource};
pub use types::*;

//! Static linguistic configuration.
//!
//! Everything here is initialization-time constant data: the character
//! registry and the cue-category tables. Declaration order is matching order
//! and is part of the contract; nothing in this module is mutable at runtime.

pub(crate) mod characters;
pub(crate) mod cues;

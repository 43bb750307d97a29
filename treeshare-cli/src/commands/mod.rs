//! CLI Commands

pub mod derive;
pub mod expand;
pub mod inspect;
pub mod reconstruct;
pub mod split;

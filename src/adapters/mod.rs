//! External integrations
//!
//! - [`converter`] - the external bflyt to flyt converter program

pub mod converter;

//! Identity caching for EVE Online characters and corporations.

pub mod character;
pub mod corporation;

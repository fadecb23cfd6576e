//! EVE Online SSO login flow.

pub mod callback;
pub mod login;

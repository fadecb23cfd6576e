pub mod buyback;
pub mod eve;
pub mod user;

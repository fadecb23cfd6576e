pub mod user;
pub mod user_character;

pub use user::UserRepository;
pub use user_character::UserCharacterRepository;

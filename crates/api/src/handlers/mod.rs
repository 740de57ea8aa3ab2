pub mod card;
pub mod logo;
pub mod meta;
pub mod public;
pub mod showcase;

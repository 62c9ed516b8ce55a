mod command;
pub mod recipe;
pub mod shopping;
pub mod user;

pub use command::*;

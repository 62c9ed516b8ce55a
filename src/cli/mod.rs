mod rank;
mod server;

pub use rank::*;
pub use server::*;

//! Recipe catalog: the preference-based filter and ranker, free-text search
//! and, with the `full` feature, SQLite persistence.

mod filter;
mod normalize;
mod pipeline;
mod rank;
mod restriction;
mod score;
mod search;

pub use filter::*;
pub use normalize::*;
pub use pipeline::*;
pub use rank::*;
pub use restriction::*;
pub use score::*;
pub use search::*;

pub use recetario_shared::recipe::{Recipe, Region, TextList};
pub use recetario_shared::user::{DifficultyFlags, UserPreferences};

cfg_if::cfg_if! {
    if #[cfg(feature = "full")] {
        mod command;
        mod query;

        pub use command::*;
        pub use query::*;
    }
}

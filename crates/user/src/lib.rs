//! Per-user state: stored preferences, the recent-search list and favorite
//! recipes.

mod recent;

pub use recent::*;

pub use recetario_shared::user::{DifficultyFlags, UserPreferences};

cfg_if::cfg_if! {
    if #[cfg(feature = "full")] {
        mod favorite;
        mod preference;

        pub use preference::*;
    }
}

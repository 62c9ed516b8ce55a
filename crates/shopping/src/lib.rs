//! Per-user shopping list.

pub use recetario_shared::shopping::ShoppingItem;

cfg_if::cfg_if! {
    if #[cfg(feature = "full")] {
        mod command;
        mod query;

        pub use command::*;
        pub use query::*;
    }
}

/// Key under which two item names are considered the same entry.
pub fn item_key(nombre: &str) -> String {
    nombre.trim().to_lowercase()
}

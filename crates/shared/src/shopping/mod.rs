use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingItem {
    pub id: String,
    pub nombre: String,
    pub cantidad: Option<String>,
    pub checked: bool,
}

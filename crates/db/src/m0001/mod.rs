mod recipe;
mod shopping_item;
mod user_favorite;
mod user_preference;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "recetario",
    "m0001",
    vec_box![],
    vec_box![
        recipe::CreateTable,
        recipe::CreateIdx1,
        user_preference::CreateTable,
        user_favorite::CreateTable,
        shopping_item::CreateTable,
        shopping_item::CreateIdx1
    ]
);

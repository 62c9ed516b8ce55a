use sea_query::Iden;

#[derive(Iden, Clone)]
pub enum Recipe {
    Table,
    Id,
    Nombre,
    Region,
    Ingredientes,
    Dificultad,
    Etiquetas,
    Descripcion,
    Pasos,
    Nutricion,
    Video,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum UserPreference {
    Table,
    UserId,
    Data,
    UpdatedAt,
}

#[derive(Iden, Clone)]
pub enum UserFavorite {
    Table,
    UserId,
    RecipeId,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum ShoppingItem {
    Table,
    Id,
    UserId,
    Nombre,
    Cantidad,
    Checked,
    CreatedAt,
}

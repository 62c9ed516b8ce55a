use recetario_shared::recipe::{Recipe, TextList};

/// Canonical lowercase entries of a list field, whichever shape it was stored in.
///
/// A joined string is split on commas; an item list is taken as-is. Every
/// entry is trimmed and lowercased, and blank entries are dropped, so a
/// missing or empty field yields an empty list.
pub fn normalize_list(list: Option<&TextList>) -> Vec<String> {
    match list {
        None => Vec::new(),
        Some(TextList::Joined(value)) => value.split(',').filter_map(canonical).collect(),
        Some(TextList::Items(items)) => items.iter().filter_map(|item| canonical(item)).collect(),
    }
}

pub fn normalized_ingredients(recipe: &Recipe) -> Vec<String> {
    normalize_list(recipe.ingredientes.as_ref())
}

pub fn normalized_tags(recipe: &Recipe) -> Vec<String> {
    normalize_list(recipe.etiquetas.as_ref())
}

fn canonical(entry: &str) -> Option<String> {
    let entry = entry.trim();

    if entry.is_empty() {
        return None;
    }

    Some(entry.to_lowercase())
}

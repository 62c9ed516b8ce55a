use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Dietary restrictions with a known ingredient rule.
///
/// Labels parse case-insensitively. A label outside this vocabulary has no
/// rule and never excludes anything.
#[derive(EnumString, Display, AsRefStr, VariantArray, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[strum(ascii_case_insensitive)]
pub enum DietaryRestriction {
    Vegetariano,
    Vegano,
    #[strum(serialize = "Sin gluten")]
    SinGluten,
    #[strum(serialize = "Sin lactosa")]
    SinLactosa,
}

impl DietaryRestriction {
    pub fn from_label(label: &str) -> Option<Self> {
        label.trim().parse().ok()
    }

    /// Lowercase substrings that disqualify an ingredient under this restriction.
    pub fn forbidden(&self) -> &'static [&'static str] {
        match self {
            Self::Vegetariano => &["carne", "pollo", "pescado", "res", "cerdo"],
            Self::Vegano => &["carne", "pollo", "pescado", "queso", "leche", "huevo"],
            Self::SinGluten => &["harina", "trigo", "cebada", "centeno"],
            Self::SinLactosa => &["leche", "queso", "mantequilla", "yogur", "crema"],
        }
    }

    /// `ingredients` must already be normalized (see [`crate::normalize_list`]).
    pub fn allows(&self, ingredients: &[String]) -> bool {
        let forbidden = self.forbidden();

        !ingredients
            .iter()
            .any(|ingredient| forbidden.iter().any(|word| ingredient.contains(word)))
    }
}

/// Whether normalized `ingredients` are allowed under the restriction `label`.
pub fn is_allowed(ingredients: &[String], label: &str) -> bool {
    match DietaryRestriction::from_label(label) {
        Some(restriction) => restriction.allows(ingredients),
        None => true,
    }
}

/// Known restrictions among `labels`; unknown labels are dropped.
pub fn active_restrictions<S: AsRef<str>>(labels: &[S]) -> Vec<DietaryRestriction> {
    let mut active = Vec::with_capacity(labels.len());

    for restriction in labels
        .iter()
        .filter_map(|label| DietaryRestriction::from_label(label.as_ref()))
    {
        if !active.contains(&restriction) {
            active.push(restriction);
        }
    }

    active
}

pub(crate) fn allowed_under_all(ingredients: &[String], active: &[DietaryRestriction]) -> bool {
    active
        .iter()
        .all(|restriction| restriction.allows(ingredients))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ingredients(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn labels_parse_case_insensitively() {
        assert_eq!(
            DietaryRestriction::from_label("vegetariano"),
            Some(DietaryRestriction::Vegetariano)
        );
        assert_eq!(
            DietaryRestriction::from_label("SIN GLUTEN"),
            Some(DietaryRestriction::SinGluten)
        );
        assert_eq!(
            DietaryRestriction::from_label(" Sin lactosa "),
            Some(DietaryRestriction::SinLactosa)
        );
        assert_eq!(DietaryRestriction::from_label("Kosher"), None);
    }

    #[test]
    fn meat_violates_vegetarian() {
        let list = ingredients(&["carne de res", "papa"]);

        assert!(!is_allowed(&list, "Vegetariano"));
        assert!(is_allowed(&list, "Sin gluten"));
    }

    #[test]
    fn vegan_forbids_dairy_and_eggs() {
        assert!(!is_allowed(&ingredients(&["huevo duro"]), "Vegano"));
        assert!(!is_allowed(&ingredients(&["queso fresco"]), "vegano"));
        assert!(is_allowed(&ingredients(&["quinua", "palta"]), "Vegano"));
    }

    #[test]
    fn lactose_free_forbids_cream_and_butter() {
        assert!(!is_allowed(&ingredients(&["crema de leche"]), "Sin lactosa"));
        assert!(!is_allowed(&ingredients(&["mantequilla"]), "Sin lactosa"));
        assert!(is_allowed(&ingredients(&["aceite"]), "Sin lactosa"));
    }

    #[test]
    fn gluten_free_forbids_flours_and_grains() {
        assert!(!is_allowed(&ingredients(&["harina de trigo"]), "Sin gluten"));
        assert!(!is_allowed(&ingredients(&["cebada perlada"]), "Sin gluten"));
        assert!(is_allowed(&ingredients(&["maíz morado"]), "Sin gluten"));
    }

    #[test]
    fn forbidden_words_match_inside_longer_words() {
        // "fresco" and "fresa" both contain "res".
        assert!(!is_allowed(&ingredients(&["queso fresco"]), "Vegetariano"));
        assert!(!is_allowed(&ingredients(&["fresa"]), "Vegetariano"));
    }

    #[test]
    fn unknown_label_is_a_no_op() {
        assert!(is_allowed(&ingredients(&["carne", "queso"]), "Paleo"));
    }

    #[test]
    fn empty_ingredient_list_is_allowed_under_everything() {
        for restriction in DietaryRestriction::VARIANTS {
            assert!(restriction.allows(&[]));
        }
    }

    #[test]
    fn active_restrictions_drop_unknown_and_duplicate_labels() {
        let active = active_restrictions(&["Vegano", "paleo", "VEGANO", "Sin gluten"]);

        assert_eq!(
            active,
            vec![DietaryRestriction::Vegano, DietaryRestriction::SinGluten]
        );
    }
}

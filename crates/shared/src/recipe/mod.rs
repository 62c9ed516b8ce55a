use serde::{Deserialize, Deserializer, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

pub const DIFFICULTY_EASY: &str = "Fácil";
pub const DIFFICULTY_INTERMEDIATE: &str = "Intermedio";
pub const DIFFICULTY_ADVANCED: &str = "Avanzado";

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
pub enum Region {
    #[default]
    Andina,
    Costa,
    #[strum(to_string = "Amazonica", serialize = "Amazónica")]
    #[serde(alias = "Amazónica")]
    Amazonica,
    Sierra,
    Pampa,
    Altiplano,
}

/// A list field stored either as a JSON array of strings or as a single
/// comma-separated string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextList {
    Items(Vec<String>),
    Joined(String),
}

impl Default for TextList {
    fn default() -> Self {
        Self::Items(Vec::new())
    }
}

impl From<Vec<String>> for TextList {
    fn from(value: Vec<String>) -> Self {
        Self::Items(value)
    }
}

impl From<Vec<&str>> for TextList {
    fn from(value: Vec<&str>) -> Self {
        Self::Items(value.into_iter().map(str::to_owned).collect())
    }
}

impl From<&str> for TextList {
    fn from(value: &str) -> Self {
        Self::Joined(value.to_owned())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(deserialize_with = "id_from_text_or_number")]
    pub id: String,
    pub nombre: String,
    #[serde(default, deserialize_with = "region_or_default")]
    pub region: Region,
    #[serde(default)]
    pub ingredientes: Option<TextList>,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub dificultad: String,
    #[serde(default)]
    pub etiquetas: Option<TextList>,
    #[serde(
        default,
        deserialize_with = "opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub descripcion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pasos: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutricion: Option<serde_json::Value>,
    #[serde(
        default,
        deserialize_with = "opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub video: Option<String>,
}

/// Recipe ids arrive as numbers from some backends and as strings from others.
pub fn id_from_text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(i64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(value) => value,
        Raw::Number(value) => value.to_string(),
    })
}

pub fn opt_id_from_text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Wrapped(#[serde(deserialize_with = "id_from_text_or_number")] String);

    Ok(Option::<Wrapped>::deserialize(deserializer)?.map(|Wrapped(id)| id))
}

/// Any non-string value (null, number, object) reads as absent.
fn opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<serde_json::Value>::deserialize(deserializer)? {
        Some(serde_json::Value::String(value)) => Some(value),
        _ => None,
    })
}

fn text_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(opt_text(deserializer)?.unwrap_or_default())
}

/// Unknown or missing regions fall back to the default region.
fn region_or_default<'de, D>(deserializer: D) -> Result<Region, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(opt_text(deserializer)?
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or_default())
}

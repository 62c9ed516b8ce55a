use serde::{Deserialize, Serialize};

/// Difficulty levels a user accepts. Each flag is independent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DifficultyFlags {
    pub facil: bool,
    pub intermedio: bool,
    pub avanzado: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserPreferences {
    pub ingredientes_favoritos: Vec<String>,
    pub difficulty: DifficultyFlags,
    pub restricciones: Vec<String>,
    /// Most recent first.
    pub ultimas_busquedas: Vec<String>,
    pub theme: Option<String>,
    pub notificaciones: bool,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            ingredientes_favoritos: Vec::new(),
            difficulty: DifficultyFlags {
                facil: true,
                intermedio: false,
                avanzado: false,
            },
            restricciones: Vec::new(),
            ultimas_busquedas: Vec::new(),
            theme: None,
            notificaciones: false,
        }
    }
}

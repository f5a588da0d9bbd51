//! Konfigurierbare Platzhaltertexte.
//!
//! `StringTable` ist die mitgelieferte Implementierung von `LocalizedStrings`.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{LocalizedStrings, StringKey};
use serde::{Deserialize, Serialize};

/// Standard-Name eines gesetzten Pins.
pub const DROPPED_PIN: &str = "Dropped Pin";
/// Standard-Kategorie fuer Objekte ohne Kategorie.
pub const UNSORTED: &str = "Unsorted";
/// Standard-Name der eigenen Position.
pub const MY_POSITION: &str = "My Position";

/// Dateiname der Optionen-Datei neben der Binary.
pub const CONFIG_FILE_NAME: &str = "map_object_strings.toml";

/// Lokalisierte Platzhalter, als TOML ladbar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StringTable {
    /// Name fuer unbenannte Pins ohne Kategorie
    pub dropped_pin: String,
    /// Kategorie fuer unsortierte Objekte
    pub unsorted: String,
    /// Name der eigenen Position
    pub my_position: String,
}

impl Default for StringTable {
    fn default() -> Self {
        Self {
            dropped_pin: DROPPED_PIN.to_string(),
            unsorted: UNSORTED.to_string(),
            my_position: MY_POSITION.to_string(),
        }
    }
}

impl LocalizedStrings for StringTable {
    fn localized(&self, key: StringKey) -> String {
        match key {
            StringKey::DroppedPin => self.dropped_pin.clone(),
            StringKey::Unsorted => self.unsorted.clone(),
            StringKey::MyPosition => self.my_position.clone(),
        }
    }
}

impl StringTable {
    /// Parst eine Tabelle aus TOML-Text. Fehlende Schluessel bekommen Standardwerte.
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Lädt die Tabelle aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_toml_str(&content) {
                Ok(table) => {
                    log::info!("Texte geladen aus: {}", path.display());
                    table
                }
                Err(e) => {
                    log::warn!("Text-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Text-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert die Tabelle als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Texte gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Text-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("map-object"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join(CONFIG_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_keys_fall_back_to_defaults() {
        let table = StringTable::from_toml_str("unsorted = \"Unsortiert\"\n").unwrap();

        assert_eq!(table.unsorted, "Unsortiert");
        assert_eq!(table.dropped_pin, DROPPED_PIN);
        assert_eq!(table.localized(StringKey::MyPosition), MY_POSITION);
    }

    #[test]
    fn test_invalid_toml_is_error() {
        assert!(StringTable::from_toml_str("unsorted = ").is_err());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let table = StringTable::load_from_file(std::path::Path::new(
            "/definitiv/nicht/vorhanden/map_object_strings.toml",
        ));
        assert_eq!(table, StringTable::default());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = std::env::temp_dir().join(format!(
            "map_object_strings_{}.toml",
            std::process::id()
        ));
        let table = StringTable {
            dropped_pin: "Markierung".to_string(),
            unsorted: "Unsortiert".to_string(),
            my_position: "Mein Standort".to_string(),
        };

        table.save_to_file(&path).unwrap();
        let loaded = StringTable::load_from_file(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, table);
    }
}

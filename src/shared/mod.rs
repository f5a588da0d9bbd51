//! Geteilte Konfiguration für Bibliothek und Werkzeug.

pub mod options;

pub use options::{StringTable, CONFIG_FILE_NAME};

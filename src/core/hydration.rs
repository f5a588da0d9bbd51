//! Befuellen von Suchergebnissen aus einer externen Kartendatenquelle.

use super::Metadata;

/// Felder, die eine Kartendatenquelle fuer einen Suchergebnis-Index liefert.
#[derive(Debug, Clone, Default)]
pub struct SearchHit {
    /// Anzeigename
    pub name: String,
    /// Breitengrad
    pub lat: f64,
    /// Laengengrad
    pub lon: f64,
    /// Kategorie-Bezeichnung
    pub category: String,
    /// Zusaetzliche Metadaten
    pub metadata: Metadata,
}

/// Abfragedienst der Kartendaten-Engine.
///
/// Der Index ist fuer die Bibliothek opak; nur die Quelle kennt seine Bedeutung.
pub trait MapDataSource {
    /// Sucht den Treffer zum Index. `None` wenn der Index unbekannt ist.
    fn lookup(&self, index: u64) -> Option<SearchHit>;
}

impl<F> MapDataSource for F
where
    F: Fn(u64) -> Option<SearchHit>,
{
    fn lookup(&self, index: u64) -> Option<SearchHit> {
        self(index)
    }
}

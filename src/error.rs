//! Fehlertypen der Map-Object-Bibliothek.

use thiserror::Error;

/// Alle Fehler, die beim Aufbau, Befuellen oder Dekodieren eines
/// `MapObject` auftreten koennen.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapObjectError {
    /// Der Varianten-Tag im Datensatz ist keiner der fuenf bekannten Namen
    #[error("Unbekannte MapObject-Variante: '{0}'")]
    UnknownVariant(String),

    /// Parallele Listen fuer Metadaten haben unterschiedliche Laengen
    #[error("Metadaten-Listen ungleich lang: {kinds} Typen, {values} Werte")]
    MetadataLengthMismatch { kinds: usize, values: usize },

    /// Numerischer Metadaten-Code ausserhalb der Aufzaehlung
    #[error("Unbekannter Metadaten-Typ: {0}")]
    UnknownMetadataKind(u32),

    /// Datensatz endet vor dem naechsten Feld
    #[error("Unerwartetes Datenende: {needed} Bytes benoetigt, {remaining} vorhanden")]
    UnexpectedEof { needed: usize, remaining: usize },

    /// Text-Feld ist kein gueltiges UTF-8
    #[error("Text-Feld ist kein gueltiges UTF-8")]
    InvalidUtf8,

    /// Nach dem Datensatz folgen noch Bytes
    #[error("{0} ueberzaehlige Bytes nach dem Datensatz")]
    TrailingBytes(usize),

    /// Die Datenquelle kennt den angefragten Index nicht
    #[error("Keine Kartendaten fuer Index {0}")]
    HydrationFailed(u64),
}

/// Kurzform fuer Ergebnisse der Bibliothek.
pub type Result<T> = std::result::Result<T, MapObjectError>;

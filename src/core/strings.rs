//! Lokalisierte Platzhaltertexte, die ein `MapObject` beim Auffuellen leerer Felder nutzt.

/// Symbolische Schluessel der benoetigten Texte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringKey {
    /// Name fuer einen gesetzten Pin ohne Namen und Kategorie
    DroppedPin,
    /// Kategorie fuer Objekte ohne Kategorie
    Unsorted,
    /// Name der eigenen Position
    MyPosition,
}

/// Nachschlagedienst fuer lokalisierte Texte.
///
/// Wird vom Aufrufer bereitgestellt; die Bibliothek kennt keine Sprachtabellen.
pub trait LocalizedStrings {
    /// Liefert den Anzeigetext zum Schluessel
    fn localized(&self, key: StringKey) -> String;
}

impl<F> LocalizedStrings for F
where
    F: Fn(StringKey) -> String,
{
    fn localized(&self, key: StringKey) -> String {
        self(key)
    }
}

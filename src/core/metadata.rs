//! Metadaten-Beutel eines Kartenobjekts (Oeffnungszeiten, Telefon, Website, ...).

use crate::error::{MapObjectError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Feste Aufzaehlung der Metadaten-Arten.
///
/// Die numerischen Codes sind Teil des Wire-Formats und duerfen sich
/// nicht aendern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetadataType {
    Cuisine,
    OpenHours,
    PhoneNumber,
    FaxNumber,
    Stars,
    Operator,
    Url,
    Website,
    Internet,
    Elevation,
    TurnLanes,
    TurnLanesForward,
    TurnLanesBackward,
    Email,
    Postcode,
    Wikipedia,
    MaxSpeed,
    Flats,
}

impl MetadataType {
    /// Alle Arten in Code-Reihenfolge
    pub const ALL: [MetadataType; 18] = [
        MetadataType::Cuisine,
        MetadataType::OpenHours,
        MetadataType::PhoneNumber,
        MetadataType::FaxNumber,
        MetadataType::Stars,
        MetadataType::Operator,
        MetadataType::Url,
        MetadataType::Website,
        MetadataType::Internet,
        MetadataType::Elevation,
        MetadataType::TurnLanes,
        MetadataType::TurnLanesForward,
        MetadataType::TurnLanesBackward,
        MetadataType::Email,
        MetadataType::Postcode,
        MetadataType::Wikipedia,
        MetadataType::MaxSpeed,
        MetadataType::Flats,
    ];

    /// Wire-Code (1-basiert)
    pub fn code(self) -> u32 {
        match self {
            MetadataType::Cuisine => 1,
            MetadataType::OpenHours => 2,
            MetadataType::PhoneNumber => 3,
            MetadataType::FaxNumber => 4,
            MetadataType::Stars => 5,
            MetadataType::Operator => 6,
            MetadataType::Url => 7,
            MetadataType::Website => 8,
            MetadataType::Internet => 9,
            MetadataType::Elevation => 10,
            MetadataType::TurnLanes => 11,
            MetadataType::TurnLanesForward => 12,
            MetadataType::TurnLanesBackward => 13,
            MetadataType::Email => 14,
            MetadataType::Postcode => 15,
            MetadataType::Wikipedia => 16,
            MetadataType::MaxSpeed => 17,
            MetadataType::Flats => 18,
        }
    }

    /// Umkehrung von [`MetadataType::code`]
    pub fn from_code(code: u32) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.code() == code)
    }
}

impl TryFrom<u32> for MetadataType {
    type Error = MapObjectError;

    fn try_from(code: u32) -> Result<Self> {
        Self::from_code(code).ok_or(MapObjectError::UnknownMetadataKind(code))
    }
}

/// Zuordnung Metadaten-Art → Text. Pro Art ein Wert, der letzte Schreibzugriff gewinnt.
///
/// Die Einfuege-Reihenfolge bleibt erhalten, damit die Serialisierung
/// deterministisch ist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metadata {
    entries: IndexMap<MetadataType, String>,
}

impl Metadata {
    /// Erstellt einen leeren Metadaten-Beutel
    pub fn new() -> Self {
        Self::default()
    }

    /// Setzt oder ueberschreibt einen Eintrag
    pub fn insert(&mut self, kind: MetadataType, value: impl Into<String>) {
        // insert() auf bestehendem Schluessel behaelt die Position
        self.entries.insert(kind, value.into());
    }

    /// Liefert den Wert einer Art, falls gesetzt
    pub fn get(&self, kind: MetadataType) -> Option<&str> {
        self.entries.get(&kind).map(String::as_str)
    }

    /// Fuegt parallele Listen ein. Bei ungleicher Laenge wird nichts eingefuegt.
    pub fn insert_all<S: AsRef<str>>(&mut self, kinds: &[MetadataType], values: &[S]) -> Result<()> {
        if kinds.len() != values.len() {
            log::warn!(
                "Metadaten verworfen: {} Typen, {} Werte",
                kinds.len(),
                values.len()
            );
            return Err(MapObjectError::MetadataLengthMismatch {
                kinds: kinds.len(),
                values: values.len(),
            });
        }

        for (kind, value) in kinds.iter().zip(values) {
            self.insert(*kind, value.as_ref());
        }
        Ok(())
    }

    /// Wie [`Metadata::insert_all`], aber mit numerischen Codes aus einer nativen Datenquelle.
    ///
    /// Alle Codes werden vor dem ersten Einfuegen geprueft.
    pub fn insert_codes<S: AsRef<str>>(&mut self, codes: &[u32], values: &[S]) -> Result<()> {
        if codes.len() != values.len() {
            return Err(MapObjectError::MetadataLengthMismatch {
                kinds: codes.len(),
                values: values.len(),
            });
        }

        let kinds = codes
            .iter()
            .map(|&code| MetadataType::try_from(code))
            .collect::<Result<Vec<_>>>()?;
        self.insert_all(&kinds, values)
    }

    /// Anzahl gesetzter Arten
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True wenn keine Metadaten gesetzt sind
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iteriert in Einfuege-Reihenfolge
    pub fn iter(&self) -> impl Iterator<Item = (MetadataType, &str)> {
        self.entries.iter().map(|(kind, value)| (*kind, value.as_str()))
    }
}

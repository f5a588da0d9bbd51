//! Repräsentiert ein vom Nutzer auf der Karte angetipptes Objekt.
//!
//! Alle Varianten teilen sich Name, Koordinate, Kategorie und Metadaten.
//! Die Variante wird beim Erstellen festgelegt und aendert sich danach nicht.

use super::{LocalizedStrings, MapDataSource, Metadata, MetadataType, StringKey};
use crate::error::{MapObjectError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Varianten-Tag, wie er im Wire-Format steht
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MapObjectType {
    /// Allgemeiner Point of Interest
    Poi,
    /// Von einer externen Anwendung uebergebener Punkt
    ApiPoint,
    /// Gespeichertes Lesezeichen
    Bookmark,
    /// Eigene Geraeteposition
    MyPosition,
    /// Suchergebnis (Zusatz-Layer)
    AdditionalLayer,
}

impl MapObjectType {
    /// Alle Tags
    pub const ALL: [MapObjectType; 5] = [
        MapObjectType::Poi,
        MapObjectType::ApiPoint,
        MapObjectType::Bookmark,
        MapObjectType::MyPosition,
        MapObjectType::AdditionalLayer,
    ];

    /// Tag-Text im Wire-Format
    pub fn as_str(self) -> &'static str {
        match self {
            MapObjectType::Poi => "POI",
            MapObjectType::ApiPoint => "API_POINT",
            MapObjectType::Bookmark => "BOOKMARK",
            MapObjectType::MyPosition => "MY_POSITION",
            MapObjectType::AdditionalLayer => "ADDITIONAL_LAYER",
        }
    }
}

impl fmt::Display for MapObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MapObjectType {
    type Err = MapObjectError;

    fn from_str(tag: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|object_type| object_type.as_str() == tag)
            .ok_or_else(|| MapObjectError::UnknownVariant(tag.to_string()))
    }
}

/// Variante samt ihrer eigenen Zusatzfelder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MapObjectKind {
    #[serde(rename = "POI")]
    Poi,
    #[serde(rename = "ADDITIONAL_LAYER")]
    SearchResult,
    #[serde(rename = "MY_POSITION")]
    MyPosition,
    #[serde(rename = "API_POINT")]
    ApiPoint {
        /// Kennung der aufrufenden Anwendung
        id: String,
    },
    #[serde(rename = "BOOKMARK")]
    Bookmark {
        /// Index der Lesezeichen-Kategorie
        category_id: i32,
        /// Index des Lesezeichens innerhalb der Kategorie
        bookmark_id: i32,
        /// Zoom-Massstab, mit dem das Lesezeichen angezeigt wird
        scale: f64,
    },
}

impl MapObjectKind {
    /// Zugehoeriger Tag
    pub fn object_type(&self) -> MapObjectType {
        match self {
            MapObjectKind::Poi => MapObjectType::Poi,
            MapObjectKind::SearchResult => MapObjectType::AdditionalLayer,
            MapObjectKind::MyPosition => MapObjectType::MyPosition,
            MapObjectKind::ApiPoint { .. } => MapObjectType::ApiPoint,
            MapObjectKind::Bookmark { .. } => MapObjectType::Bookmark,
        }
    }
}

/// Ein Kartenobjekt: gemeinsame Felder plus Variante.
///
/// Gleichheit und Hash beruecksichtigen nur Breite, Laenge, Name und
/// Kategorie (plus die Variante bei der Gleichheit). Metadaten und
/// Zusatzfelder der Varianten gehen nicht ein.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapObject {
    name: String,
    lat: f64,
    lon: f64,
    category: String,
    #[serde(default)]
    metadata: Metadata,
    kind: MapObjectKind,
}

impl MapObject {
    fn with_kind(
        kind: MapObjectKind,
        name: impl Into<String>,
        lat: f64,
        lon: f64,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            lat,
            lon,
            category: category.into(),
            metadata: Metadata::new(),
            kind,
        }
    }

    /// Erstellt einen allgemeinen Point of Interest
    pub fn poi(name: impl Into<String>, lat: f64, lon: f64, category: impl Into<String>) -> Self {
        Self::with_kind(MapObjectKind::Poi, name, lat, lon, category)
    }

    /// Erstellt ein Suchergebnis aus bekannten Feldern
    pub fn search_result(
        name: impl Into<String>,
        lat: f64,
        lon: f64,
        category: impl Into<String>,
    ) -> Self {
        Self::with_kind(MapObjectKind::SearchResult, name, lat, lon, category)
    }

    /// Erstellt ein Suchergebnis, dessen Felder die Datenquelle zum Index liefert
    pub fn search_result_from_index(index: u64, source: &dyn MapDataSource) -> Result<Self> {
        let hit = source.lookup(index).ok_or_else(|| {
            log::warn!("Kartendatenquelle kennt Index {} nicht", index);
            MapObjectError::HydrationFailed(index)
        })?;

        let mut object = Self::search_result(hit.name, hit.lat, hit.lon, hit.category);
        object.metadata = hit.metadata;
        Ok(object)
    }

    /// Erstellt die Markierung der eigenen Position (immer ohne Kategorie)
    pub fn my_position(name: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self::with_kind(MapObjectKind::MyPosition, name, lat, lon, "")
    }

    /// Erstellt einen von aussen uebergebenen API-Punkt
    pub fn api_point(
        name: impl Into<String>,
        id: impl Into<String>,
        lat: f64,
        lon: f64,
        category: impl Into<String>,
    ) -> Self {
        Self::with_kind(
            MapObjectKind::ApiPoint { id: id.into() },
            name,
            lat,
            lon,
            category,
        )
    }

    /// Erstellt ein Lesezeichen
    pub fn bookmark(
        name: impl Into<String>,
        lat: f64,
        lon: f64,
        category: impl Into<String>,
        category_id: i32,
        bookmark_id: i32,
        scale: f64,
    ) -> Self {
        Self::with_kind(
            MapObjectKind::Bookmark {
                category_id,
                bookmark_id,
                scale,
            },
            name,
            lat,
            lon,
            category,
        )
    }

    /// Baut ein Objekt aus dekodierten Feldern (nur fuer den Decoder)
    pub(crate) fn from_parts(
        kind: MapObjectKind,
        name: String,
        lat: f64,
        lon: f64,
        category: String,
        metadata: Metadata,
    ) -> Self {
        Self {
            name,
            lat,
            lon,
            category,
            metadata,
            kind,
        }
    }

    /// Fuellt leere Namen und Kategorien mit lokalisierten Platzhaltern.
    ///
    /// Die eigene Position bekommt nur einen Namen; ihre Kategorie bleibt unberuehrt.
    pub fn set_default_if_empty(&mut self, strings: &dyn LocalizedStrings) {
        if let MapObjectKind::MyPosition = self.kind {
            if self.name.is_empty() {
                self.name = strings.localized(StringKey::MyPosition);
            }
            return;
        }

        if self.name.is_empty() {
            self.name = if self.category.is_empty() {
                strings.localized(StringKey::DroppedPin)
            } else {
                self.category.clone()
            };
        }

        if self.category.is_empty() {
            self.category = strings.localized(StringKey::Unsorted);
        }
    }

    /// Anzeigename
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Breitengrad
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Laengengrad
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Setzt den Breitengrad (Live-Update der eigenen Position)
    pub fn set_lat(&mut self, lat: f64) {
        self.lat = lat;
    }

    /// Setzt den Laengengrad (Live-Update der eigenen Position)
    pub fn set_lon(&mut self, lon: f64) {
        self.lon = lon;
    }

    /// Kategorie-Bezeichnung (POI-Typname)
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Variante mit Zusatzfeldern
    pub fn kind(&self) -> &MapObjectKind {
        &self.kind
    }

    /// Varianten-Tag
    pub fn object_type(&self) -> MapObjectType {
        self.kind.object_type()
    }

    /// Anzeige-Massstab; nur Lesezeichen haben einen, sonst 0
    pub fn scale(&self) -> f64 {
        match self.kind {
            MapObjectKind::Bookmark { scale, .. } => scale,
            _ => 0.0,
        }
    }

    /// Kennung eines API-Punkts
    pub fn api_id(&self) -> Option<&str> {
        match &self.kind {
            MapObjectKind::ApiPoint { id } => Some(id),
            _ => None,
        }
    }

    /// (Kategorie-Index, Lesezeichen-Index) eines Lesezeichens
    pub fn bookmark_ids(&self) -> Option<(i32, i32)> {
        match self.kind {
            MapObjectKind::Bookmark {
                category_id,
                bookmark_id,
                ..
            } => Some((category_id, bookmark_id)),
            _ => None,
        }
    }

    /// Prueft, ob die Koordinate im gueltigen geografischen Bereich liegt.
    ///
    /// Beim Erstellen wird nicht validiert.
    pub fn has_valid_coordinates(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lon)
    }

    /// Setzt einen Metadaten-Eintrag
    pub fn add_metadata(&mut self, kind: MetadataType, value: impl Into<String>) {
        self.metadata.insert(kind, value);
    }

    /// Setzt mehrere Metadaten aus parallelen Listen
    pub fn add_metadata_list<S: AsRef<str>>(
        &mut self,
        kinds: &[MetadataType],
        values: &[S],
    ) -> Result<()> {
        self.metadata.insert_all(kinds, values)
    }

    /// Setzt mehrere Metadaten aus numerischen Codes
    pub fn add_metadata_codes<S: AsRef<str>>(&mut self, codes: &[u32], values: &[S]) -> Result<()> {
        self.metadata.insert_codes(codes, values)
    }

    /// Liefert einen Metadaten-Wert, falls gesetzt
    pub fn metadata_value(&self, kind: MetadataType) -> Option<&str> {
        self.metadata.get(kind)
    }

    /// Gesamter Metadaten-Beutel
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }
}

/// Bitmuster einer Koordinate; alle NaN gelten als gleich
fn coord_bits(value: f64) -> u64 {
    if value.is_nan() {
        f64::NAN.to_bits()
    } else {
        value.to_bits()
    }
}

impl PartialEq for MapObject {
    fn eq(&self, other: &Self) -> bool {
        self.object_type() == other.object_type()
            && coord_bits(self.lon) == coord_bits(other.lon)
            && coord_bits(self.lat) == coord_bits(other.lat)
            && self.name == other.name
            && self.category == other.category
    }
}

impl Eq for MapObject {}

impl Hash for MapObject {
    fn hash<H: Hasher>(&self, state: &mut H) {
        coord_bits(self.lat).hash(state);
        coord_bits(self.lon).hash(state);
        self.name.hash(state);
        self.category.hash(state);
    }
}

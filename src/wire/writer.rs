//! Writer für das binäre MapObject-Format.

use crate::core::{MapObject, MapObjectKind, Metadata};

/// Fortlaufender Schreibpuffer (Little Endian, keine Ausrichtung)
#[derive(Debug, Default)]
pub struct WireWriter {
    buffer: Vec<u8>,
}

impl WireWriter {
    /// Erstellt einen leeren Puffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Text: u32-Bytelaenge + UTF-8
    pub fn write_string(&mut self, value: &str) {
        self.write_u32(value.len() as u32);
        self.buffer.extend_from_slice(value.as_bytes());
    }

    /// 8-Byte IEEE-754
    pub fn write_f64(&mut self, value: f64) {
        self.buffer.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_u32(&mut self, value: u32) {
        self.buffer.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_i32(&mut self, value: i32) {
        self.buffer.extend_from_slice(&value.to_le_bytes());
    }

    /// Metadaten-Unterdatensatz: Anzahl, dann je (Code, Text)
    pub fn write_metadata(&mut self, metadata: &Metadata) {
        self.write_u32(metadata.len() as u32);
        for (kind, value) in metadata.iter() {
            self.write_u32(kind.code());
            self.write_string(value);
        }
    }

    /// Schreibt einen vollständigen Datensatz
    pub fn write_map_object(&mut self, object: &MapObject) {
        self.write_string(object.object_type().as_str());
        self.write_string(object.name());
        self.write_f64(object.lat());
        self.write_f64(object.lon());
        self.write_string(object.category());
        self.write_metadata(object.metadata());

        // Zusatzfelder hinter dem Basis-Datensatz
        match object.kind() {
            MapObjectKind::ApiPoint { id } => self.write_string(id),
            MapObjectKind::Bookmark {
                category_id,
                bookmark_id,
                scale,
            } => {
                self.write_i32(*category_id);
                self.write_i32(*bookmark_id);
                self.write_f64(*scale);
            }
            MapObjectKind::Poi | MapObjectKind::SearchResult | MapObjectKind::MyPosition => {}
        }
    }

    /// Gibt den Puffer zurück
    pub fn into_bytes(self) -> Vec<u8> {
        self.buffer
    }
}

/// Serialisiert ein einzelnes MapObject
pub fn encode_map_object(object: &MapObject) -> Vec<u8> {
    let mut writer = WireWriter::new();
    writer.write_map_object(object);
    let bytes = writer.into_bytes();
    log::debug!(
        "MapObject {} '{}' kodiert: {} Bytes",
        object.object_type(),
        object.name(),
        bytes.len()
    );
    bytes
}

/// Serialisiert eine Liste: Anzahl, dann die Datensätze
pub fn encode_map_objects(objects: &[MapObject]) -> Vec<u8> {
    let mut writer = WireWriter::new();
    writer.write_u32(objects.len() as u32);
    for object in objects {
        writer.write_map_object(object);
    }
    writer.into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_layout() {
        let mut writer = WireWriter::new();
        writer.write_string("Ä");
        // 2 Bytes UTF-8
        assert_eq!(writer.into_bytes(), vec![2, 0, 0, 0, 0xC3, 0x84]);
    }

    #[test]
    fn test_record_layout_of_poi() {
        let bytes = encode_map_object(&MapObject::poi("A", 1.5, -2.0, ""));

        let mut expected = Vec::new();
        expected.extend_from_slice(&3u32.to_le_bytes());
        expected.extend_from_slice(b"POI");
        expected.extend_from_slice(&1u32.to_le_bytes());
        expected.extend_from_slice(b"A");
        expected.extend_from_slice(&1.5f64.to_le_bytes());
        expected.extend_from_slice(&(-2.0f64).to_le_bytes());
        expected.extend_from_slice(&0u32.to_le_bytes());
        expected.extend_from_slice(&0u32.to_le_bytes());

        assert_eq!(bytes, expected);
    }

    #[test]
    fn test_api_point_appends_id() {
        let bytes = encode_map_object(&MapObject::api_point("", "xy", 0.0, 0.0, ""));
        assert!(bytes.ends_with(&[2, 0, 0, 0, b'x', b'y']));
    }
}

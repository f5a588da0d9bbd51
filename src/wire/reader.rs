//! Reader für das binäre MapObject-Format.

use crate::core::{MapObject, MapObjectKind, MapObjectType, Metadata, MetadataType};
use crate::error::{MapObjectError, Result};

/// Lesezeiger über einen Byte-Puffer
#[derive(Debug)]
pub struct WireReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> WireReader<'a> {
    /// Beginnt am Anfang des Puffers
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Noch nicht gelesene Bytes
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    fn take(&mut self, needed: usize) -> Result<&'a [u8]> {
        let remaining = self.remaining();
        if needed > remaining {
            return Err(MapObjectError::UnexpectedEof { needed, remaining });
        }
        let slice = &self.data[self.pos..self.pos + needed];
        self.pos += needed;
        Ok(slice)
    }

    fn take_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut bytes = [0u8; N];
        bytes.copy_from_slice(self.take(N)?);
        Ok(bytes)
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        Ok(u32::from_le_bytes(self.take_array()?))
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        Ok(i32::from_le_bytes(self.take_array()?))
    }

    pub fn read_f64(&mut self) -> Result<f64> {
        Ok(f64::from_le_bytes(self.take_array()?))
    }

    pub fn read_string(&mut self) -> Result<String> {
        let len = self.read_u32()? as usize;
        let bytes = self.take(len)?;
        String::from_utf8(bytes.to_vec()).map_err(|_| MapObjectError::InvalidUtf8)
    }

    /// Metadaten-Unterdatensatz
    pub fn read_metadata(&mut self) -> Result<Metadata> {
        let count = self.read_u32()?;
        let mut metadata = Metadata::new();
        for _ in 0..count {
            let kind = MetadataType::try_from(self.read_u32()?)?;
            metadata.insert(kind, self.read_string()?);
        }
        Ok(metadata)
    }

    /// Liest einen Datensatz und wählt die Variante anhand des führenden Tags
    pub fn read_map_object(&mut self) -> Result<MapObject> {
        let tag = self.read_string()?;
        let object_type = tag.parse::<MapObjectType>().inspect_err(|_| {
            log::warn!("Datensatz mit unbekanntem Varianten-Tag '{}' verworfen", tag);
        })?;

        let name = self.read_string()?;
        let lat = self.read_f64()?;
        let lon = self.read_f64()?;
        let category = self.read_string()?;
        let metadata = self.read_metadata()?;

        let kind = match object_type {
            MapObjectType::Poi => MapObjectKind::Poi,
            MapObjectType::AdditionalLayer => MapObjectKind::SearchResult,
            MapObjectType::MyPosition => MapObjectKind::MyPosition,
            MapObjectType::ApiPoint => MapObjectKind::ApiPoint {
                id: self.read_string()?,
            },
            MapObjectType::Bookmark => MapObjectKind::Bookmark {
                category_id: self.read_i32()?,
                bookmark_id: self.read_i32()?,
                scale: self.read_f64()?,
            },
        };

        Ok(MapObject::from_parts(
            kind, name, lat, lon, category, metadata,
        ))
    }
}

/// Dekodiert genau einen Datensatz; überzählige Bytes sind ein Fehler
pub fn decode_map_object(data: &[u8]) -> Result<MapObject> {
    let mut reader = WireReader::new(data);
    let object = reader.read_map_object()?;

    if reader.remaining() > 0 {
        return Err(MapObjectError::TrailingBytes(reader.remaining()));
    }

    log::debug!(
        "MapObject {} '{}' dekodiert",
        object.object_type(),
        object.name()
    );
    Ok(object)
}

/// Dekodiert eine Liste (Anzahl + Datensätze)
pub fn decode_map_objects(data: &[u8]) -> Result<Vec<MapObject>> {
    let mut reader = WireReader::new(data);
    let count = reader.read_u32()? as usize;

    // Kapazität begrenzen: count stammt aus ungeprüften Daten
    let mut objects = Vec::with_capacity(count.min(reader.remaining()));
    for _ in 0..count {
        objects.push(reader.read_map_object()?);
    }

    if reader.remaining() > 0 {
        return Err(MapObjectError::TrailingBytes(reader.remaining()));
    }

    log::debug!("{} MapObjects dekodiert", objects.len());
    Ok(objects)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::writer::{encode_map_object, WireWriter};

    #[test]
    fn test_unknown_tag_is_explicit_error() {
        let mut writer = WireWriter::new();
        writer.write_string("SEARCH_RESULT");
        writer.write_string("x");

        let err = decode_map_object(&writer.into_bytes()).expect_err("Tag unbekannt");
        assert_eq!(
            err,
            MapObjectError::UnknownVariant("SEARCH_RESULT".to_string())
        );
    }

    #[test]
    fn test_truncated_record() {
        let bytes = encode_map_object(&MapObject::poi("Bahnhof", 1.0, 2.0, "Transport"));
        let err = decode_map_object(&bytes[..bytes.len() - 3]).expect_err("abgeschnitten");
        assert!(matches!(err, MapObjectError::UnexpectedEof { .. }));
    }

    #[test]
    fn test_trailing_bytes() {
        let mut bytes = encode_map_object(&MapObject::my_position("", 1.0, 2.0));
        bytes.push(0);
        assert_eq!(
            decode_map_object(&bytes),
            Err(MapObjectError::TrailingBytes(1))
        );
    }

    #[test]
    fn test_invalid_utf8() {
        let data: [u8; 6] = [2, 0, 0, 0, 0xFF, 0xFE];
        assert_eq!(decode_map_object(&data), Err(MapObjectError::InvalidUtf8));
    }

    #[test]
    fn test_unknown_metadata_code() {
        let mut writer = WireWriter::new();
        writer.write_string("POI");
        writer.write_string("x");
        writer.write_f64(0.0);
        writer.write_f64(0.0);
        writer.write_string("");
        writer.write_u32(1);
        writer.write_u32(42);
        writer.write_string("?");

        assert_eq!(
            decode_map_object(&writer.into_bytes()),
            Err(MapObjectError::UnknownMetadataKind(42))
        );
    }

    #[test]
    fn test_huge_list_count_does_not_preallocate() {
        let data = u32::MAX.to_le_bytes();
        let err = decode_map_objects(&data).expect_err("keine Datensaetze vorhanden");
        assert!(matches!(err, MapObjectError::UnexpectedEof { .. }));
    }
}

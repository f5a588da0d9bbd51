//! Map-Object Library.
//! Datenhalter für angetippte Kartenobjekte samt Wire-Format, als Library exportiert für Tests und Wiederverwendung.

pub mod core;
pub mod error;
pub mod shared;
pub mod wire;

pub use core::{
    LocalizedStrings, MapDataSource, MapObject, MapObjectKind, MapObjectType, Metadata,
    MetadataType, SearchHit, StringKey,
};
pub use error::MapObjectError;
pub use shared::StringTable;
pub use wire::{decode_map_object, decode_map_objects, encode_map_object, encode_map_objects};

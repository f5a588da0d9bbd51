//! Core-Domänentypen: Kartenobjekt, Metadaten, externe Dienste.

pub mod hydration;
pub mod map_object;
pub mod metadata;
pub mod strings;

pub use hydration::{MapDataSource, SearchHit};
pub use map_object::{MapObject, MapObjectKind, MapObjectType};
pub use metadata::{Metadata, MetadataType};
pub use strings::{LocalizedStrings, StringKey};

//! Binärer Import/Export für MapObjects.
//!
//! Ein Datensatz besteht aus Varianten-Tag, Name, Breite, Länge, Kategorie,
//! Metadaten und den Zusatzfeldern der Variante. Alle Zahlen Little Endian,
//! Texte mit u32-Längenpräfix. Das Format ist an keinen Transport gebunden.

pub mod reader;
pub mod writer;

pub use reader::{decode_map_object, decode_map_objects, WireReader};
pub use writer::{encode_map_object, encode_map_objects, WireWriter};

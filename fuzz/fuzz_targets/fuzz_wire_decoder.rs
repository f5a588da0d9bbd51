#![no_main]

use libfuzzer_sys::fuzz_target;
use map_object::{decode_map_object, decode_map_objects, encode_map_object};

fuzz_target!(|data: &[u8]| {
    // Erfolgreich dekodierte Datensaetze muessen den Roundtrip ueberstehen
    if let Ok(object) = decode_map_object(data) {
        let reencoded = encode_map_object(&object);
        let again = decode_map_object(&reencoded).expect("Re-Dekodierung fehlgeschlagen");
        assert_eq!(again, object);
    }
    let _ = decode_map_objects(data);
});

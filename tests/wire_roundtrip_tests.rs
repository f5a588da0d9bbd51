use approx::assert_relative_eq;
use map_object::{
    decode_map_object, decode_map_objects, encode_map_object, encode_map_objects, MapObject,
    MapObjectError, MapObjectType, MetadataType,
};

fn load_fixture_objects() -> Vec<MapObject> {
    let json = include_str!("fixtures/objects.json");
    serde_json::from_str(json).expect("Fixture-JSON ungueltig")
}

#[test]
fn test_roundtrip_preserves_fields_of_every_variant() {
    for object in load_fixture_objects() {
        let bytes = encode_map_object(&object);
        let decoded = decode_map_object(&bytes).expect("Re-Dekodierung fehlgeschlagen");

        assert_eq!(decoded.object_type(), object.object_type());
        assert_eq!(decoded.name(), object.name());
        assert_relative_eq!(decoded.lat(), object.lat());
        assert_relative_eq!(decoded.lon(), object.lon());
        assert_eq!(decoded.category(), object.category());
        assert_eq!(decoded.kind(), object.kind());
        assert_eq!(decoded.metadata(), object.metadata());
        assert_eq!(decoded, object);
    }
}

#[test]
fn test_roundtrip_api_point_keeps_id() {
    let point = MapObject::api_point("Ziel", "com.example/1", 10.0, 20.0, "Event");
    let decoded = decode_map_object(&encode_map_object(&point)).expect("Dekodierung");

    assert_eq!(decoded.api_id(), Some("com.example/1"));
}

#[test]
fn test_roundtrip_bookmark_keeps_indices_and_scale() {
    let bookmark = MapObject::bookmark("Zuhause", 53.55, 9.99, "Privat", 2, 5, 16.5);
    let decoded = decode_map_object(&encode_map_object(&bookmark)).expect("Dekodierung");

    assert_eq!(decoded.bookmark_ids(), Some((2, 5)));
    assert_relative_eq!(decoded.scale(), 16.5);
}

#[test]
fn test_roundtrip_metadata_pairs() {
    let mut poi = MapObject::poi("Pizzeria", 0.5, 0.25, "Restaurant");
    poi.add_metadata_list(
        &[
            MetadataType::Cuisine,
            MetadataType::PhoneNumber,
            MetadataType::Website,
        ],
        &["pizza", "+39 06 000", "https://pizza.example"],
    )
    .expect("gleich lange Listen");

    let decoded = decode_map_object(&encode_map_object(&poi)).expect("Dekodierung");

    let pairs: Vec<(MetadataType, String)> = decoded
        .metadata()
        .iter()
        .map(|(kind, value)| (kind, value.to_string()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            (MetadataType::Cuisine, "pizza".to_string()),
            (MetadataType::PhoneNumber, "+39 06 000".to_string()),
            (MetadataType::Website, "https://pizza.example".to_string()),
        ]
    );
}

#[test]
fn test_list_roundtrip_keeps_order() {
    let objects = load_fixture_objects();
    let decoded = decode_map_objects(&encode_map_objects(&objects)).expect("Liste dekodieren");

    let types: Vec<MapObjectType> = decoded.iter().map(MapObject::object_type).collect();
    assert_eq!(
        types,
        vec![
            MapObjectType::Poi,
            MapObjectType::MyPosition,
            MapObjectType::ApiPoint,
            MapObjectType::Bookmark,
            MapObjectType::AdditionalLayer,
        ]
    );
    assert_eq!(decoded, objects);
}

#[test]
fn test_empty_list() {
    let decoded = decode_map_objects(&encode_map_objects(&[])).expect("leere Liste");
    assert!(decoded.is_empty());
}

#[test]
fn test_unknown_variant_tag_fails_explicitly() {
    let mut bytes = encode_map_object(&MapObject::poi("x", 0.0, 0.0, ""));
    // "POI" → "PIO"
    bytes[5] = b'I';
    bytes[6] = b'O';

    let err = decode_map_object(&bytes).expect_err("Tag darf nicht akzeptiert werden");
    assert_eq!(err, MapObjectError::UnknownVariant("PIO".to_string()));
}

#[test]
fn test_serde_json_roundtrip_keeps_variant_and_extras() {
    let bookmark = MapObject::bookmark("Zuhause", 53.55, 9.99, "Privat", 1, 4, 15.0);
    let json = serde_json::to_string(&bookmark).expect("JSON-Export");
    let back: MapObject = serde_json::from_str(&json).expect("JSON-Import");

    assert_eq!(back, bookmark);
    assert_eq!(back.kind(), bookmark.kind());
    assert!(json.contains("\"BOOKMARK\""));
}

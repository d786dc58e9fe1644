use gltf_scene_loader::geometry::{AttributeRole, DrawType};
use gltf_scene_loader::resource::gltf::asset::file::FileSystemGltfAsset;
use gltf_scene_loader::resource::gltf::asset::GltfAsset;
use gltf_scene_loader::{Error, GrammarVersion};

mod common;

use common::{triangle_payload, write_asset, INDICES, POSITIONS, TRIANGLE};

fn load(document: &str, payload: &[u8]) -> Result<gltf_scene_loader::Geometry, Error> {
    let directory = tempfile::tempdir().unwrap();
    let path = write_asset(directory.path(), document, payload);
    let asset = FileSystemGltfAsset::from_path(&path, GrammarVersion::Current)?;
    asset.interpret()
}

#[test]
fn minimal_document_resolves_byte_for_byte() {
    let payload = triangle_payload();
    let geometry = load(TRIANGLE, &payload).unwrap();

    assert_eq!(geometry.vertex_bytes(), &payload[..36]);
    assert_eq!(geometry.vertices, POSITIONS.to_vec());
    assert_eq!(geometry.indices, INDICES.to_vec());

    assert_eq!(geometry.objects.len(), 1);
    let object = &geometry.objects[0];
    assert_eq!(object.mesh, "m1");
    assert_eq!(object.byte_offset, 0);
    assert_eq!(object.byte_stride, 0);
    assert_eq!(object.vertex_count, 3);
    assert_eq!(object.draw_type, DrawType::Triangles);
    assert_eq!(object.roles(), vec![AttributeRole::Position]);
}

#[test]
fn accessor_shared_as_indices_and_positions_is_rejected() {
    let document = r#"{"buffers":{"b1":{"uri":"d.bin","byteLength":12,"type":"arraybuffer"}}, "bufferViews":{"bv1":{"buffer":"b1","byteOffset":0,"byteLength":12,"target":"34962"}}, "accessors":{"a1":{"bufferView":"bv1","byteOffset":0,"byteStride":0,"componentType":"5126","count":3,"type":"VEC3"}}, "meshes":{"m1":{"primitives":[{"indices":"a1","material":"mat1","mode":"4","attributes":{"POSITION":"a1"}}]}}, "materials":{"mat1":{}}}"#;
    let payload: Vec<u8> = bytemuck::cast_slice(&POSITIONS).to_vec();

    match load(document, &payload) {
        Err(Error::BadAccessorTarget { accessor, expected }) => {
            assert_eq!(accessor, "a1");
            assert_eq!(expected, "ELEMENT_ARRAY_BUFFER");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn definitions_may_follow_their_references() {
    let reordered = r#"{
        "materials": {"mat1": {}},
        "meshes": {"m1": {"primitives": [{"attributes": {"POSITION": "a1"}, "indices": "i1", "mode": 4, "material": "mat1"}]}},
        "accessors": {
            "a1": {"bufferView": "bv1", "byteOffset": 0, "componentType": 5126, "count": 3, "type": "VEC3"},
            "i1": {"bufferView": "bv2", "byteOffset": 0, "componentType": 5123, "count": 3, "type": "SCALAR"}
        },
        "bufferViews": {
            "bv1": {"buffer": "b1", "byteOffset": 0, "byteLength": 36, "target": 34962},
            "bv2": {"buffer": "b1", "byteOffset": 36, "byteLength": 6, "target": 34963}
        },
        "buffers": {"b1": {"uri": "d.bin", "byteLength": 42}}
    }"#;

    let payload = triangle_payload();
    assert_eq!(load(reordered, &payload).unwrap(), load(TRIANGLE, &payload).unwrap());
}

#[test]
fn view_past_the_payload_is_rejected() {
    let truncated = &triangle_payload()[..40];
    assert!(matches!(
        load(TRIANGLE, truncated),
        Err(Error::InvalidBufferViewBounds { ref name, size: 40, .. }) if name == "bv2"
    ));
}

#[test]
fn unknown_key_aborts_the_parse() {
    let document = TRIANGLE.replace(
        r#""byteStride": 0, "componentType": "5123""#,
        r#""stride": 0, "componentType": "5123""#,
    );
    assert!(matches!(
        load(&document, &triangle_payload()),
        Err(Error::UnknownKeyword { ref keyword, .. }) if keyword == "stride"
    ));
}

#[test]
fn extensions_and_extras_are_skipped() {
    let directory = tempfile::tempdir().unwrap();
    let document = TRIANGLE
        .replacen('{', r#"{"extensionsUsed": ["KHR_x"], "extras": {"author": {"name": "x"}},"#, 1)
        .replace(
            r#""mat1": {}"#,
            r#""mat1": {"extensions": {"KHR_materials_common": {}}, "additionalProperties": 1}"#,
        );
    let path = write_asset(directory.path(), &document, &triangle_payload());

    let asset = FileSystemGltfAsset::from_path(&path, GrammarVersion::Current).unwrap();
    let keys: Vec<&str> = asset
        .document()
        .warnings
        .iter()
        .map(|warning| warning.key.as_str())
        .collect();
    assert_eq!(keys, vec!["extensionsUsed", "extras", "extensions", "additionalProperties"]);
    assert!(asset.interpret().is_ok());
}

#[test]
fn missing_payload_is_reported() {
    let directory = tempfile::tempdir().unwrap();
    let path = directory.path().join("scene.gltf");
    std::fs::write(&path, TRIANGLE).unwrap();

    let asset = FileSystemGltfAsset::from_path(&path, GrammarVersion::Current).unwrap();
    match asset.interpret() {
        Err(Error::BufferFileNotFound { path }) => assert!(path.ends_with("d.bin")),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn payload_must_be_a_regular_file() {
    let directory = tempfile::tempdir().unwrap();
    let path = directory.path().join("scene.gltf");
    std::fs::write(&path, TRIANGLE).unwrap();
    std::fs::create_dir(directory.path().join("d.bin")).unwrap();

    let asset = FileSystemGltfAsset::from_path(&path, GrammarVersion::Current).unwrap();
    assert!(matches!(
        asset.interpret(),
        Err(Error::BufferFileNotRegular { .. })
    ));
}

#[test]
fn legacy_document_resolves() {
    let document = r#"{
        "asset": {"version": 0.8},
        "buffers": {"b1": {"uri": "d.bin", "byteLength": 42}},
        "bufferViews": {
            "bv1": {"buffer": "b1", "byteOffset": 0, "byteLength": 36, "target": 34962},
            "bv2": {"buffer": "b1", "byteOffset": 36, "byteLength": 6, "target": 34963}
        },
        "accessors": {
            "a1": {"bufferView": "bv1", "byteOffset": 0, "count": 3, "type": 35665},
            "i1": {"bufferView": "bv2", "byteOffset": 0, "componentType": 5123, "count": 3, "type": "SCALAR"}
        },
        "meshes": {"m1": {"primitives": [{"attributes": {"POSITION": "a1"}, "indices": "i1", "material": "mat1", "primitive": 1}]}},
        "materials": {"mat1": {}}
    }"#;

    let directory = tempfile::tempdir().unwrap();
    let path = write_asset(directory.path(), document, &triangle_payload());
    let asset = FileSystemGltfAsset::from_path(&path, GrammarVersion::Legacy).unwrap();
    let geometry = asset.interpret().unwrap();

    assert_eq!(geometry.vertices, POSITIONS.to_vec());
    assert_eq!(geometry.objects[0].draw_type, DrawType::Lines);
}

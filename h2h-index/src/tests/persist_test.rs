use std::path::PathBuf;

use super::*;
use crate::h2h::VertexLabel;
use crate::persist::{
    read_index,
    write_index,
    write_stats,
    IndexFormat,
};
use crate::pipeline::build_index;

/// Scratch file unique to this process.
fn scratch(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("h2h-index-{}-{name}", std::process::id()))
}

#[rstest]
#[case("index.json", IndexFormat::Json)]
#[case("index.JSON", IndexFormat::Json)]
#[case("index.msgpack", IndexFormat::MessagePack)]
#[case("index", IndexFormat::MessagePack)]
fn test_format_from_path(#[case] path: &str, #[case] expected: IndexFormat) {
    assert_eq!(IndexFormat::from_path(&PathBuf::from(path)), expected);
}

#[rstest]
#[case("grid.json")]
#[case("grid.msgpack")]
fn test_write_then_read(#[case] name: &str) {
    let graph = grid(3, 3);
    let index = build_index(&graph).unwrap().index;
    let path = scratch(name);

    write_index(&index, &path).unwrap();
    let loaded = read_index(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(loaded, index);
    for s in graph.vertices() {
        let expected = oracle_distances(&graph, s);
        for t in graph.vertices() {
            assert_eq!(loaded.distance(s, t).unwrap(), expected.get(&t).copied());
        }
    }
}

#[rstest]
fn test_read_rejects_garbage() {
    let path = scratch("garbage.json");
    std::fs::write(&path, b"{ not an index").unwrap();
    let result = read_index(&path);
    std::fs::remove_file(&path).unwrap();
    assert!(result.is_err());
}

#[rstest]
fn test_read_missing_file() {
    assert!(read_index(&scratch("does-not-exist.json")).is_err());
}

#[rstest]
fn test_read_reports_misaligned_json_labels(path4: Graph) {
    let mut labels: Vec<VertexLabel> = build_index(&path4).unwrap().index.into();
    labels[0].pos[1] = 0;
    let path = scratch("misaligned.json");
    std::fs::write(&path, serde_json::to_vec(&labels).unwrap()).unwrap();

    let err = read_index(&path).unwrap_err();
    std::fs::remove_file(&path).unwrap();

    let chain = format!("{err:#}");
    assert!(chain.contains("decoding index from"), "{chain}");
    assert!(chain.contains("bag member 2 of vertex 1 is not in its ancestor chain"), "{chain}");
}

#[rstest]
fn test_msgpack_file_named_json_is_rejected(path4: Graph) {
    let index = build_index(&path4).unwrap().index;
    let packed = scratch("packed.msgpack");
    write_index(&index, &packed).unwrap();
    let renamed = scratch("packed.json");
    std::fs::rename(&packed, &renamed).unwrap();

    let result = read_index(&renamed);
    std::fs::remove_file(&renamed).unwrap();
    assert!(result.is_err());
}

#[rstest]
fn test_write_stats_as_json(path4: Graph) {
    let stats = build_index(&path4).unwrap().stats();
    let path = scratch("stats.json");
    write_stats(&stats, &path).unwrap();
    let written: serde_json::Value = serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(written["vertices"], 4);
    assert_eq!(written["treewidth"], 1);
    assert_eq!(written["label_entries"], 10);
}

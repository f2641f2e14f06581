// Tests for catalog source reading
// Test cases:
// - Round-trip: written document reads back identically
// - Missing file reports NotFound
// - Malformed JSON reports Parse
// - Omitted groups/items arrays default to empty (lenient document shape)

use super::*;
use tempfile::TempDir;

fn sample_doc() -> CatalogDoc {
    CatalogDoc {
        categories: vec![
            CategoryDoc {
                name: "Diabetes".to_string(),
                groups: vec![GroupDoc {
                    title: "Oral agents".to_string(),
                    items: vec!["Metformin 500mg".to_string(), "Glimepiride 2mg".to_string()],
                }],
            },
            CategoryDoc {
                name: "Hypertension".to_string(),
                groups: vec![],
            },
        ],
    }
}

#[test]
fn test_file_source_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("catalog.json");
    let doc = sample_doc();
    std::fs::write(&path, serde_json::to_string_pretty(&doc).unwrap()).unwrap();

    let source = FileCatalogSource::new(path);
    assert_eq!(source.read().unwrap(), doc);
}

#[test]
fn test_missing_file_is_not_found() {
    let temp_dir = TempDir::new().unwrap();
    let source = FileCatalogSource::new(temp_dir.path().join("absent.json"));

    assert!(matches!(
        source.read(),
        Err(CatalogSourceError::NotFound(_))
    ));
}

#[test]
fn test_malformed_document_is_parse_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("catalog.json");
    std::fs::write(&path, "{ not json").unwrap();

    let source = FileCatalogSource::new(path);
    assert!(matches!(source.read(), Err(CatalogSourceError::Parse(_))));
}

#[test]
fn test_omitted_collections_default_to_empty() {
    let doc: CatalogDoc =
        serde_json::from_str(r#"{"categories":[{"name":"Cardiology"}]}"#).unwrap();

    assert_eq!(doc.categories.len(), 1);
    assert_eq!(doc.categories[0].name, "Cardiology");
    assert!(doc.categories[0].groups.is_empty());
}

#[test]
fn test_static_source_returns_document() {
    let source = StaticCatalogSource::new(sample_doc());
    assert_eq!(source.read().unwrap(), sample_doc());
}

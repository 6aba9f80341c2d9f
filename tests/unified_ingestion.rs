use std::io::Write;

use tabular_report::ingestion::{read_sources, SourceOptions};
use tabular_report::ReportError;

const PRODUCTS: &str = "tests/fixtures/products.csv";
const EXTRA: &str = "tests/fixtures/products_extra.csv";

#[test]
fn concatenates_files_in_argument_order() {
    let rs = read_sources(&[PRODUCTS, EXTRA], &SourceOptions::default()).unwrap();
    assert_eq!(rs.row_count(), 10);
    assert_eq!(rs.rows[0].get("name"), Some("iphone 15 pro"));
    assert_eq!(rs.rows[5].get("name"), Some("poco x5 pro"));

    let reversed = read_sources(&[EXTRA, PRODUCTS], &SourceOptions::default()).unwrap();
    assert_eq!(reversed.rows[0].get("name"), Some("poco x5 pro"));
}

#[test]
fn missing_file_anywhere_fails_the_whole_batch() {
    let err = read_sources(&[PRODUCTS, "tests/fixtures/missing.csv"], &SourceOptions::default())
        .unwrap_err();
    assert!(matches!(err, ReportError::ResourceNotFound { .. }));
    assert!(err.is_resource_error());
}

#[test]
fn wrong_extension_fails_before_reading_earlier_files() {
    // An unreadable first file would surface a csv error if it were opened before the
    // extension check on the second path.
    let mut bad = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    bad.write_all(b"brand,price\n\xff,1\n").unwrap();
    bad.flush().unwrap();

    let err = read_sources(
        &[bad.path().to_str().unwrap(), "tests/fixtures/not_csv.txt"],
        &SourceOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, ReportError::InvalidExtension { ref expected, .. } if expected == "csv"));
}

#[test]
fn custom_extension_and_delimiter() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prices.tsv");
    std::fs::write(&path, "brand\tprice\nApple\t1000\n").unwrap();

    let options = SourceOptions {
        delimiter: b'\t',
        extension: "tsv".to_string(),
        ..Default::default()
    };
    let rs = read_sources(&[path], &options).unwrap();
    assert_eq!(rs.row_count(), 1);
    assert_eq!(rs.rows[0].get("price"), Some("1000"));
}

#[test]
fn header_only_file_contributes_no_rows() {
    let rs = read_sources(&["tests/fixtures/header_only.csv", PRODUCTS], &SourceOptions::default())
        .unwrap();
    assert_eq!(rs.row_count(), 5);
}

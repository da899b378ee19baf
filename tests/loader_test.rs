//! Integration tests for loading labeled CSV files.

use std::io::Write;

use spamscore::classifier::{Class, Trainer};
use spamscore::config::LoaderConfig;
use spamscore::loader::CsvSampleLoader;
use tempfile::NamedTempFile;

fn write_csv(content: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_sms_collection_layout() {
    let file = write_csv(
        b"v1,v2,,,\n\
          ham,\"Go until jurong point, crazy..\",,,\n\
          ham,Ok lar... Joking wif u oni...,,,\n\
          spam,Free entry in 2 a wkly comp to win FA Cup final tkts,,,\n\
          ,missing class tag here,,,\n",
    );

    let samples = CsvSampleLoader::new().load_path(file.path()).unwrap();

    assert_eq!(samples.len(), 3);
    assert_eq!(samples.good().len(), 2);
    assert_eq!(samples.bad().len(), 1);
    assert_eq!(samples.get("Go until jurong point, crazy.."), Some(true));
    assert_eq!(samples.skipped_records(), 2);
}

#[test]
fn test_malformed_record_never_reaches_training() {
    let file = write_csv(b"ham,see you at lunch\n,orphan message text\nspam,claim your prize\n");

    let samples = CsvSampleLoader::new().load_path(file.path()).unwrap();
    assert_eq!(samples.get("orphan message text"), None);

    let (classifier, report) = Trainer::default().train(&samples);
    assert_eq!(report.learned_count, 2);
    assert_eq!(classifier.table().count_for(Class::Good, "orphan"), 0);
    assert_eq!(classifier.table().count_for(Class::Bad, "orphan"), 0);
}

#[test]
fn test_custom_loader_config() {
    let file = write_csv(b"label\tmessage\nok\tfine by me\nbad\tbuy now cheap\n");
    let config = LoaderConfig {
        delimiter: '\t',
        has_headers: true,
        good_tag: "ok".to_string(),
        min_tag_len: 0,
        ..Default::default()
    };

    let samples = CsvSampleLoader::with_config(config).load_path(file.path()).unwrap();

    assert_eq!(samples.len(), 2);
    assert_eq!(samples.get("fine by me"), Some(true));
    assert_eq!(samples.get("buy now cheap"), Some(false));
}

#[test]
fn test_missing_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let err = CsvSampleLoader::new()
        .load_path(dir.path().join("absent.csv"))
        .unwrap_err();

    assert!(err.is_load_error());
    assert!(err.to_string().contains("absent.csv"));
}

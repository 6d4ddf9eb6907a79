//! Behavioral tests for the data store loader and writer.

#![allow(clippy::unwrap_used)]

use std::net::Ipv4Addr;

use snmpsim_api::{Grammar, Record, Value};
use snmpsim_engine::{
    BadLinePolicy, DataStore, DatafileConfig, EngineError, GrammarRegistry, run_in_new_runtime_with_return,
};

const PUBLIC_SNMPREC: &str = "\
1.3.6.1.2.1.1.1.0|4|Linux zeus 4.8.6-5-ARCH #1 SMP PREEMPT x86_64
1.3.6.1.2.1.1.2.0|6|1.3.6.1.4.1.8072.3.2.10
1.3.6.1.2.1.1.3.0|67|233425120
1.3.6.1.2.1.1.4.0|4|SNMP Laboratories, info@snmplabs.com
1.3.6.1.2.1.1.5.0|4|zeus.snmplabs.com
1.3.6.1.2.1.1.6.0|4|San Francisco, California, United States
1.3.6.1.2.1.1.7.0|2|72
1.3.6.1.2.1.2.2.1.6.2|4x|00127962f940
1.3.6.1.2.1.4.20.1.1.10.0.0.1|64x|0a000001
1.3.6.1.2.1.31.1.1.1.15.2|66|100
";

fn default_store() -> DataStore {
    let registry = GrammarRegistry::with_defaults();
    DataStore::for_path(&registry, &DatafileConfig::default(), "public.snmprec".as_ref()).unwrap()
}

// ============================================================================
// Load
// ============================================================================

#[tokio::test]
async fn test_load_data_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("public.snmprec");
    tokio::fs::write(&path, PUBLIC_SNMPREC).await.unwrap();

    let report = default_store().load(&path).await.unwrap();
    assert_eq!(report.records.len(), 10);
    assert_eq!(report.skipped, 0);

    let mac = report.records.iter().find(|r| r.oid == "1.3.6.1.2.1.2.2.1.6.2").unwrap();
    let store = default_store();
    assert_eq!(
        store.grammar().decode(mac).unwrap(),
        Value::OctetString(vec![0x00, 0x12, 0x79, 0x62, 0xf9, 0x40])
    );

    let ip = report.records.iter().find(|r| r.tag == "64x").unwrap();
    assert_eq!(store.grammar().decode(ip).unwrap(), Value::IpAddress(Ipv4Addr::new(10, 0, 0, 1)));
}

#[tokio::test]
async fn test_load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = default_store().load(dir.path().join("absent.snmprec")).await.unwrap_err();
    assert!(matches!(err, EngineError::Io(_)));
}

#[tokio::test]
async fn test_load_skip_policy() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.snmprec");
    tokio::fs::write(&path, "1.3.6.1.2.1.1.5.0|4|zeus\nnot a record\n1.3.6.1.2.1.1.7.0|3|72\n")
        .await
        .unwrap();

    let config = DatafileConfig { on_bad_line: BadLinePolicy::Skip, ..Default::default() };
    let store = DataStore::for_path(&GrammarRegistry::with_defaults(), &config, &path).unwrap();
    let report = store.load(&path).await.unwrap();
    assert_eq!(report.records.len(), 1);
    assert_eq!(report.skipped, 2);

    let strict = default_store();
    let err = strict.load(&path).await.unwrap_err();
    assert!(err.as_codec().unwrap().is_format());
}

#[tokio::test]
async fn test_non_utf8_line_follows_bad_line_policy() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("binary.snmprec");
    let mut content = b"1.3.6.1.2.1.1.5.0|4|zeus\n1.3.6.1.2.1.1.6.0|4|".to_vec();
    content.extend_from_slice(&[0xff, 0xfe]);
    content.extend_from_slice(b"\n1.3.6.1.2.1.1.7.0|2|72\n");
    tokio::fs::write(&path, &content).await.unwrap();

    let config = DatafileConfig { on_bad_line: BadLinePolicy::Skip, ..Default::default() };
    let store = DataStore::for_path(&GrammarRegistry::with_defaults(), &config, &path).unwrap();
    let report = store.load(&path).await.unwrap();
    let oids: Vec<_> = report.records.iter().map(|r| r.oid.as_str()).collect();
    assert_eq!(oids, ["1.3.6.1.2.1.1.5.0", "1.3.6.1.2.1.1.7.0"]);
    assert_eq!(report.skipped, 1);

    let err = default_store().load(&path).await.unwrap_err();
    let codec = err.as_codec().unwrap();
    assert!(codec.is_format());
    assert!(codec.message.contains("binary.snmprec:2: "), "{}", codec.message);
}

#[tokio::test]
async fn test_load_without_trailing_newline() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("short.snmprec");
    tokio::fs::write(&path, "1.3.6.1.2.1.1.5.0|4|zeus\r\n1.3.6.1.2.1.1.7.0|2|72").await.unwrap();

    let report = default_store().load(&path).await.unwrap();
    assert_eq!(
        report.records,
        vec![
            Record::new("1.3.6.1.2.1.1.5.0", "4", "zeus"),
            Record::new("1.3.6.1.2.1.1.7.0", "2", "72"),
        ]
    );
}

#[test]
fn test_unknown_extension_without_configured_grammar() {
    let registry = GrammarRegistry::with_defaults();
    let err = DataStore::for_path(&registry, &DatafileConfig::default(), "public.walk".as_ref()).unwrap_err();
    assert!(matches!(err, EngineError::UnknownGrammar(_)));

    let config = DatafileConfig { grammar: Some("snmprec".to_string()), ..Default::default() };
    assert!(DataStore::for_path(&registry, &config, "public.walk".as_ref()).is_ok());
}

// ============================================================================
// Write
// ============================================================================

#[tokio::test]
async fn test_write_then_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.snmprec");
    let store = default_store();

    let records = vec![
        store.grammar().encode("1.3.6.1.2.1.1.5.0", &Value::from("zeus")).unwrap(),
        store.grammar().encode("1.3.6.1.2.1.1.6.0", &Value::from("trailing ")).unwrap(),
        store.grammar().encode("1.3.6.1.2.1.1.7.0", &Value::Integer32(72)).unwrap(),
        Record::new("1.3.6.1.2.1.1.9.1.3.1", "4", "a|b"),
    ];
    assert_eq!(store.write(&path, &records).await.unwrap(), 4);

    let content = tokio::fs::read_to_string(&path).await.unwrap();
    assert!(content.contains("1.3.6.1.2.1.1.6.0|4x|747261696c696e6720\n"));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);

    let report = store.load(&path).await.unwrap();
    assert_eq!(report.records, records);
}

#[tokio::test]
async fn test_write_rejects_invalid_record_before_touching_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.snmprec");

    let err = default_store()
        .write(&path, &[Record::new("1.3.6.1", "42", "x")])
        .await
        .unwrap_err();
    assert!(err.as_codec().unwrap().is_decode());
    assert!(!path.exists());
}

#[tokio::test]
async fn test_write_rejects_records_that_would_not_read_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("w.snmprec");
    let store = default_store();

    for value in ["zeus ", "a\nb", "a\rb"] {
        let err = store
            .write(&path, &[Record::new("1.3.6.1.2.1.1.5.0", "4", value)])
            .await
            .unwrap_err();
        assert!(err.as_codec().unwrap().is_format(), "{value:?}");
    }
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_failed_replace_leaves_no_temp_file() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("occupied.snmprec");
    std::fs::create_dir(&target).unwrap();
    std::fs::write(target.join("keep"), "x").unwrap();

    let err = default_store()
        .write(&target, &[Record::new("1.3.6.1.2.1.1.5.0", "4", "zeus")])
        .await
        .unwrap_err();
    assert!(matches!(err, EngineError::Io(_)));

    let names: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(names, ["occupied.snmprec"]);
}

// ============================================================================
// Driving the store from blocking code
// ============================================================================

#[test]
fn test_store_load_through_bridge() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("public.snmprec");
    std::fs::write(&path, PUBLIC_SNMPREC).unwrap();

    let store = default_store();
    let report = run_in_new_runtime_with_return(async move { store.load(path).await })
        .unwrap()
        .unwrap();
    assert_eq!(report.records.len(), 10);
}

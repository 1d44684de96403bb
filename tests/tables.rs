mod common;

use std::fmt::Display;

use cassette::avec::{Options, decode_reader, rows::Record};
use csv::ReaderBuilder;

const FIXTURE: &str = "tests/fixtures/short-ride.csv";

fn cell<T: Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn columns(record: &Record) -> Vec<String> {
    vec![
        cell(record.timestamp.map(|t| t.to_rfc3339())),
        cell(record.latitude),
        cell(record.longitude),
        cell(record.altitude),
        cell(record.heart_rate),
        cell(record.distance),
        cell(record.speed),
        record.activity_type.clone(),
    ]
}

#[test]
fn records_match_fixture() {
    common::init_tracing();
    let r = common::short_ride().build();
    let decoded = decode_reader(&mut r.as_slice(), &Options::default()).unwrap();

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(FIXTURE)
        .unwrap();

    let expected: Vec<Vec<String>> = reader
        .records()
        .map(|r| r.unwrap().iter().map(|f| f.to_string()).collect())
        .collect();

    let found: Vec<Vec<String>> = decoded.tables.records.iter().map(columns).collect();

    assert_eq!(found, expected);
}

mod common;

use cassette::{
    FramingError, Warning,
    avec::{Options, decode_slice},
    sans::{
        Decoder,
        data::{DeveloperValue, Value},
    },
};
use common::{FitBuilder, MORNING, base, init_tracing, short_ride};

#[test]
fn short_ride_tables() {
    init_tracing();
    let r = short_ride().build();
    let options = Options::default().with_file_source("short-ride.fit");
    let decoded = decode_slice(&r, &options).unwrap();
    let tables = &decoded.tables;

    assert!(decoded.diagnostics.is_empty());

    assert_eq!(tables.activities.len(), 1);
    let activity = &tables.activities[0];
    assert_eq!(activity.activity_id, 12345);
    assert_eq!(activity.device_serial_number, Some(12345));
    assert_eq!(activity.file_type, "Activity");
    assert_eq!(activity.file_id, "");
    assert_eq!(activity.manufacturer, "Garmin");
    assert_eq!(activity.product, "3121");
    assert_eq!(activity.sport, "Cycling");
    assert_eq!(activity.sub_sport, "Road");
    assert_eq!(activity.total_distance, Some(1500.0));
    assert_eq!(activity.total_calories, Some(42));
    assert_eq!(activity.avg_heart_rate, Some(123));
    assert_eq!(activity.total_timer_time, Some(2.0));
    assert_eq!(activity.timestamp.unwrap().timestamp(), 1_714_543_202);
    assert_eq!(activity.start_time.unwrap().timestamp(), 1_714_543_200);
    assert_eq!(activity.file_source, "short-ride.fit");

    assert_eq!(tables.sessions.len(), 1);
    let session = &tables.sessions[0];
    assert_eq!(session.session_id, 1);
    assert_eq!(session.activity_id, Some(12345));
    assert_eq!(session.total_distance, Some(1500.0));
    assert_eq!(session.sport, "Cycling");
    assert_eq!(session.num_laps, Some(1));

    assert_eq!(tables.laps.len(), 1);
    let lap = &tables.laps[0];
    assert_eq!((lap.lap_id, lap.session_id, lap.activity_id), (1, Some(1), Some(12345)));
    assert_eq!(lap.total_elapsed_time, Some(2.0));
    assert_eq!(lap.lap_trigger, "Session End");

    assert_eq!(tables.records.len(), 3);
    assert!(tables.records.iter().all(|r| r.activity_type == "Cycling"));
    assert!(tables.records.iter().all(|r| r.file_source == "short-ride.fit"));

    let times: Vec<_> = tables
        .records
        .iter()
        .map(|r| r.timestamp.unwrap().timestamp())
        .collect();
    assert_eq!(times, [1_714_543_200, 1_714_543_201, 1_714_543_202]);

    let first = &tables.records[0];
    assert_eq!(first.latitude, Some(45.0));
    assert_eq!(first.longitude, Some(-22.5));
    assert_eq!(first.altitude, Some(20.0));
    assert_eq!(first.heart_rate, Some(120));
    assert_eq!(first.speed, Some(5.0));

    // Invalid markers are absent, never zero or the maximum.
    let last = &tables.records[2];
    assert_eq!(last.latitude, None);
    assert_eq!(last.longitude, None);
    assert_eq!(last.altitude, None);
    assert_eq!(last.heart_rate, None);
    assert_eq!(last.distance, Some(10.0));
}

#[test]
fn checksum_mismatch_is_a_warning() {
    init_tracing();
    let clean = short_ride().build();
    let mut r = clean.clone();
    let n = r.len();
    r[n - 1] ^= 0xFF;

    let decoded = decode_slice(&r, &Options::default()).unwrap();
    assert!(matches!(
        decoded.diagnostics[..],
        [cassette::avec::Diagnostic {
            warning: Warning::ChecksumMismatch { .. },
            ..
        }]
    ));

    let expected = decode_slice(&clean, &Options::default()).unwrap();
    assert_eq!(decoded.tables, expected.tables);

    let unchecked = decode_slice(&r, &Options::default().with_checksum(false)).unwrap();
    assert!(unchecked.diagnostics.is_empty());
}

#[test]
fn header_checksum_mismatch_is_a_warning() {
    let mut r = short_ride().build();
    r[12] ^= 0xFF;

    let decoded = decode_slice(&r, &Options::default()).unwrap();
    let warnings: Vec<_> = decoded.diagnostics.iter().map(|d| &d.warning).collect();

    // The trailing check covers the header check, so both disagree.
    assert!(matches!(warnings[0], Warning::HeaderChecksumMismatch { .. }));
    assert!(matches!(warnings[1], Warning::ChecksumMismatch { .. }));
    assert_eq!(decoded.tables.records.len(), 3);

    // Disabling verification skips the comparison rather than hiding its result.
    let decoder = Decoder::with_checksum(&r, false).unwrap();
    assert!(decoder.warnings().is_empty());

    let unchecked = decode_slice(&r, &Options::default().with_checksum(false)).unwrap();
    assert!(unchecked.diagnostics.is_empty());
}

#[test]
fn legacy_header() {
    let r = short_ride().build_legacy();
    let decoded = decode_slice(&r, &Options::default()).unwrap();
    assert!(decoded.diagnostics.is_empty());
    assert_eq!(decoded.tables.records.len(), 3);
}

#[test]
fn redefinition_uses_latest_layout() {
    let r = FitBuilder::new()
        .define(3, 20, &[(253, 4, base::UINT32), (3, 1, base::UINT8)])
        .data(3, &[&MORNING.to_le_bytes(), &[150]])
        .define(3, 20, &[(253, 4, base::UINT32), (7, 2, base::UINT16)])
        .data(3, &[&(MORNING + 1).to_le_bytes(), &250u16.to_le_bytes()])
        .build();

    let records = decode_slice(&r, &Options::default()).unwrap().tables.records;

    assert_eq!((records[0].heart_rate, records[0].power), (Some(150), None));
    assert_eq!((records[1].heart_rate, records[1].power), (None, Some(250)));
}

#[test]
fn big_endian_messages() {
    let r = FitBuilder::new()
        .define_big_endian(0, 20, &[(253, 4, base::UINT32), (5, 4, base::UINT32)])
        .data(0, &[&MORNING.to_be_bytes(), &123_456u32.to_be_bytes()])
        .build();

    let records = decode_slice(&r, &Options::default()).unwrap().tables.records;

    assert_eq!(records[0].timestamp.unwrap().timestamp(), 1_714_543_200);
    assert_eq!(records[0].distance, Some(1234.56));
}

#[test]
fn compressed_timestamps() {
    let r = FitBuilder::new()
        .define(0, 20, &[(253, 4, base::UINT32), (3, 1, base::UINT8)])
        .define(1, 20, &[(3, 1, base::UINT8)])
        .data(0, &[&MORNING.to_le_bytes(), &[100]])
        .compressed(1, 5, &[&[101]])
        .compressed(1, 3, &[&[102]])
        .build();

    let records = decode_slice(&r, &Options::default()).unwrap().tables.records;
    let times: Vec<_> = records
        .iter()
        .map(|r| r.timestamp.unwrap().timestamp() - 1_714_543_200)
        .collect();

    // The second offset is behind the first, so it rolls over.
    assert_eq!(MORNING % 32, 0);
    assert_eq!(times, [0, 5, 35]);
}

#[test]
fn compressed_timestamp_without_base() {
    let r = FitBuilder::new()
        .define(1, 20, &[(3, 1, base::UINT8)])
        .compressed(1, 5, &[&[101]])
        .build();

    let decoded = decode_slice(&r, &Options::default()).unwrap();

    assert_eq!(decoded.tables.records[0].timestamp, None);
    assert_eq!(decoded.tables.records[0].heart_rate, Some(101));
    assert_eq!(
        decoded.diagnostics[0].warning,
        Warning::MissingTimestampBase { local: 1 }
    );
}

#[test]
fn undefined_local_type_resumes_at_next_definition() {
    init_tracing();
    let r = FitBuilder::new()
        .define(0, 20, &[(253, 4, base::UINT32)])
        .data(0, &[&MORNING.to_le_bytes()])
        .raw(&[0x05, 0x41, 0x07, 0xC3])
        .define(0, 20, &[(253, 4, base::UINT32), (3, 1, base::UINT8)])
        .data(0, &[&(MORNING + 1).to_le_bytes(), &[130]])
        .build();

    let decoded = decode_slice(&r, &Options::default()).unwrap();
    let records = &decoded.tables.records;

    assert_eq!(records.len(), 2);
    assert_eq!(records[1].heart_rate, Some(130));
    assert_eq!(decoded.diagnostics.len(), 1);
    assert!(matches!(
        decoded.diagnostics[0].warning,
        Warning::UndefinedLocalType {
            local: 5,
            offset: 28,
            skipped: 3
        }
    ));
}

#[test]
fn undefined_local_type_without_later_definition() {
    let r = FitBuilder::new()
        .define(0, 20, &[(253, 4, base::UINT32)])
        .data(0, &[&MORNING.to_le_bytes()])
        .raw(&[0x05, 0x41, 0, 0, 0])
        .data(0, &[&(MORNING + 1).to_le_bytes()])
        .build();

    // The payload's length is unknown, so the rest of the section is dropped
    // rather than misread.
    let decoded = decode_slice(&r, &Options::default()).unwrap();

    assert_eq!(decoded.tables.records.len(), 1);
    assert_eq!(decoded.diagnostics.len(), 1);
    assert!(matches!(
        decoded.diagnostics[0].warning,
        Warning::UndefinedLocalType {
            local: 5,
            skipped: 9,
            ..
        }
    ));
}

/// An undefined message whose payload resembles a definition, followed by a
/// message that runs past the end of the section.
fn misleading_payload() -> FitBuilder {
    FitBuilder::new()
        .define(0, 20, &[(253, 4, base::UINT32)])
        .data(0, &[&MORNING.to_le_bytes()])
        .raw(&[0x05, 0x41, 0, 0, 20, 0, 1, 253, 4, base::UINT32, 0x01, 9])
}

#[test]
fn misread_records_after_undefined_type_are_dropped() {
    let r = misleading_payload().build();

    let decoded = decode_slice(&r, &Options::default()).unwrap();
    let warnings: Vec<_> = decoded.diagnostics.iter().map(|d| &d.warning).collect();

    assert_eq!(decoded.tables.records.len(), 1);
    assert_eq!(warnings.len(), 2);
    assert!(matches!(
        warnings[0],
        Warning::UndefinedLocalType { skipped: 0, .. }
    ));
    assert!(matches!(
        warnings[1],
        Warning::UnreadableRecords { count: 2, .. }
    ));
}

#[test]
fn chained_document_after_undefined_type() {
    let mut r = misleading_payload().build();
    r.extend(short_ride().build());

    let decoded = decode_slice(&r, &Options::default()).unwrap();

    assert_eq!(decoded.tables.records.len(), 4);
    assert_eq!(decoded.tables.activities.len(), 1);
    assert!(
        !decoded
            .diagnostics
            .iter()
            .any(|d| matches!(d.warning, Warning::ChecksumMismatch { .. }))
    );
}

#[test]
fn invalid_leading_array_element() {
    let r = FitBuilder::new()
        .define(0, 20, &[(253, 4, base::UINT32), (3, 2, base::UINT8)])
        .data(0, &[&MORNING.to_le_bytes(), &[0xFF, 120]])
        .data(0, &[&(MORNING + 1).to_le_bytes(), &[130, 0xFF]])
        .build();

    let records = decode_slice(&r, &Options::default()).unwrap().tables.records;

    // Elements keep their position, so the second never stands in for the first.
    assert_eq!(records[0].heart_rate, None);
    assert_eq!(records[1].heart_rate, Some(130));
}

#[test]
fn malformed_field_is_skipped() {
    let r = FitBuilder::new()
        .define(
            0,
            20,
            &[(253, 4, base::UINT32), (5, 3, base::UINT32), (3, 1, base::UINT8)],
        )
        .data(0, &[&MORNING.to_le_bytes(), &[1, 2, 3], &[140]])
        .build();

    let decoded = decode_slice(&r, &Options::default()).unwrap();
    let record = &decoded.tables.records[0];

    assert_eq!(record.distance, None);
    assert_eq!(record.heart_rate, Some(140));
    assert!(matches!(
        decoded.diagnostics[0].warning,
        Warning::MalformedDefinition { field: 5, size: 3, .. }
    ));
}

#[test]
fn decoding_is_idempotent() {
    let r = short_ride().build();
    let first = decode_slice(&r, &Options::default()).unwrap();
    let second = decode_slice(&r, &Options::default()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn chained_documents() {
    let mut r = short_ride().build();
    r.extend(short_ride().build());

    let decoded = decode_slice(&r, &Options::default()).unwrap();
    let tables = &decoded.tables;

    assert!(decoded.diagnostics.is_empty());
    assert_eq!(tables.activities.len(), 2);
    assert_eq!(tables.records.len(), 6);
    assert_eq!(tables.sessions[1].session_id, 2);
    assert_eq!(tables.laps[1].session_id, Some(2));
}

#[test]
fn trailing_garbage_is_a_warning() {
    let mut r = short_ride().build();
    r.extend([0xDE, 0xAD]);

    let decoded = decode_slice(&r, &Options::default()).unwrap();
    assert_eq!(decoded.tables.records.len(), 3);
    assert_eq!(
        decoded.diagnostics[0].warning,
        Warning::TrailingBytes { count: 2 }
    );
}

#[test]
fn framing_errors() {
    let r = short_ride().build();

    assert_eq!(
        decode_slice(&r[..10], &Options::default()),
        Err(FramingError::TruncatedHeader { len: 10 })
    );

    let mut bad = r.clone();
    bad[8..12].copy_from_slice(b".FOT");
    assert_eq!(
        decode_slice(&bad, &Options::default()),
        Err(FramingError::NotFitData)
    );

    let mut bad = r.clone();
    bad[0] = 13;
    assert_eq!(
        decode_slice(&bad, &Options::default()),
        Err(FramingError::UnknownHeaderLength(13))
    );

    let short = &r[..r.len() - 3];
    assert!(matches!(
        decode_slice(short, &Options::default()),
        Err(FramingError::DataOverrun { .. })
    ));
}

#[test]
fn message_past_end_of_records() {
    let r = FitBuilder::new()
        .define(0, 20, &[(253, 4, base::UINT32)])
        .raw(&[0x00, 1, 2])
        .build();

    assert!(matches!(
        decode_slice(&r, &Options::default()),
        Err(FramingError::TruncatedMessage { .. })
    ));
}

#[test]
fn missing_trailing_checksum() {
    let r = short_ride().build();
    let decoded = decode_slice(&r[..r.len() - 2], &Options::default()).unwrap();

    assert_eq!(decoded.tables.records.len(), 3);
    assert_eq!(decoded.diagnostics[0].warning, Warning::MissingChecksum);
}

#[test]
fn developer_fields() {
    let r = FitBuilder::new()
        .define(
            0,
            206,
            &[
                (0, 1, base::UINT8),
                (1, 1, base::UINT8),
                (2, 1, base::UINT8),
                (3, 10, base::STRING),
                (8, 4, base::STRING),
            ],
        )
        .data(0, &[&[0], &[7], &[base::UINT16], b"Doughnut\0\0", b"cnt\0"])
        .define_with_developer(1, 20, &[(253, 4, base::UINT32)], &[(7, 2, 0), (9, 2, 0)])
        .data(1, &[&MORNING.to_le_bytes(), &300u16.to_le_bytes(), &[0xAB, 0xCD]])
        .build();

    let mut decoder = Decoder::new(&r).unwrap();
    let messages: Vec<_> = decoder.by_ref().collect::<Result<_, _>>().unwrap();

    assert!(decoder.warnings().is_empty());
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].global, 206);

    let record = &messages[1];
    assert_eq!(record.timestamp(), Some(MORNING));
    assert_eq!(
        record.developer_fields,
        [
            DeveloperValue {
                developer_data_index: 0,
                number: 7,
                name: Some("Doughnut".into()),
                value: Value::U16(300),
            },
            DeveloperValue {
                developer_data_index: 0,
                number: 9,
                name: None,
                value: Value::Bytes(vec![0xAB, 0xCD]),
            },
        ]
    );

    // Developer fields never reach the tables, but the message still does.
    let decoded = decode_slice(&r, &Options::default()).unwrap();
    assert_eq!(decoded.tables.records.len(), 1);
}

#[test]
fn decoder_fuses_after_framing_error() {
    let r = FitBuilder::new()
        .define(0, 20, &[(253, 4, base::UINT32)])
        .data(0, &[&MORNING.to_le_bytes()])
        .raw(&[0x00, 1])
        .build();

    let mut decoder = Decoder::new(&r).unwrap();

    assert!(matches!(decoder.next(), Some(Ok(_))));
    assert!(matches!(decoder.next(), Some(Err(_))));
    assert_eq!(decoder.next(), None);
}

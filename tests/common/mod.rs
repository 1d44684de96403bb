#![allow(dead_code)]

use cassette::sans::check::compute_crc;
use tracing_subscriber::EnvFilter;

pub const FIT_PROFILE: u16 = 2132;

/// Base type bytes, as written in definition messages.
pub mod base {
    pub const ENUM: u8 = 0x00;
    pub const UINT8: u8 = 0x02;
    pub const SINT16: u8 = 0x83;
    pub const UINT16: u8 = 0x84;
    pub const SINT32: u8 = 0x85;
    pub const UINT32: u8 = 0x86;
    pub const STRING: u8 = 0x07;
    pub const UINT32Z: u8 = 0x8C;
    pub const BYTE: u8 = 0x0D;
}

/// Route `tracing` output through the test harness. Filter with `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Builder of synthetic FIT documents.
#[derive(Debug, Default, Clone)]
pub struct FitBuilder {
    records: Vec<u8>,
}

impl FitBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A little endian definition message; fields are `(number, size, base type)`.
    pub fn define(mut self, local: u8, global: u16, fields: &[(u8, u8, u8)]) -> Self {
        self.records.push(0x40 | local);
        self.records.extend([0, 0]);
        self.records.extend(global.to_le_bytes());
        self.push_fields(fields);
        self
    }

    pub fn define_big_endian(mut self, local: u8, global: u16, fields: &[(u8, u8, u8)]) -> Self {
        self.records.push(0x40 | local);
        self.records.extend([0, 1]);
        self.records.extend(global.to_be_bytes());
        self.push_fields(fields);
        self
    }

    /// A definition with developer fields, given as `(number, size, developer data index)`.
    pub fn define_with_developer(
        mut self,
        local: u8,
        global: u16,
        fields: &[(u8, u8, u8)],
        developer_fields: &[(u8, u8, u8)],
    ) -> Self {
        self.records.push(0x60 | local);
        self.records.extend([0, 0]);
        self.records.extend(global.to_le_bytes());
        self.push_fields(fields);
        self.push_fields(developer_fields);
        self
    }

    fn push_fields(&mut self, fields: &[(u8, u8, u8)]) {
        self.records.push(fields.len() as u8);
        for (number, size, base_type) in fields {
            self.records.extend([*number, *size, *base_type]);
        }
    }

    /// A data message with a normal header.
    pub fn data(mut self, local: u8, fields: &[&[u8]]) -> Self {
        self.records.push(local & 0x0F);
        self.records.extend(fields.concat());
        self
    }

    /// A data message with a compressed timestamp header.
    pub fn compressed(mut self, local: u8, time_offset: u8, fields: &[&[u8]]) -> Self {
        self.records
            .push(0x80 | (local & 0x03) << 5 | (time_offset & 0x1F));
        self.records.extend(fields.concat());
        self
    }

    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.records.extend_from_slice(bytes);
        self
    }

    /// A document with a 14-byte header and both check values.
    pub fn build(&self) -> Vec<u8> {
        let mut r = self.header(14);
        let crc = compute_crc(0, &r);
        r.extend(crc.to_le_bytes());
        self.finish(r)
    }

    /// A document with a 12-byte header.
    pub fn build_legacy(&self) -> Vec<u8> {
        let r = self.header(12);
        self.finish(r)
    }

    fn header(&self, size: u8) -> Vec<u8> {
        let mut r = vec![size, 0x20];
        r.extend(FIT_PROFILE.to_le_bytes());
        r.extend((self.records.len() as u32).to_le_bytes());
        r.extend(b".FIT");
        r
    }

    fn finish(&self, mut r: Vec<u8>) -> Vec<u8> {
        r.extend(&self.records);
        let crc = compute_crc(0, &r);
        r.extend(crc.to_le_bytes());
        r
    }
}

/// Seconds since the FIT epoch of 2024-05-01T06:00:00Z.
pub const MORNING: u32 = 1_714_543_200 - 631_065_600;

/// A cycling activity: file id (serial 12345), three records, one lap, one
/// session (sport 2, 1500 m), and an activity message.
pub fn short_ride() -> FitBuilder {
    FitBuilder::new()
        .define(
            0,
            0,
            &[
                (0, 1, base::ENUM),
                (1, 2, base::UINT16),
                (2, 2, base::UINT16),
                (3, 4, base::UINT32Z),
                (4, 4, base::UINT32),
            ],
        )
        .data(
            0,
            &[
                &[4],
                &1u16.to_le_bytes(),
                &3121u16.to_le_bytes(),
                &12345u32.to_le_bytes(),
                &MORNING.to_le_bytes(),
            ],
        )
        .define(
            1,
            20,
            &[
                (253, 4, base::UINT32),
                (0, 4, base::SINT32),
                (1, 4, base::SINT32),
                (2, 2, base::UINT16),
                (3, 1, base::UINT8),
                (5, 4, base::UINT32),
                (6, 2, base::UINT16),
            ],
        )
        .data(1, &[&record(MORNING, (1 << 29, -(1 << 28)), 2600, 120, 0, 5000)])
        .data(1, &[&record(MORNING + 1, (1 << 29, -(1 << 28)), 2605, 125, 500, 5000)])
        .data(1, &[&record(MORNING + 2, (i32::MAX, i32::MAX), 0xFFFF, 0xFF, 1000, 5000)])
        .define(
            2,
            19,
            &[
                (253, 4, base::UINT32),
                (2, 4, base::UINT32),
                (7, 4, base::UINT32),
                (9, 4, base::UINT32),
                (24, 1, base::ENUM),
            ],
        )
        .data(
            2,
            &[
                &(MORNING + 2).to_le_bytes(),
                &MORNING.to_le_bytes(),
                &2000u32.to_le_bytes(),
                &150_000u32.to_le_bytes(),
                &[7],
            ],
        )
        .define(
            3,
            18,
            &[
                (253, 4, base::UINT32),
                (2, 4, base::UINT32),
                (5, 1, base::ENUM),
                (6, 1, base::ENUM),
                (8, 4, base::UINT32),
                (9, 4, base::UINT32),
                (11, 2, base::UINT16),
                (16, 1, base::UINT8),
                (25, 2, base::UINT16),
                (26, 2, base::UINT16),
            ],
        )
        .data(
            3,
            &[
                &(MORNING + 2).to_le_bytes(),
                &MORNING.to_le_bytes(),
                &[2],
                &[7],
                &2000u32.to_le_bytes(),
                &150_000u32.to_le_bytes(),
                &42u16.to_le_bytes(),
                &[123],
                &0u16.to_le_bytes(),
                &1u16.to_le_bytes(),
            ],
        )
        .define(
            4,
            34,
            &[
                (253, 4, base::UINT32),
                (0, 4, base::UINT32),
                (1, 2, base::UINT16),
            ],
        )
        .data(
            4,
            &[
                &(MORNING + 2).to_le_bytes(),
                &2000u32.to_le_bytes(),
                &1u16.to_le_bytes(),
            ],
        )
}

/// The fields of a record message laid out by [`short_ride`].
pub fn record(
    timestamp: u32,
    (lat, long): (i32, i32),
    altitude: u16,
    heart_rate: u8,
    distance: u32,
    speed: u16,
) -> Vec<u8> {
    [
        &timestamp.to_le_bytes()[..],
        &lat.to_le_bytes(),
        &long.to_le_bytes(),
        &altitude.to_le_bytes(),
        &[heart_rate],
        &distance.to_le_bytes(),
        &speed.to_le_bytes(),
    ]
    .concat()
}

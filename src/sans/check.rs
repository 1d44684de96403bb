//! Cyclic redundancy checks over document bytes.
//!
//! FIT documents use CRC-16/ARC (reflected polynomial `0xA001`, initial value
//! zero), computed a nibble at a time.

const CRC_TABLE: [u16; 16] = [
    0x0000, 0xCC01, 0xD801, 0x1400, 0xF001, 0x3C00, 0x2800, 0xE401, 0xA001, 0x6C00, 0x7800,
    0xB401, 0x5000, 0x9C01, 0x8801, 0x4400,
];

/// Accumulate a slice of bytes into a cyclic redundancy check value.
pub fn compute_crc(init: u16, r: &[u8]) -> u16 {
    r.iter().fold(init, |acc, b| crc_byte(acc, *b))
}

/// Accumulate a single byte, low nibble first.
fn crc_byte(crc: u16, b: u8) -> u16 {
    let crc = crc_nibble(crc, b & 0xF);
    crc_nibble(crc, b >> 4)
}

fn crc_nibble(crc: u16, nibble: u8) -> u16 {
    let tmp = CRC_TABLE[(crc & 0xF) as usize];
    ((crc >> 4) & 0x0FFF) ^ tmp ^ CRC_TABLE[nibble as usize]
}

/// Comparison of a stored check value against the bytes it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    /// The stored value matches, or was zero (meaning 'not computed').
    Valid,
    /// The stored value differs from the calculated one.
    Mismatch { found: u16, calculated: u16 },
}

impl Check {
    /// Compare a stored check value against the bytes it covers.
    ///
    /// A stored value of zero is accepted, as encoders may omit the header
    /// check this way.
    pub fn header(covered: &[u8], found: u16) -> Self {
        let calculated = compute_crc(0, covered);
        if found == 0 || found == calculated {
            Self::Valid
        } else {
            Self::Mismatch { found, calculated }
        }
    }

    /// Compare a trailing document check value against the bytes it covers.
    pub fn document(covered: &[u8], found: u16) -> Self {
        let calculated = compute_crc(0, covered);
        if found == calculated {
            Self::Valid
        } else {
            Self::Mismatch { found, calculated }
        }
    }
}

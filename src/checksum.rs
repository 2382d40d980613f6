use crate::error::InvalidInput;
use log::{debug, trace};

/// Checksums the first `length` bytes of `data`.
///
/// Fails instead of reading past the slice, and rejects a zero `length`.
/// Use [`internet_checksum`] when the whole slice is wanted.
#[inline]
pub fn compute(data: &[u8], length: usize) -> Result<u16, InvalidInput> {
    if length == 0 {
        debug!("Rejected checksum over an empty buffer.");
        return Err(InvalidInput::Empty);
    }

    let Some(data) = data.get(..length) else {
        debug!(
            "Rejected checksum over {} bytes, only {} available.",
            length,
            data.len()
        );
        return Err(InvalidInput::OutOfBounds {
            length,
            available: data.len(),
        });
    };

    Ok(internet_checksum(data, 0))
}

/// Calculates the internet checksum for error checking.
///
/// `accumulator` seeds the sum, e.g. with a partial sum of data that is not
/// part of `data`. An empty slice yields the complement of the seed.
///
/// See: <https://datatracker.ietf.org/doc/html/rfc1071>.
#[inline]
pub fn internet_checksum(data: &[u8], accumulator: u32) -> u16 {
    !ones_complement_sum(data, accumulator)
}

/// Folded one's-complement sum of `data`, without the final complement.
#[inline]
pub fn ones_complement_sum(data: &[u8], accumulator: u32) -> u16 {
    fold(u64::from(accumulator) + sum_words(data))
}

/// Sums big-endian 16-bit words. A trailing odd byte is the high byte of a
/// word whose low byte is zero.
#[inline]
pub(crate) fn sum_words(data: &[u8]) -> u64 {
    let mut words = data.chunks_exact(2);
    let mut sum = 0u64;

    for word in &mut words {
        sum += u64::from(u16::from_be_bytes([word[0], word[1]]));
    }

    if let [last] = words.remainder() {
        sum += u64::from(*last) << 8;
    }

    sum
}

/// Folds carries above bit 15 back into the low 16 bits.
#[inline]
pub fn fold(mut sum: u64) -> u16 {
    while sum >> 16 != 0 {
        sum = (sum & 0xFFFF) + (sum >> 16);
    }

    sum as u16
}

/// Combines folded partial sums into one.
///
/// Each part must start at an even byte offset of the message.
#[inline]
pub fn combine(sums: &[u16]) -> u16 {
    fold(sums.iter().map(|&sum| u64::from(sum)).sum())
}

/// Verifies a buffer that already carries its checksum field.
#[inline]
pub fn verify_internet_checksum(data: &[u8], accumulator: u32) -> bool {
    internet_checksum(data, accumulator) == 0
}

/// Recomputes the checksum of `data` and compares it with `expected`.
#[inline]
pub fn matches(data: &[u8], expected: u16) -> bool {
    let actual = internet_checksum(data, 0);
    if actual != expected {
        trace!(
            "Checksum mismatch, expected {:#06x} but got {:#06x}.",
            expected,
            actual
        );
        return false;
    }

    true
}

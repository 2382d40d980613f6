use crate::checksum::{fold, sum_words};

/// Incremental internet checksum over a message split into chunks.
///
/// Chunks may have any length. An odd trailing byte is held back and paired
/// with the first byte of the next chunk, so the result does not depend on
/// where the message was split.
///
/// ```
/// use inet_checksum::{internet_checksum, stream::Checksum};
///
/// let seq = 5u32.to_be_bytes();
/// let payload = b"hello";
///
/// let mut checksum = Checksum::new();
/// checksum.update(&seq).update(payload);
///
/// assert_eq!(checksum.finish(), internet_checksum(b"\x00\x00\x00\x05hello", 0));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Checksum {
    sum: u64,
    pending: Option<u8>,
    len: usize,
}

impl Checksum {
    /// Creates an empty checksum.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a checksum seeded with a partial sum.
    #[inline]
    pub fn with_seed(accumulator: u32) -> Self {
        Self {
            sum: u64::from(accumulator),
            ..Self::default()
        }
    }

    /// Feeds the next chunk of the message.
    #[inline]
    pub fn update(&mut self, mut data: &[u8]) -> &mut Self {
        self.len += data.len();

        if let Some(high) = self.pending {
            let Some((&low, rest)) = data.split_first() else {
                return self;
            };
            self.sum += u64::from(u16::from_be_bytes([high, low]));
            self.pending = None;
            data = rest;
        }

        let even = data.len() & !1;
        self.sum += sum_words(&data[..even]);
        self.pending = data.get(even).copied();

        // Keeps the accumulator small across arbitrarily many chunks.
        self.sum = u64::from(fold(self.sum));

        self
    }

    /// Folded sum so far, with a pending odd byte padded by a zero.
    #[inline]
    pub fn sum(&self) -> u16 {
        let tail = self.pending.map_or(0, |high| u64::from(high) << 8);
        fold(self.sum + tail)
    }

    /// Returns the checksum of everything fed so far.
    #[inline]
    pub fn finish(&self) -> u16 {
        !self.sum()
    }

    /// Number of bytes fed so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no bytes were fed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

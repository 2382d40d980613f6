/*!
    # inet-checksum

    The 16-bit one's-complement checksum used by IPv4, ICMP, UDP and TCP (RFC 1071).

    No allocations, no std, no unsafe.

    ## Getting started

    ```toml
    [dependencies]
    inet-checksum = "0.1.0"
    ```

    ## Checksum over a buffer

    ```rust
    use inet_checksum::{compute, internet_checksum, InvalidInput};

    // Sums big-endian 16-bit words, folds the carries and complements the result.
    assert_eq!(compute(&[0x00, 0x01], 2), Ok(0xFFFE));

    // An odd trailing byte is the high byte of a zero-padded word.
    assert_eq!(internet_checksum(&[0xAB], 0), 0x54FF);

    // `compute` never reads past the slice and refuses empty input.
    assert_eq!(compute(&[0xAB], 0), Err(InvalidInput::Empty));
    ```

    ## Verifying

    ```rust
    use inet_checksum::{matches, verify_internet_checksum};

    // IPv4 header with its checksum field (0xb861) filled in.
    let header = [
        0x45, 0x00, 0x00, 0x73, 0x00, 0x00, 0x40, 0x00, 0x40, 0x11, 0xb8, 0x61, 0xc0, 0xa8,
        0x00, 0x01, 0xc0, 0xa8, 0x00, 0xc7,
    ];
    assert!(verify_internet_checksum(&header, 0));

    // Or compare a recomputed checksum with a transmitted field.
    assert!(matches(&[0x00, 0x01], 0xFFFE));
    ```

    ## Checksum over several chunks

    See [`stream::Checksum`].
*/

// Disables the standard library.
#![no_std]

// Statically guarantees that the code cannot be unsafe.
#![forbid(unsafe_code)]

pub mod checksum;
pub mod error;
pub mod stream;

pub use checksum::{
    combine, compute, fold, internet_checksum, matches, ones_complement_sum,
    verify_internet_checksum,
};
pub use error::InvalidInput;
pub use stream::Checksum;

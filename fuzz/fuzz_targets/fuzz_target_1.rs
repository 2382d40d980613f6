#![no_main]

use inet_checksum::{compute, internet_checksum, Checksum};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Never reads past the slice, whatever length is asked for.
    let length = data.first().map_or(0, |&n| usize::from(n));
    let _ = compute(data, length);

    let checksum = internet_checksum(data, 0);

    let mid = data.len() / 3;
    let mut stream = Checksum::new();
    stream.update(&data[..mid]).update(&data[mid..]);
    assert_eq!(stream.finish(), checksum);

    if data.len() % 2 == 1 {
        let mut padded = Checksum::new();
        padded.update(data).update(&[0]);
        assert_eq!(padded.finish(), checksum);
    }
});

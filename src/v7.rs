//! UUIDv7-related functionality

use crate::Uuid;
use rand::RngCore;
use std::time::{SystemTime, UNIX_EPOCH};

/// Generates a UUIDv7 object.
///
/// One call produces one value: the current Unix timestamp in milliseconds in
/// the leading 48 bits and fresh random data in the remaining 74. Values
/// generated within the same millisecond carry no ordering guarantee beyond
/// the timestamp itself.
///
/// # Examples
///
/// ```rust
/// use uuid74::uuid7;
///
/// let uuid = uuid7();
/// println!("{}", uuid); // e.g., "01809424-3e59-7c05-9219-566f82fff672"
/// println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
/// ```
pub fn uuid7() -> Uuid {
    uuid7_from(&mut rand::thread_rng())
}

/// Generates a UUIDv7 object using the specified random number generator.
///
/// # Examples
///
/// ```rust
/// use uuid74::uuid7_from;
///
/// let uuid = uuid7_from(&mut rand::rngs::OsRng);
/// assert_eq!(uuid.version(), 7);
/// ```
pub fn uuid7_from<R: RngCore>(rng: &mut R) -> Uuid {
    let unix_ts_ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock may have gone backwards")
        .as_millis() as u64;

    let mut bytes = [0u8; 16];
    rng.fill_bytes(&mut bytes);
    // the 48-bit timestamp field wraps at 2^48 ms (~year 10889)
    bytes[..6].copy_from_slice(&unix_ts_ms.to_be_bytes()[2..]);
    bytes[6] = (bytes[6] & 0x0f) | 0x70;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;
    Uuid::from(bytes)
}

#[cfg(test)]
mod tests {
    use super::uuid7;
    use crate::Uuid;

    const N_SAMPLES: usize = 200_000;
    thread_local!(static SAMPLES: Vec<Uuid> = (0..N_SAMPLES).map(|_| uuid7()).collect());

    /// Generates canonical string
    #[test]
    fn generates_canonical_string() {
        let pattern = r"^[0-9a-f]{8}-[0-9a-f]{4}-7[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$";
        let re = regex::Regex::new(pattern).unwrap();
        SAMPLES.with(|samples| {
            for e in samples {
                assert!(re.is_match(&e.to_string()));
            }
        });
    }

    /// Generates 200k identifiers without collision
    #[test]
    fn generates_200k_identifiers_without_collision() {
        use std::collections::HashSet;
        SAMPLES.with(|samples| {
            let s: HashSet<&Uuid> = samples.iter().collect();
            assert_eq!(s.len(), N_SAMPLES);
        });
    }

    /// Encodes up-to-date timestamp
    #[test]
    fn encodes_up_to_date_timestamp() {
        use std::time::{SystemTime, UNIX_EPOCH};
        for _ in 0..10_000 {
            let ts_now = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .expect("clock may have gone backwards")
                .as_millis() as i64;
            let timestamp = uuid7().unix_ts_ms() as i64;
            assert!((ts_now - timestamp).abs() < 16);
        }
    }

    /// Encodes non-decreasing timestamps across consecutive calls
    #[test]
    fn encodes_non_decreasing_timestamps_across_consecutive_calls() {
        SAMPLES.with(|samples| {
            for i in 1..N_SAMPLES {
                assert!(samples[i - 1].unix_ts_ms() <= samples[i].unix_ts_ms());
            }
        });
    }

    /// Sets constant bits and random bits properly
    #[test]
    fn sets_constant_bits_and_random_bits_properly() {
        // count '1' of each bit
        let bins = SAMPLES.with(|samples| {
            let mut bins = [0u32; 128];
            for e in samples {
                for (i, byte) in e.as_bytes().iter().enumerate() {
                    for j in 0..8 {
                        bins[i * 8 + j] += u32::from(byte >> (7 - j)) & 1;
                    }
                }
            }
            bins
        });

        // test if constant bits are all set to 1 or 0
        let n = N_SAMPLES as u32;
        assert_eq!(bins[48], 0, "version bit 48");
        assert_eq!(bins[49], n, "version bit 49");
        assert_eq!(bins[50], n, "version bit 50");
        assert_eq!(bins[51], n, "version bit 51");
        assert_eq!(bins[64], n, "variant bit 64");
        assert_eq!(bins[65], 0, "variant bit 65");

        // test if random bits are set to 1 at ~50% probability
        // set margin based on binom dist 99.999% confidence interval
        let margin = 4.417173 * (0.5 * 0.5 / N_SAMPLES as f64).sqrt();
        for i in (52..64).chain(66..128) {
            let p = bins[i] as f64 / N_SAMPLES as f64;
            assert!((p - 0.5).abs() < margin, "random bit {}: {}", i, p);
        }
    }
}

use std::{fmt, str};

use crate::ParseError;

/// Represents a Universally Unique IDentifier.
///
/// The bytes are stored in the canonical RFC 4122 big-endian order, i.e. the
/// same order in which they appear in the hyphenated textual form. Comparing
/// two values compares those bytes lexicographically, so UUIDv7 values sort by
/// creation time.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Uuid([u8; 16]);

impl Uuid {
    /// Nil UUID (00000000-0000-0000-0000-000000000000)
    pub const NIL: Self = Self([0x00; 16]);

    /// Max UUID (ffffffff-ffff-ffff-ffff-ffffffffffff)
    pub const MAX: Self = Self([0xff; 16]);

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Returns the version number recorded in the high nibble of octet 6.
    ///
    /// # Examples
    ///
    /// ```rust
    /// assert_eq!(uuid74::uuid7().version(), 7);
    /// assert_eq!(uuid74::uuid4().version(), 4);
    /// ```
    pub const fn version(&self) -> u8 {
        self.0[6] >> 4
    }

    /// Returns the 48-bit `unix_ts_ms` field as milliseconds since the Unix
    /// epoch.
    ///
    /// The field is only meaningful on UUIDv7 values; on any other version
    /// this is just a big-endian read of the first six octets.
    pub fn unix_ts_ms(&self) -> u64 {
        self.0[..6].iter().fold(0, |ts, &e| (ts << 8) | u64::from(e))
    }

    /// Creates a UUID byte array from UUIDv7 field values.
    ///
    /// # Panics
    ///
    /// Panics if any argument exceeds the capacity of its field (48, 12, and
    /// 62 bits, respectively).
    pub const fn from_fields_v7(unix_ts_ms: u64, rand_a: u16, rand_b: u64) -> Self {
        if unix_ts_ms >= 1 << 48 || rand_a >= 1 << 12 || rand_b >= 1 << 62 {
            panic!("invalid field value");
        }

        Self([
            (unix_ts_ms >> 40) as u8,
            (unix_ts_ms >> 32) as u8,
            (unix_ts_ms >> 24) as u8,
            (unix_ts_ms >> 16) as u8,
            (unix_ts_ms >> 8) as u8,
            unix_ts_ms as u8,
            0x70 | (rand_a >> 8) as u8,
            rand_a as u8,
            0x80 | (rand_b >> 56) as u8,
            (rand_b >> 48) as u8,
            (rand_b >> 40) as u8,
            (rand_b >> 32) as u8,
            (rand_b >> 24) as u8,
            (rand_b >> 16) as u8,
            (rand_b >> 8) as u8,
            rand_b as u8,
        ])
    }

    /// Returns the bytes in the mixed-endian field order used by Microsoft
    /// GUIDs: `time_low`, `time_mid`, and `time_hi_and_version` are each
    /// byte-reversed relative to the canonical layout, while the remaining
    /// eight octets keep their order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid74::Uuid;
    ///
    /// let x = "00112233-4455-6677-8899-aabbccddeeff".parse::<Uuid>()?;
    /// assert_eq!(
    ///     x.to_bytes_le(),
    ///     [
    ///         0x33, 0x22, 0x11, 0x00, 0x55, 0x44, 0x77, 0x66, //
    ///         0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff,
    ///     ]
    /// );
    /// assert_eq!(Uuid::from_bytes_le(x.to_bytes_le()), x);
    /// # Ok::<(), uuid74::ParseError>(())
    /// ```
    pub const fn to_bytes_le(self) -> [u8; 16] {
        let b = self.0;
        [
            b[3], b[2], b[1], b[0], b[5], b[4], b[7], b[6], //
            b[8], b[9], b[10], b[11], b[12], b[13], b[14], b[15],
        ]
    }

    /// Creates an object from bytes in the mixed-endian field order returned
    /// by [`to_bytes_le`](Self::to_bytes_le).
    ///
    /// The swaps applied by the two functions are the same, so each is the
    /// exact inverse of the other.
    pub const fn from_bytes_le(bytes: [u8; 16]) -> Self {
        let b = bytes;
        Self([
            b[3], b[2], b[1], b[0], b[5], b[4], b[7], b[6], //
            b[8], b[9], b[10], b[11], b[12], b[13], b[14], b[15],
        ])
    }
}

impl fmt::Display for Uuid {
    /// Returns the 8-4-4-4-12 canonical hexadecimal string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const DIGITS: &[u8; 16] = b"0123456789abcdef";

        let mut buffer = [0u8; 36];
        let mut buf_iter = buffer.iter_mut();
        for (i, e) in self.0.iter().enumerate() {
            *buf_iter.next().unwrap() = DIGITS[(e >> 4) as usize];
            *buf_iter.next().unwrap() = DIGITS[(e & 15) as usize];
            if i == 3 || i == 5 || i == 7 || i == 9 {
                *buf_iter.next().unwrap() = b'-';
            }
        }
        debug_assert!(buffer.is_ascii());
        f.write_str(unsafe { str::from_utf8_unchecked(&buffer) })
    }
}

impl str::FromStr for Uuid {
    type Err = ParseError;

    /// Creates an object from the 8-4-4-4-12 hexadecimal string representation.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        const ERR: ParseError = ParseError {};
        if src.len() != 36 {
            return Err(ERR);
        }

        let src = src.as_bytes();
        let mut dst = [0u8; 16];
        let mut pos = 0;
        for (i, e) in dst.iter_mut().enumerate() {
            if i == 4 || i == 6 || i == 8 || i == 10 {
                if src[pos] != b'-' {
                    return Err(ERR);
                }
                pos += 1;
            }
            let hi = (src[pos] as char).to_digit(16).ok_or(ERR)? as u8;
            let lo = (src[pos + 1] as char).to_digit(16).ok_or(ERR)? as u8;
            *e = (hi << 4) | lo;
            pos += 2;
        }
        Ok(Self(dst))
    }
}

impl From<Uuid> for [u8; 16] {
    fn from(src: Uuid) -> Self {
        src.0
    }
}

impl From<[u8; 16]> for Uuid {
    fn from(src: [u8; 16]) -> Self {
        Self(src)
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Uuid> for u128 {
    fn from(src: Uuid) -> Self {
        Self::from_be_bytes(src.0)
    }
}

impl From<u128> for Uuid {
    fn from(src: u128) -> Self {
        Self(src.to_be_bytes())
    }
}

impl From<Uuid> for String {
    fn from(src: Uuid) -> Self {
        src.to_string()
    }
}

impl TryFrom<String> for Uuid {
    type Error = ParseError;

    fn try_from(src: String) -> Result<Self, Self::Error> {
        src.parse()
    }
}

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
mod uuid_support {
    use super::Uuid;

    impl From<Uuid> for uuid::Uuid {
        fn from(src: Uuid) -> Self {
            uuid::Uuid::from_bytes(src.0)
        }
    }

    impl From<uuid::Uuid> for Uuid {
        fn from(src: uuid::Uuid) -> Self {
            Self(src.into_bytes())
        }
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::{fmt, Uuid};
    use serde::{de, Deserializer, Serializer};

    impl serde::Serialize for Uuid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.collect_str(self)
            } else {
                serializer.serialize_bytes(self.as_bytes())
            }
        }
    }

    impl<'de> serde::Deserialize<'de> for Uuid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(VisitorImpl)
            } else {
                deserializer.deserialize_bytes(VisitorImpl)
            }
        }
    }

    struct VisitorImpl;

    impl<'de> de::Visitor<'de> for VisitorImpl {
        type Value = Uuid;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a UUID representation")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            value.parse::<Self::Value>().map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            <[u8; 16]>::try_from(value)
                .map(Self::Value::from)
                .map_err(de::Error::custom)
        }
    }

}

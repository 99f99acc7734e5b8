//! Facade encoding and decoding of UUIDv7 values

use std::fmt;
use std::hash::Hasher;

use siphasher::sip::SipHasher24;

use crate::{SeedHolder, Uuid, ValidationError};

/// Mask covering the 48-bit `unix_ts_ms` field.
const MASK_48: u64 = (1 << 48) - 1;

/// Disguises UUIDv7 values as random-looking UUIDv4 facades and recovers the
/// originals.
///
/// The codec holds the derived SipHash key pair and nothing else; encode and
/// decode are pure functions of the key pair and their input, so a codec can
/// be shared freely across threads.
///
/// # Examples
///
/// ```rust
/// use uuid74::{uuid7, FacadeCodec};
///
/// let codec = FacadeCodec::from_seed(*b"an example seed!")?;
/// let id = uuid7();
/// let facade = codec.encode(id)?;
/// assert_eq!(codec.decode(facade), id);
/// # Ok::<(), uuid74::ValidationError>(())
/// ```
#[derive(Copy, Clone)]
pub struct FacadeCodec {
    k0: u64,
    k1: u64,
}

impl FacadeCodec {
    /// Creates a codec from an already derived SipHash key pair.
    pub const fn new(k0: u64, k1: u64) -> Self {
        Self { k0, k1 }
    }

    /// Creates a codec from a 16-byte secret seed.
    ///
    /// The seed is split into two little-endian `u64` halves through a
    /// [`SeedHolder`] that scrubs its storage before this function returns,
    /// whether or not derivation succeeds. The caller's own copy of `seed` is
    /// the caller's responsibility.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::ZeroSeed`] if `seed` is all zero.
    pub fn from_seed(seed: [u8; 16]) -> Result<Self, ValidationError> {
        let mut holder = SeedHolder::new(seed)?;
        let (k0, k1) = holder
            .derive_keys()
            .expect("holder is released only after derivation");
        holder.release();
        Ok(Self::new(k0, k1))
    }

    /// Disguises a UUIDv7 as a facade that is bit-indistinguishable from a
    /// random UUIDv4.
    ///
    /// The 48-bit `unix_ts_ms` field is XORed with a keyed mask computed from
    /// the identifier's own non-timestamp bits, and the version nibble is
    /// rewritten from 7 to 4. Every other bit is left as it was, which is what
    /// lets [`decode`](Self::decode) recompute the same mask from the facade.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NotV7`] if `v7` does not carry version 7.
    /// No other structural property of the input is checked.
    pub fn encode(&self, v7: Uuid) -> Result<Uuid, ValidationError> {
        let mut bytes = *v7.as_bytes();
        if bytes[6] >> 4 != 7 {
            return Err(ValidationError::NotV7);
        }

        let masked = v7.unix_ts_ms() ^ self.mask48(&bytes);
        bytes[..6].copy_from_slice(&masked.to_be_bytes()[2..]);
        bytes[6] = (bytes[6] & 0x0f) | 0x40;
        bytes[8] = (bytes[8] & 0x3f) | 0x80;
        Ok(Uuid::from(bytes))
    }

    /// Recovers the original UUIDv7 from a facade produced by
    /// [`encode`](Self::encode) under the same key pair.
    ///
    /// The input is not validated: any 128-bit value decodes without error,
    /// and a forged or mismatched facade simply yields a well-formed but
    /// meaningless UUIDv7. The facade scheme is reversible, not
    /// tamper-evident.
    pub fn decode(&self, facade: Uuid) -> Uuid {
        let mut bytes = *facade.as_bytes();
        let unmasked = facade.unix_ts_ms() ^ self.mask48(&bytes);
        bytes[..6].copy_from_slice(&unmasked.to_be_bytes()[2..]);
        bytes[6] = (bytes[6] & 0x0f) | 0x70;
        bytes[8] = (bytes[8] & 0x3f) | 0x80;
        Uuid::from(bytes)
    }

    /// Computes the 48-bit timestamp mask for an identifier.
    ///
    /// The message fed to SipHash consists exclusively of bits that the
    /// masking step never rewrites: the low nibble of octet 6, octet 7, the
    /// low six bits of octet 8, and octets 9 through 15. Encode and decode
    /// therefore observe the same message and derive the same mask.
    fn mask48(&self, bytes: &[u8; 16]) -> u64 {
        let mut message = [0u8; 10];
        message[0] = bytes[6] & 0x0f;
        message[1] = bytes[7];
        message[2] = bytes[8] & 0x3f;
        message[3..].copy_from_slice(&bytes[9..]);

        let mut hasher = SipHasher24::new_with_keys(self.k0, self.k1);
        hasher.write(&message);
        hasher.finish() & MASK_48
    }
}

impl fmt::Debug for FacadeCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // never print the key pair
        f.write_str("FacadeCodec(..)")
    }
}

//! Secret seed handling and key derivation

use std::fmt;

use zeroize::Zeroize;

use crate::{StateError, ValidationError};

/// Owns the 16-byte secret seed between configuration and key derivation.
///
/// A holder is meant to live briefly: construct it, call
/// [`derive_keys`](Self::derive_keys), hand the pair to a
/// [`FacadeCodec`](crate::FacadeCodec), and [`release`](Self::release) the
/// holder. Release overwrites the seed bytes with zeros, and it also runs on
/// drop, so the bytes are scrubbed even when derivation or downstream
/// configuration bails out early.
///
/// Rust never relocates the holder's storage behind its back, so the seed
/// occupies a single fixed location until it is scrubbed, and the zeroization
/// goes through the `zeroize` crate so the compiler cannot elide it. Callers
/// that keep their own copy of the seed are expected to scrub it themselves.
///
/// # Examples
///
/// ```rust
/// use uuid74::SeedHolder;
///
/// let mut holder = SeedHolder::new(*b"an example seed!")?;
/// let (k0, k1) = holder.derive_keys().expect("not yet released");
/// holder.release();
/// assert!(holder.derive_keys().is_err());
/// # Ok::<(), uuid74::ValidationError>(())
/// ```
pub struct SeedHolder {
    seed: [u8; 16],
    released: bool,
}

impl SeedHolder {
    /// Takes ownership of a secret seed.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::ZeroSeed`] if `seed` is the all-zero
    /// sentinel, which is what an unset configuration value looks like.
    pub fn new(seed: [u8; 16]) -> Result<Self, ValidationError> {
        if seed == [0u8; 16] {
            return Err(ValidationError::ZeroSeed);
        }
        Ok(Self {
            seed,
            released: false,
        })
    }

    /// Splits the seed into the SipHash key pair `(k0, k1)`.
    ///
    /// `k0` is read from the first eight seed bytes and `k1` from the last
    /// eight, both little-endian. The transient buffer used for the split is
    /// zeroized before this method returns.
    ///
    /// # Errors
    ///
    /// Returns [`StateError`] if the holder has already been released.
    pub fn derive_keys(&self) -> Result<(u64, u64), StateError> {
        if self.released {
            return Err(StateError);
        }

        let mut half = [0u8; 8];
        half.copy_from_slice(&self.seed[..8]);
        let k0 = u64::from_le_bytes(half);
        half.copy_from_slice(&self.seed[8..]);
        let k1 = u64::from_le_bytes(half);
        half.zeroize();

        Ok((k0, k1))
    }

    /// Zeroizes the seed bytes and marks the holder released.
    ///
    /// Calling `release` again is a no-op. Dropping an unreleased holder
    /// releases it.
    pub fn release(&mut self) {
        if !self.released {
            self.seed.zeroize();
            self.released = true;
        }
    }
}

impl Drop for SeedHolder {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for SeedHolder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // never print the seed bytes
        f.debug_struct("SeedHolder")
            .field("released", &self.released)
            .finish_non_exhaustive()
    }
}

//! UUIDv4-related functionality

use crate::Uuid;
use rand::RngCore;

/// Generates a UUIDv4 object.
///
/// # Examples
///
/// ```rust
/// use uuid74::uuid4;
///
/// let uuid = uuid4();
/// println!("{}", uuid); // e.g., "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
/// println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
/// ```
pub fn uuid4() -> Uuid {
    uuid4_from(&mut rand::thread_rng())
}

/// Generates a UUIDv4 object using the specified random number generator.
///
/// The generator must be cryptographically strong for the result to be used
/// as an unguessable identifier.
///
/// # Examples
///
/// ```rust
/// use uuid74::uuid4_from;
///
/// let uuid = uuid4_from(&mut rand::rngs::OsRng);
/// assert_eq!(uuid.version(), 4);
/// ```
pub fn uuid4_from<R: RngCore>(rng: &mut R) -> Uuid {
    let mut bytes = [0u8; 16];
    rng.fill_bytes(&mut bytes);
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;
    Uuid::from(bytes)
}

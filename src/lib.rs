//! A reversible disguise for UUIDv7: sortable inside, random-looking outside
//!
//! This crate lets a system use time-ordered UUIDv7 identifiers internally
//! while exposing only values that are bit-indistinguishable from random
//! UUIDv4. The 48-bit `unix_ts_ms` field of a UUIDv7 is XORed with a keyed
//! SipHash output derived from the identifier's own non-timestamp bits, and
//! the version nibble is rewritten from 7 to 4. Holders of the secret seed can
//! reverse the transformation exactly; everyone else sees an ordinary-looking
//! UUIDv4 that leaks no creation time.
//!
//! ```rust
//! use uuid74::{uuid7, FacadeCodec};
//!
//! let codec = FacadeCodec::from_seed(*b"an example seed!")?;
//!
//! let id = uuid7();
//! let facade = codec.encode(id)?;
//! assert_eq!(facade.version(), 4); // passes as a random UUIDv4
//! assert_eq!(codec.decode(facade), id);
//! # Ok::<(), uuid74::ValidationError>(())
//! ```
//!
//! # Field and bit layout
//!
//! A facade produced by [`FacadeCodec::encode`] has the following bit layout:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                     unix_ts_ms ^ mask_48                      |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |     unix_ts_ms ^ mask_48      |  ver  |        rand_a         |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|                         rand_b                            |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                            rand_b                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Where:
//!
//! - `mask_48` is the low 48 bits of SipHash-2-4 over the identifier's
//!   non-timestamp bits (the `rand_a`/`rand_b` fields and the version nibble),
//!   keyed with the pair derived from the secret seed. The mask never depends
//!   on the timestamp itself and never rewrites the bits it is derived from,
//!   so [`FacadeCodec::decode`] recomputes the identical mask from the facade
//!   alone and the XOR cancels out.
//! - The `ver` field reads `0100` on a facade and `0111` on the original.
//! - The 2-bit `var` field is set at `10` in both directions.
//!
//! The scheme hides the timestamp value, not the existence of the disguise,
//! and a facade carries no integrity protection: decoding a forged value
//! yields a well-formed but meaningless UUIDv7.
//!
//! # Generators
//!
//! The crate also generates fresh identifiers of both shapes:
//!
//! ```rust
//! let sortable = uuid74::uuid7();
//! let opaque = uuid74::uuid4();
//! println!("{sortable}"); // e.g., "01809424-3e59-7c05-9219-566f82fff672"
//! println!("{opaque}"); // e.g., "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
//! ```

mod id;
pub use id::Uuid;

mod error;
pub use error::{ParseError, StateError, ValidationError};

mod v4;
pub use v4::{uuid4, uuid4_from};

mod v7;
pub use v7::{uuid7, uuid7_from};

mod facade;
pub use facade::FacadeCodec;

mod secret;
pub use secret::SeedHolder;

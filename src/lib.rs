//! Elliptic-curve public key codec and address derivation
//!
//! This crate encodes, compresses, and decompresses public keys on
//! 256-bit short Weierstrass curves, derives hash-based addresses from
//! the encodings, and verifies raw ECDSA signatures. Curve parameters
//! are passed explicitly as [`CurveParams`] values, so nothing is tied
//! to a single named curve; NIST P-256 and secp256k1 tables ship with
//! the crate.
//!
//! Point compression stores only the x-coordinate plus a one-byte flag
//! selecting which root of y² = x³ + ax + b was the original
//! y-coordinate. Decompression solves the curve equation and fails
//! explicitly when no root exists, rather than fabricating a point.
//!
//! # Example
//!
//! ```
//! use eckeys::{address, PublicKey, NIST_P256};
//!
//! # fn main() -> Result<(), eckeys::Error> {
//! let key = PublicKey::from_coordinates(&NIST_P256.g_x, &NIST_P256.g_y, &NIST_P256)?;
//!
//! let compressed = key.to_compressed_bytes()?;
//! let restored = PublicKey::from_compressed_bytes(&compressed, &NIST_P256)?;
//! assert_eq!(key, restored);
//!
//! let addr = address::derive(&key, true)?;
//! assert_eq!(addr.len(), address::ADDRESS_SIZE);
//! assert!(address::is_compressed(&addr));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod error;
pub use error::{validate, Error, Result};

pub mod params;
pub use params::{
    CurveParams, FIELD_ELEMENT_SIZE, NIST_P256, POINT_COMPRESSED_SIZE, POINT_UNCOMPRESSED_SIZE,
    SECP256K1,
};

pub mod field;

pub mod point;
pub use point::PublicKey;

pub mod address;

pub mod ecdsa;
pub use ecdsa::{verify, Signature, SIGNATURE_SIZE};

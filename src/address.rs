//! Address derivation from encoded public keys
//!
//! An address is a 22-byte fingerprint: a compression flag byte, a
//! multisig flag byte, and the first 20 bytes of the SHA-256 digest of
//! the chosen key encoding. Multisig tagging happens outside this
//! crate; addresses derived here always carry a zero multisig byte.

use sha2::{Digest, Sha256};

use crate::error::Result;
use crate::point::PublicKey;

/// Number of hash bytes kept in an address
pub const ADDRESS_HASH_PREFIX_SIZE: usize = 20;

/// Size of an address produced by [`derive`]: two flag bytes + hash prefix
pub const ADDRESS_SIZE: usize = 2 + ADDRESS_HASH_PREFIX_SIZE;

/// Smallest externally acceptable address length
pub const ADDRESS_MIN_SIZE: usize = 20;

/// Largest externally acceptable address length
pub const ADDRESS_MAX_SIZE: usize = 64;

/// Derive an address from a public key
///
/// Hashes the compressed or uncompressed encoding of the key, per the
/// `compressed` flag, and prefixes the truncated digest with
/// `[compression_flag, multisig_flag]`.
pub fn derive(public_key: &PublicKey, compressed: bool) -> Result<Vec<u8>> {
    let (flag, digest) = if compressed {
        (0x01, Sha256::digest(public_key.to_compressed_bytes()?))
    } else {
        (0x00, Sha256::digest(public_key.to_bytes()))
    };

    let mut addr = Vec::with_capacity(ADDRESS_SIZE);
    addr.push(flag);
    addr.push(0x00); // multisig flag, always clear at derivation
    addr.extend_from_slice(&digest[..ADDRESS_HASH_PREFIX_SIZE]);
    Ok(addr)
}

/// Was the address derived from a compressed key encoding?
pub fn is_compressed(addr: &[u8]) -> bool {
    addr.first().map_or(false, |&b| b != 0x00)
}

/// Does the address carry the multisig tag?
pub fn is_multisig(addr: &[u8]) -> bool {
    addr.get(1).map_or(false, |&b| b != 0x00)
}

/// Is the address of a reasonable length?
///
/// A sanity bound for externally supplied addresses; says nothing about
/// the flags or the hash itself.
pub fn is_valid_length(addr: &[u8]) -> bool {
    (ADDRESS_MIN_SIZE..=ADDRESS_MAX_SIZE).contains(&addr.len())
}

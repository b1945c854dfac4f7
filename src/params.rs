//! Named-curve parameters as explicit configuration values
//!
//! Curve parameters are data, not code: every codec and arithmetic
//! operation in this crate takes a [`CurveParams`] reference instead of
//! assuming a hardcoded curve. Only 256-bit short Weierstrass curves
//! over prime fields with p ≡ 3 (mod 4) are provided.

use num_bigint::BigUint;

/// Size of a field element in bytes (32 bytes = 256 bits)
pub const FIELD_ELEMENT_SIZE: usize = 32;

/// Size of an uncompressed public key in bytes: x-coordinate ‖ y-coordinate
pub const POINT_UNCOMPRESSED_SIZE: usize = 2 * FIELD_ELEMENT_SIZE; // 64 bytes: x || y

/// Size of a compressed public key in bytes: flag byte (0x00/0x01) + x-coordinate
pub const POINT_COMPRESSED_SIZE: usize = 1 + FIELD_ELEMENT_SIZE; // 33 bytes: flag || x

/// Parameters of a short Weierstrass curve y² = x³ + ax + b over 𝔽ₚ
///
/// All values are big-endian, fixed-width byte arrays. Two parameter
/// sets are equal only when every component matches, so a point decoded
/// for one curve never passes a quick check against another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurveParams {
    /// Human-readable curve name
    pub name: &'static str,
    /// Field prime p
    pub p: [u8; FIELD_ELEMENT_SIZE],
    /// Curve coefficient a
    pub a: [u8; FIELD_ELEMENT_SIZE],
    /// Curve coefficient b
    pub b: [u8; FIELD_ELEMENT_SIZE],
    /// Base point x-coordinate
    pub g_x: [u8; FIELD_ELEMENT_SIZE],
    /// Base point y-coordinate
    pub g_y: [u8; FIELD_ELEMENT_SIZE],
    /// Order n of the base point
    pub n: [u8; FIELD_ELEMENT_SIZE],
}

impl CurveParams {
    /// Field prime p as an integer
    pub fn p(&self) -> BigUint {
        BigUint::from_bytes_be(&self.p)
    }

    /// Coefficient a as an integer
    pub fn a(&self) -> BigUint {
        BigUint::from_bytes_be(&self.a)
    }

    /// Coefficient b as an integer
    pub fn b(&self) -> BigUint {
        BigUint::from_bytes_be(&self.b)
    }

    /// Base point x-coordinate as an integer
    pub fn g_x(&self) -> BigUint {
        BigUint::from_bytes_be(&self.g_x)
    }

    /// Base point y-coordinate as an integer
    pub fn g_y(&self) -> BigUint {
        BigUint::from_bytes_be(&self.g_y)
    }

    /// Base point order n as an integer
    pub fn n(&self) -> BigUint {
        BigUint::from_bytes_be(&self.n)
    }
}

/// NIST P-256 (secp256r1) parameters
///
/// p = 2²⁵⁶ − 2²²⁴ + 2¹⁹² + 2⁹⁶ − 1, a = −3 mod p.
pub static NIST_P256: CurveParams = CurveParams {
    name: "P-256",
    p: [
        0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0xFF,
    ],
    a: [
        0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0xFC,
    ],
    b: [
        0x5A, 0xC6, 0x35, 0xD8, 0xAA, 0x3A, 0x93, 0xE7, 0xB3, 0xEB, 0xBD, 0x55, 0x76, 0x98, 0x86,
        0xBC, 0x65, 0x1D, 0x06, 0xB0, 0xCC, 0x53, 0xB0, 0xF6, 0x3B, 0xCE, 0x3C, 0x3E, 0x27, 0xD2,
        0x60, 0x4B,
    ],
    g_x: [
        0x6B, 0x17, 0xD1, 0xF2, 0xE1, 0x2C, 0x42, 0x47, 0xF8, 0xBC, 0xE6, 0xE5, 0x63, 0xA4, 0x40,
        0xF2, 0x77, 0x03, 0x7D, 0x81, 0x2D, 0xEB, 0x33, 0xA0, 0xF4, 0xA1, 0x39, 0x45, 0xD8, 0x98,
        0xC2, 0x96,
    ],
    g_y: [
        0x4F, 0xE3, 0x42, 0xE2, 0xFE, 0x1A, 0x7F, 0x9B, 0x8E, 0xE7, 0xEB, 0x4A, 0x7C, 0x0F, 0x9E,
        0x16, 0x2B, 0xCE, 0x33, 0x57, 0x6B, 0x31, 0x5E, 0xCE, 0xCB, 0xB6, 0x40, 0x68, 0x37, 0xBF,
        0x51, 0xF5,
    ],
    n: [
        0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0xBC, 0xE6, 0xFA, 0xAD, 0xA7, 0x17, 0x9E, 0x84, 0xF3, 0xB9, 0xCA, 0xC2, 0xFC, 0x63,
        0x25, 0x51,
    ],
};

/// secp256k1 parameters
///
/// p = 2²⁵⁶ − 2³² − 977, a = 0, b = 7.
pub static SECP256K1: CurveParams = CurveParams {
    name: "secp256k1",
    p: [
        0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE, 0xFF, 0xFF,
        0xFC, 0x2F,
    ],
    a: [0x00; FIELD_ELEMENT_SIZE],
    b: [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x07,
    ],
    g_x: [
        0x79, 0xBE, 0x66, 0x7E, 0xF9, 0xDC, 0xBB, 0xAC, 0x55, 0xA0, 0x62, 0x95, 0xCE, 0x87, 0x0B,
        0x07, 0x02, 0x9B, 0xFC, 0xDB, 0x2D, 0xCE, 0x28, 0xD9, 0x59, 0xF2, 0x81, 0x5B, 0x16, 0xF8,
        0x17, 0x98,
    ],
    g_y: [
        0x48, 0x3A, 0xDA, 0x77, 0x26, 0xA3, 0xC4, 0x65, 0x5D, 0xA4, 0xFB, 0xFC, 0x0E, 0x11, 0x08,
        0xA8, 0xFD, 0x17, 0xB4, 0x48, 0xA6, 0x85, 0x54, 0x19, 0x9C, 0x47, 0xD0, 0x8F, 0xFB, 0x10,
        0xD4, 0xB8,
    ],
    n: [
        0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFE, 0xBA, 0xAE, 0xDC, 0xE6, 0xAF, 0x48, 0xA0, 0x3B, 0xBF, 0xD2, 0x5E, 0x8C, 0xD0, 0x36,
        0x41, 0x41,
    ],
};

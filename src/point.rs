//! Public key points and their byte codecs
//!
//! Two wire formats, both with fixed-width big-endian coordinates so
//! that leading-zero field elements decode unambiguously:
//!
//! - uncompressed: `x ‖ y` (64 bytes)
//! - compressed: `flag ‖ x` (33 bytes), flag ∈ {0x00, 0x01}
//!
//! The compression flag records which of the two candidate roots of the
//! curve equation the original y-coordinate was: flag 1 means y equals
//! the second root returned by [`field::candidate_ys`], flag 0 the
//! first. Decompression applies the same rule in reverse, so compress
//! followed by decompress is the identity on valid points.

use num_bigint::BigUint;

use crate::error::{validate, Error, Result};
use crate::field;
use crate::params::{
    CurveParams, FIELD_ELEMENT_SIZE, POINT_COMPRESSED_SIZE, POINT_UNCOMPRESSED_SIZE,
};

/// Serialize a field element as fixed-width big-endian bytes
pub(crate) fn fe_to_bytes(v: &BigUint) -> [u8; FIELD_ELEMENT_SIZE] {
    let mut out = [0u8; FIELD_ELEMENT_SIZE];
    let raw = v.to_bytes_be();
    out[FIELD_ELEMENT_SIZE - raw.len()..].copy_from_slice(&raw);
    out
}

/// Parse a field element from big-endian bytes, rejecting values ≥ p
fn fe_from_bytes(bytes: &[u8], p: &BigUint, name: &'static str) -> Result<BigUint> {
    let v = BigUint::from_bytes_be(bytes);
    if &v >= p {
        return Err(Error::param(name, "value not below the field prime"));
    }
    Ok(v)
}

/// A curve point (x, y) tagged with the curve it belongs to
///
/// Coordinates are range-checked (< p) on every construction path.
/// Whether the point actually lies on its curve is validated by the
/// decoding constructors and on demand by [`PublicKey::quick_check`];
/// [`PublicKey::from_coordinates`] deliberately leaves it unchecked so
/// externally supplied coordinates can be inspected before use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    curve: &'static CurveParams,
    x: BigUint,
    y: BigUint,
}

impl PublicKey {
    /// Create a public key from raw big-endian coordinates
    ///
    /// Only the field range is validated here; call
    /// [`quick_check`](Self::quick_check) to test curve membership.
    pub fn from_coordinates(
        x_bytes: &[u8; FIELD_ELEMENT_SIZE],
        y_bytes: &[u8; FIELD_ELEMENT_SIZE],
        curve: &'static CurveParams,
    ) -> Result<Self> {
        let p = curve.p();
        let x = fe_from_bytes(x_bytes, &p, "public key x")?;
        let y = fe_from_bytes(y_bytes, &p, "public key y")?;
        Ok(PublicKey { curve, x, y })
    }

    pub(crate) fn from_parts(x: BigUint, y: BigUint, curve: &'static CurveParams) -> Self {
        PublicKey { curve, x, y }
    }

    /// The curve this key is defined over
    pub fn curve(&self) -> &'static CurveParams {
        self.curve
    }

    /// x-coordinate as an integer
    pub fn x(&self) -> &BigUint {
        &self.x
    }

    /// y-coordinate as an integer
    pub fn y(&self) -> &BigUint {
        &self.y
    }

    /// x-coordinate as fixed-width big-endian bytes
    pub fn x_bytes(&self) -> [u8; FIELD_ELEMENT_SIZE] {
        fe_to_bytes(&self.x)
    }

    /// y-coordinate as fixed-width big-endian bytes
    pub fn y_bytes(&self) -> [u8; FIELD_ELEMENT_SIZE] {
        fe_to_bytes(&self.y)
    }

    /// Serialize as uncompressed bytes: x ‖ y
    pub fn to_bytes(&self) -> [u8; POINT_UNCOMPRESSED_SIZE] {
        let mut out = [0u8; POINT_UNCOMPRESSED_SIZE];
        out[..FIELD_ELEMENT_SIZE].copy_from_slice(&self.x_bytes());
        out[FIELD_ELEMENT_SIZE..].copy_from_slice(&self.y_bytes());
        out
    }

    /// Serialize as compressed bytes: flag ‖ x
    ///
    /// The flag byte is 0x01 when y is the second candidate root for x,
    /// 0x00 when it is the first. Fails with [`Error::NotSquare`] if x
    /// has no root at all, which cannot happen for a key that is
    /// actually on its curve.
    pub fn to_compressed_bytes(&self) -> Result<[u8; POINT_COMPRESSED_SIZE]> {
        let (_, y1) = field::candidate_ys(&self.x, self.curve)?;

        let mut out = [0u8; POINT_COMPRESSED_SIZE];
        out[0] = if self.y == y1 { 0x01 } else { 0x00 };
        out[1..].copy_from_slice(&self.x_bytes());
        Ok(out)
    }

    /// Deserialize from uncompressed bytes (x ‖ y)
    ///
    /// Requires exactly 64 bytes; rejects coordinates outside the field
    /// and points that do not satisfy the curve equation.
    pub fn from_bytes(bytes: &[u8], curve: &'static CurveParams) -> Result<Self> {
        validate::length(
            "uncompressed public key",
            bytes.len(),
            POINT_UNCOMPRESSED_SIZE,
        )?;

        let p = curve.p();
        let x = fe_from_bytes(&bytes[..FIELD_ELEMENT_SIZE], &p, "public key x")?;
        let y = fe_from_bytes(&bytes[FIELD_ELEMENT_SIZE..], &p, "public key y")?;

        let key = PublicKey { curve, x, y };
        if !key.is_on_curve() {
            return Err(Error::param("public key", "point not on curve"));
        }
        Ok(key)
    }

    /// Deserialize from compressed bytes (flag ‖ x)
    ///
    /// Requires exactly 33 bytes and a flag of 0x00 or 0x01. The
    /// y-coordinate is recovered by solving the curve equation; an x
    /// with no root on the curve fails with [`Error::NotSquare`].
    pub fn from_compressed_bytes(bytes: &[u8], curve: &'static CurveParams) -> Result<Self> {
        validate::length("compressed public key", bytes.len(), POINT_COMPRESSED_SIZE)?;

        let flag = bytes[0];
        validate::parameter(flag <= 0x01, "flag byte", "must be 0x00 or 0x01")?;

        let p = curve.p();
        let x = fe_from_bytes(&bytes[1..], &p, "public key x")?;

        let (y0, y1) = field::candidate_ys(&x, curve)?;
        let y = if flag == 0x01 { y1 } else { y0 };

        Ok(PublicKey { curve, x, y })
    }

    /// Quick validity check: right curve and on that curve
    ///
    /// Returns true iff the key was built for `curve` and (x, y)
    /// satisfies its equation. No other structure is verified.
    pub fn quick_check(&self, curve: &CurveParams) -> bool {
        if self.curve != curve {
            return false;
        }
        self.is_on_curve()
    }

    /// Does (x, y) satisfy y² = x³ + ax + b (mod p)?
    pub(crate) fn is_on_curve(&self) -> bool {
        let p = self.curve.p();
        let lhs = self.y.modpow(&BigUint::from(2u32), &p);
        lhs == field::curve_rhs(&self.x, self.curve)
    }
}

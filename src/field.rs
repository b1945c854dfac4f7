//! Field arithmetic for point decompression
//!
//! The curve equation y² = x³ + ax + b (mod p) has either two solutions
//! for y (additive inverses of each other), one (y = 0), or none. This
//! module evaluates the right-hand side and extracts its modular square
//! roots, reporting explicitly when no root exists instead of handing
//! back a fabricated coordinate.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::error::{Error, Result};
use crate::params::CurveParams;

/// Evaluate the curve equation right-hand side: x³ + a·x + b mod p
pub fn curve_rhs(x: &BigUint, curve: &CurveParams) -> BigUint {
    let p = curve.p();
    let x3 = x.modpow(&BigUint::from(3u32), &p);
    let ax = (curve.a() * x) % &p;
    (x3 + ax + curve.b()) % p
}

/// Square root of `alpha` modulo a prime p ≡ 3 (mod 4)
///
/// Computes alpha^((p+1)/4) mod p and verifies the result by squaring;
/// returns `None` when `alpha` is a quadratic non-residue. Callers must
/// not pass primes with p ≢ 3 (mod 4); the verification step then fails
/// for roughly half of all residues and the root is rejected as absent.
pub fn sqrt_mod(alpha: &BigUint, p: &BigUint) -> Option<BigUint> {
    let alpha = alpha % p;
    if alpha.is_zero() {
        return Some(BigUint::zero());
    }

    let exp = (p + BigUint::one()) >> 2u32;
    let root = alpha.modpow(&exp, p);

    if (&root * &root) % p == alpha {
        Some(root)
    } else {
        None
    }
}

/// Both candidate y-coordinates for a given x on the curve
///
/// Returns the two roots `(y0, y1)` of y² ≡ x³ + ax + b (mod p), with
/// y1 = p − y0. Their order is the canonical one used by the point
/// codec's parity flag: a compressed encoding with flag 1 selects y1.
/// Fails with [`Error::NotSquare`] when x has no point on the curve.
pub fn candidate_ys(x: &BigUint, curve: &CurveParams) -> Result<(BigUint, BigUint)> {
    let p = curve.p();
    let alpha = curve_rhs(x, curve);

    let y0 = sqrt_mod(&alpha, &p).ok_or(Error::NotSquare {
        context: "compressed x-coordinate",
    })?;
    let y1 = (&p - &y0) % &p;
    Ok((y0, y1))
}

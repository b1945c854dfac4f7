//! Raw ECDSA signature verification
//!
//! Verifies (r, s) signature components against a digest and a public
//! key, per FIPS 186-4 section 6. Verification operates on public data
//! only, so the affine group law here is variable-time big-integer
//! arithmetic over the key's [`CurveParams`]. All failure modes report
//! as a plain `false`; verification never returns an error.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::error::{validate, Result};
use crate::params::{CurveParams, FIELD_ELEMENT_SIZE};
use crate::point::{fe_to_bytes, PublicKey};

/// Size of a raw signature in bytes: r ‖ s
pub const SIGNATURE_SIZE: usize = 2 * FIELD_ELEMENT_SIZE;

/// An ECDSA signature as its raw (r, s) scalar pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    r: BigUint,
    s: BigUint,
}

impl Signature {
    /// Build a signature from big-endian r and s component bytes
    pub fn from_scalars(
        r: &[u8; FIELD_ELEMENT_SIZE],
        s: &[u8; FIELD_ELEMENT_SIZE],
    ) -> Self {
        Signature {
            r: BigUint::from_bytes_be(r),
            s: BigUint::from_bytes_be(s),
        }
    }

    /// Parse a raw 64-byte r ‖ s buffer
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        validate::length("raw signature", bytes.len(), SIGNATURE_SIZE)?;
        Ok(Signature {
            r: BigUint::from_bytes_be(&bytes[..FIELD_ELEMENT_SIZE]),
            s: BigUint::from_bytes_be(&bytes[FIELD_ELEMENT_SIZE..]),
        })
    }

    /// Serialize as a raw 64-byte r ‖ s buffer
    pub fn to_bytes(&self) -> [u8; SIGNATURE_SIZE] {
        let mut out = [0u8; SIGNATURE_SIZE];
        out[..FIELD_ELEMENT_SIZE].copy_from_slice(&fe_to_bytes(&self.r));
        out[FIELD_ELEMENT_SIZE..].copy_from_slice(&fe_to_bytes(&self.s));
        out
    }

    /// The r component
    pub fn r(&self) -> &BigUint {
        &self.r
    }

    /// The s component
    pub fn s(&self) -> &BigUint {
        &self.s
    }
}

/// Verify a signature over a message digest
///
/// Follows FIPS 186-4: checks r, s ∈ [1, n−1], computes
/// R = (z·s⁻¹)·G + (r·s⁻¹)·Q and accepts iff R is finite and
/// R.x ≡ r (mod n). The digest is consumed as-is, left-truncated to the
/// scalar width when longer; hashing the message is the caller's job.
pub fn verify(public_key: &PublicKey, digest: &[u8], signature: &Signature) -> bool {
    let curve = public_key.curve();
    let n = curve.n();

    if signature.r.is_zero() || signature.r >= n {
        return false;
    }
    if signature.s.is_zero() || signature.s >= n {
        return false;
    }
    if !public_key.is_on_curve() {
        return false;
    }

    let z = digest_to_scalar(digest);
    let p = curve.p();
    let a = curve.a();

    let w = mod_inverse(&signature.s, &n);
    let u1 = (z * &w) % &n;
    let u2 = (&signature.r * &w) % &n;

    let g: Affine = Some((curve.g_x(), curve.g_y()));
    let q: Affine = Some((public_key.x().clone(), public_key.y().clone()));

    let u1g = scalar_mult(&u1, &g, &p, &a);
    let u2q = scalar_mult(&u2, &q, &p, &a);

    match point_add(&u1g, &u2q, &p, &a) {
        Some((x, _)) => x % n == signature.r,
        None => false,
    }
}

/// Interpret a digest as an integer, keeping the leftmost scalar-width bytes
fn digest_to_scalar(digest: &[u8]) -> BigUint {
    let take = digest.len().min(FIELD_ELEMENT_SIZE);
    BigUint::from_bytes_be(&digest[..take])
}

/// An affine point, with `None` as the point at infinity
pub(crate) type Affine = Option<(BigUint, BigUint)>;

/// Inverse of a nonzero element modulo a prime, via Fermat's little theorem
fn mod_inverse(v: &BigUint, m: &BigUint) -> BigUint {
    v.modpow(&(m - 2u32), m)
}

/// (a − b) mod p for reduced operands
fn mod_sub(a: &BigUint, b: &BigUint, p: &BigUint) -> BigUint {
    ((a + p) - b) % p
}

fn point_double(pt: &Affine, p: &BigUint, a: &BigUint) -> Affine {
    let (x, y) = match pt {
        Some(xy) => xy,
        None => return None,
    };
    if y.is_zero() {
        // The tangent is vertical, 2·(x, 0) = ∞
        return None;
    }

    // λ = (3x² + a) / 2y
    let three_x2 = (BigUint::from(3u32) * x * x) % p;
    let num = (three_x2 + a) % p;
    let den = mod_inverse(&((BigUint::from(2u32) * y) % p), p);
    let lambda = (num * den) % p;

    // x₃ = λ² − 2x, y₃ = λ(x − x₃) − y
    let lambda2 = (&lambda * &lambda) % p;
    let x3 = mod_sub(&mod_sub(&lambda2, x, p), x, p);
    let y3 = mod_sub(&((&lambda * mod_sub(x, &x3, p)) % p), y, p);
    Some((x3, y3))
}

pub(crate) fn point_add(lhs: &Affine, rhs: &Affine, p: &BigUint, a: &BigUint) -> Affine {
    let (x1, y1) = match lhs {
        Some(xy) => xy,
        None => return rhs.clone(),
    };
    let (x2, y2) = match rhs {
        Some(xy) => xy,
        None => return lhs.clone(),
    };

    if x1 == x2 {
        if (y1 + y2) % p == BigUint::zero() {
            // Mirror points, the sum is ∞
            return None;
        }
        return point_double(lhs, p, a);
    }

    // λ = (y₂ − y₁) / (x₂ − x₁)
    let num = mod_sub(y2, y1, p);
    let den = mod_inverse(&mod_sub(x2, x1, p), p);
    let lambda = (num * den) % p;

    let lambda2 = (&lambda * &lambda) % p;
    let x3 = mod_sub(&mod_sub(&lambda2, x1, p), x2, p);
    let y3 = mod_sub(&((&lambda * mod_sub(x1, &x3, p)) % p), y1, p);
    Some((x3, y3))
}

/// Double-and-add scalar multiplication, most significant bit first
pub(crate) fn scalar_mult(k: &BigUint, point: &Affine, p: &BigUint, a: &BigUint) -> Affine {
    let mut acc: Affine = None;
    for i in (0..k.bits()).rev() {
        acc = point_double(&acc, p, a);
        if k.bit(i) {
            acc = point_add(&acc, point, p, a);
        }
    }
    acc
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{NIST_P256, SECP256K1};
    use num_traits::One;
    use rand::RngCore;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;
    use sha2::{Digest, Sha256};

    fn fe32(hex_str: &str) -> [u8; FIELD_ELEMENT_SIZE] {
        let mut out = [0u8; FIELD_ELEMENT_SIZE];
        out.copy_from_slice(&hex::decode(hex_str).unwrap());
        out
    }

    /// RFC 6979 A.2.5 key and its signature over SHA-256("sample")
    fn rfc6979_fixture() -> (PublicKey, Vec<u8>, Signature) {
        let pk = PublicKey::from_coordinates(
            &fe32("60fed4ba255a9d31c961eb74c6356d68c049b8923b61fa6ce669622e60f29fb6"),
            &fe32("7903fe1008b8bc99a41ae9e95628bc64f2f1b20c2d7e9f5177a3c294d4462299"),
            &NIST_P256,
        )
        .unwrap();
        let digest = Sha256::digest(b"sample").to_vec();
        let sig = Signature::from_scalars(
            &fe32("efd48b2aacb6a8fd1140dd9cd45e81d69d2c877b56aaf991c34d0ea84eaf3716"),
            &fe32("f7cb1c942d657c41d436c7a1b6e29f65f3e900dbb9aff4064dc4ab2f843acda8"),
        );
        (pk, digest, sig)
    }

    #[test]
    fn test_rfc6979_p256_sha256_vector_verifies() {
        let (pk, digest, sig) = rfc6979_fixture();
        assert!(pk.quick_check(&NIST_P256));
        assert!(verify(&pk, &digest, &sig));
    }

    #[test]
    fn test_mutated_signature_rejected() {
        let (pk, digest, sig) = rfc6979_fixture();
        let mut bytes = sig.to_bytes();
        bytes[63] ^= 0x01;
        let bad = Signature::from_bytes(&bytes).unwrap();
        assert!(!verify(&pk, &digest, &bad));

        let mut bytes = sig.to_bytes();
        bytes[0] ^= 0x80;
        let bad = Signature::from_bytes(&bytes).unwrap();
        assert!(!verify(&pk, &digest, &bad));
    }

    #[test]
    fn test_mutated_digest_rejected() {
        let (pk, digest, sig) = rfc6979_fixture();
        let mut bad = digest.clone();
        bad[0] ^= 0x01;
        assert!(!verify(&pk, &bad, &sig));
        bad[0] ^= 0x01;
        bad[31] ^= 0x01;
        assert!(!verify(&pk, &bad, &sig));
    }

    #[test]
    fn test_out_of_range_components_rejected() {
        let (pk, digest, sig) = rfc6979_fixture();
        let zero = Signature {
            r: BigUint::zero(),
            s: sig.s().clone(),
        };
        assert!(!verify(&pk, &digest, &zero));

        let zero_s = Signature {
            r: sig.r().clone(),
            s: BigUint::zero(),
        };
        assert!(!verify(&pk, &digest, &zero_s));

        let big_r = Signature {
            r: NIST_P256.n(),
            s: sig.s().clone(),
        };
        assert!(!verify(&pk, &digest, &big_r));
    }

    #[test]
    fn test_off_curve_key_rejected() {
        let (pk, digest, sig) = rfc6979_fixture();
        let mut y = pk.y_bytes();
        y[31] ^= 0x01;
        let off = PublicKey::from_coordinates(&pk.x_bytes(), &y, &NIST_P256).unwrap();
        assert!(!verify(&off, &digest, &sig));
    }

    #[test]
    fn test_signature_bytes_round_trip() {
        let (_, _, sig) = rfc6979_fixture();
        let bytes = sig.to_bytes();
        assert_eq!(Signature::from_bytes(&bytes).unwrap(), sig);

        let err = Signature::from_bytes(&bytes[..63]).unwrap_err();
        assert!(matches!(err, crate::error::Error::Length { expected: 64, .. }));
    }

    /// Produce a signature the slow way so verification can be checked
    /// for self-consistency on both curves.
    fn sign_for_test(
        d: &BigUint,
        k: &BigUint,
        z: &BigUint,
        curve: &'static CurveParams,
    ) -> Option<Signature> {
        let n = curve.n();
        let p = curve.p();
        let a = curve.a();
        let g: Affine = Some((curve.g_x(), curve.g_y()));

        let (rx, _) = scalar_mult(k, &g, &p, &a)?;
        let r = rx % &n;
        if r.is_zero() {
            return None;
        }
        let k_inv = k.modpow(&(&n - 2u32), &n);
        let s = (k_inv * (z + &r * d)) % &n;
        if s.is_zero() {
            return None;
        }
        Some(Signature { r, s })
    }

    #[test]
    fn test_sign_verify_round_trip() {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        for curve in [&NIST_P256, &SECP256K1] {
            let n = curve.n();
            let p = curve.p();
            let a = curve.a();
            let g: Affine = Some((curve.g_x(), curve.g_y()));

            for _ in 0..4 {
                let mut buf = [0u8; FIELD_ELEMENT_SIZE];
                rng.fill_bytes(&mut buf);
                let d = BigUint::from_bytes_be(&buf) % (&n - 2u32) + BigUint::one();
                rng.fill_bytes(&mut buf);
                let k = BigUint::from_bytes_be(&buf) % (&n - 2u32) + BigUint::one();
                rng.fill_bytes(&mut buf);
                let digest = buf;

                let z = BigUint::from_bytes_be(&digest);
                let sig = sign_for_test(&d, &k, &z, curve).unwrap();

                let (qx, qy) = scalar_mult(&d, &g, &p, &a).unwrap();
                let pk = PublicKey::from_parts(qx, qy, curve);
                assert!(pk.quick_check(curve));

                assert!(verify(&pk, &digest, &sig), "{}", curve.name);

                // A signature by one key never verifies under another
                let other = testing::point_on_curve(11, curve);
                if other != pk {
                    assert!(!verify(&other, &digest, &sig));
                }
            }
        }
    }

    #[test]
    fn test_group_law_consistency() {
        let curve = &NIST_P256;
        let p = curve.p();
        let a = curve.a();
        let g: Affine = Some((curve.g_x(), curve.g_y()));

        // 2G + G == 3G
        let g2 = point_double(&g, &p, &a);
        let g3 = point_add(&g2, &g, &p, &a);
        let g3_mul = scalar_mult(&BigUint::from(3u32), &g, &p, &a);
        assert_eq!(g3, g3_mul);

        // n·G == ∞
        let at_infinity = scalar_mult(&curve.n(), &g, &p, &a);
        assert!(at_infinity.is_none());
    }
}

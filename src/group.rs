use curve25519_dalek::ristretto::CompressedRistretto;
use curve25519_dalek::{RistrettoPoint, Scalar};
use rand::{CryptoRng, RngCore};

use crate::error::OprfError;

/// Canonical 32-byte encoding of a ristretto255 group element.
pub type Point = [u8; 32];
/// Little-endian 32-byte encoding of a scalar mod the group order.
pub type ScalarBytes = [u8; 32];

/// Number of uniform hash bytes consumed by the element-derivation map.
pub const UNIFORM_BYTES: usize = 64;

/// The prime-order group operations the protocol layer is built on.
///
/// Points and scalars cross this boundary in their wire form; every
/// operation that takes a point decompresses it first and fails with
/// `InvalidPoint` if the bytes are not a canonical group element.
pub trait Group {
    fn hash_to_group(&self, uniform_bytes: &[u8; UNIFORM_BYTES]) -> Point;
    /// Uniform scalar in [1, L), drawn from the caller's CSPRNG.
    fn random_scalar<R: RngCore + CryptoRng>(&self, rng: &mut R) -> ScalarBytes;
    fn is_valid_point(&self, point: &Point) -> bool;
    fn scalar_multiply(&self, point: &Point, scalar: &ScalarBytes) -> Result<Point, OprfError>;
    fn add(&self, a: &Point, b: &Point) -> Result<Point, OprfError>;
    fn subtract(&self, a: &Point, b: &Point) -> Result<Point, OprfError>;
    fn invert_scalar(&self, scalar: &ScalarBytes) -> Result<ScalarBytes, OprfError>;
    fn add_scalars(&self, a: &ScalarBytes, b: &ScalarBytes) -> ScalarBytes;
    fn secure_random_bytes<R: RngCore + CryptoRng>(&self, dest: &mut [u8], rng: &mut R) {
        rng.fill_bytes(dest);
    }
}

/// `curve25519-dalek` binding for the ristretto255 group.
#[derive(Clone, Copy, Debug, Default)]
pub struct Ristretto255;

impl Ristretto255 {
    fn decompress(point: &Point) -> Result<RistrettoPoint, OprfError> {
        CompressedRistretto(*point).decompress().ok_or_else(|| {
            OprfError::InvalidPoint("Input is not a valid Ristretto255 point.".to_string())
        })
    }

    // Keys are caller-supplied and opaque: like libsodium's
    // crypto_scalarmult_ristretto255, the top bit is cleared and the value
    // taken mod the group order.
    fn key_scalar(bytes: &ScalarBytes) -> Scalar {
        let mut b = *bytes;
        b[31] &= 0x7f;
        Scalar::from_bytes_mod_order(b)
    }

    fn canonical_scalar(bytes: &ScalarBytes) -> Result<Scalar, OprfError> {
        Option::<Scalar>::from(Scalar::from_canonical_bytes(*bytes)).ok_or_else(|| {
            OprfError::InvalidInput("Scalar is not canonical (>= group order).".to_string())
        })
    }
}

impl Group for Ristretto255 {
    fn hash_to_group(&self, uniform_bytes: &[u8; UNIFORM_BYTES]) -> Point {
        RistrettoPoint::from_uniform_bytes(uniform_bytes)
            .compress()
            .to_bytes()
    }

    fn random_scalar<R: RngCore + CryptoRng>(&self, rng: &mut R) -> ScalarBytes {
        // Scalar::random reduces 512 uniform bits, so the result is uniform
        // over [0, L); zero is rejected to keep the scalar invertible.
        loop {
            let scalar = Scalar::random(rng);
            if scalar != Scalar::ZERO {
                return scalar.to_bytes();
            }
        }
    }

    fn is_valid_point(&self, point: &Point) -> bool {
        CompressedRistretto(*point).decompress().is_some()
    }

    fn scalar_multiply(&self, point: &Point, scalar: &ScalarBytes) -> Result<Point, OprfError> {
        let p = Self::decompress(point)?;
        Ok((Self::key_scalar(scalar) * p).compress().to_bytes())
    }

    fn add(&self, a: &Point, b: &Point) -> Result<Point, OprfError> {
        Ok((Self::decompress(a)? + Self::decompress(b)?)
            .compress()
            .to_bytes())
    }

    fn subtract(&self, a: &Point, b: &Point) -> Result<Point, OprfError> {
        Ok((Self::decompress(a)? - Self::decompress(b)?)
            .compress()
            .to_bytes())
    }

    fn invert_scalar(&self, scalar: &ScalarBytes) -> Result<ScalarBytes, OprfError> {
        let s = Self::canonical_scalar(scalar)?;
        if s == Scalar::ZERO {
            return Err(OprfError::InvalidInput(
                "Cannot invert the zero scalar.".to_string(),
            ));
        }
        Ok(s.invert().to_bytes())
    }

    fn add_scalars(&self, a: &ScalarBytes, b: &ScalarBytes) -> ScalarBytes {
        (Self::key_scalar(a) + Self::key_scalar(b)).to_bytes()
    }
}

#[cfg(test)]
#[path = "group_tests.rs"]
mod group_test;

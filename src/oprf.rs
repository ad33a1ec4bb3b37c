use blake2::{Blake2b512, Digest};
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};

use crate::error::OprfError;
use crate::group::{Group, Point, Ristretto255, ScalarBytes, UNIFORM_BYTES};

/// A blinded point together with the mask that produced it.
///
/// Lives for exactly one blind -> evaluate -> unblind round; the pairing
/// between the mask and its evaluated point is the caller's to keep.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct MaskedData {
    pub point: Point,
    pub mask: ScalarBytes,
}

/// The OPRF engine, parameterized over its group backend.
///
/// All operations are pure functions over their inputs; randomness comes
/// in through an explicit RNG argument, so the engine itself holds no
/// state and is freely shared across threads.
#[derive(Clone, Copy, Debug, Default)]
pub struct Oprf<G: Group = Ristretto255> {
    group: G,
}

impl Oprf<Ristretto255> {
    pub fn new() -> Self {
        Oprf {
            group: Ristretto255,
        }
    }
}

impl<G: Group> Oprf<G> {
    pub fn with_group(group: G) -> Self {
        Oprf { group }
    }

    /// Deterministically hashes an arbitrary byte string to a uniformly
    /// distributed group element.
    pub fn hash_to_point(&self, input: &[u8]) -> Point {
        let mut hasher = Blake2b512::new();
        hasher.update(input);
        let mut uniform = [0u8; UNIFORM_BYTES];
        uniform.copy_from_slice(&hasher.finalize());
        self.group.hash_to_group(&uniform)
    }

    /// Uniform scalar in [1, L), suitable as a mask or a fresh PRF key.
    pub fn generate_random_scalar<R: RngCore + CryptoRng>(&self, rng: &mut R) -> ScalarBytes {
        self.group.random_scalar(rng)
    }

    /// Hashes the input to a point and masks it with a fresh random scalar.
    ///
    /// An empty input is a malformed request and fails with `InvalidInput`.
    pub fn mask_input<R: RngCore + CryptoRng>(
        &self,
        input: &[u8],
        rng: &mut R,
    ) -> Result<MaskedData, OprfError> {
        if input.is_empty() {
            return Err(OprfError::InvalidInput("Empty input string.".to_string()));
        }
        let point = self.hash_to_point(input);
        self.mask_point(&point, rng)
    }

    /// Masks a point with a fresh random scalar, hiding it from whoever
    /// evaluates it next.
    pub fn mask_point<R: RngCore + CryptoRng>(
        &self,
        point: &Point,
        rng: &mut R,
    ) -> Result<MaskedData, OprfError> {
        let mask = self.group.random_scalar(rng);
        let masked = self.group.scalar_multiply(point, &mask)?;
        Ok(MaskedData {
            point: masked,
            mask,
        })
    }

    /// Multiplies a point by a scalar key, the server half of the protocol.
    ///
    /// The point is validated as a group element first; bytes that do not
    /// decode to one fail with `InvalidPoint` before any arithmetic runs.
    pub fn scalar_mult(&self, point: &Point, key: &ScalarBytes) -> Result<Point, OprfError> {
        self.group.scalar_multiply(point, key)
    }

    /// Removes a previously applied mask by multiplying with its modular
    /// inverse, recovering `hash_to_point(input) * key`.
    ///
    /// The evaluated point passes the same validity gate as `scalar_mult`.
    /// A mask other than the one produced alongside the masked point still
    /// yields a well-formed point, just an unrelated one; the engine cannot
    /// tell the difference.
    pub fn unmask_point(
        &self,
        masked_point: &Point,
        mask: &ScalarBytes,
    ) -> Result<Point, OprfError> {
        let mask_inv = self.group.invert_scalar(mask)?;
        self.group.scalar_multiply(masked_point, &mask_inv)
    }

    pub fn add_points(&self, a: &Point, b: &Point) -> Result<Point, OprfError> {
        self.group.add(a, b)
    }

    pub fn subtract_points(&self, a: &Point, b: &Point) -> Result<Point, OprfError> {
        self.group.subtract(a, b)
    }

    pub fn is_valid_point(&self, point: &Point) -> bool {
        self.group.is_valid_point(point)
    }
}

#[cfg(test)]
#[path = "oprf_tests.rs"]
mod oprf_test;

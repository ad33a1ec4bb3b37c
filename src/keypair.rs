use curve25519_dalek::constants;
use curve25519_dalek::scalar::Scalar;
use rand::{CryptoRng, RngCore};

use crate::error::OprfError;

pub type PublicKey = [u8; 32];
pub type PrivateKey = [u8; 32];

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, Eq, PartialEq)]
pub struct Keypair {
    pub private_key: PrivateKey,
    pub public_key: PublicKey,
}

impl Keypair {
    pub fn new<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let private_key = Scalar::random(rng);
        Self::from_scalar(private_key)
    }

    /// Parses a private key from its hexadecimal wire form.
    ///
    /// The key must decode to exactly 32 bytes and be a canonical scalar
    /// below the group order.
    pub fn from_hex(hex_key: &str) -> Result<Self, OprfError> {
        let bytes = hex::decode(hex_key)
            .map_err(|e| OprfError::InvalidInput(format!("Private key is not valid hex: {}", e)))?;
        let bytes: PrivateKey = bytes.try_into().map_err(|_| {
            OprfError::InvalidInput("Private key must be exactly 32 bytes.".to_string())
        })?;
        let private_key =
            Option::<Scalar>::from(Scalar::from_canonical_bytes(bytes)).ok_or_else(|| {
                OprfError::InvalidInput("Private key is not a canonical scalar.".to_string())
            })?;
        Ok(Self::from_scalar(private_key))
    }

    fn from_scalar(private_key: Scalar) -> Self {
        let public_key = &constants::RISTRETTO_BASEPOINT_POINT * private_key;
        Keypair {
            private_key: private_key.to_bytes(),
            public_key: public_key.compress().to_bytes(),
        }
    }
}

#[cfg(test)]
#[path = "keypair_tests.rs"]
mod keypair_test;

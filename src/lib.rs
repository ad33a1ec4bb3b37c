//! Two-party oblivious pseudorandom function over ristretto255, in the
//! classic 2HashDH shape: the client hashes its input to a group element
//! and masks it with a fresh random scalar, the server multiplies the
//! masked point by its secret key, and the client strips the mask with its
//! modular inverse. The client ends up with `hash_to_point(input) * key`
//! without the server seeing the input or the client seeing the key.
//!
//! ```
//! use oprf_ristretto::Oprf;
//! use rand::rngs::OsRng;
//!
//! let oprf = Oprf::new();
//! let key = oprf.generate_random_scalar(&mut OsRng);
//!
//! // client
//! let masked = oprf.mask_input(b"hunter2", &mut OsRng).unwrap();
//! // server
//! let evaluated = oprf.scalar_mult(&masked.point, &key).unwrap();
//! // client
//! let output = oprf.unmask_point(&evaluated, &masked.mask).unwrap();
//!
//! let expected = oprf.scalar_mult(&oprf.hash_to_point(b"hunter2"), &key).unwrap();
//! assert_eq!(output, expected);
//! ```

pub mod codec;
pub mod error;
pub mod group;
pub mod keypair;
pub mod oprf;

pub use codec::{code_to_string, decode_point, encode_point, string_to_code, Encoding};
pub use error::OprfError;
pub use group::{Group, Point, Ristretto255, ScalarBytes};
pub use keypair::Keypair;
pub use oprf::{MaskedData, Oprf};

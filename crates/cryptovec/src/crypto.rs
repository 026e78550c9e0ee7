//! Rounds of the AES block cipher and the SHA-2 sigma functions, built on the cryptographic
//! extensions of the target.
//!
//! This module is only available when [`HAS_CRYPTO_EXT`](crate::HAS_CRYPTO_EXT) is `true`, which
//! requires the `aes` target feature. There is no portable fallback.

mod aes;
mod sha;

pub use aes::{aes_decrypt_final_round, aes_decrypt_round, aes_encrypt_final_round, aes_encrypt_round};
pub use sha::{sha256_sigma, sha512_sigma};

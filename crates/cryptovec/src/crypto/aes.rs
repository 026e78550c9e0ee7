//! State and round keys are 16 bytes in memory order, which for AES is the column-major order of
//! the state matrix.

use crate::v128::{self, Vector, V128};

cfg_if::cfg_if! {
    if #[cfg(simd_sse2_intrinsics)] {
        use crate::intrinsics::sse2::{self, __m128i};

        macro_rules! rounds {
            ($($name:ident => $intrinsic:ident,)*) => {$(
                #[inline]
                fn $name(state: __m128i, key: __m128i) -> __m128i {
                    // SAFETY: module compiled only when `aes` is enabled.
                    unsafe { sse2::$intrinsic(state, key) }
                }
            )*};
        }

        rounds! {
            encrypt => _mm_aesenc_si128,
            encrypt_last => _mm_aesenclast_si128,
            decrypt => _mm_aesdec_si128,
            decrypt_last => _mm_aesdeclast_si128,
        }
    } else if #[cfg(simd_neon_intrinsics)] {
        use crate::intrinsics::neon::{self, uint8x16_t};

        // `AESE` and `AESD` add the round key before substitution, so they are given a zero key
        // and the real key is added afterwards.

        #[inline]
        fn encrypt(state: uint8x16_t, key: uint8x16_t) -> uint8x16_t {
            // SAFETY: module compiled only when `aes` is enabled.
            unsafe {
                let zero = neon::vdupq_n_u8(0);
                neon::veorq_u8(neon::vaesmcq_u8(neon::vaeseq_u8(state, zero)), key)
            }
        }

        #[inline]
        fn encrypt_last(state: uint8x16_t, key: uint8x16_t) -> uint8x16_t {
            // SAFETY: module compiled only when `aes` is enabled.
            unsafe { neon::veorq_u8(neon::vaeseq_u8(state, neon::vdupq_n_u8(0)), key) }
        }

        #[inline]
        fn decrypt(state: uint8x16_t, key: uint8x16_t) -> uint8x16_t {
            // SAFETY: module compiled only when `aes` is enabled.
            unsafe {
                let zero = neon::vdupq_n_u8(0);
                neon::veorq_u8(neon::vaesimcq_u8(neon::vaesdq_u8(state, zero)), key)
            }
        }

        #[inline]
        fn decrypt_last(state: uint8x16_t, key: uint8x16_t) -> uint8x16_t {
            // SAFETY: module compiled only when `aes` is enabled.
            unsafe { neon::veorq_u8(neon::vaesdq_u8(state, neon::vdupq_n_u8(0)), key) }
        }
    } else {
        compile_error!("AES rounds require the `sse2` or `neon` backend");
    }
}

/// Performs one full round of AES encryption: `MixColumns(ShiftRows(SubBytes(state))) ^ key`.
#[inline]
pub fn aes_encrypt_round<T: Vector, K: Vector>(state: T, key: K) -> T {
    T::from(V128(encrypt(v128::repr(state), v128::repr(key))))
}

/// Performs the final round of AES encryption: `ShiftRows(SubBytes(state)) ^ key`.
#[inline]
pub fn aes_encrypt_final_round<T: Vector, K: Vector>(state: T, key: K) -> T {
    T::from(V128(encrypt_last(v128::repr(state), v128::repr(key))))
}

/// Performs one full round of the equivalent inverse AES cipher:
/// `InvMixColumns(InvShiftRows(InvSubBytes(state))) ^ key`.
///
/// The round keys of the middle rounds must have `InvMixColumns` applied to them.
#[inline]
pub fn aes_decrypt_round<T: Vector, K: Vector>(state: T, key: K) -> T {
    T::from(V128(decrypt(v128::repr(state), v128::repr(key))))
}

/// Performs the final round of AES decryption: `InvShiftRows(InvSubBytes(state)) ^ key`.
#[inline]
pub fn aes_decrypt_final_round<T: Vector, K: Vector>(state: T, key: K) -> T {
    T::from(V128(decrypt_last(v128::repr(state), v128::repr(key))))
}

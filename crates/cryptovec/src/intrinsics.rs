//! Re-exports target architecture-specific intrinsics.
//!
//! These are only provided on supported platforms when the `simd-intrinsics` feature flag is
//! enabled.

/// Provides [SSE2] SIMD intrinsics available on `x86` and `x86_64` platforms, along with those
/// introduced in later extensions when the corresponding target features are enabled.
///
/// [SSE2]: https://en.wikipedia.org/wiki/SSE2
#[cfg(simd_sse2_intrinsics)]
pub(crate) mod sse2 {
    #[cfg(target_arch = "x86")]
    use core::arch::x86 as intrin;

    #[cfg(target_arch = "x86_64")]
    use core::arch::x86_64 as intrin;

    pub(crate) use intrin::{
        __m128i, _mm_add_epi16, _mm_add_epi32, _mm_add_epi64, _mm_add_epi8, _mm_and_si128,
        _mm_cmpeq_epi32, _mm_cmplt_epi32, _mm_cvtsi32_si128, _mm_load_si128, _mm_loadu_si128,
        _mm_movemask_epi8, _mm_or_si128, _mm_set1_epi16, _mm_set1_epi32, _mm_set1_epi64x,
        _mm_set1_epi8, _mm_setzero_si128, _mm_sll_epi32, _mm_sll_epi64, _mm_srl_epi32,
        _mm_srl_epi64, _mm_srli_epi32, _mm_store_si128, _mm_storeu_si128, _mm_sub_epi16,
        _mm_sub_epi32, _mm_sub_epi64, _mm_sub_epi8, _mm_xor_si128,
    };

    #[cfg(simd_ssse3_intrinsics)]
    pub(crate) use intrin::{_mm_andnot_si128, _mm_cmpgt_epi8, _mm_shuffle_epi8};

    #[cfg(simd_crypto)]
    pub(crate) use intrin::{
        _mm_aesdec_si128, _mm_aesdeclast_si128, _mm_aesenc_si128, _mm_aesenclast_si128,
    };
}

/// Provides [NEON] SIMD intrinsics available on little-endian `aarch64` platforms.
///
/// [NEON]: https://developer.arm.com/Architectures/Neon
#[cfg(simd_neon_intrinsics)]
pub(crate) mod neon {
    pub(crate) use core::arch::aarch64::{
        uint8x16_t, uint8x16x2_t, vaddq_u16, vaddq_u32, vaddq_u64, vaddq_u8, vandq_u8, vceqq_u32,
        vcltq_u32, vdupq_n_s32, vdupq_n_s64, vdupq_n_u16, vdupq_n_u32, vdupq_n_u64, vdupq_n_u8,
        veorq_u8, vld1q_u8, vminvq_u32, vmvnq_u8, vorrq_u8, vqtbl2q_u8, vreinterpretq_u16_u8,
        vreinterpretq_u32_u8, vreinterpretq_u64_u8, vreinterpretq_u8_u16, vreinterpretq_u8_u32,
        vreinterpretq_u8_u64, vshlq_u32, vshlq_u64, vshrq_n_u32, vst1q_u8, vsubq_u16, vsubq_u32,
        vsubq_u64, vsubq_u8,
    };

    #[cfg(simd_crypto)]
    pub(crate) use core::arch::aarch64::{vaesdq_u8, vaeseq_u8, vaesimcq_u8, vaesmcq_u8};
}

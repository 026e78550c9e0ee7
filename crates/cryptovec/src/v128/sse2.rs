//! Implements 128-bit vector operations for `x86` and `x86_64` platforms, utilizing [SSE2]
//! intrinsics and those introduced in later extensions.
//!
//! [SSE2]: https://en.wikipedia.org/wiki/SSE2

use crate::intrinsics::sse2::{self, __m128i};
use crate::v128::Bytes;

pub(crate) type Repr = __m128i;

#[inline]
pub(crate) fn zero() -> Repr {
    // SAFETY: module compiled only when `sse2` is enabled.
    unsafe { sse2::_mm_setzero_si128() }
}

#[inline]
pub(crate) fn from_bytes(bytes: [u8; 16]) -> Repr {
    // SAFETY: module compiled only when `sse2` is enabled.
    // SAFETY: `bytes` is valid for reads of 16 bytes.
    unsafe { sse2::_mm_loadu_si128(bytes.as_ptr().cast::<__m128i>()) }
}

#[inline]
pub(crate) fn to_bytes(v: Repr) -> [u8; 16] {
    let mut bytes = Bytes::default();

    // SAFETY: module compiled only when `sse2` is enabled.
    // SAFETY: `bytes.bytes` is aligned to 16 bytes.
    unsafe {
        sse2::_mm_store_si128((&mut bytes as *mut Bytes).cast::<__m128i>(), v);
    }

    bytes.bytes
}

/// # Safety
///
/// `src` must be valid for reads of 16 bytes.
#[inline]
pub(crate) unsafe fn load_unaligned(src: *const u8) -> Repr {
    // SAFETY: module compiled only when `sse2` is enabled, caller ensures `src` is valid.
    unsafe { sse2::_mm_loadu_si128(src.cast::<__m128i>()) }
}

/// # Safety
///
/// `src` must be valid for reads of 16 bytes, and aligned to 16 bytes.
#[inline]
pub(crate) unsafe fn load_aligned(src: *const u8) -> Repr {
    // SAFETY: module compiled only when `sse2` is enabled, caller ensures `src` is valid.
    unsafe { sse2::_mm_load_si128(src.cast::<__m128i>()) }
}

/// # Safety
///
/// `dst` must be valid for writes of 16 bytes.
#[inline]
pub(crate) unsafe fn store_unaligned(dst: *mut u8, v: Repr) {
    // SAFETY: module compiled only when `sse2` is enabled, caller ensures `dst` is valid.
    unsafe { sse2::_mm_storeu_si128(dst.cast::<__m128i>(), v) }
}

/// # Safety
///
/// `dst` must be valid for writes of 16 bytes, and aligned to 16 bytes.
#[inline]
pub(crate) unsafe fn store_aligned(dst: *mut u8, v: Repr) {
    // SAFETY: module compiled only when `sse2` is enabled, caller ensures `dst` is valid.
    unsafe { sse2::_mm_store_si128(dst.cast::<__m128i>(), v) }
}

macro_rules! binops {
    ($($name:ident => $intrinsic:ident,)*) => {$(
        #[inline]
        pub(crate) fn $name(a: Repr, b: Repr) -> Repr {
            // SAFETY: module compiled only when `sse2` is enabled.
            unsafe { sse2::$intrinsic(a, b) }
        }
    )*};
}

binops! {
    and => _mm_and_si128,
    or => _mm_or_si128,
    xor => _mm_xor_si128,
    add_u8 => _mm_add_epi8,
    add_u16 => _mm_add_epi16,
    add_u32 => _mm_add_epi32,
    add_u64 => _mm_add_epi64,
    sub_u8 => _mm_sub_epi8,
    sub_u16 => _mm_sub_epi16,
    sub_u32 => _mm_sub_epi32,
    sub_u64 => _mm_sub_epi64,
}

#[inline]
pub(crate) fn not(v: Repr) -> Repr {
    xor(v, splat_u32(u32::MAX))
}

#[inline]
pub(crate) fn eq(a: Repr, b: Repr) -> bool {
    // SAFETY: module compiled only when `sse2` is enabled.
    unsafe { sse2::_mm_movemask_epi8(sse2::_mm_cmpeq_epi32(a, b)) == 0xFFFF }
}

#[allow(clippy::cast_possible_wrap)]
mod splat {
    use super::{sse2, Repr};

    macro_rules! splats {
        ($($name:ident($int:ty as $signed:ty) => $intrinsic:ident,)*) => {$(
            #[inline]
            pub(crate) fn $name(x: $int) -> Repr {
                // SAFETY: module compiled only when `sse2` is enabled.
                unsafe { sse2::$intrinsic(x as $signed) }
            }
        )*};
    }

    splats! {
        splat_u8(u8 as i8) => _mm_set1_epi8,
        splat_u16(u16 as i16) => _mm_set1_epi16,
        splat_u32(u32 as i32) => _mm_set1_epi32,
        splat_u64(u64 as i64) => _mm_set1_epi64x,
    }
}

pub(crate) use splat::{splat_u16, splat_u32, splat_u64, splat_u8};

/// Gets the carry out of each 32-bit lane of `a + b`, as a `0` or `1` in that lane.
#[inline]
pub(crate) fn carry_u32(a: Repr, b: Repr) -> Repr {
    // SSE2 only has signed comparisons, flipping the sign bits gives an unsigned `sum < a`.
    let bias = splat_u32(0x8000_0000);
    let sum = add_u32(a, b);

    // SAFETY: module compiled only when `sse2` is enabled.
    unsafe {
        let wrapped = sse2::_mm_cmplt_epi32(xor(sum, bias), xor(a, bias));
        sse2::_mm_srli_epi32::<31>(wrapped)
    }
}

macro_rules! shifts {
    ($($name:ident => $intrinsic:ident,)*) => {$(
        /// Shifts every lane by `count` bits, producing zero if `count` is not less than the lane
        /// width.
        #[inline]
        pub(crate) fn $name(v: Repr, count: u32) -> Repr {
            let count = i32::try_from(count).unwrap_or(i32::MAX);

            // SAFETY: module compiled only when `sse2` is enabled.
            unsafe { sse2::$intrinsic(v, sse2::_mm_cvtsi32_si128(count)) }
        }
    )*};
}

shifts! {
    shl_u32 => _mm_sll_epi32,
    shr_u32 => _mm_srl_epi32,
    shl_u64 => _mm_sll_epi64,
    shr_u64 => _mm_srl_epi64,
}

/// Selects bytes from the concatenation of `a` and `b`, indices are taken modulo 32.
#[cfg(simd_ssse3_intrinsics)]
#[inline]
pub(crate) fn permute2(a: Repr, b: Repr, mask: Repr) -> Repr {
    // `pshufb` zeroes a byte when bit 7 of its index is set, each source is shuffled with the
    // indices of the other source disabled.
    let indices = and(mask, splat_u8(0x1F));
    let disable = splat_u8(0x80);

    // SAFETY: module compiled only when `ssse3` is enabled.
    unsafe {
        let from_b = sse2::_mm_cmpgt_epi8(indices, splat_u8(15));
        let select_a = or(indices, and(from_b, disable));
        let select_b = or(indices, sse2::_mm_andnot_si128(from_b, disable));
        or(
            sse2::_mm_shuffle_epi8(a, select_a),
            sse2::_mm_shuffle_epi8(b, select_b),
        )
    }
}

/// Selects bytes from the concatenation of `a` and `b`, indices are taken modulo 32.
#[cfg(not(simd_ssse3_intrinsics))]
#[inline]
pub(crate) fn permute2(a: Repr, b: Repr, mask: Repr) -> Repr {
    from_bytes(crate::v128::gather(
        to_bytes(a),
        to_bytes(b),
        to_bytes(mask),
    ))
}

//! Implements 128-bit vector operations for little-endian `aarch64` platforms, utilizing [NEON]
//! intrinsics.
//!
//! [NEON]: https://developer.arm.com/Architectures/Neon

use crate::intrinsics::neon::{self, uint8x16_t};

pub(crate) type Repr = uint8x16_t;

#[inline]
pub(crate) fn zero() -> Repr {
    // SAFETY: module compiled only when `neon` is enabled.
    unsafe { neon::vdupq_n_u8(0) }
}

#[inline]
pub(crate) fn from_bytes(bytes: [u8; 16]) -> Repr {
    // SAFETY: module compiled only when `neon` is enabled.
    // SAFETY: `bytes` is valid for reads of 16 bytes.
    unsafe { neon::vld1q_u8(bytes.as_ptr()) }
}

#[inline]
pub(crate) fn to_bytes(v: Repr) -> [u8; 16] {
    let mut bytes = [0u8; 16];

    // SAFETY: module compiled only when `neon` is enabled.
    // SAFETY: `bytes` is valid for writes of 16 bytes.
    unsafe { neon::vst1q_u8(bytes.as_mut_ptr(), v) };

    bytes
}

/// # Safety
///
/// `src` must be valid for reads of 16 bytes.
#[inline]
pub(crate) unsafe fn load_unaligned(src: *const u8) -> Repr {
    // SAFETY: module compiled only when `neon` is enabled, caller ensures `src` is valid.
    unsafe { neon::vld1q_u8(src) }
}

/// # Safety
///
/// `src` must be valid for reads of 16 bytes, and aligned to 16 bytes.
#[inline]
pub(crate) unsafe fn load_aligned(src: *const u8) -> Repr {
    // SAFETY: caller ensures `src` is valid.
    unsafe { load_unaligned(src) }
}

/// # Safety
///
/// `dst` must be valid for writes of 16 bytes.
#[inline]
pub(crate) unsafe fn store_unaligned(dst: *mut u8, v: Repr) {
    // SAFETY: module compiled only when `neon` is enabled, caller ensures `dst` is valid.
    unsafe { neon::vst1q_u8(dst, v) }
}

/// # Safety
///
/// `dst` must be valid for writes of 16 bytes, and aligned to 16 bytes.
#[inline]
pub(crate) unsafe fn store_aligned(dst: *mut u8, v: Repr) {
    // SAFETY: caller ensures `dst` is valid.
    unsafe { store_unaligned(dst, v) }
}

macro_rules! byte_binops {
    ($($name:ident => $intrinsic:ident,)*) => {$(
        #[inline]
        pub(crate) fn $name(a: Repr, b: Repr) -> Repr {
            // SAFETY: module compiled only when `neon` is enabled.
            unsafe { neon::$intrinsic(a, b) }
        }
    )*};
}

byte_binops! {
    and => vandq_u8,
    or => vorrq_u8,
    xor => veorq_u8,
    add_u8 => vaddq_u8,
    sub_u8 => vsubq_u8,
}

macro_rules! lane_binops {
    ($($name:ident => $intrinsic:ident($from:ident, $into:ident),)*) => {$(
        #[inline]
        pub(crate) fn $name(a: Repr, b: Repr) -> Repr {
            // SAFETY: module compiled only when `neon` is enabled.
            unsafe { neon::$into(neon::$intrinsic(neon::$from(a), neon::$from(b))) }
        }
    )*};
}

lane_binops! {
    add_u16 => vaddq_u16(vreinterpretq_u16_u8, vreinterpretq_u8_u16),
    add_u32 => vaddq_u32(vreinterpretq_u32_u8, vreinterpretq_u8_u32),
    add_u64 => vaddq_u64(vreinterpretq_u64_u8, vreinterpretq_u8_u64),
    sub_u16 => vsubq_u16(vreinterpretq_u16_u8, vreinterpretq_u8_u16),
    sub_u32 => vsubq_u32(vreinterpretq_u32_u8, vreinterpretq_u8_u32),
    sub_u64 => vsubq_u64(vreinterpretq_u64_u8, vreinterpretq_u8_u64),
}

#[inline]
pub(crate) fn not(v: Repr) -> Repr {
    // SAFETY: module compiled only when `neon` is enabled.
    unsafe { neon::vmvnq_u8(v) }
}

#[inline]
pub(crate) fn eq(a: Repr, b: Repr) -> bool {
    // SAFETY: module compiled only when `neon` is enabled.
    unsafe {
        let lanes = neon::vceqq_u32(neon::vreinterpretq_u32_u8(a), neon::vreinterpretq_u32_u8(b));
        neon::vminvq_u32(lanes) == u32::MAX
    }
}

macro_rules! splats {
    ($($name:ident($int:ty) => $intrinsic:ident $(as $into:ident)?,)*) => {$(
        #[inline]
        pub(crate) fn $name(x: $int) -> Repr {
            // SAFETY: module compiled only when `neon` is enabled.
            unsafe { $(neon::$into)?(neon::$intrinsic(x)) }
        }
    )*};
}

splats! {
    splat_u8(u8) => vdupq_n_u8,
    splat_u16(u16) => vdupq_n_u16 as vreinterpretq_u8_u16,
    splat_u32(u32) => vdupq_n_u32 as vreinterpretq_u8_u32,
    splat_u64(u64) => vdupq_n_u64 as vreinterpretq_u8_u64,
}

/// Gets the carry out of each 32-bit lane of `a + b`, as a `0` or `1` in that lane.
#[inline]
pub(crate) fn carry_u32(a: Repr, b: Repr) -> Repr {
    // SAFETY: module compiled only when `neon` is enabled.
    unsafe {
        let a = neon::vreinterpretq_u32_u8(a);
        let sum = neon::vaddq_u32(a, neon::vreinterpretq_u32_u8(b));
        neon::vreinterpretq_u8_u32(neon::vshrq_n_u32::<31>(neon::vcltq_u32(sum, a)))
    }
}

// `USHL` shifts right for negative counts, and produces zero once the count reaches the lane width.
fn shift_count(count: u32) -> i8 {
    i8::try_from(count).unwrap_or(i8::MAX)
}

#[inline]
pub(crate) fn shl_u32(v: Repr, count: u32) -> Repr {
    let count = i32::from(shift_count(count));

    // SAFETY: module compiled only when `neon` is enabled.
    unsafe {
        let shifted = neon::vshlq_u32(neon::vreinterpretq_u32_u8(v), neon::vdupq_n_s32(count));
        neon::vreinterpretq_u8_u32(shifted)
    }
}

#[inline]
pub(crate) fn shr_u32(v: Repr, count: u32) -> Repr {
    let count = -i32::from(shift_count(count));

    // SAFETY: module compiled only when `neon` is enabled.
    unsafe {
        let shifted = neon::vshlq_u32(neon::vreinterpretq_u32_u8(v), neon::vdupq_n_s32(count));
        neon::vreinterpretq_u8_u32(shifted)
    }
}

#[inline]
pub(crate) fn shl_u64(v: Repr, count: u32) -> Repr {
    let count = i64::from(shift_count(count));

    // SAFETY: module compiled only when `neon` is enabled.
    unsafe {
        let shifted = neon::vshlq_u64(neon::vreinterpretq_u64_u8(v), neon::vdupq_n_s64(count));
        neon::vreinterpretq_u8_u64(shifted)
    }
}

#[inline]
pub(crate) fn shr_u64(v: Repr, count: u32) -> Repr {
    let count = -i64::from(shift_count(count));

    // SAFETY: module compiled only when `neon` is enabled.
    unsafe {
        let shifted = neon::vshlq_u64(neon::vreinterpretq_u64_u8(v), neon::vdupq_n_s64(count));
        neon::vreinterpretq_u8_u64(shifted)
    }
}

/// Selects bytes from the concatenation of `a` and `b`, indices are taken modulo 32.
#[inline]
pub(crate) fn permute2(a: Repr, b: Repr, mask: Repr) -> Repr {
    // SAFETY: module compiled only when `neon` is enabled.
    unsafe {
        let table = neon::uint8x16x2_t(a, b);
        neon::vqtbl2q_u8(table, neon::vandq_u8(mask, neon::vdupq_n_u8(0x1F)))
    }
}

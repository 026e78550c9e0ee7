//! SHA-256 and SHA-512 sigma functions computed on every lane at once.
//!
//! `FUNC` selects the lowercase message schedule functions (`0`) or the uppercase compression
//! functions (`1`). Bit `i` of `SUBFUNC`, counting from the least significant bit, selects
//! function 1 rather than function 0 for lane `i`, where lane `i` is the `i`-th lane in memory
//! order. SHA-512 reads bits 0 and 1 only. This differs from the POWER `vshasigmaw` and
//! `vshasigmad` instructions, which number the selector field from its most significant bit and
//! have the doubleword form read bits 0 and 2. Both orders agree for `0` and `0xF`.

use crate::arith::{rotr_u32, rotr_u64, shr_u32, shr_u64};
use crate::v128::{U32x4, U64x2};

/// Chooses, lane by lane, `f1` where bit `i` of `select` is set and `f0` elsewhere.
#[inline]
fn blend32(f0: U32x4, f1: U32x4, select: u32) -> U32x4 {
    let mask = U32x4::from_lanes(core::array::from_fn(|i| 0u32.wrapping_sub((select >> i) & 1)));
    (f0 & !mask) | (f1 & mask)
}

#[inline]
fn blend64(f0: U64x2, f1: U64x2, select: u32) -> U64x2 {
    let mask =
        U64x2::from_lanes(core::array::from_fn(|i| 0u64.wrapping_sub(u64::from((select >> i) & 1))));
    (f0 & !mask) | (f1 & mask)
}

/// Computes a SHA-256 sigma function on each of the four 32-bit lanes of `v`.
///
/// Lane `i` uses function 1 when `SUBFUNC & (1 << i)` is set, so `0b0001` selects it for the
/// first lane in memory order only.
///
/// | `FUNC` | function 0 | function 1 |
/// |---|---|---|
/// | `0` | `σ0(x) = ROTR⁷(x) ^ ROTR¹⁸(x) ^ SHR³(x)` | `σ1(x) = ROTR¹⁷(x) ^ ROTR¹⁹(x) ^ SHR¹⁰(x)` |
/// | `1` | `Σ0(x) = ROTR²(x) ^ ROTR¹³(x) ^ ROTR²²(x)` | `Σ1(x) = ROTR⁶(x) ^ ROTR¹¹(x) ^ ROTR²⁵(x)` |
#[inline]
pub fn sha256_sigma<const FUNC: u32, const SUBFUNC: u32>(v: U32x4) -> U32x4 {
    let function = |one: bool| match (FUNC, one) {
        (0, false) => rotr_u32(v, 7) ^ rotr_u32(v, 18) ^ shr_u32(v, 3),
        (0, true) => rotr_u32(v, 17) ^ rotr_u32(v, 19) ^ shr_u32(v, 10),
        (_, false) => rotr_u32(v, 2) ^ rotr_u32(v, 13) ^ rotr_u32(v, 22),
        (_, true) => rotr_u32(v, 6) ^ rotr_u32(v, 11) ^ rotr_u32(v, 25),
    };

    match SUBFUNC & 0xF {
        0 => function(false),
        0xF => function(true),
        select => blend32(function(false), function(true), select),
    }
}

/// Computes a SHA-512 sigma function on each of the two 64-bit lanes of `v`.
///
/// Lane `i` uses function 1 when `SUBFUNC & (1 << i)` is set, other bits are ignored. `0b10`
/// selects it for the second lane in memory order only.
///
/// | `FUNC` | function 0 | function 1 |
/// |---|---|---|
/// | `0` | `σ0(x) = ROTR¹(x) ^ ROTR⁸(x) ^ SHR⁷(x)` | `σ1(x) = ROTR¹⁹(x) ^ ROTR⁶¹(x) ^ SHR⁶(x)` |
/// | `1` | `Σ0(x) = ROTR²⁸(x) ^ ROTR³⁴(x) ^ ROTR³⁹(x)` | `Σ1(x) = ROTR¹⁴(x) ^ ROTR¹⁸(x) ^ ROTR⁴¹(x)` |
#[inline]
pub fn sha512_sigma<const FUNC: u32, const SUBFUNC: u32>(v: U64x2) -> U64x2 {
    let function = |one: bool| match (FUNC, one) {
        (0, false) => rotr_u64(v, 1) ^ rotr_u64(v, 8) ^ shr_u64(v, 7),
        (0, true) => rotr_u64(v, 19) ^ rotr_u64(v, 61) ^ shr_u64(v, 6),
        (_, false) => rotr_u64(v, 28) ^ rotr_u64(v, 34) ^ rotr_u64(v, 39),
        (_, true) => rotr_u64(v, 14) ^ rotr_u64(v, 18) ^ rotr_u64(v, 41),
    };

    match SUBFUNC & 0x3 {
        0 => function(false),
        0x3 => function(true),
        select => blend64(function(false), function(true), select),
    }
}

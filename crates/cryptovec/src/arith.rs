//! Bitwise operations, lane-wise arithmetic, bit rotations and equality.
//!
//! Binary operations take their second operand as any vector type, reinterpreting it as the type
//! of the first operand.

pub mod emulated;

use crate::v128::{self, implementation, Lanes, U32x4, U64x2, Vector, V128};

/// Bitwise AND of `v1` and `v2`.
#[inline]
pub fn and<T: Vector, U: Vector>(v1: T, v2: U) -> T {
    v1 & v2.reinterpret()
}

/// Bitwise OR of `v1` and `v2`.
#[inline]
pub fn or<T: Vector, U: Vector>(v1: T, v2: U) -> T {
    v1 | v2.reinterpret()
}

/// Bitwise XOR of `v1` and `v2`.
#[inline]
pub fn xor<T: Vector, U: Vector>(v1: T, v2: U) -> T {
    v1 ^ v2.reinterpret()
}

/// Lane-wise addition at the lane width of `v1`, wrapping on overflow.
#[inline]
pub fn add<T: Lanes, U: Vector>(v1: T, v2: U) -> T {
    v1.wrapping_add(v2.reinterpret())
}

/// Lane-wise subtraction at the lane width of `v1`, wrapping on overflow.
#[inline]
pub fn sub<T: Lanes, U: Vector>(v1: T, v2: U) -> T {
    v1.wrapping_sub(v2.reinterpret())
}

/// Adds the two 64-bit lanes of `v1` and `v2`, wrapping on overflow.
///
/// Without native 64-bit lanes (see [`HAS_NATIVE_U64_LANES`](crate::HAS_NATIVE_U64_LANES)), this
/// uses [`emulated::add64()`].
#[inline]
pub fn add64<T: Vector, U: Vector>(v1: T, v2: U) -> U64x2 {
    #[cfg(simd_native_u64)]
    return U64x2::from(V128(v128::repr(v1))) + U64x2::from(V128(v128::repr(v2)));

    #[cfg(not(simd_native_u64))]
    return emulated::add64(v1, v2);
}

/// Compares all 128 bits of `v1` and `v2`.
#[inline]
pub fn equal<T: Vector, U: Vector>(v1: T, v2: U) -> bool {
    implementation::eq(v128::repr(v1), v128::repr(v2))
}

/// Returns `true` if any bit of `v1` differs from `v2`.
#[inline]
pub fn not_equal<T: Vector, U: Vector>(v1: T, v2: U) -> bool {
    !equal(v1, v2)
}

macro_rules! lane_shifts {
    ($($vector:ident: $shl:ident, $shr:ident, $rotl:ident, $rotr:ident => $bits:literal;)*) => {$(
        #[inline]
        pub(crate) fn $shl(v: $vector, count: u32) -> $vector {
            $vector::from(V128(implementation::$shl(V128::from(v).0, count)))
        }

        #[inline]
        pub(crate) fn $shr(v: $vector, count: u32) -> $vector {
            $vector::from(V128(implementation::$shr(V128::from(v).0, count)))
        }

        #[inline]
        pub(crate) fn $rotl(v: $vector, count: u32) -> $vector {
            let count = count % $bits;
            if count == 0 {
                v
            } else {
                $shl(v, count) | $shr(v, $bits - count)
            }
        }

        #[inline]
        pub(crate) fn $rotr(v: $vector, count: u32) -> $vector {
            $rotl(v, ($bits - count % $bits) % $bits)
        }
    )*};
}

lane_shifts! {
    U32x4: shl_u32, shr_u32, rotl_u32, rotr_u32 => 32;
    U64x2: shl_u64, shr_u64, rotl_u64, rotr_u64 => 64;
}

/// Rotates each 32-bit lane left by `N` bits, taken modulo 32.
#[inline]
pub fn rotate_left_bits<const N: u32>(v: U32x4) -> U32x4 {
    rotl_u32(v, N)
}

/// Rotates each 32-bit lane right by `N` bits, taken modulo 32.
#[inline]
pub fn rotate_right_bits<const N: u32>(v: U32x4) -> U32x4 {
    rotr_u32(v, N)
}

/// Rotates each 64-bit lane left by `N` bits, taken modulo 64.
#[inline]
pub fn rotate_left_bits64<const N: u32>(v: U64x2) -> U64x2 {
    rotl_u64(v, N)
}

/// Rotates each 64-bit lane right by `N` bits, taken modulo 64.
#[inline]
pub fn rotate_right_bits64<const N: u32>(v: U64x2) -> U64x2 {
    rotr_u64(v, N)
}

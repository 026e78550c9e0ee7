//! Addition of 64-bit lanes using only 32-bit lane arithmetic.

use crate::permute::{self, Mask};
use crate::v128::{implementation, U32x4, U64x2, Vector, V128};

/// Moves the carry out of the low 32-bit half of each 64-bit lane into its high half, and clears
/// every other byte.
const CARRY: Mask = if cfg!(target_endian = "little") {
    Mask::new([16, 16, 16, 16, 0, 1, 2, 3, 16, 16, 16, 16, 8, 9, 10, 11])
} else {
    Mask::new([4, 5, 6, 7, 16, 16, 16, 16, 12, 13, 14, 15, 16, 16, 16, 16])
};

/// Gets the carry out of each 32-bit lane of `a + b`, as a `0` or `1` in that lane.
#[inline]
pub fn carry32(a: U32x4, b: U32x4) -> U32x4 {
    U32x4::from(V128(implementation::carry_u32(
        V128::from(a).0,
        V128::from(b).0,
    )))
}

/// Adds the two 64-bit lanes of `v1` and `v2`, wrapping on overflow.
///
/// The 32-bit halves are added separately, then the carry out of each low half is added into the
/// corresponding high half.
#[inline]
pub fn add64<T: Vector, U: Vector>(v1: T, v2: U) -> U64x2 {
    let (a, b) = (v1.reinterpret::<U32x4>(), v2.reinterpret::<U32x4>());
    let sum = a + b;
    let carry = permute::permute(carry32(a, b), CARRY);
    U64x2::from(V128::from(sum + carry))
}

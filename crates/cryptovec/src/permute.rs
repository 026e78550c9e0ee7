//! Byte permutations, and the octet shifts and rotations built on top of them.
//!
//! Shifts and rotations act on the 128-bit integer formed by the bytes of a vector in host byte
//! order. Their masks are chosen according to the endianness of the target, so that
//! [`shift_left_octet()`] always moves bytes toward the front of the *canonical big-endian view*
//! (see [`V128::to_be_bytes()`]).

use crate::v128::{implementation, Vector, V128};

/// Index used by masks to select a zero byte in the single-operand [`permute()`].
const ZERO: u8 = 16;

/// A byte permutation mask used by [`permute()`] and [`permute2()`].
///
/// Each of the 16 indices is in the range `0..=31`. Indices `0..=15` select a byte of the first
/// source vector, and indices `16..=31` select a byte of the second.
///
/// Masks are built at compile time, and never depend on the data being permuted.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Mask {
    indices: [u8; 16],
}

impl Mask {
    /// Reverses the order of all 16 bytes.
    pub const REVERSE: Self = Self::new([15, 14, 13, 12, 11, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1, 0]);

    /// The mask that leaves a vector unchanged.
    pub const IDENTITY: Self = Self::sequential(0);

    /// Creates a mask from its indices.
    ///
    /// # Panics
    ///
    /// Panics if any index is greater than `31`. In a `const` context, this is a compile error.
    pub const fn new(indices: [u8; 16]) -> Self {
        let mut i = 0;
        while i < 16 {
            assert!(indices[i] < 32, "permutation mask index out of range");
            i += 1;
        }

        Self { indices }
    }

    /// Creates the mask `[start, start + 1, ..., start + 15]`, selecting 16 consecutive bytes of
    /// the concatenation of the two sources.
    ///
    /// # Panics
    ///
    /// Panics if `start` is greater than `16`.
    #[allow(clippy::cast_possible_truncation)]
    pub const fn sequential(start: usize) -> Self {
        assert!(start <= 16, "sequential mask starts past the second source");

        let mut indices = [0u8; 16];
        let mut i = 0;
        while i < 16 {
            indices[i] = (start + i) as u8;
            i += 1;
        }

        Self { indices }
    }

    /// Moves every byte `count` positions toward higher memory addresses, filling with zeroes.
    #[allow(clippy::cast_possible_truncation)]
    const fn slide_up(count: usize) -> Self {
        let mut indices = [ZERO; 16];
        let mut i = count;
        while i < 16 {
            indices[i] = (i - count) as u8;
            i += 1;
        }

        Self { indices }
    }

    /// Moves every byte `count` positions toward lower memory addresses, filling with zeroes.
    #[allow(clippy::cast_possible_truncation)]
    const fn slide_down(count: usize) -> Self {
        let mut indices = [ZERO; 16];
        let mut i = 0;
        while i + count < 16 {
            indices[i] = (i + count) as u8;
            i += 1;
        }

        Self { indices }
    }

    /// Moves every byte `count` positions toward higher memory addresses, wrapping around.
    #[allow(clippy::cast_possible_truncation)]
    const fn turn_up(count: usize) -> Self {
        let count = count % 16;
        let mut indices = [0u8; 16];
        let mut i = 0;
        while i < 16 {
            indices[i] = ((i + 16 - count) % 16) as u8;
            i += 1;
        }

        Self { indices }
    }

    /// The mask for [`shift_left_octet()`] by `count` bytes.
    ///
    /// Counts of `16` or more produce a mask selecting only zero bytes.
    pub const fn shift_left(count: usize) -> Self {
        let count = if count > 16 { 16 } else { count };
        if cfg!(target_endian = "little") {
            Self::slide_up(count)
        } else {
            Self::slide_down(count)
        }
    }

    /// The mask for [`shift_right_octet()`] by `count` bytes.
    ///
    /// Counts of `16` or more produce a mask selecting only zero bytes.
    pub const fn shift_right(count: usize) -> Self {
        let count = if count > 16 { 16 } else { count };
        if cfg!(target_endian = "little") {
            Self::slide_down(count)
        } else {
            Self::slide_up(count)
        }
    }

    /// The mask for [`rotate_left_octet()`] by `count` bytes, taken modulo 16.
    pub const fn rotate_left(count: usize) -> Self {
        if cfg!(target_endian = "little") {
            Self::turn_up(count)
        } else {
            Self::turn_up(16 - count % 16)
        }
    }

    /// The mask for [`rotate_right_octet()`] by `count` bytes, taken modulo 16.
    pub const fn rotate_right(count: usize) -> Self {
        Self::rotate_left(16 - count % 16)
    }

    /// Gets the indices of the mask.
    pub const fn indices(&self) -> [u8; 16] {
        self.indices
    }

    #[inline]
    fn to_vector(self) -> V128 {
        V128::from_bytes(self.indices)
    }
}

impl Default for Mask {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Masks for octet shift and rotate counts known at compile time.
struct Masks<const N: usize>;

impl<const N: usize> Masks<N> {
    const SHIFT_LEFT: Mask = Mask::shift_left(N);
    const SHIFT_RIGHT: Mask = Mask::shift_right(N);
    const ROTATE_LEFT: Mask = Mask::rotate_left(N);
    const ROTATE_RIGHT: Mask = Mask::rotate_right(N);
}

#[inline]
fn permute_raw(v1: V128, v2: V128, mask: Mask) -> V128 {
    V128(implementation::permute2(v1.0, v2.0, mask.to_vector().0))
}

/// Gathers the bytes of `v` selected by `mask`.
///
/// Indices `16..=31` select a zero byte.
#[inline]
pub fn permute<T: Vector>(v: T, mask: Mask) -> T {
    T::from(permute_raw(v.into(), V128::zero(), mask))
}

/// Gathers bytes from the concatenation of `v1` and `v2` selected by `mask`.
///
/// Byte `i` of the result is `v1[mask[i]]` if `mask[i] < 16`, and `v2[mask[i] - 16]` otherwise.
#[inline]
pub fn permute2<T: Vector, U: Vector>(v1: T, v2: U, mask: Mask) -> T {
    T::from(permute_raw(v1.into(), v2.into(), mask))
}

/// Reverses the order of the bytes of `v`.
#[inline]
pub fn reverse<T: Vector>(v: T) -> T {
    permute(v, Mask::REVERSE)
}

/// Shifts the 128-bit integer value of `v` left by `N` bytes, shifting in zeroes.
///
/// A count of `0` returns `v` unchanged, and a count of `16` or more returns zero.
#[inline]
pub fn shift_left_octet<const N: usize, T: Vector>(v: T) -> T {
    match N {
        0 => v,
        1..=15 => permute(v, Masks::<N>::SHIFT_LEFT),
        _ => T::default(),
    }
}

/// Shifts the 128-bit integer value of `v` right by `N` bytes, shifting in zeroes.
///
/// A count of `0` returns `v` unchanged, and a count of `16` or more returns zero.
#[inline]
pub fn shift_right_octet<const N: usize, T: Vector>(v: T) -> T {
    match N {
        0 => v,
        1..=15 => permute(v, Masks::<N>::SHIFT_RIGHT),
        _ => T::default(),
    }
}

/// Rotates the 128-bit integer value of `v` left by `N` bytes, taken modulo 16.
#[inline]
pub fn rotate_left_octet<const N: usize, T: Vector>(v: T) -> T {
    if N % 16 == 0 {
        v
    } else {
        permute(v, Masks::<N>::ROTATE_LEFT)
    }
}

/// Rotates the 128-bit integer value of `v` right by `N` bytes, taken modulo 16.
#[inline]
pub fn rotate_right_octet<const N: usize, T: Vector>(v: T) -> T {
    if N % 16 == 0 {
        v
    } else {
        permute(v, Masks::<N>::ROTATE_RIGHT)
    }
}

/// Exchanges the two 64-bit halves of `v`.
#[inline]
pub fn swap_words<T: Vector>(v: T) -> T {
    rotate_left_octet::<8, T>(v)
}

/// Keeps the least significant 64 bits of `v` in place, and clears the rest.
#[inline]
pub fn get_low<T: Vector>(v: T) -> T {
    shift_right_octet::<8, T>(shift_left_octet::<8, T>(v))
}

/// Keeps the most significant 64 bits of `v` in place, and clears the rest.
#[inline]
pub fn get_high<T: Vector>(v: T) -> T {
    shift_left_octet::<8, T>(shift_right_octet::<8, T>(v))
}

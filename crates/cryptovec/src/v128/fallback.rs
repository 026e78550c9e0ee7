//! Implements 128-bit vector operations used when the `simd-intrinsics` feature is not enabled, or
//! target architecture-specific intrinsics are unavailable.
//!
//! Lanes are read from and written to the byte array in host byte order, so the same code serves
//! both little-endian and big-endian targets.

use crate::v128::Bytes;
use num_traits::{WrappingAdd, WrappingSub};

pub(crate) type Repr = Bytes;

#[inline]
pub(crate) fn zero() -> Repr {
    Bytes::default()
}

#[inline]
pub(crate) fn from_bytes(bytes: [u8; 16]) -> Repr {
    Bytes { bytes }
}

#[inline]
pub(crate) fn to_bytes(v: Repr) -> [u8; 16] {
    v.bytes
}

/// # Safety
///
/// `src` must be valid for reads of 16 bytes.
#[inline]
pub(crate) unsafe fn load_unaligned(src: *const u8) -> Repr {
    // SAFETY: caller ensures `src` is valid, `[u8; 16]` has an alignment of 1.
    Bytes {
        bytes: unsafe { src.cast::<[u8; 16]>().read() },
    }
}

/// # Safety
///
/// `src` must be valid for reads of 16 bytes, and aligned to 16 bytes.
#[inline]
pub(crate) unsafe fn load_aligned(src: *const u8) -> Repr {
    // SAFETY: caller ensures `src` is valid and aligned.
    unsafe { src.cast::<Bytes>().read() }
}

/// # Safety
///
/// `dst` must be valid for writes of 16 bytes.
#[inline]
pub(crate) unsafe fn store_unaligned(dst: *mut u8, v: Repr) {
    // SAFETY: caller ensures `dst` is valid, `[u8; 16]` has an alignment of 1.
    unsafe { dst.cast::<[u8; 16]>().write(v.bytes) }
}

/// # Safety
///
/// `dst` must be valid for writes of 16 bytes, and aligned to 16 bytes.
#[inline]
pub(crate) unsafe fn store_aligned(dst: *mut u8, v: Repr) {
    // SAFETY: caller ensures `dst` is valid and aligned.
    unsafe { dst.cast::<Bytes>().write(v) }
}

fn bytewise(a: Repr, b: Repr, op: impl Fn(u8, u8) -> u8) -> Repr {
    from_bytes(core::array::from_fn(|i| op(a.bytes[i], b.bytes[i])))
}

#[inline]
pub(crate) fn and(a: Repr, b: Repr) -> Repr {
    bytewise(a, b, |x, y| x & y)
}

#[inline]
pub(crate) fn or(a: Repr, b: Repr) -> Repr {
    bytewise(a, b, |x, y| x | y)
}

#[inline]
pub(crate) fn xor(a: Repr, b: Repr) -> Repr {
    bytewise(a, b, |x, y| x ^ y)
}

#[inline]
pub(crate) fn not(v: Repr) -> Repr {
    from_bytes(v.bytes.map(|b| !b))
}

#[inline]
pub(crate) fn eq(a: Repr, b: Repr) -> bool {
    let (a, b) = (to_lanes_u32(a), to_lanes_u32(b));
    a.iter().zip(b).fold(0, |diff, (x, y)| diff | (x ^ y)) == 0
}

/// Selects bytes from the concatenation of `a` and `b`, indices are taken modulo 32.
#[inline]
pub(crate) fn permute2(a: Repr, b: Repr, mask: Repr) -> Repr {
    from_bytes(crate::v128::gather(a.bytes, b.bytes, mask.bytes))
}

macro_rules! lanes {
    ($($int:ident; $lanes:literal),*) => {$(paste::paste! {
        #[inline]
        fn [<to_lanes_ $int>](v: Repr) -> [$int; $lanes] {
            // SAFETY: all bits are valid in source and destination.
            unsafe { core::mem::transmute::<[u8; 16], [$int; $lanes]>(v.bytes) }
        }

        #[inline]
        fn [<from_lanes_ $int>](lanes: [$int; $lanes]) -> Repr {
            // SAFETY: all bits are valid in source and destination.
            from_bytes(unsafe { core::mem::transmute::<[$int; $lanes], [u8; 16]>(lanes) })
        }

        #[inline]
        pub(crate) fn [<splat_ $int>](x: $int) -> Repr {
            [<from_lanes_ $int>]([x; $lanes])
        }

        #[inline]
        pub(crate) fn [<add_ $int>](a: Repr, b: Repr) -> Repr {
            let (a, b) = ([<to_lanes_ $int>](a), [<to_lanes_ $int>](b));
            [<from_lanes_ $int>](core::array::from_fn(|i| WrappingAdd::wrapping_add(&a[i], &b[i])))
        }

        #[inline]
        pub(crate) fn [<sub_ $int>](a: Repr, b: Repr) -> Repr {
            let (a, b) = ([<to_lanes_ $int>](a), [<to_lanes_ $int>](b));
            [<from_lanes_ $int>](core::array::from_fn(|i| WrappingSub::wrapping_sub(&a[i], &b[i])))
        }
    })*};
}

lanes!(u8; 16, u16; 8, u32; 4, u64; 2);

macro_rules! shifts {
    ($($int:ident),*) => {$(paste::paste! {
        /// Shifts every lane by `count` bits, producing zero if `count` is not less than the lane
        /// width.
        #[inline]
        pub(crate) fn [<shl_ $int>](v: Repr, count: u32) -> Repr {
            [<from_lanes_ $int>]([<to_lanes_ $int>](v).map(|x| x.checked_shl(count).unwrap_or(0)))
        }

        /// Shifts every lane by `count` bits, producing zero if `count` is not less than the lane
        /// width.
        #[inline]
        pub(crate) fn [<shr_ $int>](v: Repr, count: u32) -> Repr {
            [<from_lanes_ $int>]([<to_lanes_ $int>](v).map(|x| x.checked_shr(count).unwrap_or(0)))
        }
    })*};
}

shifts!(u32, u64);

/// Gets the carry out of each 32-bit lane of `a + b`, as a `0` or `1` in that lane.
#[inline]
pub(crate) fn carry_u32(a: Repr, b: Repr) -> Repr {
    let (a, b) = (to_lanes_u32(a), to_lanes_u32(b));
    from_lanes_u32(core::array::from_fn(|i| u32::from(a[i].overflowing_add(b[i]).1)))
}

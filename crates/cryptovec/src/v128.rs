//! The [`V128`] type and its lane interpretations.

mod interpretations;

pub use interpretations::{Lanes, U16x8, U32x4, U64x2, U8x16, Vector};

cfg_if::cfg_if! {
    if #[cfg(simd_sse2_intrinsics)] {
        pub(crate) mod sse2;
        pub(crate) use sse2 as implementation;
    } else if #[cfg(simd_neon_intrinsics)] {
        pub(crate) mod neon;
        pub(crate) use neon as implementation;
    } else {
        pub(crate) mod fallback;
        pub(crate) use fallback as implementation;
    }
}

/// A 16-byte array aligned to a 16-byte boundary, suitable for aligned vector loads and stores.
#[cfg(not(simd_neon_intrinsics))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[repr(C, align(16))]
pub(crate) struct Bytes {
    pub(crate) bytes: [u8; 16],
}

/// Selects bytes from the concatenation of `a` and `b`, one byte at a time.
///
/// Indices are reduced modulo 32.
#[cfg(any(simd_no_intrinsics, all(simd_sse2_intrinsics, not(simd_ssse3_intrinsics))))]
pub(crate) fn gather(a: [u8; 16], b: [u8; 16], mask: [u8; 16]) -> [u8; 16] {
    core::array::from_fn(|i| {
        let index = usize::from(mask[i] & 0x1F);
        if index < 16 {
            a[index]
        } else {
            b[index - 16]
        }
    })
}

/// Gets the backend representation of any vector type.
#[inline]
pub(crate) fn repr<T: Vector>(v: T) -> implementation::Repr {
    let v: V128 = v.into();
    v.0
}

/// Represents a [128-bit vector] whose interpretation is not specified.
///
/// The vector holds 16 bytes in *memory order*, byte `i` being the byte that a native
/// [`store()`](crate::store) writes at `dst[i]`.
///
/// # Interpretations
///
/// Specific interpretations of the lanes of a [`V128`] are provided as separate types, along with
/// operations (e.g. lane-wise [`Add`]) for those interpretations:
/// - [`U8x16`]
/// - [`U16x8`]
/// - [`U32x4`]
/// - [`U64x2`]
///
/// Various [`From`] implementations are provided for interpreting the lanes of a [`V128`]
/// differently.
///
/// # Disabling `simd-intrinsics`
///
/// When the `simd-intrinsics` feature flag is **not** enabled, operations are implemented in
/// normal Rust code (which may be optimized by the Rust compiler's auto-vectorization) rather than
/// target-architecture specific SIMD intrinsics.
///
/// [128-bit vector]: https://en.wikipedia.org/wiki/Single_instruction,_multiple_data
/// [`Add`]: core::ops::Add
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct V128(pub(crate) implementation::Repr);

impl V128 {
    /// Returns a vector with all bits set to zero.
    #[inline]
    pub fn zero() -> Self {
        Self(implementation::zero())
    }

    /// Constructs a vector from bytes in memory order.
    #[inline]
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(implementation::from_bytes(bytes))
    }

    /// Returns the bytes of the vector in memory order.
    #[inline]
    pub fn to_bytes(self) -> [u8; 16] {
        implementation::to_bytes(self.0)
    }

    /// Interprets a 128-bit integer value as a vector, storing its bytes in host byte order.
    #[inline]
    pub fn from_u128(value: u128) -> Self {
        Self::from_bytes(value.to_ne_bytes())
    }

    /// Reads the bytes of the vector as a 128-bit integer in host byte order.
    #[inline]
    pub fn to_u128(self) -> u128 {
        u128::from_ne_bytes(self.to_bytes())
    }

    /// Constructs a vector from the *canonical big-endian view* of its integer value.
    ///
    /// This produces the same vector as [`load_be()`](crate::load_be) does for `bytes`.
    #[inline]
    pub fn from_be_bytes(bytes: [u8; 16]) -> Self {
        Self::from_u128(u128::from_be_bytes(bytes))
    }

    /// Returns the *canonical big-endian view* of the vector, its integer value with the most
    /// significant byte first.
    ///
    /// This is the byte sequence that [`store_be()`](crate::store_be) writes.
    #[inline]
    pub fn to_be_bytes(self) -> [u8; 16] {
        self.to_u128().to_be_bytes()
    }
}

impl Default for V128 {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl From<u128> for V128 {
    fn from(value: u128) -> Self {
        Self::from_u128(value)
    }
}

impl From<V128> for u128 {
    fn from(v: V128) -> Self {
        v.to_u128()
    }
}

impl From<[u8; 16]> for V128 {
    fn from(bytes: [u8; 16]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<V128> for [u8; 16] {
    fn from(v: V128) -> Self {
        v.to_bytes()
    }
}

#[cfg(simd_sse2_intrinsics)]
impl From<crate::intrinsics::sse2::__m128i> for V128 {
    fn from(v: crate::intrinsics::sse2::__m128i) -> Self {
        Self(v)
    }
}

#[cfg(simd_sse2_intrinsics)]
impl From<V128> for crate::intrinsics::sse2::__m128i {
    fn from(v: V128) -> Self {
        v.0
    }
}

#[cfg(simd_neon_intrinsics)]
impl From<crate::intrinsics::neon::uint8x16_t> for V128 {
    fn from(v: crate::intrinsics::neon::uint8x16_t) -> Self {
        Self(v)
    }
}

#[cfg(simd_neon_intrinsics)]
impl From<V128> for crate::intrinsics::neon::uint8x16_t {
    fn from(v: V128) -> Self {
        v.0
    }
}

impl core::fmt::Debug for V128 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "V128({:#034X})", self.to_u128())
    }
}

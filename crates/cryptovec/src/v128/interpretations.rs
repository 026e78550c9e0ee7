//! Defines the interpretations for [`V128`], and the traits shared by all vector types.

use crate::v128::{implementation, V128};
use num_traits::{PrimInt, WrappingAdd, WrappingSub};

mod sealed {
    #[allow(unreachable_pub)]
    pub trait Sealed {}
}

/// Trait implemented by [`V128`] and all of its lane interpretations.
///
/// Conversions between vector types never change the underlying bytes.
pub trait Vector:
    Copy
    + Default
    + Eq
    + core::fmt::Debug
    + From<V128>
    + Into<V128>
    + core::ops::BitAnd<Output = Self>
    + core::ops::BitOr<Output = Self>
    + core::ops::BitXor<Output = Self>
    + core::ops::Not<Output = Self>
    + sealed::Sealed
{
    /// Interprets the contents of the vector as another vector type.
    #[inline]
    fn reinterpret<T: Vector>(self) -> T {
        T::from(V128(super::repr(self)))
    }
}

/// Trait implemented by the interpretations of a [`V128`] as packed unsigned integer lanes.
pub trait Lanes: Vector + core::ops::Add<Output = Self> + core::ops::Sub<Output = Self> {
    /// The type of each lane.
    type Lane: PrimInt + WrappingAdd + WrappingSub + core::fmt::Debug;

    /// An array containing every lane, in memory order.
    type Array: Copy + AsRef<[Self::Lane]> + AsMut<[Self::Lane]>;

    /// The number of lanes.
    const LANES: usize;

    /// Creates a vector with every lane set to `x`.
    fn splat(x: Self::Lane) -> Self;

    /// Creates a vector from its lanes, lane `i` occupying the `i`-th lane-sized group of bytes.
    fn from_lanes(lanes: Self::Array) -> Self;

    /// Returns an array containing every lane.
    fn into_lanes(self) -> Self::Array;

    /// Lane-wise addition, wrapping on overflow.
    fn wrapping_add(self, rhs: Self) -> Self;

    /// Lane-wise subtraction, wrapping on overflow.
    fn wrapping_sub(self, rhs: Self) -> Self;
}

macro_rules! bitwise {
    ($name:ident) => {

impl sealed::Sealed for $name {}

impl Vector for $name {}

impl PartialEq for $name {
    /// Compares all 128 bits, see [`equal()`](crate::equal).
    fn eq(&self, other: &Self) -> bool {
        implementation::eq(V128::from(*self).0, V128::from(*other).0)
    }
}

impl Eq for $name {}

impl core::ops::Not for $name {
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        Self::from(V128(implementation::not(V128::from(self).0)))
    }
}

bitwise!(@binop $name: BitAnd::bitand, BitAndAssign::bitand_assign => and);
bitwise!(@binop $name: BitOr::bitor, BitOrAssign::bitor_assign => or);
bitwise!(@binop $name: BitXor::bitxor, BitXorAssign::bitxor_assign => xor);

impl core::fmt::LowerHex for $name {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::LowerHex::fmt(&V128::from(*self).to_u128(), f)
    }
}

impl core::fmt::UpperHex for $name {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::UpperHex::fmt(&V128::from(*self).to_u128(), f)
    }
}

    };
    (@binop $name:ident: $trait:ident::$method:ident, $assign:ident::$assign_method:ident => $op:ident) => {
        impl core::ops::$trait for $name {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self {
                Self::from(V128(implementation::$op(V128::from(self).0, V128::from(rhs).0)))
            }
        }

        impl core::ops::$assign for $name {
            #[inline]
            fn $assign_method(&mut self, rhs: Self) {
                *self = core::ops::$trait::$method(*self, rhs);
            }
        }
    };
}

bitwise!(V128);

macro_rules! define {
    ($name:ident = [$int:ident; $lanes:literal]) => {

#[doc = concat!("Represents a [`V128`] interpreted as ", stringify!($lanes), " lanes of ")]
#[doc = concat!("packed [`", stringify!($int), "`] values.")]
#[derive(Clone, Copy, Default)]
#[repr(transparent)]
pub struct $name(V128);

impl $name {
    #[doc = concat!("Creates a new 128-bit vector whose ", stringify!($lanes), " lanes are ")]
    #[doc = concat!("filled with the given ", stringify!($int), " value.")]
    #[inline]
    pub fn splat(x: $int) -> Self {
        Self(V128(paste::paste!(implementation::[<splat_ $int>](x))))
    }

    /// Creates a vector from its lanes, in memory order.
    #[inline]
    pub fn from_lanes(lanes: [$int; $lanes]) -> Self {
        // SAFETY: all bits are valid in source and destination.
        let bytes = unsafe { core::mem::transmute::<[$int; $lanes], [u8; 16]>(lanes) };
        Self(V128::from_bytes(bytes))
    }

    #[doc = concat!("Returns an array containing each [`", stringify!($int), "`] lane in the")]
    #[doc = "vector."]
    #[inline]
    pub fn into_lanes(self) -> [$int; $lanes] {
        // SAFETY: all bits are valid in source and destination.
        unsafe { core::mem::transmute::<[u8; 16], [$int; $lanes]>(self.0.to_bytes()) }
    }
}

impl Lanes for $name {
    type Lane = $int;
    type Array = [$int; $lanes];

    const LANES: usize = $lanes;

    #[inline]
    fn splat(x: $int) -> Self {
        Self::splat(x)
    }

    #[inline]
    fn from_lanes(lanes: [$int; $lanes]) -> Self {
        Self::from_lanes(lanes)
    }

    #[inline]
    fn into_lanes(self) -> [$int; $lanes] {
        Self::into_lanes(self)
    }

    #[inline]
    fn wrapping_add(self, rhs: Self) -> Self {
        Self(V128(paste::paste!(implementation::[<add_ $int>]((self.0).0, (rhs.0).0))))
    }

    #[inline]
    fn wrapping_sub(self, rhs: Self) -> Self {
        Self(V128(paste::paste!(implementation::[<sub_ $int>]((self.0).0, (rhs.0).0))))
    }
}

bitwise!($name);

impl From<[$int; $lanes]> for $name {
    #[doc = concat!("Calls [`", stringify!($name), "::from_lanes()`].")]
    fn from(lanes: [$int; $lanes]) -> Self {
        Self::from_lanes(lanes)
    }
}

impl From<$name> for [$int; $lanes] {
    #[doc = concat!("Calls [`", stringify!($name), "::into_lanes()`].")]
    fn from(vec: $name) -> Self {
        vec.into_lanes()
    }
}

impl From<$name> for V128 {
    #[inline]
    fn from(vec: $name) -> Self {
        vec.0
    }
}

impl From<V128> for $name {
    #[doc = concat!("Interprets the contents of the [`V128`] as ", stringify!($lanes), " lanes ")]
    #[doc = concat!("of packed [`", stringify!($int), "`] values.")]
    #[inline]
    fn from(vec: V128) -> Self {
        Self(vec)
    }
}

impl core::fmt::Debug for $name {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple(stringify!($name))
            .field(&self.into_lanes())
            .finish()
    }
}

impl core::ops::Add for $name {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Lanes::wrapping_add(self, rhs)
    }
}

impl core::ops::AddAssign for $name {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl core::ops::Sub for $name {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Lanes::wrapping_sub(self, rhs)
    }
}

impl core::ops::SubAssign for $name {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

    };
}

define!(U8x16 = [u8; 16]);
define!(U16x8 = [u16; 8]);
define!(U32x4 = [u32; 4]);
define!(U64x2 = [u64; 2]);

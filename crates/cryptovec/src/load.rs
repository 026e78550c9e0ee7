//! Loading vectors from and storing vectors to 16-byte windows of byte buffers.
//!
//! Windows may start at any offset, no alignment is required of the buffer. On targets without
//! fast unaligned accesses (see [`HAS_FAST_UNALIGNED`](crate::HAS_FAST_UNALIGNED)), the
//! [`emulated`] algorithms are used instead of a single unaligned vector instruction.
//!
//! The `_be` variants interpret the window as the *canonical big-endian view* of the vector's
//! 128-bit integer value, reversing bytes on little-endian targets.

pub mod emulated;

use crate::error::BoundsCheckError;
use crate::v128::{U32x4, Vector, V128};

/// Checks that the window `offset..offset + 16` fits in a buffer of length `len`.
#[inline]
pub(crate) fn check_window(offset: usize, len: usize) -> Result<(), BoundsCheckError> {
    match offset.checked_add(16) {
        Some(end) if end <= len => Ok(()),
        _ => Err(BoundsCheckError::new(offset, len)),
    }
}

#[inline]
fn to_big_endian<T: Vector>(v: T) -> T {
    #[cfg(target_endian = "little")]
    return crate::permute::reverse(v);

    #[cfg(target_endian = "big")]
    return v;
}

/// Reads `src[offset..offset + 16]`, which must be in bounds.
#[inline]
fn load_unchecked(src: &[u8], offset: usize) -> V128 {
    #[cfg(simd_fast_unaligned)]
    return {
        // SAFETY: caller checked that the window is in bounds.
        V128(unsafe { crate::v128::implementation::load_unaligned(src.as_ptr().add(offset)) })
    };

    #[cfg(not(simd_fast_unaligned))]
    return emulated::load_unchecked(src, offset);
}

/// Writes `dst[offset..offset + 16]`, which must be in bounds.
#[inline]
fn store_unchecked(v: V128, dst: &mut [u8], offset: usize) {
    #[cfg(simd_fast_unaligned)]
    {
        // SAFETY: caller checked that the window is in bounds.
        unsafe { crate::v128::implementation::store_unaligned(dst.as_mut_ptr().add(offset), v.0) }
    }

    #[cfg(not(simd_fast_unaligned))]
    emulated::store_unchecked(v, dst, offset);
}

/// Loads the 16 bytes at `src[offset..]`, in memory order.
///
/// # Errors
///
/// Returns an error if `offset + 16` exceeds the length of `src`.
#[inline]
pub fn try_load_at<T: Vector>(src: &[u8], offset: usize) -> Result<T, BoundsCheckError> {
    check_window(offset, src.len())?;
    Ok(T::from(load_unchecked(src, offset)))
}

/// Loads the 16 bytes at `src[offset..]` as the *canonical big-endian view* of a vector.
///
/// # Errors
///
/// Returns an error if `offset + 16` exceeds the length of `src`.
#[inline]
pub fn try_load_be_at<T: Vector>(src: &[u8], offset: usize) -> Result<T, BoundsCheckError> {
    try_load_at(src, offset).map(to_big_endian)
}

/// Stores the bytes of `v` into `dst[offset..offset + 16]`, in memory order.
///
/// # Errors
///
/// Returns an error if `offset + 16` exceeds the length of `dst`. Nothing is written.
#[inline]
pub fn try_store_at<T: Vector>(v: T, dst: &mut [u8], offset: usize) -> Result<(), BoundsCheckError> {
    check_window(offset, dst.len())?;
    store_unchecked(v.into(), dst, offset);
    Ok(())
}

/// Stores the *canonical big-endian view* of `v` into `dst[offset..offset + 16]`.
///
/// # Errors
///
/// Returns an error if `offset + 16` exceeds the length of `dst`. Nothing is written.
#[inline]
pub fn try_store_be_at<T: Vector>(
    v: T,
    dst: &mut [u8],
    offset: usize,
) -> Result<(), BoundsCheckError> {
    try_store_at(to_big_endian(v), dst, offset)
}

/// Loads the 16 bytes at `src[offset..]`, in memory order.
///
/// # Panics
///
/// Panics if `offset + 16` exceeds the length of `src`.
#[inline]
#[track_caller]
pub fn load_at<T: Vector>(src: &[u8], offset: usize) -> T {
    match try_load_at(src, offset) {
        Ok(v) => v,
        Err(e) => e.fail(),
    }
}

/// Loads the first 16 bytes of `src`, in memory order.
///
/// # Panics
///
/// Panics if `src` is shorter than 16 bytes.
#[inline]
#[track_caller]
pub fn load<T: Vector>(src: &[u8]) -> T {
    load_at(src, 0)
}

/// Loads the 16 bytes at `src[offset..]` as the *canonical big-endian view* of a vector.
///
/// # Panics
///
/// Panics if `offset + 16` exceeds the length of `src`.
#[inline]
#[track_caller]
pub fn load_be_at<T: Vector>(src: &[u8], offset: usize) -> T {
    match try_load_be_at(src, offset) {
        Ok(v) => v,
        Err(e) => e.fail(),
    }
}

/// Loads the first 16 bytes of `src` as the *canonical big-endian view* of a vector.
///
/// # Panics
///
/// Panics if `src` is shorter than 16 bytes.
#[inline]
#[track_caller]
pub fn load_be<T: Vector>(src: &[u8]) -> T {
    load_be_at(src, 0)
}

/// Stores the bytes of `v` into `dst[offset..offset + 16]`, in memory order.
///
/// # Panics
///
/// Panics if `offset + 16` exceeds the length of `dst`.
#[inline]
#[track_caller]
pub fn store_at<T: Vector>(v: T, dst: &mut [u8], offset: usize) {
    if let Err(e) = try_store_at(v, dst, offset) {
        e.fail()
    }
}

/// Stores the bytes of `v` into the first 16 bytes of `dst`, in memory order.
///
/// # Panics
///
/// Panics if `dst` is shorter than 16 bytes.
#[inline]
#[track_caller]
pub fn store<T: Vector>(v: T, dst: &mut [u8]) {
    store_at(v, dst, 0)
}

/// Stores the *canonical big-endian view* of `v` into `dst[offset..offset + 16]`.
///
/// # Panics
///
/// Panics if `offset + 16` exceeds the length of `dst`.
#[inline]
#[track_caller]
pub fn store_be_at<T: Vector>(v: T, dst: &mut [u8], offset: usize) {
    if let Err(e) = try_store_be_at(v, dst, offset) {
        e.fail()
    }
}

/// Stores the *canonical big-endian view* of `v` into the first 16 bytes of `dst`.
///
/// # Panics
///
/// Panics if `dst` is shorter than 16 bytes.
#[inline]
#[track_caller]
pub fn store_be<T: Vector>(v: T, dst: &mut [u8]) {
    store_be_at(v, dst, 0)
}

/// Loads four 32-bit words, which keep their host byte order.
#[inline]
pub fn load_words(src: &[u32; 4]) -> U32x4 {
    // SAFETY: `src` is valid for reads of 16 bytes, and `u8` has an alignment of 1.
    let bytes = unsafe { core::slice::from_raw_parts(src.as_ptr().cast::<u8>(), 16) };
    U32x4::from(load_unchecked(bytes, 0))
}

/// Stores four 32-bit words, which keep their host byte order.
#[inline]
pub fn store_words(v: U32x4, dst: &mut [u32; 4]) {
    // SAFETY: `dst` is valid for writes of 16 bytes, and every bit pattern is a valid `u32`.
    let bytes = unsafe { core::slice::from_raw_parts_mut(dst.as_mut_ptr().cast::<u8>(), 16) };
    store_unchecked(v.into(), bytes, 0)
}

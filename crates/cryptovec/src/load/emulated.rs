//! Unaligned loads and stores performed only with naturally aligned memory accesses.
//!
//! A misaligned load reads the two aligned 16-byte blocks overlapping the window and combines
//! them with [`permute2()`](crate::permute2). A misaligned store rotates the vector so that each
//! byte sits at the position matching its destination address modulo 16, then writes it as a
//! sequence of naturally aligned 1, 2 and 4-byte elements.
//!
//! These are used by [`load`](crate::load) when the target lacks fast unaligned accesses, and are
//! available on every target so that they can be compared against the native instructions.

use crate::error::BoundsCheckError;
use crate::load::check_window;
use crate::permute::{self, Mask};
use crate::trace::trace_fallback;
use crate::v128::{implementation, Vector, V128};

/// `(size, position)` of each element written by a misaligned store, covering all 16 bytes.
const ELEMENT_STORES: [(usize, usize); 8] = [
    (1, 0),
    (2, 1),
    (4, 3),
    (4, 4),
    (4, 8),
    (4, 12),
    (2, 14),
    (1, 15),
];

/// Gets the distance of `src[offset]` from the preceding 16-byte boundary.
#[inline]
fn misalignment(base: *const u8, offset: usize) -> usize {
    (base as usize).wrapping_add(offset) % 16
}

/// Reads the aligned 16-byte block starting `misalignment` bytes before `src[offset]`, advanced
/// by `block` blocks. Bytes of the block outside of `src` are read as zero.
fn read_block(src: &[u8], offset: usize, misalignment: usize, block: usize) -> V128 {
    let first = offset + block * 16;
    match first.checked_sub(misalignment) {
        Some(start) if src.len().checked_sub(start).is_some_and(|rest| rest >= 16) => {
            // SAFETY: `start..start + 16` is in bounds, and begins on a 16-byte boundary.
            V128(unsafe { implementation::load_aligned(src.as_ptr().add(start)) })
        }
        _ => V128::from_bytes(core::array::from_fn(|i| {
            (first + i)
                .checked_sub(misalignment)
                .and_then(|index| src.get(index))
                .copied()
                .unwrap_or(0)
        })),
    }
}

pub(crate) fn load_unchecked(src: &[u8], offset: usize) -> V128 {
    let misalignment = misalignment(src.as_ptr(), offset);
    if misalignment == 0 {
        // SAFETY: caller checked that the window is in bounds, and it begins on a 16-byte
        // boundary.
        return V128(unsafe { implementation::load_aligned(src.as_ptr().add(offset)) });
    }

    trace_fallback!("load", offset, misalignment);

    let low = read_block(src, offset, misalignment, 0);
    let high = read_block(src, offset, misalignment, 1);
    permute::permute2(low, high, Mask::sequential(misalignment))
}

/// Writes the naturally aligned `size`-byte element of `rotated` that contains the byte destined
/// for `address + position`.
fn store_element(window: &mut [u8], address: usize, rotated: &[u8; 16], element: (usize, usize)) {
    let (size, position) = element;
    let aligned = address.wrapping_add(position) & !(size - 1);
    let lane = aligned % 16;
    let index = aligned.wrapping_sub(address);
    window[index..index + size].copy_from_slice(&rotated[lane..lane + size]);
}

pub(crate) fn store_unchecked(v: V128, dst: &mut [u8], offset: usize) {
    let misalignment = misalignment(dst.as_ptr(), offset);
    if misalignment == 0 {
        // SAFETY: caller checked that the window is in bounds, and it begins on a 16-byte
        // boundary.
        unsafe { implementation::store_aligned(dst.as_mut_ptr().add(offset), v.0) };
        return;
    }

    trace_fallback!("store", offset, misalignment);

    // Byte `i` of the rotated vector is destined for an address congruent to `i` modulo 16.
    let rotated = permute::permute2(v, v, Mask::sequential(16 - misalignment)).to_bytes();
    let address = (dst.as_ptr() as usize).wrapping_add(offset);
    let window = &mut dst[offset..offset + 16];
    for element in ELEMENT_STORES {
        store_element(window, address, &rotated, element);
    }
}

/// Loads the 16 bytes at `src[offset..]` using only aligned block reads.
///
/// # Errors
///
/// Returns an error if `offset + 16` exceeds the length of `src`.
pub fn try_load_at<T: Vector>(src: &[u8], offset: usize) -> Result<T, BoundsCheckError> {
    check_window(offset, src.len())?;
    Ok(T::from(load_unchecked(src, offset)))
}

/// Stores `v` into `dst[offset..offset + 16]` using only naturally aligned element stores.
///
/// # Errors
///
/// Returns an error if `offset + 16` exceeds the length of `dst`. Nothing is written.
pub fn try_store_at<T: Vector>(v: T, dst: &mut [u8], offset: usize) -> Result<(), BoundsCheckError> {
    check_window(offset, dst.len())?;
    store_unchecked(v.into(), dst, offset);
    Ok(())
}

/// Loads the 16 bytes at `src[offset..]` using only aligned block reads.
///
/// # Panics
///
/// Panics if `offset + 16` exceeds the length of `src`.
#[track_caller]
pub fn load_at<T: Vector>(src: &[u8], offset: usize) -> T {
    match try_load_at(src, offset) {
        Ok(v) => v,
        Err(e) => e.fail(),
    }
}

/// Stores `v` into `dst[offset..offset + 16]` using only naturally aligned element stores.
///
/// # Panics
///
/// Panics if `offset + 16` exceeds the length of `dst`.
#[track_caller]
pub fn store_at<T: Vector>(v: T, dst: &mut [u8], offset: usize) {
    if let Err(e) = try_store_at(v, dst, offset) {
        e.fail()
    }
}

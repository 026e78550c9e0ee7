//! Portable 128-bit SIMD vector operations for implementing cryptographic primitives.
//!
//! Block ciphers and hash transforms are written once against the [`V128`] type and its lane
//! interpretations ([`U8x16`], [`U16x8`], [`U32x4`] and [`U64x2`]), and then compile to the
//! instructions of whichever backend the build selects:
//!
//! - `x86` and `x86-64`: requires `sse2`. The `ssse3` target feature enables hardware byte
//!   shuffles, and the `aes` target feature enables the [`crypto`] module.
//! - `aarch64` (little-endian only): requires `neon`. The `aes` target feature enables the
//!   [`crypto`] module.
//! - Every other target, including big-endian ones, uses a portable implementation.
//!
//! The selected configuration is fixed at build time and reported by [`CAPABILITIES`].
//!
//! # Memory order and the canonical big-endian view
//!
//! A [`V128`] holds 16 bytes in memory order: byte `i` is the byte that [`store()`] writes at
//! `dst[i]`. Octet shifts and rotations ([`shift_left_octet()`], [`rotate_left_octet()`], ...)
//! instead act on the 128-bit integer formed by those bytes in host byte order, so that callers
//! never have to write code that depends on the endianness of the host. Viewed through
//! [`load_be()`] and [`store_be()`], a left shift moves bytes toward the front of the buffer on
//! every host.
//!
//! # Utilizing SIMD Intrinsics
//!
//! If the `simd-intrinsics` feature is enabled, then [architecture-specific SIMD intrinsics] are
//! used to implement vector operations. The feature flag is provided to allow testing the portable
//! implementation on targets that would otherwise use intrinsics. Similarly, the
//! `strict-alignment` and `emulate-u64-lanes` features force the emulated unaligned memory access
//! and 64-bit lane addition paths.
//!
//! [architecture-specific SIMD intrinsics]: core::arch

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![deny(missing_debug_implementations)]
#![deny(missing_docs)]
#![deny(unreachable_pub)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::cast_possible_truncation)]
#![deny(clippy::exhaustive_enums)]
#![deny(clippy::missing_safety_doc)]
#![deny(clippy::std_instead_of_core)]

#[cfg(feature = "std")]
extern crate std;

mod capability;
mod cfg;
mod error;
mod intrinsics;
mod trace;

pub mod arith;
pub mod load;
pub mod permute;
pub mod v128;

#[cfg(simd_crypto)]
pub mod crypto;

pub use arith::{add, add64, and, equal, not_equal, or, rotate_left_bits, rotate_right_bits, sub, xor};
pub use capability::{
    Backend, Capabilities, CAPABILITIES, HAS_BYTE_SHUFFLE, HAS_CRYPTO_EXT, HAS_FAST_UNALIGNED,
    HAS_NATIVE_U64_LANES, IS_BIG_ENDIAN,
};
pub use error::BoundsCheckError;
pub use load::{load, load_at, load_be, load_be_at, store, store_at, store_be, store_be_at};
pub use permute::{
    get_high, get_low, permute, permute2, reverse, rotate_left_octet, rotate_right_octet,
    shift_left_octet, shift_right_octet, swap_words, Mask,
};
pub use v128::{Lanes, U16x8, U32x4, U64x2, U8x16, Vector, V128};

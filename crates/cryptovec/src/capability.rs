//! Capabilities of the build, resolved entirely at compile time.

/// The instruction set used to implement vector operations.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum Backend {
    /// `x86` and `x86-64` [SSE2] intrinsics.
    ///
    /// [SSE2]: https://en.wikipedia.org/wiki/SSE2
    Sse2,
    /// `aarch64` [NEON] intrinsics.
    ///
    /// [NEON]: https://developer.arm.com/Architectures/Neon
    Neon,
    /// Operations on plain byte arrays, available on every target.
    Portable,
}

impl Backend {
    /// Gets a short, lowercase name for the backend.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sse2 => "sse2",
            Self::Neon => "neon",
            Self::Portable => "portable",
        }
    }
}

impl core::fmt::Display for Backend {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Indicates if unaligned vector loads and stores are performed with a single instruction.
///
/// When `false`, unaligned accesses are emulated with aligned block reads and naturally aligned
/// element stores, see [`load::emulated`](crate::load::emulated).
pub const HAS_FAST_UNALIGNED: bool = cfg!(simd_fast_unaligned);

/// Indicates if the [`crypto`](crate::crypto) module is available.
pub const HAS_CRYPTO_EXT: bool = cfg!(simd_crypto);

/// Indicates if the target stores integers most significant byte first.
pub const IS_BIG_ENDIAN: bool = cfg!(target_endian = "big");

/// Indicates if [`add64()`](crate::add64) uses native 64-bit lane addition.
pub const HAS_NATIVE_U64_LANES: bool = cfg!(simd_native_u64);

/// Indicates if [`permute2()`](crate::permute2) is a single hardware table lookup.
pub const HAS_BYTE_SHUFFLE: bool = cfg!(any(simd_ssse3_intrinsics, simd_neon_intrinsics));

const BACKEND: Backend = if cfg!(simd_sse2_intrinsics) {
    Backend::Sse2
} else if cfg!(simd_neon_intrinsics) {
    Backend::Neon
} else {
    Backend::Portable
};

/// Describes the vector configuration selected for the current build.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub struct Capabilities {
    /// The instruction set used to implement vector operations.
    pub backend: Backend,
    /// See [`HAS_FAST_UNALIGNED`].
    pub fast_unaligned: bool,
    /// See [`HAS_BYTE_SHUFFLE`].
    pub byte_shuffle: bool,
    /// See [`HAS_NATIVE_U64_LANES`].
    pub native_u64_lanes: bool,
    /// See [`HAS_CRYPTO_EXT`].
    pub crypto: bool,
    /// See [`IS_BIG_ENDIAN`].
    pub big_endian: bool,
}

/// The [`Capabilities`] of the current build.
pub const CAPABILITIES: Capabilities = Capabilities {
    backend: BACKEND,
    fast_unaligned: HAS_FAST_UNALIGNED,
    byte_shuffle: HAS_BYTE_SHUFFLE,
    native_u64_lanes: HAS_NATIVE_U64_LANES,
    crypto: HAS_CRYPTO_EXT,
    big_endian: IS_BIG_ENDIAN,
};

impl core::fmt::Display for Capabilities {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        fn flag(f: &mut core::fmt::Formatter<'_>, name: &str, enabled: bool) -> core::fmt::Result {
            write!(f, " {}{name}", if enabled { '+' } else { '-' })
        }

        write!(
            f,
            "{} {}",
            self.backend,
            if self.big_endian { "big-endian" } else { "little-endian" }
        )?;
        flag(f, "fast-unaligned", self.fast_unaligned)?;
        flag(f, "byte-shuffle", self.byte_shuffle)?;
        flag(f, "u64-lanes", self.native_u64_lanes)?;
        flag(f, "crypto", self.crypto)
    }
}

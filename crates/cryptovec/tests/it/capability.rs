use cryptovec::{
    Backend, CAPABILITIES, HAS_BYTE_SHUFFLE, HAS_CRYPTO_EXT, HAS_FAST_UNALIGNED,
    HAS_NATIVE_U64_LANES, IS_BIG_ENDIAN,
};

#[test]
fn capabilities_match_constants() {
    assert_eq!(CAPABILITIES.fast_unaligned, HAS_FAST_UNALIGNED);
    assert_eq!(CAPABILITIES.crypto, HAS_CRYPTO_EXT);
    assert_eq!(CAPABILITIES.big_endian, IS_BIG_ENDIAN);
    assert_eq!(CAPABILITIES.native_u64_lanes, HAS_NATIVE_U64_LANES);
    assert_eq!(CAPABILITIES.byte_shuffle, HAS_BYTE_SHUFFLE);
}

#[test]
fn capabilities_follow_build_configuration() {
    assert_eq!(IS_BIG_ENDIAN, cfg!(target_endian = "big"));
    assert_eq!(HAS_FAST_UNALIGNED, !cfg!(feature = "strict-alignment"));
    assert_eq!(HAS_NATIVE_U64_LANES, !cfg!(feature = "emulate-u64-lanes"));
    assert_eq!(HAS_CRYPTO_EXT, cfg!(simd_crypto));

    if !cfg!(feature = "simd-intrinsics") || IS_BIG_ENDIAN {
        assert_eq!(CAPABILITIES.backend, Backend::Portable);
    }

    if HAS_CRYPTO_EXT {
        assert_ne!(CAPABILITIES.backend, Backend::Portable);
    }
}

#[test]
#[cfg(all(feature = "simd-intrinsics", target_arch = "x86_64"))]
fn x86_64_uses_sse2() {
    assert_eq!(CAPABILITIES.backend, Backend::Sse2);
}

#[test]
fn display() {
    let text = CAPABILITIES.to_string();
    assert!(text.starts_with(CAPABILITIES.backend.name()), "{text}");
    assert!(text.contains("-endian"), "{text}");
    assert!(text.contains("crypto"), "{text}");
    assert_eq!(Backend::Portable.to_string(), "portable");
}

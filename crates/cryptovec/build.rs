fn main() {
    use cfg_aliases::cfg_aliases;

    println!("cargo::rustc-check-cfg=cfg(simd_intrinsics)");
    println!("cargo::rustc-check-cfg=cfg(simd_sse2_intrinsics)");
    println!("cargo::rustc-check-cfg=cfg(simd_ssse3_intrinsics)");
    println!("cargo::rustc-check-cfg=cfg(simd_neon_intrinsics)");
    println!("cargo::rustc-check-cfg=cfg(simd_no_intrinsics)");
    println!("cargo::rustc-check-cfg=cfg(simd_crypto)");
    println!("cargo::rustc-check-cfg=cfg(simd_fast_unaligned)");
    println!("cargo::rustc-check-cfg=cfg(simd_native_u64)");

    cfg_aliases! {
        simd_intrinsics: { feature = "simd-intrinsics" }, // not(miri)
        simd_sse2_intrinsics: {
            all(simd_intrinsics, any(target_arch = "x86", target_arch = "x86_64"), target_feature = "sse2")
        },
        simd_ssse3_intrinsics: { all(simd_sse2_intrinsics, target_feature = "ssse3") },
        // TODO: Support big-endian ARM targets
        simd_neon_intrinsics: {
            all(simd_intrinsics, target_arch = "aarch64", target_endian = "little", target_feature = "neon")
        },
        simd_no_intrinsics: { not(any(simd_sse2_intrinsics, simd_neon_intrinsics)) },
        simd_crypto: {
            any(
                all(simd_sse2_intrinsics, target_feature = "aes"),
                all(simd_neon_intrinsics, target_feature = "aes")
            )
        },
        simd_fast_unaligned: { not(feature = "strict-alignment") },
        simd_native_u64: { not(feature = "emulate-u64-lanes") },
    }
}

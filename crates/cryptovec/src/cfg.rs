//! Build configurations that are rejected outright.

#[cfg(all(simd_sse2_intrinsics, simd_neon_intrinsics))]
compile_error!("at most one vector intrinsics backend can be selected");

#[cfg(all(target_endian = "big", not(simd_no_intrinsics)))]
compile_error!("vector intrinsics backends are only supported on little-endian targets");

#[cfg(all(simd_crypto, simd_no_intrinsics))]
compile_error!("the crypto extension requires the `sse2` or `neon` backend");

#[cfg(all(simd_ssse3_intrinsics, not(simd_sse2_intrinsics)))]
compile_error!("`ssse3` byte shuffles require the `sse2` backend");

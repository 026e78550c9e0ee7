use crate::{counting, Aligned, SEQUENCE};
use cryptovec::load::{self, emulated};
use cryptovec::{U32x4, Vector, V128};
use proptest::prelude::*;

#[test]
fn load_matches_memory_at_every_offset() {
    let buf = counting::<48>();
    for offset in 0..=32 {
        let v: V128 = cryptovec::load_at(&buf.0, offset);
        assert_eq!(v.to_bytes(), buf.0[offset..offset + 16], "offset {offset}");

        let emulated: V128 = emulated::load_at(&buf.0, offset);
        assert_eq!(emulated, v, "offset {offset}");
    }
}

#[test]
fn round_trip_between_offsets() {
    let src = counting::<32>();
    for from in 0..16 {
        for to in 0..16 {
            let mut dst = Aligned([0xAA; 48]);
            let v: V128 = cryptovec::load_at(&src.0, from);
            cryptovec::store_at(v, &mut dst.0, to);

            assert_eq!(dst.0[to..to + 16], src.0[from..from + 16], "{from} -> {to}");
            assert!(
                dst.0[..to].iter().chain(&dst.0[to + 16..]).all(|&b| b == 0xAA),
                "store to {to} wrote outside of its window"
            );
        }
    }
}

#[test]
fn emulated_round_trip_between_offsets() {
    let src = counting::<32>();
    for from in 0..16 {
        for to in 0..16 {
            let mut dst = Aligned([0x55; 48]);
            let v: V128 = emulated::load_at(&src.0, from);
            emulated::store_at(v, &mut dst.0, to);

            assert_eq!(dst.0[to..to + 16], src.0[from..from + 16], "{from} -> {to}");
            assert!(
                dst.0[..to].iter().chain(&dst.0[to + 16..]).all(|&b| b == 0x55),
                "store to {to} wrote outside of its window"
            );
        }
    }
}

#[test]
fn emulated_load_at_end_of_buffer() {
    // The aligned block holding the last byte would extend past the end of the slice.
    let buf = counting::<32>();
    let tail = &buf.0[..19];
    let v: V128 = emulated::load_at(tail, 3);
    assert_eq!(v.to_bytes(), buf.0[3..19]);
}

#[test]
fn big_endian_round_trip_between_offsets() {
    let src = counting::<32>();
    for from in 0..16 {
        for to in 0..16 {
            let mut dst = Aligned([0; 48]);
            let v: V128 = cryptovec::load_be_at(&src.0, from);
            cryptovec::store_be_at(v, &mut dst.0, to);
            assert_eq!(dst.0[to..to + 16], src.0[from..from + 16], "{from} -> {to}");
        }
    }
}

#[test]
fn big_endian_load_is_reversed_native_load() {
    let native: V128 = cryptovec::load(&SEQUENCE);
    let be: V128 = cryptovec::load_be(&SEQUENCE);

    if cryptovec::IS_BIG_ENDIAN {
        assert_eq!(be, native);
    } else {
        assert_eq!(be, cryptovec::reverse(native));
    }

    assert_eq!(be.to_be_bytes(), SEQUENCE);
    assert_eq!(be, V128::from_be_bytes(SEQUENCE));
    assert_eq!(be.to_u128(), 0x0001_0203_0405_0607_0809_0A0B_0C0D_0E0F);
}

#[test]
fn out_of_bounds_window() {
    let buf = [0u8; 20];
    let error = load::try_load_at::<V128>(&buf, 5).unwrap_err();
    assert_eq!(error.offset(), 5);
    assert_eq!(error.buffer_len(), 20);

    assert!(load::try_load_be_at::<V128>(&buf, 4).is_ok());
    assert!(emulated::try_load_at::<V128>(&buf, usize::MAX).is_err());

    let mut dst = [1u8; 15];
    assert!(load::try_store_at(V128::zero(), &mut dst, 0).is_err());
    assert!(load::try_store_be_at(V128::zero(), &mut dst, 0).is_err());
    assert!(emulated::try_store_at(V128::zero(), &mut dst, 0).is_err());
    assert_eq!(dst, [1; 15]);
}

#[test]
#[should_panic(expected = "16-byte window at offset 0 is out of bounds for a buffer of length 8")]
fn load_panics_on_short_buffer() {
    let _: V128 = cryptovec::load(&[0u8; 8]);
}

#[test]
#[should_panic(expected = "out of bounds")]
fn store_panics_on_short_buffer() {
    cryptovec::store_be(V128::zero(), &mut [0u8; 31][17..]);
}

#[test]
fn word_round_trip() {
    let words = [0x0011_2233, 0x4455_6677, 0x8899_AABB, 0xCCDD_EEFF];
    let v = load::load_words(&words);
    assert_eq!(v.into_lanes(), words);

    let mut out = [0u32; 4];
    load::store_words(v + U32x4::splat(1), &mut out);
    assert_eq!(out, [0x0011_2234, 0x4455_6678, 0x8899_AABC, 0xCCDD_EF00]);
}

#[test]
fn loads_reinterpret_without_changing_bytes() {
    let v: U32x4 = cryptovec::load(&SEQUENCE);
    assert_eq!(v.reinterpret::<V128>().to_bytes(), SEQUENCE);
    assert_eq!(
        v.into_lanes(),
        [
            u32::from_ne_bytes([0, 1, 2, 3]),
            u32::from_ne_bytes([4, 5, 6, 7]),
            u32::from_ne_bytes([8, 9, 10, 11]),
            u32::from_ne_bytes([12, 13, 14, 15]),
        ]
    );
}

fn window() -> impl Strategy<Value = (usize, Vec<u8>)> {
    (0usize..48).prop_flat_map(|offset| {
        (
            Just(offset),
            proptest::collection::vec(any::<u8>(), offset + 16..offset + 40),
        )
    })
}

proptest! {
    #[test]
    fn emulated_matches_native((offset, bytes) in window()) {
        let fast: V128 = cryptovec::load_at(&bytes, offset);
        let slow: V128 = emulated::load_at(&bytes, offset);
        prop_assert_eq!(fast, slow);

        let mut native = vec![0u8; bytes.len()];
        let mut aligned = native.clone();
        cryptovec::store_at(fast, &mut native, offset);
        emulated::store_at(fast, &mut aligned, offset);
        prop_assert_eq!(&native[offset..offset + 16], &bytes[offset..offset + 16]);
        prop_assert_eq!(native, aligned);
    }
}

use crate::SEQUENCE;
use cryptovec::{
    get_high, get_low, permute, permute2, reverse, rotate_left_octet, rotate_right_octet,
    shift_left_octet, shift_right_octet, swap_words, Mask, U32x4, U8x16, V128,
};
use proptest::prelude::*;

#[test]
fn shifts_move_bytes_within_canonical_view() {
    let v = V128::from_be_bytes(SEQUENCE);

    assert_eq!(
        shift_left_octet::<1, _>(v).to_be_bytes(),
        [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 0]
    );
    assert_eq!(
        shift_right_octet::<2, _>(v).to_be_bytes(),
        [0, 0, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13]
    );
    assert_eq!(
        rotate_left_octet::<1, _>(v).to_be_bytes(),
        [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 0]
    );
    assert_eq!(
        rotate_right_octet::<3, _>(v).to_be_bytes(),
        [13, 14, 15, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]
    );
}

#[test]
fn shift_counts_out_of_range() {
    let v = V128::from_be_bytes(SEQUENCE);
    assert_eq!(shift_left_octet::<0, _>(v), v);
    assert_eq!(shift_left_octet::<16, _>(v), V128::zero());
    assert_eq!(shift_right_octet::<100, _>(v), V128::zero());
    assert_eq!(rotate_left_octet::<16, _>(v), v);
    assert_eq!(rotate_right_octet::<17, _>(v), rotate_right_octet::<1, _>(v));
}

#[test]
fn get_high_keeps_most_significant_half() {
    let v: V128 = cryptovec::load_be(&SEQUENCE);
    assert_eq!(
        get_high(v).to_be_bytes(),
        [0, 1, 2, 3, 4, 5, 6, 7, 0, 0, 0, 0, 0, 0, 0, 0]
    );

    let mut out = [0xFF; 16];
    cryptovec::store_be(get_high(v), &mut out);
    assert_eq!(out, [0, 1, 2, 3, 4, 5, 6, 7, 0, 0, 0, 0, 0, 0, 0, 0]);
}

#[test]
fn get_low_keeps_least_significant_half() {
    let v: V128 = cryptovec::load_be(&SEQUENCE);
    assert_eq!(
        get_low(v).to_be_bytes(),
        [0, 0, 0, 0, 0, 0, 0, 0, 8, 9, 10, 11, 12, 13, 14, 15]
    );
}

#[test]
fn swap_words_exchanges_halves() {
    let v = V128::from_u128(0x0011_2233_4455_6677_8899_AABB_CCDD_EEFF);
    assert_eq!(swap_words(v).to_u128(), 0x8899_AABB_CCDD_EEFF_0011_2233_4455_6677);
    assert_eq!(swap_words(swap_words(v)), v);
}

#[test]
fn reverse_bytes() {
    let v = V128::from_bytes(SEQUENCE);
    let mut reversed = SEQUENCE;
    reversed.reverse();
    assert_eq!(reverse(v).to_bytes(), reversed);
    assert_eq!(permute(v, Mask::REVERSE), reverse(v));
}

#[test]
fn permute2_selects_from_both_sources() {
    let a = U8x16::splat(0xAA);
    let b = U8x16::from_lanes(SEQUENCE);
    let mask = Mask::new([31, 0, 17, 1, 16, 15, 30, 2, 3, 18, 19, 4, 5, 20, 21, 6]);
    assert_eq!(
        permute2(a, b, mask).into_lanes(),
        [15, 0xAA, 1, 0xAA, 0, 0xAA, 14, 0xAA, 0xAA, 2, 3, 0xAA, 0xAA, 4, 5, 0xAA]
    );
}

#[test]
fn permute_selects_zero_from_second_half() {
    let v = U8x16::from_lanes(SEQUENCE);
    let mask = Mask::new([0, 16, 1, 31, 2, 20, 3, 25, 4, 16, 5, 16, 6, 16, 7, 16]);
    assert_eq!(
        permute(v, mask).into_lanes(),
        [0, 0, 1, 0, 2, 0, 3, 0, 4, 0, 5, 0, 6, 0, 7, 0]
    );
}

#[test]
fn permute_mixed_vector_types() {
    let words = U32x4::from_lanes([1, 2, 3, 4]);
    let swapped = permute2(words, V128::zero(), Mask::sequential(8));
    assert_eq!(swapped.into_lanes(), [3, 4, 0, 0]);
}

#[test]
fn const_masks() {
    const ROTATE: Mask = Mask::rotate_left(5);
    assert_eq!(ROTATE, Mask::rotate_right(11));
    assert_eq!(Mask::sequential(0), Mask::IDENTITY);
    assert_eq!(Mask::default(), Mask::IDENTITY);
    assert_eq!(Mask::shift_left(0), Mask::IDENTITY);
    assert_eq!(Mask::shift_left(16).indices(), [16; 16]);
    assert_eq!(Mask::shift_right(usize::MAX).indices(), [16; 16]);
    assert_eq!(Mask::rotate_left(16), Mask::IDENTITY);
}

#[test]
#[cfg(target_endian = "little")]
fn little_endian_masks_move_toward_higher_addresses() {
    assert_eq!(
        Mask::shift_left(2).indices(),
        [16, 16, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13]
    );
    assert_eq!(
        Mask::rotate_left(1).indices(),
        [15, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14]
    );
}

#[test]
#[should_panic(expected = "permutation mask index out of range")]
fn out_of_range_mask_index() {
    let _ = Mask::new([32; 16]);
}

macro_rules! octet_properties {
    ($v:ident; $($k:literal)*) => {$(
        prop_assert_eq!(rotate_left_octet::<$k, _>(rotate_right_octet::<$k, _>($v)), $v);
        prop_assert_eq!(rotate_left_octet::<$k, _>($v).to_u128(), $v.to_u128().rotate_left($k * 8));
        prop_assert_eq!(rotate_right_octet::<$k, _>($v).to_u128(), $v.to_u128().rotate_right($k * 8));
        prop_assert_eq!(shift_left_octet::<$k, _>($v).to_u128(), $v.to_u128() << ($k * 8));
        prop_assert_eq!(shift_right_octet::<$k, _>($v).to_u128(), $v.to_u128() >> ($k * 8));
    )*};
}

proptest! {
    #[test]
    fn octet_shifts_match_integer_shifts(x in any::<u128>()) {
        let v = V128::from_u128(x);
        octet_properties!(v; 0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15);
    }

    #[test]
    fn double_reverse_is_identity(bytes in any::<[u8; 16]>()) {
        let v = V128::from_bytes(bytes);
        prop_assert_eq!(reverse(reverse(v)), v);
        prop_assert_eq!(permute(v, Mask::IDENTITY), v);
    }

    #[test]
    fn halves_recombine(x in any::<u128>()) {
        let v = V128::from_u128(x);
        prop_assert_eq!(get_high(v) | get_low(v), v);
        prop_assert_eq!(get_low(v).to_u128(), x & u128::from(u64::MAX));
    }
}

use cryptovec::arith::{self, emulated};
use cryptovec::{
    add, add64, and, equal, not_equal, or, rotate_left_bits, rotate_right_bits, sub, xor, Lanes,
    U16x8, U32x4, U64x2, U8x16, V128,
};
use num_traits::PrimInt;
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

#[test]
fn emulated_add64_matches_wrapping_add() {
    let mut rng = StdRng::seed_from_u64(0x5EED_CAFE);
    for _ in 0..10_000 {
        let a: [u64; 2] = rng.gen();
        let b: [u64; 2] = rng.gen();
        let expected = [a[0].wrapping_add(b[0]), a[1].wrapping_add(b[1])];

        let (va, vb) = (U64x2::from_lanes(a), U64x2::from_lanes(b));
        assert_eq!(emulated::add64(va, vb).into_lanes(), expected, "{a:x?} + {b:x?}");
        assert_eq!(add64(va, vb).into_lanes(), expected, "{a:x?} + {b:x?}");
    }
}

#[test]
fn add64_carry_boundaries() {
    let a = U64x2::from_lanes([u64::MAX, 0xFFFF_FFFF]);
    let b = U64x2::from_lanes([1, 1]);
    assert_eq!(emulated::add64(a, b).into_lanes(), [0, 0x1_0000_0000]);
    assert_eq!(add64(a, b).into_lanes(), [0, 0x1_0000_0000]);

    let c = U64x2::from_lanes([0x8000_0000_FFFF_FFFF, u64::MAX]);
    assert_eq!(
        emulated::add64(c, c).into_lanes(),
        [0x0000_0001_FFFF_FFFE, u64::MAX - 1]
    );
}

#[test]
fn carry_out_of_each_lane() {
    let a = U32x4::from_lanes([u32::MAX, 1, 0x8000_0000, 0]);
    let b = U32x4::from_lanes([1, 1, 0x8000_0000, u32::MAX]);
    assert_eq!(emulated::carry32(a, b).into_lanes(), [1, 0, 1, 0]);
}

#[test]
fn lanewise_arithmetic_wraps() {
    let bytes = U8x16::splat(0xFF);
    assert_eq!(add(bytes, U8x16::splat(2)).into_lanes(), [1; 16]);
    assert_eq!(sub(U16x8::splat(0), U16x8::splat(1)).into_lanes(), [u16::MAX; 8]);

    let words = U32x4::from_lanes([1, u32::MAX, 3, 4]);
    assert_eq!((words + U32x4::splat(1)).into_lanes(), [2, 0, 4, 5]);

    let mut acc = U64x2::splat(5);
    acc -= U64x2::splat(6);
    acc += U64x2::from_lanes([1, 2]);
    assert_eq!(acc.into_lanes(), [0, 1]);
}

#[test]
fn arithmetic_reinterprets_second_operand() {
    let words = U32x4::splat(0x0101_0101);
    let bytes = U8x16::splat(0xFF);
    assert_eq!(add(words, bytes).into_lanes(), [0x0101_0100; 4]);
    assert_eq!(and(bytes, V128::zero()).into_lanes(), [0; 16]);
}

fn reference_rotate<T: PrimInt>(lanes: &mut [T], n: u32, left: bool) {
    for lane in lanes {
        *lane = if left { lane.rotate_left(n) } else { lane.rotate_right(n) };
    }
}

macro_rules! rotations {
    ($lanes:ident; $($n:literal)*) => {$(
        let v = U32x4::from_lanes($lanes);

        let mut expected = $lanes;
        reference_rotate(&mut expected, $n % 32, true);
        prop_assert_eq!(rotate_left_bits::<$n>(v).into_lanes(), expected);

        let mut expected = $lanes;
        reference_rotate(&mut expected, $n % 32, false);
        prop_assert_eq!(rotate_right_bits::<$n>(v).into_lanes(), expected);

        let wide = U64x2::from_lanes([u64::from($lanes[0]) << 32 | u64::from($lanes[1]), u64::from($lanes[2])]);
        let mut expected = wide.into_lanes();
        reference_rotate(&mut expected, $n % 64, true);
        prop_assert_eq!(arith::rotate_left_bits64::<$n>(wide).into_lanes(), expected);

        let mut expected = wide.into_lanes();
        reference_rotate(&mut expected, $n % 64, false);
        prop_assert_eq!(arith::rotate_right_bits64::<$n>(wide).into_lanes(), expected);
    )*};
}

proptest! {
    #[test]
    fn bit_rotations_match_scalar(lanes in any::<[u32; 4]>()) {
        rotations!(lanes; 0 1 7 8 13 16 25 31 32 45 63 64);
    }

    #[test]
    fn bitwise_operations_match_integers(a in any::<u128>(), b in any::<u128>()) {
        let (va, vb) = (V128::from_u128(a), V128::from_u128(b));
        prop_assert_eq!(and(va, vb).to_u128(), a & b);
        prop_assert_eq!(or(va, vb).to_u128(), a | b);
        prop_assert_eq!(xor(va, vb).to_u128(), a ^ b);
        prop_assert_eq!((!va).to_u128(), !a);
    }

    #[test]
    fn equality(x in any::<u128>(), bit in 0u32..128) {
        let v = V128::from_u128(x);
        let words = U32x4::from(v);
        prop_assert!(equal(v, v));
        prop_assert!(equal(words, v));
        prop_assert!(!not_equal(v, words));

        let flipped = V128::from_u128(x ^ (1 << bit));
        prop_assert!(not_equal(v, flipped));
        prop_assert!(!equal(flipped, words));
        prop_assert_ne!(v, flipped);
    }

    #[test]
    fn lanes_trait_round_trip(lanes in any::<[u16; 8]>()) {
        let v = <U16x8 as Lanes>::from_lanes(lanes);
        prop_assert_eq!(Lanes::into_lanes(v), lanes);
        prop_assert_eq!(<U16x8 as Lanes>::LANES, 8);
        prop_assert_eq!(Lanes::wrapping_sub(Lanes::wrapping_add(v, v), v), v);
    }
}

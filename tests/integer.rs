use clamped_num::*;

// Repeated saturating multiplication, for comparison with `pow`.
fn naive_pow<T: ClampedMath>(x: T, y: u32) -> T {
    let mut acc = T::ONE;
    for _ in 0..y {
        acc = multiply(acc, x);
    }
    acc
}

#[test]
fn byte_scenarios() {
    assert_eq!(add(12u8, 12), 24);
    assert_eq!(add(255u8, 255), 255);
    assert_eq!(add(0u8, 0), 0);

    assert_eq!(subtract(12u8, 8), 4);
    assert_eq!(subtract(255u8, 0), 255);
    assert_eq!(subtract(0u8, 255), 0);

    assert_eq!(multiply(12u8, 12), 144);
    assert_eq!(multiply(255u8, 255), 255);

    assert_eq!(divide(12u8, 4), 3);
    assert_eq!(remainder(12u8, 5), 2);

    assert_eq!(pow(255u8, 2), 255);
    assert_eq!(pow(2u8, 7), 128);

    for x in 0..=255u8 {
        assert_eq!(divide(x, 0), 255, "divide({}, 0)", x);
        assert_eq!(remainder(x, 0), 0, "remainder({}, 0)", x);
        assert_eq!(pow(x, 0), 1, "pow({}, 0)", x);
        assert_eq!(pow(x, 1), x, "pow({}, 1)", x);
    }
}

#[test]
fn signed_add_sub() {
    assert_eq!(add(i8::MAX, 1), i8::MAX);
    assert_eq!(add(i8::MIN, -1), i8::MIN);
    assert_eq!(add(100i8, -120), -20);
    assert_eq!(add(i32::MIN, i32::MAX), -1);

    assert_eq!(subtract(i8::MAX, -1), i8::MAX);
    assert_eq!(subtract(i8::MIN, 1), i8::MIN);
    assert_eq!(subtract(0i8, i8::MIN), i8::MAX);
    assert_eq!(subtract(-1i8, i8::MIN), 127);

    assert_eq!(add(i64::MAX, i64::MAX), i64::MAX);
    assert_eq!(subtract(i64::MIN, i64::MAX), i64::MIN);
    assert_eq!(add(i128::MAX, 1), i128::MAX);
}

#[test]
fn unsigned_add_sub() {
    assert_eq!(add(u16::MAX, 1), u16::MAX);
    assert_eq!(subtract(3u32, 5), 0);
    assert_eq!(subtract(u64::MAX, u64::MAX), 0);
    assert_eq!(add(u128::MAX, u128::MAX), u128::MAX);
}

#[test]
fn multiply_sign_rule() {
    assert_eq!(multiply(i16::MAX, i16::MAX), i16::MAX);
    assert_eq!(multiply(i16::MIN, i16::MIN), i16::MAX);
    assert_eq!(multiply(i16::MAX, i16::MIN), i16::MIN);
    assert_eq!(multiply(i16::MIN, 2), i16::MIN);
    assert_eq!(multiply(-200i16, -200), i16::MAX);
    assert_eq!(multiply(-200i16, 200), i16::MIN);
    assert_eq!(multiply(i8::MIN, -1), i8::MAX);
    assert_eq!(multiply(i8::MIN, 1), i8::MIN);
    assert_eq!(multiply(u32::MAX, 2), u32::MAX);
    assert_eq!(multiply(-7i32, 6), -42);
}

#[test]
fn divide_policy() {
    assert_eq!(divide(-5i32, 0), i32::MAX, "divide by zero ignores the dividend's sign");
    assert_eq!(divide(5i32, 0), i32::MAX);
    assert_eq!(divide(0i32, 0), i32::MAX);
    assert_eq!(divide(i64::MIN, -1), i64::MAX);
    assert_eq!(divide(-7i32, 2), -3, "integer division truncates toward zero");
    assert_eq!(divide(u64::MAX, 0), u64::MAX);
}

#[test]
fn remainder_policy() {
    assert_eq!(remainder(-5i32, 0), 0);
    assert_eq!(remainder(i64::MIN, -1), 0);
    assert_eq!(remainder(-7i32, 2), -1);
    assert_eq!(remainder(7i32, -2), 1);
    assert_eq!(remainder(u8::MAX, 0), 0);
}

#[test]
fn pow_boundaries() {
    assert_eq!(pow(0i32, 0), 1, "0^0 is 1");
    assert_eq!(pow(i32::MIN, 1), i32::MIN);
    assert_eq!(pow(i32::MAX, 2), i32::MAX);
    assert_eq!(pow(i8::MIN, 2), i8::MAX);
    assert_eq!(pow(i8::MIN, 3), i8::MIN);
    assert_eq!(pow(-2i8, 7), -128, "exactly MIN does not saturate");
    assert_eq!(pow(-2i8, 8), i8::MAX);
    assert_eq!(pow(-3i8, 6), i8::MAX, "even power of a negative base is positive");
    assert_eq!(pow(-3i8, 5), i8::MIN);
    assert_eq!(pow(2i32, -1), 0, "negative exponents have no integer result");
    assert_eq!(pow(1i32, -5), 0);
    assert_eq!(pow(-1i64, 1_000_001), -1);
    assert_eq!(pow(-1i64, 1_000_000), 1);
    assert_eq!(pow(2u64, 63), 1 << 63);
    assert_eq!(pow(2u64, 64), u64::MAX);
    assert_eq!(pow(3u128, 80), 3u128.pow(80));
    assert_eq!(pow(10i64, i64::MAX), i64::MAX);
    assert_eq!(pow(0u32, u32::MAX), 0);
}

#[test]
fn pow_matches_repeated_multiplication() {
    for x in i8::MIN..=i8::MAX {
        for y in 0..=9u32 {
            assert_eq!(
                pow(x, y as i8),
                naive_pow(x, y),
                "pow({}, {}) disagrees with repeated multiplication",
                x,
                y
            );
        }
    }
    for x in 0..=u8::MAX {
        for y in 0..=9u32 {
            assert_eq!(pow(x, y as u8), naive_pow(x, y), "pow({}, {})", x, y);
        }
    }
}

#[test]
fn generic_over_widths() {
    fn check<T: ClampedMath>() {
        assert_eq!(add(T::MAX, T::ONE), T::MAX);
        assert_eq!(subtract(T::MIN, T::ONE), T::MIN);
        assert_eq!(multiply(T::MAX, T::MAX), T::MAX);
        assert_eq!(divide(T::MAX, T::ONE), T::MAX);
        assert_eq!(divide(T::ONE, T::ZERO), T::MAX);
        assert_eq!(remainder(T::MAX, T::ZERO), T::ZERO);
        assert_eq!(pow(T::MAX, add(T::ONE, T::ONE)), T::MAX);
    }

    check::<i8>();
    check::<i16>();
    check::<i32>();
    check::<i64>();
    check::<i128>();
    check::<u8>();
    check::<u16>();
    check::<u32>();
    check::<u64>();
    check::<u128>();
}

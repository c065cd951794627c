use clamped_num::*;

#[test]
fn nan_results_become_zero() {
    let values = [0.0, -1.5, 3.0, f64::MAX, f64::MIN, f64::INFINITY, f64::NAN];
    for &y in &values {
        assert_eq!(add(f64::NAN, y), 0.0, "add(NaN, {})", y);
        assert_eq!(multiply(f64::NAN, y), 0.0, "multiply(NaN, {})", y);
        assert_eq!(subtract(f64::NAN, y), 0.0, "subtract(NaN, {})", y);
        assert_eq!(divide(f64::NAN, y), 0.0, "divide(NaN, {})", y);
    }
    assert_eq!(divide(0.0f64, 0.0), 0.0);
    assert_eq!(add(f64::INFINITY, f64::NEG_INFINITY), 0.0);
    assert_eq!(multiply(f32::INFINITY, 0.0), 0.0);
}

#[test]
fn overflow_saturates() {
    assert_eq!(add(f64::MAX, f64::MAX), f64::MAX);
    assert_eq!(add(f64::MIN, f64::MIN), f64::MIN);
    assert_eq!(subtract(f64::MIN, f64::MAX), f64::MIN);
    assert_eq!(subtract(f32::MAX, f32::MIN), f32::MAX);
    assert_eq!(multiply(f64::MAX, 2.0), f64::MAX);
    assert_eq!(multiply(f64::MAX, -2.0), f64::MIN);
    assert_eq!(multiply(f32::MAX, f32::MAX), f32::MAX);
    assert_eq!(add(f64::INFINITY, 1.0), f64::MAX);
    assert_eq!(add(f64::NEG_INFINITY, 1.0), f64::MIN);
}

#[test]
fn division() {
    assert_eq!(divide(1.0f64, 0.0), f64::MAX);
    assert_eq!(divide(-1.0f64, 0.0), f64::MIN);
    assert_eq!(divide(1.0f64, -0.0), f64::MIN);
    assert_eq!(divide(7.5f64, 2.5), 3.0);
    assert_eq!(divide(f64::MAX, 0.5), f64::MAX);
}

#[test]
fn remainder_by_zero() {
    assert_eq!(remainder(5.5f64, 0.0), 0.0);
    assert_eq!(remainder(-5.5f32, 0.0), 0.0);
    assert_eq!(remainder(5.5f64, 2.0), 1.5);
    assert_eq!(remainder(f64::INFINITY, 2.0), 0.0);
}

#[test]
fn powers() {
    assert_eq!(pow(f64::NAN, 0.0), 1.0);
    assert_eq!(pow(0.0f64, 0.0), 1.0);
    assert_eq!(pow(2.5f64, 1.0), 2.5);
    assert_eq!(pow(f64::NAN, 1.0), 0.0);
    assert_eq!(pow(2.0f64, 10.0), 1024.0);
    assert_eq!(pow(4.0f64, 0.5), 2.0);
    assert_eq!(pow(f64::MAX, 2.0), f64::MAX);
    assert_eq!(pow(-f64::MAX, 3.0), f64::MIN);
    assert_eq!(pow(-8.0f64, 1.0 / 3.0), 0.0, "negative base with fractional exponent is NaN");
    assert_eq!(pow(0.0f32, -1.0), f32::MAX);
    assert_eq!(pow(f32::MAX, 2.0), f32::MAX);
}

#[test]
fn boundary_constants() {
    assert_eq!(<f64 as Primitive>::MIN, -f64::MAX);
    assert_eq!(<f32 as Primitive>::MAX, f32::MAX);
    assert!(<f64 as Primitive>::SIGNED && <f64 as Primitive>::FLOATING);
    assert_eq!(<f32 as Primitive>::BITS, 32);
    assert_eq!(f64::NAN.normalize(), 0.0);
    assert_eq!(f32::NEG_INFINITY.normalize(), f32::MIN);
    assert_eq!(1.25f64.normalize(), 1.25);
}

use std::f64::consts::PI;

use clamped_num::geometry::*;
use clamped_num::*;

fn iv(x: i32, y: i32) -> Vector2<Int32> {
    Vector2::new(Int32::new(x), Int32::new(y))
}

fn dv(x: f64, y: f64) -> Vector2<Double> {
    Vector2::new(Double::new(x), Double::new(y))
}

fn fv(x: i64, y: i64) -> Vector2<Fix64> {
    Vector2::new(Fix64::from_int(x), Fix64::from_int(y))
}

fn irect(x: i32, y: i32, width: i32, height: i32) -> Rectangle<Int32> {
    Rectangle::new(Int32::new(x), Int32::new(y), Int32::new(width), Int32::new(height))
}

fn close(a: Double, b: f64) -> bool {
    (a.get() - b).abs() < 1e-9
}

#[test]
fn vectors() {
    let v = iv(3, 4);
    assert_eq!(v.length(), Int32::new(5));
    assert_eq!(v.length_squared(), Int32::new(25));
    assert_eq!(v.dot(iv(2, -1)), Int32::new(2));
    assert_eq!(iv(1, 0).cross(iv(0, 1)), Int32::new(1), "counter-clockwise is positive");
    assert_eq!(iv(0, 1).cross(iv(1, 0)), Int32::new(-1));
    assert_eq!(v + iv(1, 1), iv(4, 5));
    assert_eq!(v - iv(5, 5), iv(-2, -1));
    assert_eq!(v.scale(Int32::new(3)), iv(9, 12));
    assert_eq!(Vector2::<Int32>::zero(), iv(0, 0));
    assert_eq!(iv(0, 0).distance(iv(6, 8)), Int32::new(10));

    assert_eq!(-iv(i32::MIN, 1), iv(i32::MAX, -1), "negation saturates");
    assert_eq!(iv(i32::MAX, 0) + iv(1, 0), iv(i32::MAX, 0));
    assert_eq!(iv(i32::MAX, i32::MAX).length_squared(), Int32::MAX);
}

#[test]
fn rectangles() {
    let r = irect(0, 0, 10, 5);
    assert_eq!(r.area(), Int32::new(50));
    assert_eq!(r.perimeter(), Int32::new(30));
    assert_eq!(r.right(), Int32::new(10));
    assert_eq!(r.bottom(), Int32::new(5));
    assert_eq!(r.center(), iv(5, 2));

    assert!(r.contains(iv(10, 5)), "edges are inclusive");
    assert!(r.contains(iv(3, 3)));
    assert!(!r.contains(iv(11, 0)));
    assert!(!r.contains(iv(0, -1)));

    let other = irect(5, 2, 10, 10);
    assert!(r.intersects(&other));
    assert_eq!(r.intersection(&other), Some(irect(5, 2, 5, 3)));
    assert_eq!(r.union(&other), irect(0, 0, 15, 12));

    let far = irect(20, 20, 1, 1);
    assert!(!r.intersects(&far));
    assert_eq!(r.intersection(&far), None);

    let touching = irect(10, 0, 4, 4);
    assert_eq!(r.intersection(&touching), Some(irect(10, 0, 0, 4)));

    assert_eq!(irect(1, 1, -4, 3).width, Int32::ZERO, "negative size");
    assert_eq!(
        Rectangle::from_corners(iv(4, 7), iv(1, 2)),
        irect(1, 2, 3, 5)
    );
    assert_eq!(irect(i32::MAX - 5, 0, 100, 1).right(), Int32::MAX);
    assert_eq!(irect(0, 0, i32::MAX, i32::MAX).area(), Int32::MAX);
}

#[test]
fn triangles() {
    let t = Triangle::new(dv(0.0, 0.0), dv(4.0, 0.0), dv(0.0, 3.0));
    assert!(close(t.area(), 6.0));
    assert!(close(t.perimeter(), 12.0));
    let centroid = t.centroid();
    assert!(close(centroid.x, 4.0 / 3.0));
    assert!(close(centroid.y, 1.0));

    assert!(t.contains(dv(1.0, 1.0)));
    assert!(t.contains(dv(4.0, 0.0)), "vertices are inside");
    assert!(t.contains(dv(2.0, 0.0)), "edges are inside");
    assert!(!t.contains(dv(3.0, 3.0)));
    assert!(!t.contains(dv(-0.5, 1.0)));

    let clockwise = Triangle::new(dv(0.0, 0.0), dv(0.0, 3.0), dv(4.0, 0.0));
    assert!(close(clockwise.area(), 6.0));
    assert!(clockwise.contains(dv(1.0, 1.0)));

    assert_eq!(
        t.bounding_box(),
        Rectangle::new(Double::ZERO, Double::ZERO, Double::new(4.0), Double::new(3.0))
    );

    let int = Triangle::new(iv(0, 0), iv(3, 0), iv(0, 3));
    assert_eq!(int.area(), Int32::new(4), "integer area truncates");
    assert_eq!(int.centroid(), iv(1, 1));
}

#[test]
fn angles() {
    let right = Angle::from_degrees(Double::new(450.0)).normalized();
    assert_eq!(right.degrees(), Double::new(90.0));
    assert!((right.sin() - 1.0).abs() < 1e-12);
    assert!(right.cos().abs() < 1e-12);

    let negative = Angle::from_degrees(Double::new(-90.0)).normalized();
    assert_eq!(negative.degrees(), Double::new(270.0));

    let half = Angle::<Double>::from_radians(PI);
    assert!(close(half.degrees(), 180.0));
    assert!((half.radians() - PI).abs() < 1e-12);

    let sum = Angle::from_degrees(Int32::new(350)) + Angle::from_degrees(Int32::new(20));
    assert_eq!(sum.degrees(), Int32::new(370));
    assert_eq!(sum.normalized().degrees(), Int32::new(10));
    let diff = Angle::from_degrees(Int32::new(10)) - Angle::from_degrees(Int32::new(30));
    assert_eq!(diff.normalized().degrees(), Int32::new(340));
    assert_eq!(
        Angle::from_degrees(Int32::new(-720)).normalized().degrees(),
        Int32::ZERO
    );
}

#[test]
fn circles() {
    let c = Circle::new(fv(0, 0), Fix64::from_int(2));
    assert_eq!(c.area().raw(), 12_566_371);
    assert_eq!(c.circumference().raw(), 12_566_371);
    assert!(c.contains(fv(2, 0)), "boundary is inside");
    assert!(c.contains(fv(1, 1)));
    assert!(!c.contains(Vector2::new(
        "1.5".parse().unwrap(),
        "1.5".parse().unwrap()
    )));

    let touching = Circle::new(fv(3, 0), Fix64::from_int(1));
    assert!(c.intersects(&touching));
    let apart = Circle::new(fv(4, 0), Fix64::from_int(1));
    assert!(!c.intersects(&apart));

    assert_eq!(
        c.bounding_box(),
        Rectangle::new(
            Fix64::from_int(-2),
            Fix64::from_int(-2),
            Fix64::from_int(4),
            Fix64::from_int(4)
        )
    );
    assert_eq!(Circle::new(fv(0, 0), Fix64::from_int(-1)).radius, Fix64::ZERO);

    let int = Circle::new(iv(0, 0), Int32::new(5));
    assert!(int.contains(iv(3, 4)));
    assert!(!int.contains(iv(4, 4)));
    assert_eq!(int.area(), Int32::new(78));
}

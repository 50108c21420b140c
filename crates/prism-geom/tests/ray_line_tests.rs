// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use prism_geom::{Line, Plane, Ray};
use prism_math::Vector3;

fn ground() -> Plane<f32> {
    Plane::new(Vector3::UP, 0.0)
}

#[test]
fn ray_direction_is_normalized() {
    let r = Ray::new(Vector3::new(0.0f32, 5.0, 0.0), Vector3::new(0.0, -2.0, 0.0));
    assert_eq!(r.direction(), Vector3::new(0.0, -1.0, 0.0));
    assert_eq!(r.point_at(5.0), Vector3::ZERO);
    assert_eq!(r.origin(), Vector3::new(0.0, 5.0, 0.0));
}

#[test]
fn ray_plane_hits_only_ahead() {
    let p = ground();
    let down = Ray::new(Vector3::new(0.0, 5.0, 0.0), Vector3::DOWN);
    let up = Ray::new(Vector3::new(0.0, 5.0, 0.0), Vector3::UP);
    let parallel = Ray::new(Vector3::new(0.0, 5.0, 0.0), Vector3::RIGHT);
    let on_plane = Ray::new(Vector3::new(3.0, 0.0, 0.0), Vector3::RIGHT);
    assert!(down.intersect_plane(&p));
    assert!(!up.intersect_plane(&p));
    assert!(!parallel.intersect_plane(&p));
    assert!(on_plane.intersect_plane(&p));
}

#[test]
fn ray_sphere_cases() {
    let center = Vector3::<f32>::ZERO;
    let toward = Ray::new(Vector3::new(0.0, 0.0, -10.0), Vector3::FORWARD);
    let away = Ray::new(Vector3::new(0.0, 0.0, -10.0), Vector3::BACKWARD);
    let inside = Ray::new(Vector3::ZERO, Vector3::RIGHT);
    let miss = Ray::new(Vector3::new(5.0, 0.0, -10.0), Vector3::FORWARD);
    assert!(toward.intersect_sphere(center, 1.0));
    assert!(!away.intersect_sphere(center, 1.0));
    assert!(inside.intersect_sphere(center, 1.0));
    assert!(!miss.intersect_sphere(center, 1.0));
}

#[test]
fn line_measurements() {
    let l = Line::new(Vector3::ZERO, Vector3::new(3.0f32, 4.0, 0.0));
    assert_eq!(l.length(), 5.0);
    assert!(l.direction().near_equal(Vector3::new(0.6, 0.8, 0.0)));
    assert_eq!(l.midpoint(), Vector3::new(1.5, 2.0, 0.0));
}

#[test]
fn closest_point_clamps_to_the_segment() {
    let l = Line::new(Vector3::ZERO, Vector3::new(3.0f32, 4.0, 0.0));
    assert_eq!(l.closest_point(Vector3::new(10.0, 0.0, 0.0)), l.end());
    assert_eq!(l.closest_point(Vector3::new(-5.0, 0.0, 0.0)), l.begin());
    assert!(l
        .closest_point(Vector3::new(3.0, 0.0, 0.0))
        .near_equal(Vector3::new(1.08, 1.44, 0.0)));
}

#[test]
fn degenerate_segment() {
    let p = Vector3::new(1.0f32, 2.0, 3.0);
    let l = Line::new(p, p);
    assert_eq!(l.length(), 0.0);
    assert_eq!(l.direction(), Vector3::ZERO);
    assert_eq!(l.closest_point(Vector3::new(9.0, 9.0, 9.0)), p);
}

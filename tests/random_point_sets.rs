#![allow(clippy::unwrap_used)]

use planar::math::projection::reflect_across_line;
use planar::operations::hull::{ConvexHull, FarthestPair};
use planar::{Containment, Point2D, Polygon2D};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_test_writer()
        .try_init();
}

fn random_points(rng: &mut StdRng, n: usize) -> Vec<Point2D> {
    (0..n)
        .map(|_| Point2D::new(rng.gen_range(-1e3..1e3), rng.gen_range(-1e3..1e3)))
        .collect()
}

fn max_pairwise(pts: &[Point2D]) -> f64 {
    let mut best = 0.0_f64;
    for (i, a) in pts.iter().enumerate() {
        for b in &pts[i + 1..] {
            best = best.max((a - b).norm());
        }
    }
    best
}

#[test]
fn diameter_matches_brute_force_on_seeded_sets() {
    init_tracing();
    let mut rng = StdRng::seed_from_u64(43);
    for round in 0..50 {
        let n = rng.gen_range(3..=200);
        let pts = random_points(&mut rng, n);
        for clockwise in [true, false] {
            let hull = ConvexHull::new(pts.clone()).clockwise(clockwise).execute().unwrap();
            let r = FarthestPair::new(&hull).execute().unwrap();
            let expected = max_pairwise(&pts);
            assert!(
                (r.distance - expected).abs() < 1e-9 * expected.max(1.0),
                "round {round}: calipers {} vs brute force {expected}",
                r.distance
            );
        }
    }
}

#[test]
fn hull_covers_points_on_a_circle() {
    init_tracing();
    let mut rng = StdRng::seed_from_u64(7);
    let mut pts: Vec<Point2D> = (0..64)
        .map(|_| {
            let t = rng.gen_range(0.0..std::f64::consts::TAU);
            Point2D::new(t.cos() * 10.0, t.sin() * 10.0)
        })
        .collect();
    pts.extend(random_points(&mut rng, 32).into_iter().map(|p| p / 200.0));

    let hull = ConvexHull::new(pts.clone()).clockwise(false).execute().unwrap();
    assert!(hull.is_convex());
    assert!(!hull.is_clockwise());
    for p in &pts {
        assert_ne!(hull.contains(p), Containment::Outside);
    }
}

#[test]
fn reflection_scenario() {
    // Mirror queries across the line through A and B.
    let a = Point2D::new(0.0, 0.0);
    let b = Point2D::new(4.0, 0.0);
    let r = reflect_across_line(&a, &b, &Point2D::new(2.0, 2.0)).unwrap();
    assert!((r.x - 2.0).abs() < 1e-12 && (r.y + 2.0).abs() < 1e-12);

    let a = Point2D::new(0.0, 0.0);
    let b = Point2D::new(3.0, 1.0);
    for q in [Point2D::new(2.0, 5.0), Point2D::new(-1.0, 7.0), Point2D::new(0.0, 0.0)] {
        let r = reflect_across_line(&a, &b, &q).unwrap();
        // Reflection is an involution.
        let back = reflect_across_line(&a, &b, &r).unwrap();
        assert!((back - q).norm() < 1e-9);
    }
}

#[test]
fn square_scenario() {
    let sq = Polygon2D::new(vec![
        Point2D::new(0.0, 0.0),
        Point2D::new(4.0, 0.0),
        Point2D::new(4.0, 4.0),
        Point2D::new(0.0, 4.0),
    ])
    .unwrap();
    assert!(sq.is_convex());
    assert_eq!(sq.contains(&Point2D::new(2.0, 2.0)).code(), 2);
    assert_eq!(sq.contains(&Point2D::new(0.0, 2.0)).code(), 1);
    assert_eq!(sq.contains(&Point2D::new(5.0, 5.0)).code(), 0);
}

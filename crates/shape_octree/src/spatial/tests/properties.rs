//! Randomised comparisons against the brute-force index
//!
//! Every query answered by the octree must match a linear scan over the same
//! shapes, whatever the capacity, bounds mode or removal history.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::OctreeConfig;
use crate::foundation::{Point, AABB};
use crate::shapes::{BoundingVolume, Cuboid, Cylinder, Shape, Sphere};
use crate::spatial::{LinearIndex, Octree, SpatialIndex};

const WORLD: f64 = 50.0;

fn random_point(rng: &mut StdRng, extent: f64) -> Point {
    Point::new(
        rng.gen_range(-extent..extent),
        rng.gen_range(-extent..extent),
        rng.gen_range(-extent..extent),
    )
}

fn random_volume(rng: &mut StdRng) -> BoundingVolume {
    let anchor = random_point(rng, WORLD);
    match rng.gen_range(0..3) {
        0 => {
            let size = random_point(rng, 8.0).to_vector().abs();
            Cuboid::new(anchor, anchor.offset(size)).unwrap().into()
        }
        1 => Sphere::new(anchor, rng.gen_range(0.0..6.0)).unwrap().into(),
        _ => Cylinder::new(anchor, rng.gen_range(0.0..4.0), rng.gen_range(0.0..10.0))
            .unwrap()
            .into(),
    }
}

/// Same multiset of shapes, ignoring order
fn assert_same_shapes(octree: &[&BoundingVolume], linear: &[&BoundingVolume], context: &str) {
    assert_eq!(octree.len(), linear.len(), "result count differs for {context}");
    for shape in octree {
        let expected = linear.iter().filter(|other| **other == *shape).count();
        let actual = octree.iter().filter(|other| **other == *shape).count();
        assert_eq!(actual, expected, "multiplicity of {shape:?} differs for {context}");
    }
}

fn compare_queries(octree: &Octree<BoundingVolume>, linear: &LinearIndex<BoundingVolume>, rng: &mut StdRng) {
    for _ in 0..150 {
        let point = random_point(rng, WORLD * 1.2);
        assert_same_shapes(
            &octree.find(point),
            &SpatialIndex::find(linear, point),
            &format!("find {point:?}"),
        );

        let radius = rng.gen_range(0.0..10.0);
        assert_same_shapes(
            &octree.find_nearby(point, radius),
            &SpatialIndex::find_nearby(linear, point, radius),
            &format!("find_nearby {point:?} r={radius}"),
        );

        let corner = point.offset(random_point(rng, 15.0).to_vector());
        assert_same_shapes(
            &octree.find_in_region(point, corner),
            &SpatialIndex::find_in_region(linear, point, corner),
            &format!("find_in_region {point:?}..{corner:?}"),
        );
    }
}

fn run_against_linear(mut octree: Octree<BoundingVolume>, seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut linear = LinearIndex::new();
    let mut inserted = Vec::new();

    for _ in 0..300 {
        let volume = random_volume(&mut rng);
        octree.insert(volume);
        linear.insert(volume);
        inserted.push(volume);
    }
    // A few exact duplicates
    let duplicates = inserted[..20].to_vec();
    for volume in duplicates {
        octree.insert(volume);
        linear.insert(volume);
        inserted.push(volume);
    }
    assert_eq!(octree.len(), linear.len());
    compare_queries(&octree, &linear, &mut rng);

    for volume in inserted.iter().step_by(3) {
        assert_eq!(octree.remove(volume), SpatialIndex::remove(&mut linear, volume));
    }
    assert_eq!(octree.len(), linear.len());
    for volume in &inserted {
        assert_eq!(octree.contains(volume), SpatialIndex::contains(&linear, volume));
    }
    compare_queries(&octree, &linear, &mut rng);

    let all: Vec<_> = octree.iter().collect();
    let expected: Vec<_> = linear.entries().map(|entry| entry.shape()).collect();
    assert_same_shapes(&all, &expected, "iteration");
}

#[test]
fn test_auto_bounds_default_capacity() {
    run_against_linear(Octree::new(), 1);
}

#[test]
fn test_auto_bounds_capacity_one() {
    run_against_linear(Octree::with_config(OctreeConfig::with_capacity(1)), 2);
}

#[test]
fn test_fixed_bounds_with_outliers() {
    let bounds = AABB::new(Point::splat(-20.0), Point::splat(20.0));
    run_against_linear(Octree::with_bounds_and_config(bounds, OctreeConfig::with_capacity(2)), 3);
}

#[test]
fn test_shallow_tree() {
    let config = OctreeConfig { capacity: 1, max_depth: 2, min_node_size: 0.0 };
    run_against_linear(Octree::with_config(config), 4);
}

#[test]
fn test_find_agrees_with_contains_point() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut octree = Octree::with_config(OctreeConfig::with_capacity(3));
    let shapes: Vec<BoundingVolume> = (0..120).map(|_| random_volume(&mut rng)).collect();
    for shape in &shapes {
        octree.insert(*shape);
    }

    for _ in 0..300 {
        let point = random_point(&mut rng, WORLD);
        let found = octree.find(point);
        for shape in &shapes {
            assert_eq!(
                found.contains(&shape),
                shape.contains_point(point),
                "{shape:?} at {point:?}"
            );
        }
    }
}

#[test]
fn test_count_tracks_inserts_and_removals() {
    let mut rng = StdRng::seed_from_u64(6);
    let mut octree = Octree::with_config(OctreeConfig::with_capacity(2));
    let shape = random_volume(&mut rng);

    for n in 1..=5 {
        octree.insert(shape);
        assert_eq!(octree.len(), n);
    }
    for n in (0..5).rev() {
        assert!(octree.remove(&shape));
        assert_eq!(octree.len(), n);
    }
    assert!(!octree.remove(&shape));
    assert_eq!(octree.len(), 0);
}

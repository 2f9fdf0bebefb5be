//! Octree Demo
//!
//! Scatters random cuboids, spheres and cylinders through a cube of space,
//! then runs each query family against the octree and logs the results
//! alongside the tree's shape.
//!
//! Usage: `octree_demo [config.toml|config.ron]`

use std::time::Instant;

use rand::Rng;
use shape_octree::foundation::logging;
use shape_octree::prelude::*;

// World bounds: -WORLD_HALF_SIZE to +WORLD_HALF_SIZE on each axis
const WORLD_HALF_SIZE: f64 = 50.0;

// Shape counts
const NUM_CUBOIDS: usize = 400;
const NUM_SPHERES: usize = 400;
const NUM_CYLINDERS: usize = 200;

const NUM_QUERIES: usize = 100;
const QUERY_RADIUS: f64 = 5.0;
const REGION_SIZE: f64 = 10.0;

fn random_point(rng: &mut impl Rng, half_size: f64) -> Point {
    Point::new(
        rng.gen_range(-half_size..half_size),
        rng.gen_range(-half_size..half_size),
        rng.gen_range(-half_size..half_size),
    )
}

fn scatter(tree: &mut Octree<BoundingVolume>, rng: &mut impl Rng) -> Result<(), ShapeError> {
    for _ in 0..NUM_CUBOIDS {
        let center = random_point(rng, WORLD_HALF_SIZE);
        let extents = Vec3::new(rng.gen_range(0.1..3.0), rng.gen_range(0.1..3.0), rng.gen_range(0.1..3.0));
        tree.insert(Cuboid::from_center_extents(center, extents)?.into());
    }
    for _ in 0..NUM_SPHERES {
        let center = random_point(rng, WORLD_HALF_SIZE);
        tree.insert(Sphere::new(center, rng.gen_range(0.1..3.0))?.into());
    }
    for _ in 0..NUM_CYLINDERS {
        let center = random_point(rng, WORLD_HALF_SIZE);
        tree.insert(Cylinder::new(center, rng.gen_range(0.1..2.0), rng.gen_range(0.5..6.0))?.into());
    }
    Ok(())
}

fn run_queries(tree: &Octree<BoundingVolume>, rng: &mut impl Rng) {
    let start = Instant::now();
    let point_hits: usize = (0..NUM_QUERIES)
        .map(|_| tree.find(random_point(rng, WORLD_HALF_SIZE)).len())
        .sum();
    log::info!("Point queries: {point_hits} hits in {:?}", start.elapsed());

    let start = Instant::now();
    let nearby_hits: usize = (0..NUM_QUERIES)
        .map(|_| tree.find_nearby(random_point(rng, WORLD_HALF_SIZE), QUERY_RADIUS).len())
        .sum();
    log::info!("Radius queries (r={QUERY_RADIUS}): {nearby_hits} hits in {:?}", start.elapsed());

    let start = Instant::now();
    let region_hits: usize = (0..NUM_QUERIES)
        .map(|_| {
            let min = random_point(rng, WORLD_HALF_SIZE);
            let max = min.offset(Vec3::repeat(REGION_SIZE));
            tree.find_in_region(min, max).len()
        })
        .sum();
    log::info!("Region queries ({REGION_SIZE}³): {region_hits} hits in {:?}", start.elapsed());
}

fn log_tree(label: &str, tree: &Octree<BoundingVolume>) {
    let stats = tree.stats();
    log::info!(
        "{label}: {} shapes, {} nodes, {} leaves, depth {}, {} leaf references",
        tree.len(),
        stats.nodes,
        stats.leaves,
        stats.max_depth,
        stats.references
    );
    if let Some(bounds) = tree.bounds() {
        log::info!("{label}: bounds {:?} .. {:?}", bounds.min(), bounds.max());
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading octree config from {path}");
            OctreeConfig::load_from_file(&path)?
        }
        None => OctreeConfig::default(),
    };
    log::info!("Octree config: {config:?}");

    let mut rng = rand::thread_rng();

    // Growing bounds
    let mut tree = Octree::with_config(config);
    let start = Instant::now();
    scatter(&mut tree, &mut rng)?;
    log::info!("Inserted {} shapes in {:?}", tree.len(), start.elapsed());
    log_tree("auto-bounded", &tree);
    run_queries(&tree, &mut rng);

    // Remove every shape that touches the middle of the world
    let middle: Vec<BoundingVolume> = tree
        .find_in_region(Point::splat(-REGION_SIZE), Point::splat(REGION_SIZE))
        .into_iter()
        .copied()
        .collect();
    let removed = middle.iter().filter(|shape| tree.remove(shape)).count();
    log::info!("Removed {removed} shapes around the origin");
    log_tree("after removal", &tree);

    // Fixed bounds tighter than the scatter, so some shapes stay outside the tree
    let half_size = WORLD_HALF_SIZE * 0.5;
    let bounds = AABB::new(Point::splat(-half_size), Point::splat(half_size));
    let mut fixed = Octree::with_bounds_and_config(bounds, config);
    for shape in &tree {
        fixed.insert(*shape);
    }
    log_tree("fixed-bounds", &fixed);
    run_queries(&fixed, &mut rng);

    let kinds = fixed.iter().fold([0usize; 3], |mut counts, shape| {
        match shape {
            BoundingVolume::Cuboid(_) => counts[0] += 1,
            BoundingVolume::Sphere(_) => counts[1] += 1,
            BoundingVolume::Cylinder(_) => counts[2] += 1,
        }
        counts
    });
    log::info!("Kinds: {} cuboids, {} spheres, {} cylinders", kinds[0], kinds[1], kinds[2]);

    fixed.clear();
    log::info!("Cleared fixed tree: empty = {}", fixed.is_empty());
    Ok(())
}

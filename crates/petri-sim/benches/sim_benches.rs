//! Benchmarks for the simulation core.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use petri_sim::{Arena, SimConfig, World};

fn populated(count: usize) -> World {
    let mut world = World::new(Arena::default()).with_seed(42);
    world.resize(count);
    world
}

fn bench_world_step(c: &mut Criterion) {
    let config = SimConfig::default();

    c.bench_function("step_30_bodies", |b| {
        let mut world = populated(30);

        b.iter(|| {
            world.step(&config);
            black_box(&world);
        })
    });

    c.bench_function("step_100_bodies", |b| {
        let mut world = populated(100);

        b.iter(|| {
            world.step(&config);
            black_box(&world);
        })
    });

    c.bench_function("step_200_bodies", |b| {
        let mut world = populated(200);

        b.iter(|| {
            world.step(&config);
            black_box(&world);
        })
    });
}

fn bench_neighbor_query(c: &mut Criterion) {
    c.bench_function("neighbors_k4_50_bodies", |b| {
        let world = populated(50);

        b.iter(|| {
            for i in 0..world.len() {
                black_box(world.neighbors(i, 4));
            }
        })
    });
}

criterion_group!(benches, bench_world_step, bench_neighbor_query);
criterion_main!(benches);

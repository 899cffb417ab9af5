//! Criterion benchmarks for u-timetable.
//!
//! Uses synthetic timetables (round-robin lecturers, overlapping room sets)
//! to measure fitness evaluation cost and both searches end to end.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;
use u_timetable::encoding::decode;
use u_timetable::ga::{GaConfig, GaRunner};
use u_timetable::pso::{PsoConfig, PsoRunner};
use u_timetable::random::create_rng;
use u_timetable::{Course, Lecturer, Timetable};

// ===========================================================================
// Synthetic timetable
// ===========================================================================

fn synthetic(course_count: u32) -> Timetable {
    let lecturer_count = (course_count / 3).max(1);
    let lecturers: Vec<Lecturer> = (0..lecturer_count)
        .map(|id| {
            let days = (0..5usize).filter(|d| (d + id as usize) % 2 == 0);
            let slots: Vec<(usize, usize)> =
                days.flat_map(|d| (0..8usize).map(move |p| (d, p))).collect();
            Lecturer::new(id, format!("L{id}"), slots)
        })
        .collect();
    let courses: Vec<Course> = (0..course_count)
        .map(|id| {
            let duration = 1 + (id as usize % 3);
            let first = id as usize % 8;
            Course::new(
                id,
                format!("C{id}"),
                duration,
                id % lecturer_count,
                [first, (first + 1) % 8],
            )
        })
        .collect();
    Timetable::new(courses, lecturers).expect("synthetic timetable is valid")
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_fitness(c: &mut Criterion) {
    let mut group = c.benchmark_group("fitness");

    for &n in &[10u32, 40, 120] {
        let timetable = synthetic(n);
        let mut rng = create_rng(42);
        let vector: Vec<f64> = (0..timetable.vector_length())
            .map(|_| rng.random_range(0.0..8.0))
            .collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &vector, |b, v| {
            b.iter(|| black_box(timetable.fitness(black_box(v))))
        });
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let timetable = synthetic(120);
    let vector = vec![3.7; timetable.vector_length()];
    c.bench_function("decode_120", |b| {
        b.iter(|| black_box(decode(black_box(&vector), timetable.courses())))
    });
}

fn bench_ga(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga_timetable");
    group.sample_size(10);

    for (n, pop, gen) in [(10u32, 50usize, 50usize), (40, 100, 30)] {
        let timetable = synthetic(n);
        let config = GaConfig {
            population_size: pop,
            generation_count: gen,
            seed: Some(42),
            ..GaConfig::default()
        };
        group.bench_with_input(
            BenchmarkId::new(format!("c{}_p{}_g{}", n, pop, gen), n),
            &config,
            |b, config| {
                let fitness = timetable
                    .fitness_fn(timetable.vector_length())
                    .expect("length matches");
                b.iter(|| {
                    let result =
                        GaRunner::run(&fitness, timetable.vector_length(), black_box(config));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_pso(c: &mut Criterion) {
    let mut group = c.benchmark_group("pso_timetable");
    group.sample_size(10);

    for (n, particles, iters) in [(10u32, 50usize, 50usize), (40, 100, 30)] {
        let timetable = synthetic(n);
        let config = PsoConfig::default()
            .with_particle_count(particles)
            .with_iteration_count(iters)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::new(format!("c{}_p{}_i{}", n, particles, iters), n),
            &config,
            |b, config| {
                let fitness = timetable
                    .fitness_fn(timetable.vector_length())
                    .expect("length matches");
                b.iter(|| {
                    let result =
                        PsoRunner::run(&fitness, timetable.vector_length(), black_box(config));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_fitness, bench_decode, bench_ga, bench_pso);
criterion_main!(benches);

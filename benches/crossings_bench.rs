use criterion::{black_box, criterion_group, criterion_main, Criterion};
use linarr::generate::random_free_tree;
use linarr::linarr::{num_crossings, AlgorithmC, LinearArrangement};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_pcg::Pcg64;

fn bench_crossings(c: &mut Criterion) {
    let mut rng = Pcg64::seed_from_u64(1822);
    let n = 200;
    let t = random_free_tree(n, &mut rng);
    let mut direct: Vec<usize> = (0..n).collect();
    direct.shuffle(&mut rng);
    let arr = LinearArrangement::from_direct(direct).unwrap();

    let mut group = c.benchmark_group("num_crossings");
    for (name, algorithm) in [
        ("brute_force", AlgorithmC::BruteForce),
        ("dynamic_programming", AlgorithmC::DynamicProgramming),
        ("ladder", AlgorithmC::Ladder),
        ("stack_based", AlgorithmC::StackBased),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| num_crossings(black_box(&t), black_box(Some(&arr)), algorithm))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_crossings);
criterion_main!(benches);

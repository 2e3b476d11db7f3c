use criterion::{black_box, criterion_group, criterion_main, Criterion};
use linarr::generate::random_free_tree;
use linarr::graphs::RootedTree;
use linarr::linarr::{
    min_sum_edge_lengths, min_sum_edge_lengths_planar, min_sum_edge_lengths_projective,
    AlgorithmDmin,
};
use rand::SeedableRng;
use rand_pcg::Pcg64;

fn bench_dmin(c: &mut Criterion) {
    let mut rng = Pcg64::seed_from_u64(26);
    let t = random_free_tree(500, &mut rng);
    let rt = RootedTree::from_free_tree(&t, 0).unwrap();

    let mut group = c.benchmark_group("dmin");
    group.bench_function("projective", |b| {
        b.iter(|| min_sum_edge_lengths_projective(black_box(&rt)))
    });
    group.bench_function("planar", |b| {
        b.iter(|| min_sum_edge_lengths_planar(black_box(&t)))
    });
    group.bench_function("shiloach", |b| {
        b.iter(|| min_sum_edge_lengths(black_box(&t), AlgorithmDmin::Shiloach))
    });
    group.finish();
}

criterion_group!(benches, bench_dmin);
criterion_main!(benches);

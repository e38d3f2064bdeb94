use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use dotbench::driver::{M, N, P};
use dotbench::{Matrix, dot, fill_rand, random};

fn random_pair(n: usize, p: usize, m: usize) -> (Matrix, Matrix) {
    let mut rng = random::create_rnd_in_tests();
    let mut a = Matrix::new(n, p).unwrap();
    let mut b = Matrix::new(p, m).unwrap();
    fill_rand(&mut a, &mut rng);
    fill_rand(&mut b, &mut rng);
    (a, b)
}

pub fn dot_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Naive dot");

    let (a, b) = random_pair(N, P, M);
    group.bench_function(BenchmarkId::new("default", format!("{N}x{P}x{M}")), |bench| {
        bench.iter(|| unsafe { dot(black_box(&a), black_box(&b)) }.unwrap())
    });

    for size in [32, 64, 128] {
        let (a, b) = random_pair(size, size, size);
        group.bench_with_input(BenchmarkId::new("square", size), &size, |bench, _| {
            bench.iter(|| unsafe { dot(black_box(&a), black_box(&b)) }.unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, dot_benchmark);
criterion_main!(benches);

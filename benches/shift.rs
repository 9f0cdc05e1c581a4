use big_number::BigInteger;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn quick_pow(a: &BigInteger, b: u32) -> BigInteger {
    match b {
        0 => BigInteger::from(1),
        1 => a.clone(),
        _ => {
            let half = quick_pow(a, b / 2);
            let mut res = &half * &half;
            if b % 2 == 1 {
                res *= a;
            }
            res
        }
    }
}

fn shift_vs_power(c: &mut Criterion) {
    let one = BigInteger::from(1);
    let two = BigInteger::from(2);
    let mut group = c.benchmark_group("power_of_two");
    for n in [1_000_u32, 10_000] {
        group.bench_with_input(BenchmarkId::new("repeated_shift", n), &n, |b, &n| {
            b.iter(|| black_box(&one) << n)
        });
        group.bench_with_input(BenchmarkId::new("squaring", n), &n, |b, &n| {
            b.iter(|| quick_pow(black_box(&two), n))
        });
    }
    group.finish();
}

fn long_division(c: &mut Criterion) {
    let a: BigInteger = "93845405873409587340985730489570394857043987543".parse().unwrap();
    let b = BigInteger::from(32423423);
    c.bench_function("divide_47_digits", |bench| {
        bench.iter(|| black_box(&a) / black_box(&b))
    });
}

criterion_group!(benches, shift_vs_power, long_division);
criterion_main!(benches);

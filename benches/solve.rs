#![feature(test)]
extern crate test;
use cutline::common::{solve_cubic, solve_quadratic};
use test::Bencher;

#[bench]
fn bench_cubic_three_roots(bb: &mut Bencher) {
    let (x1, x2, x3) = (1.0, 2.0, 3.0);
    let c2 = -(x1 + x2 + x3);
    let c1 = x1 * x2 + x2 * x3 + x1 * x3;
    let c0 = -x1 * x2 * x3;

    bb.iter(|| {
        solve_cubic(
            test::black_box(c0),
            test::black_box(c1),
            test::black_box(c2),
            1.0,
        )
    });
}

#[bench]
fn bench_cubic_one_root(bb: &mut Bencher) {
    bb.iter(|| solve_cubic(test::black_box(-1.0), 1.0, 0.0, test::black_box(1.0)));
}

#[bench]
fn bench_quadratic(bb: &mut Bencher) {
    bb.iter(|| solve_quadratic(test::black_box(-2.0), test::black_box(1.0), 1.0));
}

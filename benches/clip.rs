#![feature(test)]
extern crate test;
use test::Bencher;

use cutline::segment::segment;
use cutline::{CubicBez, IntRect, Path, PathSeg, Point, Rect};

fn blob() -> Path {
    let mut path = Path::new();
    path.move_to((0.0, 50.0));
    path.curve_to((0.0, -10.0), (60.0, -10.0), (100.0, 20.0));
    path.quad_to((130.0, 60.0), (90.0, 100.0));
    path.line_to((20.0, 110.0));
    path.close_path();
    path
}

#[bench]
fn bench_contains(b: &mut Bencher) {
    let path = blob();
    let pts = [
        Point::new(50.0, 50.0),
        Point::new(5.0, 5.0),
        Point::new(110.0, 90.0),
    ];
    b.iter(|| {
        for pt in pts {
            test::black_box(path.contains(test::black_box(pt)));
        }
    });
}

#[bench]
fn bench_segment_cubic(b: &mut Bencher) {
    let cubic = PathSeg::Cubic(CubicBez::new(
        (0.0, 0.0),
        (3.0, 10.0),
        (7.0, -10.0),
        (10.0, 0.0),
    ));
    let rect = Rect::new(0.0, -2.0, 10.0, 4.0);
    b.iter(|| segment(test::black_box(&cubic), test::black_box(&rect)));
}

#[bench]
fn bench_intersection(b: &mut Bencher) {
    let path = blob();
    let rect = IntRect::new(10, 10, 80, 80);
    b.iter(|| test::black_box(&path).intersection(test::black_box(&rect)));
}

// Copyright 2025 the Cutline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Common mathematical operations: tolerances and the polynomial root solvers.

use arrayvec::ArrayVec;

/// Defines a trait that chooses between libstd or libm implementations of float methods.
macro_rules! define_float_funcs {
    ($(
        fn $name:ident(self $(,$arg:ident: $arg_ty:ty)*) -> $ret:ty
        => $lname:ident/$lfname:ident;
    )+) => {
        #[cfg(not(feature = "std"))]
        pub(crate) trait FloatFuncs : Sized {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret;)+
        }

        #[cfg(not(feature = "std"))]
        impl FloatFuncs for f32 {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret {
                #[cfg(feature = "libm")]
                return libm::$lfname(self $(,$arg as _)*);

                #[cfg(not(feature = "libm"))]
                compile_error!("cutline requires either the `std` or `libm` feature")
            })+
        }

        #[cfg(not(feature = "std"))]
        impl FloatFuncs for f64 {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret {
                #[cfg(feature = "libm")]
                return libm::$lname(self $(,$arg as _)*);

                #[cfg(not(feature = "libm"))]
                compile_error!("cutline requires either the `std` or `libm` feature")
            })+
        }
    }
}

define_float_funcs! {
    fn abs(self) -> Self => fabs/fabsf;
    fn acos(self) -> Self => acos/acosf;
    fn atan2(self, other: Self) -> Self => atan2/atan2f;
    fn cbrt(self) -> Self => cbrt/cbrtf;
    fn ceil(self) -> Self => ceil/ceilf;
    fn copysign(self, sign: Self) -> Self => copysign/copysignf;
    fn cos(self) -> Self => cos/cosf;
    fn floor(self) -> Self => floor/floorf;
    fn hypot(self, other: Self) -> Self => hypot/hypotf;
    fn powf(self, n: Self) -> Self => pow/powf;
    fn sin(self) -> Self => sin/sinf;
    fn sqrt(self) -> Self => sqrt/sqrtf;
    fn tan(self) -> Self => tan/tanf;
}

/// Tolerance for bounds comparisons, tangency and root classification.
pub const DELTA: f64 = 1e-5;

/// Roots closer together than this are reported once.
pub const ROOT_DELTA: f64 = 1e-10;

/// Whether `value` lies strictly inside the `DELTA` band around zero.
#[inline]
pub fn is_zero(value: f64) -> bool {
    -DELTA < value && value < DELTA
}

/// Remove roots lying within [`ROOT_DELTA`] of a later root.
fn dedup_roots<const N: usize>(roots: &mut ArrayVec<f64, N>) {
    let mut i = 0;
    while i < roots.len() {
        let root = roots[i];
        if roots[i + 1..].iter().any(|r| (r - root).abs() < ROOT_DELTA) {
            roots.remove(i);
        } else {
            i += 1;
        }
    }
}

/// Find real roots of cubic equation.
///
/// Return values of x for which c0 + c1 x + c2 x² + c3 x³ = 0.
///
/// The equation is normalized by `c3` and reduced to its depressed form.
/// With `Q = (a² - 3b) / 9` and `R = (2a³ - 9ab + 27c) / 54`, three real
/// roots are found by the trigonometric method when `R² < Q³`; otherwise
/// Cardano's formula gives the real root, and the double root too when
/// `R² - Q³` is within [`ROOT_DELTA`] of zero.
///
/// When `c3` is zero or so small that the normalized coefficients overflow,
/// this falls back to [`solve_quadratic`]. Roots closer than [`ROOT_DELTA`]
/// are collapsed. The roots are not sorted.
///
/// # Examples
///
/// ```
/// use cutline::common::solve_cubic;
///
/// let mut roots = solve_cubic(-6.0, 11.0, -6.0, 1.0);
/// roots.sort_by(f64::total_cmp);
/// assert_eq!(roots.len(), 3);
/// assert!((roots[0] - 1.0).abs() < 1e-10);
/// assert!((roots[2] - 3.0).abs() < 1e-10);
/// ```
pub fn solve_cubic(c0: f64, c1: f64, c2: f64, c3: f64) -> ArrayVec<f64, 3> {
    let mut result = ArrayVec::new();
    let c3_recip = c3.recip();
    let a = c2 * c3_recip;
    let b = c1 * c3_recip;
    let c = c0 * c3_recip;
    if !(a.is_finite() && b.is_finite() && c.is_finite()) {
        // cubic coefficient is zero or nearly so.
        result.extend(solve_quadratic(c0, c1, c2));
        return result;
    }
    let q = (a * a - 3.0 * b) / 9.0;
    let r = (2.0 * a * a * a - 9.0 * a * b + 27.0 * c) / 54.0;
    let q3 = q * q * q;
    let r2 = r * r;
    let n = -a / 3.0;
    if r2 < q3 {
        let th = (r / q3.sqrt()).acos() / 3.0;
        let p = 2.0 * core::f64::consts::PI / 3.0;
        let m = -2.0 * q.sqrt();
        result.push(m * th.cos() + n);
        result.push(m * (th + p).cos() + n);
        result.push(m * (th - p).cos() + n);
    } else {
        let mut big_a = (r.abs() + (r2 - q3).sqrt()).cbrt();
        if r > 0.0 {
            big_a = -big_a;
        }
        if -ROOT_DELTA < big_a && big_a < ROOT_DELTA {
            result.push(n);
        } else {
            let big_b = q / big_a;
            result.push(big_a + big_b + n);
            let delta = r2 - q3;
            if -ROOT_DELTA < delta && delta < ROOT_DELTA {
                result.push(-(big_a + big_b) / 2.0 + n);
            }
        }
    }
    dedup_roots(&mut result);
    result
}

/// Find real roots of quadratic equation.
///
/// Return values of x for which c0 + c1 x + c2 x² = 0.
///
/// If `c2` is zero or small enough that the scaled coefficients overflow,
/// the equation is solved as linear: one root, or none when `c1` is zero
/// as well. A negative discriminant yields no roots. The result is sorted.
pub fn solve_quadratic(c0: f64, c1: f64, c2: f64) -> ArrayVec<f64, 2> {
    let mut result = ArrayVec::new();
    let sc0 = c0 * c2.recip();
    let sc1 = c1 * c2.recip();
    if !sc0.is_finite() || !sc1.is_finite() {
        // c2 is zero or very small, treat as linear eqn
        let root = -c0 / c1;
        if root.is_finite() {
            result.push(root);
        }
        return result;
    }
    let arg = sc1 * sc1 - 4. * sc0;
    let root1 = if !arg.is_finite() {
        // Likely, calculation of sc1 * sc1 overflowed. Find one root
        // using sc1 x + x² = 0, other root as sc0 / root1.
        -sc1
    } else {
        if arg < 0.0 {
            return result;
        } else if arg == 0.0 {
            result.push(-0.5 * sc1);
            return result;
        }
        // See https://math.stackexchange.com/questions/866331
        -0.5 * (sc1 + arg.sqrt().copysign(sc1))
    };
    let root2 = sc0 / root1;
    if root2.is_finite() {
        if root2 > root1 {
            result.push(root1);
            result.push(root2);
        } else {
            result.push(root2);
            result.push(root1);
        }
    } else {
        result.push(root1);
    }
    dedup_roots(&mut result);
    result
}

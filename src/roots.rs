//! Scalar root helpers using `tinyvec::ArrayVec`.
//!
//! Available functions:
//! - `quadratic_real_roots()`
//! - `root_newton_raphson()`
//! - `root_bisection()`
use num_traits::Float;
use thiserror::Error;
use tinyvec::ArrayVec;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RootFindingError {
    #[error("no root in the search interval")]
    NoRootsFound,
    #[error("iteration diverged")]
    FailedToConverge,
    #[error("maximum number of iterations reached")]
    MaxIterationsReached,
    #[error("derivative vanished")]
    ZeroDerivative,
}

/// Real roots of a*t^2 + b*t + c = 0, degrading to the linear case when a vanishes.
/// A double root is reported once.
pub fn quadratic_real_roots<F>(a: F, b: F, c: F, eps: F) -> ArrayVec<[F; 2]>
where
    F: Float + Default,
{
    let mut result = ArrayVec::new();
    let two = F::one() + F::one();

    if a.abs() < eps {
        if b.abs() >= eps {
            result.push(-c / b);
        }
        return result;
    }

    let delta = b * b - two * two * a * c;
    if delta.abs() < eps {
        result.push(-b / (two * a));
    } else if delta > F::zero() {
        let sqrt_delta = delta.sqrt();
        result.push((-b - sqrt_delta) / (two * a));
        result.push((-b + sqrt_delta) / (two * a));
    }
    result
}

/// Find a single (any) root of the function f(x) = 0 close to a given a start value, f and its derivative f'.
/// This function cannot predict which root is going to be found.
pub fn root_newton_raphson<F, Func, Deriv>(
    start: F,
    f: Func,
    d: Deriv,
    eps: F,
    max_iter: usize,
) -> Result<F, RootFindingError>
where
    F: Float,
    Func: Fn(F) -> F,
    Deriv: Fn(F) -> F,
{
    let mut x = start;
    for _ in 0..max_iter {
        let fx = f(x);
        if fx.abs() <= eps {
            return Ok(x);
        }
        let dx = d(x);
        if dx.abs() <= eps {
            return Err(RootFindingError::ZeroDerivative);
        }
        let x1 = x - fx / dx;
        if x1.is_nan() {
            return Err(RootFindingError::FailedToConverge);
        }
        if (x1 - x).abs() <= eps {
            return Ok(x1);
        }
        x = x1;
    }
    Err(RootFindingError::MaxIterationsReached)
}

/// Find a root of f inside [lo, hi] by interval halving.
/// f(lo) and f(hi) must differ in sign (or one of them be a root already).
pub fn root_bisection<F, Func>(
    lo: F,
    hi: F,
    f: Func,
    eps: F,
    max_iter: usize,
) -> Result<F, RootFindingError>
where
    F: Float,
    Func: Fn(F) -> F,
{
    let (mut lo, mut hi) = (lo, hi);
    let mut f_lo = f(lo);
    let f_hi = f(hi);
    if f_lo.abs() <= eps {
        return Ok(lo);
    }
    if f_hi.abs() <= eps {
        return Ok(hi);
    }
    if f_lo.signum() == f_hi.signum() {
        return Err(RootFindingError::NoRootsFound);
    }

    let two = F::one() + F::one();
    for _ in 0..max_iter {
        let mid = (lo + hi) / two;
        let f_mid = f(mid);
        if f_mid.abs() <= eps || (hi - lo) / two <= eps {
            return Ok(mid);
        }
        if f_mid.signum() == f_lo.signum() {
            lo = mid;
            f_lo = f_mid;
        } else {
            hi = mid;
        }
    }
    Err(RootFindingError::MaxIterationsReached)
}

use num_traits::{Float, FromPrimitive};

/// Bisection root solver over a bracketing interval `[x1, x2]`.
///
/// The caller must supply an interval where `f` changes sign (or touches
/// zero); the interval is not verified, and an unbracketed call returns a
/// numerically meaningless midpoint. Endpoint zeros are returned immediately.
/// Stops once the interval shrinks to `tol`, the midpoint evaluates to an
/// exact zero, or `max_iter` halvings have been performed.
pub fn bisect<T, F>(mut x1: T, mut x2: T, tol: T, max_iter: usize, f: F) -> T
where
    T: Float + FromPrimitive,
    F: Fn(T) -> T,
{
    let half = T::from_f64(0.5).unwrap();

    if f(x1) == T::zero() {
        return x1;
    }
    let mut f2 = f(x2);
    if f2 == T::zero() {
        return x2;
    }

    let mut mid = (x1 + x2) * half;
    for _ in 0..max_iter {
        mid = (x1 + x2) * half;
        let f_mid = f(mid);
        if (x2 - x1).abs() <= tol || f_mid == T::zero() {
            break;
        }
        if f2 * f_mid > T::zero() {
            // Sign change persists in [x1, mid].
            x2 = mid;
            f2 = f_mid;
        } else {
            x1 = mid;
        }
    }
    mid
}

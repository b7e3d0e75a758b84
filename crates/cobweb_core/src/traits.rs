use num_traits::{Float, FloatConst, FromPrimitive};
use std::fmt::Debug;

/// Numeric types the map rules can be evaluated over.
/// `FloatConst` supplies π for the sine rule without a fallible conversion.
pub trait Scalar: Float + FloatConst + FromPrimitive + Debug + 'static {}

impl<T: Float + FloatConst + FromPrimitive + Debug + 'static> Scalar for T {}

/// A one-dimensional discrete dynamical system x_{n+1} = f(x_n).
pub trait IteratedMap<T: Scalar> {
    /// Evaluates f(x).
    fn apply(&self, x: T) -> T;

    /// Evaluates f'(x). Used for stability and Lyapunov estimates.
    fn derivative(&self, x: T) -> T;
}

use nalgebra::RealField;

/// Floating-point type every energy formula is generic over.
///
/// Any `nalgebra::RealField` that is also `Copy` qualifies, which in practice
/// means `f32` and `f64`.
pub trait Scalar: RealField + Copy {}

impl<T: RealField + Copy> Scalar for T {}

/// Lifts an `f64` literal into the working precision.
#[inline]
pub fn cast<T: Scalar>(value: f64) -> T {
    nalgebra::convert(value)
}

/// Sums an iterator of scalars starting from zero.
#[inline]
pub fn sum<T: Scalar>(values: impl IntoIterator<Item = T>) -> T {
    values.into_iter().fold(cast(0.0), |acc, v| acc + v)
}

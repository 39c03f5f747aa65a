//! Shape-preserving redshift inputs.
//!
//! Every redshift-dependent accessor in the Cosmology API accepts a scalar,
//! an array, or an already-tagged dimensionless value, and returns output of
//! matching shape. The [`Redshift`] trait captures that contract: the input
//! knows how to evaluate a pointwise engine function over itself and how to
//! build a shape-matched zero result for fallback paths.

use uom::{ConstZero, si::f64::Ratio, si::ratio::ratio};

use super::coerce;

/// A redshift argument accepted by the Cosmology API.
///
/// Implementations exist for `f64`, `Ratio`, slices, `Vec`s, and fixed-size
/// arrays of either. Scalar inputs produce a scalar [`Ratio`]; array inputs
/// produce a `Vec<Ratio>` of the same length.
pub trait Redshift {
    /// The shape-matched dimensionless output produced from this input.
    type Output;

    /// Evaluates `f` pointwise over the input, tagging each result as a
    /// dimensionless ratio.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `f`, abandoning the remainder of
    /// an array input.
    fn try_map<E, F>(&self, f: F) -> Result<Self::Output, E>
    where
        F: FnMut(f64) -> Result<f64, E>;

    /// Returns a zero-valued output shape-matched to this input.
    fn zeros(&self) -> Self::Output;
}

impl Redshift for f64 {
    type Output = Ratio;

    fn try_map<E, F>(&self, mut f: F) -> Result<Self::Output, E>
    where
        F: FnMut(f64) -> Result<f64, E>,
    {
        f(*self).map(coerce::dimensionless)
    }

    fn zeros(&self) -> Self::Output {
        Ratio::ZERO
    }
}

impl Redshift for Ratio {
    type Output = Ratio;

    fn try_map<E, F>(&self, mut f: F) -> Result<Self::Output, E>
    where
        F: FnMut(f64) -> Result<f64, E>,
    {
        f(self.get::<ratio>()).map(coerce::dimensionless)
    }

    fn zeros(&self) -> Self::Output {
        Ratio::ZERO
    }
}

impl Redshift for [f64] {
    type Output = Vec<Ratio>;

    fn try_map<E, F>(&self, mut f: F) -> Result<Self::Output, E>
    where
        F: FnMut(f64) -> Result<f64, E>,
    {
        self.iter()
            .map(|&z| f(z).map(coerce::dimensionless))
            .collect()
    }

    fn zeros(&self) -> Self::Output {
        vec![Ratio::ZERO; self.len()]
    }
}

impl Redshift for [Ratio] {
    type Output = Vec<Ratio>;

    fn try_map<E, F>(&self, mut f: F) -> Result<Self::Output, E>
    where
        F: FnMut(f64) -> Result<f64, E>,
    {
        self.iter()
            .map(|z| f(z.get::<ratio>()).map(coerce::dimensionless))
            .collect()
    }

    fn zeros(&self) -> Self::Output {
        vec![Ratio::ZERO; self.len()]
    }
}

impl Redshift for Vec<f64> {
    type Output = Vec<Ratio>;

    fn try_map<E, F>(&self, f: F) -> Result<Self::Output, E>
    where
        F: FnMut(f64) -> Result<f64, E>,
    {
        self.as_slice().try_map(f)
    }

    fn zeros(&self) -> Self::Output {
        self.as_slice().zeros()
    }
}

impl Redshift for Vec<Ratio> {
    type Output = Vec<Ratio>;

    fn try_map<E, F>(&self, f: F) -> Result<Self::Output, E>
    where
        F: FnMut(f64) -> Result<f64, E>,
    {
        self.as_slice().try_map(f)
    }

    fn zeros(&self) -> Self::Output {
        self.as_slice().zeros()
    }
}

impl<const N: usize> Redshift for [f64; N] {
    type Output = Vec<Ratio>;

    fn try_map<E, F>(&self, f: F) -> Result<Self::Output, E>
    where
        F: FnMut(f64) -> Result<f64, E>,
    {
        self.as_slice().try_map(f)
    }

    fn zeros(&self) -> Self::Output {
        self.as_slice().zeros()
    }
}

impl<const N: usize> Redshift for [Ratio; N] {
    type Output = Vec<Ratio>;

    fn try_map<E, F>(&self, f: F) -> Result<Self::Output, E>
    where
        F: FnMut(f64) -> Result<f64, E>,
    {
        self.as_slice().try_map(f)
    }

    fn zeros(&self) -> Self::Output {
        self.as_slice().zeros()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    use approx::assert_relative_eq;

    fn double(z: f64) -> Result<f64, Infallible> {
        Ok(2.0 * z)
    }

    #[test]
    fn scalar_input_produces_scalar_output() {
        let out = 1.5.try_map(double).unwrap();
        assert_relative_eq!(out.get::<ratio>(), 3.0);
    }

    #[test]
    fn tagged_scalar_input_is_accepted() {
        let z = coerce::dimensionless(2.0);
        let out = z.try_map(double).unwrap();
        assert_relative_eq!(out.get::<ratio>(), 4.0);
    }

    #[test]
    fn array_input_preserves_shape_and_order() {
        let z = [0.0, 1.0, 2.0];
        let out = z.try_map(double).unwrap();
        assert_eq!(out.len(), 3);
        assert_relative_eq!(out[2].get::<ratio>(), 4.0);
    }

    #[test]
    fn vec_of_tagged_values_is_accepted() {
        let z = vec![coerce::dimensionless(0.5), coerce::dimensionless(1.0)];
        let out = z.try_map(double).unwrap();
        assert_eq!(out.len(), 2);
        assert_relative_eq!(out[0].get::<ratio>(), 1.0);
    }

    #[test]
    fn zeros_match_input_shape() {
        assert_eq!(0.7.zeros(), Ratio::ZERO);
        assert_eq!(vec![1.0, 2.0, 3.0, 4.0].zeros().len(), 4);
        assert!([0.0; 0].zeros().is_empty());
    }

    #[test]
    fn first_error_aborts_an_array_map() {
        let z = [1.0, -1.0, 2.0];
        let result = z.try_map(|z| if z < 0.0 { Err("negative") } else { Ok(z) });
        assert_eq!(result, Err("negative"));
    }
}

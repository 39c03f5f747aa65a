//! Unit coercion for raw engine output.
//!
//! Engines speak bare numbers in their own conventions. The Cosmology API
//! never does: density parameters are dimensionless [`Ratio`] quantities and
//! neutrino masses are [`Energy`] quantities. These functions are the single
//! place where raw engine values pick up their unit tags.

use uom::si::{
    energy::electronvolt,
    f64::{Energy, Ratio},
    ratio::ratio,
};

/// Tags a raw engine value as a dimensionless ratio.
#[must_use]
pub fn dimensionless(raw: f64) -> Ratio {
    Ratio::new::<ratio>(raw)
}

/// Tags each raw engine value in a sequence as a dimensionless ratio.
#[must_use]
pub fn dimensionless_all(raw: &[f64]) -> Vec<Ratio> {
    raw.iter().copied().map(dimensionless).collect()
}

/// Tags a raw per-species neutrino mass, in electronvolts, as an energy.
#[must_use]
pub fn energy(raw_ev: f64) -> Energy {
    Energy::new::<electronvolt>(raw_ev)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn dimensionless_preserves_value() {
        let omega = dimensionless(0.3);
        assert_relative_eq!(omega.get::<ratio>(), 0.3);
    }

    #[test]
    fn dimensionless_all_preserves_shape_and_order() {
        let tagged = dimensionless_all(&[0.0, 0.5, 1.0]);
        assert_eq!(tagged.len(), 3);
        assert_relative_eq!(tagged[1].get::<ratio>(), 0.5);
    }

    #[test]
    fn energy_reads_back_in_electronvolts() {
        let mass = energy(0.06);
        assert_relative_eq!(mass.get::<electronvolt>(), 0.06);
    }
}

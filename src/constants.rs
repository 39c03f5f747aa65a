//! The constants sub-namespace.
//!
//! The namespace discovery contract requires every adapter to expose a
//! `constants` sub-namespace. This one carries the two constants the API
//! asks for: the Newtonian gravitational constant and the speed of light,
//! both as tagged [`uom`] quantities.

use uom::si::{
    f64::{Mass, Time, Velocity, Volume},
    mass::kilogram,
    time::second,
    velocity::meter_per_second,
    volume::cubic_meter,
};

use crate::support::units::GravitationalConstant;

/// CODATA 2018 Newtonian constant of gravitation, m³/kg·s².
const G_SI: f64 = 6.674_30e-11;

/// Exact speed of light in vacuum, m/s.
const C_SI: f64 = 299_792_458.0;

/// Handle to the constants sub-namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Constants;

impl Constants {
    /// Returns the Newtonian gravitational constant `G`.
    #[must_use]
    pub fn gravitational_constant(&self) -> GravitationalConstant {
        Volume::new::<cubic_meter>(G_SI)
            / (Mass::new::<kilogram>(1.0) * Time::new::<second>(1.0) * Time::new::<second>(1.0))
    }

    /// Returns the speed of light in vacuum `c`.
    #[must_use]
    pub fn speed_of_light(&self) -> Velocity {
        Velocity::new::<meter_per_second>(C_SI)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::velocity::kilometer_per_second;

    #[test]
    fn speed_of_light_converts_between_units() {
        let c = Constants.speed_of_light();
        assert_relative_eq!(c.get::<kilometer_per_second>(), 299_792.458);
    }

    #[test]
    fn gravitational_constant_has_expected_si_value() {
        let g = Constants.gravitational_constant();
        assert_relative_eq!(g.value, 6.674_30e-11);
    }
}

use uom::si::f64::{Energy, Ratio};

use crate::engine::EngineError;
use crate::support::Redshift;

use super::Cosmology;

/// Capability for the total density parameter.
pub trait HasTotalComponent: Cosmology {
    /// Returns the total density parameter at the present day.
    fn omega_tot0(&self) -> Ratio;

    /// Returns the total density parameter at redshift `z`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError`] if the underlying engine cannot evaluate at `z`.
    fn omega_tot<Z: Redshift + ?Sized>(&self, z: &Z) -> Result<Z::Output, EngineError>;
}

/// Capability for the curvature density parameter.
///
/// Always defined; a flat model reports zero rather than omitting the
/// component.
pub trait HasCurvatureComponent: Cosmology {
    /// Returns the curvature density parameter at the present day.
    fn omega_k0(&self) -> Ratio;

    /// Returns the curvature density parameter at redshift `z`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError`] if the underlying engine cannot evaluate at `z`.
    fn omega_k<Z: Redshift + ?Sized>(&self, z: &Z) -> Result<Z::Output, EngineError>;
}

/// Capability for the matter density parameter (baryons plus dark matter).
pub trait HasMatterComponent: Cosmology {
    /// Returns the matter density parameter at the present day.
    fn omega_m0(&self) -> Ratio;

    /// Returns the matter density parameter at redshift `z`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError`] if the underlying engine cannot evaluate at `z`.
    fn omega_m<Z: Redshift + ?Sized>(&self, z: &Z) -> Result<Z::Output, EngineError>;
}

/// Capability for the baryon density parameter.
///
/// When the underlying engine does not model baryons separately, both
/// accessors return zero: no baryon information means baryons contribute
/// nothing. The zero is shape-matched to the input redshift, so array calls
/// receive a zero array of the same length.
pub trait HasBaryonComponent: Cosmology {
    /// Returns the baryon density parameter at the present day.
    fn omega_b0(&self) -> Ratio;

    /// Returns the baryon density parameter at redshift `z`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError`] if the underlying engine cannot evaluate at
    /// `z`. An unmodeled baryon component is not an error here; it yields
    /// the zero fallback.
    fn omega_b<Z: Redshift + ?Sized>(&self, z: &Z) -> Result<Z::Output, EngineError>;
}

/// Capability for the neutrino density parameter and species data.
pub trait HasNeutrinoComponent: Cosmology {
    /// Returns the neutrino density parameter at the present day.
    fn omega_nu0(&self) -> Ratio;

    /// Returns the effective number of relativistic neutrino species.
    fn neff(&self) -> Ratio;

    /// Returns the per-species neutrino rest masses, tagged in energy units.
    ///
    /// The sequence holds one entry per species modeled by the underlying
    /// engine, in the engine's species order.
    fn m_nu(&self) -> Vec<Energy>;

    /// Returns the neutrino density parameter at redshift `z`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError`] if the underlying engine cannot evaluate at `z`.
    fn omega_nu<Z: Redshift + ?Sized>(&self, z: &Z) -> Result<Z::Output, EngineError>;
}

/// Capability for the dark-energy density parameter.
pub trait HasDarkEnergyComponent: Cosmology {
    /// Returns the dark-energy density parameter at the present day.
    fn omega_de0(&self) -> Ratio;

    /// Returns the dark-energy density parameter at redshift `z`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError`] if the underlying engine cannot evaluate at `z`.
    fn omega_de<Z: Redshift + ?Sized>(&self, z: &Z) -> Result<Z::Output, EngineError>;
}

/// Capability for the dark-matter density parameter.
///
/// When the underlying engine does not split dark matter from total matter,
/// both accessors return the matter component's value: with no split, all
/// matter is attributed to the dark-matter channel. This deliberately
/// mirrors the conflation in existing adapters rather than inferring a
/// different policy.
pub trait HasDarkMatterComponent: Cosmology {
    /// Returns the dark-matter density parameter at the present day.
    fn omega_dm0(&self) -> Ratio;

    /// Returns the dark-matter density parameter at redshift `z`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError`] if the underlying engine cannot evaluate at
    /// `z`. An unsplit dark-matter component is not an error here; it yields
    /// the total-matter fallback.
    fn omega_dm<Z: Redshift + ?Sized>(&self, z: &Z) -> Result<Z::Output, EngineError>;
}

/// Capability for the photon density parameter.
pub trait HasPhotonComponent: Cosmology {
    /// Returns the photon density parameter at the present day.
    fn omega_gamma0(&self) -> Ratio;

    /// Returns the photon density parameter at redshift `z`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError`] if the underlying engine cannot evaluate at `z`.
    fn omega_gamma<Z: Redshift + ?Sized>(&self, z: &Z) -> Result<Z::Output, EngineError>;
}

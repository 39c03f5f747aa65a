//! The underlying cosmology engine boundary.
//!
//! A wrapper never computes cosmology; it delegates to an engine that does.
//! [`FlrwEngine`] is the native, untagged surface this crate expects from an
//! FLRW-family engine: bare `f64` values in the engine's own convention,
//! explicit `Option` sentinels for the components an engine may not track
//! separately, and [`EngineError`] for everything that can fail.
//!
//! This layer treats the engine as read-only. Engines that are safe for
//! concurrent reads make every wrapper over them safe to share.

mod error;

pub use error::EngineError;

/// Native surface of an FLRW cosmology engine.
///
/// Present-day density parameters are instantaneous reads and cannot fail.
/// Redshift-dependent evaluations may fail; an engine reports an
/// out-of-domain redshift or an internal failure through [`EngineError`],
/// and those errors pass through the wrapper layer unchanged.
///
/// Baryon and dark-matter densities are the two components a standard FLRW
/// engine may legitimately not track separately from total matter. Their
/// accessors default to the "not modeled" sentinels, so an engine without
/// the split implements nothing for them.
pub trait FlrwEngine {
    /// The identifying name of this cosmology instance, if it has one.
    fn name(&self) -> Option<&str>;

    /// Total density parameter at the present day.
    fn otot0(&self) -> f64;

    /// Curvature density parameter at the present day.
    fn ok0(&self) -> f64;

    /// Matter density parameter at the present day.
    fn om0(&self) -> f64;

    /// Baryon density parameter at the present day, if baryons are modeled
    /// separately.
    fn ob0(&self) -> Option<f64> {
        None
    }

    /// Dark-matter density parameter at the present day, if dark matter is
    /// modeled separately from total matter.
    fn odm0(&self) -> Option<f64> {
        None
    }

    /// Dark-energy density parameter at the present day.
    fn ode0(&self) -> f64;

    /// Photon density parameter at the present day.
    fn ogamma0(&self) -> f64;

    /// Neutrino density parameter at the present day.
    fn onu0(&self) -> f64;

    /// Effective number of relativistic neutrino species.
    fn neff(&self) -> f64;

    /// Per-species neutrino rest masses, in electronvolts.
    ///
    /// One entry per species the engine models, in the engine's species
    /// order.
    fn m_nu(&self) -> Vec<f64>;

    /// Total density parameter at redshift `z`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError`] if the engine cannot evaluate at `z`.
    fn otot(&self, z: f64) -> Result<f64, EngineError>;

    /// Curvature density parameter at redshift `z`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError`] if the engine cannot evaluate at `z`.
    fn ok(&self, z: f64) -> Result<f64, EngineError>;

    /// Matter density parameter at redshift `z`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError`] if the engine cannot evaluate at `z`.
    fn om(&self, z: f64) -> Result<f64, EngineError>;

    /// Baryon density parameter at redshift `z`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NotModeled`] when the engine does not track
    /// baryons separately, or another [`EngineError`] if evaluation fails.
    fn ob(&self, z: f64) -> Result<f64, EngineError> {
        let _ = z;
        Err(EngineError::NotModeled {
            component: "baryon".to_owned(),
        })
    }

    /// Dark-matter density parameter at redshift `z`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NotModeled`] when the engine does not split
    /// dark matter from total matter, or another [`EngineError`] if
    /// evaluation fails.
    fn odm(&self, z: f64) -> Result<f64, EngineError> {
        let _ = z;
        Err(EngineError::NotModeled {
            component: "dark matter".to_owned(),
        })
    }

    /// Dark-energy density parameter at redshift `z`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError`] if the engine cannot evaluate at `z`.
    fn ode(&self, z: f64) -> Result<f64, EngineError>;

    /// Photon density parameter at redshift `z`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError`] if the engine cannot evaluate at `z`.
    fn ogamma(&self, z: f64) -> Result<f64, EngineError>;

    /// Neutrino density parameter at redshift `z`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError`] if the engine cannot evaluate at `z`.
    fn onu(&self, z: f64) -> Result<f64, EngineError>;
}

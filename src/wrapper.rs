//! Cosmology API wrappers for concrete engine families.
//!
//! [`FlrwCosmology`] adapts any [`FlrwEngine`] to the full Cosmology API:
//! it borrows the engine, tags every raw value it returns, and applies the
//! documented fallback policy for the baryon and dark-matter components.
//!
//! # Fallback policy
//!
//! An FLRW engine may not track baryons or the dark-matter split
//! independently of total matter. The wrapper recovers from exactly that
//! condition, locally, without surfacing it:
//!
//! - Baryons unmodeled: zero, shape-matched to the input redshift.
//! - Dark matter unsplit: the total-matter value.
//!
//! Every other engine error passes through unchanged.
//!
//! # Example
//!
//! ```no_run
//! use cosmology_compat::api::HasMatterComponent;
//! use cosmology_compat::engine::FlrwEngine;
//! use cosmology_compat::wrapper::FlrwCosmology;
//!
//! fn matter_today<E: FlrwEngine>(engine: &E) -> uom::si::f64::Ratio {
//!     let cosmo = FlrwCosmology::new(engine);
//!     cosmo.omega_m0()
//! }
//! ```

use uom::si::f64::{Energy, Ratio};

use crate::api::{
    Cosmology, HasBaryonComponent, HasCurvatureComponent, HasDarkEnergyComponent,
    HasDarkMatterComponent, HasMatterComponent, HasNeutrinoComponent, HasPhotonComponent,
    HasTotalComponent,
};
use crate::engine::{EngineError, FlrwEngine};
use crate::support::{Redshift, coerce};

/// The Cosmology API wrapper for an FLRW engine.
///
/// A `FlrwCosmology` holds exactly one borrowed engine reference and is
/// never mutated after construction. It is `Copy`, so it can be passed
/// around and shared between threads freely whenever the engine supports
/// concurrent reads.
#[derive(Debug, PartialEq, Eq)]
pub struct FlrwCosmology<'a, E> {
    cosmo: &'a E,
}

// Manual impls: deriving would demand `E: Copy` for a borrowed engine.
impl<E> Clone for FlrwCosmology<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for FlrwCosmology<'_, E> {}

impl<'a, E: FlrwEngine> FlrwCosmology<'a, E> {
    /// Wraps an FLRW engine instance.
    #[must_use]
    pub const fn new(cosmo: &'a E) -> Self {
        Self { cosmo }
    }

    /// Returns the wrapped engine.
    #[must_use]
    pub const fn inner(&self) -> &'a E {
        self.cosmo
    }
}

impl<E: FlrwEngine> Cosmology for FlrwCosmology<'_, E> {
    fn name(&self) -> Option<&str> {
        self.cosmo.name()
    }
}

impl<E: FlrwEngine> HasTotalComponent for FlrwCosmology<'_, E> {
    fn omega_tot0(&self) -> Ratio {
        coerce::dimensionless(self.cosmo.otot0())
    }

    fn omega_tot<Z: Redshift + ?Sized>(&self, z: &Z) -> Result<Z::Output, EngineError> {
        z.try_map(|z| self.cosmo.otot(z))
    }
}

impl<E: FlrwEngine> HasCurvatureComponent for FlrwCosmology<'_, E> {
    fn omega_k0(&self) -> Ratio {
        coerce::dimensionless(self.cosmo.ok0())
    }

    fn omega_k<Z: Redshift + ?Sized>(&self, z: &Z) -> Result<Z::Output, EngineError> {
        z.try_map(|z| self.cosmo.ok(z))
    }
}

impl<E: FlrwEngine> HasMatterComponent for FlrwCosmology<'_, E> {
    fn omega_m0(&self) -> Ratio {
        coerce::dimensionless(self.cosmo.om0())
    }

    fn omega_m<Z: Redshift + ?Sized>(&self, z: &Z) -> Result<Z::Output, EngineError> {
        z.try_map(|z| self.cosmo.om(z))
    }
}

impl<E: FlrwEngine> HasBaryonComponent for FlrwCosmology<'_, E> {
    /// No baryon information means baryons contribute nothing.
    fn omega_b0(&self) -> Ratio {
        coerce::dimensionless(self.cosmo.ob0().unwrap_or(0.0))
    }

    fn omega_b<Z: Redshift + ?Sized>(&self, z: &Z) -> Result<Z::Output, EngineError> {
        match z.try_map(|z| self.cosmo.ob(z)) {
            Err(EngineError::NotModeled { .. }) => Ok(z.zeros()),
            result => result,
        }
    }
}

impl<E: FlrwEngine> HasNeutrinoComponent for FlrwCosmology<'_, E> {
    fn omega_nu0(&self) -> Ratio {
        coerce::dimensionless(self.cosmo.onu0())
    }

    fn neff(&self) -> Ratio {
        coerce::dimensionless(self.cosmo.neff())
    }

    fn m_nu(&self) -> Vec<Energy> {
        self.cosmo.m_nu().into_iter().map(coerce::energy).collect()
    }

    fn omega_nu<Z: Redshift + ?Sized>(&self, z: &Z) -> Result<Z::Output, EngineError> {
        z.try_map(|z| self.cosmo.onu(z))
    }
}

impl<E: FlrwEngine> HasDarkEnergyComponent for FlrwCosmology<'_, E> {
    fn omega_de0(&self) -> Ratio {
        coerce::dimensionless(self.cosmo.ode0())
    }

    fn omega_de<Z: Redshift + ?Sized>(&self, z: &Z) -> Result<Z::Output, EngineError> {
        z.try_map(|z| self.cosmo.ode(z))
    }
}

impl<E: FlrwEngine> HasDarkMatterComponent for FlrwCosmology<'_, E> {
    /// With no split, all matter is attributed to the dark-matter channel.
    fn omega_dm0(&self) -> Ratio {
        coerce::dimensionless(self.cosmo.odm0().unwrap_or_else(|| self.cosmo.om0()))
    }

    fn omega_dm<Z: Redshift + ?Sized>(&self, z: &Z) -> Result<Z::Output, EngineError> {
        match z.try_map(|z| self.cosmo.odm(z)) {
            Err(EngineError::NotModeled { .. }) => z.try_map(|z| self.cosmo.om(z)),
            result => result,
        }
    }
}

impl<E: FlrwEngine> HasPhotonComponent for FlrwCosmology<'_, E> {
    fn omega_gamma0(&self) -> Ratio {
        coerce::dimensionless(self.cosmo.ogamma0())
    }

    fn omega_gamma<Z: Redshift + ?Sized>(&self, z: &Z) -> Result<Z::Output, EngineError> {
        z.try_map(|z| self.cosmo.ogamma(z))
    }
}

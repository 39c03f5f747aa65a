//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all tagged quantities (density-parameter
//! ratios, neutrino-mass energies, constants). This module declares the
//! quantities [`uom`] does not name.

use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N1, N2, P3, Z0},
};

/// Newtonian gravitational constant quantity, m³/kg·s² in SI.
pub type GravitationalConstant = Quantity<ISQ<P3, N1, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

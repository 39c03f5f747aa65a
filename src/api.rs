//! The engine-agnostic Cosmology API surface.
//!
//! [`Cosmology`] is the base trait every wrapper implements: identity and
//! namespace discovery. The capability traits in [`components`] each
//! standardize access to one density component; a concrete wrapper type
//! implements the capabilities its engine family supports, decided at the
//! type level rather than probed at runtime.

mod base;
mod components;
mod namespace;

pub use base::Cosmology;
pub use components::*;
pub use namespace::{Namespace, UnsupportedVersionError};

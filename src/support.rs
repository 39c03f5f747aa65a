//! Supporting utilities used by the wrappers.
//!
//! - [`coerce`]: Converts raw engine output into unit-tagged quantities.
//! - [`redshift`]: The [`Redshift`] input trait, which preserves the shape
//!   of scalar and array redshift arguments through every accessor.
//! - [`units`]: Extensions to [`uom`] for quantities it does not name.

pub mod coerce;
pub mod redshift;
pub mod units;

pub use redshift::Redshift;

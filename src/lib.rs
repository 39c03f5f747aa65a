//! # Cosmology Compat
//!
//! Engine-agnostic wrappers exposing FLRW cosmology engines through the
//! Cosmology API.
//!
//! Downstream code often needs density parameters (`Ω_m`, `Ω_b`, `Ω_Λ`, ...)
//! without caring which cosmology engine computes them. This crate is the
//! translation layer: it borrows an existing engine instance, normalizes the
//! engine's raw output into unit-tagged quantities, and applies a uniform
//! fallback policy for the components an engine may not model independently.
//!
//! ## Crate layout
//!
//! - [`api`]: The Cosmology API surface — the base [`api::Cosmology`] trait
//!   and one capability trait per density component.
//! - [`engine`]: The boundary to the underlying engine, expressed as the
//!   [`engine::FlrwEngine`] trait and its error type.
//! - [`wrapper`]: Concrete wrappers composing the capability traits for an
//!   engine family.
//! - [`constants`]: The constants sub-namespace required by the namespace
//!   discovery contract.
//! - [`support`]: Supporting utilities (unit coercion, redshift inputs).
//!
//! The actual cosmological model mathematics — Friedmann integration,
//! distance measures, and so on — belong to the wrapped engine and are out
//! of scope here. This layer only translates.

pub mod api;
pub mod constants;
pub mod engine;
pub mod support;
pub mod wrapper;

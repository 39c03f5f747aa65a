use thiserror::Error;

use crate::constants::Constants;

/// Names of the wrapper types this adapter provides.
const WRAPPERS: &[&str] = &["FlrwCosmology"];

/// An error returned when a caller requests an unsupported API version.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported cosmology API version: {requested}")]
pub struct UnsupportedVersionError {
    /// The version string the caller asked for, in `"YYYY.MM"` form.
    pub requested: String,
}

/// A handle to the adapter's top-level Cosmology API entry points.
///
/// Obtained from [`Cosmology::cosmology_namespace`](super::Cosmology::cosmology_namespace),
/// a `Namespace` lets generic callers discover what this adapter offers —
/// its constants and its wrapper types — without naming the crate directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Namespace {
    _private: (),
}

impl Namespace {
    /// The namespace for the current API revision.
    #[must_use]
    pub const fn current() -> Self {
        Self { _private: () }
    }

    /// The constants sub-namespace.
    #[must_use]
    pub const fn constants(&self) -> Constants {
        Constants
    }

    /// The names of the wrapper types this adapter provides.
    #[must_use]
    pub const fn wrappers(&self) -> &'static [&'static str] {
        WRAPPERS
    }
}

/// Resolves the namespace for a requested API version.
///
/// `None` means "the current revision". Every explicit version is rejected
/// until a versioned protocol exists.
pub(crate) fn for_version(
    api_version: Option<&str>,
) -> Result<Namespace, UnsupportedVersionError> {
    match api_version {
        None => Ok(Namespace::current()),
        Some(requested) => Err(UnsupportedVersionError {
            requested: requested.to_owned(),
        }),
    }
}

use super::namespace::{self, Namespace, UnsupportedVersionError};

/// Base trait implemented by every Cosmology API wrapper.
pub trait Cosmology {
    /// The name of the wrapped cosmology instance.
    ///
    /// `None` is the explicit "no name" marker for engines whose instance
    /// was never named.
    fn name(&self) -> Option<&str>;

    /// Returns a handle to the Cosmology API namespace for this wrapper.
    ///
    /// `api_version` selects the API revision in `"YYYY.MM"` form. `None`
    /// selects the current revision. Only `None` is currently supported;
    /// explicit versions are a placeholder for future protocol versioning
    /// and must fail rather than silently return the wrong namespace.
    ///
    /// # Errors
    ///
    /// Returns [`UnsupportedVersionError`] for any explicit version request.
    fn cosmology_namespace(
        &self,
        api_version: Option<&str>,
    ) -> Result<Namespace, UnsupportedVersionError> {
        namespace::for_version(api_version)
    }
}

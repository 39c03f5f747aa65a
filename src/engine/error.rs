use thiserror::Error;

/// Errors reported by an underlying cosmology engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The queried density component is not modeled independently.
    ///
    /// This is the one recoverable variant: the baryon and dark-matter
    /// wrappers translate it into their documented fallback values instead
    /// of surfacing it.
    #[error("component not modeled: {component}")]
    NotModeled { component: String },

    /// The requested redshift is outside the engine's valid domain.
    #[error("redshift out of domain: {context}")]
    OutOfDomain { context: String },

    /// The engine failed internally while evaluating the quantity.
    ///
    /// For example, a failure to converge in the engine's integrator.
    #[error("engine calculation error: {context}")]
    Calculation { context: String },
}

//! Static step registration data.

/// Static description of a step type, as registered with the host engine
///
/// Everything here is fixed at compile time for a given step
/// implementation; nothing depends on configuration or row data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepDescriptor {
    /// Stable identifier used in persisted transformation definitions
    pub id: &'static str,

    /// Human-readable display name
    pub name: &'static str,

    /// One-line description shown in tooling
    pub description: &'static str,

    /// Palette category the step is listed under
    pub category: &'static str,

    /// Whether rows failing in this step may be redirected to an error
    /// output instead of aborting the transformation
    pub supports_error_handling: bool,
}

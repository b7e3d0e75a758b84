use thiserror::Error;

/// Errors raised by the kernel evaluators.
///
/// Only input-contract violations are errors. Overflow, infinities and NaN
/// produced while iterating are returned as ordinary values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KernelError {
    #[error("Invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

impl KernelError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        KernelError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

pub type KernelResult<T> = Result<T, KernelError>;

pub(crate) fn require_steps(steps: usize) -> KernelResult<()> {
    if steps == 0 {
        return Err(KernelError::invalid("steps", "must be at least 1"));
    }
    Ok(())
}

pub(crate) fn require_probability(p: f64) -> KernelResult<()> {
    if !(0.0..=1.0).contains(&p) {
        return Err(KernelError::invalid(
            "p",
            format!("probability must lie in [0, 1], got {p}"),
        ));
    }
    Ok(())
}

use crate::error::CoreError;
use crate::text::{str_equal_case, CaseSensitivity};

/// Environment variable selecting the default text case sensitivity.
pub const CASE_SENSITIVITY_VAR: &str = "EQUATE_CASE_SENSITIVITY";

/// Comparison defaults for callers that compare user-entered text.
///
/// The library itself never reads this; it is for applications that want a
/// process-wide default instead of passing a flag at every call site.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompareConfig {
    pub case_sensitivity: CaseSensitivity,
}

impl CompareConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default     |
    /// |---------------------------|-------------|
    /// | `EQUATE_CASE_SENSITIVITY` | `sensitive` |
    pub fn from_env() -> Result<Self, CoreError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CoreError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let case_sensitivity = match lookup(CASE_SENSITIVITY_VAR) {
            Some(raw) => {
                raw.parse::<CaseSensitivity>()
                    .map_err(|err| CoreError::Config {
                        var: CASE_SENSITIVITY_VAR,
                        reason: err.to_string(),
                    })?
            }
            None => CaseSensitivity::default(),
        };

        tracing::debug!(%case_sensitivity, "Loaded comparison configuration");

        Ok(Self { case_sensitivity })
    }

    /// [`str_equal_case`] using the configured case sensitivity.
    pub fn text_equal(&self, a: Option<&str>, b: Option<&str>) -> bool {
        str_equal_case(a, b, self.case_sensitivity.is_sensitive())
    }
}

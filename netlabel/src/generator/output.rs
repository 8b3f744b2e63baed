//! Generator output type.

use serde::Serialize;

/// Output of one generator run.
///
/// Recomputed from scratch on every run; identical inputs always produce
/// identical outputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorOutput {
    /// The single vendor command, or the bare descriptor when no vendor is selected.
    pub final_output: String,

    /// The command wrapped in its vendor session, or the no-vendor message.
    pub context_output: String,
}

impl GeneratorOutput {
    pub fn new(final_output: impl Into<String>, context_output: impl Into<String>) -> Self {
        Self {
            final_output: final_output.into(),
            context_output: context_output.into(),
        }
    }
}

impl std::fmt::Display for GeneratorOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.final_output)
    }
}

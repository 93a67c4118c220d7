/// Configuration for the predictive parser
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
  /// Maximum automaton steps per parse. This is a guard against a runaway
  /// derivation, not a termination proof.
  pub step_limit: usize,

  /// Stack symbols shown per trace row
  pub stack_preview: usize,

  /// Upcoming tokens shown per trace row
  pub input_preview: usize,
}

impl Default for ParserConfig {
  fn default() -> Self {
    Self {
      step_limit: 200_000,
      stack_preview: 16,
      input_preview: 6,
    }
  }
}

impl ParserConfig {
  pub fn with_step_limit(mut self, step_limit: usize) -> Self {
    self.step_limit = step_limit;
    self
  }

  pub fn with_stack_preview(mut self, stack_preview: usize) -> Self {
    self.stack_preview = stack_preview;
    self
  }

  pub fn with_input_preview(mut self, input_preview: usize) -> Self {
    self.input_preview = input_preview;
    self
  }
}

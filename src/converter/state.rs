/// Default nesting limit. Every nested level is a distinct Rust type, so
/// real type graphs stay far below it.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Settings for deriving schemas from type descriptors.
///
/// Holds configuration only; per-call state lives in a
/// [`Traversal`](crate::common::traversal::Traversal), so one deriver can be
/// shared freely between threads.
///
/// Cycles never reach the depth limit: a record is tracked before its fields
/// are expanded. `max_depth` is a stack guard for acyclic nesting only, and
/// input nested deeper than it fails with
/// [`DeriveError::DepthExceeded`](crate::error::DeriveError::DepthExceeded)
/// even though it has a valid schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaDeriver {
    /// Deepest nesting of non-primitive types before giving up
    /// (default [`DEFAULT_MAX_DEPTH`]).
    pub max_depth: usize,
    /// Render with `serde_json::to_string_pretty` instead of compact text.
    pub pretty: bool,
}

impl Default for SchemaDeriver {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaDeriver {
    /// Create a new deriver with default settings.
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            pretty: false,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let deriver = SchemaDeriver::default();
        assert_eq!(deriver, SchemaDeriver::new());
        assert_eq!(deriver.max_depth, DEFAULT_MAX_DEPTH);
        assert!(!deriver.pretty);
        assert_eq!(deriver.with_max_depth(2).max_depth, 2);
    }
}

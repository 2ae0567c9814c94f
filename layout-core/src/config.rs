//! Engine-wide knobs, builder-style, grounded on `azul`'s `AppConfig`
//! pattern (`azul/app.rs`). None of these change layout semantics from
//! the spec's defaults — they only bound or instrument the pass.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Safety bound on the flex-grow distribution loop (`spec.md` §4.5
    /// Step 3a / §5 "Cancellation and timeouts"). The loop already
    /// self-terminates on convergence or a dry iteration; this is a
    /// defensive upper bound against a pathological active set.
    pub max_flex_iterations: u32,
    /// When true, the engine logs a `trace!` line per flow-layouter
    /// invocation (container kind, child count).
    pub debug_logging: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_flex_iterations: 64,
            debug_logging: false,
        }
    }
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_flex_iterations(mut self, n: u32) -> Self {
        self.max_flex_iterations = n;
        self
    }

    pub fn with_debug_logging(mut self, on: bool) -> Self {
        self.debug_logging = on;
        self
    }
}

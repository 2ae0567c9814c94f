//! Top-level entry point (`spec.md` §6 "Style class API" / "Debug
//! API"): owns the style registry, the per-pass scratch cache, engine
//! config and (when armed) a debug session.

use layout_style::StyleRegistry;

use crate::config::EngineConfig;
use crate::debug::{DebugDriver, DebugStep};
use crate::error::LayoutError;
use crate::node::Node;
use crate::style_cache::StyleCache;
use crate::tree_driver::run_pass;

/// The engine a host constructs once and drives every tick.
///
/// `N` is the host's node handle type; see [`crate::node::Node`].
pub struct LayoutEngine<N: Node> {
    registry: StyleRegistry,
    cache: StyleCache<N>,
    config: EngineConfig,
    debug: Option<DebugDriver<N>>,
}

impl<N: Node> LayoutEngine<N> {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            registry: StyleRegistry::new(),
            cache: StyleCache::new(),
            config,
            debug: None,
        }
    }

    /// Parses `text` once and stores it under `name`. Re-registering a
    /// name overwrites the previous style.
    pub fn register_class(&mut self, name: &str, text: &str) {
        self.registry.register_class(name, text);
    }

    /// Runs one layout pass rooted at `node`. A no-op while the debug
    /// driver is armed (`spec.md` §4.11: "the normal tick-driven
    /// layout pass must be suppressed").
    pub fn process_instance(&mut self, node: &N) {
        if self.debug.is_some() {
            return;
        }
        if self.config.debug_logging {
            log::debug!(
                target: "layout_core::engine",
                "process_instance root tags={:?} children={}",
                node.tags(),
                node.children().len()
            );
        }
        run_pass(&mut self.cache, &self.registry, node, &self.config);
    }

    /// Arms the step generator from `root`, tearing down any
    /// previously-armed session.
    pub fn enable_debug_mode(&mut self, root: &N) {
        self.debug = Some(DebugDriver::new(root.clone(), self.registry.clone(), self.config));
    }

    /// Tears down the current debug session, if any.
    pub fn disable_debug_mode(&mut self) {
        self.debug = None;
    }

    pub fn is_debug_mode_enabled(&self) -> bool {
        self.debug.is_some()
    }

    /// Advances one debug step. Infallible: logs a warning and returns
    /// a terminal (`None`) indicator when the driver isn't armed
    /// (`spec.md` §7 "Debug-step advance when inactive"), rather than
    /// propagating an error for what the spec treats as a best-effort
    /// no-op in every other positioner.
    pub fn next_step(&mut self) -> Option<DebugStep> {
        match self.try_next_step() {
            Ok(step) => step,
            Err(_) => {
                log::warn!(target: "layout_core::engine", "next_step() called while the debug driver is not armed");
                None
            }
        }
    }

    /// Same as [`LayoutEngine::next_step`] but surfaces the inactive
    /// case as a real error instead of swallowing it, for hosts that
    /// want to treat it as a programmer mistake.
    pub fn try_next_step(&mut self) -> Result<Option<DebugStep>, LayoutError> {
        let driver = self.debug.as_mut().ok_or(LayoutError::DebugSessionInactive)?;
        let step = driver.advance();
        if step.is_none() {
            self.debug = None;
        }
        Ok(step)
    }
}

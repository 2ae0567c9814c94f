//! Layout itself never fails (`spec.md` §7: misconfigured styles
//! produce wrong geometry, not faults). The handful of genuine
//! programmer errors — advancing a debug session that was never
//! armed — get a real error type instead, grounded in the teacher's
//! `layout` crate, which carries `thiserror` as its error crate.

#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("nextStep() called while the debug driver is not armed")]
    DebugSessionInactive,
}

/// Errors raised at the operation-request boundary.
///
/// The ghost text behavior itself never fails; unmet guards are no-ops.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GhostError {
    #[error("unknown ghost text operation: {0:?}")]
    UnknownOperation(String),
}

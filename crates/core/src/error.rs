use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// The version-control tool failed or is absent; no revision could
    /// be resolved and nothing was recorded.
    #[error("Revision unavailable")]
    RevisionUnavailable,
}

use super::record::RecordId;
use thiserror::Error;

/// Rejected list view transitions. The previous state stays in effect.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListViewError {
    #[error("required field `{0}` is empty")]
    MissingField(&'static str),

    #[error("page size {0} is not one of the offered options")]
    UnsupportedPageSize(usize),

    #[error("record {0} not found")]
    RecordNotFound(RecordId),

    #[error("no open dialog to confirm")]
    NoDialogTarget,
}

use std::fmt;

/// Failure of one of the remote operations, as shown to the user.
///
/// The underlying cause (status code, transport error, bad body) is logged by
/// the service and otherwise dropped: the UI only ever sees one of these three.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationFailure {
    Fetch,
    Delete,
    Update,
}

impl OperationFailure {
    pub fn message(&self) -> &'static str {
        match self {
            OperationFailure::Fetch => "Something went wrong while fetching users.",
            OperationFailure::Delete => "Something went wrong while deleting the user.",
            OperationFailure::Update => "Something went wrong while updating the user.",
        }
    }
}

impl fmt::Display for OperationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for OperationFailure {}

/// An error type for the interpolator module.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum InterpolatorError {
    /// Error when a new x-coordinate equals the x of an existing node.
    ///
    /// Duplicate nodes make a barycentric weight infinite and poison every
    /// subsequent evaluation with NaN, so they are rejected up front.
    #[error("x-coordinate collides with the node at index {0}")]
    DuplicateNode(usize),

    /// Error when a node index is out of range.
    #[error("node index {0} is out of range for {1} nodes")]
    InvalidIndex(usize, usize),
}

/// Domain-level errors raised while validating caller input or upstream data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// A caller-supplied argument is out of range. The message is surfaced
    /// verbatim, e.g. `Photo ID must be greater than zero`.
    #[error("{0}")]
    Validation(String),

    /// A record returned by the photo API does not describe a valid photo.
    #[error("Can not parse photo from invalid data: {0}")]
    MalformedData(String),
}

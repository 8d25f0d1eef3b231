use photoview_core::error::CoreError;
use photoview_gateway::GatewayError;

/// Errors surfaced by [`PhotoBrowser`](crate::PhotoBrowser) operations.
#[derive(Debug, thiserror::Error)]
pub enum BrowserError {
    /// Invalid caller input or a malformed upstream record.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The gateway could not deliver the requested records.
    #[error("{context}: {source}")]
    Upstream {
        /// What the browser was trying to do, e.g. `Could not load photos`.
        context: String,
        #[source]
        source: GatewayError,
    },
}

impl BrowserError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        BrowserError::Core(CoreError::Validation(message.into()))
    }

    pub(crate) fn upstream(context: impl Into<String>) -> impl FnOnce(GatewayError) -> Self {
        let context = context.into();
        move |source| BrowserError::Upstream { context, source }
    }

    /// The caller supplied an out-of-range argument.
    pub fn is_validation(&self) -> bool {
        matches!(self, BrowserError::Core(CoreError::Validation(_)))
    }

    /// An upstream record failed photo validation.
    pub fn is_malformed(&self) -> bool {
        matches!(self, BrowserError::Core(CoreError::MalformedData(_)))
    }

    /// The upstream API reported the requested resource as missing.
    pub fn is_not_found(&self) -> bool {
        match self {
            BrowserError::Upstream { source, .. } => source.is_not_found(),
            BrowserError::Core(_) => false,
        }
    }
}

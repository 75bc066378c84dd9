use thiserror::Error;

/// Errors that can occur while resolving and converting a source document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// The document parsed cleanly but produced zero destination elements,
    /// either because the page has no children or because every child was an
    /// unsupported node type.
    #[error("nothing convertible was found in the document")]
    NothingConvertible,

    #[error("failed to parse document JSON: {0}")]
    JsonParseError(String),

    #[error("malformed document: {0}")]
    MalformedDocument(String),
}

impl ConvertError {
    /// The HTTP-style status a transport host should answer with for this
    /// error kind.
    pub fn status_code(&self) -> u16 {
        match self {
            ConvertError::NothingConvertible => 422,
            ConvertError::JsonParseError(_) | ConvertError::MalformedDocument(_) => 500,
        }
    }
}

/// Errors a document-fetch collaborator must map its failures to before a
/// document reaches the conversion core.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("access to the document was denied; check the API token")]
    AccessDenied,

    #[error("document not found; check the document key")]
    NotFound,

    /// Any other error status answered by the document service.
    #[error("the document service answered with status {0}")]
    Upstream(u16),

    #[error("could not reach the document service: {0}")]
    Network(String),

    #[error("malformed response from the document service: {0}")]
    MalformedResponse(String),
}

impl FetchError {
    /// The HTTP-style status a transport host should answer with for this
    /// error kind. Upstream statuses pass through unchanged.
    pub fn status_code(&self) -> u16 {
        match self {
            FetchError::AccessDenied => 403,
            FetchError::NotFound => 404,
            FetchError::Upstream(status) => *status,
            FetchError::Network(_) => 503,
            FetchError::MalformedResponse(_) => 500,
        }
    }
}

use super::file::DocumentFile;
use crate::error::FetchError;

/// A collaborator that retrieves a remote design document.
///
/// This is the seam between the conversion core and whatever transport a
/// host uses to talk to the document service. Implementations own the
/// network call, authentication-header handling and response decoding, and
/// must fold every failure into one of the [`FetchError`] kinds so a
/// transport layer can translate them to status codes without inspecting
/// transport details.
///
/// # Example
///
/// ```rust,no_run
/// use kumiko::document::{DocumentFile, DocumentSource};
/// use kumiko::error::FetchError;
///
/// /// A source that serves documents from an in-memory payload, e.g. for
/// /// tests or offline runs.
/// struct CannedSource {
///     payload: String,
/// }
///
/// impl DocumentSource for CannedSource {
///     fn fetch_document(
///         &self,
///         _credential: &str,
///         _document_key: &str,
///     ) -> Result<DocumentFile, FetchError> {
///         DocumentFile::from_json(&self.payload)
///             .map_err(|e| FetchError::MalformedResponse(e.to_string()))
///     }
/// }
/// ```
pub trait DocumentSource {
    /// Fetches and parses the document identified by `document_key`,
    /// authenticating with `credential`.
    fn fetch_document(
        &self,
        credential: &str,
        document_key: &str,
    ) -> Result<DocumentFile, FetchError>;
}

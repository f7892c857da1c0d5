use thiserror::Error;

/// Errors the resource layer can raise while projecting a record.
///
/// Projection is total over well-typed input; the one exception is a stored
/// serialized-JSON column that fails to decode. That error must reach the
/// caller unmasked — substituting a default would hide corrupt data.
#[derive(Debug, Error)]
pub enum ProjectionError {
    #[error("Malformed JSON in stored field '{field}': {source}")]
    DecodeError {
        field: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

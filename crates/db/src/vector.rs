//! pgvector text-literal conversion.
//!
//! We use runtime queries rather than compile-time sqlx macros, so the
//! `vector(128)` embedding column is written as a text literal cast with
//! `::vector` and read back via `::text`. These helpers do the conversion in
//! both directions.

use rollcall_core::error::CoreError;

/// Format an embedding as a pgvector text literal, e.g. `[0.1,0.2,0.3]`.
pub fn to_vector_literal(embedding: &[f32]) -> String {
    let coords = embedding
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(",");
    format!("[{coords}]")
}

/// Parse a pgvector `::text` representation back into an `f32` vector.
pub fn parse_vector_text(text: &str) -> Result<Vec<f32>, CoreError> {
    let inner = text
        .trim()
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .ok_or_else(|| {
            CoreError::Internal(format!("Malformed vector literal: {text}"))
        })?;

    if inner.trim().is_empty() {
        return Ok(Vec::new());
    }

    inner
        .split(',')
        .map(|coord| {
            coord.trim().parse::<f32>().map_err(|e| {
                CoreError::Internal(format!("Malformed vector coordinate '{coord}': {e}"))
            })
        })
        .collect()
}

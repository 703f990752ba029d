//! Nearest-neighbor face matching over enrolled embeddings.
//!
//! A probe embedding produced by the external recognition model is compared
//! against every enrolled student's embedding by Euclidean distance. Linear
//! scan by design: rosters are classroom-scale (tens to low hundreds), so
//! O(N·D) per probe is fine and no index is warranted.

use serde::Serialize;

use crate::error::CoreError;
use crate::types::DbId;
use crate::validation::validate_unit_range;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Dimensionality of face embeddings produced by the recognition model.
pub const EMBEDDING_DIMENSION: usize = 128;

/// Maximum Euclidean distance at which a probe is accepted as a match.
pub const DEFAULT_MATCH_THRESHOLD: f64 = 0.6;

// ---------------------------------------------------------------------------
// Match result
// ---------------------------------------------------------------------------

/// An accepted match from [`match_embedding`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FaceMatch {
    pub student_id: DbId,
    /// `1.0 - distance` of the accepted match. A display-oriented monotonic
    /// transform of the distance, not a calibrated probability.
    pub confidence: f64,
}

// ---------------------------------------------------------------------------
// Distance
// ---------------------------------------------------------------------------

/// Euclidean distance between two embedding vectors.
///
/// Computed over the first `min(len(a), len(b))` coordinates so a malformed
/// stored vector degrades the comparison instead of panicking.
pub fn euclidean_distance(a: &[f32], b: &[f32]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| {
            let d = (*x as f64) - (*y as f64);
            d * d
        })
        .sum::<f64>()
        .sqrt()
}

// ---------------------------------------------------------------------------
// Matching
// ---------------------------------------------------------------------------

/// Find the enrolled student nearest to `probe`, if any is within `threshold`.
///
/// Scans all enrolled embeddings tracking the minimum distance seen; a
/// candidate is accepted only if its distance is strictly below both the
/// current best and the threshold. Returns `None` when the probe is empty,
/// the enrolled set is empty, or nothing falls within threshold — callers
/// treat all three as the same "not recognized" outcome.
pub fn match_embedding(
    probe: &[f32],
    enrolled: &[(DbId, Vec<f32>)],
    threshold: f64,
) -> Option<FaceMatch> {
    if probe.is_empty() {
        return None;
    }

    let mut best: Option<(DbId, f64)> = None;
    let mut min_distance = threshold;

    for (student_id, embedding) in enrolled {
        let distance = euclidean_distance(probe, embedding);
        if distance < min_distance {
            min_distance = distance;
            best = Some((*student_id, distance));
        }
    }

    best.map(|(student_id, distance)| FaceMatch {
        student_id,
        confidence: 1.0 - distance,
    })
}

// ---------------------------------------------------------------------------
// Validation helpers
// ---------------------------------------------------------------------------

/// Validate that an embedding vector has the expected dimensionality.
pub fn validate_embedding_dimension(embedding: &[f32]) -> Result<(), CoreError> {
    if embedding.len() != EMBEDDING_DIMENSION {
        return Err(CoreError::Validation(format!(
            "Embedding must be {EMBEDDING_DIMENSION}-dimensional, got {}",
            embedding.len()
        )));
    }
    Ok(())
}

/// Validate that a match threshold is within `[0.0, 1.0]`.
pub fn validate_match_threshold(threshold: f64) -> Result<(), CoreError> {
    validate_unit_range(threshold, "Match threshold")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

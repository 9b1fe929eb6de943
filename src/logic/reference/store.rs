//! Reference Store - the two immutable artifacts
//!
//! Loaded once at process start, read-only afterwards. Share it through
//! `Arc<ReferenceStore>`; there is no reload.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::{PredictorError, Result};
use crate::logic::model::{model_from_bytes, PredictiveModel};
use super::dataset::{load_reference_scores, DatasetOptions};
use super::population::ReferencePopulation;

// ============================================================================
// METADATA
// ============================================================================

/// What was loaded, captured once at load time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreMetadata {
    pub model_path: String,
    pub model_kind: String,
    /// SHA-256 of the model artifact (hex), None for injected models
    pub model_sha256: Option<String>,
    pub dataset_path: String,
    pub score_column: String,
    pub reference_count: usize,
    pub loaded_at: DateTime<Utc>,
}

// ============================================================================
// STORE
// ============================================================================

pub struct ReferenceStore {
    model: Arc<dyn PredictiveModel>,
    population: ReferencePopulation,
    metadata: StoreMetadata,
}

impl fmt::Debug for ReferenceStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReferenceStore")
            .field("model_kind", &self.model.kind())
            .field("reference_count", &self.population.len())
            .field("metadata", &self.metadata)
            .finish()
    }
}

impl ReferenceStore {
    /// Build from already-constructed parts, no I/O
    pub fn new(model: Arc<dyn PredictiveModel>, population: ReferencePopulation) -> Self {
        let metadata = StoreMetadata {
            model_path: "<injected>".to_string(),
            model_kind: model.kind().to_string(),
            model_sha256: None,
            dataset_path: "<injected>".to_string(),
            score_column: crate::constants::DEFAULT_SCORE_COLUMN.to_string(),
            reference_count: population.len(),
            loaded_at: Utc::now(),
        };

        Self {
            model,
            population,
            metadata,
        }
    }

    /// Load model and dataset with default dataset options
    pub fn load(model_source: &str, dataset_source: &str) -> Result<Self> {
        Self::load_with_options(model_source, dataset_source, &DatasetOptions::default())
    }

    /// Load model and dataset. Any failure is an `ArtifactLoad` error.
    pub fn load_with_options(
        model_source: &str,
        dataset_source: &str,
        options: &DatasetOptions,
    ) -> Result<Self> {
        log::info!("Loading model from: {}", model_source);

        // Hash and model come from the same read
        let model_bytes = std::fs::read(model_source)
            .map_err(|e| PredictorError::artifact("model", model_source, e))?;
        let model_sha256 = sha256_hex(&model_bytes);
        let model = model_from_bytes(model_source, &model_bytes)?;

        let population = load_reference_scores(dataset_source, options)?;

        let metadata = StoreMetadata {
            model_path: model_source.to_string(),
            model_kind: model.kind().to_string(),
            model_sha256: Some(model_sha256),
            dataset_path: dataset_source.to_string(),
            score_column: options.score_column.clone(),
            reference_count: population.len(),
            loaded_at: Utc::now(),
        };

        log::info!(
            "Reference store ready: {} model, {} reference scores",
            metadata.model_kind,
            metadata.reference_count
        );

        Ok(Self {
            model,
            population,
            metadata,
        })
    }

    pub fn model(&self) -> &dyn PredictiveModel {
        self.model.as_ref()
    }

    pub fn reference_scores(&self) -> &ReferencePopulation {
        &self.population
    }

    pub fn metadata(&self) -> &StoreMetadata {
        &self.metadata
    }

    /// Re-hash the model file and compare with the checksum taken at load
    pub fn verify_model_checksum(&self) -> Result<bool> {
        let expected = match &self.metadata.model_sha256 {
            Some(hash) => hash,
            None => {
                return Err(PredictorError::Config {
                    reason: "model was injected, no artifact to verify".to_string(),
                })
            }
        };

        let path = &self.metadata.model_path;
        let bytes = std::fs::read(path).map_err(|e| PredictorError::artifact("model", path, e))?;
        let actual = sha256_hex(&bytes);

        if &actual != expected {
            log::warn!("Model checksum mismatch for {}: expected {}, got {}", path, expected, actual);
            return Ok(false);
        }
        Ok(true)
    }
}

/// SHA-256, hex-encoded
fn sha256_hex(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

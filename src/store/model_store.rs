use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::classifiers::{BinaryClassifier, RandomForest};
use crate::core::disease::DiseaseKind;
use crate::core::schema::FeatureSchema;
use crate::error::StoreError;
use crate::store::dataset::TestDataset;

/// One loaded classifier, keyed by disease and pinned to the file it came
/// from. Never mutated after load; shared read-only by every request.
pub struct ModelArtifact {
    disease: DiseaseKind,
    path: PathBuf,
    classifier: Box<dyn BinaryClassifier>,
}

impl ModelArtifact {
    pub fn new(
        disease: DiseaseKind,
        path: PathBuf,
        classifier: Box<dyn BinaryClassifier>,
    ) -> Self {
        Self {
            disease,
            path,
            classifier,
        }
    }

    pub fn disease(&self) -> DiseaseKind {
        self.disease
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn classifier(&self) -> &dyn BinaryClassifier {
        self.classifier.as_ref()
    }
}

// The boxed classifier has no Debug bound, so print its identity instead.
impl fmt::Debug for ModelArtifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelArtifact")
            .field("disease", &self.disease)
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

/// Immutable per-disease storage, populated exactly once at bootstrap.
/// Total over `DiseaseKind`, so lookups can never miss.
#[derive(Debug)]
pub struct PerDisease<T> {
    pub diabetes: T,
    pub heart_disease: T,
    pub parkinsons: T,
}

impl<T> PerDisease<T> {
    pub fn build(mut build: impl FnMut(DiseaseKind) -> T) -> Self {
        Self {
            diabetes: build(DiseaseKind::Diabetes),
            heart_disease: build(DiseaseKind::HeartDisease),
            parkinsons: build(DiseaseKind::Parkinsons),
        }
    }

    pub fn try_build<E>(mut build: impl FnMut(DiseaseKind) -> Result<T, E>) -> Result<Self, E> {
        Ok(Self {
            diabetes: build(DiseaseKind::Diabetes)?,
            heart_disease: build(DiseaseKind::HeartDisease)?,
            parkinsons: build(DiseaseKind::Parkinsons)?,
        })
    }

    pub fn get(&self, kind: DiseaseKind) -> &T {
        match kind {
            DiseaseKind::Diabetes => &self.diabetes,
            DiseaseKind::HeartDisease => &self.heart_disease,
            DiseaseKind::Parkinsons => &self.parkinsons,
        }
    }
}

/// Loads every model artifact and test dataset under a models directory,
/// once per process. Any missing or malformed file aborts the whole open:
/// the service never starts with a partial model set.
pub struct ModelStore {
    artifacts: PerDisease<ModelArtifact>,
    test_data: PerDisease<TestDataset>,
}

// Summarized by hand: a full dump would print every test-dataset row.
impl fmt::Debug for ModelStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelStore")
            .field("artifacts", &self.artifacts)
            .finish_non_exhaustive()
    }
}

impl ModelStore {
    pub fn open(models_dir: &Path) -> Result<ModelStore, StoreError> {
        let artifacts = PerDisease::try_build(|kind| Self::load_artifact(models_dir, kind))?;
        let test_data = PerDisease::try_build(|kind| Self::load_test_data(models_dir, kind))?;
        Ok(ModelStore {
            artifacts,
            test_data,
        })
    }

    #[cfg(any(test, feature = "test-support"))]
    pub fn from_parts(
        artifacts: PerDisease<ModelArtifact>,
        test_data: PerDisease<TestDataset>,
    ) -> ModelStore {
        ModelStore {
            artifacts,
            test_data,
        }
    }

    pub fn artifact(&self, kind: DiseaseKind) -> &ModelArtifact {
        self.artifacts.get(kind)
    }

    pub fn test_data(&self, kind: DiseaseKind) -> &TestDataset {
        self.test_data.get(kind)
    }

    fn load_artifact(models_dir: &Path, kind: DiseaseKind) -> Result<ModelArtifact, StoreError> {
        let path = models_dir.join(kind.model_file());
        let raw = read_artifact(&path)?;

        let forest: RandomForest =
            serde_json::from_str(&raw).map_err(|err| corrupt_reason(&path, &raw, err))?;

        let schema = FeatureSchema::for_disease(kind);
        if forest.n_features != schema.len() {
            return Err(StoreError::ArtifactCorrupt {
                path,
                reason: format!(
                    "artifact is {} features wide but the {} schema has {}",
                    forest.n_features,
                    kind,
                    schema.len()
                ),
            });
        }
        forest.validate().map_err(|err| StoreError::ArtifactCorrupt {
            path: path.clone(),
            reason: err.to_string(),
        })?;

        Ok(ModelArtifact::new(kind, path, Box::new(forest)))
    }

    fn load_test_data(models_dir: &Path, kind: DiseaseKind) -> Result<TestDataset, StoreError> {
        let path = models_dir.join(kind.test_data_file());
        let raw = read_artifact(&path)?;

        let dataset: TestDataset =
            serde_json::from_str(&raw).map_err(|err| StoreError::ArtifactCorrupt {
                path: path.clone(),
                reason: err.to_string(),
            })?;

        let schema = FeatureSchema::for_disease(kind);
        dataset
            .validate(schema.len())
            .map_err(|err| StoreError::ArtifactCorrupt {
                path: path.clone(),
                reason: err.to_string(),
            })?;

        Ok(dataset)
    }
}

fn read_artifact(path: &Path) -> Result<String, StoreError> {
    fs::read_to_string(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => StoreError::ArtifactNotFound {
            path: path.to_path_buf(),
        },
        _ => StoreError::ArtifactCorrupt {
            path: path.to_path_buf(),
            reason: err.to_string(),
        },
    })
}

/// A bare numeric array is what the legacy exporter produced for untrained
/// payloads; it must never be coerced into a fresh classifier, so it gets a
/// pointed diagnostic instead of a generic parse error.
fn corrupt_reason(path: &Path, raw: &str, err: serde_json::Error) -> StoreError {
    let reason = match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(_)) => {
            "bare numeric array payload; refusing to coerce into an untrained classifier"
                .to_string()
        }
        _ => err.to_string(),
    };
    StoreError::ArtifactCorrupt {
        path: path.to_path_buf(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures::{step_forest, write_models_dir};
    use std::fs;
    use strum::IntoEnumIterator;
    use tempfile::tempdir;

    #[test]
    fn opens_a_complete_models_directory() {
        let dir = tempdir().unwrap();
        write_models_dir(dir.path()).unwrap();

        let store = ModelStore::open(dir.path()).unwrap();
        for kind in DiseaseKind::iter() {
            let schema = FeatureSchema::for_disease(kind);
            assert_eq!(store.artifact(kind).classifier().num_features(), schema.len());
            assert!(!store.test_data(kind).is_empty());
        }
    }

    #[test]
    fn missing_model_names_the_file() {
        let dir = tempdir().unwrap();
        write_models_dir(dir.path()).unwrap();
        fs::remove_file(dir.path().join("diabetes_model.json")).unwrap();

        match ModelStore::open(dir.path()).unwrap_err() {
            StoreError::ArtifactNotFound { path } => {
                assert!(path.ends_with("diabetes_model.json"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_test_data_is_also_fatal() {
        let dir = tempdir().unwrap();
        write_models_dir(dir.path()).unwrap();
        fs::remove_file(dir.path().join("heart_test_data.json")).unwrap();

        assert!(matches!(
            ModelStore::open(dir.path()).unwrap_err(),
            StoreError::ArtifactNotFound { .. }
        ));
    }

    #[test]
    fn bare_array_payload_is_rejected_not_coerced() {
        let dir = tempdir().unwrap();
        write_models_dir(dir.path()).unwrap();
        fs::write(
            dir.path().join("hybrid_parkinsons_model.json"),
            "[0.1, 0.2, 0.3]",
        )
        .unwrap();

        match ModelStore::open(dir.path()).unwrap_err() {
            StoreError::ArtifactCorrupt { path, reason } => {
                assert!(path.ends_with("hybrid_parkinsons_model.json"));
                assert!(reason.contains("refusing to coerce"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn width_mismatch_is_corrupt() {
        let dir = tempdir().unwrap();
        write_models_dir(dir.path()).unwrap();
        // A 22-wide forest in the 8-wide diabetes slot.
        let wrong = step_forest(22);
        fs::write(
            dir.path().join("diabetes_model.json"),
            serde_json::to_string(&wrong).unwrap(),
        )
        .unwrap();

        assert!(matches!(
            ModelStore::open(dir.path()).unwrap_err(),
            StoreError::ArtifactCorrupt { .. }
        ));
    }

    #[test]
    fn empty_forest_is_corrupt() {
        let dir = tempdir().unwrap();
        write_models_dir(dir.path()).unwrap();
        fs::write(
            dir.path().join("diabetes_model.json"),
            r#"{"n_features": 8, "trees": []}"#,
        )
        .unwrap();

        match ModelStore::open(dir.path()).unwrap_err() {
            StoreError::ArtifactCorrupt { reason, .. } => {
                assert!(reason.contains("no trained trees"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn store_and_artifacts_are_debug_printable() {
        let dir = tempdir().unwrap();
        write_models_dir(dir.path()).unwrap();

        let dump = format!("{:?}", ModelStore::open(dir.path()));
        assert!(dump.contains("diabetes_model.json"));
        assert!(dump.contains("Parkinsons"));
    }

    #[test]
    fn open_is_idempotent() {
        let dir = tempdir().unwrap();
        write_models_dir(dir.path()).unwrap();

        let a = ModelStore::open(dir.path()).unwrap();
        let b = ModelStore::open(dir.path()).unwrap();

        let sample = vec![1.0; 8];
        let pa = a
            .artifact(DiseaseKind::Diabetes)
            .classifier()
            .predict(&sample)
            .unwrap();
        let pb = b
            .artifact(DiseaseKind::Diabetes)
            .classifier()
            .predict(&sample)
            .unwrap();
        assert_eq!(pa, pb);
    }
}

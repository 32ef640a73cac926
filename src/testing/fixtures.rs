use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use strum::IntoEnumIterator;

use crate::classifiers::{BinaryClassifier, DecisionTree, RandomForest, TreeNode};
use crate::core::disease::DiseaseKind;
use crate::core::schema::FeatureSchema;
use crate::store::dataset::TestDataset;
use crate::store::model_store::{ModelArtifact, ModelStore, PerDisease};

/// Deterministic three-tree forest that votes positive once feature 0
/// exceeds 0.5. Mean positive mass is 0.3 left of the step, 0.7 right.
pub fn step_forest(n_features: usize) -> RandomForest {
    let stump = |left: [f64; 2], right: [f64; 2]| DecisionTree {
        root: TreeNode::Split {
            feature: 0,
            threshold: 0.5,
            left: Box::new(TreeNode::Leaf { counts: left }),
            right: Box::new(TreeNode::Leaf { counts: right }),
        },
    };
    RandomForest {
        n_features,
        trees: vec![
            stump([8.0, 2.0], [2.0, 8.0]),
            stump([7.0, 3.0], [3.0, 7.0]),
            stump([6.0, 4.0], [4.0, 6.0]),
        ],
    }
}

/// Ten rows keyed off feature 0: four clean per class plus one noisy row
/// per class, so a step forest produces exactly one FP and one FN.
pub fn step_dataset(width: usize) -> TestDataset {
    let row = |lead: f64| {
        let mut r = vec![0.0; width];
        r[0] = lead;
        r
    };

    let mut features = Vec::new();
    let mut labels = Vec::new();
    for _ in 0..4 {
        features.push(row(0.0));
        labels.push(0);
    }
    for _ in 0..4 {
        features.push(row(1.0));
        labels.push(1);
    }
    features.push(row(1.0));
    labels.push(0);
    features.push(row(0.0));
    labels.push(1);

    TestDataset { features, labels }
}

pub fn step_artifact(kind: DiseaseKind) -> ModelArtifact {
    let schema = FeatureSchema::for_disease(kind);
    ModelArtifact::new(
        kind,
        PathBuf::from(kind.model_file()),
        Box::new(step_forest(schema.len())),
    )
}

/// A fully-populated in-memory store backed by step forests.
pub fn step_store() -> ModelStore {
    ModelStore::from_parts(
        PerDisease::build(step_artifact),
        PerDisease::build(|kind| step_dataset(FeatureSchema::for_disease(kind).len())),
    )
}

/// A store whose classifiers come from the given factory; test datasets
/// stay step-shaped.
pub fn stub_store(
    mut classifier: impl FnMut(DiseaseKind) -> Box<dyn BinaryClassifier>,
) -> ModelStore {
    ModelStore::from_parts(
        PerDisease::build(|kind| {
            ModelArtifact::new(kind, PathBuf::from("stub"), classifier(kind))
        }),
        PerDisease::build(|kind| step_dataset(FeatureSchema::for_disease(kind).len())),
    )
}

/// Writes a complete models directory (all three artifacts plus their test
/// datasets) for filesystem-facing tests.
pub fn write_models_dir(dir: &Path) -> io::Result<()> {
    for kind in DiseaseKind::iter() {
        let schema = FeatureSchema::for_disease(kind);
        let forest = step_forest(schema.len());
        let dataset = step_dataset(schema.len());
        fs::write(
            dir.join(kind.model_file()),
            serde_json::to_string(&forest)?,
        )?;
        fs::write(
            dir.join(kind.test_data_file()),
            serde_json::to_string(&dataset)?,
        )?;
    }
    Ok(())
}

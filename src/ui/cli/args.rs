use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueHint};
use strum::IntoEnumIterator;

use crate::core::disease::DiseaseKind;

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Screening front end over pre-trained disease classifiers"
)]
pub struct Cli {
    /// Directory holding the model artifacts and held-out test datasets
    #[arg(
        long,
        default_value = "models",
        value_name = "DIR",
        value_hint = ValueHint::DirPath
    )]
    pub models_dir: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run one prediction for a disease
    Predict(PredictArgs),
    /// Report held-out metrics for a disease's model
    Evaluate(EvaluateArgs),
}

#[derive(Debug, Args)]
pub struct PredictArgs {
    /// Disease to screen for (diabetes, heart-disease, parkinsons)
    #[arg(long, value_name = "DISEASE")]
    pub disease: String,

    /// JSON file with a field-name to value map (omit to be prompted)
    #[arg(long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub input: Option<PathBuf>,

    /// Also print the positive-class probability
    #[arg(long)]
    pub probability: bool,

    /// Append the held-out evaluation report after the diagnosis
    #[arg(long)]
    pub report: bool,
}

#[derive(Debug, Args)]
pub struct EvaluateArgs {
    /// Disease whose model to evaluate (diabetes, heart-disease, parkinsons)
    #[arg(long, value_name = "DISEASE")]
    pub disease: String,
}

pub fn parse_disease(raw: &str) -> Result<DiseaseKind> {
    DiseaseKind::from_str(raw).with_context(|| {
        let known: Vec<&str> = DiseaseKind::iter().map(|k| k.into()).collect();
        format!(
            "unknown disease '{raw}' (expected one of: {})",
            known.join(", ")
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn disease_names_parse_kebab_case() {
        assert_eq!(
            parse_disease("parkinsons").unwrap(),
            DiseaseKind::Parkinsons
        );
        assert_eq!(
            parse_disease("heart-disease").unwrap(),
            DiseaseKind::HeartDisease
        );
        let err = parse_disease("gout").unwrap_err();
        assert!(err.to_string().contains("gout"));
    }
}

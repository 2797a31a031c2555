//! Operation catalog ingestion from the introspection-shaped JSON document.

use anyhow::{Context, Result};
use quiver_core::explorer::{Argument, Operation, OperationKind};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
enum RawKind {
    Query,
    Mutation,
    Subscription,
}

impl From<RawKind> for OperationKind {
    fn from(raw: RawKind) -> Self {
        match raw {
            RawKind::Query => Self::Query,
            RawKind::Mutation => Self::Mutation,
            RawKind::Subscription => Self::Subscription,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawArgument {
    name: String,
    #[serde(rename = "type")]
    type_name: String,
}

#[derive(Debug, Deserialize)]
struct RawOperation {
    name: String,
    #[serde(default)]
    description: Option<String>,
    kind: RawKind,
    endpoint: String,
    #[serde(default)]
    args: Vec<RawArgument>,
    #[serde(default)]
    return_type: Option<String>,
}

/// Read and convert the operations document at `path`.
pub fn load_operations(path: &Path) -> Result<Vec<Operation>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let operations = parse_operations(&raw)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    info!(count = operations.len(), "operation catalog loaded");
    Ok(operations)
}

fn parse_operations(raw: &str) -> Result<Vec<Operation>> {
    let raw_ops: Vec<RawOperation> = serde_json::from_str(raw)?;
    Ok(raw_ops
        .into_iter()
        .map(|raw| {
            let mut op = Operation::new(raw.name, raw.kind.into(), raw.endpoint);
            op.description = raw.description;
            op.return_type = raw.return_type;
            op.args = raw
                .args
                .into_iter()
                .map(|a| Argument {
                    name: a.name,
                    type_name: a.type_name,
                })
                .collect();
            op
        })
        .collect())
}

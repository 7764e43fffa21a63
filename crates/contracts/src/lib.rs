//! Access to compiled contract artifacts.
//!
//! Compiling contract sources is an external toolchain concern. This crate
//! only knows how to look the compiler's output up by contract name, so the
//! deployment logic never touches file layout details. Both the hardhat and
//! the foundry artifact shapes are accepted.

use {
    alloy::{json_abi::JsonAbi, primitives::Bytes},
    anyhow::{Context, Result, ensure},
    serde::Deserialize,
    std::path::{Path, PathBuf},
};

/// Compiled output of one named contract: its interface description and the
/// creation bytecode to put on chain.
#[derive(Debug, Clone)]
pub struct Artifact {
    pub abi: JsonAbi,
    pub bytecode: Bytes,
}

/// Named-contract lookup over a directory of compiler output files.
#[derive(Debug, Clone)]
pub struct Registry {
    artifacts_path: PathBuf,
}

#[derive(Deserialize)]
struct RawArtifact {
    abi: JsonAbi,
    bytecode: RawBytecode,
}

/// Hardhat stores the creation bytecode as a plain hex string while foundry
/// nests it under an `object` key.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawBytecode {
    Hex(Bytes),
    Object { object: Bytes },
}

impl Registry {
    pub fn new(artifacts_path: impl Into<PathBuf>) -> Self {
        Self {
            artifacts_path: artifacts_path.into(),
        }
    }

    /// Returns the artifact for `name`, expected at
    /// `<artifacts_path>/<name>.json`.
    pub fn load(&self, name: &str) -> Result<Artifact> {
        let path = self.artifacts_path.join(format!("{name}.json"));
        let artifact = read(&path).with_context(|| {
            format!(
                "no usable artifact for contract {name:?} at {}",
                path.display()
            )
        })?;
        ensure!(
            !artifact.bytecode.is_empty(),
            "artifact for contract {name:?} contains no creation bytecode"
        );
        Ok(artifact)
    }
}

fn read(path: &Path) -> Result<Artifact> {
    let contents = std::fs::read_to_string(path)?;
    let raw: RawArtifact = serde_json::from_str(&contents)?;
    let bytecode = match raw.bytecode {
        RawBytecode::Hex(bytes) | RawBytecode::Object { object: bytes } => bytes,
    };
    Ok(Artifact {
        abi: raw.abi,
        bytecode,
    })
}

//! JSON snapshot of every conversation context, so a session can resume where the last one ended.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rapport_core::ConversationContext;
use tracing::info;

/// Reads a snapshot; a missing file is an empty snapshot.
pub fn load_snapshot(path: impl AsRef<Path>) -> Result<Vec<ConversationContext>> {
    let path = path.as_ref();
    if !path.exists() {
        info!(path = %path.display(), "step: no snapshot found, starting empty");
        return Ok(Vec::new());
    }

    let raw = fs::read_to_string(path)
        .with_context(|| format!("Read snapshot {}", path.display()))?;
    let contexts: Vec<ConversationContext> = serde_json::from_str(&raw)
        .with_context(|| format!("Parse snapshot {}", path.display()))?;

    info!(
        path = %path.display(),
        customers = contexts.len(),
        "step: snapshot loaded"
    );
    Ok(contexts)
}

/// Writes `contexts` as pretty JSON, creating parent directories.
pub fn save_snapshot(path: impl AsRef<Path>, contexts: &[ConversationContext]) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Create snapshot dir {}", parent.display()))?;
        }
    }

    let json = serde_json::to_string_pretty(contexts).context("Serialize snapshot")?;
    fs::write(path, json).with_context(|| format!("Write snapshot {}", path.display()))?;

    info!(
        path = %path.display(),
        customers = contexts.len(),
        "step: snapshot saved"
    );
    Ok(())
}

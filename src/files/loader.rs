use anyhow::{Context, Result};
use ignore::WalkBuilder;
use std::path::{Component, Path};

use super::FileSet;
use crate::config::LoaderConfig;

/// Read every file under `root` into a FileSet keyed by `/`-separated relative path
///
/// Bytes that are not valid UTF-8 are decoded lossily; the replacement
/// characters left behind make the sampler treat the file as encoded data.
pub fn load_directory(root: &Path, config: &LoaderConfig) -> Result<FileSet> {
    if !root.is_dir() {
        anyhow::bail!("Not a directory: {}", root.display());
    }

    let mut files = FileSet::new();
    let mut skipped = 0usize;

    let walker = WalkBuilder::new(root)
        .hidden(!config.include_hidden)
        .git_ignore(config.respect_gitignore)
        .git_global(config.respect_gitignore)
        .git_exclude(config.respect_gitignore)
        .ignore(config.respect_gitignore)
        .parents(config.respect_gitignore)
        .require_git(false)
        .filter_entry(|entry| entry.file_name() != ".git")
        .build();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Error walking directory: {}", e);
                continue;
            }
        };

        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        let path = entry.path();
        let size = entry.metadata().map(|m| m.len()).unwrap_or(0);
        if size > config.max_file_size {
            tracing::debug!("Skipping {} ({} bytes over limit)", path.display(), size);
            skipped += 1;
            continue;
        }

        let Some(key) = relative_key(root, path) else {
            continue;
        };

        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        let content = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => {
                tracing::debug!("{} is not valid UTF-8, decoding lossily", key);
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        };

        files.insert(key, content);
    }

    tracing::info!(
        "Loaded {} files from {} ({} skipped)",
        files.len(),
        root.display(),
        skipped
    );
    Ok(files)
}

fn relative_key(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let segments: Vec<_> = relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    if segments.is_empty() {
        None
    } else {
        Some(segments.join("/"))
    }
}

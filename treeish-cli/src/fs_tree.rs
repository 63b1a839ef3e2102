//! Directory tree loading.

use std::collections::HashMap;
use std::fs::Metadata;
use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use ignore::WalkBuilder;
use log::{debug, warn};
use treeish::{Node, NodeId, NodeState, Tree};

/// One file or directory.
#[derive(Debug, Clone)]
pub struct FileNode {
    pub path: PathBuf,
    label: String,
    is_dir: bool,
    meta: String,
}

impl FileNode {
    fn new(path: PathBuf, label: String, metadata: Option<&Metadata>) -> Self {
        let is_dir = metadata.is_some_and(Metadata::is_dir);
        Self {
            path,
            label,
            is_dir,
            meta: metadata.map(describe).unwrap_or_else(unknown),
        }
    }

    pub fn is_dir(&self) -> bool {
        self.is_dir
    }
}

impl Node for FileNode {
    fn name(&self, state: NodeState) -> String {
        if !self.is_dir || !state.is_collapsible() {
            return self.label.clone();
        }
        let marker = if state.is_collapsed() { '>' } else { 'v' };
        format!("{marker} {}", self.label)
    }

    fn prefix(&self) -> String {
        format!("{} ", self.meta)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct LoadOptions {
    /// Deepest level read below the root.
    pub max_depth: usize,
    /// Include dot-files.
    pub all: bool,
}

/// Read the directory tree under `root`. Every directory except the root
/// starts collapsed.
pub fn load(root: &Path, options: LoadOptions) -> Result<Tree<FileNode>> {
    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .hidden(!options.all)
        .max_depth(Some(options.max_depth))
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    let mut tree = Tree::new();
    let mut ids: HashMap<PathBuf, NodeId> = HashMap::new();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!("skipping entry: {err}");
                continue;
            }
        };
        let metadata = entry.metadata().ok();
        let path = entry.into_path();

        let id = if ids.is_empty() {
            let node = FileNode::new(path.clone(), path.display().to_string(), metadata.as_ref());
            tree.add_root(node, NodeState::NONE)
        } else {
            let Some(&parent) = path.parent().and_then(|parent| ids.get(parent)) else {
                warn!("no parent loaded for {}", path.display());
                continue;
            };
            let label = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            let node = FileNode::new(path.clone(), label, metadata.as_ref());
            let state = if node.is_dir() {
                NodeState::COLLAPSED
            } else {
                NodeState::NONE
            };
            tree.add_child(parent, node, state)?
        };
        ids.insert(path, id);
    }

    if tree.is_empty() {
        bail!("nothing to show under {}", root.display());
    }
    debug!("loaded {} entries from {}", tree.len(), root.display());
    Ok(tree)
}

fn describe(metadata: &Metadata) -> String {
    let (uid, gid) = owner(metadata);
    format!(
        "{} {uid:>5}:{gid:<5} {:>8}",
        permissions(metadata),
        human_size(metadata.len())
    )
}

fn unknown() -> String {
    format!("{} {:>5}:{:<5} {:>8}", "?".repeat(10), "?", "?", "?")
}

#[cfg(unix)]
fn owner(metadata: &Metadata) -> (String, String) {
    use std::os::unix::fs::MetadataExt;
    (metadata.uid().to_string(), metadata.gid().to_string())
}

#[cfg(not(unix))]
fn owner(_metadata: &Metadata) -> (String, String) {
    ("-".to_string(), "-".to_string())
}

#[cfg(unix)]
fn permissions(metadata: &Metadata) -> String {
    use std::os::unix::fs::PermissionsExt;
    mode_string(metadata.is_dir(), metadata.permissions().mode())
}

#[cfg(not(unix))]
fn permissions(metadata: &Metadata) -> String {
    let mode = if metadata.permissions().readonly() { 0o444 } else { 0o644 };
    mode_string(metadata.is_dir(), mode)
}

/// `ls -l` style permission bits, e.g. `drwxr-xr-x`.
fn mode_string(is_dir: bool, mode: u32) -> String {
    let mut out = String::with_capacity(10);
    out.push(if is_dir { 'd' } else { '-' });
    for shift in [6, 3, 0] {
        let bits = (mode >> shift) & 0o7;
        out.push(if bits & 0o4 != 0 { 'r' } else { '-' });
        out.push(if bits & 0o2 != 0 { 'w' } else { '-' });
        out.push(if bits & 0o1 != 0 { 'x' } else { '-' });
    }
    out
}

fn human_size(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "K", "M", "G", "T"];
    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{bytes}B")
    } else {
        format!("{size:.1}{}", UNITS[unit])
    }
}

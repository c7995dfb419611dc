//! File-tree browser content
//!
//! The host's filesystem picker supplies the nodes; this module only
//! sorts and renders them. Clicking behavior (opening a file in a new
//! window) is wired up by the host against the rendered markup.

use lumen_desktop::{ShellEngine, WindowKey};
use crate::launcher::open_app;
use crate::markup::escape;
use crate::menu::MenuAction;

/// One entry from the picked directory tree
#[derive(Clone, Debug)]
pub enum FileNode {
    Directory {
        name: String,
        children: Vec<FileNode>,
    },
    File {
        name: String,
    },
}

impl FileNode {
    pub fn name(&self) -> &str {
        match self {
            FileNode::Directory { name, .. } => name,
            FileNode::File { name } => name,
        }
    }

    fn is_directory(&self) -> bool {
        matches!(self, FileNode::Directory { .. })
    }
}

/// Entries hidden from the tree: dotfiles and well-known noise folders
fn is_skipped(name: &str) -> bool {
    name.starts_with('.')
        || name == "node_modules"
        || name == "$RECYCLE.BIN"
        || name == "System Volume Information"
}

/// Icon for a file name, chosen by extension
pub fn icon_for(name: &str) -> &'static str {
    let extension = match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => ext.to_ascii_lowercase(),
        _ => return "📄",
    };
    match extension.as_str() {
        "txt" | "md" => "📝",
        "js" | "rs" | "py" | "sh" => "📜",
        "html" => "🌐",
        "css" => "🎨",
        "json" | "toml" | "yaml" | "yml" | "xml" => "⚙️",
        "png" | "jpg" | "jpeg" | "gif" | "bmp" | "webp" | "svg" | "ico" => "🖼️",
        "mp3" | "wav" | "ogg" | "flac" => "🎵",
        "mp4" | "webm" | "mov" | "mkv" => "🎬",
        "zip" | "rar" | "gz" => "📦",
        "pdf" => "📚",
        _ => "📄",
    }
}

/// Sort: directories before files, alphabetical within each group
fn sorted(nodes: &[FileNode]) -> Vec<&FileNode> {
    let mut out: Vec<&FileNode> = nodes.iter().filter(|n| !is_skipped(n.name())).collect();
    out.sort_by(|a, b| {
        b.is_directory()
            .cmp(&a.is_directory())
            .then_with(|| a.name().to_lowercase().cmp(&b.name().to_lowercase()))
    });
    out
}

/// Render a node list as a nested list
pub fn tree_markup(nodes: &[FileNode]) -> String {
    let mut out = String::from("<ul>");
    for node in sorted(nodes) {
        match node {
            FileNode::Directory { name, children } => {
                out.push_str(&format!(
                    "<li class=\"directory-li\" data-name=\"{name}\">\
                     <span class=\"folder\"><span class=\"toggle\">▶</span> 📁 {name}</span>{}</li>",
                    tree_markup(children),
                    name = escape(name),
                ));
            }
            FileNode::File { name } => {
                out.push_str(&format!(
                    "<li class=\"file-li\" data-name=\"{name}\">\
                     <span class=\"file\">{icon} {name}</span></li>",
                    icon = icon_for(name),
                    name = escape(name),
                ));
            }
        }
    }
    out.push_str("</ul>");
    out
}

/// Open (or focus) the file browser window
pub fn open(shell: &mut ShellEngine, nodes: &[FileNode], now_ms: f64) -> WindowKey {
    let content = if nodes.is_empty() {
        "<p class=\"files-empty\">Pick a folder to browse.</p>".to_string()
    } else {
        tree_markup(nodes)
    };
    open_app(shell, MenuAction::Files, content, now_ms)
}

// Category resolver: maps a filename to the folder it lives in.
// The mapping is recomputed from the extension on every call; nothing
// remembers where a file was put.

use std::fmt;
use std::path::Path;

/// Storage folder a file is routed to, derived from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Texts,
    Data,
    Logs,
    Misc,
}

impl Category {
    pub const ALL: [Category; 4] = [Category::Texts, Category::Data, Category::Logs, Category::Misc];

    /// Folder name under the base directory.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Texts => "texts",
            Category::Data => "data",
            Category::Logs => "logs",
            Category::Misc => "misc",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve the category of `filename` from its extension, ignoring case.
/// Unknown, empty or missing extensions fall back to `Misc`.
pub fn resolve_category(filename: &str) -> Category {
    let ext = Path::new(filename)
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase());

    match ext.as_deref() {
        Some("txt") | Some("md") => Category::Texts,
        Some("json") | Some("csv") => Category::Data,
        Some("log") => Category::Logs,
        _ => Category::Misc,
    }
}

use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

#[derive(Debug)]
pub enum ScanError {
    Io(std::io::Error),
    InvalidPath(PathBuf),
}

impl From<std::io::Error> for ScanError {
    fn from(err: std::io::Error) -> Self {
        ScanError::Io(err)
    }
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanError::Io(e) => write!(f, "IO error: {}", e),
            ScanError::InvalidPath(p) => write!(f, "Invalid path: {}", p.display()),
        }
    }
}

impl std::error::Error for ScanError {}

/// Walks a content directory and derives the route each markdown page
/// gets from the generator: `dir/README.md` becomes `/dir/`, any other
/// `name.md` becomes `/name.html`.
pub struct ContentScanner {
    content_dir: PathBuf,
}

impl ContentScanner {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            content_dir: path.as_ref().to_path_buf(),
        }
    }

    pub fn routes(&self) -> Result<HashSet<String>, ScanError> {
        let mut routes = HashSet::new();

        for entry in WalkDir::new(&self.content_dir)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !entry.file_type().is_file() {
                continue;
            }
            let is_markdown = path
                .extension()
                .map(|ext| ext.eq_ignore_ascii_case("md"))
                .unwrap_or(false);
            if !is_markdown {
                continue;
            }

            let relative = path
                .strip_prefix(&self.content_dir)
                .map_err(|_| ScanError::InvalidPath(path.to_path_buf()))?;
            routes.insert(route_for(relative));
        }

        Ok(routes)
    }
}

fn route_for(relative: &Path) -> String {
    let file_name = relative
        .file_name()
        .map(|name| name.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    let mut base = String::from("/");
    if let Some(parent) = relative.parent() {
        for component in parent.components() {
            base.push_str(&component.as_os_str().to_string_lossy());
            base.push('/');
        }
    }

    if file_name == "readme.md" || file_name == "index.md" {
        base
    } else {
        let stem = relative
            .file_stem()
            .map(|stem| stem.to_string_lossy().to_string())
            .unwrap_or_default();
        format!("{}{}.html", base, stem)
    }
}

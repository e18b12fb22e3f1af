//! CSV file picker with a preview of the highlighted file.
//!
//! Only directories and files with a [`SERIES_EXTENSIONS`] extension are
//! listed. Moving the cursor onto a file parses it with [`CsvReader`] so the
//! user sees what a load would produce before committing to it.

pub mod ui;

use crate::data::CsvReader;
use std::fs;
use std::path::{Path, PathBuf};

/// Extensions listed by the browser (case-insensitive).
pub const SERIES_EXTENSIONS: &[&str] = &["csv", "txt"];

/// Number of series names kept in a preview.
pub const PREVIEW_NAMES: usize = 8;

/// Files larger than this are listed but not parsed for a preview.
pub const PREVIEW_MAX_BYTES: u64 = 4 * 1024 * 1024;

/// Kind of a listed entry. The ordering is the listing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EntryKind {
    /// The `..` entry.
    Parent,
    /// A subdirectory.
    Dir,
    /// A file that may hold series.
    SeriesFile,
}

/// One listed entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Full path.
    pub path: PathBuf,
    /// Label shown in the list.
    pub name: String,
    /// Entry kind.
    pub kind: EntryKind,
}

/// What loading the highlighted file would yield.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilePreview {
    /// The file parses.
    Series {
        /// Number of series in the file.
        count: usize,
        /// Longest series length, the `x_to` a load would set.
        longest: usize,
        /// Leading series names, at most [`PREVIEW_NAMES`].
        names: Vec<String>,
    },
    /// The file cannot be loaded; holds the reason.
    Unreadable(String),
}

impl FilePreview {
    /// Build the preview for a file on disk.
    pub fn of(path: &Path) -> Self {
        if let Ok(meta) = fs::metadata(path) {
            if meta.len() > PREVIEW_MAX_BYTES {
                return Self::Unreadable(format!("{} bytes, too large to preview", meta.len()));
            }
        }

        match CsvReader::read_file(path) {
            Ok(series) => Self::Series {
                count: series.len(),
                longest: series.iter().map(|s| s.len()).max().unwrap_or(0),
                names: series
                    .iter()
                    .take(PREVIEW_NAMES)
                    .map(|s| s.name().to_string())
                    .collect(),
            },
            Err(e) => Self::Unreadable(e.to_string()),
        }
    }
}

/// File browser state.
#[derive(Debug)]
pub struct FileBrowserState {
    /// Directory being listed.
    pub current_dir: PathBuf,
    /// Listed entries, `..` first, then directories, then files.
    pub entries: Vec<FileEntry>,
    /// Highlighted entry.
    pub cursor: usize,
    /// List dot-prefixed entries too.
    pub show_hidden: bool,
    preview: Option<FilePreview>,
}

impl FileBrowserState {
    /// Create a browser rooted at the working directory.
    pub fn new() -> Self {
        let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::at(current_dir)
    }

    /// Create a browser rooted at `dir`. Nothing is listed until [`refresh`](Self::refresh).
    pub fn at(dir: PathBuf) -> Self {
        Self {
            current_dir: dir,
            entries: Vec::new(),
            cursor: 0,
            show_hidden: false,
            preview: None,
        }
    }

    /// Re-list the current directory and put the cursor on the first entry.
    pub fn refresh(&mut self) {
        self.entries = list_dir(&self.current_dir, self.show_hidden);
        self.cursor = 0;
        self.update_preview();
    }

    /// Move the cursor by `delta` rows, clamped to the list.
    pub fn move_by(&mut self, delta: isize) {
        let last = self.entries.len().saturating_sub(1);
        let target = self.cursor.saturating_add_signed(delta).min(last);
        if target != self.cursor {
            self.cursor = target;
            self.update_preview();
        }
    }

    /// Highlighted entry.
    pub fn current_entry(&self) -> Option<&FileEntry> {
        self.entries.get(self.cursor)
    }

    /// Preview of the highlighted file, `None` on directories.
    pub fn preview(&self) -> Option<&FilePreview> {
        self.preview.as_ref()
    }

    /// Enter the highlighted directory, or return the highlighted file.
    pub fn activate(&mut self) -> Option<PathBuf> {
        let entry = self.current_entry()?;
        let (kind, path) = (entry.kind, entry.path.clone());
        match kind {
            EntryKind::SeriesFile => Some(path),
            EntryKind::Parent | EntryKind::Dir => {
                self.current_dir = path;
                self.refresh();
                None
            },
        }
    }

    /// List the parent directory.
    pub fn go_to_parent(&mut self) {
        if let Some(parent) = self.current_dir.parent() {
            self.current_dir = parent.to_path_buf();
            self.refresh();
        }
    }

    /// Flip hidden-entry listing and re-list.
    pub fn toggle_hidden(&mut self) {
        self.show_hidden = !self.show_hidden;
        self.refresh();
    }

    fn update_preview(&mut self) {
        self.preview = self
            .current_entry()
            .filter(|e| e.kind == EntryKind::SeriesFile)
            .map(|e| FilePreview::of(&e.path));
    }
}

impl Default for FileBrowserState {
    fn default() -> Self {
        Self::new()
    }
}

/// Check if a path has one of the [`SERIES_EXTENSIONS`].
pub fn is_series_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| SERIES_EXTENSIONS.iter().any(|k| e.eq_ignore_ascii_case(k)))
}

fn list_dir(dir: &Path, show_hidden: bool) -> Vec<FileEntry> {
    let mut entries: Vec<FileEntry> = dir
        .parent()
        .map(|parent| FileEntry {
            path: parent.to_path_buf(),
            name: "..".to_string(),
            kind: EntryKind::Parent,
        })
        .into_iter()
        .collect();

    let read = match fs::read_dir(dir) {
        Ok(read) => read,
        Err(e) => {
            tracing::warn!("Cannot list {}: {}", dir.display(), e);
            return entries;
        },
    };

    entries.extend(read.flatten().filter_map(|entry| {
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().into_owned();
        if !show_hidden && name.starts_with('.') {
            return None;
        }
        // fs::metadata follows symlinks, so a link to a directory is listed as one
        let kind = if fs::metadata(&path).is_ok_and(|m| m.is_dir()) {
            EntryKind::Dir
        } else if is_series_file(&path) {
            EntryKind::SeriesFile
        } else {
            return None;
        };
        Some(FileEntry { path, name, kind })
    }));

    entries.sort_by_key(|e| (e.kind, e.name.to_lowercase()));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn names(browser: &FileBrowserState) -> Vec<&str> {
        browser.entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_is_series_file() {
        assert!(is_series_file(Path::new("a.csv")));
        assert!(is_series_file(Path::new("a.CSV")));
        assert!(is_series_file(Path::new("dir/a.txt")));
        assert!(!is_series_file(Path::new("a.nc")));
        assert!(!is_series_file(Path::new("csv")));
    }

    #[test]
    fn test_refresh_lists_dirs_then_series_files() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("zdir")).unwrap();
        fs::write(dir.path().join("b.csv"), "a,1\n").unwrap();
        fs::write(dir.path().join("A.txt"), "a,1\n").unwrap();
        fs::write(dir.path().join("image.png"), "").unwrap();
        fs::write(dir.path().join(".hidden.csv"), "").unwrap();

        let mut browser = FileBrowserState::at(dir.path().to_path_buf());
        browser.refresh();
        assert_eq!(names(&browser), vec!["..", "zdir", "A.txt", "b.csv"]);
        assert_eq!(browser.entries[1].kind, EntryKind::Dir);

        browser.toggle_hidden();
        assert!(names(&browser).contains(&".hidden.csv"));
    }

    #[test]
    fn test_preview_follows_cursor() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("a.csv"), "Temperature,1,2,3\nPressure,4\nEmpty\n").unwrap();
        fs::write(dir.path().join("b.csv"), "x,1\ny,two\n").unwrap();

        let mut browser = FileBrowserState::at(dir.path().to_path_buf());
        browser.refresh();
        assert_eq!(browser.preview(), None);

        browser.move_by(1);
        assert_eq!(browser.current_entry().unwrap().name, "sub");
        assert_eq!(browser.preview(), None);

        browser.move_by(1);
        assert_eq!(
            browser.preview(),
            Some(&FilePreview::Series {
                count: 3,
                longest: 3,
                names: vec!["Temperature".into(), "Pressure".into(), "Empty".into()],
            })
        );

        browser.move_by(1);
        assert_eq!(
            browser.preview(),
            Some(&FilePreview::Unreadable(
                "Row 2, column 2: 'two' is not an integer".into()
            ))
        );
    }

    #[test]
    fn test_preview_keeps_leading_names_only() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("many.csv");
        let body: String = (0..20).map(|i| format!("s{},{}\n", i, i)).collect();
        fs::write(&path, body).unwrap();

        match FilePreview::of(&path) {
            FilePreview::Series { count, names, .. } => {
                assert_eq!(count, 20);
                assert_eq!(names.len(), PREVIEW_NAMES);
                assert_eq!(names[0], "s0");
            },
            other => panic!("unexpected preview: {other:?}"),
        }
    }

    #[test]
    fn test_move_by_is_clamped() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.csv"), "a,1\n").unwrap();

        let mut browser = FileBrowserState::at(dir.path().to_path_buf());
        browser.refresh();
        browser.move_by(-3);
        assert_eq!(browser.cursor, 0);
        browser.move_by(10);
        assert_eq!(browser.cursor, 1);
    }

    #[test]
    fn test_activate_returns_files_and_enters_dirs() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub").join("data.csv"), "a,1\n").unwrap();

        let mut browser = FileBrowserState::at(dir.path().to_path_buf());
        browser.refresh();
        browser.move_by(1);
        assert_eq!(browser.activate(), None);
        assert_eq!(browser.current_dir, dir.path().join("sub"));

        browser.move_by(1);
        assert_eq!(
            browser.activate(),
            Some(dir.path().join("sub").join("data.csv"))
        );
    }
}

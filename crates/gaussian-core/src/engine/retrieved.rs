use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A host folder holding the files retrieved after a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetrievedFolder {
    root: PathBuf,
}

impl RetrievedFolder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Names of the regular files directly inside the folder, sorted.
    ///
    /// Symlinks are followed, so a link to a regular file is listed.
    pub fn list_files(&self) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if entry.path().is_file() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        names.sort();
        Ok(names)
    }

    pub fn abs_path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn list_files_returns_sorted_regular_files_only() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("aiida.log"), "log").unwrap();
        fs::write(dir.path().join("aiida.err"), "").unwrap();
        fs::create_dir(dir.path().join("scratch")).unwrap();

        let folder = RetrievedFolder::new(dir.path());
        assert_eq!(folder.list_files().unwrap(), vec!["aiida.err", "aiida.log"]);
    }

    #[cfg(unix)]
    #[test]
    fn list_files_includes_symlinked_files() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("scratch.log");
        fs::write(&target, "log").unwrap();
        std::os::unix::fs::symlink(&target, dir.path().join("aiida.log")).unwrap();
        std::os::unix::fs::symlink(dir.path().join("gone"), dir.path().join("dangling")).unwrap();

        let folder = RetrievedFolder::new(dir.path());
        assert_eq!(folder.list_files().unwrap(), vec!["aiida.log", "scratch.log"]);
    }

    #[test]
    fn list_files_fails_for_missing_folder() {
        let dir = tempdir().unwrap();
        let folder = RetrievedFolder::new(dir.path().join("gone"));
        assert!(folder.list_files().is_err());
    }

    #[test]
    fn abs_path_joins_onto_root() {
        let folder = RetrievedFolder::new("/tmp/retrieved");
        assert_eq!(folder.root(), Path::new("/tmp/retrieved"));
        assert_eq!(
            folder.abs_path("aiida.log"),
            PathBuf::from("/tmp/retrieved/aiida.log")
        );
    }
}

//! Shared helpers for naming and classifying entries

use std::path::Path;

/// Base name of a path. Paths without a final component (`.`, `/`) are
/// named by the path itself.
pub fn entry_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}

/// A dotfile is hidden. No platform-specific attributes are consulted.
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// Last `.`-delimited suffix of a name, dot included.
///
/// A leading dot counts too, so `.bashrc` has the extension `.bashrc`.
pub fn extension_of(name: &str) -> Option<&str> {
    name.rfind('.').map(|i| &name[i..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_hidden() {
        assert!(is_hidden(".hidden"));
        assert!(is_hidden(".file.txt"));
        assert!(is_hidden("."));
        assert!(is_hidden(".."));
        assert!(!is_hidden("visible"));
        assert!(!is_hidden("file.txt"));
        assert!(!is_hidden(""));
    }

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of("main.go"), Some(".go"));
        assert_eq!(extension_of("archive.tar.gz"), Some(".gz"));
        assert_eq!(extension_of(".bashrc"), Some(".bashrc"));
        assert_eq!(extension_of("trailing."), Some("."));
        assert_eq!(extension_of("README"), None);
    }

    #[test]
    fn test_entry_name() {
        assert_eq!(entry_name(Path::new("/tmp/root/a.txt")), "a.txt");
        assert_eq!(entry_name(Path::new("sub/")), "sub");
        assert_eq!(entry_name(Path::new(".")), ".");
        assert_eq!(entry_name(Path::new("/")), "/");
    }
}

use std::path::Path;

/// `path` relative to `root` with `/` separators; `.` when they are equal.
///
/// Paths outside `root` are returned whole, still with `/` separators.
#[must_use]
pub fn relative_slash_path(path: &Path, root: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    let joined = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .filter(|part| part != ".")
        .collect::<Vec<_>>()
        .join("/");

    if joined.is_empty() {
        ".".to_string()
    } else {
        joined.replace('\\', "/")
    }
}

/// Directory part of a relative `/`-separated file path, `.` at the root.
#[must_use]
pub fn parent_dir(relative: &str) -> &str {
    match relative.rfind('/') {
        Some(at) if at > 0 => &relative[..at],
        _ => ".",
    }
}

/// `dir` followed by each of its ancestors, ending with `.`.
///
/// `a/b/c` yields `a/b/c`, `a/b`, `a`, `.`.
#[must_use]
pub fn self_and_ancestors(dir: &str) -> Vec<&str> {
    let mut dirs = Vec::new();
    let mut current = dir;
    while current != "." && !current.is_empty() {
        dirs.push(current);
        current = parent_dir(current);
    }
    dirs.push(".");
    dirs
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn relative_path_under_root() {
        let root = PathBuf::from("/home/user/project");
        let file = root.join("src").join("main.rs");
        assert_eq!(relative_slash_path(&file, &root), "src/main.rs");
    }

    #[test]
    fn relative_path_of_root_is_dot() {
        let root = PathBuf::from("/home/user/project");
        assert_eq!(relative_slash_path(&root, &root), ".");
    }

    #[test]
    fn relative_path_strips_current_dir_components() {
        let root = PathBuf::from(".");
        assert_eq!(relative_slash_path(Path::new("./lib/a.rs"), &root), "lib/a.rs");
    }

    #[test]
    fn path_outside_root_is_kept() {
        let root = PathBuf::from("/home/user/project");
        let result = relative_slash_path(Path::new("/home/other/file.rs"), &root);
        assert!(result.ends_with("home/other/file.rs"));
    }

    #[test]
    fn parent_dir_of_nested_and_top_level_files() {
        assert_eq!(parent_dir("src/output/text.rs"), "src/output");
        assert_eq!(parent_dir("main.rs"), ".");
    }

    #[test]
    fn ancestors_walk_up_to_root() {
        assert_eq!(self_and_ancestors("a/b/c"), vec!["a/b/c", "a/b", "a", "."]);
        assert_eq!(self_and_ancestors("."), vec!["."]);
    }
}

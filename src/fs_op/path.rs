use std::path::{Component, Path, PathBuf};

/// Lexically normalise `path`.
///
/// Behaviour:
/// - `.` segments and redundant separators are dropped.
/// - `..` removes the preceding normal segment; at the root it is dropped,
///   and at the start of a relative path it is kept.
/// - The filesystem is never consulted, so symlinks are not resolved and no
///   directory is created.
/// - An empty result becomes `.`.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut out: Vec<Component<'_>> = Vec::new();
    for comp in path.components() {
        match comp {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(comp),
            },
            other => out.push(other),
        }
    }

    if out.is_empty() {
        return PathBuf::from(".");
    }
    out.iter().collect()
}

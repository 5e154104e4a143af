//! Path templating
//!
//! The same conditional templating pass, followed by resolution of the
//! rendered string into an absolute, lexically normalized path. Useful for
//! splicing build directories into commands without caring where the
//! current directory is.

use crate::template::{render, Value};
use std::env;
use std::path::{Component, Path, PathBuf};

/// Render a path template and resolve the result to an absolute path
///
/// The inputs follow the same tagged-template shape as
/// [`render`](crate::template::render()); the rendered string is then
/// passed through [`resolve_path`].
pub fn resolve(fragments: &[&str], values: &[Value]) -> PathBuf {
    resolve_path(&render(fragments, values))
}

/// Resolve a path string to an absolute, lexically normalized path
///
/// Relative paths are joined onto the current directory. `.` components
/// drop, `..` components pop, and popping past the root is a no-op. No
/// filesystem access happens beyond reading the current directory, so the
/// result may name a path that does not exist.
pub fn resolve_path(path: &str) -> PathBuf {
    let path = Path::new(path);
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        current_dir().join(path)
    };

    let mut resolved = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            other => resolved.push(other.as_os_str()),
        }
    }
    resolved
}

/// Current working directory, falling back to "." when unreadable
fn current_dir() -> PathBuf {
    env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

/// Build an absolute path from alternating literals and values
///
/// The template syntax matches `sh!`; the rendered string is resolved
/// against the current directory and lexically normalized. Resolved paths
/// convert back into values, so templates nest:
///
/// ```
/// let dist = shtpl::resolve!("python/dist");
/// let cmake = shtpl::resolve!({dist} "/cmake");
/// assert_eq!(cmake, std::env::current_dir().unwrap().join("python/dist/cmake"));
/// ```
#[macro_export]
macro_rules! resolve {
    ($($tokens:tt)*) => {{
        let mut template = $crate::template::Template::new();
        $crate::sh!(@push template $($tokens)*);
        $crate::template::resolve_path(&template.render())
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_path_resolves_against_current_dir() {
        let cwd = env::current_dir().unwrap();
        assert_eq!(resolve_path("a/b/c"), cwd.join("a/b/c"));
    }

    #[test]
    fn test_absolute_path_passes_through() {
        let cwd = env::current_dir().unwrap();
        let text = cwd.display().to_string();
        assert_eq!(resolve_path(&text), cwd);
    }

    #[test]
    fn test_parent_components_pop() {
        let cwd = env::current_dir().unwrap();
        assert_eq!(resolve_path("a/b/../c"), cwd.join("a/c"));
    }

    #[test]
    fn test_current_dir_components_drop() {
        let cwd = env::current_dir().unwrap();
        assert_eq!(resolve_path("a/./b"), cwd.join("a/b"));
    }

    #[test]
    fn test_popping_past_root_stays_at_root() {
        assert_eq!(resolve_path("/../.."), PathBuf::from("/"));
    }

    #[test]
    fn test_resolve_with_values() {
        let cwd = env::current_dir().unwrap();
        let path = resolve(&["", "/../cpp"], &[Value::from(cwd.join("sub"))]);
        assert_eq!(path, cwd.join("cpp"));
    }

    #[test]
    fn test_resolve_macro_plain() {
        let cwd = env::current_dir().unwrap();
        assert_eq!(resolve!("a/b/c"), cwd.join("a/b/c"));
    }

    #[test]
    fn test_resolve_macro_nests() {
        let cwd = env::current_dir().unwrap();
        let dist = resolve!("python/dist");
        assert_eq!(resolve!({dist} "/obj"), cwd.join("python/dist/obj"));
    }
}

use serde_json::Value;
use std::path::Path;

use crate::error::Error;

/// Conventional entry filenames, checked in priority order.
const START_CANDIDATES: &[&str] = &["server.js", "app.js", "index.js"];

/// Launcher prefix stripped from the manifest's start command.
const NODE_PREFIX: &str = "node ";

/// Resolve the application's entry file: the package.json start script wins;
/// otherwise the first conventional entry file that exists. The fallback scan
/// is strictly ordered and stops at the first match.
pub fn resolve_start_file(dir: &Path) -> Result<String, Error> {
    if let Some(start_file) = manifest_start_file(dir) {
        return Ok(start_file);
    }

    for candidate in START_CANDIDATES {
        if dir.join(candidate).is_file() {
            return Ok((*candidate).to_string());
        }
    }

    Err(Error::StartFileNotFound)
}

fn manifest_start_file(dir: &Path) -> Option<String> {
    let content = std::fs::read_to_string(dir.join("package.json")).ok()?;
    let manifest: Value = serde_json::from_str(&content).ok()?;
    let start = manifest.pointer("/scripts/start")?.as_str()?.trim();

    let start_file = start.strip_prefix(NODE_PREFIX).unwrap_or(start).trim();
    if start_file.is_empty() {
        return None;
    }
    Some(start_file.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_manifest(dir: &Path, start: &str) {
        fs::write(
            dir.join("package.json"),
            format!(r#"{{ "name": "demo", "scripts": {{ "start": "{}" }} }}"#, start),
        )
        .unwrap();
    }

    #[test]
    fn test_manifest_start_script_wins() {
        let dir = tempfile::tempdir().unwrap();
        write_manifest(dir.path(), "node main.js");
        fs::write(dir.path().join("server.js"), "").unwrap();

        assert_eq!(resolve_start_file(dir.path()).unwrap(), "main.js");
    }

    #[test]
    fn test_non_node_start_command_used_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        write_manifest(dir.path(), "nodemon watch.js");

        assert_eq!(resolve_start_file(dir.path()).unwrap(), "nodemon watch.js");
    }

    #[test]
    fn test_fallback_order_prefers_server_js() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.js"), "").unwrap();
        fs::write(dir.path().join("app.js"), "").unwrap();
        fs::write(dir.path().join("server.js"), "").unwrap();

        assert_eq!(resolve_start_file(dir.path()).unwrap(), "server.js");
    }

    #[test]
    fn test_fallback_used_when_manifest_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("package.json"), "{ not json").unwrap();
        fs::write(dir.path().join("app.js"), "").unwrap();

        assert_eq!(resolve_start_file(dir.path()).unwrap(), "app.js");
    }

    #[test]
    fn test_no_start_file_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = resolve_start_file(dir.path()).unwrap_err();
        assert!(matches!(err, Error::StartFileNotFound));
    }
}

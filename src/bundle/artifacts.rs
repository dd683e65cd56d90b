use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use super::start_file::resolve_start_file;
use crate::cli::progress::print_success;

pub const BOOTSTRAP_FILE_NAME: &str = "AzupBootstrap.js";
pub const WEB_CONFIG_FILE_NAME: &str = "web.config";
pub const PROCESS_FILE_NAME: &str = "process.json";

const BOOTSTRAP_TEMPLATE: &str = include_str!("../../assets/bootstrap.js");
const WEB_CONFIG: &str = include_str!("../../assets/web.config");
const PROCESS_JSON: &str = include_str!("../../assets/process.json");

const STARTUP_FILE_PLACEHOLDER: &str = "{{STARTUP_FILE}}";

/// The generated deploy-time files: the bootstrap launcher plus one platform
/// descriptor. Owned by a single deploy; the guard removes both files when
/// `remove` is called or, failing that, when it is dropped, so an aborted
/// upload still leaves the working directory clean.
#[derive(Debug)]
pub struct ConfigArtifacts {
    paths: Vec<PathBuf>,
    armed: bool,
}

impl ConfigArtifacts {
    /// Resolve the entry file and write the bootstrap script plus the
    /// platform descriptor (`process.json` on Linux, `web.config` otherwise)
    /// into `dir`.
    pub fn write(dir: &Path, linux: bool) -> Result<Self> {
        let start_file = resolve_start_file(dir)?;
        print_success(&format!("Set app start file: {}", start_file));

        let bootstrap = BOOTSTRAP_TEMPLATE.replace(STARTUP_FILE_PLACEHOLDER, &start_file);
        let bootstrap_path = dir.join(BOOTSTRAP_FILE_NAME);
        std::fs::write(&bootstrap_path, bootstrap)
            .with_context(|| format!("Failed to write {}", bootstrap_path.display()))?;

        let (descriptor_name, descriptor) = if linux {
            (PROCESS_FILE_NAME, PROCESS_JSON)
        } else {
            (WEB_CONFIG_FILE_NAME, WEB_CONFIG)
        };
        let descriptor_path = dir.join(descriptor_name);
        std::fs::write(&descriptor_path, descriptor)
            .with_context(|| format!("Failed to write {}", descriptor_path.display()))?;

        Ok(Self {
            paths: vec![descriptor_path, bootstrap_path],
            armed: true,
        })
    }

    /// Delete the generated files. Errors are reported to the caller; the
    /// drop guard is disarmed either way.
    pub fn remove(mut self) -> Result<()> {
        self.armed = false;
        for path in &self.paths {
            std::fs::remove_file(path)
                .with_context(|| format!("Failed to remove {}", path.display()))?;
        }
        Ok(())
    }
}

impl Drop for ConfigArtifacts {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        for path in &self.paths {
            if let Err(err) = std::fs::remove_file(path) {
                tracing::debug!(path = %path.display(), %err, "leaving generated file behind");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn project_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("package.json"),
            r#"{ "scripts": { "start": "node index.js" } }"#,
        )
        .unwrap();
        fs::write(dir.path().join("index.js"), "module.exports = {};\n").unwrap();
        dir
    }

    #[test]
    fn test_write_renders_bootstrap_and_descriptor() {
        let dir = project_dir();
        let artifacts = ConfigArtifacts::write(dir.path(), false).unwrap();

        let bootstrap = fs::read_to_string(dir.path().join(BOOTSTRAP_FILE_NAME)).unwrap();
        assert!(bootstrap.contains("require(\"./index.js\")"));
        assert!(!bootstrap.contains(STARTUP_FILE_PLACEHOLDER));
        assert!(dir.path().join(WEB_CONFIG_FILE_NAME).exists());
        assert!(!dir.path().join(PROCESS_FILE_NAME).exists());

        artifacts.remove().unwrap();
    }

    #[test]
    fn test_linux_writes_process_descriptor() {
        let dir = project_dir();
        let artifacts = ConfigArtifacts::write(dir.path(), true).unwrap();

        assert!(dir.path().join(PROCESS_FILE_NAME).exists());
        assert!(!dir.path().join(WEB_CONFIG_FILE_NAME).exists());

        artifacts.remove().unwrap();
    }

    #[test]
    fn test_remove_deletes_both_files() {
        let dir = project_dir();
        let artifacts = ConfigArtifacts::write(dir.path(), false).unwrap();
        artifacts.remove().unwrap();

        assert!(!dir.path().join(BOOTSTRAP_FILE_NAME).exists());
        assert!(!dir.path().join(WEB_CONFIG_FILE_NAME).exists());
        assert!(dir.path().join("index.js").exists());
    }

    #[test]
    fn test_drop_cleans_up_on_abandoned_deploy() {
        let dir = project_dir();
        {
            let _artifacts = ConfigArtifacts::write(dir.path(), false).unwrap();
            assert!(dir.path().join(BOOTSTRAP_FILE_NAME).exists());
        }
        assert!(!dir.path().join(BOOTSTRAP_FILE_NAME).exists());
        assert!(!dir.path().join(WEB_CONFIG_FILE_NAME).exists());
    }
}

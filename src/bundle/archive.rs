use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::Error;

/// Zip the contents of `src` into `dest`. Entry names are relative to `src`;
/// the archive itself is skipped when `dest` lands inside `src`, and symlinks
/// are not followed.
pub fn zip_directory(src: &Path, dest: &Path) -> Result<(), Error> {
    zip_directory_inner(src, dest).map_err(|e| Error::Upload(e.to_string()))
}

fn zip_directory_inner(src: &Path, dest: &Path) -> anyhow::Result<()> {
    let file = File::create(dest)?;
    let mut writer = ZipWriter::new(BufWriter::new(file));
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .unix_permissions(0o644);

    for entry in WalkDir::new(src).follow_links(false) {
        let entry = entry?;
        let path = entry.path();
        if path == src || path == dest {
            continue;
        }

        let relative = path.strip_prefix(src)?;
        let name = relative.to_string_lossy().replace('\\', "/");

        if entry.file_type().is_dir() {
            writer.add_directory(name, options)?;
        } else if entry.file_type().is_file() {
            writer.start_file(name, options)?;
            let mut source = File::open(path)?;
            io::copy(&mut source, &mut writer)?;
        }
    }

    writer.finish()?.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_archive_contains_tree_but_not_itself() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.js"), "console.log('hi');\n").unwrap();
        fs::create_dir(dir.path().join("lib")).unwrap();
        fs::write(dir.path().join("lib/util.js"), "module.exports = {};\n").unwrap();

        let archive_path = dir.path().join("demo.zip");
        zip_directory(dir.path(), &archive_path).unwrap();

        let archive = File::open(&archive_path).unwrap();
        let mut zip = zip::ZipArchive::new(archive).unwrap();
        let names: Vec<String> = (0..zip.len())
            .map(|i| zip.by_index(i).unwrap().name().to_string())
            .collect();

        assert!(names.contains(&"index.js".to_string()));
        assert!(names.contains(&"lib/util.js".to_string()));
        assert!(!names.iter().any(|n| n.ends_with("demo.zip")));
    }
}

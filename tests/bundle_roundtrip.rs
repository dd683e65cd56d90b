// tests/bundle_roundtrip.rs
//
// The deploy-set round trip from the command's point of view: a project with
// a manifest start script gets a bootstrap file referencing its entry file
// plus the non-Linux descriptor, the zip bundle carries the tree without the
// archive itself, and cleanup leaves the directory as it started.
use std::fs;
use std::fs::File;

use azup::bundle::{zip_directory, ConfigArtifacts};
use tempfile::TempDir;

fn node_project() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("package.json"),
        r#"{ "name": "demo", "scripts": { "start": "node index.js" } }"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("index.js"),
        "require('http').createServer().listen(process.env.PORT);\n",
    )
    .unwrap();
    dir
}

#[test]
fn test_deploy_set_for_manifest_project() {
    let dir = node_project();

    let artifacts = ConfigArtifacts::write(dir.path(), false).unwrap();

    let bootstrap = fs::read_to_string(dir.path().join("AzupBootstrap.js")).unwrap();
    assert!(bootstrap.contains("index.js"));
    assert!(dir.path().join("web.config").exists());
    assert!(!dir.path().join("process.json").exists());

    let archive_path = dir.path().join("demo.zip");
    zip_directory(dir.path(), &archive_path).unwrap();

    let mut zip = zip::ZipArchive::new(File::open(&archive_path).unwrap()).unwrap();
    let names: Vec<String> = (0..zip.len())
        .map(|i| zip.by_index(i).unwrap().name().to_string())
        .collect();
    assert!(names.contains(&"index.js".to_string()));
    assert!(names.contains(&"package.json".to_string()));
    assert!(names.contains(&"AzupBootstrap.js".to_string()));
    assert!(names.contains(&"web.config".to_string()));
    assert!(!names.iter().any(|n| n.ends_with(".zip")));

    // Success path: archive removed, then cleanup.
    fs::remove_file(&archive_path).unwrap();
    artifacts.remove().unwrap();

    let leftovers: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    let mut expected = vec!["index.js".to_string(), "package.json".to_string()];
    let mut actual = leftovers.clone();
    expected.sort();
    actual.sort();
    assert_eq!(actual, expected, "working directory should be pristine");
}

#[test]
fn test_cleanup_runs_when_upload_never_happens() {
    let dir = node_project();

    {
        let _artifacts = ConfigArtifacts::write(dir.path(), false).unwrap();
        assert!(dir.path().join("AzupBootstrap.js").exists());
        // Simulates an upload failure unwinding the deploy.
    }

    assert!(!dir.path().join("AzupBootstrap.js").exists());
    assert!(!dir.path().join("web.config").exists());
    assert!(dir.path().join("index.js").exists());
}

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub const WIDGET_MANIFEST: &str = r#"{
    "name": "widget",
    "version": "1.0.0",
    "description": "A widget",
    "author": "Jane Doe"
}
"#;

/// Creates a project root holding `manifest` as its `package.json`.
pub fn project_with_manifest(manifest: &str) -> tempfile::TempDir {
    let tmp_dir = tempfile::tempdir().unwrap();
    fs::write(tmp_dir.path().join("package.json"), manifest).unwrap();
    tmp_dir
}

/// Writes a hand-made template directory containing `files` with deterministic content.
pub fn write_template_files(project_root: &Path, files: &[&str]) {
    for file in files {
        let path = project_root.join(".template").join(file);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, format!("template content of {file}\n")).unwrap();
    }
}

/// Relative paths of every file under `dir`, sorted.
pub fn list_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<_> = WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.path().is_file())
        .map(|e| e.path().strip_prefix(dir).unwrap().to_path_buf())
        .collect();
    files.sort();
    files
}

/// Recursively copies `source` into `dest`.
pub fn snapshot_dir(source: &Path, dest: &Path) {
    for file in list_files(source) {
        let target = dest.join(&file);
        fs::create_dir_all(target.parent().unwrap()).unwrap();
        fs::copy(source.join(&file), target).unwrap();
    }
}

/// Prints the files that differ between two directories.
///
/// # Arguments
/// * `dir1` - The first directory to compare (actual output).
/// * `dir2` - The second directory to compare (expected output).
pub fn print_dir_diff(dir1: &Path, dir2: &Path) {
    let files1 = list_files(dir1);
    let files2 = list_files(dir2);

    println!("\n=== Directory Comparison ===");
    println!("Actual output:   {:?}", dir1);
    println!("Expected output: {:?}", dir2);

    for file in files1.iter().filter(|f| !files2.contains(f)) {
        println!("  + {:?}", file);
    }
    for file in files2.iter().filter(|f| !files1.contains(f)) {
        println!("  - {:?}", file);
    }
    for file in files1.iter().filter(|f| files2.contains(f)) {
        if fs::read(dir1.join(file)).unwrap() != fs::read(dir2.join(file)).unwrap() {
            println!("  ~ {:?}", file);
        }
    }
    println!("=== End of Comparison ===\n");
}

/// Asserts that two directories hold byte-identical files.
pub fn assert_same_dirs(actual: &Path, expected: &Path) {
    if dir_diff::is_different(actual, expected).unwrap() {
        print_dir_diff(actual, expected);
        panic!("Directories differ. See above for details.");
    }
}

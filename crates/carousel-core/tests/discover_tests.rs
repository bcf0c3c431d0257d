use carousel_core::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn touch(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, b"").unwrap();
}

fn names(paths: &[PathBuf]) -> Vec<String> {
    paths
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect()
}

#[test]
fn test_natural_sort_order() {
    let dir = tempdir().unwrap();
    for name in ["slide10.png", "slide1.png", "slide2.png"] {
        touch(&dir.path().join(name));
    }

    let found = find_images(&[dir.path()]).unwrap();
    assert_eq!(names(&found), ["slide1.png", "slide2.png", "slide10.png"]);
}

#[test]
fn test_directory_walk_is_recursive_and_filters_extensions() {
    let dir = tempdir().unwrap();
    touch(&dir.path().join("a/3.JPG"));
    touch(&dir.path().join("a/b/1.webp"));
    touch(&dir.path().join("2.jpeg"));
    touch(&dir.path().join("notes.txt"));
    touch(&dir.path().join("cover.gif"));

    let found = find_images(&[dir.path()]).unwrap();
    assert_eq!(names(&found), ["1.webp", "2.jpeg", "3.JPG"]);
}

#[test]
fn test_files_and_directories_mixed() {
    let dir = tempdir().unwrap();
    let loose = dir.path().join("loose/slide3.png");
    let ignored = dir.path().join("loose/readme.md");
    touch(&loose);
    touch(&ignored);
    touch(&dir.path().join("deck/slide1.png"));
    touch(&dir.path().join("deck/slide12.png"));

    let inputs = vec![loose, ignored, dir.path().join("deck")];
    let found = find_images(&inputs).unwrap();
    assert_eq!(names(&found), ["slide1.png", "slide3.png", "slide12.png"]);
}

#[test]
fn test_empty_directory_yields_nothing() {
    let dir = tempdir().unwrap();
    let found = find_images(&[dir.path()]).unwrap();
    assert!(found.is_empty());
}

#[test]
fn test_missing_path_is_an_error() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope");
    match find_images(&[&missing]) {
        Err(CarouselError::MissingPath(p)) => assert_eq!(p, missing),
        other => panic!("Expected MissingPath, got {:?}", other),
    }
}

#[cfg(unix)]
#[test]
fn test_symlink_loop_reports_the_path() {
    let dir = tempdir().unwrap();
    touch(&dir.path().join("sub/1.png"));
    std::os::unix::fs::symlink(dir.path(), dir.path().join("sub/back")).unwrap();

    match find_images(&[dir.path()]) {
        Err(CarouselError::Io(e)) => {
            let msg = e.to_string();
            assert!(msg.contains("loop"), "{}", msg);
            assert!(msg.contains("back"), "{}", msg);
        }
        other => panic!("Expected Io error, got {:?}", other),
    }
}

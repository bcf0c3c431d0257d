//! Input discovery and natural ordering

use crate::constants::IMAGE_EXTENSIONS;
use crate::types::*;
use std::cmp::Ordering;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Whether `path` has one of the supported image extensions (any case)
pub fn is_image_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}

/// Expand files and directories into a naturally sorted list of images.
///
/// Directories are walked recursively. Plain files without a supported
/// extension are skipped. The sort key is the file name alone, so images
/// from different folders interleave by name.
pub fn find_images(paths: &[impl AsRef<Path>]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for path in paths {
        let path = path.as_ref();
        if path.is_dir() {
            for entry in WalkDir::new(path).follow_links(true) {
                let entry = entry.map_err(walk_error)?;
                if entry.file_type().is_file() && is_image_path(entry.path()) {
                    files.push(entry.into_path());
                }
            }
        } else if path.is_file() {
            if is_image_path(path) {
                files.push(path.to_path_buf());
            } else {
                log::debug!("Skipping non-image input {}", path.display());
            }
        } else {
            return Err(CarouselError::MissingPath(path.to_path_buf()));
        }
    }

    sort_naturally(&mut files);
    Ok(files)
}

/// Keep walkdir's message, which names the offending path (loops included)
fn walk_error(err: walkdir::Error) -> CarouselError {
    CarouselError::Io(std::io::Error::other(err))
}

/// Stable natural sort on file names
pub fn sort_naturally(files: &mut [PathBuf]) {
    files.sort_by(|a, b| natural_cmp(&file_name(a), &file_name(b)));
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Compare two strings treating runs of ASCII digits as numbers.
///
/// `slide2` < `slide10`. Numeric runs sort before text runs, and equal
/// numbers with fewer leading zeros come first.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = Chunks::new(a);
    let mut right = Chunks::new(b);

    loop {
        match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) => {
                let ord = match (l, r) {
                    (Chunk::Number(x), Chunk::Number(y)) => compare_numbers(x, y),
                    (Chunk::Number(_), Chunk::Text(_)) => Ordering::Less,
                    (Chunk::Text(_), Chunk::Number(_)) => Ordering::Greater,
                    (Chunk::Text(x), Chunk::Text(y)) => x.cmp(y),
                };
                if ord != Ordering::Equal {
                    return ord;
                }
            }
        }
    }
}

fn compare_numbers(a: &str, b: &str) -> Ordering {
    let a_digits = a.trim_start_matches('0');
    let b_digits = b.trim_start_matches('0');
    a_digits
        .len()
        .cmp(&b_digits.len())
        .then_with(|| a_digits.cmp(b_digits))
        .then_with(|| a.len().cmp(&b.len()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Chunk<'a> {
    Number(&'a str),
    Text(&'a str),
}

struct Chunks<'a> {
    rest: &'a str,
}

impl<'a> Chunks<'a> {
    fn new(s: &'a str) -> Self {
        Self { rest: s }
    }
}

impl<'a> Iterator for Chunks<'a> {
    type Item = Chunk<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.rest.chars().next()?;
        let numeric = first.is_ascii_digit();
        let end = self
            .rest
            .find(|c: char| c.is_ascii_digit() != numeric)
            .unwrap_or(self.rest.len());
        let (head, tail) = self.rest.split_at(end);
        self.rest = tail;
        Some(if numeric {
            Chunk::Number(head)
        } else {
            Chunk::Text(head)
        })
    }
}

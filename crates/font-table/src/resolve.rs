//! Glyph image resolution by filename convention.
//!
//! Glyph files are named `<char>-<anything>.png`; the segment before the
//! first `-` names the character the file renders. The character `:` is
//! aliased to the literal prefix `colon` since it cannot appear in typical
//! filesystem filenames.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

/// Filename alias for the `:` character.
const COLON_ALIAS: &str = "colon";

/// Map a character to the filename prefix that identifies its glyph.
pub fn char_key(ch: char) -> String {
    if ch == ':' {
        COLON_ALIAS.to_string()
    } else {
        ch.to_string()
    }
}

/// Scan a directory for glyph images and map filename prefixes to paths.
///
/// Every entry whose name ends in `.png` contributes the segment before its
/// first `-` (the whole name if it has none) as the key. When several files
/// share a prefix, entries are processed in ascending filename order and
/// later ones overwrite, so the lexicographically greatest filename wins.
pub fn scan_glyph_dir(dir: &Path) -> io::Result<BTreeMap<String, PathBuf>> {
    let mut names: Vec<String> = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.ends_with(".png") {
            names.push(name);
        }
    }
    names.sort();

    let mut images = BTreeMap::new();
    for name in names {
        let key = match name.split_once('-') {
            Some((prefix, _)) => prefix.to_string(),
            None => name.clone(),
        };
        images.insert(key, dir.join(name));
    }

    debug!(count = images.len(), "Resolved glyph images");
    Ok(images)
}

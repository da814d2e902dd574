//! Music library discovery

pub mod scanner;

pub use scanner::{find_converted, find_unconverted, CONVERTED_DIR};

use std::collections::BTreeMap;
use std::path::PathBuf;

/// Converted songs keyed by filename stem.
///
/// A `BTreeMap` keeps picker order stable and sorted. Duplicate stems across
/// music directories overwrite: the last directory scanned wins.
pub type SongLibrary = BTreeMap<String, PathBuf>;

//! # Precomputed Slip Assets
//!
//! A [`FortuneAsset`] is one pre-rendered slip: packed 1-bit rows plus
//! their dimensions, validated once on construction and read-only after.
//!
//! ## On-disk format
//!
//! One JSON file per slip, named after the asset:
//!
//! ```json
//! { "width": 360, "height": 648, "bitmap": [0, 0, 255, ...] }
//! ```
//!
//! [`AssetFile::to_rust_source`] emits the same data as Rust constants for
//! builds that compile slips into the binary.
//!
//! ## Registries
//!
//! The orchestrator only sees [`AssetRegistry`]: a list of names and a
//! fallible `try_load`. A missing or corrupt asset is `None`, which sends
//! the orchestrator down the live text path.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use rand::RngCore;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use crate::config::AssetSelection;
use crate::error::FortunaError;
use crate::render::pack::PackedBitmap;

/// An immutable, validated slip bitmap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FortuneAsset {
    width: u16,
    height: u16,
    bitmap: Vec<u8>,
}

impl FortuneAsset {
    /// Build an asset, checking that `width` is byte aligned and `bitmap`
    /// holds exactly `width / 8 * height` bytes.
    pub fn new(width: u16, height: u16, bitmap: Vec<u8>) -> Result<Self, FortunaError> {
        if width == 0 || width % 8 != 0 {
            return Err(FortunaError::AssetUnavailable(format!(
                "width {} is not a positive multiple of 8",
                width
            )));
        }
        let expected = width as usize / 8 * height as usize;
        if bitmap.len() != expected {
            return Err(FortunaError::AssetUnavailable(format!(
                "{}x{} slip needs {} bytes, got {}",
                width,
                height,
                expected,
                bitmap.len()
            )));
        }
        Ok(Self {
            width,
            height,
            bitmap,
        })
    }

    /// Wrap a freshly rendered bitmap.
    pub fn from_bitmap(bitmap: PackedBitmap) -> Result<Self, FortunaError> {
        let width = u16::try_from(bitmap.width).map_err(|_| {
            FortunaError::InvalidDimensions(format!("width {} exceeds 65535", bitmap.width))
        })?;
        let height = u16::try_from(bitmap.height).map_err(|_| {
            FortunaError::InvalidDimensions(format!("height {} exceeds 65535", bitmap.height))
        })?;
        Self::new(width, height, bitmap.data)
    }

    pub fn width(&self) -> usize {
        self.width as usize
    }

    pub fn height(&self) -> usize {
        self.height as usize
    }

    pub fn bitmap(&self) -> &[u8] {
        &self.bitmap
    }

    pub fn to_packed(&self) -> PackedBitmap {
        PackedBitmap {
            width: self.width(),
            height: self.height(),
            data: self.bitmap.clone(),
        }
    }
}

/// Serialized form of a [`FortuneAsset`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetFile {
    pub width: u16,
    pub height: u16,
    pub bitmap: Vec<u8>,
}

impl AssetFile {
    pub fn from_json(json: &str) -> Result<Self, FortunaError> {
        serde_json::from_str(json).map_err(|e| FortunaError::AssetUnavailable(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, FortunaError> {
        serde_json::to_string(self).map_err(|e| FortunaError::AssetUnavailable(e.to_string()))
    }

    /// Read and validate an asset file.
    pub fn load(path: &Path) -> Result<FortuneAsset, FortunaError> {
        let json = fs::read_to_string(path)
            .map_err(|e| FortunaError::AssetUnavailable(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&json)?.into_asset()
    }

    pub fn into_asset(self) -> Result<FortuneAsset, FortunaError> {
        FortuneAsset::new(self.width, self.height, self.bitmap)
    }

    /// Render as Rust constants, 16 bytes per source line.
    pub fn to_rust_source(&self, name: &str) -> String {
        let mut out = String::new();
        out.push_str(&format!("// Fortune slip `{}`, packed 1-bit rows, MSB first.\n", name));
        out.push_str(&format!("pub const WIDTH: usize = {};\n", self.width));
        out.push_str(&format!("pub const HEIGHT: usize = {};\n", self.height));
        out.push_str("pub const BITMAP: &[u8] = &[\n");
        for chunk in self.bitmap.chunks(16) {
            let line: Vec<String> = chunk.iter().map(|b| b.to_string()).collect();
            out.push_str(&format!("    {},\n", line.join(", ")));
        }
        out.push_str("];\n");
        out
    }
}

impl From<&FortuneAsset> for AssetFile {
    fn from(asset: &FortuneAsset) -> Self {
        Self {
            width: asset.width,
            height: asset.height,
            bitmap: asset.bitmap.clone(),
        }
    }
}

// ============================================================================
// REGISTRIES
// ============================================================================

/// A named set of precomputed slips.
pub trait AssetRegistry {
    /// Asset names, in a stable order.
    fn names(&self) -> Vec<String>;

    /// Load one asset by name.
    fn load(&self, name: &str) -> Result<FortuneAsset, FortunaError>;

    /// Load one asset, logging and discarding the failure.
    fn try_load(&self, name: &str) -> Option<FortuneAsset> {
        match self.load(name) {
            Ok(asset) => Some(asset),
            Err(e) => {
                log::warn!("asset {} unavailable: {}", name, e);
                None
            }
        }
    }

    /// Name of the asset to print under `selection`, if any.
    fn select(&self, selection: &AssetSelection, rng: &mut dyn RngCore) -> Option<String> {
        match selection {
            AssetSelection::Fixed(name) => Some(name.clone()),
            AssetSelection::Random => self.names().choose(rng).cloned(),
        }
    }
}

impl<R: AssetRegistry + ?Sized> AssetRegistry for &R {
    fn names(&self) -> Vec<String> {
        (**self).names()
    }

    fn load(&self, name: &str) -> Result<FortuneAsset, FortunaError> {
        (**self).load(name)
    }
}

impl<R: AssetRegistry + ?Sized> AssetRegistry for Box<R> {
    fn names(&self) -> Vec<String> {
        (**self).names()
    }

    fn load(&self, name: &str) -> Result<FortuneAsset, FortunaError> {
        (**self).load(name)
    }
}

/// Assets held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryRegistry {
    assets: BTreeMap<String, FortuneAsset>,
}

impl MemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, asset: FortuneAsset) {
        self.assets.insert(name.into(), asset);
    }

    pub fn with(mut self, name: impl Into<String>, asset: FortuneAsset) -> Self {
        self.insert(name, asset);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

impl AssetRegistry for MemoryRegistry {
    fn names(&self) -> Vec<String> {
        self.assets.keys().cloned().collect()
    }

    fn load(&self, name: &str) -> Result<FortuneAsset, FortunaError> {
        self.assets
            .get(name)
            .cloned()
            .ok_or_else(|| FortunaError::AssetUnavailable(format!("no asset named {}", name)))
    }
}

/// A directory of `<name>.json` asset files.
#[derive(Debug, Clone)]
pub struct DirRegistry {
    dir: PathBuf,
    names: Vec<String>,
}

impl DirRegistry {
    /// Scan `dir` for asset files. The listing is taken once, here.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, FortunaError> {
        let dir = dir.into();
        let mut names = Vec::new();

        for entry in fs::read_dir(&dir)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    names.push(stem.to_string());
                }
            }
        }
        names.sort();

        log::info!("found {} slip assets in {}", names.len(), dir.display());
        Ok(Self { dir, names })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.json", name))
    }
}

impl AssetRegistry for DirRegistry {
    fn names(&self) -> Vec<String> {
        self.names.clone()
    }

    fn load(&self, name: &str) -> Result<FortuneAsset, FortunaError> {
        AssetFile::load(&self.path_for(name))
    }
}

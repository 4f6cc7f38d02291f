//! Image assets
//!
//! Both images are decoded to RGBA8 up front; a missing or corrupt file is a
//! startup failure.

use std::path::Path;

use crate::error::AssetError;
use crate::settings::AssetPaths;

/// Identifies one of the loaded images in a draw command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetId {
    Background,
    Ground,
}

/// A decoded RGBA8 image
#[derive(Debug, Clone)]
pub struct Image {
    pub width: u32,
    pub height: u32,
    /// Tightly packed RGBA8 rows
    pub rgba: Vec<u8>,
}

impl Image {
    pub fn load(path: &Path) -> Result<Self, AssetError> {
        if !path.is_file() {
            return Err(AssetError::NotFound(path.to_path_buf()));
        }
        let decoded = image::open(path)
            .map_err(|source| AssetError::Decode {
                path: path.to_path_buf(),
                source,
            })?
            .to_rgba8();
        let (width, height) = decoded.dimensions();
        log::info!("Loaded {} ({}x{})", path.display(), width, height);
        Ok(Self {
            width,
            height,
            rgba: decoded.into_raw(),
        })
    }

    /// 1x1 opaque white, used for untextured primitives
    pub fn white() -> Self {
        Self {
            width: 1,
            height: 1,
            rgba: vec![255; 4],
        }
    }
}

/// The images the game draws
#[derive(Debug, Clone)]
pub struct Assets {
    pub background: Image,
    pub ground: Image,
}

impl Assets {
    pub fn load(paths: &AssetPaths) -> Result<Self, AssetError> {
        Ok(Self {
            background: Image::load(&paths.background_path())?,
            ground: Image::load(&paths.ground_path())?,
        })
    }

    pub fn get(&self, id: AssetId) -> &Image {
        match id {
            AssetId::Background => &self.background,
            AssetId::Ground => &self.ground,
        }
    }
}

//! Loading of image media referenced by the catalog.

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use image::ImageReader;

/// Decoded RGBA8 pixels, ready to hand to the renderer.
#[derive(Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl std::fmt::Debug for DecodedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecodedImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.pixels.len())
            .finish()
    }
}

pub fn is_remote(reference: &str) -> bool {
    reference.starts_with("http://") || reference.starts_with("https://")
}

/// Turns a catalog image reference into a file path. Remote references
/// are never fetched.
pub fn resolve(reference: &str, assets_dir: &Path) -> anyhow::Result<PathBuf> {
    if is_remote(reference) {
        bail!("remote media `{reference}` is not fetched");
    }
    let path = Path::new(reference);
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(assets_dir.join(path))
    }
}

/// Reads and decodes an image file. Blocking; run it off the UI thread.
pub fn decode(path: &Path) -> anyhow::Result<DecodedImage> {
    let img = ImageReader::open(path)
        .with_context(|| format!("failed to open {}", path.display()))?
        .with_guessed_format()
        .with_context(|| format!("failed to sniff format of {}", path.display()))?
        .decode()
        .map_err(|e| anyhow::anyhow!("Failed to decode image {}: {}", path.display(), e))?
        .to_rgba8();
    Ok(DecodedImage {
        width: img.width(),
        height: img.height(),
        pixels: img.into_raw(),
    })
}

/// [`resolve`] then [`decode`].
pub fn load(reference: &str, assets_dir: &Path) -> anyhow::Result<DecodedImage> {
    decode(&resolve(reference, assets_dir)?)
}

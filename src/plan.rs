//! Offline layout planning over a folder of images, without a renderer.

use std::path::{Path, PathBuf};

use crate::discover::{ImageEntry, discover_images, probe_dimensions};
use crate::foundation::core::{ImageDimensions, LayoutResult};
use crate::foundation::error::OverlayResult;
use crate::layout::engine::TextLayoutEngine;
use crate::settings::OverlaySettings;

/// Planned overlay for one image.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PlanEntry {
    /// Source image.
    pub path: PathBuf,
    /// Text that would be drawn.
    pub text: String,
    /// Dimensions the layout was computed for.
    pub dimensions: ImageDimensions,
    /// `true` when the header could not be read and the default dimensions were used.
    pub dimensions_fallback: bool,
    /// Pixel parameters for the renderer.
    pub layout: LayoutResult,
}

/// Compute the batch-mode layout for each image.
pub fn plan_overlays(images: &[ImageEntry], settings: &OverlaySettings) -> Vec<PlanEntry> {
    images
        .iter()
        .map(|image| {
            let (dimensions, dimensions_fallback) = match probe_dimensions(&image.path) {
                Ok(dims) => (dims, false),
                Err(err) => {
                    tracing::warn!(path = %image.path.display(), %err, "using default dimensions");
                    (ImageDimensions::DEFAULT, true)
                }
            };
            let request = settings.layout_request(settings.text_for(image));
            let layout = TextLayoutEngine::compute_request(dimensions, &request);
            PlanEntry {
                path: image.path.clone(),
                text: image.render_text(&request.text).to_owned(),
                dimensions,
                dimensions_fallback,
                layout,
            }
        })
        .collect()
}

/// Discover the images in `dir` and plan each one.
pub fn plan_folder(dir: &Path, settings: &OverlaySettings) -> OverlayResult<Vec<PlanEntry>> {
    settings.validate()?;
    let images = discover_images(dir)?;
    Ok(plan_overlays(&images, settings))
}

#[cfg(test)]
#[path = "../tests/unit/plan/plan.rs"]
mod tests;

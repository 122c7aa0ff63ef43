//! Capabilities the engine consumes from the external image-processing service.
//!
//! Decoding, thumbnailing and pixel compositing live behind [`ImageService`]; the engine only
//! decides what to draw and where.

use std::path::Path;
use std::sync::Arc;

use crate::foundation::core::{ImageDimensions, LayoutResult};
use crate::foundation::error::OverlayResult;

/// Encoded preview image bytes as returned by the renderer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewImage {
    /// MIME type of `bytes`, e.g. `image/jpeg`.
    pub mime_type: String,
    /// Encoded image, shared between the cache and the displayed state.
    pub bytes: Arc<Vec<u8>>,
}

impl PreviewImage {
    /// Wrap encoded bytes.
    pub fn new(mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            mime_type: mime_type.into(),
            bytes: Arc::new(bytes),
        }
    }

    /// Encoded size in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Return `true` for a zero-length payload.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Result of a final render as reported by the service.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FinalizeOutcome {
    /// Whether the output file was written.
    pub success: bool,
    /// Service-provided failure reason.
    pub error: Option<String>,
}

impl FinalizeOutcome {
    /// A successful render.
    pub fn succeeded() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    /// A render the service reported as failed.
    pub fn failed(reason: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(reason.into()),
        }
    }
}

/// External image-processing service.
///
/// All calls are asynchronous I/O with no deadline imposed by the engine.
#[async_trait::async_trait]
pub trait ImageService: Send + Sync {
    /// Pixel dimensions of the image at `path`.
    async fn dimensions(&self, path: &Path) -> OverlayResult<ImageDimensions>;

    /// Compose `text` onto a downscaled copy of the image and return the encoded preview.
    async fn render_preview(
        &self,
        path: &Path,
        text: &str,
        layout: LayoutResult,
    ) -> OverlayResult<PreviewImage>;

    /// Compose `text` onto the full-size image and write it into `output_dir`.
    async fn render_final(
        &self,
        path: &Path,
        output_dir: &Path,
        text: &str,
        layout: LayoutResult,
    ) -> OverlayResult<FinalizeOutcome>;
}

#[async_trait::async_trait]
impl<S: ImageService + ?Sized> ImageService for Arc<S> {
    async fn dimensions(&self, path: &Path) -> OverlayResult<ImageDimensions> {
        (**self).dimensions(path).await
    }

    async fn render_preview(
        &self,
        path: &Path,
        text: &str,
        layout: LayoutResult,
    ) -> OverlayResult<PreviewImage> {
        (**self).render_preview(path, text, layout).await
    }

    async fn render_final(
        &self,
        path: &Path,
        output_dir: &Path,
        text: &str,
        layout: LayoutResult,
    ) -> OverlayResult<FinalizeOutcome> {
        (**self).render_final(path, output_dir, text, layout).await
    }
}

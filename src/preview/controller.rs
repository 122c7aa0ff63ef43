use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::discover::ImageEntry;
use crate::foundation::core::{ImageDimensions, LayoutRequest, LayoutResult};
use crate::layout::engine::TextLayoutEngine;
use crate::preview::cache::{CacheKey, PreviewCache};
use crate::preview::scheduler::PreviewChannel;
use crate::report::Notification;
use crate::service::{ImageService, PreviewImage};
use crate::settings::PreviewOpts;

/// Snapshot of everything one preview depends on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewRequest {
    /// Image to preview.
    pub image: ImageEntry,
    /// Text and raw layout parameters.
    pub layout: LayoutRequest,
}

impl PreviewRequest {
    /// Bundle an image with its layout parameters.
    pub fn new(image: ImageEntry, layout: LayoutRequest) -> Self {
        Self { image, layout }
    }

    /// Fingerprint of the raw parameters; computed before dimensions are known.
    pub fn cache_key(&self) -> CacheKey {
        CacheKey::new(
            &self.image.path,
            self.layout.text.clone(),
            self.layout.base_font_size,
            self.layout.anchor_right_percent,
            self.layout.anchor_bottom_percent,
        )
    }
}

/// What a preview channel currently displays.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum PreviewState {
    /// Nothing requested yet.
    #[default]
    Empty,
    /// Freshly rendered preview.
    Rendered {
        /// Fingerprint the preview was cached under.
        key: CacheKey,
        /// Pixel parameters handed to the renderer.
        layout: LayoutResult,
        /// Encoded preview.
        image: PreviewImage,
    },
    /// Preview served from the cache without touching the service.
    Cached {
        /// Fingerprint that hit.
        key: CacheKey,
        /// Encoded preview.
        image: PreviewImage,
    },
    /// Rendering failed; the image's thumbnail is shown instead.
    Thumbnail {
        /// Previously loaded thumbnail.
        image: PreviewImage,
        /// Failure message.
        notification: Notification,
    },
    /// Rendering failed and no thumbnail exists.
    Placeholder {
        /// Failure message.
        notification: Notification,
    },
}

impl PreviewState {
    /// Image currently on screen, if any.
    pub fn image(&self) -> Option<&PreviewImage> {
        match self {
            PreviewState::Rendered { image, .. }
            | PreviewState::Cached { image, .. }
            | PreviewState::Thumbnail { image, .. } => Some(image),
            PreviewState::Empty | PreviewState::Placeholder { .. } => None,
        }
    }
}

/// Owns the preview cache and drives the dimensions -> layout -> render pipeline.
///
/// The cache and displayed states sit behind mutexes that are never held across an `.await`;
/// the scheduler keeps access effectively single-writer.
pub struct OverlayController<S> {
    service: Arc<S>,
    cache: Mutex<PreviewCache<PreviewImage>>,
    states: Mutex<HashMap<PreviewChannel, PreviewState>>,
}

impl<S: ImageService> OverlayController<S> {
    /// Create a controller with a fresh cache.
    pub fn new(service: S, opts: &PreviewOpts) -> Self {
        Self::with_shared(Arc::new(service), opts)
    }

    /// Create a controller around an already shared service.
    pub fn with_shared(service: Arc<S>, opts: &PreviewOpts) -> Self {
        Self {
            service,
            cache: Mutex::new(PreviewCache::new(opts.cache_capacity)),
            states: Mutex::new(HashMap::new()),
        }
    }

    /// The wrapped image service.
    pub fn service(&self) -> &S {
        &self.service
    }

    pub(crate) fn lock_cache(&self) -> MutexGuard<'_, PreviewCache<PreviewImage>> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_states(&self) -> MutexGuard<'_, HashMap<PreviewChannel, PreviewState>> {
        self.states.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Number of cached previews.
    pub fn cached_previews(&self) -> usize {
        self.lock_cache().len()
    }

    /// Return `true` when a preview for `key` is cached.
    pub fn is_cached(&self, key: &CacheKey) -> bool {
        self.lock_cache().contains(key)
    }

    /// Drop every cached preview.
    pub fn clear_cache(&self) {
        self.lock_cache().clear();
    }

    /// What `channel` currently displays.
    pub fn state(&self, channel: PreviewChannel) -> PreviewState {
        self.lock_states().get(&channel).cloned().unwrap_or_default()
    }

    fn publish(&self, channel: PreviewChannel, state: PreviewState) {
        self.lock_states().insert(channel, state);
    }

    /// Image dimensions, or [`ImageDimensions::DEFAULT`] when the service cannot provide them.
    pub async fn dimensions_or_default(&self, path: &Path) -> ImageDimensions {
        let probed = self
            .service
            .dimensions(path)
            .await
            .and_then(|d| ImageDimensions::new(d.width, d.height));
        match probed {
            Ok(dims) => dims,
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "using default dimensions");
                ImageDimensions::DEFAULT
            }
        }
    }

    /// Run the preview pipeline for `request` and publish the result on `channel`.
    ///
    /// A cache hit returns immediately. On a miss the layout is computed for the image's real
    /// dimensions and the service renders the preview, which is then cached. A render failure
    /// clears the cache and falls back to the thumbnail or a placeholder.
    #[tracing::instrument(skip(self, request), fields(image = %request.image.name))]
    pub async fn refresh(&self, channel: PreviewChannel, request: PreviewRequest) -> PreviewState {
        let key = request.cache_key();
        let cached = self.lock_cache().get(&key).cloned();
        if let Some(image) = cached {
            tracing::debug!(%key, "preview cache hit");
            let state = PreviewState::Cached { key, image };
            self.publish(channel, state.clone());
            return state;
        }

        let PreviewRequest { image, layout } = request;
        let dims = self.dimensions_or_default(&image.path).await;
        let result = TextLayoutEngine::compute_request(dims, &layout);
        tracing::debug!(
            width = dims.width,
            height = dims.height,
            font_size_px = result.font_size_px,
            x = result.x,
            y = result.y,
            "preview layout"
        );

        let rendered = self
            .service
            .render_preview(&image.path, image.render_text(&layout.text), result)
            .await;

        let state = match rendered {
            Ok(preview) => {
                self.lock_cache().put(key.clone(), preview.clone());
                PreviewState::Rendered {
                    key,
                    layout: result,
                    image: preview,
                }
            }
            Err(err) => {
                tracing::warn!(%err, "preview render failed");
                self.clear_cache();
                let notification =
                    Notification::error(format!("Preview failed for {}: {err}", image.name));
                match image.thumbnail {
                    Some(thumbnail) => PreviewState::Thumbnail {
                        image: thumbnail,
                        notification,
                    },
                    None => PreviewState::Placeholder { notification },
                }
            }
        };

        self.publish(channel, state.clone());
        state
    }
}

#[cfg(test)]
#[path = "../../tests/unit/preview/controller.rs"]
mod tests;

//! Overlay engine: deterministic placement of a text label on photos.
//!
//! Given an image's pixel dimensions and a handful of user parameters (text, base font size,
//! right/bottom anchor percentages), the engine computes a scaled font size and a clamped text
//! origin. Around that pure core it provides the interactive preview machinery a front end
//! needs: a bounded FIFO preview cache, a per-channel debounce scheduler and finalize runs over
//! many images. Pixel work is delegated to an external [`ImageService`].
//!
//! # Pipeline overview
//!
//! 1. **Scale**: `ImageDimensions + base font size -> font_size_px` (area-proportional)
//! 2. **Measure**: `text + font_size_px -> width` (per-script width table)
//! 3. **Position**: anchor percentages -> clamped `(x, y)` inside the padded image
//! 4. **Render** (external): [`ImageService::render_preview`] / [`ImageService::render_final`]
//!
//! The layout steps are pure and reproduce the companion renderer's arithmetic exactly, so a
//! given input always maps to the same [`LayoutResult`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod batch;
mod discover;
mod foundation;
mod layout;
mod plan;
mod preview;
mod report;
mod service;
mod settings;
mod text;

pub use discover::{ImageEntry, SUPPORTED_EXTENSIONS, discover_images, probe_dimensions};
pub use foundation::core::{ImageDimensions, LayoutRequest, LayoutResult};
pub use foundation::error::{OverlayError, OverlayResult};
pub use foundation::math::{clamp_low_wins, round_half_up};
pub use layout::engine::{FALLBACK_FONT_SIZE, TextLayoutEngine};
pub use layout::glyph_width::{
    DEFAULT_MULTIPLIER, WIDTH_RULES, WidthClass, WidthRule, classify, width_multiplier,
};
pub use layout::measure::{MAX_CHAR_WIDTH, MIN_TEXT_WIDTH, WIDTH_OVERHEAD, estimate_text_width};
pub use layout::position::{TEXT_PADDING, TextPosition, resolve_position};
pub use layout::scale::{
    BASE_AREA, FONT_SIZE_MAX, FONT_SIZE_MIN, MAX_SCALE_FACTOR, MIN_SCALE_FACTOR, scale_factor,
    scale_font_size,
};
pub use plan::{PlanEntry, plan_folder, plan_overlays};
pub use preview::cache::{CacheKey, DEFAULT_CACHE_CAPACITY, PreviewCache};
pub use preview::controller::{OverlayController, PreviewRequest, PreviewState};
pub use preview::scheduler::{ChangeScheduler, DEFAULT_DEBOUNCE, PipelineFuture, PreviewChannel};
pub use preview::session::PreviewSession;
pub use report::{LogEntry, LogKind, Notification, NotificationKind, ProcessingReport};
pub use service::{FinalizeOutcome, ImageService, PreviewImage};
pub use settings::{OverlaySettings, PreviewOpts, TextSource};
pub use text::{normalize_overlay_text, strip_extension};

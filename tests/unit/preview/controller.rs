use super::*;

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::foundation::error::{OverlayError, OverlayResult};
use crate::service::FinalizeOutcome;

#[derive(Default)]
struct StubService {
    dims: Option<ImageDimensions>,
    fail_preview: bool,
    preview_calls: AtomicUsize,
    last_text: Mutex<Option<String>>,
}

#[async_trait::async_trait]
impl ImageService for StubService {
    async fn dimensions(&self, _path: &Path) -> OverlayResult<ImageDimensions> {
        self.dims
            .ok_or_else(|| OverlayError::dimensions("unreadable header"))
    }

    async fn render_preview(
        &self,
        _path: &Path,
        text: &str,
        layout: LayoutResult,
    ) -> OverlayResult<PreviewImage> {
        self.preview_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_text.lock().unwrap() = Some(text.to_owned());
        if self.fail_preview {
            return Err(OverlayError::render("renderer crashed"));
        }
        Ok(PreviewImage::new(
            "image/jpeg",
            layout.font_size_px.to_le_bytes().to_vec(),
        ))
    }

    async fn render_final(
        &self,
        _path: &Path,
        _output_dir: &Path,
        _text: &str,
        _layout: LayoutResult,
    ) -> OverlayResult<FinalizeOutcome> {
        Ok(FinalizeOutcome::succeeded())
    }
}

fn request(name: &str, text: &str) -> PreviewRequest {
    let layout = LayoutRequest {
        text: text.to_owned(),
        ..LayoutRequest::default()
    };
    PreviewRequest::new(ImageEntry::from_path(format!("/in/{name}")), layout)
}

fn controller(service: StubService) -> OverlayController<StubService> {
    OverlayController::new(service, &PreviewOpts::default())
}

#[test]
fn cache_key_uses_raw_parameters() {
    let key = request("a.jpg", "hi").cache_key();
    assert_eq!(key.to_string(), "/in/a.jpg_hi_20_10_10");
}

#[tokio::test]
async fn miss_renders_then_hit_skips_service() {
    let ctl = controller(StubService {
        dims: Some(ImageDimensions::new(4000, 3000).unwrap()),
        ..StubService::default()
    });

    let first = ctl.refresh(PreviewChannel::Batch, request("a.jpg", "hi")).await;
    match &first {
        PreviewState::Rendered { layout, .. } => {
            assert_eq!(layout.font_size_px, 60);
        }
        other => panic!("expected rendered, got {other:?}"),
    }
    assert_eq!(ctl.cached_previews(), 1);
    assert!(ctl.is_cached(&request("a.jpg", "hi").cache_key()));
    assert!(!ctl.is_cached(&request("a.jpg", "ho").cache_key()));

    let second = ctl.refresh(PreviewChannel::Batch, request("a.jpg", "hi")).await;
    assert!(matches!(second, PreviewState::Cached { .. }));
    assert_eq!(ctl.service().preview_calls.load(Ordering::SeqCst), 1);
    assert_eq!(second.image(), first.image());
}

#[tokio::test]
async fn empty_text_renders_stem() {
    let ctl = controller(StubService {
        dims: Some(ImageDimensions::DEFAULT),
        ..StubService::default()
    });
    ctl.refresh(PreviewChannel::Batch, request("sunset.png", "")).await;
    assert_eq!(
        ctl.service().last_text.lock().unwrap().as_deref(),
        Some("sunset")
    );
}

#[tokio::test]
async fn missing_dimensions_fall_back_to_default() {
    let ctl = controller(StubService::default());
    let state = ctl.refresh(PreviewChannel::Individual, request("a.jpg", "x")).await;
    match state {
        PreviewState::Rendered { layout, .. } => assert_eq!(layout.font_size_px, 20),
        other => panic!("expected rendered, got {other:?}"),
    }
}

#[tokio::test]
async fn failure_clears_cache_and_shows_thumbnail() {
    let ctl = controller(StubService {
        dims: Some(ImageDimensions::DEFAULT),
        fail_preview: true,
        ..StubService::default()
    });
    ctl.lock_cache().put(
        request("other.jpg", "x").cache_key(),
        PreviewImage::new("image/jpeg", vec![1]),
    );

    let thumb = PreviewImage::new("image/png", vec![9, 9]);
    let mut req = request("a.jpg", "x");
    req.image = req.image.with_thumbnail(thumb.clone());

    let state = ctl.refresh(PreviewChannel::Batch, req).await;
    match state {
        PreviewState::Thumbnail {
            image,
            notification,
        } => {
            assert_eq!(image, thumb);
            assert!(notification.message.contains("a.jpg"));
        }
        other => panic!("expected thumbnail, got {other:?}"),
    }
    assert_eq!(ctl.cached_previews(), 0);
}

#[tokio::test]
async fn failure_without_thumbnail_shows_placeholder() {
    let ctl = controller(StubService {
        fail_preview: true,
        ..StubService::default()
    });
    let state = ctl.refresh(PreviewChannel::Individual, request("a.jpg", "x")).await;
    assert!(matches!(state, PreviewState::Placeholder { .. }));
    assert_eq!(state.image(), None);
    assert_eq!(ctl.state(PreviewChannel::Individual), state);
    assert_eq!(ctl.state(PreviewChannel::Batch), PreviewState::Empty);
}

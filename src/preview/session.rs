use std::sync::Arc;

use crate::foundation::error::OverlayResult;
use crate::preview::controller::{OverlayController, PreviewRequest, PreviewState};
use crate::preview::scheduler::{ChangeScheduler, PipelineFuture, PreviewChannel};
use crate::service::ImageService;
use crate::settings::PreviewOpts;

/// Interactive preview front end: debounced triggers feeding a shared controller.
pub struct PreviewSession<S: ImageService + 'static> {
    controller: Arc<OverlayController<S>>,
    scheduler: ChangeScheduler<PreviewRequest>,
}

impl<S: ImageService + 'static> PreviewSession<S> {
    /// Start a session on the current tokio runtime.
    pub fn new(service: S, opts: PreviewOpts) -> OverlayResult<Self> {
        let controller = Arc::new(OverlayController::new(service, &opts));
        let pipeline_controller = Arc::clone(&controller);
        let scheduler = ChangeScheduler::new(opts.debounce(), move |channel, request| {
            let controller = Arc::clone(&pipeline_controller);
            let fut: PipelineFuture = Box::pin(async move {
                controller.refresh(channel, request).await;
            });
            fut
        })?;
        Ok(Self {
            controller,
            scheduler,
        })
    }

    /// Record a parameter change. The preview refreshes once the channel has been quiet for the
    /// debounce delay.
    pub fn request(&mut self, channel: PreviewChannel, request: PreviewRequest) {
        self.scheduler.trigger(channel, request);
    }

    /// Return `true` while `channel` has a change waiting out its delay.
    pub fn is_pending(&self, channel: PreviewChannel) -> bool {
        self.scheduler.is_pending(channel)
    }

    /// Drop pending changes on every channel. Renders already running still complete.
    pub fn cancel_pending(&mut self) {
        self.scheduler.cancel_all();
    }

    /// Shared controller, also used for finalize runs.
    pub fn controller(&self) -> &Arc<OverlayController<S>> {
        &self.controller
    }

    /// What `channel` currently displays.
    pub fn state(&self, channel: PreviewChannel) -> PreviewState {
        self.controller.state(channel)
    }
}

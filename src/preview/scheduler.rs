use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::foundation::error::{OverlayError, OverlayResult};

/// Quiescence window after the last trigger before the pipeline runs.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(150);

/// Independent debounce lanes. A trigger on one channel never cancels the other.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreviewChannel {
    /// Shared-settings preview over the whole image set.
    Batch,
    /// Per-image preview with image-specific text.
    Individual,
}

/// Boxed pipeline invocation produced for each quiescent trigger.
pub type PipelineFuture = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

type Pipeline<P> = Arc<dyn Fn(PreviewChannel, P) -> PipelineFuture + Send + Sync>;

/// Coalesces bursts of parameter changes into one delayed pipeline run per channel.
///
/// Each channel owns at most one pending timer task. A new trigger aborts that timer and starts
/// a fresh one carrying the newest snapshot, so only the last trigger inside a quiescence window
/// reaches the pipeline. Once a timer elapses the pipeline future is spawned detached: later
/// triggers do not cancel work that is already in flight, and two overlapping runs on the same
/// channel may complete in either order.
pub struct ChangeScheduler<P> {
    runtime: Handle,
    delay: Duration,
    pipeline: Pipeline<P>,
    pending: HashMap<PreviewChannel, JoinHandle<()>>,
}

impl<P: Send + 'static> ChangeScheduler<P> {
    /// Create a scheduler bound to the current tokio runtime.
    pub fn new<F>(delay: Duration, pipeline: F) -> OverlayResult<Self>
    where
        F: Fn(PreviewChannel, P) -> PipelineFuture + Send + Sync + 'static,
    {
        let runtime = Handle::try_current().map_err(|e| {
            OverlayError::Other(anyhow::anyhow!(
                "change scheduler requires a tokio runtime: {e}"
            ))
        })?;
        Ok(Self::with_runtime(runtime, delay, pipeline))
    }

    /// Create a scheduler that spawns onto `runtime`.
    pub fn with_runtime<F>(runtime: Handle, delay: Duration, pipeline: F) -> Self
    where
        F: Fn(PreviewChannel, P) -> PipelineFuture + Send + Sync + 'static,
    {
        Self {
            runtime,
            delay,
            pipeline: Arc::new(pipeline),
            pending: HashMap::new(),
        }
    }

    /// Quiescence delay applied to every trigger.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Record a parameter change on `channel`. Fire-and-forget.
    pub fn trigger(&mut self, channel: PreviewChannel, params: P) {
        if let Some(previous) = self.pending.remove(&channel) {
            if !previous.is_finished() {
                tracing::debug!(?channel, "superseded pending preview");
            }
            previous.abort();
        }

        let pipeline = Arc::clone(&self.pipeline);
        let runtime = self.runtime.clone();
        let delay = self.delay;
        let timer = self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            tracing::debug!(?channel, "parameters settled, running pipeline");
            runtime.spawn((*pipeline)(channel, params));
        });
        self.pending.insert(channel, timer);
    }

    /// Return `true` while a trigger on `channel` is still waiting out its delay.
    pub fn is_pending(&self, channel: PreviewChannel) -> bool {
        self.pending
            .get(&channel)
            .is_some_and(|timer| !timer.is_finished())
    }

    /// Drop the pending trigger on `channel`, if any. Returns `true` if one was waiting.
    pub fn cancel(&mut self, channel: PreviewChannel) -> bool {
        match self.pending.remove(&channel) {
            Some(timer) => {
                let waiting = !timer.is_finished();
                timer.abort();
                waiting
            }
            None => false,
        }
    }

    /// Drop pending triggers on every channel.
    pub fn cancel_all(&mut self) {
        for (_, timer) in self.pending.drain() {
            timer.abort();
        }
    }
}

impl<P> Drop for ChangeScheduler<P> {
    fn drop(&mut self) {
        for (_, timer) in self.pending.drain() {
            timer.abort();
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/preview/scheduler.rs"]
mod tests;

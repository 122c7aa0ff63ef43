//! Finalize runs: render every image at full size into an output folder.

use std::path::Path;

use crate::discover::ImageEntry;
use crate::foundation::core::LayoutRequest;
use crate::foundation::error::{OverlayError, OverlayResult};
use crate::layout::engine::TextLayoutEngine;
use crate::preview::controller::OverlayController;
use crate::report::{LogEntry, ProcessingReport};
use crate::service::{FinalizeOutcome, ImageService};
use crate::settings::OverlaySettings;

impl<S: ImageService> OverlayController<S> {
    /// Render every image with the shared settings.
    ///
    /// Failures are logged per image and never abort the run.
    #[tracing::instrument(skip_all, fields(images = images.len(), output_dir = %output_dir.display()))]
    pub async fn finalize_batch(
        &self,
        images: &[ImageEntry],
        settings: &OverlaySettings,
        output_dir: &Path,
    ) -> ProcessingReport {
        self.clear_cache();
        let mut report = ProcessingReport::default();
        for image in images {
            let request = settings.layout_request(settings.text_for(image));
            report
                .entries
                .push(self.finalize_one(image, &request, output_dir).await);
        }
        tracing::debug!(succeeded = report.succeeded(), failed = report.failed(), "batch finished");
        report
    }

    /// Render the selected images, each with its own text, then log the unselected ones as
    /// skipped.
    #[tracing::instrument(skip_all, fields(images = images.len(), output_dir = %output_dir.display()))]
    pub async fn finalize_individual(
        &self,
        images: &[ImageEntry],
        settings: &OverlaySettings,
        output_dir: &Path,
    ) -> OverlayResult<ProcessingReport> {
        if !images.iter().any(|image| image.selected) {
            return Err(OverlayError::validation("no images selected"));
        }

        self.clear_cache();
        let mut report = ProcessingReport::default();
        for image in images.iter().filter(|image| image.selected) {
            let request = settings.layout_request(image.individual_text());
            report
                .entries
                .push(self.finalize_one(image, &request, output_dir).await);
        }
        report.entries.extend(
            images
                .iter()
                .filter(|image| !image.selected)
                .map(|image| LogEntry::skipped(&image.name)),
        );
        tracing::debug!(
            succeeded = report.succeeded(),
            failed = report.failed(),
            skipped = report.skipped(),
            "individual run finished"
        );
        Ok(report)
    }

    async fn finalize_one(
        &self,
        image: &ImageEntry,
        request: &LayoutRequest,
        output_dir: &Path,
    ) -> LogEntry {
        let dims = self.dimensions_or_default(&image.path).await;
        let layout = TextLayoutEngine::compute_request(dims, request);
        tracing::debug!(
            image = %image.name,
            font_size_px = layout.font_size_px,
            x = layout.x,
            y = layout.y,
            "final layout"
        );

        let outcome = self
            .service()
            .render_final(
                &image.path,
                output_dir,
                image.render_text(&request.text),
                layout,
            )
            .await;

        match outcome {
            Ok(FinalizeOutcome { success: true, .. }) => LogEntry::success(&image.name),
            Ok(FinalizeOutcome { error, .. }) => {
                let reason = error.unwrap_or_else(|| "unknown error".to_owned());
                tracing::warn!(image = %image.name, %reason, "final render failed");
                LogEntry::error(&image.name, &reason)
            }
            Err(err) => {
                tracing::warn!(image = %image.name, %err, "final render failed");
                LogEntry::error(&image.name, &err.to_string())
            }
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/batch/batch.rs"]
mod tests;

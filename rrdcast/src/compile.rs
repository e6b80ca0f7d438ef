//! The per-file compilation pipeline.
//!
//! Strictly sequential within one file: one catalog lookup, then per-source
//! exports in catalog order. Merge order is part of the observable contract
//! (later sequences win field collisions), so nothing here runs
//! concurrently.

use std::path::Path;

use rrdcast_core::{
    BaselineSpec, CompiledResult, Export, MergedFrame, QueryMode, RrdTool, RrdcastError,
    SeriesFrame, SeriesQuery, SourceCatalog, Window, baseline_frames, compile_frame,
    timeshift,
};

pub(crate) async fn compile_file(
    tool: &dyn RrdTool,
    file: &Path,
    query: &SeriesQuery,
) -> Result<CompiledResult, RrdcastError> {
    if !tool.has_file(file).await {
        return Err(RrdcastError::not_found(file.display().to_string()));
    }

    // Resolve the derivation plan before any tool invocation so spec errors
    // surface as client errors, not mid-pipeline failures.
    let (display_shift, baseline) = match query.mode() {
        QueryMode::Raw => (0, None),
        QueryMode::Timeshift(spec) => (timeshift::resolve(spec), None),
        QueryMode::Baseline(spec) => {
            let plan = BaselineSpec::parse(spec)?;
            if plan.periods < 2 {
                return Err(RrdcastError::validation(
                    "at least 2 series required for baseline",
                ));
            }
            // The raw series is read one period back and shifted back into
            // the nominal window at normalization, mirroring the baseline
            // rows it is merged with.
            (plan.offset_seconds(1), Some(plan))
        }
    };

    let catalog = SourceCatalog::parse(&tool.info(file).await?)?;

    let mut merged = MergedFrame::new();
    for ds in &catalog.sources {
        if let Some(plan) = baseline {
            let mut periods: Vec<Export> = Vec::with_capacity(plan.periods as usize);
            for n in 1..=plan.periods {
                periods.push(
                    export_shifted(
                        tool,
                        file,
                        ds,
                        catalog.step,
                        query.window(),
                        plan.offset_seconds(n),
                    )
                    .await?,
                );
            }
            let (mean, stddev) = baseline_frames(&periods, ds)?;
            merged.absorb(mean);
            merged.absorb(stddev);
        }
        let export =
            export_shifted(tool, file, ds, catalog.step, query.window(), display_shift).await?;
        merged.absorb(SeriesFrame::from_export(export, ds));
    }

    Ok(compile_frame(merged, query.format(), display_shift))
}

/// Export one data source with the window moved `shift` seconds back.
///
/// A default window is used as-is: without explicit bounds there is no
/// nominal window to shift, so the offset only affects how timestamps are
/// reported, never what is read.
async fn export_shifted(
    tool: &dyn RrdTool,
    file: &Path,
    ds: &str,
    step: i64,
    window: Window,
    shift: i64,
) -> Result<Export, RrdcastError> {
    let window = match window {
        Window::Default => Window::Default,
        Window::Explicit { start, end } => Window::Explicit {
            start: start - shift,
            end: end - shift,
        },
    };
    tool.xport(file, ds, step, window).await
}

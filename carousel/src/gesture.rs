use crate::{CarouselConfig, DragRelease, PageStep};

/// Decides which way a release pages.
///
/// A drag past `spacing * drag_commit_fraction`, or a fling faster than
/// `velocity_threshold`, moves one page; dragging right reveals the previous item. The
/// rightward checks win when both directions qualify (e.g. dragged right, flung left).
pub fn page_step(spacing: f32, config: &CarouselConfig, release: DragRelease) -> PageStep {
    let threshold = spacing * config.drag_commit_fraction;
    let velocity = release.velocity();

    if release.translation > threshold || velocity > config.velocity_threshold {
        PageStep::Previous
    } else if release.translation < -threshold || velocity < -config.velocity_threshold {
        PageStep::Next
    } else {
        PageStep::Stay
    }
}

/// Resolves a release from `rest_index` to the new rest index in `[0, count - 1]`.
///
/// Never skips more than one page, however far the drag or fling went.
pub fn resolve_release(
    rest_index: usize,
    count: usize,
    spacing: f32,
    config: &CarouselConfig,
    release: DragRelease,
) -> usize {
    page_step(spacing, config, release).apply(rest_index, count)
}

use crate::model::{WeekInstant, Window};

/// ## Summary
/// Canonicalizes a list of windows into the minimal boundary sequence.
///
/// Windows are ordered by open then close boundary, and each window is
/// unioned into the previous one when the two overlap or touch. The result
/// is strictly ascending, alternates open/close, and has a closed gap
/// between consecutive windows. Merging an already canonical sequence
/// returns it unchanged.
#[must_use]
pub fn merge(mut windows: Vec<Window>) -> Vec<WeekInstant> {
    let input = windows.len();
    windows.sort_unstable();

    let mut merged: Vec<Window> = Vec::with_capacity(windows.len());
    for window in windows {
        let absorbed = merged
            .last_mut()
            .is_some_and(|last| last.absorb(window));
        if !absorbed {
            merged.push(window);
        }
    }

    tracing::trace!(input, output = merged.len(), "Merged windows");

    merged
        .into_iter()
        .flat_map(|window| [window.open(), window.close()])
        .collect()
}

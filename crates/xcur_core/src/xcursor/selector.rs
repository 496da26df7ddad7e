use std::cmp::Reverse;

use tracing::debug;

use super::chunk::read_image_header;
use crate::error::{DecodeError, Result};
use crate::types::DirectoryEntry;

/// Widest image accepted by the last-resort rule.
pub const FALLBACK_CEILING: u32 = 48;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionRule {
    SingleCandidate,
    ExactWidth,
    ClosestInWindow,
    LargestUnderCeiling,
    Smallest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub index: usize,
    pub rule: SelectionRule,
}

/// Picks one of `widths` for `desired` size. Rules apply in order:
/// a lone candidate, an exact width, the closest width within
/// `[0.75, 1.5] * desired`, the largest width up to [`FALLBACK_CEILING`],
/// and finally the smallest width. Ties go to the earliest index.
pub fn choose_by_width(widths: &[u32], desired: u32) -> Option<Selection> {
    let pick = |index, rule| Some(Selection { index, rule });

    match widths {
        [] => return None,
        [_] => return pick(0, SelectionRule::SingleCandidate),
        _ => {}
    }

    if let Some(index) = widths.iter().position(|&w| w == desired) {
        return pick(index, SelectionRule::ExactWidth);
    }

    let d = desired as u64;
    let closest = widths
        .iter()
        .enumerate()
        .filter(|&(_, &w)| 4 * w as u64 >= 3 * d && 2 * w as u64 <= 3 * d)
        .min_by_key(|&(_, &w)| w.abs_diff(desired));
    if let Some((index, _)) = closest {
        return pick(index, SelectionRule::ClosestInWindow);
    }

    let largest = widths
        .iter()
        .enumerate()
        .filter(|&(_, &w)| w <= FALLBACK_CEILING)
        .max_by_key(|&(i, &w)| (w, Reverse(i)));
    if let Some((index, _)) = largest {
        return pick(index, SelectionRule::LargestUnderCeiling);
    }

    widths
        .iter()
        .enumerate()
        .min_by_key(|&(_, &w)| w)
        .and_then(|(index, _)| pick(index, SelectionRule::Smallest))
}

/// Chooses the image chunk to extract for `desired_size`.
///
/// Only the headers of image candidates are read here; pixel payloads are
/// left untouched until [`extract_chunk`](super::extract_chunk) runs on the
/// returned entry.
pub fn select_chunk(
    entries: &[DirectoryEntry],
    data: &[u8],
    desired_size: u32,
) -> Result<DirectoryEntry> {
    let candidates: Vec<&DirectoryEntry> = entries.iter().filter(|e| e.is_image()).collect();
    if candidates.is_empty() {
        return Err(DecodeError::NoImageFound {
            entries: entries.len(),
        });
    }

    let widths = candidates
        .iter()
        .map(|entry| {
            let header = read_image_header(data, entry.file_offset)?;
            debug!(
                offset = entry.file_offset,
                width = header.width,
                height = header.height,
                "peeked image candidate"
            );
            Ok(header.width)
        })
        .collect::<Result<Vec<u32>>>()?;

    let selection = choose_by_width(&widths, desired_size).ok_or(DecodeError::NoImageFound {
        entries: entries.len(),
    })?;

    debug!(
        width = widths[selection.index],
        desired_size,
        rule = ?selection.rule,
        "selected image chunk"
    );

    Ok(*candidates[selection.index])
}

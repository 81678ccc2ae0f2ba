//! Responsive card grid layout.
//!
//! This module provides pure functions for:
//! - Deriving the column count from the grid container's width and gap
//! - Partitioning the friend list into rows of at most `column_count`
//!
//! These functions are stateless and can be tested independently. The
//! column count is recomputed from the container width every frame, so the
//! layout stays correct when only the panel (not the window) is resized.

use beacon::Friend;

/// Minimum rendered card width; one more column appears for every
/// additional `MIN_CARD_WIDTH + gap` of container width.
pub const MIN_CARD_WIDTH: f32 = 240.0;

/// Gap used when the style-provided gap is unreadable.
pub const FALLBACK_GAP: f32 = 8.0;

/// One rendered grid row: a consecutive chunk of the entry list.
#[derive(Debug, Clone)]
pub struct GridRow {
    /// Synthetic row ID derived from the row's starting offset.
    pub id: String,
    pub items: Vec<Friend>,
    /// Concatenated size signatures of the members; display caches keyed on
    /// this skip recomputation while the row's contents are unchanged.
    pub size_key: String,
}

/// Returns a usable gap, falling back when the style value is unreadable.
pub fn effective_gap(gap: f32) -> f32 {
    if gap.is_finite() && gap >= 0.0 {
        gap
    } else {
        FALLBACK_GAP
    }
}

/// Computes the column count for a container width and gap.
///
/// Degenerate inputs (unmeasured container, zero/NaN width) degrade to a
/// single column.
pub fn compute_columns(width: f32, gap: f32) -> usize {
    if !width.is_finite() || width <= 0.0 {
        return 1;
    }
    let gap = effective_gap(gap);
    let total = width + gap;
    let step = MIN_CARD_WIDTH + gap;
    ((total / step).floor() as usize).max(1)
}

/// Partitions `source` into consecutive rows of at most `columns` entries,
/// preserving list order.
pub fn build_rows(source: &[Friend], columns: usize) -> Vec<GridRow> {
    let columns = columns.max(1);
    source
        .chunks(columns)
        .enumerate()
        .map(|(chunk_index, items)| {
            let start = chunk_index * columns;
            GridRow {
                id: format!("row-{start}"),
                items: items.to_vec(),
                size_key: row_size_key(items),
            }
        })
        .collect()
}

/// Size key for a row: member size signatures joined in order.
pub fn row_size_key(items: &[Friend]) -> String {
    items
        .iter()
        .map(|f| f.size_signature())
        .collect::<Vec<_>>()
        .join("|")
}

/// Minimum row height for a given column count. Narrow grids get taller
/// cards (more text wraps).
pub fn min_row_height(columns: usize) -> f32 {
    match columns {
        1 => 360.0,
        2 => 300.0,
        3 => 270.0,
        4 => 250.0,
        5 => 230.0,
        _ => 260.0,
    }
}

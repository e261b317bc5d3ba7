//! The process-wide catalog of winning shapes.
//!
//! Each pattern lists the grid cells (row-major, 0–24) that must be covered.
//! Index 12 is the free space: it is always satisfied and is never listed.

use bingo_types::{PatternKey, CARD_CELLS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinPattern {
    pub key: PatternKey,
    pub label: &'static str,
    pub indices: &'static [usize],
}

impl WinPattern {
    /// `NONE` is selectable but never wins.
    pub fn is_playable(&self) -> bool {
        !self.key.is_none()
    }

    pub fn covers(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    /// Per-cell membership, handy for previews.
    pub fn mask(&self) -> [bool; CARD_CELLS] {
        let mut mask = [false; CARD_CELLS];
        for &idx in self.indices {
            mask[idx] = true;
        }
        mask
    }
}

const fn entry(key: PatternKey, label: &'static str, indices: &'static [usize]) -> WinPattern {
    WinPattern {
        key,
        label,
        indices,
    }
}

// Ordered exactly like `PatternKey::ALL` so lookup is an index.
static CATALOG: [WinPattern; 17] = [
    entry(PatternKey::None, "Sin patrón", &[]),
    entry(
        PatternKey::FullCard,
        "Cartón lleno",
        &[
            0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24,
        ],
    ),
    entry(PatternKey::Row1, "Línea 1", &[0, 1, 2, 3, 4]),
    entry(PatternKey::Row2, "Línea 2", &[5, 6, 7, 8, 9]),
    entry(PatternKey::Row3, "Línea 3", &[10, 11, 13, 14]),
    entry(PatternKey::Row4, "Línea 4", &[15, 16, 17, 18, 19]),
    entry(PatternKey::Row5, "Línea 5", &[20, 21, 22, 23, 24]),
    entry(PatternKey::ColumnB, "Columna B", &[0, 5, 10, 15, 20]),
    entry(PatternKey::ColumnI, "Columna I", &[1, 6, 11, 16, 21]),
    entry(PatternKey::ColumnN, "Columna N", &[2, 7, 17, 22]),
    entry(PatternKey::ColumnG, "Columna G", &[3, 8, 13, 18, 23]),
    entry(PatternKey::ColumnO, "Columna O", &[4, 9, 14, 19, 24]),
    entry(PatternKey::FourCorners, "Cuatro esquinas", &[0, 4, 20, 24]),
    entry(PatternKey::DiagonalDown, "Diagonal \\", &[0, 6, 18, 24]),
    entry(PatternKey::DiagonalUp, "Diagonal /", &[4, 8, 16, 20]),
    entry(PatternKey::LetterX, "Letra X", &[0, 4, 6, 8, 16, 18, 20, 24]),
    entry(
        PatternKey::Frame,
        "Marco",
        &[0, 1, 2, 3, 4, 5, 9, 10, 14, 15, 19, 20, 21, 22, 23, 24],
    ),
];

/// Looks up the definition for `key`.
pub fn pattern(key: PatternKey) -> &'static WinPattern {
    &CATALOG[key as usize]
}

pub fn all() -> &'static [WinPattern] {
    &CATALOG
}

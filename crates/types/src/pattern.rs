use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stable tags for the winning shapes.
///
/// The string forms (`"NONE"`, `"FULL_CARD"`, …) are the surface consumed by
/// configuration files and the CLI. New shapes are additive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum PatternKey {
    #[default]
    #[serde(rename = "NONE")]
    None,
    #[serde(rename = "FULL_CARD")]
    FullCard,
    #[serde(rename = "ROW_1")]
    Row1,
    #[serde(rename = "ROW_2")]
    Row2,
    #[serde(rename = "ROW_3")]
    Row3,
    #[serde(rename = "ROW_4")]
    Row4,
    #[serde(rename = "ROW_5")]
    Row5,
    #[serde(rename = "COLUMN_B")]
    ColumnB,
    #[serde(rename = "COLUMN_I")]
    ColumnI,
    #[serde(rename = "COLUMN_N")]
    ColumnN,
    #[serde(rename = "COLUMN_G")]
    ColumnG,
    #[serde(rename = "COLUMN_O")]
    ColumnO,
    #[serde(rename = "FOUR_CORNERS")]
    FourCorners,
    #[serde(rename = "DIAGONAL_DOWN")]
    DiagonalDown,
    #[serde(rename = "DIAGONAL_UP")]
    DiagonalUp,
    #[serde(rename = "LETTER_X")]
    LetterX,
    #[serde(rename = "FRAME")]
    Frame,
}

impl PatternKey {
    pub const ALL: [PatternKey; 17] = [
        PatternKey::None,
        PatternKey::FullCard,
        PatternKey::Row1,
        PatternKey::Row2,
        PatternKey::Row3,
        PatternKey::Row4,
        PatternKey::Row5,
        PatternKey::ColumnB,
        PatternKey::ColumnI,
        PatternKey::ColumnN,
        PatternKey::ColumnG,
        PatternKey::ColumnO,
        PatternKey::FourCorners,
        PatternKey::DiagonalDown,
        PatternKey::DiagonalUp,
        PatternKey::LetterX,
        PatternKey::Frame,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PatternKey::None => "NONE",
            PatternKey::FullCard => "FULL_CARD",
            PatternKey::Row1 => "ROW_1",
            PatternKey::Row2 => "ROW_2",
            PatternKey::Row3 => "ROW_3",
            PatternKey::Row4 => "ROW_4",
            PatternKey::Row5 => "ROW_5",
            PatternKey::ColumnB => "COLUMN_B",
            PatternKey::ColumnI => "COLUMN_I",
            PatternKey::ColumnN => "COLUMN_N",
            PatternKey::ColumnG => "COLUMN_G",
            PatternKey::ColumnO => "COLUMN_O",
            PatternKey::FourCorners => "FOUR_CORNERS",
            PatternKey::DiagonalDown => "DIAGONAL_DOWN",
            PatternKey::DiagonalUp => "DIAGONAL_UP",
            PatternKey::LetterX => "LETTER_X",
            PatternKey::Frame => "FRAME",
        }
    }

    pub fn is_none(self) -> bool {
        self == PatternKey::None
    }
}

impl fmt::Display for PatternKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PatternKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_uppercase();
        PatternKey::ALL
            .into_iter()
            .find(|k| k.as_str() == wanted)
            .ok_or_else(|| format!("Unknown pattern key: {}", s))
    }
}

use std::fmt;

use serde::{Deserialize, Serialize};

/// Minimum stream length that covers every field.
pub const HEADER_LEN_REQUIRED: u64 = 414;

const F32_WIDTH: usize = 4;
const U16_WIDTH: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRange {
    pub start: usize,
    pub end: usize,
}

impl ByteRange {
    /// Whether the whole range lies inside a stream of `len` bytes.
    pub fn fits_within(&self, len: u64) -> bool {
        self.end as u64 <= len
    }

    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset < self.end
    }
}

/// One of the fixed-offset values stored in `header.bin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    #[serde(rename = "dollars")]
    ForeignCurrency,
    #[serde(rename = "rubles")]
    LocalCurrency,
    #[serde(rename = "year")]
    Year,
}

impl Field {
    /// Decode/encode order.
    pub const ALL: [Field; 3] = [Field::ForeignCurrency, Field::LocalCurrency, Field::Year];

    pub const FOREIGN_CURRENCY_OFFSET: u64 = 388;
    pub const LOCAL_CURRENCY_OFFSET: u64 = 392;
    pub const YEAR_OFFSET: u64 = 412;

    pub fn offset(&self) -> u64 {
        match *self {
            Self::ForeignCurrency => Self::FOREIGN_CURRENCY_OFFSET,
            Self::LocalCurrency => Self::LOCAL_CURRENCY_OFFSET,
            Self::Year => Self::YEAR_OFFSET,
        }
    }

    pub fn width(&self) -> usize {
        match *self {
            Self::ForeignCurrency | Self::LocalCurrency => F32_WIDTH,
            Self::Year => U16_WIDTH,
        }
    }

    pub fn range(&self) -> ByteRange {
        let start = self.offset() as usize;
        ByteRange {
            start,
            end: start + self.width(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match *self {
            Self::ForeignCurrency => "dollars",
            Self::LocalCurrency => "rubles",
            Self::Year => "year",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

use serde::{Deserialize, Serialize};

/// The three editable values of a save header.
///
/// Rebuilt on every load and dropped after every save; it never holds the
/// file it came from. Equality compares the floats bit for bit, so `-0.0`
/// and `0.0` differ and a NaN equals the same NaN payload.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SaveRecord {
    pub year: u16,
    #[serde(rename = "rubles")]
    pub local_currency: f32,
    #[serde(rename = "dollars")]
    pub foreign_currency: f32,
}

impl SaveRecord {
    pub fn new(year: u16, local_currency: f32, foreign_currency: f32) -> Self {
        Self {
            year,
            local_currency,
            foreign_currency,
        }
    }
}

impl PartialEq for SaveRecord {
    fn eq(&self, other: &Self) -> bool {
        self.year == other.year
            && self.local_currency.to_bits() == other.local_currency.to_bits()
            && self.foreign_currency.to_bits() == other.foreign_currency.to_bits()
    }
}

impl Eq for SaveRecord {}

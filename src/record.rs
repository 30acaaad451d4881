use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

/// The four fixed sales territories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    West,
    Mid,
    Central,
    East,
}

impl Region {
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'w' => Some(Region::West),
            'm' => Some(Region::Mid),
            'c' => Some(Region::Central),
            'e' => Some(Region::East),
            _ => None,
        }
    }

    pub fn code(&self) -> char {
        match self {
            Region::West => 'w',
            Region::Mid => 'm',
            Region::Central => 'c',
            Region::East => 'e',
        }
    }
}

/// One sales transaction.
///
/// Records entered at the terminal go through the field rules in `fields`,
/// so their region is one of the fixed codes, their amount is positive and
/// their quarter matches their date. Imported rows keep whatever the file
/// said for region, amount and quarter (see `import`).
#[derive(Debug, Clone, PartialEq)]
pub struct SalesRecord {
    pub date: NaiveDate,
    pub quarter: u8,
    pub region: String,
    pub amount: Decimal,
}

impl SalesRecord {
    /// Record built from interactively validated fields. The quarter is
    /// derived from the date, never asked for.
    pub fn from_parts(date: NaiveDate, region: Region, amount: Decimal) -> Self {
        Self {
            date,
            quarter: quarter_of(date),
            region: region.code().to_string(),
            amount,
        }
    }
}

/// Fiscal quarter of a date: months 1-3 map to 1, ..., months 10-12 to 4.
pub fn quarter_of(date: NaiveDate) -> u8 {
    ((date.month() - 1) / 3 + 1) as u8
}

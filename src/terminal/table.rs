use console::{pad_str, Alignment};
use rust_decimal::Decimal;

use crate::record::SalesRecord;

const INDEX_WIDTH: usize = 4;
const DATE_WIDTH: usize = 12;
const QUARTER_WIDTH: usize = 9;
const REGION_WIDTH: usize = 8;
const AMOUNT_WIDTH: usize = 12;

pub trait LineWriter {
    fn write_line(&self, line: &str);
}

#[derive(Clone, Copy)]
pub struct StdoutLineWriter;
impl LineWriter for StdoutLineWriter {
    fn write_line(&self, line: &str) {
        println!("{}", line);
    }
}

/// Renders the sales collection as an aligned table with a trailing TOTAL
/// row.
pub struct SalesTable<W: LineWriter> {
    writer: W,
}

impl SalesTable<StdoutLineWriter> {
    pub fn new_stdout() -> Self {
        Self::new(StdoutLineWriter)
    }
}

impl<W: LineWriter> SalesTable<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn print(&self, sales: &[SalesRecord]) {
        self.write_row("", "Date", "Quarter", "Region", "Amount");
        self.write_separator();
        for (index, record) in sales.iter().enumerate() {
            self.write_row(
                &format!("{}.", index + 1),
                &record.date.format("%Y-%m-%d").to_string(),
                &record.quarter.to_string(),
                &record.region,
                &format_amount(record.amount),
            );
        }
        self.write_separator();
        let total: Decimal = sales.iter().map(|record| record.amount).sum();
        self.write_row("", "TOTAL", "", "", &format_amount(total));
    }

    fn write_row(&self, index: &str, date: &str, quarter: &str, region: &str, amount: &str) {
        self.writer.write_line(&format!(
            "{}{}{}{}{}",
            pad_str(index, INDEX_WIDTH, Alignment::Left, None),
            pad_str(date, DATE_WIDTH, Alignment::Left, None),
            pad_str(quarter, QUARTER_WIDTH, Alignment::Left, None),
            pad_str(region, REGION_WIDTH, Alignment::Left, None),
            pad_str(amount, AMOUNT_WIDTH, Alignment::Right, None),
        ));
    }

    fn write_separator(&self) {
        let width = INDEX_WIDTH + DATE_WIDTH + QUARTER_WIDTH + REGION_WIDTH + AMOUNT_WIDTH;
        self.writer.write_line(&"-".repeat(width));
    }
}

fn format_amount(amount: Decimal) -> String {
    format!("{:.1}", amount)
}

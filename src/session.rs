use std::collections::BTreeSet;

use crate::record::SalesRecord;

/// All mutable state of one interactive session: the sales recorded or
/// imported so far, in arrival order, and the names of files already
/// imported. The CLI owns exactly one `Session` and passes it to each
/// operation; nothing is process-global.
#[derive(Debug, Default)]
pub struct Session {
    sales: Vec<SalesRecord>,
    imported_files: BTreeSet<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, record: SalesRecord) {
        self.sales.push(record);
    }

    pub fn sales(&self) -> &[SalesRecord] {
        &self.sales
    }

    pub fn is_imported(&self, filename: &str) -> bool {
        self.imported_files.contains(filename)
    }

    pub fn mark_imported(&mut self, filename: &str) {
        self.imported_files.insert(filename.to_string());
    }

    pub fn imported_files(&self) -> &BTreeSet<String> {
        &self.imported_files
    }
}

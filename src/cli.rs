use std::path::PathBuf;

use anyhow::{Context as _, Result};
use chrono::NaiveDate;
use console::style;
use dialoguer::{theme::ColorfulTheme, Select};

use crate::args::Args;
use crate::fields;
use crate::import;
use crate::record::SalesRecord;
use crate::session::Session;
use crate::store;
use crate::terminal::{self, SalesTable};

pub fn main(args: Args) -> Result<()> {
    let mut cli = Cli::new(args.data_dir);
    cli.run()
}

const MENU: &[&str] = &[
    "Add sales",
    "View sales",
    "Import sales",
    "Save imported files",
    "Exit",
];

pub struct Cli {
    session: Session,
    data_dir: PathBuf,
}

impl Cli {
    fn new(data_dir: PathBuf) -> Self {
        Self {
            session: Session::new(),
            data_dir,
        }
    }

    fn run(&mut self) -> Result<()> {
        loop {
            println!();
            let choice = Select::with_theme(&ColorfulTheme::default())
                .with_prompt("Choose an option")
                .items(MENU)
                .default(0)
                .interact()?;
            match choice {
                0 => self.main_add_sale()?,
                1 => self.main_view_sales()?,
                2 => self.main_import_file()?,
                3 => self.main_save_registry()?,
                _ => break,
            }
        }
        Ok(())
    }

    fn main_add_sale(&mut self) -> Result<()> {
        let amount = terminal::field("Amount", fields::parse_amount)?;
        let year = terminal::field("Year (2000-2999)", fields::parse_year)?;
        let month = terminal::field("Month (1-12)", fields::parse_month)?;
        let day = terminal::field("Day (1-28)", fields::parse_day)?;
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .expect("every day in 1-28 exists in every month");
        let region = terminal::field("Region ('w', 'm', 'c', 'e')", fields::parse_region)?;

        self.session
            .add(SalesRecord::from_parts(date, region, amount));
        println!(
            "Sales for {} added.",
            style(date.format("%Y-%m-%d")).green()
        );
        Ok(())
    }

    fn main_view_sales(&self) -> Result<()> {
        println!("{}", style("Sales:").bold().underlined());
        if self.session.sales().is_empty() {
            println!("{}", style("(none)").italic());
        } else {
            SalesTable::new_stdout().print(self.session.sales());
        }
        Ok(())
    }

    fn main_import_file(&mut self) -> Result<()> {
        let filename = terminal::input("Name of file to import")?;
        match import::import_file(&self.data_dir, &filename, &mut self.session) {
            Ok(count) => println!(
                "Imported {} sales records from {}.",
                style(count).green(),
                filename
            ),
            Err(err) => println!("{}", style(format!("Import failed: {err}")).red()),
        }
        Ok(())
    }

    fn main_save_registry(&self) -> Result<()> {
        store::save_registry(&self.data_dir, self.session.imported_files())
            .context("Failed to save the import registry")?;
        println!("Saved the list of imported files.");
        Ok(())
    }
}

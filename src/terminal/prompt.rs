use anyhow::Result;
use console::style;
use dialoguer::{theme::ColorfulTheme, Input};

use crate::error::FieldError;

pub fn input(prompt: &str) -> Result<String> {
    Ok(Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .interact()?)
}

/// Asks for `label` until `parse` accepts the input. Rejections are printed
/// and only this field is asked again; fields the caller already accepted
/// stay accepted.
pub fn field<T>(label: &str, parse: impl Fn(&str) -> Result<T, FieldError>) -> Result<T> {
    loop {
        let raw = input(label)?;
        match parse(&raw) {
            Ok(value) => return Ok(value),
            Err(err) => println!("{}", style(err).red()),
        }
    }
}

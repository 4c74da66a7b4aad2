use std::{
    io::{BufRead, Write},
    path::Path,
};

use log::{debug, warn};

use crate::{
    error::{Error, Result},
    report::ItemTable,
    storage::Category,
};

use super::{input::Input, session::Session};

/// Menu commands accepted by the warehouse session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Print every item
    ShowInventory,
    /// Add to (or take from) one item's stock
    UpdateStock,
    /// Fill a purchase order file and print its receipt
    ProcessOrder,
    /// Print one category sorted by price
    ShowCategory,
    /// Persist the database and configuration
    Write,
    /// End the session, optionally saving first
    Quit,
}

pub const MENU: &str = "
**********WAREHOUSE MANAGER**********
 s) Show Inventory
 u) Update Stock
 p) Process Purchase Order
 c) Show Category
 w) Write Changes to File
 q) Quit

  >> ";

fn prompt<W: Write>(out: &mut W, text: &str) -> Result<()> {
    write!(out, "{text}")?;
    out.flush()?;
    Ok(())
}

fn invalid_input<R: BufRead, W: Write>(input: &mut Input<R>, out: &mut W) -> Result<()> {
    input.discard_line();
    writeln!(out, "Invalid input.")?;
    Ok(())
}

fn save<W: Write>(session: &Session, out: &mut W) -> Result<()> {
    match session.save() {
        Ok(()) => writeln!(out, "Database Saved!")?,
        Err(e) => {
            warn!("save failed: {e}");
            writeln!(out, "error: {e}")?;
        }
    }
    Ok(())
}

impl Command {
    pub fn execute<R: BufRead, W: Write>(
        &self,
        session: &mut Session,
        input: &mut Input<R>,
        out: &mut W,
    ) -> Result<()> {
        match self {
            Self::ShowInventory => {
                write!(out, "\n{}", ItemTable(session.inventory().items()))?;
            }
            Self::UpdateStock => {
                prompt(out, "ID and Quantity to Add (separated by space): ")?;
                let Some(id) = input.parse::<i32>()? else {
                    session.terminate();
                    return Ok(());
                };
                let Ok(id) = id else {
                    return invalid_input(input, out);
                };

                let Some(delta) = input.parse::<i64>()? else {
                    session.terminate();
                    return Ok(());
                };
                let Ok(delta) = delta else {
                    return invalid_input(input, out);
                };

                match session.update_stock(id, delta) {
                    Ok(()) => writeln!(out, "Stock updated successfully!")?,
                    Err(Error::NotFound(_)) => writeln!(out, "Item not found!")?,
                    Err(e) => writeln!(out, "error: {e}")?,
                }
            }
            Self::ProcessOrder => {
                prompt(out, "Order file name: ")?;
                let Some(path) = input.token()? else {
                    session.terminate();
                    return Ok(());
                };

                match session.process_order(Path::new(&path)) {
                    Ok(receipt) => write!(out, "\n{receipt}")?,
                    Err(e) => {
                        warn!("order failed: {e}");
                        writeln!(out, "error: {e}")?;
                    }
                }
            }
            Self::ShowCategory => {
                prompt(out, "Category to display: ")?;
                let Some(label) = input.token()? else {
                    session.terminate();
                    return Ok(());
                };

                let category = Category::parse(&label);
                debug!("showing category {category} for `{label}`");
                write!(out, "\n{}", ItemTable(&session.category(category)))?;
            }
            Self::Write => save(session, out)?,
            Self::Quit => {
                prompt(out, "Save Database? (y/n): ")?;
                let answer = input.token()?.unwrap_or_default();

                if answer.eq_ignore_ascii_case("y") {
                    save(session, out)?;
                } else {
                    writeln!(out, "Quit without saving.")?;
                }
                session.terminate();
            }
        }

        Ok(())
    }
}

impl TryFrom<&str> for Command {
    type Error = String;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        match value.to_ascii_lowercase().as_str() {
            "s" => Ok(Self::ShowInventory),
            "u" => Ok(Self::UpdateStock),
            "p" => Ok(Self::ProcessOrder),
            "c" => Ok(Self::ShowCategory),
            "w" => Ok(Self::Write),
            "q" => Ok(Self::Quit),
            _ => Err(format!("unknown command `{value}`.")),
        }
    }
}

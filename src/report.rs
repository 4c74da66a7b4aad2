//! Fixed-width text tables for item listings and receipts.

use std::fmt::{self, Display, Formatter};

use crate::{order::Receipt, storage::Item};

const TABLE_WIDTH: usize = 71;
const RECEIPT_WIDTH: usize = 59;

/// Formats an amount in minor units as a decimal, e.g. `1299` as `12.99`.
pub fn money(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    format!("{sign}{}.{:02}", cents / 100, cents % 100)
}

/// Listing of items, one row each
pub struct ItemTable<'a>(pub &'a [Item]);

impl Display for ItemTable<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, " {} ", "-".repeat(TABLE_WIDTH))?;
        writeln!(
            f,
            "|{:<6}|{:<25}|{:<8}|{:<8}|{:<20}|",
            "ID", "Name", "Price", "Qty", "Category"
        )?;
        writeln!(
            f,
            "|{}|{}|{}|{}|{}|",
            "=".repeat(6),
            "=".repeat(25),
            "=".repeat(8),
            "=".repeat(8),
            "=".repeat(20)
        )?;

        for item in self.0 {
            writeln!(
                f,
                "|{:<6}|{:<25}|${:<7}|{:<8}|{:<20}|",
                item.id,
                item.name,
                money(item.price),
                item.quantity,
                item.category
            )?;
        }

        writeln!(f, " {}", "-".repeat(TABLE_WIDTH))
    }
}

fn receipt_rule(f: &mut Formatter<'_>, fill: &str) -> fmt::Result {
    writeln!(
        f,
        "|{}|{}|{}|{}|{}|",
        fill.repeat(6),
        fill.repeat(25),
        fill.repeat(8),
        fill.repeat(8),
        fill.repeat(8)
    )
}

impl Display for Receipt {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, " {} ", "*".repeat(RECEIPT_WIDTH))?;
        writeln!(
            f,
            "|{:<width$}|",
            format!("Receipt #{}", self.number),
            width = RECEIPT_WIDTH
        )?;
        writeln!(f, "|{}|", "-".repeat(RECEIPT_WIDTH))?;
        writeln!(
            f,
            "|{:<6}|{:<25}|{:<8}|{:<8}|{:<8}|",
            "ID", "Name", "Price", "Qty", "Total"
        )?;
        receipt_rule(f, "=")?;

        for line in &self.lines {
            match &line.item {
                Some(item) => writeln!(
                    f,
                    "|{:<6}|{:<25}|${:<7}|{:<8}|${:<7}|",
                    line.id,
                    item.name,
                    money(item.price),
                    line.allocated,
                    money(line.total())
                )?,
                None => writeln!(
                    f,
                    "|{:<6}|{:<25}|{:8}|{:8}|{:8}|",
                    line.id, "**NO STOCK**", "", "", ""
                )?,
            }
        }

        receipt_rule(f, "-")?;
        writeln!(
            f,
            "|{:6}|{:25}|{:8}|{:8}|${:<7}|",
            "",
            "",
            "",
            "",
            money(self.total())
        )?;
        writeln!(f, " {} ", "*".repeat(RECEIPT_WIDTH))
    }
}

//! Purchase order processing.
//!
//! An order file is a stream of whitespace separated `id quantity` pairs. Each
//! pair becomes one receipt line; stock is deducted as the order is read.

use std::{fs, path::Path};

use log::{debug, info, warn};

use crate::{
    error::{Error, Result},
    storage::{Inventory, Item},
};

/// One requested `(id, quantity)` pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderLine {
    pub id: i32,
    pub quantity: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptLine {
    pub id: i32,
    pub allocated: i64,
    /// Snapshot of the ordered item, `None` when the id is not stocked
    pub item: Option<Item>,
}

impl ReceiptLine {
    /// `allocated * price`, zero for items that are not stocked.
    ///
    /// Saturates instead of overflowing.
    pub fn total(&self) -> i64 {
        self.item
            .as_ref()
            .map_or(0, |item| self.allocated.saturating_mul(item.price))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub number: u32,
    pub lines: Vec<ReceiptLine>,
}

impl Receipt {
    pub fn total(&self) -> i64 {
        self.lines
            .iter()
            .map(ReceiptLine::total)
            .fold(0, i64::saturating_add)
    }
}

/// Reads `id quantity` pairs until the input ends or stops being numeric.
pub fn parse_order(text: &str) -> Vec<OrderLine> {
    let mut lines = Vec::new();
    let mut tokens = text.split_whitespace();

    while let Some(id) = tokens.next() {
        let Some(quantity) = tokens.next() else {
            warn!("order ends with id `{id}` and no quantity");
            break;
        };

        match (id.parse::<i32>(), quantity.parse::<i64>()) {
            (Ok(id), Ok(quantity)) => lines.push(OrderLine { id, quantity }),
            _ => {
                warn!("stopping order at non-numeric pair `{id} {quantity}`");
                break;
            }
        }
    }

    lines
}

/// Allocates stock for every order line and deducts it from the inventory.
///
/// Each line gets the lesser of the requested amount and what is left in stock,
/// so a negative request puts stock back. Unknown ids get nothing.
pub fn process(inventory: &mut Inventory, order: &[OrderLine], number: u32) -> Result<Receipt> {
    let mut lines = Vec::with_capacity(order.len());

    for line in order {
        let allocated = match inventory.get(line.id) {
            Some(item) => {
                let allocated = line.quantity.min(item.quantity);
                inventory.adjust_quantity(line.id, allocated.saturating_neg())?;
                allocated
            }
            None => 0,
        };

        debug!(
            "order line {}: requested {}, allocated {allocated}",
            line.id, line.quantity
        );
        lines.push(ReceiptLine {
            id: line.id,
            allocated,
            item: inventory.get(line.id).cloned(),
        });
    }

    Ok(Receipt { number, lines })
}

pub fn process_file(inventory: &mut Inventory, path: &Path, number: u32) -> Result<Receipt> {
    let text = fs::read_to_string(path).map_err(|source| Error::OrderOpen {
        path: path.to_path_buf(),
        source,
    })?;

    let receipt = process(inventory, &parse_order(&text), number)?;
    info!(
        "processed order {} into receipt #{number} with {} lines",
        path.display(),
        receipt.lines.len()
    );
    Ok(receipt)
}

use std::{
    fs::File,
    io::{Read, Write},
    path::Path,
};

use csv::StringRecord;
use log::{debug, info, warn};

use crate::error::{Error, Result};

use super::{
    category::Category,
    item::Item,
    record::{self, format_record, parse_record},
    write_atomic,
};

/// Maximum number of items the warehouse tracks.
pub const CAPACITY: usize = 100;

/// In-memory item table.
///
/// Items keep the order they had in the database file. Only quantities change
/// during a session; items are never added or removed after loading.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    header: StringRecord,
    items: Vec<Item>,
}

impl Inventory {
    pub fn new(header: &str, items: Vec<Item>) -> Result<Self> {
        let header = match header {
            "" => StringRecord::new(),
            header => StringRecord::from(header.split(',').collect::<Vec<_>>()),
        };
        Self::with_header(header, items)
    }

    fn with_header(header: StringRecord, items: Vec<Item>) -> Result<Self> {
        if items.len() > CAPACITY {
            return Err(Error::Capacity(CAPACITY));
        }

        Ok(Self { header, items })
    }

    /// Reads a database: one header row followed by one item per row.
    ///
    /// A row carrying the sentinel id ends the active data; anything after it is
    /// dropped.
    pub fn from_reader<R: Read>(input: R) -> Result<Self> {
        let mut reader = record::reader(input);
        let header = reader.headers()?.clone();

        let mut items = Vec::new();
        for row in reader.records() {
            let row = row?;
            let line = row.position().map_or(0, |pos| pos.line());

            let item = parse_record(&row).map_err(|e| match e {
                Error::Format(msg) => Error::Format(format!("line {line}: {msg}")),
                other => other,
            })?;
            if item.is_sentinel() {
                warn!("sentinel row at line {line}; ignoring the rest");
                break;
            }
            if items.len() == CAPACITY {
                return Err(Error::Capacity(CAPACITY));
            }
            items.push(item);
        }

        Self::with_header(header, items)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| Error::DatabaseOpen {
            path: path.to_path_buf(),
            source,
        })?;
        let inventory = Self::from_reader(file).map_err(|source| Error::Database {
            path: path.to_path_buf(),
            source: Box::new(source),
        })?;
        info!("loaded {} items from {}", inventory.len(), path.display());
        Ok(inventory)
    }

    /// Header row, written back unchanged on save
    pub fn header(&self) -> &StringRecord {
        &self.header
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Position of the first item with the given id
    pub fn find(&self, id: i32) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    pub fn get(&self, id: i32) -> Option<&Item> {
        self.find(id).map(|index| &self.items[index])
    }

    /// Adds `delta` to an item's stock. Stock never drops below zero.
    pub fn adjust_quantity(&mut self, id: i32, delta: i64) -> Result<()> {
        let index = self.find(id).ok_or(Error::NotFound(id))?;
        let item = &mut self.items[index];

        item.quantity = item.quantity.saturating_add(delta).max(0);
        debug!("item {id} quantity now {}", item.quantity);
        Ok(())
    }

    /// Items in `category` ordered by ascending price.
    ///
    /// Items with equal prices keep their table order.
    pub fn by_category(&self, category: Category) -> Vec<Item> {
        let mut selection: Vec<Item> = self
            .items
            .iter()
            .filter(|item| item.category == category)
            .cloned()
            .collect();

        selection.sort_by_key(|item| item.price);
        selection
    }

    /// Writes the header row followed by one row per item
    pub fn write_to<W: Write>(&self, output: W) -> Result<()> {
        let mut writer = record::writer(output);
        if !self.header.is_empty() {
            writer.write_record(&self.header)?;
        }
        for item in &self.items {
            writer.write_record(&format_record(item))?;
        }
        writer.flush()?;
        Ok(())
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let mut buf = Vec::new();
        self.write_to(&mut buf)?;
        write_atomic(path, &buf)?;
        info!("saved {} items to {}", self.len(), path.display());
        Ok(())
    }
}

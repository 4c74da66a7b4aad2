use std::{
    io::{Read, Write},
    str::FromStr,
};

use csv::{QuoteStyle, Reader, ReaderBuilder, StringRecord, Writer, WriterBuilder};

use crate::error::{Error, Result};

use super::{category::Category, item::Item};

const FIELDS: usize = 5;

/// Reader for the database format: a header row, unquoted comma separated
/// fields, and rows that may carry more fields than the header.
pub fn reader<R: Read>(input: R) -> Reader<R> {
    ReaderBuilder::new()
        .has_headers(true)
        .quoting(false)
        .flexible(true)
        .from_reader(input)
}

/// Writer for the database format. Fields are written as-is, without quoting.
pub fn writer<W: Write>(output: W) -> Writer<W> {
    WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .flexible(true)
        .from_writer(output)
}

fn parse_number<T: FromStr>(field: &str, text: &str) -> Result<T> {
    text.trim()
        .parse()
        .map_err(|_| Error::Format(format!("invalid {field} `{text}`")))
}

/// Parses one `id,name,price,quantity,category` record.
///
/// Fields past the fifth are ignored.
pub fn parse_record(record: &StringRecord) -> Result<Item> {
    let fields: Vec<&str> = record.iter().take(FIELDS).collect();

    let [id, name, price, quantity, category] = fields[..] else {
        return Err(Error::Format(format!(
            "expected {FIELDS} fields, found {} in `{}`",
            fields.len(),
            fields.join(",")
        )));
    };

    Ok(Item {
        id: parse_number("id", id)?,
        name: name.to_string(),
        price: parse_number("price", price)?,
        quantity: parse_number("quantity", quantity)?,
        category: Category::parse(category),
    })
}

pub fn format_record(item: &Item) -> StringRecord {
    StringRecord::from(vec![
        item.id.to_string(),
        item.name.clone(),
        item.price.to_string(),
        item.quantity.to_string(),
        item.category.to_string(),
    ])
}

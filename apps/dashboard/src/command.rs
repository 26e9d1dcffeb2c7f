//! Text commands typed at the dashboard prompt.

use std::str::FromStr;

use inventory_client::ProductField;
use inventory_core::listing::SortField;
use inventory_core::ProductView;
use thiserror::Error;

/// Shown by `help`.
pub const HELP: &str = "\
Commands:
  all | expired | near-expiry     switch filter
  refresh                         refetch the active filter
  search [text]                   filter by name (no text clears)
  sort <name|quantity|expiry>     sort, again to flip direction
  next | prev                     change page
  new <field> <value>             fill the add-product form
  submit                          add the product
  edit <id>                       edit a row inline
  set <field> <value>             change the row being edited
  save | cancel                   finish editing
  delete <id>                     delete a row (asks first)
  help | quit

Fields: name, quantity, expiry (YYYY-MM-DD, empty for none)";

/// A parsed dashboard command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Filter(ProductView),
    Refresh,
    Search(String),
    Sort(SortField),
    Next,
    Previous,
    FormField(ProductField, String),
    Submit,
    Edit(i64),
    EditField(ProductField, String),
    Save,
    Cancel,
    Delete(i64),
    Help,
    Quit,
}

/// Why a line could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty command")]
    Empty,

    #[error("unknown command: {0} (try `help`)")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("{0}")]
    Invalid(String),
}

fn parse_id(arg: &str, usage: &'static str) -> Result<i64, ParseError> {
    if arg.is_empty() {
        return Err(ParseError::Usage(usage));
    }
    arg.parse()
        .map_err(|_| ParseError::Invalid(format!("not a product id: {}", arg)))
}

fn parse_field_value(rest: &str, usage: &'static str) -> Result<(ProductField, String), ParseError> {
    let (field, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
    if field.is_empty() {
        return Err(ParseError::Usage(usage));
    }
    let field = field.parse::<ProductField>().map_err(ParseError::Invalid)?;
    Ok((field, value.trim().to_string()))
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map(|(w, r)| (w, r.trim()))
            .unwrap_or((line, ""));

        let command = match word.to_ascii_lowercase().as_str() {
            "" => return Err(ParseError::Empty),
            "all" => Command::Filter(ProductView::All),
            "expired" => Command::Filter(ProductView::Expired),
            "near-expiry" | "near" => Command::Filter(ProductView::NearExpiry),
            "refresh" => Command::Refresh,
            "search" => Command::Search(rest.to_string()),
            "sort" => {
                if rest.is_empty() {
                    return Err(ParseError::Usage("sort <name|quantity|expiry>"));
                }
                Command::Sort(rest.parse().map_err(ParseError::Invalid)?)
            }
            "next" => Command::Next,
            "prev" | "previous" => Command::Previous,
            "new" => {
                let (field, value) = parse_field_value(rest, "new <field> <value>")?;
                Command::FormField(field, value)
            }
            "submit" | "add" => Command::Submit,
            "edit" => Command::Edit(parse_id(rest, "edit <id>")?),
            "set" => {
                let (field, value) = parse_field_value(rest, "set <field> <value>")?;
                Command::EditField(field, value)
            }
            "save" => Command::Save,
            "cancel" => Command::Cancel,
            "delete" | "rm" => Command::Delete(parse_id(rest, "delete <id>")?),
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => return Err(ParseError::Unknown(other.to_string())),
        };

        Ok(command)
    }
}

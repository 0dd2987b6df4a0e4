//! # Text Rendering
//!
//! Every read produces a [`Selection`]; the plain-text body is derived from it here so
//! the structured and text responses never come from different queries.
//!
//! Text lines are `Label = value` pairs separated by `", "`. Each record of a listing
//! ends with the platform line terminator. A listing over an empty *collection* is the
//! sentinel `none`, while a single-record lookup that finds nothing is `None`.

/// Listing body when the collection holds no records at all.
pub const EMPTY_COLLECTION: &str = "none";

/// Single-record body when the id is unknown.
pub const MISSING_RECORD: &str = "None";

pub const LINE_TERMINATOR: &str = if cfg!(windows) { "\r\n" } else { "\n" };

/// Records selected by a read, in collection order, together with the size of the
/// collection they were selected from.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection<T> {
    pub records: Vec<T>,
    pub collection_size: usize,
}

impl<T> Selection<T> {
    pub fn new(records: Vec<T>, collection_size: usize) -> Self {
        Self {
            records,
            collection_size,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn into_records(self) -> Vec<T> {
        self.records
    }

    /// Renders one line per record. An empty collection renders as [`EMPTY_COLLECTION`];
    /// a non-empty collection with no matches renders as an empty string.
    pub fn render_text<F>(&self, line: F) -> String
    where
        F: Fn(&T) -> String,
    {
        if self.collection_size == 0 {
            return EMPTY_COLLECTION.to_string();
        }
        self.records
            .iter()
            .map(|record| format!("{}{}", line(record), LINE_TERMINATOR))
            .collect()
    }
}

/// Renders a single lookup, or [`MISSING_RECORD`].
pub fn render_record<T, F>(record: Option<&T>, line: F) -> String
where
    F: Fn(&T) -> String,
{
    match record {
        Some(record) => line(record),
        None => MISSING_RECORD.to_string(),
    }
}

/// Joins `(label, value)` pairs into `ID = hos001, Name = General`.
pub fn fields_line(fields: &[(&str, &str)]) -> String {
    fields
        .iter()
        .map(|(label, value)| format!("{label} = {value}"))
        .collect::<Vec<_>>()
        .join(", ")
}

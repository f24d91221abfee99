//! Tabular datasets
//!
//! A `Dataset` is an ordered set of equally long, uniquely named columns.
//! Equal length is what makes two columns row-aligned for joint analysis.

use crate::{Column, ColumnData, Error, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, instrument};

/// Tokens treated as missing when reading delimited text
pub const MISSING_TOKENS: &[&str] = &["", "NA", "N/A", "NaN", "nan", "null", "NULL", "None"];

/// Ordered collection of row-aligned columns
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    columns: Vec<Column>,
}

impl Dataset {
    /// Build a dataset, checking alignment and name uniqueness
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let mut dataset = Self::default();
        for column in columns {
            dataset.push(column)?;
        }
        Ok(dataset)
    }

    /// Append a column
    pub fn push(&mut self, column: Column) -> Result<()> {
        if let Some(first) = self.columns.first() {
            if first.len() != column.len() {
                return Err(Error::size_mismatch(
                    first.len(),
                    column.len(),
                    &format!("column '{}'", column.name()),
                ));
            }
        }
        if self.columns.iter().any(|c| c.name() == column.name()) {
            return Err(Error::InvalidInput(format!(
                "Duplicate column name '{}'",
                column.name()
            )));
        }
        self.columns.push(column);
        Ok(())
    }

    /// Look up a column by name
    pub fn column(&self, name: &str) -> Result<&Column> {
        self.columns
            .iter()
            .find(|c| c.name() == name)
            .ok_or_else(|| Error::ColumnNotFound(name.to_string()))
    }

    /// Look up several columns, preserving the requested order
    pub fn select(&self, names: &[&str]) -> Result<Vec<&Column>> {
        names.iter().map(|name| self.column(name)).collect()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(Column::name).collect()
    }

    pub fn n_rows(&self) -> usize {
        self.columns.first().map_or(0, Column::len)
    }

    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// Read a dataset from CSV with a header row
    ///
    /// Each column's storage is inferred from its non-missing cells, trying
    /// integer, then float, then boolean, then falling back to text. The
    /// column kind is fixed from that storage type.
    #[instrument(skip(reader))]
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers: Vec<String> = csv_reader.headers()?.iter().map(str::to_string).collect();
        let mut cells: Vec<Vec<Option<String>>> = vec![Vec::new(); headers.len()];

        for record in csv_reader.records() {
            let record = record?;
            for (j, column) in cells.iter_mut().enumerate() {
                let cell = record.get(j).unwrap_or("");
                if MISSING_TOKENS.contains(&cell) {
                    column.push(None);
                } else {
                    column.push(Some(cell.to_string()));
                }
            }
        }

        let columns = headers
            .into_iter()
            .zip(cells)
            .map(|(name, raw)| {
                let data = infer_column_data(raw);
                debug!(column = %name, dtype = data.dtype_name(), "inferred column type");
                Column::new(name, data)
            })
            .collect();

        Self::new(columns)
    }

    /// Read a dataset from a CSV file
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_csv_reader(file)
    }
}

fn infer_column_data(raw: Vec<Option<String>>) -> ColumnData {
    let present = || raw.iter().flatten();

    if present().all(|s| s.parse::<i64>().is_ok()) && present().next().is_some() {
        return ColumnData::Int64(
            raw.iter()
                .map(|c| c.as_deref().and_then(|s| s.parse().ok()))
                .collect(),
        );
    }
    if present().all(|s| s.parse::<f64>().is_ok()) {
        // An all-missing column lands here as floats
        return ColumnData::Float64(
            raw.iter()
                .map(|c| c.as_deref().and_then(|s| s.parse().ok()))
                .collect(),
        );
    }
    if present().all(|s| parse_bool(s).is_some()) {
        return ColumnData::Boolean(raw.iter().map(|c| c.as_deref().and_then(parse_bool)).collect());
    }
    ColumnData::Text(raw)
}

fn parse_bool(s: &str) -> Option<bool> {
    if s.eq_ignore_ascii_case("true") {
        Some(true)
    } else if s.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ColumnKind;

    #[test]
    fn test_misaligned_columns_rejected() {
        let result = Dataset::new(vec![
            Column::new("a", vec![1.0, 2.0]),
            Column::new("b", vec![1.0]),
        ]);
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let result = Dataset::new(vec![
            Column::new("a", vec![1.0]),
            Column::new("a", vec![2.0]),
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_column_lookup() {
        let ds = Dataset::new(vec![Column::new("a", vec![1.0])]).unwrap();
        assert_eq!(ds.column("a").unwrap().name(), "a");
        assert!(matches!(ds.column("z"), Err(Error::ColumnNotFound(_))));
        assert_eq!(ds.n_rows(), 1);
    }

    #[test]
    fn test_csv_type_inference() {
        let csv = "id,score,passed,group\n1,2.5,true,A\n2,NA,false,B\n3,4,TRUE,\n";
        let ds = Dataset::from_csv_reader(csv.as_bytes()).unwrap();

        assert_eq!(ds.column_names(), vec!["id", "score", "passed", "group"]);
        assert_eq!(ds.column("id").unwrap().data().dtype_name(), "i64");
        assert_eq!(ds.column("score").unwrap().data().dtype_name(), "f64");
        assert_eq!(ds.column("passed").unwrap().data().dtype_name(), "bool");

        let group = ds.column("group").unwrap();
        assert_eq!(group.kind(), ColumnKind::Qualitative);
        assert_eq!(group.missing(), 1);
        assert_eq!(ds.column("score").unwrap().missing(), 1);
    }

    #[test]
    fn test_csv_all_missing_column_is_float() {
        let csv = "a,b\n1,\n2,NA\n";
        let ds = Dataset::from_csv_reader(csv.as_bytes()).unwrap();
        let b = ds.column("b").unwrap();
        assert_eq!(b.data().dtype_name(), "f64");
        assert_eq!(b.count(), 0);
    }
}

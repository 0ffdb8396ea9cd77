use crate::schema::{signal, Schema, SchemaError};

/// A loaded datalog: one row per sample in acquisition order, one column
/// per registry entry. Every cell is populated; rows with missing values
/// are dropped by the loader before a `Table` exists.
///
/// Row order is the only ordering the window extractor and correlation
/// lookups rely on, so a `Table` is immutable once built apart from
/// [`Table::trim`], which produces an independent sub-table.
#[derive(Clone, Debug)]
pub struct Table {
    schema: Schema,
    rows: Vec<Vec<f64>>,
}

impl Table {
    /// Build a table from pre-parsed rows. Every row must match the
    /// registry width.
    pub fn new(schema: Schema, rows: Vec<Vec<f64>>) -> Result<Self, SchemaError> {
        for row in &rows {
            if row.len() != schema.width() {
                return Err(SchemaError::Width {
                    expected: schema.width(),
                    got: row.len(),
                });
            }
        }
        Ok(Self { schema, rows })
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Read one cell by row index and signal name
    pub fn value(&self, row: usize, name: &str) -> Result<f64, SchemaError> {
        let col = self.schema.index_of(name)?;
        Ok(self.rows[row][col])
    }

    /// Extract a full column by signal name
    pub fn column(&self, name: &str) -> Result<Vec<f64>, SchemaError> {
        let col = self.schema.index_of(name)?;
        Ok(self.rows.iter().map(|row| row[col]).collect())
    }

    /// Time column in seconds
    pub fn times(&self) -> Result<Vec<f64>, SchemaError> {
        self.column(signal::TIME)
    }

    /// Produce the sub-table covering rows `start..=end`
    pub fn trim(&self, start: usize, end: usize) -> Table {
        Table {
            schema: self.schema.clone(),
            rows: self.rows[start..=end].to_vec(),
        }
    }
}

// File: crates/bench-plot/src/table.rs
// Summary: Header-delimited CSV reader producing typed, index-aligned columns.
// Notes:
// - Headers are matched by exact, case-sensitive text; file column order is irrelevant.
// - Every required cell of every row must convert; there is no skip-bad-rows mode.

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{PlotError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnKind {
    Integer,
    Float,
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnKind::Integer => f.write_str("integer"),
            ColumnKind::Float => f.write_str("finite float"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnSpec {
    pub name: String,
    pub kind: ColumnKind,
}

/// Ordered set of required columns.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableSchema {
    pub columns: Vec<ColumnSpec>,
}

impl TableSchema {
    pub fn new() -> Self { Self::default() }

    pub fn column(mut self, name: impl Into<String>, kind: ColumnKind) -> Self {
        let name = name.into();
        if !self.columns.iter().any(|c| c.name == name) {
            self.columns.push(ColumnSpec { name, kind });
        }
        self
    }

    pub fn integer(self, name: impl Into<String>) -> Self { self.column(name, ColumnKind::Integer) }
    pub fn float(self, name: impl Into<String>) -> Self { self.column(name, ColumnKind::Float) }

    pub fn get(&self, name: &str) -> Option<&ColumnSpec> {
        self.columns.iter().find(|c| c.name == name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Value {
    Integer(i64),
    Float(f64),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Column {
    Integer(Vec<i64>),
    Float(Vec<f64>),
}

impl Column {
    fn with_kind(kind: ColumnKind) -> Self {
        match kind {
            ColumnKind::Integer => Column::Integer(Vec::new()),
            ColumnKind::Float => Column::Float(Vec::new()),
        }
    }

    pub fn kind(&self) -> ColumnKind {
        match self {
            Column::Integer(_) => ColumnKind::Integer,
            Column::Float(_) => ColumnKind::Float,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Column::Integer(v) => v.len(),
            Column::Float(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    pub fn get(&self, index: usize) -> Option<Value> {
        match self {
            Column::Integer(v) => v.get(index).copied().map(Value::Integer),
            Column::Float(v) => v.get(index).copied().map(Value::Float),
        }
    }

    /// Values widened to f64 for plotting, in row order.
    pub fn to_f64(&self) -> Vec<f64> {
        match self {
            Column::Integer(v) => v.iter().map(|&i| i as f64).collect(),
            Column::Float(v) => v.clone(),
        }
    }
}

/// Parsed required columns, all of length `len()`, index-aligned with the data rows.
#[derive(Clone, Debug)]
pub struct Table {
    source_name: String,
    columns: Vec<(String, Column)>,
    rows: usize,
}

impl Table {
    pub fn source_name(&self) -> &str { &self.source_name }
    pub fn len(&self) -> usize { self.rows }
    pub fn is_empty(&self) -> bool { self.rows == 0 }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|(n, _)| n == name).map(|(_, c)| c)
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(n, _)| n.as_str())
    }

    /// Row `index` (0-based) as a record view.
    pub fn record(&self, index: usize) -> Option<BenchmarkRecord<'_>> {
        (index < self.rows).then_some(BenchmarkRecord { table: self, index })
    }

    pub fn records(&self) -> impl Iterator<Item = BenchmarkRecord<'_>> {
        (0..self.rows).map(move |index| BenchmarkRecord { table: self, index })
    }
}

/// One data row with named, typed fields.
#[derive(Clone, Copy, Debug)]
pub struct BenchmarkRecord<'a> {
    table: &'a Table,
    index: usize,
}

impl BenchmarkRecord<'_> {
    pub fn index(&self) -> usize { self.index }

    pub fn value(&self, name: &str) -> Option<Value> {
        self.table.column(name)?.get(self.index)
    }

    pub fn integer(&self, name: &str) -> Option<i64> {
        match self.value(name)? {
            Value::Integer(v) => Some(v),
            Value::Float(_) => None,
        }
    }

    pub fn float(&self, name: &str) -> Option<f64> {
        match self.value(name)? {
            Value::Float(v) => Some(v),
            Value::Integer(_) => None,
        }
    }
}

/// Read `path` against `schema`.
pub fn read_table(path: impl AsRef<Path>, schema: &TableSchema) -> Result<Table> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| PlotError::Io { path: path.to_path_buf(), source })?;
    read_table_from_reader(file, schema, path.display().to_string())
}

/// Read CSV text from any reader; `source_name` is used in error messages.
pub fn read_table_from_reader<R: Read>(reader: R, schema: &TableSchema, source_name: impl Into<String>) -> Result<Table> {
    let source_name = source_name.into();
    let csv_err = |source: csv::Error| PlotError::Csv { source_name: source_name.clone(), source };

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers().map_err(csv_err)?.clone();
    log::debug!("{source_name}: headers {:?}", headers.iter().collect::<Vec<_>>());

    // (header index, spec) for every required column
    let mut bindings = Vec::with_capacity(schema.columns.len());
    for spec in &schema.columns {
        let Some(ix) = headers.iter().position(|h| h == spec.name) else {
            return Err(PlotError::MissingColumn { source_name: source_name.clone(), column: spec.name.clone() });
        };
        bindings.push((ix, spec));
    }

    let mut columns: Vec<Column> = schema.columns.iter().map(|c| Column::with_kind(c.kind)).collect();
    let mut rows = 0usize;

    for rec in rdr.records() {
        let rec = rec.map_err(csv_err)?;
        rows += 1;
        let line = rec.position().map_or(0, |p| p.line());

        // short rows are MissingField even when a present cell would also fail to parse
        if let Some((_, spec)) = bindings.iter().find(|(ix, _)| *ix >= rec.len()) {
            return Err(PlotError::MissingField { source_name: source_name.clone(), row: rows, line, column: spec.name.clone() });
        }

        for ((ix, spec), column) in bindings.iter().zip(columns.iter_mut()) {
            let raw = &rec[*ix];
            let text = raw.trim();
            let parse_err = || PlotError::Parse {
                source_name: source_name.clone(),
                row: rows,
                line,
                column: spec.name.clone(),
                value: raw.to_string(),
                expected: spec.kind,
            };
            match column {
                Column::Integer(values) => values.push(text.parse::<i64>().map_err(|_| parse_err())?),
                Column::Float(values) => {
                    let v = text.parse::<f64>().map_err(|_| parse_err())?;
                    if !v.is_finite() {
                        return Err(parse_err());
                    }
                    values.push(v);
                }
            }
        }
    }

    log::info!("{source_name}: read {rows} rows");
    let columns = schema.columns.iter().map(|c| c.name.clone()).zip(columns).collect();
    Ok(Table { source_name, columns, rows })
}

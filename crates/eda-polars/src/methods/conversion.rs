//! DataFrame to dataset conversion

use crate::{EdaFrameExt, Error, Result};
use eda_core::{Column as EdaColumn, ColumnData, Dataset};
use polars::prelude::*;
use tracing::trace;

/// Convert one Polars column into a kind-tagged dataset column
pub(crate) fn to_eda_column(column: &Column) -> Result<EdaColumn> {
    let data: ColumnData = match column.dtype() {
        DataType::Float64 => column.f64()?.into_iter().collect::<Vec<_>>().into(),
        DataType::Float32 => column.f32()?.into_iter().collect::<Vec<_>>().into(),
        DataType::Int64 => column.i64()?.into_iter().collect::<Vec<_>>().into(),
        DataType::Int32 => column.i32()?.into_iter().collect::<Vec<_>>().into(),
        DataType::Boolean => column.bool()?.into_iter().collect::<Vec<_>>().into(),
        DataType::String => column
            .str()?
            .into_iter()
            .map(|v| v.map(str::to_string))
            .collect::<Vec<_>>()
            .into(),
        dt if dt.is_integer() => {
            // Narrow and unsigned integers widen to i64
            let widened = column.cast(&DataType::Int64)?;
            widened.i64()?.into_iter().collect::<Vec<_>>().into()
        }
        dt => {
            return Err(Error::TypeMismatch {
                expected: "numeric, boolean or string".to_string(),
                got: format!("{dt:?}"),
            });
        }
    };
    trace!(column = column.name().as_str(), dtype = data.dtype_name(), "converted column");
    Ok(EdaColumn::new(column.name().as_str(), data))
}

impl EdaFrameExt for DataFrame {
    fn to_dataset(&self) -> Result<Dataset> {
        let columns = self
            .get_columns()
            .iter()
            .map(to_eda_column)
            .collect::<Result<Vec<_>>>()?;
        Ok(Dataset::new(columns)?)
    }

    fn select_dataset(&self, columns: &[&str]) -> Result<Dataset> {
        let mut selected = Vec::with_capacity(columns.len());
        for col_name in columns {
            let column = self
                .column(col_name)
                .map_err(|_| Error::InvalidColumn(col_name.to_string()))?;
            selected.push(to_eda_column(column)?);
        }
        Ok(Dataset::new(selected)?)
    }

    fn describe_columns(&self, columns: &[&str]) -> Result<DataFrame> {
        super::describe::describe_columns_impl(self, columns)
    }

    fn independence_test(
        &self,
        x: &str,
        y: &str,
        options: eda_independence::TestOptions,
    ) -> Result<eda_independence::IndependenceTest> {
        super::independence::independence_test_impl(self, x, y, options)
    }
}

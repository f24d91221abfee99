mod conversion;
mod describe;
mod independence;

pub(crate) use conversion::to_eda_column;

pub mod duration;
pub mod engine;
pub mod pipeline;
pub mod reader;
pub mod render;
pub mod transforms;

pub use crate::domain::model::{Cell, OutputFormat, Record, RenderedReport, TableData};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;

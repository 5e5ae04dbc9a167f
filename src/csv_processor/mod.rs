pub mod chunker;
pub mod reader;
pub mod writer;

pub use chunker::{ColumnIndices, RowChunk, RowChunks};
pub use reader::{SampleLoader, SourceRow};
pub use writer::LabelWriter;

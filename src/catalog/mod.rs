pub mod chunker;
pub mod reader;
pub mod writer;

pub use chunker::{chunk_items, Chunk, ItemChunker};
pub use reader::{Catalog, Item};
pub use writer::TRANSLATED_STATE;

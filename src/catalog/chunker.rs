use crate::catalog::reader::Item;

/// A contiguous, order-preserving slice of the run's items.
#[derive(Debug, Clone, Copy)]
pub struct Chunk<'a> {
    pub index: usize,
    pub start: usize,
    pub items: &'a [Item],
}

impl<'a> Chunk<'a> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn end(&self) -> usize {
        self.start + self.items.len()
    }
}

pub struct ItemChunker {
    chunk_size: usize,
}

impl ItemChunker {
    /// `chunk_size` is validated by `RunConfig::validate`; zero is clamped
    /// to one rather than panicking inside `slice::chunks`.
    pub fn new(chunk_size: usize) -> Self {
        Self {
            chunk_size: chunk_size.max(1),
        }
    }

    pub fn chunk<'a>(&self, items: &'a [Item]) -> Vec<Chunk<'a>> {
        items
            .chunks(self.chunk_size)
            .enumerate()
            .map(|(index, slice)| Chunk {
                index,
                start: index * self.chunk_size,
                items: slice,
            })
            .collect()
    }

    pub fn chunk_count(&self, total_items: usize) -> usize {
        total_items.div_ceil(self.chunk_size)
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }
}

pub fn chunk_items(items: &[Item], size: usize) -> Vec<Chunk<'_>> {
    ItemChunker::new(size).chunk(items)
}

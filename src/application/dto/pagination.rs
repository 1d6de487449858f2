use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Zero-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub index: u32,
    pub size: u32,
}

impl PageRequest {
    pub fn new(index: u32, size: u32) -> Self {
        Self {
            index,
            size: size.max(1),
        }
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.index) * u64::from(self.size)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct Page<T> {
    pub items: Vec<T>,
    pub index: u32,
    pub size: u32,
    pub total: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, request: PageRequest, total: u64) -> Self {
        Self {
            items,
            index: request.index,
            size: request.size,
            total,
        }
    }

    pub fn has_previous(&self) -> bool {
        self.index > 0
    }

    pub fn has_next(&self) -> bool {
        (u64::from(self.index) + 1) * u64::from(self.size) < self.total
    }

    pub fn previous_index(&self) -> Option<u32> {
        self.has_previous().then(|| self.index - 1)
    }

    pub fn next_index(&self) -> Option<u32> {
        self.has_next().then(|| self.index + 1)
    }

    pub fn total_pages(&self) -> u64 {
        self.total.div_ceil(u64::from(self.size.max(1)))
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            index: self.index,
            size: self.size,
            total: self.total,
        }
    }
}

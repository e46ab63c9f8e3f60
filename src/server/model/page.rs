/// One limit/offset window of a filtered listing.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Number of rows matching the filter across all windows.
    pub total: u64,
    pub limit: u64,
    pub offset: u64,
}

impl<T> Page<T> {
    /// Converts every item while keeping the window bounds.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            limit: self.limit,
            offset: self.offset,
        }
    }

    pub fn into_dto<D>(self, f: impl FnMut(T) -> D) -> crate::model::pagination::PageDto<D> {
        let page = self.map(f);

        crate::model::pagination::PageDto {
            count: page.total,
            limit: page.limit,
            offset: page.offset,
            results: page.items,
        }
    }
}

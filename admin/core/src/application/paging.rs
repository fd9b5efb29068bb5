// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0
//! # In-Memory Paging
//!
//! Services return full collections; grids page them here. `ListModel.total`
//! is always the size of the unpaginated collection, never the page length.

use crate::domain::admin_config::AdminAreaSettings;
use crate::models::common::{ListModel, PagingParams, SearchModel};

/// One page cut out of a full collection.
#[derive(Debug, Clone, PartialEq)]
pub struct PagedList<T> {
    items: Vec<T>,
    page_index: usize,
    page_size: usize,
    total_count: usize,
}

impl<T> PagedList<T> {
    /// Cuts page `page_index` (0-based) of `page_size` items out of `source`.
    /// A zero page size is treated as 1.
    pub fn new(source: Vec<T>, page_index: usize, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        let total_count = source.len();
        let items = source
            .into_iter()
            .skip(page_index.saturating_mul(page_size))
            .take(page_size)
            .collect();

        Self {
            items,
            page_index,
            page_size,
            total_count,
        }
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_count(&self) -> usize {
        self.total_count
    }

    pub fn total_pages(&self) -> usize {
        self.total_count.div_ceil(self.page_size)
    }

    pub fn has_previous_page(&self) -> bool {
        self.page_index > 0
    }

    pub fn has_next_page(&self) -> bool {
        self.page_index + 1 < self.total_pages()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Maps the page into a [`ListModel`] carrying the unpaginated total
    pub fn into_list_model<M>(self, map: impl FnMut(T) -> M) -> ListModel<M> {
        let total = self.total_count;
        ListModel {
            data: self.items.into_iter().map(map).collect(),
            total,
        }
    }
}

/// Pages `items` with the 1-based page and the page size of a search model
pub fn paginate_by_request<T, S>(items: Vec<T>, search: &S) -> PagedList<T>
where
    S: SearchModel + ?Sized,
{
    let paging = search.paging();
    PagedList::new(
        items,
        paging.page.saturating_sub(1) as usize,
        paging.page_size as usize,
    )
}

/// Applies the configured grid defaults
pub fn set_grid_page_size(paging: &mut PagingParams, settings: &AdminAreaSettings) {
    set_grid_page_size_with(
        paging,
        settings.default_grid_page_size,
        &settings.grid_page_sizes,
    );
}

/// Applies fixed grid defaults for screens that ignore the settings
pub fn set_grid_page_size_with(paging: &mut PagingParams, page_size: u32, available_page_sizes: &str) {
    paging.page_size = page_size;
    paging.available_page_sizes = available_page_sizes.to_string();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::attribute::AttributeSearchModel;

    fn search(page: u32, page_size: u32) -> AttributeSearchModel {
        AttributeSearchModel {
            paging: PagingParams::new(page, page_size),
        }
    }

    #[test]
    fn test_last_page_is_partial() {
        let page = paginate_by_request((1..=12).collect::<Vec<_>>(), &search(3, 5));

        assert_eq!(page.items(), &[11, 12]);
        assert_eq!(page.total_count(), 12);
        assert_eq!(page.total_pages(), 3);
        assert!(page.has_previous_page());
        assert!(!page.has_next_page());
    }

    #[test]
    fn test_page_zero_reads_first_page() {
        let page = paginate_by_request(vec!["a", "b", "c"], &search(0, 2));
        assert_eq!(page.items(), &["a", "b"]);
        assert_eq!(page.page_index(), 0);
    }

    #[test]
    fn test_zero_page_size_is_clamped() {
        let page = PagedList::new(vec![1, 2, 3], 1, 0);
        assert_eq!(page.page_size(), 1);
        assert_eq!(page.items(), &[2]);
    }

    #[test]
    fn test_page_past_end_is_empty_with_total() {
        let list = paginate_by_request(vec![1, 2, 3], &search(9, 10)).into_list_model(|n| n * 10);
        assert!(list.data.is_empty());
        assert_eq!(list.total, 3);
    }

    #[test]
    fn test_set_grid_page_size() {
        let mut paging = PagingParams::new(4, 100);
        set_grid_page_size(&mut paging, &AdminAreaSettings::default());

        assert_eq!(paging.page, 4);
        assert_eq!(paging.page_size, 15);
        assert_eq!(paging.available_page_sizes, "7, 15, 20, 50, 100");
    }
}

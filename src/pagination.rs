//! Page bookkeeping for sequences.
//!
//! A [`Pager`] describes one page of a larger record set. A [`PagedResult`] pairs
//! it with the items on that page. The [`Paginate`] extension trait produces both
//! from any `IntoIterator`.
//!
//! Pages are numbered from 1. Record indices reported by [`Pager`] are 1-based and
//! inclusive.
//!
//! # Example
//!
//! ```rust
//! use wrapture::Paginate;
//!
//! let page = (1..=25).paginate(3, 10).into_value().unwrap();
//!
//! assert_eq!(page.items, vec![21, 22, 23, 24, 25]);
//! assert_eq!(page.pager.total_pages, 3);
//! assert_eq!(page.pager.start_record_index, 21);
//! assert_eq!(page.pager.end_record_index, 25);
//! assert!(!page.pager.has_next());
//! ```

use std::future::Future;

use crate::{Guard, Outcome};

/// Page size used when none is given.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Position of one page within a record set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pager {
    /// Number of pages needed for all records. Zero when the page size is zero.
    pub total_pages: usize,
    /// The 1-based page number.
    pub current_page: usize,
    /// Maximum number of records per page.
    pub page_size: usize,
    /// Number of records across all pages.
    pub total_records: usize,
    /// 1-based index of the first record on this page.
    pub start_record_index: usize,
    /// 1-based index of the last record on this page, capped at `total_records`.
    pub end_record_index: usize,
}

impl Pager {
    /// Describe page `current_page` of `total_records` records split into pages of
    /// `page_size`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wrapture::Pager;
    ///
    /// let pager = Pager::new(95, 2, 20);
    /// assert_eq!(pager.total_pages, 5);
    /// assert_eq!((pager.start_record_index, pager.end_record_index), (21, 40));
    /// ```
    pub fn new(total_records: usize, current_page: usize, page_size: usize) -> Self {
        let total_pages = if page_size == 0 {
            0
        } else {
            total_records.div_ceil(page_size)
        };
        let start_record_index = current_page
            .saturating_sub(1)
            .saturating_mul(page_size)
            .saturating_add(1);
        let end_record_index = current_page.saturating_mul(page_size).min(total_records);

        Pager {
            total_pages,
            current_page,
            page_size,
            total_records,
            start_record_index,
            end_record_index,
        }
    }

    /// Returns `true` when a page precedes this one.
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    /// Returns `true` when a page follows this one.
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

/// The items of one page together with its [`Pager`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PagedResult<T> {
    /// Items on this page.
    pub items: Vec<T>,
    /// Where this page sits in the record set.
    pub pager: Pager,
}

impl<T> PagedResult<T> {
    /// Build a page from items that are already sliced.
    pub fn new<I>(items: I, total_records: usize, current_page: usize, page_size: usize) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        PagedResult {
            items: items.into_iter().collect(),
            pager: Pager::new(total_records, current_page, page_size),
        }
    }

    /// Transform the items as a whole, keeping the pager.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wrapture::PagedResult;
    ///
    /// let page = PagedResult::new(vec![1, 2], 12, 1, 2);
    /// let labels = page.convert(|items| items.into_iter().map(|n| format!("#{}", n)));
    ///
    /// assert_eq!(labels.items, vec!["#1", "#2"]);
    /// assert_eq!(labels.pager.total_records, 12);
    /// ```
    pub fn convert<U, I, F>(self, converter: F) -> PagedResult<U>
    where
        F: FnOnce(Vec<T>) -> I,
        I: IntoIterator<Item = U>,
    {
        PagedResult {
            items: converter(self.items).into_iter().collect(),
            pager: self.pager,
        }
    }

    /// Async form of [`PagedResult::convert`].
    pub async fn convert_async<U, I, F, Fut>(self, converter: F) -> PagedResult<U>
    where
        F: FnOnce(Vec<T>) -> Fut,
        Fut: Future<Output = I>,
        I: IntoIterator<Item = U>,
    {
        PagedResult {
            items: converter(self.items).await.into_iter().collect(),
            pager: self.pager,
        }
    }
}

/// Pagination for any sequence.
pub trait Paginate: IntoIterator + Sized {
    /// Slice page `current_page` out of a sequence whose total size is already
    /// known, for instance from a separate count query.
    ///
    /// The sequence is expected to start at the first record.
    fn to_paged_result(
        self,
        total_records: usize,
        current_page: usize,
        page_size: usize,
    ) -> PagedResult<Self::Item> {
        let skip = current_page.saturating_sub(1).saturating_mul(page_size);
        let items = self.into_iter().skip(skip).take(page_size);
        PagedResult::new(items, total_records, current_page, page_size)
    }

    /// Count the sequence and slice out page `current_page`.
    ///
    /// Fails when `current_page` or `page_size` is below 1.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wrapture::Paginate;
    ///
    /// let outcome = vec!["a", "b"].paginate(0, 0);
    /// assert_eq!(
    ///     outcome.error(),
    ///     Some("Current page must be at least 1.; Page size must be at least 1.")
    /// );
    /// ```
    fn paginate(self, current_page: usize, page_size: usize) -> Outcome<PagedResult<Self::Item>> {
        Guard::against()
            .less_than(current_page, 1, "Current page must be at least 1.")
            .less_than(page_size, 1, "Page size must be at least 1.")
            .to_outcome()
            .map(|()| {
                let items: Vec<_> = self.into_iter().collect();
                let total_records = items.len();
                items.to_paged_result(total_records, current_page, page_size)
            })
    }

    /// Sort by `key`, then paginate as [`Paginate::paginate`] does.
    ///
    /// The sort is stable.
    fn paginate_by_key<K, F>(
        self,
        current_page: usize,
        page_size: usize,
        key: F,
    ) -> Outcome<PagedResult<Self::Item>>
    where
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        let mut items: Vec<_> = self.into_iter().collect();
        items.sort_by_key(key);
        items.paginate(current_page, page_size)
    }
}

impl<I: IntoIterator> Paginate for I {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pager_ranges() {
        let pager = Pager::new(25, 3, 10);
        assert_eq!(pager.total_pages, 3);
        assert_eq!(pager.start_record_index, 21);
        assert_eq!(pager.end_record_index, 25);
        assert!(pager.has_previous());
        assert!(!pager.has_next());
    }

    #[test]
    fn test_pager_empty_set() {
        let pager = Pager::new(0, 1, DEFAULT_PAGE_SIZE);
        assert_eq!(pager.total_pages, 0);
        assert_eq!(pager.start_record_index, 1);
        assert_eq!(pager.end_record_index, 0);
        assert!(!pager.has_previous());
        assert!(!pager.has_next());
    }

    #[test]
    fn test_pager_zero_page_size() {
        let pager = Pager::new(10, 1, 0);
        assert_eq!(pager.total_pages, 0);
        assert_eq!(pager.end_record_index, 0);
    }

    #[test]
    fn test_to_paged_result_skips_and_takes() {
        let page = (1..=10).to_paged_result(10, 2, 3);
        assert_eq!(page.items, vec![4, 5, 6]);
        assert_eq!(page.pager.total_pages, 4);
    }

    #[test]
    fn test_page_past_the_end_is_empty() {
        let page = (1..=3).paginate(5, 2).into_value().unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.pager.total_records, 3);
    }

    #[test]
    fn test_paginate_rejects_page_zero() {
        let outcome = vec![1, 2, 3].paginate(0, 2);
        assert_eq!(outcome.error(), Some("Current page must be at least 1."));
    }

    #[test]
    fn test_paginate_by_key_sorts_first() {
        let names = vec!["carol", "alice", "bob", "dave"];
        let page = names
            .paginate_by_key(1, 2, |name| *name)
            .into_value()
            .unwrap();
        assert_eq!(page.items, vec!["alice", "bob"]);
        assert!(page.pager.has_next());
    }

    #[test]
    fn test_convert_keeps_pager() {
        let page = PagedResult::new(vec![1, 2, 3], 30, 2, 3);
        let doubled = page.clone().convert(|items| items.into_iter().map(|n| n * 2));
        assert_eq!(doubled.items, vec![2, 4, 6]);
        assert_eq!(doubled.pager, page.pager);
    }

    #[tokio::test]
    async fn test_convert_async() {
        let page = PagedResult::new(vec!["a", "b"], 2, 1, 10);
        let upper = page
            .convert_async(|items| async move {
                items.into_iter().map(str::to_uppercase).collect::<Vec<_>>()
            })
            .await;
        assert_eq!(upper.items, vec!["A".to_string(), "B".to_string()]);
    }
}

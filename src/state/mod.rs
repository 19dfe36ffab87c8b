/// State management module
///
/// This module handles all application state, including:
/// - Shared data structures (data.rs)
/// - The current page cache and fetch status (page.rs)
/// - The cross-page selection engine (selection.rs)
/// - Pagination math and navigation (pager.rs)

pub mod data;
pub mod page;
pub mod pager;
pub mod selection;

/// UI building blocks
///
/// View helpers that build `Element`s for main.rs to compose:
/// - The artwork table with per-row checkboxes (table.rs)
/// - The pagination bar (pagination.rs)
/// - The bulk "select first N rows" panel (bulk.rs)

pub mod bulk;
pub mod pagination;
pub mod table;

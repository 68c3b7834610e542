//! Output adapters for a parsed table

pub mod html;

pub use html::table_to_html;

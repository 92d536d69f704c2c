//! Reusable HTML components for page generation
//!
//! Maud component functions shared by generated pages: the document
//! shell, footer, and result section cards.

pub mod footer;
pub mod layout;
pub mod section;

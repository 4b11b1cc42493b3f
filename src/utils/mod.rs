//! Utility functions

pub mod xml;

pub use xml::escape_xml;

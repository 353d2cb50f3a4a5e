//! Font discovery: loading face files from disk and resolving the names
//! used in font options.

pub mod catalog;

//! Calendar events: the data model and the line-oriented event-file reader.

pub mod model;
pub mod parse;

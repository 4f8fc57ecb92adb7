mod document;
mod error;
mod key_path;
mod options;
mod parser;
mod table;
mod util;

#[cfg(test)]
mod tests;

pub use {document::*, error::*, key_path::*, options::*, parser::*, table::*};

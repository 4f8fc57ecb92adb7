#![allow(clippy::len_without_is_empty)]
#![allow(clippy::new_without_default)]

mod ini;
mod value;

pub use {ini::*, value::*};

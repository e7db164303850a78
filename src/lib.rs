#![cfg_attr(feature = "clippy", feature(plugin))]
#![cfg_attr(feature = "clippy", plugin(clippy))]

#[macro_use]
extern crate serde_derive;

pub mod arena;
pub mod splay_tree;
pub mod word_count;

#![doc = include_str!("../README.md")]

pub mod expr;
pub mod program;
pub mod statements;

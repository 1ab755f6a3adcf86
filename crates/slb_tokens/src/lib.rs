#![doc = include_str!("../README.md")]

pub mod spanned;
pub mod token;

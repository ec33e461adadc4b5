//! Row types and queries for the five site tables.
//!
//! Products, posts and projects support the full create / read / update /
//! delete set. Messages and subscribers are write-once.

pub mod message;
pub mod post;
pub mod product;
pub mod project;
pub mod stats;
pub mod string_list;
pub mod subscriber;

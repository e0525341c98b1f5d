// Practice material: fixed interview question banks and quiz sets.

pub mod handlers;
pub mod questions;
pub mod quiz;

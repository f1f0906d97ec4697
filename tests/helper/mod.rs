#![allow(dead_code)]

mod depot;
mod ledger;

pub use depot::*;
pub use ledger::*;

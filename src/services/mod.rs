// Service module exports

pub mod export;
pub mod pdf;
pub mod roster;

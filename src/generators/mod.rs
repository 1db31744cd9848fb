pub mod backtracker;

pub use backtracker::Backtracker;

pub mod dfs;

pub use dfs::solve;

pub mod add;
pub mod appearance;
pub mod check;
pub mod common;
pub mod completions;
pub mod delete;
pub mod edit;
pub mod export;
pub mod list;
pub mod search;
pub mod show;
pub mod tags;

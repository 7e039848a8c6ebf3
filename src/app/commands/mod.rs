pub mod extract;
pub mod output;
pub mod update;
pub mod workflow;

#[path = "../harness/mod.rs"]
mod harness;

mod git_contract;

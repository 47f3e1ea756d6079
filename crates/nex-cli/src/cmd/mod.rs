//! Command modules - one file per CLI command

pub mod alias;
pub mod completions;
pub mod config;
pub mod doctor;
pub mod info;
pub mod install;
pub mod list;
pub mod remove;
pub mod run;
pub mod search;
pub mod update;

//! Integration tests for the shopseed installation bootstrap

mod cli_commands;
mod config_integration;
mod install_flow;
mod profiles;
mod sled_store;
mod test_utils;

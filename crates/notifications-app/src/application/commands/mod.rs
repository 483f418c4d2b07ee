pub mod command_handler;
pub mod handlers;
pub mod integration_commands;

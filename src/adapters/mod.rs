pub mod process_command;

// Library root
// -----------
// This crate exposes a small library surface for the CLI. The binary
// (`main.rs`) parses arguments and hands the command to `cli::run`.
//
// Module responsibilities:
// - `category`: derives a file's storage folder from its extension.
// - `storage`: reads, writes and deletes files under the base directory.
// - `api`: blocking HTTP calls (`fetch`, `random-user`).
// - `shell`: runs a command line through the host shell.
// - `report`: the log sink handed to every command handler.
// - `commands`: one handler per subcommand.
// - `cli`: clap definitions and dispatch.
// - `config`: base directory, log file and endpoint settings.
pub mod api;
pub mod category;
pub mod cli;
pub mod commands;
pub mod config;
pub mod report;
pub mod shell;
pub mod storage;

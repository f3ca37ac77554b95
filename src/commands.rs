// Command handlers: one function per subcommand. Each does a single unit
// of work and reports the result through the injected `Reporter`.
// Handled conditions (missing file, network or subprocess failure) are
// reported and return `Ok`; only unexpected storage I/O errors bubble up.

use crate::api::{render_body, ApiClient};
use crate::report::Reporter;
use crate::shell::{run_shell, Outcome};
use crate::storage::{Storage, StorageError};
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

pub fn write(storage: &Storage, reporter: &mut Reporter, filename: &str, content: &str) -> Result<()> {
    match storage.write_file(filename, content.as_bytes()) {
        Ok(file) => {
            reporter.info(format!(
                "File '{}' written successfully in '{}/'!",
                file.filename, file.category
            ));
            Ok(())
        }
        Err(e) => report_storage_error(reporter, e),
    }
}

pub fn read(storage: &Storage, reporter: &mut Reporter, filename: &str) -> Result<()> {
    match storage.read_file(filename) {
        Ok(bytes) => {
            reporter.info(format!(
                "File Content of '{}':\n{}",
                filename,
                String::from_utf8_lossy(&bytes)
            ));
            Ok(())
        }
        Err(e) => report_storage_error(reporter, e),
    }
}

pub fn delete(storage: &Storage, reporter: &mut Reporter, filename: &str) -> Result<()> {
    match storage.delete_file(filename) {
        Ok(file) => {
            reporter.info(format!(
                "File '{}' deleted from '{}/'!",
                file.filename, file.category
            ));
            Ok(())
        }
        Err(e) => report_storage_error(reporter, e),
    }
}

fn report_storage_error(reporter: &mut Reporter, err: StorageError) -> Result<()> {
    if err.is_handled() {
        reporter.error(err.to_string());
        Ok(())
    } else {
        Err(err.into())
    }
}

pub fn fetch(api: &ApiClient, reporter: &mut Reporter, url: &str) {
    reporter.info("Fetching data...");
    let spinner = spinner("Waiting for response...");
    let result = api.fetch(url);
    spinner.finish_and_clear();
    match result {
        Ok(body) => reporter.info(format!("Response Data:\n{}", render_body(&body))),
        Err(e) => reporter.error(format!("Error fetching data: {:#}", e)),
    }
}

pub fn random_user(api: &ApiClient, reporter: &mut Reporter) {
    reporter.info("Fetching random user data...");
    let spinner = spinner("Waiting for response...");
    let result = api.random_user();
    spinner.finish_and_clear();
    match result {
        Ok(user) => reporter.info(user.summary()),
        Err(e) => reporter.error(format!("Error fetching user data: {:#}", e)),
    }
}

pub fn exec(reporter: &mut Reporter, cmd: &str) {
    let output = match run_shell(cmd) {
        Ok(output) => output,
        Err(e) => {
            reporter.error(format!("Error: {}", e));
            return;
        }
    };
    match output.outcome() {
        Outcome::Failed { message } => reporter.error(format!("Error: {}", message)),
        Outcome::Completed { stdout, stderr } => {
            if !stderr.is_empty() {
                reporter.warn(format!("Stderr: {}", stderr));
            }
            if !stdout.is_empty() || stderr.is_empty() {
                reporter.info(format!("Output:\n{}", stdout));
            }
        }
    }
}

pub fn greeting(name: &str, uppercase: bool) -> String {
    let message = format!("Hello, {}! Welcome to the CLI tool.", name);
    if uppercase {
        message.to_uppercase()
    } else {
        message
    }
}

pub fn greet(reporter: &mut Reporter, name: &str, uppercase: bool) {
    reporter.info(greeting(name, uppercase));
}

// indicatif hides the spinner on its own when stderr is not a terminal.
fn spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

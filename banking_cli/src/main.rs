//! The "Banking CLI" app's entry point.

use banking_cli::logic::main_loop;
use log::error;
use std::env;
use std::error::Error;

/// The "Banking CLI" app's entry point.
///
/// Logging goes to stderr; set `RUST_LOG` to see more than warnings.
fn main() -> Result<(), Box<dyn Error>> {
    if env::var_os("RUST_LOG").is_none() {
        env::set_var("RUST_LOG", "banking_common=warn,banking_cli=warn");
    }
    pretty_env_logger::init();

    if let Err(err) = main_loop() {
        error!("The session ended abnormally: {err}");
        return Err(err.into());
    }

    Ok(())
}

//! Error handling utilities

use tracing::error;

use crate::error::Error;

/// Exit code for invalid configuration
pub const CONFIG_ERROR: i32 = 2;

/// Exit code for any other failure
pub const GENERAL_ERROR: i32 = 1;

/// Print a fatal error and exit
///
/// Configuration problems exit with [`CONFIG_ERROR`], everything else with
/// [`GENERAL_ERROR`]. With `verbose >= 1` the full cause chain is printed.
pub fn handle_fatal_error(error: anyhow::Error, verbose: u8) -> ! {
    error!("Fatal error: {}", error);
    eprintln!("Error: {error}");

    if verbose >= 1 {
        eprintln!("\nError chain:");
        for (i, cause) in error.chain().enumerate() {
            eprintln!("  {}: {}", i, cause);
        }
    }

    std::process::exit(exit_code(&error))
}

fn exit_code(error: &anyhow::Error) -> i32 {
    match error.downcast_ref::<Error>() {
        Some(Error::Config(_)) | Some(Error::Store(crate::store::StoreError::Configuration(_))) => {
            CONFIG_ERROR
        }
        _ => GENERAL_ERROR,
    }
}

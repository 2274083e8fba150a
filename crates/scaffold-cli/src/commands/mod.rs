//! Command implementations for `create-tool`.
//!
//! The binary has a single command; this module also holds the mapping from
//! failures to process exit codes.

pub mod generate;

use scaffold_core::cli::ExitCode;

/// Chooses the exit code for a failed run.
///
/// Invalid names, arguments and settings exit with
/// [`ExitCode::INVALID_INPUT`]; everything else with [`ExitCode::ERROR`].
///
/// # Examples
///
/// ```
/// use scaffold_cli::commands::exit_code_for;
/// use scaffold_core::cli::ExitCode;
///
/// let err = anyhow::Error::new(scaffold_core::Error::InvalidArgument("bad".into()));
/// assert_eq!(exit_code_for(&err), ExitCode::INVALID_INPUT);
///
/// let err = anyhow::anyhow!("terminal closed");
/// assert_eq!(exit_code_for(&err), ExitCode::ERROR);
/// ```
#[must_use]
pub fn exit_code_for(err: &anyhow::Error) -> ExitCode {
    let user_error = err
        .chain()
        .filter_map(|cause| cause.downcast_ref::<scaffold_core::Error>())
        .any(scaffold_core::Error::is_user_error);
    if user_error {
        ExitCode::INVALID_INPUT
    } else {
        ExitCode::ERROR
    }
}

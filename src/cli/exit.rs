//! Turning failures into a stderr report and an exit status.

use crate::status;
use crate::translation::ServiceError;
use crate::ui::Style;

/// Finds the translation service failure behind `err`, if any.
pub fn service_error(err: &anyhow::Error) -> Option<&ServiceError> {
    err.chain().find_map(|cause| cause.downcast_ref::<ServiceError>())
}

/// Exit status for a failed run. Failures that did not come from the
/// translation service map to `SOFTWARE`.
pub fn exit_code_for(err: &anyhow::Error) -> exitcode::ExitCode {
    service_error(err).map_or(exitcode::SOFTWARE, ServiceError::exit_code)
}

/// Reports `err` and its causes on stderr.
pub fn report(err: &anyhow::Error) {
    eprintln!("{} {err:#}", Style::error("Error:"));

    if let Some(ServiceError::InvalidLanguage { .. }) = service_error(err) {
        status!(
            "{}",
            Style::hint("Run 'translate -c' to see the supported language codes.")
        );
    }
}

use sprint_select::backlog::BacklogError;
use sprint_select::report;
use sprint_select::Error;

/// Report a failed run on stderr.
///
/// A length mismatch also lists the three array lengths so the operator
/// can see which one is off.
pub(crate) fn print_error(err: &Error) {
    eprintln!("error: {}", err);

    if let Error::Backlog(BacklogError::LengthMismatch {
        tasks,
        story_points,
        priorities,
    }) = err
    {
        eprint!(
            "{}",
            report::render_length_mismatch(*tasks, *story_points, *priorities)
        );
    }
}

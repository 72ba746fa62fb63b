mod error;

pub use error::{Error, Result};

/// Validates that two plane extents agree.
///
/// `context` names the pair being compared and ends up in the error message.
pub(crate) fn check_dims(
    context: &'static str,
    expected: (u32, u32),
    actual: (u32, u32),
) -> Result<()> {
    if expected != actual {
        return Err(Error::DimensionMismatch {
            context,
            expected_width: expected.0,
            expected_height: expected.1,
            actual_width: actual.0,
            actual_height: actual.1,
        });
    }
    Ok(())
}

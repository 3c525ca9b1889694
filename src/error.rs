use std::path::PathBuf;
use thiserror::Error;

/// Any failure a pin operation can report. Every variant maps to exit code
/// 1; the message text is shown to the user as-is.
#[derive(Debug, Error)]
pub enum GpioError {
  /// A sysfs file could not be opened for reading, usually because the pin
  /// was never exported.
  #[error("Cannot open file {} for reading.", path.display())]
  UnreadableFile {
    /// The path that failed to open.
    path: PathBuf,
  },

  /// The direction file could not be opened while preparing a value write.
  #[error("Cannot open file {} for reading direction.", path.display())]
  UnreadableDirection {
    /// The path that failed to open.
    path: PathBuf,
  },

  /// A sysfs file could not be opened for writing.
  #[error("Cannot open file {} for writing.", path.display())]
  UnwritableFile {
    /// The path that failed to open.
    path: PathBuf,
  },

  /// A value write was attempted on a pin whose direction is not `out`.
  #[error(
    "GPIO pin {pin} is not configured for output. Try 'gpio d {pin} out'."
  )]
  NotOutput {
    /// The pin the write was aimed at.
    pin: u32,
  },
}

/// A `Result` carrying a [`GpioError`] as its `Err` variant.
pub type GpioResult<T> = Result<T, GpioError>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn messages_name_the_path_and_pin() {
    let error = GpioError::UnreadableFile {
      path: PathBuf::from("/sys/class/gpio/gpio4/value"),
    };

    assert_eq!(
      error.to_string(),
      "Cannot open file /sys/class/gpio/gpio4/value for reading."
    );

    let error = GpioError::NotOutput { pin: 17 };

    assert_eq!(
      error.to_string(),
      "GPIO pin 17 is not configured for output. Try 'gpio d 17 out'."
    );
  }
}

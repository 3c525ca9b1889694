use crate::{
  error::{GpioError, GpioResult},
  sysfs::Pin,
};
use std::{fs::File, io::Read};

/// Tool function which prints the direction and value of an exported pin.
///
/// Both sysfs files are opened before anything is printed. Whatever text
/// they hold is echoed verbatim, trailing newlines included.
pub fn read(pin: &Pin) -> GpioResult<()> {
  let value_path = pin.value_path();
  let direction_path = pin.direction_path();

  let value_file = File::open(&value_path);
  let direction_file = File::open(&direction_path);

  // when both files are missing, the value file is the one reported
  let mut value_file =
    value_file.map_err(|_| GpioError::UnreadableFile { path: value_path })?;
  let mut direction_file = direction_file
    .map_err(|_| GpioError::UnreadableFile { path: direction_path })?;

  let mut direction = String::new();
  direction_file
    .read_to_string(&mut direction)
    .map_err(|_| GpioError::UnreadableFile {
      path: pin.direction_path(),
    })?;

  let mut value = String::new();
  value_file
    .read_to_string(&mut value)
    .map_err(|_| GpioError::UnreadableFile {
      path: pin.value_path(),
    })?;

  print!("Direction: {direction}");
  print!("Value: {value}");

  Ok(())
}

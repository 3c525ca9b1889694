use crate::{
  error::{GpioError, GpioResult},
  sysfs::{Pin, PinValue},
};
use std::{
  fs::{File, OpenOptions},
  io::{Read, Write},
};

/// Tool function which drives an output pin high or low.
///
/// The pin's direction is checked first; a pin that is not configured as an
/// output is left untouched.
pub fn write(pin: &Pin, value: PinValue) -> GpioResult<()> {
  let direction_path = pin.direction_path();
  let value_path = pin.value_path();

  let mut direction_file = File::open(&direction_path)
    .map_err(|_| GpioError::UnreadableDirection { path: direction_path })?;

  // opened without truncation so a failed direction check leaves the value
  // file's content intact
  let mut value_file = OpenOptions::new()
    .write(true)
    .open(&value_path)
    .map_err(|_| GpioError::UnwritableFile {
      path: value_path.clone(),
    })?;

  let mut direction = String::new();
  direction_file.read_to_string(&mut direction).map_err(|_| {
    GpioError::UnreadableDirection {
      path: pin.direction_path(),
    }
  })?;

  if !direction.starts_with("out") {
    return Err(GpioError::NotOutput { pin: pin.number() });
  }

  value_file
    .set_len(0)
    .and_then(|_| value_file.write_all(value.as_str().as_bytes()))
    .map_err(|_| GpioError::UnwritableFile { path: value_path })?;

  Ok(())
}

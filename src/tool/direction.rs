use crate::{
  error::{GpioError, GpioResult},
  sysfs::{Direction, Pin},
};
use std::{fs::OpenOptions, io::Write};

/// Tool function which configures a pin as input or output.
///
/// The direction file belongs to the kernel; it is truncated and rewritten
/// but never created.
pub fn direction(pin: &Pin, direction: Direction) -> GpioResult<()> {
  let path = pin.direction_path();

  let mut file = OpenOptions::new()
    .write(true)
    .truncate(true)
    .open(&path)
    .map_err(|_| GpioError::UnwritableFile { path: path.clone() })?;

  file
    .write_all(direction.as_str().as_bytes())
    .map_err(|_| GpioError::UnwritableFile { path })?;

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::fs;
  use tempfile::tempdir;

  fn fake_pin(root: &std::path::Path, number: u32) -> Pin {
    let pin = Pin::with_root(number, root);
    fs::create_dir_all(root.join(format!("gpio{number}"))).unwrap();
    pin
  }

  #[test]
  fn sets_a_pin_to_output() {
    let root = tempdir().unwrap();
    let pin = fake_pin(root.path(), 8);

    fs::write(pin.direction_path(), "in\n").unwrap();

    direction(&pin, Direction::Out).unwrap();

    assert_eq!(fs::read_to_string(pin.direction_path()).unwrap(), "out");
  }

  #[test]
  fn sets_a_pin_to_input() {
    let root = tempdir().unwrap();
    let pin = fake_pin(root.path(), 23);

    fs::write(pin.direction_path(), "out\n").unwrap();

    direction(&pin, Direction::In).unwrap();

    assert_eq!(fs::read_to_string(pin.direction_path()).unwrap(), "in");
  }

  #[test]
  fn missing_direction_file_is_reported() {
    let root = tempdir().unwrap();
    let pin = fake_pin(root.path(), 14);

    let error = direction(&pin, Direction::Out).unwrap_err();

    match error {
      GpioError::UnwritableFile { path } => {
        assert_eq!(path, pin.direction_path())
      }
      other => panic!("unexpected error: {other}"),
    }
  }
}

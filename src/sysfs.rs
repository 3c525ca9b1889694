use std::path::{Path, PathBuf};

/// Where the kernel exposes the GPIO class by default.
pub const GPIO_CLASS: &str = "/sys/class/gpio";

/// Logic level of an output pin, persisted as `0`/`1` text in the value
/// file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PinValue {
  /// Pin driven low.
  Low = 0,

  /// Pin driven high.
  High = 1,
}

impl PinValue {
  /// Maps a command line token to a value; `on` and `1` are synonyms, as
  /// are `off` and `0`. Any other token is rejected.
  pub fn from_token(token: &str) -> Option<Self> {
    match token {
      "on" | "1" => Some(PinValue::High),
      "off" | "0" => Some(PinValue::Low),
      _ => None,
    }
  }

  /// The text written to the value file, no trailing newline.
  pub fn as_str(self) -> &'static str {
    match self {
      PinValue::Low => "0",
      PinValue::High => "1",
    }
  }
}

/// Pin direction, persisted as `in`/`out` text in the direction file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
  /// Pin reads external input.
  In,

  /// Pin drives output.
  Out,
}

impl Direction {
  /// Maps a command line token to a direction; `in` and `0` are synonyms,
  /// as are `out` and `1`. Any other token is rejected.
  pub fn from_token(token: &str) -> Option<Self> {
    match token {
      "in" | "0" => Some(Direction::In),
      "out" | "1" => Some(Direction::Out),
      _ => None,
    }
  }

  /// The text written to the direction file, no trailing newline.
  pub fn as_str(self) -> &'static str {
    match self {
      Direction::In => "in",
      Direction::Out => "out",
    }
  }
}

/// Handle to one exported pin's directory under the sysfs GPIO class.
///
/// The kernel owns the files under this directory; operations only read and
/// overwrite them, never create or delete them.
pub struct Pin {
  number: u32,
  root: PathBuf,
}

impl Pin {
  /// Constructs a handle under the standard `/sys/class/gpio` root.
  pub fn new(number: u32) -> Self {
    Self::with_root(number, GPIO_CLASS)
  }

  /// Constructs a handle under an alternate class root.
  pub fn with_root(number: u32, root: impl AsRef<Path>) -> Self {
    Pin {
      number,
      root: root.as_ref().to_path_buf(),
    }
  }

  /// The pin's GPIO number.
  pub fn number(&self) -> u32 {
    self.number
  }

  /// Path of the pin's direction file.
  pub fn direction_path(&self) -> PathBuf {
    self.root.join(format!("gpio{}/direction", self.number))
  }

  /// Path of the pin's value file.
  pub fn value_path(&self) -> PathBuf {
    self.root.join(format!("gpio{}/value", self.number))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn paths_follow_the_class_layout() {
    let pin = Pin::new(22);

    assert_eq!(
      pin.direction_path(),
      PathBuf::from("/sys/class/gpio/gpio22/direction")
    );
    assert_eq!(
      pin.value_path(),
      PathBuf::from("/sys/class/gpio/gpio22/value")
    );
  }

  #[test]
  fn value_tokens_accept_both_spellings() {
    assert_eq!(PinValue::from_token("on"), Some(PinValue::High));
    assert_eq!(PinValue::from_token("1"), Some(PinValue::High));
    assert_eq!(PinValue::from_token("off"), Some(PinValue::Low));
    assert_eq!(PinValue::from_token("0"), Some(PinValue::Low));

    for token in ["", "2", "ON", "high", "maybe"] {
      assert_eq!(PinValue::from_token(token), None);
    }
  }

  #[test]
  fn direction_tokens_accept_both_spellings() {
    assert_eq!(Direction::from_token("in"), Some(Direction::In));
    assert_eq!(Direction::from_token("0"), Some(Direction::In));
    assert_eq!(Direction::from_token("out"), Some(Direction::Out));
    assert_eq!(Direction::from_token("1"), Some(Direction::Out));

    for token in ["", "2", "input", "output", "OUT"] {
      assert_eq!(Direction::from_token(token), None);
    }
  }

  #[test]
  fn alternate_root_is_respected() {
    let pin = Pin::with_root(4, "/tmp/fake-gpio");

    assert_eq!(
      pin.value_path(),
      PathBuf::from("/tmp/fake-gpio/gpio4/value")
    );
  }
}

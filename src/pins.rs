/// GPIO pins broken out on the physical header. Commands naming any other
/// pin are rejected before any sysfs file is touched.
pub const HEADER_PINS: [u32; 17] = [
  2, 3, 4, 7, 8, 9, 10, 11, 14, 15, 17, 18, 22, 23, 24, 25, 27,
];

/// Parses a pin token as a base-10 number and checks it against the header
/// allow-list. Tokens that do not parse at all fail validation the same way
/// as numbers outside the list.
pub fn validate(token: &str) -> Option<u32> {
  token
    .parse::<u32>()
    .ok()
    .filter(|pin| HEADER_PINS.contains(pin))
}

use clap::{Arg, Command};
use gpio::{
  pins,
  sysfs::{Direction, Pin, PinValue},
  tool,
};
use jeflog::fail;
use std::process;

const USAGE: &str = "\
Usage: gpio [r/w/d] [gpio #] ([on/off][in/out])

Read example: gpio r 22 (returns status of gpio pin #22)
Write example: gpio w 17 on (enables current on gpio pin #17)
Direction example: gpio d 4 in (sets pinmode on gpio pin 4 to input)";

fn usage() -> ! {
  println!("{USAGE}");
  process::exit(1);
}

fn main() {
  let command = Command::new("gpio")
    .about("Raspberry Pi GPIO control through sysfs")
    .subcommand_required(true)
    .subcommand(
      Command::new("r")
        .about("Reads the direction and value of a pin.")
        .arg(Arg::new("pin").required(true)),
    )
    .subcommand(
      Command::new("w")
        .about("Writes an output value to a pin configured as output.")
        .arg(Arg::new("pin").required(true))
        .arg(Arg::new("value").required(true)),
    )
    .subcommand(
      Command::new("d")
        .about("Sets the direction of a pin.")
        .arg(Arg::new("pin").required(true))
        .arg(Arg::new("direction").required(true)),
    );

  let matches = match command.try_get_matches() {
    Ok(matches) => matches,
    Err(_) => usage(),
  };

  let (operation, args) = match matches.subcommand() {
    Some(subcommand) => subcommand,
    None => usage(),
  };

  let pin = match pins::validate(args.get_one::<String>("pin").unwrap()) {
    Some(number) => Pin::new(number),
    None => {
      fail!("Incorrect pin number.");
      process::exit(1);
    }
  };

  // the pin is validated above, before the third token is resolved; an
  // unknown pin wins over an unknown value or direction spelling
  let outcome = match operation {
    "r" => tool::read(&pin),
    "w" => {
      match PinValue::from_token(args.get_one::<String>("value").unwrap()) {
        Some(value) => tool::write(&pin, value),
        None => usage(),
      }
    }
    "d" => {
      match Direction::from_token(args.get_one::<String>("direction").unwrap())
      {
        Some(direction) => tool::direction(&pin, direction),
        None => usage(),
      }
    }
    _ => usage(),
  };

  if let Err(error) = outcome {
    fail!("{error}");
    process::exit(1);
  }
}

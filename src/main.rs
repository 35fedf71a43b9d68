use std::process;

use clap::{value_t, App, Arg, ArgGroup};
use log::debug;

use lazy_dialer::config::Format;
use lazy_dialer::keypad::{Keypad, STANDARD_LAYOUT};
use lazy_dialer::solver::{self, DistanceCache};

fn main() {
    env_logger::init();

    let matches = App::new("lazy-dialer")
        .author("martin-t")
        .version("0.1")
        .about("Finds the laziest way to dial numbers with two fingers")
        .arg(
            Arg::with_name("pairs")
                .short("p")
                .long("pairs")
                .help("print finger positions as pairs (default)"),
        )
        .arg(
            Arg::with_name("keypad")
                .short("k")
                .long("keypad")
                .help("draw the keypad after each digit"),
        )
        .group(ArgGroup::with_name("format").arg("pairs").arg("keypad"))
        .arg(
            Arg::with_name("left")
                .short("l")
                .long("left")
                .takes_value(true)
                .default_value("*")
                .help("key the left finger starts on"),
        )
        .arg(
            Arg::with_name("right")
                .short("r")
                .long("right")
                .takes_value(true)
                .default_value("#")
                .help("key the right finger starts on"),
        )
        .arg(
            Arg::with_name("stats")
                .short("s")
                .long("stats")
                .help("print search statistics"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("print every improvement found during search"),
        )
        .arg(Arg::with_name("number").required(true).multiple(true))
        .get_matches();

    let format = if matches.is_present("keypad") {
        Format::Keypad
    } else {
        Format::Pairs
    };
    let left = value_t!(matches, "left", char).unwrap_or_else(|e| e.exit());
    let right = value_t!(matches, "right", char).unwrap_or_else(|e| e.exit());
    let print_stats = matches.is_present("stats");
    let print_status = matches.is_present("verbose");

    let keypad = Keypad::with_starts(STANDARD_LAYOUT, left, right).unwrap_or_else(|err| {
        eprintln!("Invalid starting keys: {}", err);
        process::exit(1);
    });
    debug!("Keypad:\n{:?}", keypad);
    debug!("Keys: {}", keypad.symbols().into_iter().collect::<String>());
    debug!("Format: {}", format);

    // all numbers are dialed on the same keypad
    let mut distances = DistanceCache::new();
    for number in matches.values_of("number").into_iter().flatten() {
        println!("Dialing {}...", number);
        let solution = solver::solve_with_cache(&keypad, number, &mut distances, print_status)
            .unwrap_or_else(|err| {
                eprintln!("Can't dial {}: {}", number, err);
                process::exit(1);
            });

        println!("Found solution:");
        print!("{}", solution.format(&keypad, format));
        println!("Distance: {}", solution.distance);
        if print_stats {
            println!("{}", solution.stats);
        }
    }
}

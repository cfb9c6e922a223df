use std::io::{self, BufRead, Write};

use clap::{value_t, App, Arg, ArgMatches};
use rand::{rngs::StdRng, SeedableRng};
use tracing::info;
use tracing_subscriber::EnvFilter;

use discoveries::{Category, Fleet, Game, Ship, ShotOutcome, STANDARD_FLEET};

use crate::commands::{PlayCommand, SetupCommand};

mod commands;
mod display;

/// Shots per salvo when not given on the command line.
const DEFAULT_SALVO: &str = "3";

fn main() -> io::Result<()> {
    let matches = App::new("Discoveries")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Command line naval battle against a hidden fleet.")
        .arg(
            Arg::with_name("salvo")
                .short("s")
                .long("salvo")
                .value_name("SHOTS")
                .help("number of shots in each salvo")
                .takes_value(true)
                .default_value(DEFAULT_SALVO),
        )
        .arg(
            Arg::with_name("random_fleet")
                .short("r")
                .long("random-fleet")
                .help("skip placement and build every fleet at random"),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .value_name("SEED")
                .help("seed for random fleets, for reproducible games")
                .takes_value(true),
        )
        .get_matches();

    init_tracing();

    let salvo = value_t!(matches, "salvo", usize).unwrap_or_else(|e| e.exit());
    if salvo == 0 {
        eprintln!("a salvo must have at least one shot");
        std::process::exit(2);
    }
    let mut rng = make_rng(&matches);
    let random_fleet = matches.is_present("random_fleet");

    let stdin = io::stdin();
    let mut input = InputReader::new(stdin.lock());

    loop {
        let fleet = if random_fleet {
            Fleet::random(&mut rng)
        } else {
            match choose_placements(&mut rng, &mut input)? {
                Some(fleet) => fleet,
                None => break,
            }
        };
        info!(ships = fleet.len(), "game started");
        match play(Game::new(fleet), salvo, &mut input)? {
            Ending::NewFleet => continue,
            Ending::Won | Ending::Quit => break,
        }
    }
    Ok(())
}

/// Send log events to stderr, filtered by `RUST_LOG` with a default of `warn`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Build the random number generator, seeded from the command line if a seed was given.
fn make_rng(matches: &ArgMatches) -> StdRng {
    if matches.is_present("seed") {
        let seed = value_t!(matches, "seed", u64).unwrap_or_else(|e| e.exit());
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_entropy()
    }
}

/// Let the player lay out a standard fleet. Returns `None` if they quit.
fn choose_placements(
    rng: &mut StdRng,
    input: &mut InputReader<impl BufRead>,
) -> io::Result<Option<Fleet>> {
    let mut fleet = Fleet::new();
    println!();
    println!("Place ships. Type help or ? for commands.");
    loop {
        println!();
        let missing = fleet.missing_categories();
        if missing.is_empty() {
            println!("All ships placed, type done to start the game");
        } else {
            let names: Vec<String> = missing.iter().map(ToString::to_string).collect();
            println!("Remaining ships to place: {}", names.join(", "));
        }
        println!("Your current fleet:");
        print!("{}", display::fleet_board(&fleet, &[]));
        println!();

        let cmd = input.read_input_lower(">", |line| match commands::parse_setup(line) {
            Ok(cmd) => Some(cmd),
            Err(msg) => {
                println!("{}", msg);
                None
            }
        })?;

        match cmd {
            SetupCommand::Done if fleet.is_full() => return Ok(Some(fleet)),
            SetupCommand::Done => println!("You must place all your ships first!"),
            SetupCommand::Place(category, anchor, facing) => {
                if !missing.contains(&category) {
                    println!("No {} left to place.", category);
                    continue;
                }
                let ship = match Ship::new(category, facing, anchor) {
                    Ok(ship) => ship,
                    Err(err) => {
                        println!("Invalid placement: {}.", err);
                        continue;
                    }
                };
                if let Err(err) = fleet.try_add(ship) {
                    println!("Invalid placement: {}.", err.reason());
                }
            }
            SetupCommand::Clear => fleet = Fleet::new(),
            SetupCommand::Randomize => {
                if !fleet.fill_random(rng) {
                    println!("Could not fit the remaining ships; try clear.");
                }
            }
            SetupCommand::Quit => return Ok(None),
            SetupCommand::Help => print_setup_help(),
        }
    }
}

/// How a game finished.
enum Ending {
    Won,
    NewFleet,
    Quit,
}

/// Run salvos against the fleet until every ship is sunk or the player gives up.
fn play(mut game: Game, salvo: usize, input: &mut InputReader<impl BufRead>) -> io::Result<Ending> {
    println!();
    println!(
        "Sink the fleet! Each salvo is {} shots. Type help or ? for commands.",
        salvo
    );
    loop {
        println!();
        let cmd = input.read_input_lower(">", |line| match commands::parse_play(line, salvo) {
            Ok(cmd) => Some(cmd),
            Err(msg) => {
                println!("{}", msg);
                None
            }
        })?;

        match cmd {
            PlayCommand::Salvo(shots) => {
                for pos in shots {
                    let report = match game.shoot(pos) {
                        ShotOutcome::Invalid => "off the board".to_string(),
                        ShotOutcome::Repeated => "already fired there".to_string(),
                        ShotOutcome::Miss => "miss".to_string(),
                        ShotOutcome::Hit(ship) => format!("hit a {}", ship.category()),
                        ShotOutcome::Sunk(ship) => format!("sank a {}!", ship.category()),
                    };
                    println!("{}: {}", pos, report);
                }
                if game.remaining_ships() == 0 {
                    println!();
                    println!("The whole fleet is sunk. You win!");
                    print!("{}", display::status_report(&game));
                    info!(shots = game.shots().len(), "game won");
                    return Ok(Ending::Won);
                }
            }
            PlayCommand::Shots => print!("{}", display::shots_board(&game)),
            PlayCommand::Map => print!("{}", display::fleet_board(game.fleet(), game.shots())),
            PlayCommand::Status => print!("{}", display::status_report(&game)),
            PlayCommand::NewFleet => return Ok(Ending::NewFleet),
            PlayCommand::Quit => {
                print!("{}", display::fleet_board(game.fleet(), game.shots()));
                return Ok(Ending::Quit);
            }
            PlayCommand::Help => print_play_help(salvo),
        }
    }
}

fn print_setup_help() {
    println!(
        "Available Commands:
    done                               if all ships are placed, start the game.
    place <ship> <row>,<column> <dir>  place the ship with its anchor at the given cell.
        Possible directions are \"n\", \"s\", \"e\", and \"o\" (or \"w\").
    clear                              clears all ship placements.
    randomize                          randomize the placements of the remaining ships.
    quit                               leave the game.

Available Ships:"
    );
    for &category in Category::ALL {
        let count = STANDARD_FLEET.iter().filter(|&&c| c == category).count();
        println!(
            "    \"{}\" (\"{}\"), size {}, {} in the fleet",
            category,
            category.abbrev(),
            category.size(),
            count
        );
    }
}

fn print_play_help(salvo: usize) {
    println!(
        "Available Commands:
    salvo <row>,<column> ...  fire {} shots, e.g. salvo 0,0 4,5 9,9.
    shots                     show the cells fired at so far.
    map                       reveal the fleet.
    status                    show statistics and the ships still afloat.
    new                       abandon this game and start another.
    quit                      give up and reveal the fleet.",
        salvo
    );
}

/// Helper to read input from the player.
struct InputReader<B> {
    read: B,
    buf: String,
}

impl<B> InputReader<B> {
    fn new(read: B) -> Self {
        Self {
            read,
            buf: String::new(),
        }
    }
}

impl<B: BufRead> InputReader<B> {
    /// Repeatedly tries to read input until the input checker returns `Some`. Converts
    /// to ascii lower before running the checker.
    fn read_input_lower<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<T>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            self.read_input_inner(prompt)?;
            self.buf.make_ascii_lowercase();
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(val);
            }
        }
    }

    /// Helper to print the prompt, clear the string buffer and read a line.
    fn read_input_inner(&mut self, prompt: &str) -> io::Result<()> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            println!();
            std::process::exit(0);
        }
        Ok(())
    }
}

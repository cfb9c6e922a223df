//! Parsing of the commands typed at the two prompts.
use once_cell::sync::Lazy;
use regex::Regex;

use discoveries::{Category, Cell, Facing};

/// Commands available while building the fleet.
#[derive(Debug, Clone, PartialEq)]
pub enum SetupCommand {
    /// Place a ship of the given category from the anchor in the given facing.
    Place(Category, Cell, Facing),
    /// Fill the rest of the fleet at random.
    Randomize,
    /// Throw away every placement.
    Clear,
    /// Start the game.
    Done,
    Help,
    Quit,
}

/// Commands available while playing.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayCommand {
    /// Fire a volley at the given coordinates.
    Salvo(Vec<Cell>),
    /// Show the board of shots fired so far.
    Shots,
    /// Reveal the fleet.
    Map,
    /// Print the statistics and floating ships.
    Status,
    /// Abandon this game and build a new fleet.
    NewFleet,
    Help,
    Quit,
}

/// Matcher for the ship placement command.
static PLACE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?x)(?:place|put)\s+
        (?P<ship>\w+)\s+
        (?:(?:at|on)\s+)?
        (?P<row>-?[0-9]+)(?:\s*,\s*|\s+)(?P<col>-?[0-9]+)\s+
        (?P<dir>\w+)$",
    )
    .expect("placement pattern is valid")
});

/// Matcher for the volley command. Coordinates are picked out by [`COORD`].
static SALVO: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:salvo|fire|rajada)\s+(?P<coords>.+)$").expect("salvo pattern is valid")
});

/// Matcher for one `row,column` pair.
static COORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?P<row>-?[0-9]+)\s*,\s*(?P<col>-?[0-9]+)").expect("coordinate pattern is valid")
});

fn parse_number(what: &str, text: &str) -> Result<i32, String> {
    text.parse()
        .map_err(|_| format!("invalid {}: {}", what, text))
}

/// Parse a line typed while building the fleet. The line should already be trimmed and
/// lowercased.
pub fn parse_setup(input: &str) -> Result<SetupCommand, String> {
    match input {
        "?" | "help" | "h" => Ok(SetupCommand::Help),
        "randomize" | "rand" | "random" => Ok(SetupCommand::Randomize),
        "done" | "start" => Ok(SetupCommand::Done),
        "clear" | "nova" => Ok(SetupCommand::Clear),
        "quit" | "exit" | "desisto" => Ok(SetupCommand::Quit),
        other => {
            let captures = PLACE.captures(other).ok_or_else(|| {
                format!(
                    "Invalid ship-placement command \"{}\". Use '?' for help",
                    other
                )
            })?;
            let ship = &captures["ship"];
            let category: Category = ship.parse().map_err(|_| {
                format!(
                    "invalid ship: {}, choose \"galleon\", \"frigate\", \"carrack\", \
                     \"caravel\", or \"dinghy\"",
                    ship
                )
            })?;
            let row = parse_number("row", &captures["row"])?;
            let column = parse_number("column", &captures["col"])?;
            // An unknown facing is passed through so ship construction can reject it.
            let facing = Facing::parse(&captures["dir"]);
            Ok(SetupCommand::Place(category, Cell::new(row, column), facing))
        }
    }
}

/// Parse a line typed during play. The line should already be trimmed and lowercased.
/// `salvo` is the number of shots a volley must contain.
pub fn parse_play(input: &str, salvo: usize) -> Result<PlayCommand, String> {
    match input {
        "?" | "help" | "h" => Ok(PlayCommand::Help),
        "shots" | "ver" => Ok(PlayCommand::Shots),
        "map" | "mapa" => Ok(PlayCommand::Map),
        "status" | "estado" => Ok(PlayCommand::Status),
        "new" | "nova" => Ok(PlayCommand::NewFleet),
        "quit" | "exit" | "desisto" => Ok(PlayCommand::Quit),
        other => {
            let captures = SALVO
                .captures(other)
                .ok_or_else(|| format!("Invalid command \"{}\". Use '?' for help", other))?;
            let shots = COORD
                .captures_iter(&captures["coords"])
                .map(|pair| {
                    Ok(Cell::new(
                        parse_number("row", &pair["row"])?,
                        parse_number("column", &pair["col"])?,
                    ))
                })
                .collect::<Result<Vec<_>, String>>()?;
            if shots.len() != salvo {
                return Err(format!(
                    "a salvo is exactly {} shots, got {}",
                    salvo,
                    shots.len()
                ));
            }
            Ok(PlayCommand::Salvo(shots))
        }
    }
}

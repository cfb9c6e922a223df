//! Text rendering of boards and game statistics.
use std::fmt;

use discoveries::{Category, Cell, Fleet, Game, BOARD_SIZE};

/// What the shot board shows for one cell.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum ShotCell {
    NotShot,
    Shot,
}

impl fmt::Display for ShotCell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ShotCell::NotShot => f.pad("."),
            ShotCell::Shot => f.pad("X"),
        }
    }
}

/// What the revealed fleet board shows for one cell.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum FleetCell {
    Empty,
    Miss,
    Afloat,
    Hit,
}

impl fmt::Display for FleetCell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FleetCell::Empty => f.pad("."),
            FleetCell::Miss => f.pad("X"),
            FleetCell::Afloat => f.pad("#"),
            FleetCell::Hit => f.pad("*"),
        }
    }
}

/// Render the board of shots fired so far, without revealing any ship.
pub fn shots_board(game: &Game) -> String {
    render_board(|cell| {
        if game.shots().contains(cell) {
            ShotCell::Shot
        } else {
            ShotCell::NotShot
        }
    })
}

/// Render the fleet with every shot fired at it. Pass an empty shot list while placing.
pub fn fleet_board(fleet: &Fleet, shots: &[Cell]) -> String {
    render_board(|cell| {
        let shot = shots.contains(cell);
        match fleet.ship_at(cell) {
            Some(ship) if ship.cells().iter().any(|c| c == cell && c.is_hit()) => FleetCell::Hit,
            Some(_) => FleetCell::Afloat,
            None if shot => FleetCell::Miss,
            None => FleetCell::Empty,
        }
    })
}

/// Render the grid row by row with column indices across the top and row indices down
/// the left.
fn render_board<F, D>(show: F) -> String
where
    F: Fn(&Cell) -> D,
    D: fmt::Display,
{
    BoardView(show).to_string()
}

/// Display adapter drawing the board, asking `F` what to show in each cell.
struct BoardView<F>(F);

impl<F, D> fmt::Display for BoardView<F>
where
    F: Fn(&Cell) -> D,
    D: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "   ")?;
        for column in 0..BOARD_SIZE {
            write!(f, "{:^3}", column)?;
        }
        writeln!(f)?;
        for row in 0..BOARD_SIZE {
            write!(f, "{:>2} ", row)?;
            for column in 0..BOARD_SIZE {
                write!(f, "{:^3}", (self.0)(&Cell::new(row, column)))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Summarize the counters of a game and list the ships still afloat, grouped by category.
pub fn status_report(game: &Game) -> String {
    StatusReport(game).to_string()
}

struct StatusReport<'a>(&'a Game);

impl fmt::Display for StatusReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let game = self.0;
        writeln!(f, "Shots fired:    {}", game.shots().len())?;
        writeln!(f, "Hits:           {}", game.hits())?;
        writeln!(f, "Repeated shots: {}", game.repeated_shots())?;
        writeln!(f, "Invalid shots:  {}", game.invalid_shots())?;
        writeln!(f, "Ships sunk:     {}", game.sunk_ships())?;
        writeln!(f, "Ships afloat:   {}", game.remaining_ships())?;
        for &category in Category::ALL {
            let ships = game.fleet().ships_of_category(category);
            if ships.is_empty() {
                continue;
            }
            let afloat = ships.iter().filter(|ship| ship.is_floating()).count();
            writeln!(f, "  {:<8} {} of {} afloat", category, afloat, ships.len())?;
        }
        Ok(())
    }
}

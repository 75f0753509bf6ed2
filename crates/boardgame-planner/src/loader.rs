//! Loading a game collection from a CSV export.
//!
//! The file needs a header row. Columns are matched by name, so their order
//! does not matter and unknown columns are ignored:
//!
//! ```text
//! objectname,id,minplayers,maxplayers,minplaytime,maxplaytime,avgweight,rank,average,yearpublished
//! Go,1,2,2,30,180,3.9,23,7.6,-2200
//! ```

use std::io::Read;
use std::path::Path;

use log::debug;

use crate::error::Result;
use crate::game::BoardGame;

fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.has_headers(true).trim(csv::Trim::All);
    builder
}

/// Reads every game from the CSV file at `path`.
pub fn load_games(path: impl AsRef<Path>) -> Result<Vec<BoardGame>> {
    let path = path.as_ref();
    let reader = reader_builder().from_path(path)?;
    let games = collect(reader)?;
    debug!("loaded {} game(s) from {}", games.len(), path.display());
    Ok(games)
}

/// Reads every game from CSV data in `reader`.
///
/// ```
/// use boardgame_planner::load_games_from_reader;
///
/// let data = "\
/// objectname,id,minplayers,maxplayers,minplaytime,maxplaytime,avgweight,rank,average,yearpublished
/// Chess,7,2,2,10,20,3.7,400,7.2,1475
/// ";
/// let games = load_games_from_reader(data.as_bytes()).unwrap();
/// assert_eq!(games[0].name(), "Chess");
/// assert_eq!(games[0].rating(), 7.2);
/// ```
pub fn load_games_from_reader<R: Read>(reader: R) -> Result<Vec<BoardGame>> {
    collect(reader_builder().from_reader(reader))
}

fn collect<R: Read>(mut reader: csv::Reader<R>) -> Result<Vec<BoardGame>> {
    reader
        .deserialize::<BoardGame>()
        .map(|row| row.map_err(Into::into))
        .collect()
}

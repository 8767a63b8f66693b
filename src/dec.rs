//! Decoders that build a [`World`] from text input.
//!
//! Two formats are supported: a plain character grid where one configurable
//! character marks a live cell, and the common RLE pattern format
//! (see: https://conwaylife.com/wiki/Run_Length_Encoded).

use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;
use tracing::{debug, warn};

use crate::Pos2;
use crate::World;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("failed to read world file: {0}")]
    Io(#[from] io::Error),

    #[error("rle input has no header line")]
    MissingHeader,

    #[error("rle header has no \"x = <int>, y = <int>\" dimensions: {header:?}")]
    BadHeader { header: String },

    #[error("rle input has no data lines")]
    MissingData,
}

pub trait WorldDecoder {
    fn decode(self, value: &str) -> Result<World, DecodeError>;
}

/// Loads a world file, picking the decoder from the file extension:
/// `.rle` (case-insensitive) means RLE, anything else is a plain grid
/// using `alive` as the live-cell marker.
pub fn load_path<P: AsRef<Path>>(path: P, alive: char) -> Result<World, DecodeError> {
    let path = path.as_ref();
    let value = fs::read_to_string(path)?;

    if is_rle_path(path) {
        RunLengthEncoded.decode(&value)
    } else {
        PlainGrid { alive }.decode(&value)
    }
}

fn is_rle_path(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| ext.eq_ignore_ascii_case("rle"))
}

/// Plain grid format: one line per row, one character per column, `alive`
/// marks a live cell and every other character is dead.
pub struct PlainGrid {
    pub alive: char,
}

impl Default for PlainGrid {
    fn default() -> Self {
        Self { alive: '#' }
    }
}

impl WorldDecoder for PlainGrid {
    /// Never rejects content: lines may be ragged, and any character other
    /// than the alive marker is simply a dead cell.
    fn decode(self, value: &str) -> Result<World, DecodeError> {
        let mut world = World::default();
        for (y, line) in value.lines().enumerate() {
            for (x, c) in line.chars().enumerate() {
                if c == self.alive {
                    world.insert(Pos2::new(x as i64, y as i64));
                }
            }
        }

        Ok(world)
    }
}

#[derive(Default)]
pub struct RunLengthEncoded;

impl WorldDecoder for RunLengthEncoded {
    fn decode(self, value: &str) -> Result<World, DecodeError> {
        // Blank and '#' comment lines are skipped; the first remaining line
        // is the header, everything after it is pattern data.
        let mut header = None;
        let mut data = String::new();
        let mut has_data = false;
        for line in value.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if header.is_none() {
                header = Some(line);
            } else {
                data.push_str(line);
                has_data = true;
            }
        }

        let Some(header) = header else {
            return Err(DecodeError::MissingHeader);
        };
        if !has_data {
            return Err(DecodeError::MissingData);
        }

        // Dimensions are metadata only: the decoded world sizes itself to
        // the cells that are actually marked live.
        let (width, height) = extract_dims(header)?;
        debug!(width, height, "parsed rle header");

        // The end-of-pattern marker is optional cleanup, not a token.
        if let Some(i) = data.find('!') {
            if !data[i + 1..].is_empty() {
                warn!("discarding rle content after '!' terminator");
            }
            data.truncate(i);
        }

        Ok(build_world(&data))
    }
}

/// Extracts `(width, height)` from an RLE header of the form
/// `x = <int>, y = <int>`, case-insensitive with flexible spacing.
/// Leading text (and a trailing rule, if any) is tolerated.
fn extract_dims(header: &str) -> Result<(u64, u64), DecodeError> {
    let re = regex::Regex::new(r"(?i)x\s*=\s*(\d+)\s*,\s*y\s*=\s*(\d+)").unwrap();

    let bad_header = || DecodeError::BadHeader {
        header: header.to_owned(),
    };

    let caps = re.captures(header).ok_or_else(bad_header)?;
    let width = caps[1].parse().map_err(|_| bad_header())?;
    let height = caps[2].parse().map_err(|_| bad_header())?;

    Ok((width, height))
}

/// Decodes the joined data stream: rows are separated by `$`, and each row
/// is a sequence of `<optional run length><b|o>` tokens, optionally
/// space-separated, with a missing run length meaning 1.
fn build_world(data: &str) -> World {
    let re = regex::Regex::new(r"(?i)(\d*)\s*([bo])").unwrap();

    let mut world = World::default();
    for (y, row) in data.split('$').enumerate() {
        let mut x: i64 = 0;
        for (_, [run, kind]) in re.captures_iter(row).map(|c| c.extract()) {
            let run = run.parse::<i64>().unwrap_or(1);
            if kind.eq_ignore_ascii_case("o") {
                for i in 0..run {
                    world.insert(Pos2::new(x + i, y as i64));
                }
            }
            x += run;
        }
    }

    world
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world_of(cells: &[(i64, i64)]) -> World {
        cells.iter().map(|&(x, y)| Pos2::new(x, y)).collect()
    }

    #[test]
    fn plain_grid_decodes_glider() {
        let value = "....\n...#\n.#.#\n..##\n";

        let world = PlainGrid::default().decode(value).unwrap();

        assert_eq!(world, world_of(&[(3, 1), (1, 2), (3, 2), (2, 3), (3, 3)]));
    }

    #[test]
    fn plain_grid_with_absent_marker_is_empty() {
        let value = "....\n...#\n.#.#\n..##\n";

        let world = PlainGrid { alive: 'O' }.decode(value).unwrap();

        assert!(world.is_empty());
    }

    #[test]
    fn plain_grid_tolerates_ragged_lines() {
        let value = "#\n..#\n";

        let world = PlainGrid::default().decode(value).unwrap();

        assert_eq!(world, world_of(&[(0, 0), (2, 1)]));
    }

    #[test]
    fn rle_decodes_glider() {
        let value = "x = 3, y = 3\n2bo$obo$b2o\n";

        let world = RunLengthEncoded.decode(value).unwrap();

        assert_eq!(world, world_of(&[(2, 0), (0, 1), (2, 1), (1, 2), (2, 2)]));
    }

    #[test]
    fn rle_skips_comments_and_blank_lines() {
        let value = "#N Glider\n#C the smallest spaceship\n\nx = 3, y = 3\n2bo$obo$b2o\n";

        let world = RunLengthEncoded.decode(value).unwrap();

        assert_eq!(world.len(), 5);
    }

    #[test]
    fn rle_data_may_span_multiple_lines() {
        let joined = RunLengthEncoded.decode("x = 3, y = 3\n2bo$obo$b2o\n").unwrap();
        let split = RunLengthEncoded.decode("x = 3, y = 3\n2bo$ob\no$b2o\n").unwrap();

        assert_eq!(joined, split);
    }

    #[test]
    fn rle_run_length_defaults_to_one() {
        let world = RunLengthEncoded.decode("x = 2, y = 1\nbo\n").unwrap();

        assert_eq!(world, world_of(&[(1, 0)]));
    }

    #[test]
    fn rle_tokens_may_be_space_separated() {
        let world = RunLengthEncoded.decode("x = 4, y = 1\n2b 2o\n").unwrap();

        assert_eq!(world, world_of(&[(2, 0), (3, 0)]));
    }

    #[test]
    fn rle_is_case_insensitive() {
        let world = RunLengthEncoded.decode("X = 3, Y = 1\nB2O\n").unwrap();

        assert_eq!(world, world_of(&[(1, 0), (2, 0)]));
    }

    #[test]
    fn rle_strips_end_of_pattern_marker() {
        let with_marker = RunLengthEncoded.decode("x = 3, y = 1\n3o!\n").unwrap();
        let without = RunLengthEncoded.decode("x = 3, y = 1\n3o\n").unwrap();

        assert_eq!(with_marker, without);
    }

    #[test]
    fn rle_ignores_content_after_marker() {
        let world = RunLengthEncoded.decode("x = 3, y = 1\no!2o\n").unwrap();

        assert_eq!(world, world_of(&[(0, 0)]));
    }

    #[test]
    fn rle_without_header_fails() {
        let err = RunLengthEncoded.decode("#C only comments\n").unwrap_err();

        assert!(matches!(err, DecodeError::MissingHeader));
    }

    #[test]
    fn rle_without_data_fails() {
        let err = RunLengthEncoded.decode("x = 3, y = 3\n").unwrap_err();

        assert!(matches!(err, DecodeError::MissingData));
    }

    #[test]
    fn rle_with_unparseable_header_fails() {
        let err = RunLengthEncoded.decode("width 3 height 3\n2bo$obo$b2o\n").unwrap_err();

        assert!(matches!(err, DecodeError::BadHeader { .. }));
    }

    #[test]
    fn header_dims_tolerate_spacing_and_leading_text() {
        assert_eq!(extract_dims("x = 3, y = 3").unwrap(), (3, 3));
        assert_eq!(extract_dims("x=10,y=20").unwrap(), (10, 20));
        assert_eq!(extract_dims("pattern: x  =  4 ,  y  =  5").unwrap(), (4, 5));
        assert_eq!(extract_dims("x = 3, y = 3, rule = B3/S23").unwrap(), (3, 3));
    }

    #[test]
    fn rle_rows_may_be_shorter_than_declared_width() {
        // trailing dead cells are implicit
        let world = RunLengthEncoded.decode("x = 5, y = 2\no$o\n").unwrap();

        assert_eq!(world, world_of(&[(0, 0), (0, 1)]));
    }

    #[test]
    fn rle_leading_empty_row_offsets_the_pattern() {
        let world = RunLengthEncoded.decode("x = 5, y = 4\n$3bo$bobo$2b2o\n").unwrap();

        assert_eq!(world, world_of(&[(3, 1), (1, 2), (3, 2), (2, 3), (3, 3)]));
    }

    #[test]
    fn rle_extension_detection_is_case_insensitive() {
        assert!(is_rle_path(Path::new("glider.rle")));
        assert!(is_rle_path(Path::new("glider.RLE")));
        assert!(!is_rle_path(Path::new("glider.txt")));
        assert!(!is_rle_path(Path::new("rle")));
    }

    #[test]
    fn load_path_surfaces_io_errors() {
        let err = load_path("definitely/not/a/file.txt", '#').unwrap_err();

        assert!(matches!(err, DecodeError::Io(_)));
    }
}

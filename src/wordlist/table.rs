use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use super::entry::{Par, WordEntry};
use super::list::{WordList, WordListError};

pub const TABLE_HEADER: &str = "WORD\tDIFFICULTY\tSCRABBLE_SCORE\tPAR";

const WORD_COLUMN: &str = "WORD";
const DIFFICULTY_COLUMN: &str = "DIFFICULTY";
const SCRABBLE_COLUMN: &str = "SCRABBLE_SCORE";
const PAR_COLUMN: &str = "PAR";

/// Column positions resolved from the header line.
struct Columns {
    difficulty: Option<usize>,
    scrabble: Option<usize>,
    par: Option<usize>,
}

impl Columns {
    fn from_header(fields: &[&str]) -> Self {
        let find = |name: &str| fields.iter().position(|f| f.trim().eq_ignore_ascii_case(name));
        Columns {
            difficulty: find(DIFFICULTY_COLUMN),
            scrabble: find(SCRABBLE_COLUMN),
            par: find(PAR_COLUMN),
        }
    }
}

/// Parse a tab-separated word-list table.
///
/// Exactly one header line is skipped; its first field must be `WORD`. Each
/// remaining non-blank line contributes one entry whose word is the first
/// field, trimmed and uppercased. Metadata columns are located by header name
/// and are optional; an empty cell is treated as absent. File order is list
/// order.
pub fn parse_table(contents: &str, source: &str) -> Result<WordList, WordListError> {
    // Editors on Windows may prepend a byte-order mark to the header.
    let contents = contents.strip_prefix('\u{feff}').unwrap_or(contents);
    let mut lines = contents.lines();

    let header = lines
        .next()
        .ok_or_else(|| WordListError::MissingHeader { list: source.to_string() })?;
    let header_fields: Vec<&str> = header.split('\t').collect();
    if !header_fields[0].trim().eq_ignore_ascii_case(WORD_COLUMN) {
        return Err(WordListError::MissingHeader { list: source.to_string() });
    }
    let columns = Columns::from_header(&header_fields);

    let mut entries = Vec::new();
    for (offset, line) in lines.enumerate() {
        // 1-based, counting the header
        let line_no = offset + 2;
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split('\t').collect();
        let word = fields[0].trim().to_ascii_uppercase();
        if word.is_empty() {
            return Err(WordListError::EmptyWord {
                list: source.to_string(),
                line: line_no,
            });
        }

        let cell = |column: Option<usize>| {
            column
                .and_then(|i| fields.get(i))
                .map(|f| f.trim())
                .filter(|f| !f.is_empty())
        };
        let invalid = |field: &'static str, value: &str| WordListError::InvalidField {
            list: source.to_string(),
            line: line_no,
            field,
            value: value.to_string(),
        };

        let difficulty = match cell(columns.difficulty) {
            Some(raw) => Some(
                raw.parse::<f64>()
                    .ok()
                    .filter(|d| d.is_finite())
                    .ok_or_else(|| invalid(DIFFICULTY_COLUMN, raw))?,
            ),
            None => None,
        };
        let scrabble_score = match cell(columns.scrabble) {
            Some(raw) => Some(raw.parse::<u32>().map_err(|_| invalid(SCRABBLE_COLUMN, raw))?),
            None => None,
        };
        let par = match cell(columns.par) {
            Some(raw) => Some(
                raw.parse::<u8>()
                    .ok()
                    .and_then(|p| Par::try_from(p).ok())
                    .ok_or_else(|| invalid(PAR_COLUMN, raw))?,
            ),
            None => None,
        };

        entries.push(WordEntry {
            word,
            difficulty,
            scrabble_score,
            par,
        });
    }

    WordList::new(source, entries)
}

/// Read and parse a table from disk.
pub fn load_table(path: &Path) -> Result<WordList, WordListError> {
    let contents = fs::read_to_string(path).map_err(|source| WordListError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let list = parse_table(&contents, &path.display().to_string())?;
    tracing::debug!(
        path = %path.display(),
        words = list.len(),
        fingerprint = %list.fingerprint(),
        "loaded word list"
    );
    Ok(list)
}

/// Two decimals with trailing zeros trimmed: `8.4`, `12`, `0`.
pub fn format_difficulty(value: f64) -> String {
    let s = format!("{value:.2}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Write the header and one row per entry. Absent metadata is written as an
/// empty cell.
pub fn write_table<W: Write>(list: &WordList, mut out: W) -> io::Result<()> {
    writeln!(out, "{TABLE_HEADER}")?;
    for entry in list.entries() {
        let difficulty = entry.difficulty.map(format_difficulty).unwrap_or_default();
        let scrabble = entry.scrabble_score.map(|s| s.to_string()).unwrap_or_default();
        let par = entry.par.map(|p| p.to_string()).unwrap_or_default();
        writeln!(out, "{}\t{}\t{}\t{}", entry.word, difficulty, scrabble, par)?;
    }
    Ok(())
}

/// `<file name>.tmp` next to the target, so the target's own name is never
/// reused.
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

fn write_synced(list: &WordList, path: &Path) -> io::Result<()> {
    let f = fs::File::create(path)?;
    let mut writer = io::BufWriter::new(&f);
    write_table(list, &mut writer)?;
    writer.flush()?;
    drop(writer);
    f.sync_all()
}

/// Write the table to a sibling temp file, then rename it into place. The
/// temp file is removed if writing fails.
pub fn save_table(list: &WordList, path: &Path) -> io::Result<()> {
    let temp_path = temp_path_for(path);
    if let Err(err) = write_synced(list, &temp_path) {
        let _ = fs::remove_file(&temp_path);
        return Err(err);
    }
    fs::rename(&temp_path, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_formatting_trims_zeros() {
        assert_eq!(format_difficulty(8.4), "8.4");
        assert_eq!(format_difficulty(12.0), "12");
        assert_eq!(format_difficulty(0.0), "0");
        assert_eq!(format_difficulty(100.0), "100");
        assert_eq!(format_difficulty(33.333), "33.33");
    }

    #[test]
    fn temp_path_keeps_full_file_name() {
        assert_eq!(temp_path_for(Path::new("data/words.txt")), Path::new("data/words.txt.tmp"));
        assert_eq!(temp_path_for(Path::new("words.tmp")), Path::new("words.tmp.tmp"));
    }
}

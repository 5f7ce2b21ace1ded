use crate::error::StatsError;
use crate::table::FrequencyTable;
use bridge_core::io::pbn;
use bridge_core::Deal;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufReader, BufWriter, LineWriter, Write};
use std::path::{Path, PathBuf};

/// Reads a table saved by [`save_table`], or starts a zeroed one if `path` does not exist.
pub fn load_table(path: &Path) -> Result<FrequencyTable, StatsError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::info!(path = %path.display(), "no saved table, starting from zero");
            return Ok(FrequencyTable::new());
        }
        Err(e) => return Err(e.into()),
    };
    let reader = BufReader::new(file);
    let table: FrequencyTable = serde_json::from_reader(reader)?;
    table.validate_shape()?;
    tracing::debug!(path = %path.display(), total = table.total(), "loaded table");
    Ok(table)
}

pub fn save_table(path: &Path, table: &FrequencyTable) -> Result<(), StatsError> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer(&mut writer, table)?;
    writer.flush()?;
    tracing::debug!(path = %path.display(), total = table.total(), "saved table");
    Ok(())
}

/// Append-only record of generated deals, one notation line each.
///
/// Lines are flushed as they are written so an interrupted run keeps every
/// deal it finished.
pub struct DealLog {
    path: PathBuf,
    writer: LineWriter<File>,
}

impl DealLog {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StatsError> {
        let path = path.into();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self {
            path,
            writer: LineWriter::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&mut self, deal: &Deal) -> Result<(), StatsError> {
        writeln!(self.writer, "{deal}")?;
        Ok(())
    }
}

/// Parses a deal log. Blank lines are skipped; lines may be bare notation or
/// PBN `[Deal "..."]` tags.
pub fn read_deals(path: &Path) -> Result<Vec<Deal>, StatsError> {
    let content = fs::read_to_string(path)?;
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| -> Result<Deal, StatsError> {
            let deal = if line.starts_with('[') {
                pbn::import_deal_tag(line)?
            } else {
                pbn::import_deal(line)?
            };
            Ok(deal)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::TableIndex;
    use bridge_core::{Card, Suit};

    #[test]
    fn test_missing_table_starts_zeroed() {
        let dir = tempfile::tempdir().unwrap();
        let table = load_table(&dir.path().join("results.json")).unwrap();
        assert_eq!(table, FrequencyTable::new());
    }

    #[test]
    fn test_unreadable_table_is_an_error() {
        // A regular file used as a directory fails with something other than NotFound.
        let dir = tempfile::tempdir().unwrap();
        let plain = dir.path().join("plain.txt");
        fs::write(&plain, "").unwrap();
        let err = load_table(&plain.join("results.json")).unwrap_err();
        assert!(matches!(err, StatsError::Io(_)), "{err}");
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.json");
        let mut table = FrequencyTable::new();
        table
            .increment(&TableIndex::Trump {
                suit: Suit::Clubs,
                hcp: 22,
                fit: 9,
                smaller: 3,
                tricks: 10,
            })
            .unwrap();
        save_table(&path, &table).unwrap();
        assert_eq!(load_table(&path).unwrap(), table);
    }

    #[test]
    fn test_load_rejects_wrong_shape() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.json");
        fs::write(&path, r#"{"S": [], "H": [], "D": [], "C": [], "NT": []}"#).unwrap();
        assert!(matches!(load_table(&path), Err(StatsError::TableShape(_))));
    }

    #[test]
    fn test_load_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.json");
        fs::write(&path, "not json").unwrap();
        assert!(matches!(load_table(&path), Err(StatsError::Json(_))));
    }

    #[test]
    fn test_deal_log_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("games.pbn");
        let mut deck = Card::deck();
        let first = Deal::from_deck(&deck).unwrap();
        deck.reverse();
        let second = Deal::from_deck(&deck).unwrap();

        {
            let mut log = DealLog::open(&path).unwrap();
            log.append(&first).unwrap();
        }
        {
            let mut log = DealLog::open(&path).unwrap();
            assert_eq!(log.path(), path.as_path());
            log.append(&second).unwrap();
        }

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);
        assert!(content.lines().all(|l| l.starts_with("N:")));
        assert_eq!(read_deals(&path).unwrap(), vec![first, second]);
    }

    #[test]
    fn test_read_deals_accepts_tags() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("games.pbn");
        let deal = Deal::from_deck(&Card::deck()).unwrap();
        fs::write(&path, format!("\n{}\n\n{}\n", pbn::export_deal_tag(&deal), deal)).unwrap();
        assert_eq!(read_deals(&path).unwrap(), vec![deal.clone(), deal]);
    }

    #[test]
    fn test_read_deals_reports_bad_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("games.pbn");
        fs::write(&path, "N:... ...\n").unwrap();
        assert!(matches!(read_deals(&path), Err(StatsError::Deal(_))));
    }
}

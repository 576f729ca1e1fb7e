use crate::{EVENT_COLUMNS, Event};
use std::fmt;

#[derive(Debug)]
pub enum ExportError {
    Csv(csv::Error),
    Io(std::io::Error),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::Csv(e) => write!(f, "CSV export failed: {e}"),
            ExportError::Io(e) => write!(f, "CSV export failed: {e}"),
        }
    }
}

impl std::error::Error for ExportError {}

impl From<csv::Error> for ExportError {
    fn from(e: csv::Error) -> Self {
        ExportError::Csv(e)
    }
}

/// Serialize events to CSV with a header row and the full, stable event
/// column order. Missing values are written as empty fields.
pub fn to_csv(events: &[&Event]) -> Result<Vec<u8>, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(EVENT_COLUMNS)?;
    for event in events {
        writer.write_record(event.cells().iter().map(|c| c.as_deref().unwrap_or("")))?;
    }
    writer.into_inner().map_err(|e| ExportError::Io(e.into_error()))
}

/// Suggested file name for a player's export.
pub fn export_filename(player: &str) -> String {
    let safe: String = player
        .chars()
        .map(|c| if matches!(c, '/' | '\\' | ':' | '\0') { '_' } else { c })
        .collect();
    format!("{safe}_events.csv")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::fixtures::{pass, shot};

    #[test]
    fn header_and_rows_follow_column_order() {
        let events = [
            pass("France", "Kylian Mbappé", Some("Incomplete")),
            shot("France", "Kylian Mbappé", "Goal", "Open Play"),
        ];
        let refs: Vec<&Event> = events.iter().collect();
        let bytes = to_csv(&refs).expect("export should succeed");

        let mut reader = csv::Reader::from_reader(bytes.as_slice());
        let headers: Vec<String> = reader.headers().unwrap().iter().map(str::to_string).collect();
        assert_eq!(headers, EVENT_COLUMNS.to_vec());

        let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
        assert_eq!(rows.len(), 2);
        let col = |name: &str| EVENT_COLUMNS.iter().position(|c| *c == name).unwrap();
        assert_eq!(&rows[0][col("pass_outcome")], "Incomplete");
        assert_eq!(&rows[0][col("shot_outcome")], "");
        assert_eq!(&rows[1][col("shot_outcome")], "Goal");
        assert_eq!(&rows[1][col("location")], "[105, 38]");
    }

    #[test]
    fn empty_selection_exports_header_only() {
        let bytes = to_csv(&[]).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(text.starts_with("id,index,period"));
    }

    #[test]
    fn filename_is_path_safe() {
        assert_eq!(export_filename("Lionel Messi"), "Lionel Messi_events.csv");
        assert_eq!(export_filename("A/B"), "A_B_events.csv");
    }
}

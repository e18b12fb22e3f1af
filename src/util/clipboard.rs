//! Clipboard export of series.

use crate::data::{Series, SeriesStore};
use crate::error::Result;
use arboard::Clipboard;

/// Copy text to clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}

/// Copy the selected series to the clipboard as CSV rows.
///
/// Returns the number of series copied.
pub fn copy_selected_series(store: &SeriesStore) -> Result<usize> {
    let count = store.iter().filter(|s| s.is_selected()).count();
    if count > 0 {
        copy_to_clipboard(&format_selected(store)?)?;
    }
    Ok(count)
}

/// Format the selected series in the input CSV layout, one record per series.
///
/// Names holding commas, quotes or line breaks are quoted so the text reads
/// back into the same series.
pub fn format_selected(store: &SeriesStore) -> Result<String> {
    let mut buf = Vec::new();
    {
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_writer(&mut buf);

        for series in store.iter().filter(|s| s.is_selected()) {
            wtr.write_record(record_fields(series))?;
        }
        wtr.flush()?;
    }
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn record_fields(series: &Series) -> Vec<String> {
    std::iter::once(series.name().to_string())
        .chain(series.values().iter().map(i64::to_string))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::CsvReader;

    #[test]
    fn test_format_selected() {
        let mut store = SeriesStore::new();
        store.append(Series::new("a", vec![1, 2]));
        store.append(Series::new("b", vec![]));
        store.append(Series::new("c", vec![-3]));
        assert_eq!(format_selected(&store).unwrap(), "");

        store.set_selected(1, true).unwrap();
        store.set_selected(2, true).unwrap();
        assert_eq!(format_selected(&store).unwrap(), "b\nc,-3\n");
    }

    #[test]
    fn test_quoted_names_read_back() {
        let mut store = SeriesStore::new();
        store.append(Series::new("a,b", vec![1, 2]));
        store.append(Series::new("say \"hi\"", vec![3]));
        store.set_all_selected(true);

        let text = format_selected(&store).unwrap();
        assert_eq!(text, "\"a,b\",1,2\n\"say \"\"hi\"\"\",3\n");

        let series = CsvReader::read_from(text.as_bytes()).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].name(), "a,b");
        assert_eq!(series[0].values(), &[1, 2]);
        assert_eq!(series[1].name(), "say \"hi\"");
        assert_eq!(series[1].values(), &[3]);
    }
}

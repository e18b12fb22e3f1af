use seriesview::data::{SeriesStore, StoreEvent};
use seriesview::model::{Field, FieldValue, ListModel, SelectableListModel};
use seriesview::Error;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_csv(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("Failed to write CSV");
    path
}

#[test]
fn test_load_computes_max_length() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir, "a.csv", "a,1,2\nb,1,2,3,4,5,6\nc,1\nd\n");

    let mut store = SeriesStore::new();
    store.load(&path).unwrap();

    assert_eq!(store.count(), 4);
    assert_eq!(store.max_length(), 6);
    let names: Vec<_> = store.iter().map(|s| s.name().to_string()).collect();
    assert_eq!(names, vec!["a", "b", "c", "d"]);
}

#[test]
fn test_reload_replaces_everything() {
    let dir = TempDir::new().unwrap();
    let first = write_csv(&dir, "first.csv", "long,1,2,3,4,5,6,7,8\nx,1\n");
    let second = write_csv(&dir, "second.csv", "short,1,2\n");

    let mut store = SeriesStore::new();
    store.load(&first).unwrap();
    store.set_selected(0, true).unwrap();
    store.load(&second).unwrap();

    assert_eq!(store.count(), 1);
    assert_eq!(store.max_length(), 2);
    assert_eq!(store.at(0).unwrap().name(), "short");
    assert!(!store.at(0).unwrap().is_selected());
}

#[test]
fn test_load_emits_rows_inserted() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir, "a.csv", "a,1\nb,2\n");

    let mut store = SeriesStore::new();
    store.load(&path).unwrap();
    assert_eq!(
        store.take_events(),
        vec![
            StoreEvent::RowsInserted { first: 0, last: 0 },
            StoreEvent::RowsInserted { first: 1, last: 1 },
        ]
    );
}

#[test]
fn test_reload_drops_events_for_discarded_rows() {
    let dir = TempDir::new().unwrap();
    let three = write_csv(&dir, "three.csv", "a,1\nb,2\nc,3\n");
    let one = write_csv(&dir, "one.csv", "z,9\n");

    let mut store = SeriesStore::new();
    store.load(&three).unwrap();
    store.set_selected(2, true).unwrap();
    store.load(&one).unwrap();

    let events = store.take_events();
    for event in &events {
        let row = match event {
            StoreEvent::RowsInserted { last, .. } => *last,
            StoreEvent::RowChanged { row, .. } => *row,
        };
        assert!(row < store.count(), "stale event {:?}", event);
    }
    assert_eq!(events, vec![StoreEvent::RowsInserted { first: 0, last: 0 }]);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let mut store = SeriesStore::new();
    let err = store.load(&dir.path().join("missing.csv")).unwrap_err();
    assert!(matches!(err, Error::FileOpen { .. }));
}

#[test]
fn test_parse_error_keeps_previous_series() {
    let dir = TempDir::new().unwrap();
    let good = write_csv(&dir, "good.csv", "a,1,2,3\n");
    let bad = write_csv(&dir, "bad.csv", "b,1\nc,2,oops\n");

    let mut store = SeriesStore::new();
    store.load(&good).unwrap();
    store.take_events();

    match store.load(&bad).unwrap_err() {
        Error::Parse { row, column, value } => {
            assert_eq!((row, column), (2, 3));
            assert_eq!(value, "oops");
        },
        other => panic!("unexpected error: {other}"),
    }

    assert_eq!(store.count(), 1);
    assert_eq!(store.max_length(), 3);
    assert!(store.take_events().is_empty());
}

#[test]
fn test_model_over_loaded_file() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(
        &dir,
        "sample.csv",
        "Temperature,20,21,23,22,19\nPressure,101,102,101,100\n",
    );

    let mut model = SelectableListModel::new();
    model.load(&path).unwrap();
    model.take_events();

    assert_eq!(model.row_count(), 2);
    assert_eq!(model.max_length(), 5);
    assert_eq!(model.data(2, Field::Selected), None);

    assert!(model.set_data(1, Field::Selected, FieldValue::Selected(true)));
    assert!(model.set_data(1, Field::Selected, FieldValue::Selected(true)));
    assert_eq!(
        model.take_events(),
        vec![StoreEvent::RowChanged {
            row: 1,
            field: Field::Selected
        }]
    );
    assert!(!model.set_data(5, Field::Selected, FieldValue::Selected(true)));
}

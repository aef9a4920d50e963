use sortbench::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

const SAMPLE_CSV: &str = "\
ID,FirstName,LastName
3,Ada,Lovelace
1,Edsger,Dijkstra
2,Grace,Hopper
5,Alan,Turing
4,Grace,Murray
";

fn sample_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp csv");
    file.write_all(SAMPLE_CSV.as_bytes()).expect("write csv");
    file
}

#[test]
fn test_timed_load() {
    let file = sample_file();
    let timed = load(file.path()).expect("load sample");

    let store = &timed.value;
    assert_eq!(store.len(), 5);
    assert!(!store.is_empty());
    assert!(timed.elapsed_secs() >= 0.0);

    // Insertion order = file order.
    let ids: Vec<u32> = store.records().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![3, 1, 2, 5, 4]);
    assert_eq!(store.records()[0].first_name, "Ada");
}

#[test]
fn test_slice_bounds() {
    let file = sample_file();
    let store = RecordStore::load(file.path()).expect("load sample");

    let two = store.slice(2);
    assert_eq!(two.len(), 2);
    assert_eq!(two[0].id, 3);
    assert_eq!(two[1].id, 1);

    // Oversized request clamps to the full store.
    assert_eq!(store.slice(10).len(), 5);
    assert!(store.slice(0).is_empty());
}

#[test]
fn test_store_unmodified_across_benchmark_runs() {
    let file = sample_file();
    let store = RecordStore::load(file.path()).expect("load sample");
    let before: Vec<Record> = store.records().to_vec();

    for strategy in Strategy::ALL {
        let timed = benchmark_sort(strategy, store.slice(5), Field::Id, Direction::Ascending);
        let ids: Vec<u32> = timed.value.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    assert_eq!(store.records(), &before[..]);
}

#[test]
fn test_benchmark_sort_every_field_and_direction() {
    let file = sample_file();
    let store = RecordStore::load(file.path()).expect("load sample");

    for strategy in Strategy::ALL {
        for field in Field::ALL {
            for direction in [Direction::Ascending, Direction::Descending] {
                let timed = benchmark_sort(strategy, store.slice(5), field, direction);
                assert_eq!(timed.value.len(), 5);
                for w in timed.value.windows(2) {
                    let ord = direction.apply(field.compare(&w[0], &w[1]));
                    assert_ne!(ord, std::cmp::Ordering::Greater);
                }
            }
        }
    }
}

#[test]
fn test_query_hit_and_miss() {
    let file = sample_file();
    let store = RecordStore::load(file.path()).expect("load sample");

    let hit = store.find_by_field(Field::Id, &FieldValue::Id(2));
    assert_eq!(hit.len(), 1);
    assert_eq!(hit[0].first_name, "Grace");

    // Two Graces, original relative order.
    let graces = query(
        store.records(),
        Field::FirstName,
        &FieldValue::Text("Grace".into()),
    );
    assert_eq!(graces.len(), 2);
    assert_eq!(graces[0].last_name, "Hopper");
    assert_eq!(graces[1].last_name, "Murray");

    // A miss is an empty result, not an error.
    let miss = store.find_by_field(Field::Id, &FieldValue::Id(99));
    assert!(miss.is_empty());

    // A value of the wrong type never matches.
    let mismatched = store.find_by_field(Field::Id, &FieldValue::Text("2".into()));
    assert!(mismatched.is_empty());
}

#[test]
fn test_malformed_record_aborts_load() {
    let mut file = NamedTempFile::new().expect("create temp csv");
    write!(
        file,
        "ID,FirstName,LastName\n1,Ada,Lovelace\nnot-a-number,Grace,Hopper\n"
    )
    .expect("write csv");

    let err = RecordStore::load(file.path()).expect_err("bad ID must fail the load");
    match err {
        Error::MalformedRecord { line, .. } => assert_eq!(line, 3),
        other => panic!("expected MalformedRecord, got {other:?}"),
    }
}

#[test]
fn test_source_unavailable() {
    let err = RecordStore::load("/definitely/not/here.csv").expect_err("missing file");
    match err {
        Error::SourceUnavailable { path, .. } => {
            assert!(path.ends_with("here.csv"));
        }
        other => panic!("expected SourceUnavailable, got {other:?}"),
    }

    // The timed wrapper surfaces the same error.
    assert!(load("/definitely/not/here.csv").is_err());
}

#[test]
fn test_strategy_selection_boundary() {
    assert_eq!("bubble".parse::<Strategy>().unwrap(), Strategy::Bubble);
    assert_eq!(" Insertion ".parse::<Strategy>().unwrap(), Strategy::Insertion);
    assert_eq!("MERGE".parse::<Strategy>().unwrap(), Strategy::Merge);

    match "quick".parse::<Strategy>() {
        Err(Error::UnknownStrategy(name)) => assert_eq!(name, "quick"),
        other => panic!("expected UnknownStrategy, got {other:?}"),
    }
}

#[test]
fn test_field_selection_boundary() {
    assert_eq!("ID".parse::<Field>().unwrap(), Field::Id);
    assert_eq!("FirstName".parse::<Field>().unwrap(), Field::FirstName);
    assert_eq!("LastName".parse::<Field>().unwrap(), Field::LastName);

    match "MiddleName".parse::<Field>() {
        Err(Error::UnknownField(name)) => assert_eq!(name, "MiddleName"),
        other => panic!("expected UnknownField, got {other:?}"),
    }
}

#[test]
fn test_direction_boundary() {
    assert_eq!("asc".parse::<Direction>().unwrap(), Direction::Ascending);
    assert_eq!(
        "Descending".parse::<Direction>().unwrap(),
        Direction::Descending
    );
    assert!("sideways".parse::<Direction>().is_err());
}

#[test]
fn test_query_value_boundary() {
    assert_eq!(Field::Id.parse_value("42").unwrap(), FieldValue::Id(42));
    assert_eq!(
        Field::FirstName.parse_value("Grace").unwrap(),
        FieldValue::Text("Grace".into())
    );

    match Field::Id.parse_value("forty-two") {
        Err(Error::InvalidArgument { value, .. }) => assert_eq!(value, "forty-two"),
        other => panic!("expected InvalidArgument, got {other:?}"),
    }
}

#[test]
fn test_row_count_boundary() {
    assert_eq!(parse_count("100").unwrap(), 100);
    assert_eq!(parse_count(" 5 ").unwrap(), 5);
    assert!(parse_count("-1").is_err());
    assert!(parse_count("ten").is_err());
}

#[test]
fn test_display_names() {
    assert_eq!(Strategy::Bubble.to_string(), "Bubble");
    assert_eq!(Field::FirstName.to_string(), "FirstName");
    assert_eq!(Direction::Descending.to_string(), "descending");

    let r = Record {
        id: 1,
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
    };
    assert_eq!(r.to_string(), "1 Ada Lovelace");
}

use bloglist_stats::aggregator::build_report;
use bloglist_stats::commands::{
    execute_add, execute_list, execute_stats, validate_args, validate_report_file, AddArgs,
    StatsArgs,
};
use bloglist_stats::output::{read_report, write_report};
use bloglist_stats::parser::Blog;
use bloglist_stats::store::BlogStore;
use std::path::PathBuf;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/blogs.json")
}

#[test]
fn test_validate_args_valid() {
    let args = StatsArgs {
        input: fixture_path(),
        ..Default::default()
    };

    assert!(validate_args(&args).is_ok());
}

#[test]
fn test_validate_args_top_authors_zero() {
    let args = StatsArgs {
        input: fixture_path(),
        top_authors: 0,
        ..Default::default()
    };

    assert!(validate_args(&args).is_err());
}

#[test]
fn test_execute_stats_writes_report() {
    let temp_dir = tempfile::tempdir().unwrap();
    let output = temp_dir.path().join("out/report.json");

    let report = execute_stats(StatsArgs {
        input: fixture_path(),
        output_json: Some(output.clone()),
        ..Default::default()
    })
    .unwrap();

    assert_eq!(report.total_likes, 36);

    let loaded = read_report(&output).unwrap();
    assert_eq!(loaded, report);
}

#[test]
fn test_execute_stats_rejects_malformed_collection() {
    let temp_dir = tempfile::tempdir().unwrap();
    let input = temp_dir.path().join("blogs.json");
    std::fs::write(&input, r#"[{"title": "No author here", "likes": 3}]"#).unwrap();

    let result = execute_stats(StatsArgs {
        input,
        ..Default::default()
    });

    assert!(result.is_err());
}

#[test]
fn test_execute_add_creates_store() {
    let temp_dir = tempfile::tempdir().unwrap();
    let store_path = temp_dir.path().join("store.json");

    execute_add(AddArgs {
        store: store_path.clone(),
        title: "Testing with the CLI".to_string(),
        author: "Supertest".to_string(),
        url: Some("http://www.supertest.com".to_string()),
        likes: Some(7),
    })
    .unwrap();

    let store = BlogStore::open(&store_path).unwrap();
    assert_eq!(store.len(), 1);
    assert_eq!(store.blogs()[0].likes, 7);
}

#[test]
fn test_execute_add_rejects_duplicate_and_keeps_store() {
    let temp_dir = tempfile::tempdir().unwrap();
    let store_path = temp_dir.path().join("store.json");

    let args = AddArgs {
        store: store_path.clone(),
        title: "Check for duplicates".to_string(),
        author: "Supertest".to_string(),
        url: None,
        likes: None,
    };

    execute_add(args.clone()).unwrap();
    assert!(execute_add(args).is_err());

    let store = BlogStore::open(&store_path).unwrap();
    assert_eq!(store.len(), 1);
    assert_eq!(store.blogs()[0].likes, 0);
}

#[test]
fn test_validate_report_file_accepts_current_version() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("report.json");
    let report = build_report("sample", &[Blog::new("React patterns", "Michael Chan", 7)], 10);
    write_report(&report, &path).unwrap();

    assert!(validate_report_file(path).is_ok());
}

#[test]
fn test_validate_report_file_rejects_old_version() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("report.json");
    let mut report = build_report("sample", &[Blog::new("React patterns", "Michael Chan", 7)], 10);
    report.version = "0.9.0".to_string();
    write_report(&report, &path).unwrap();

    assert!(validate_report_file(path).is_err());
}

#[test]
fn test_execute_list_missing_and_malformed_store() {
    let temp_dir = tempfile::tempdir().unwrap();
    let store_path = temp_dir.path().join("store.json");

    assert!(execute_list(&store_path).is_ok());

    std::fs::write(&store_path, r#"[{"title": "No author here"}]"#).unwrap();
    assert!(execute_list(&store_path).is_err());
}

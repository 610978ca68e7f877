use std::fs;
use tempfile::tempdir;
use textstyle_extractor::{create, CreateArgs};

fn library_snapshot() -> &'static str {
    r#"{
        "collections": {
            "lib:typography": {
                "name": "Brand Typography",
                "children": [
                    {
                        "name": "Heading / Large",
                        "fontFamily": {"defined": "Inter"},
                        "fontSize": {"defined": 24.0},
                        "lineHeight": {"defined": 1.25},
                        "letterSpacing": {"defined": 0.0}
                    },
                    {
                        "name": "Body",
                        "fontFamily": {"defined": "Inter"},
                        "fontSize": {"defined": 16.0},
                        "lineHeight": {"defined": 1.5},
                        "letterSpacing": "mixed"
                    }
                ]
            }
        }
    }"#
}

fn base_args(temp: &std::path::Path) -> CreateArgs {
    CreateArgs {
        input: vec![format!("{}/*.css", temp.display())],
        library: temp.join("library.json"),
        collection: Some("lib:typography".to_string()),
        config: None,
        output_report: Some(temp.join("report.json")),
        compact: false,
        dry_run: false,
        verbose: false,
    }
}

#[tokio::test]
async fn test_end_to_end_style_creation() {
    let temp_dir = tempdir().unwrap();

    fs::write(
        temp_dir.path().join("typography.css"),
        r#"
            .heading { @apply text-2xl leading-tight; }
            .body { @apply text-base leading-normal; }
            .label { @apply font-bold text-sm; }
            .row { @apply flex items-center; }
        "#,
    )
    .unwrap();
    fs::write(temp_dir.path().join("library.json"), library_snapshot()).unwrap();

    let args = base_args(temp_dir.path());
    let summary = create(args).await.unwrap();

    // The flex rule has no typography classes and creates nothing; the label
    // rule requires a weight no library candidate defines, so it is created
    // without a match
    assert_eq!(summary.files_processed, 1);
    assert_eq!(summary.result.created, 3);
    assert_eq!(summary.result.matched, 2);

    // Report was written and reflects the run
    let report_content = fs::read_to_string(temp_dir.path().join("report.json")).unwrap();
    let report: serde_json::Value = serde_json::from_str(&report_content).unwrap();

    assert_eq!(report["metadata"]["styles_created"], 3);
    assert_eq!(report["metadata"]["styles_matched"], 2);
    assert_eq!(report["metadata"]["collection"], "lib:typography");

    // The heading matched "Heading / Large" and copied its defined attributes
    assert_eq!(report["styles"][0]["name"], "heading");
    assert_eq!(report["styles"][0]["fontFamily"], "Inter");
    assert_eq!(report["styles"][0]["fontSize"], 24.0);
    assert_eq!(report["styles"][0]["lineHeight"], 1.25);

    // The body rule resolves to {16, 1.5}; the Body candidate qualifies and
    // its mixed letter-spacing is simply not copied
    assert_eq!(report["styles"][1]["name"], "body");
    assert_eq!(report["styles"][1]["fontSize"], 16.0);
    assert!(report["styles"][1].get("letterSpacing").is_none());

    // The unmatched label keeps registry defaults
    assert_eq!(report["styles"][2]["name"], "label");
    assert!(report["styles"][2].get("fontSize").is_none());
}

#[tokio::test]
async fn test_dry_run_writes_no_report() {
    let temp_dir = tempdir().unwrap();

    fs::write(
        temp_dir.path().join("styles.css"),
        ".caption { @apply text-xs; }",
    )
    .unwrap();
    fs::write(temp_dir.path().join("library.json"), library_snapshot()).unwrap();

    let mut args = base_args(temp_dir.path());
    args.dry_run = true;

    let summary = create(args).await.unwrap();
    assert_eq!(summary.result.created, 1);
    assert!(!temp_dir.path().join("report.json").exists());
}

#[tokio::test]
async fn test_unknown_collection_aborts_with_zero_styles() {
    let temp_dir = tempdir().unwrap();

    fs::write(
        temp_dir.path().join("styles.css"),
        ".caption { @apply text-xs; }",
    )
    .unwrap();
    fs::write(temp_dir.path().join("library.json"), library_snapshot()).unwrap();

    let mut args = base_args(temp_dir.path());
    args.collection = Some("lib:nowhere".to_string());

    let err = create(args).await.unwrap_err();
    let message = format!("{}", err);
    assert!(
        message.contains("Could not find the shared library collection"),
        "unexpected error: {}",
        message
    );
    assert!(!temp_dir.path().join("report.json").exists());
}

#[tokio::test]
async fn test_no_stylesheets_found() {
    let temp_dir = tempdir().unwrap();
    fs::write(temp_dir.path().join("library.json"), library_snapshot()).unwrap();

    let args = base_args(temp_dir.path());
    let err = create(args).await.unwrap_err();
    assert!(format!("{}", err).contains("No stylesheets found"));
}

#[tokio::test]
async fn test_config_tokens_extend_the_builtin_table() {
    let temp_dir = tempdir().unwrap();

    fs::write(
        temp_dir.path().join("styles.css"),
        ".hero { @apply text-hero; }",
    )
    .unwrap();
    fs::write(
        temp_dir.path().join("library.json"),
        r#"{
            "collections": {
                "lib:typography": {
                    "children": [
                        {"name": "Hero", "fontSize": {"defined": 88.0}}
                    ]
                }
            }
        }"#,
    )
    .unwrap();
    fs::write(
        temp_dir.path().join("tokens.yaml"),
        "tokens:\n  font_size:\n    text-hero: 88\n",
    )
    .unwrap();

    let mut args = base_args(temp_dir.path());
    args.config = Some(temp_dir.path().join("tokens.yaml"));

    let summary = create(args).await.unwrap();
    assert_eq!(summary.result.created, 1);
    assert_eq!(summary.result.matched, 1);
    assert_eq!(summary.report.styles[0].font_size, Some(88.0));
}

#[tokio::test]
async fn test_multiple_stylesheets_accumulate_in_input_order() {
    let temp_dir = tempdir().unwrap();

    fs::write(
        temp_dir.path().join("a.css"),
        ".caption { @apply text-xs; }",
    )
    .unwrap();
    fs::write(temp_dir.path().join("b.css"), ".title { @apply text-3xl; }").unwrap();
    fs::write(temp_dir.path().join("library.json"), library_snapshot()).unwrap();

    let args = base_args(temp_dir.path());
    let summary = create(args).await.unwrap();

    assert_eq!(summary.files_processed, 2);
    assert_eq!(summary.result.created, 2);
    let names: Vec<_> = summary.report.styles.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["caption", "title"]);
}

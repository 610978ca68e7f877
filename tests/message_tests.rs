use textstyle_extractor::{
    handle_request, InMemoryRegistry, LibraryStyle, RecordingNotifier, Request, Response,
    StyleCollection, StyleSynthesizer, TextAttr,
};

const COLLECTION_ID: &str = "lib:typography";

fn library_registry() -> InMemoryRegistry {
    let mut registry = InMemoryRegistry::new();
    registry.insert_collection(
        COLLECTION_ID,
        StyleCollection {
            name: "Typography".to_string(),
            children: vec![LibraryStyle {
                font_family: TextAttr::Defined("Inter".to_string()),
                font_size: TextAttr::Defined(24.0),
                line_height: TextAttr::Defined(1.25),
                ..LibraryStyle::named("Heading")
            }],
        },
    );
    registry
}

fn request(json: &str) -> Request {
    serde_json::from_str(json).unwrap()
}

#[test]
fn test_session_parse_then_create_then_cancel() {
    let synthesizer = StyleSynthesizer::with_builtin_tokens(COLLECTION_ID);
    let mut registry = library_registry();
    let notifier = RecordingNotifier::new();

    let css = ".heading { @apply text-2xl leading-tight; }";

    // Preview first
    let response = handle_request(
        request(&format!(
            r#"{{"type": "parse-css", "css": "{}"}}"#,
            css
        )),
        &synthesizer,
        &mut registry,
        &notifier,
    );
    match response {
        Response::FoundStyles { styles } => {
            assert_eq!(styles.len(), 1);
            assert_eq!(styles[0].name, "heading");
            assert_eq!(styles[0].text_classes, vec!["text-2xl", "leading-tight"]);
        }
        other => panic!("unexpected response: {:?}", other),
    }
    assert!(registry.created_styles().is_empty());

    // Then commit
    let response = handle_request(
        request(&format!(
            r#"{{"type": "create-styles", "css": "{}"}}"#,
            css
        )),
        &synthesizer,
        &mut registry,
        &notifier,
    );
    assert_eq!(response, Response::StylesCreated { created: 1 });
    assert_eq!(notifier.messages(), vec!["Created 1 text styles"]);

    let created = &registry.created_styles()[0];
    assert_eq!(created.name, "heading");
    assert_eq!(created.font_family.as_deref(), Some("Inter"));
    assert_eq!(created.font_size, Some(24.0));

    // Cancel ends the session
    let response = handle_request(
        request(r#"{"type": "cancel"}"#),
        &synthesizer,
        &mut registry,
        &notifier,
    );
    assert_eq!(response, Response::Closed);
}

#[test]
fn test_batch_of_three_with_no_matches_reports_three_created() {
    let synthesizer = StyleSynthesizer::with_builtin_tokens(COLLECTION_ID);
    let mut registry = InMemoryRegistry::new();
    registry.insert_collection(COLLECTION_ID, StyleCollection::default());
    let notifier = RecordingNotifier::new();

    let css = r#".caption { @apply text-xs; } .body { @apply text-base; } .title { @apply text-5xl; }"#;
    let response = handle_request(
        Request::CreateStyles {
            css: css.to_string(),
        },
        &synthesizer,
        &mut registry,
        &notifier,
    );

    assert_eq!(response, Response::StylesCreated { created: 3 });
    assert_eq!(notifier.messages(), vec!["Created 3 text styles"]);
    assert_eq!(registry.created_styles().len(), 3);
}

#[test]
fn test_create_with_missing_collection_reports_error_and_notifies() {
    let synthesizer = StyleSynthesizer::with_builtin_tokens("lib:missing");
    let mut registry = library_registry();
    let notifier = RecordingNotifier::new();

    let response = handle_request(
        Request::CreateStyles {
            css: ".title { @apply text-2xl; }".to_string(),
        },
        &synthesizer,
        &mut registry,
        &notifier,
    );

    match response {
        Response::Error { message } => {
            assert!(message.contains("Could not find the shared library collection"));
        }
        other => panic!("unexpected response: {:?}", other),
    }
    assert_eq!(notifier.messages().len(), 1);
    assert!(registry.created_styles().is_empty());
}

#[test]
fn test_parse_css_with_no_apply_rules_finds_nothing() {
    let synthesizer = StyleSynthesizer::with_builtin_tokens(COLLECTION_ID);
    let mut registry = library_registry();
    let notifier = RecordingNotifier::new();

    let response = handle_request(
        Request::ParseCss {
            css: ".plain { font-size: 12px; } .layout { @apply grid gap-2; }".to_string(),
        },
        &synthesizer,
        &mut registry,
        &notifier,
    );

    assert_eq!(response, Response::FoundStyles { styles: vec![] });
}

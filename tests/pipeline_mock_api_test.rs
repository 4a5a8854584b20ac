//! End-to-end pipeline tests against mock HTTP services.
//!
//! The document endpoint and the translation endpoint are both simulated
//! with wiremock; the translation responses follow the LibreTranslate wire
//! format ({"translatedText": ...}).

use policylens::config::AnalyzerConfig;
use policylens::pipeline::Pipeline;
use policylens::types::TranslationOutcome;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const POLICY_HTML: &str = r#"
<html><body>
  <h1>Privacy Policy</h1>
  <p>Welcome to our service.</p>
  <p>We may share your data with affiliates.</p>
  <p>Contact us with any questions.</p>
</body></html>
"#;

fn config_for(server: &MockServer) -> AnalyzerConfig {
    AnalyzerConfig::builder()
        .translate_base_url(server.uri())
        .fetch_timeout(Duration::from_secs(5))
        .translate_timeout(Duration::from_secs(5))
        .build()
        .unwrap()
}

fn mount_policy_page(html: &'static str) -> Mock {
    Mock::given(method("GET"))
        .and(path("/privacy"))
        .respond_with(ResponseTemplate::new(200).set_body_string(html))
}

fn translation_ok(target: &str, text: &str) -> Mock {
    Mock::given(method("POST"))
        .and(path("/translate"))
        .and(body_partial_json(json!({ "target": target })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "translatedText": text })))
}

#[tokio::test]
async fn flagged_sentence_is_simplified_and_translated() {
    let server = MockServer::start().await;
    mount_policy_page(POLICY_HTML).mount(&server).await;
    translation_ok("hi", "हम डेटा साझा करते हैं").mount(&server).await;
    translation_ok("ta", "நாங்கள் தரவைப் பகிர்கிறோம்").mount(&server).await;
    translation_ok("te", "మేము డేటాను పంచుకుంటాము").mount(&server).await;

    let pipeline = Pipeline::new(config_for(&server)).unwrap();
    let report = pipeline
        .run(&format!("{}/privacy", server.uri()))
        .await
        .unwrap();

    assert!(report.risk_detected);
    assert_eq!(report.flagged.len(), 1);

    let flagged = &report.flagged[0];
    assert_eq!(flagged.original, "We may share your data with affiliates.");
    assert_eq!(flagged.simplified, "We share data affiliates");
    assert_eq!(flagged.matches.len(), 1);
    assert_eq!(flagged.matches[0].category, "Data Sharing & Selling");
    assert_eq!(flagged.matches[0].phrase, "share your data");

    assert_eq!(flagged.translations.len(), 3);
    assert!(flagged.translations.values().all(|o| o.is_translated()));
}

#[tokio::test]
async fn one_failing_language_does_not_abort_the_others() {
    let server = MockServer::start().await;
    mount_policy_page(POLICY_HTML).mount(&server).await;
    // "hi" answers 500; the other two succeed
    Mock::given(method("POST"))
        .and(path("/translate"))
        .and(body_partial_json(json!({ "target": "hi" })))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&server)
        .await;
    translation_ok("ta", "தரவு").mount(&server).await;
    translation_ok("te", "డేటా").mount(&server).await;

    let pipeline = Pipeline::new(config_for(&server)).unwrap();
    let report = pipeline
        .run(&format!("{}/privacy", server.uri()))
        .await
        .unwrap();

    let translations = &report.flagged[0].translations;
    assert_eq!(translations.len(), 3);
    assert!(matches!(
        translations["hi"],
        TranslationOutcome::Failed(ref reason) if reason.contains("500")
    ));
    assert!(translations["ta"].is_translated());
    assert!(translations["te"].is_translated());
}

#[tokio::test]
async fn clean_document_reports_no_issues() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/privacy"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "<html><body><p>We value your privacy and protect it.</p></body></html>",
        ))
        .mount(&server)
        .await;

    let pipeline = Pipeline::new(config_for(&server)).unwrap();
    let report = pipeline
        .run(&format!("{}/privacy", server.uri()))
        .await
        .unwrap();

    assert!(report.is_clean());
    assert!(report.flagged.is_empty());
}

#[tokio::test]
async fn unreachable_host_aborts_the_run() {
    let server = MockServer::start().await;
    let pipeline = Pipeline::new(config_for(&server)).unwrap();

    // Nothing listens on this port
    let result = pipeline.run("http://127.0.0.1:1/privacy").await;
    assert!(result.is_err(), "fetch failure must abort, not report clean");
}

#[tokio::test]
async fn page_without_paragraphs_aborts_the_run() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/privacy"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<html><body><div>no paragraphs here</div></body></html>"),
        )
        .mount(&server)
        .await;

    let pipeline = Pipeline::new(config_for(&server)).unwrap();
    let result = pipeline.run(&format!("{}/privacy", server.uri())).await;
    assert!(matches!(
        result,
        Err(policylens::PolicyLensError::EmptyDocument)
    ));
}

#[tokio::test]
async fn multiple_flagged_sentences_keep_document_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/privacy"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "<html><body>\
             <p>We track your behavior across sites.</p>\
             <p>Nothing to see here.</p>\
             <p>Terms are subject to change without prior notice.</p>\
             </body></html>",
        ))
        .mount(&server)
        .await;
    for lang in ["hi", "ta", "te"] {
        translation_ok(lang, "ok").mount(&server).await;
    }

    let pipeline = Pipeline::new(config_for(&server)).unwrap();
    let report = pipeline
        .run(&format!("{}/privacy", server.uri()))
        .await
        .unwrap();

    assert_eq!(report.flagged.len(), 2);
    assert!(report.flagged[0].original.contains("track your behavior"));
    assert!(report.flagged[1].original.contains("subject to change"));
    // Second sentence hits two categories, taxonomy order preserved
    let categories: Vec<&str> = report.flagged[1]
        .matches
        .iter()
        .map(|m| m.category.as_str())
        .collect();
    assert_eq!(categories, vec!["Policy Changes", "Policy Changes"]);
}

#[tokio::test]
async fn slow_translation_times_out_into_a_marker() {
    let server = MockServer::start().await;
    mount_policy_page(POLICY_HTML).mount(&server).await;
    // Every translation hangs past the configured deadline
    Mock::given(method("POST"))
        .and(path("/translate"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "translatedText": "late" }))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let config = AnalyzerConfig::builder()
        .translate_base_url(server.uri())
        .translate_timeout(Duration::from_millis(200))
        .build()
        .unwrap();
    let pipeline = Pipeline::new(config).unwrap();
    let report = pipeline
        .run(&format!("{}/privacy", server.uri()))
        .await
        .unwrap();

    let translations = &report.flagged[0].translations;
    assert_eq!(translations.len(), 3);
    assert!(translations.values().all(|o| !o.is_translated()));
}

use crate::common::{build_pdf, create_test_config, html, pdf};
use medpolicy_scraper::codes::CodeType;
use medpolicy_scraper::crawler::Scraper;
use medpolicy_scraper::output::NoticeLevel;
use medpolicy_scraper::policy::LinkType;
use medpolicy_scraper::ScrapeError;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_pdf_policy_end_to_end() {
    // Start a mock server
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(
            r#"<html><body><a href="policy.pdf">Policy A</a></body></html>"#,
        ))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/policy.pdf"))
        .respond_with(pdf(build_pdf("Codes A1234 and 12345, again 12345")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut scraper = Scraper::new(create_test_config()).expect("Failed to create scraper");
    let report = scraper.run(&base_url, false).await.expect("Scrape failed");

    assert_eq!(report.links.len(), 1);
    let link = &report.links[0];
    assert_eq!(link.title, "Policy A");
    assert_eq!(link.link, format!("{}/policy.pdf", base_url));
    assert_eq!(link.source_url, base_url);
    assert_eq!(link.link_type, LinkType::Pdf);

    let codes: Vec<_> = report
        .codes
        .iter()
        .map(|e| (e.code_type, e.code.as_str()))
        .collect();
    assert_eq!(
        codes,
        vec![(CodeType::Cpt, "12345"), (CodeType::Hcpcs, "A1234")]
    );
    assert!(report.codes.iter().all(|e| e.policy_title == "Policy A"));
    assert!(report.codes.iter().all(|e| e.policy_url == link.link));
    assert!(!report.has_errors());
}

#[tokio::test]
async fn test_skip_pdf_keeps_links_but_extracts_nothing() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(
            r#"<html><body><a href="/docs/Coverage.PDF">Coverage</a></body></html>"#,
        ))
        .mount(&mock_server)
        .await;

    // Should never be downloaded
    Mock::given(method("GET"))
        .and(path("/docs/Coverage.PDF"))
        .respond_with(pdf(build_pdf("12345")))
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut scraper = Scraper::new(create_test_config()).expect("Failed to create scraper");
    let report = scraper.run(&base_url, true).await.expect("Scrape failed");

    assert_eq!(report.links.len(), 1);
    assert_eq!(report.links[0].link_type, LinkType::Pdf);
    assert!(report.code_index().is_none());
    assert!(report
        .notices
        .iter()
        .any(|n| n.level == NoticeLevel::Warning && n.message.contains("No codes found")));
}

#[tokio::test]
async fn test_html_policy_page_codes() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(
            r#"<html><body>
                <a href="/medical-policy/knee">Knee Arthroplasty</a>
                <a href="/contact">Contact us</a>
            </body></html>"#,
        ))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/medical-policy/knee"))
        .respond_with(html(
            r#"<html><body>
                <h1>Knee policy</h1>
                <p>Covered: 27447, J3490 and 0037U. See 27447 above.</p>
                <script>var tracking = 99999;</script>
            </body></html>"#,
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    // Not a policy link
    Mock::given(method("GET"))
        .and(path("/contact"))
        .respond_with(html("<html><body>55555</body></html>"))
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut scraper = Scraper::new(create_test_config()).expect("Failed to create scraper");
    let report = scraper.run(&base_url, false).await.expect("Scrape failed");

    assert_eq!(report.links.len(), 1);
    assert_eq!(report.links[0].link_type, LinkType::Html);

    let codes: Vec<_> = report
        .codes
        .iter()
        .map(|e| (e.code_type, e.code.as_str()))
        .collect();
    assert_eq!(
        codes,
        vec![
            (CodeType::Cpt, "27447"),
            (CodeType::Hcpcs, "J3490"),
            (CodeType::Pla, "0037U"),
        ]
    );
}

#[tokio::test]
async fn test_empty_input_does_no_work() {
    let mut scraper = Scraper::new(create_test_config()).expect("Failed to create scraper");
    let result = scraper.run("", false).await;
    assert!(matches!(result, Err(ScrapeError::EmptyInput)));
}

#[tokio::test]
async fn test_seed_timeout_is_reported() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"<a href="policy.pdf">Late</a>"#)
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&mock_server)
        .await;

    let mut config = create_test_config();
    config.fetch.page_timeout_secs = 1;

    let mut scraper = Scraper::new(config).expect("Failed to create scraper");
    let report = scraper.run(&base_url, false).await.expect("Scrape failed");

    assert!(report.links.is_empty());
    assert!(report.codes.is_empty());
    assert_eq!(report.failed_seeds, vec![base_url.clone()]);

    let errors: Vec<_> = report
        .notices
        .iter()
        .filter(|n| n.level == NoticeLevel::Error)
        .collect();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains(&base_url));
}

#[tokio::test]
async fn test_failed_seed_does_not_stop_batch() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(
            r#"<a href="/policy/a">Policy A</a>"#,
        ))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/policy/a"))
        .respond_with(html("<p>E0100</p>"))
        .mount(&mock_server)
        .await;

    // Nothing listens on port 1
    let input = format!("http://127.0.0.1:1/, {}", base_url);

    let mut scraper = Scraper::new(create_test_config()).expect("Failed to create scraper");
    let report = scraper.run(&input, false).await.expect("Scrape failed");

    assert_eq!(report.seeds.len(), 2);
    assert_eq!(report.failed_seeds, vec!["http://127.0.0.1:1/"]);
    assert_eq!(report.links.len(), 1);
    assert_eq!(report.codes.len(), 1);
    assert_eq!(report.codes[0].code, "E0100");
    assert_eq!(report.codes[0].source_url, base_url);
}

#[tokio::test]
async fn test_malformed_pdf_is_silent() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(
            r#"<a href="/broken.pdf">Broken</a><a href="/policy/ok">Working policy</a>"#,
        ))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/broken.pdf"))
        .respond_with(pdf(b"this is not a pdf at all".to_vec()))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/policy/ok"))
        .respond_with(html("<p>Procedure 99213</p>"))
        .mount(&mock_server)
        .await;

    let mut scraper = Scraper::new(create_test_config()).expect("Failed to create scraper");
    let report = scraper.run(&base_url, false).await.expect("Scrape failed");

    assert_eq!(report.links.len(), 2);
    assert_eq!(report.codes.len(), 1);
    assert_eq!(report.codes[0].policy_title, "Working policy");
    assert!(!report.has_errors());
}

#[tokio::test]
async fn test_non_success_status_is_still_parsed() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_string(r#"<a href="/policy/x">Policy X</a>"#),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/policy/x"))
        .respond_with(html("<p>A1234</p>"))
        .mount(&mock_server)
        .await;

    let mut scraper = Scraper::new(create_test_config()).expect("Failed to create scraper");
    let report = scraper.run(&base_url, false).await.expect("Scrape failed");

    assert_eq!(report.links.len(), 1);
    assert_eq!(report.codes.len(), 1);
    assert!(report.failed_seeds.is_empty());
}

#[tokio::test]
async fn test_repeated_seed_uses_cache() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(r#"<a href="/policy/a">Policy A</a>"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    // Extraction is not cached
    Mock::given(method("GET"))
        .and(path("/policy/a"))
        .respond_with(html("<p>12345</p>"))
        .expect(2)
        .mount(&mock_server)
        .await;

    let input = format!("{}\n{}", base_url, base_url);
    let mut scraper = Scraper::new(create_test_config()).expect("Failed to create scraper");
    let report = scraper.run(&input, false).await.expect("Scrape failed");

    assert_eq!(report.links.len(), 2);
    assert_eq!(report.codes.len(), 2);
}

#[tokio::test]
async fn test_code_index_sorted_link_table_in_discovery_order() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(
            r#"<a href="/policy/zeta">Zeta</a><a href="/policy/alpha">Alpha</a>"#,
        ))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/policy/zeta"))
        .respond_with(html("<p>0001U 11111</p>"))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/policy/alpha"))
        .respond_with(html("<p>Z9999 99999 00001</p>"))
        .mount(&mock_server)
        .await;

    let mut scraper = Scraper::new(create_test_config()).expect("Failed to create scraper");
    let report = scraper.run(&base_url, false).await.expect("Scrape failed");

    let titles: Vec<_> = report.links.iter().map(|l| l.title.as_str()).collect();
    assert_eq!(titles, vec!["Zeta", "Alpha"]);

    let index: Vec<_> = report
        .codes
        .iter()
        .map(|e| (e.policy_title.as_str(), e.code.as_str()))
        .collect();
    assert_eq!(
        index,
        vec![
            ("Alpha", "00001"),
            ("Alpha", "99999"),
            ("Alpha", "Z9999"),
            ("Zeta", "11111"),
            ("Zeta", "0001U"),
        ]
    );
}

#[tokio::test]
async fn test_pdf_and_page_timeouts_are_separate() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(
            r#"<a href="/slow.pdf">Slow</a><a href="/policy/slow">Slow page</a>"#,
        ))
        .mount(&mock_server)
        .await;

    // Within the PDF timeout
    Mock::given(method("GET"))
        .and(path("/slow.pdf"))
        .respond_with(pdf(build_pdf("Code 12345")).set_delay(Duration::from_secs(2)))
        .expect(1)
        .mount(&mock_server)
        .await;

    // Beyond the page timeout
    Mock::given(method("GET"))
        .and(path("/policy/slow"))
        .respond_with(html("<p>A1234</p>").set_delay(Duration::from_secs(2)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut config = create_test_config();
    config.fetch.page_timeout_secs = 1;
    config.fetch.pdf_timeout_secs = 4;

    let mut scraper = Scraper::new(config).expect("Failed to create scraper");
    let report = scraper.run(&base_url, false).await.expect("Scrape failed");

    assert_eq!(report.links.len(), 2);
    let codes: Vec<_> = report
        .codes
        .iter()
        .map(|e| (e.policy_title.as_str(), e.code.as_str()))
        .collect();
    assert_eq!(codes, vec![("Slow", "12345")]);
    // A failed sub-page fetch is not a seed error
    assert!(!report.has_errors());
    assert!(report.failed_seeds.is_empty());
}

mod common;

use common::TestApp;

#[tokio::test]
async fn open_page_links_app_and_web_fallback() {
    let app = TestApp::spawn().await;

    let response = app.get("/open?words=river.bold.cat").await;

    assert_eq!(response.status().as_u16(), 200);
    let content_type = response.headers()["content-type"]
        .to_str()
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/html"));

    let html = response.text().await.expect("Failed to read body");
    assert!(html.contains("gismap://location?words=river.bold.cat"));
    assert!(html.contains(
        r#"<a href="https://word3map.onrender.com/web-map?words=river.bold.cat">"#
    ));
    assert!(html.contains("<title>Open GIS Map</title>"));
}

#[tokio::test]
async fn open_page_encodes_words() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .get(app.url("/open"))
        .query(&[("words", r#"a"><script>alert(1)</script>&x=1"#)])
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);
    let html = response.text().await.expect("Failed to read body");
    assert!(html.contains(
        "gismap://location?words=a%22%3E%3Cscript%3Ealert%281%29%3C%2Fscript%3E%26x%3D1"
    ));
    assert!(!html.contains("<script>alert(1)</script>"));
}

#[tokio::test]
async fn open_without_words_is_plain_text_bad_request() {
    let app = TestApp::spawn().await;

    for path in ["/open", "/open?words="] {
        let response = app.get(path).await;

        assert_eq!(response.status().as_u16(), 400);
        let content_type = response.headers()["content-type"]
            .to_str()
            .unwrap_or_default()
            .to_string();
        assert!(content_type.starts_with("text/plain"));
        assert_eq!(
            response.text().await.expect("Failed to read body"),
            "Missing words parameter"
        );
    }
}

use crate::helpers::{spawn_app, valid_submission};

#[tokio::test]
async fn responses_allow_any_origin() {
    // arrange
    let app = spawn_app().await;

    // act
    let response = app
        .api_client
        .post(&format!("{}/api/contact", &app.address))
        .header("Origin", "https://www.specroll.pl")
        .json(&valid_submission())
        .send()
        .await
        .expect("Failed to execute request.");

    // assert
    assert_eq!(200, response.status().as_u16());
    assert_eq!(
        response.headers()["Access-Control-Allow-Origin"],
        "https://www.specroll.pl"
    );
    assert_eq!(response.headers()["Access-Control-Allow-Credentials"], "true");
}

#[tokio::test]
async fn requests_without_an_origin_get_a_wildcard() {
    // arrange
    let app = spawn_app().await;

    // act
    let response = app
        .api_client
        .get(&format!("{}/health_check", &app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    // assert
    assert_eq!(response.headers()["Access-Control-Allow-Origin"], "*");
}

#[tokio::test]
async fn preflight_requests_are_answered_without_sending_email() {
    // arrange
    let app = spawn_app().await;

    // act
    let response = app
        .api_client
        .request(
            reqwest::Method::OPTIONS,
            &format!("{}/api/contact", &app.address),
        )
        .header("Origin", "https://www.specroll.pl")
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "content-type")
        .send()
        .await
        .expect("Failed to execute request.");

    // assert
    assert_eq!(204, response.status().as_u16());
    assert!(response.headers()["Access-Control-Allow-Methods"]
        .to_str()
        .unwrap()
        .contains("POST"));
    assert_eq!(
        response.headers()["Access-Control-Allow-Headers"],
        "content-type"
    );
    assert!(app.sent_emails().is_empty());
}

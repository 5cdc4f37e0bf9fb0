use crate::helpers::{get_random_email, TestApp, TEST_PASSWORD};
use cultivar_auth::domain::LoginResponse;

#[tokio::test]
async fn should_return_422_if_malformed_email() {
    let app = TestApp::new().await;
    let email = "".to_string(); // Empty email
    let password = String::from(TEST_PASSWORD);

    let response = app.login(email, password).await;

    assert_eq!(response.status().as_u16(), 422);
}

#[tokio::test]
async fn should_return_422_if_malformed_password() {
    let app = TestApp::new().await;
    let email = get_random_email();
    // Empty password
    let password = String::from("");

    let response = app.login(email, password).await;

    assert_eq!(response.status().as_u16(), 422);
}

#[tokio::test]
async fn should_return_401_if_user_not_found() {
    let app = TestApp::new().await;
    let email = get_random_email();
    let password = String::from(TEST_PASSWORD);

    let response = app.login(email, password).await;

    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn should_return_401_if_wrong_password() {
    let app = TestApp::new().await;
    let email = get_random_email();
    app.seed_user(&email, TEST_PASSWORD, None).await;

    let response = app.login(email, "WrongPassword1!".to_string()).await;

    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn should_return_200_and_token_pair_if_valid_credentials() {
    let app = TestApp::new().await;
    let email = get_random_email();
    let user_id = app.seed_user(&email, TEST_PASSWORD, Some("admin")).await;

    let response = app.login(email.clone(), TEST_PASSWORD.to_string()).await;
    assert_eq!(response.status().as_u16(), 200);

    let body = response
        .json::<LoginResponse>()
        .await
        .expect("login response should deserialize");
    assert!(!body.access_token.is_empty());
    assert!(!body.refresh_token.is_empty());
    assert_ne!(body.access_token, body.refresh_token);

    // Both tokens must verify in their own secret domain and carry the user.
    let access = app
        .token_service
        .verify_access_token(&body.access_token)
        .expect("access token should verify");
    assert_eq!(access.sub, user_id);
    assert_eq!(access.email, email);
    assert_eq!(access.role.as_deref(), Some("admin"));

    let refresh = app
        .token_service
        .verify_refresh_token(&body.refresh_token)
        .expect("refresh token should verify");
    assert_eq!(refresh.sub, user_id);
}

use crate::helpers::{get_random_email, TestApp, TEST_PASSWORD};
use cultivar_auth::domain::LoginResponse;

#[tokio::test]
async fn should_return_200_for_valid_access_token() {
    let app = TestApp::new().await;
    let email = get_random_email();
    app.seed_user(&email, TEST_PASSWORD, None).await;

    let login = app
        .login(email, TEST_PASSWORD.to_string())
        .await
        .json::<LoginResponse>()
        .await
        .expect("login response should deserialize");

    let response = app.verify_token(login.access_token).await;

    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn should_return_401_for_garbage_token() {
    let app = TestApp::new().await;

    let response = app.verify_token("invalid_token".to_string()).await;

    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn should_return_401_if_refresh_token_presented_as_access() {
    let app = TestApp::new().await;
    let email = get_random_email();
    app.seed_user(&email, TEST_PASSWORD, None).await;

    let login = app
        .login(email, TEST_PASSWORD.to_string())
        .await
        .json::<LoginResponse>()
        .await
        .expect("login response should deserialize");

    let response = app.verify_token(login.refresh_token).await;

    assert_eq!(response.status().as_u16(), 401);
}

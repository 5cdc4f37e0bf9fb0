use crate::helpers::{get_random_email, TestApp, TEST_PASSWORD};
use cultivar_auth::domain::{LoginResponse, RefreshResponse, INITIAL_TOKEN_VERSION};

#[tokio::test]
async fn should_return_401_for_garbage_token() {
    let app = TestApp::new().await;

    let response = app.refresh_token("not-a-token".to_string()).await;

    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn should_return_401_if_access_token_presented_as_refresh() {
    let app = TestApp::new().await;
    let email = get_random_email();
    app.seed_user(&email, TEST_PASSWORD, None).await;

    let login = app
        .login(email, TEST_PASSWORD.to_string())
        .await
        .json::<LoginResponse>()
        .await
        .expect("login response should deserialize");

    // Wrong secret domain: must be rejected even though the token is valid
    // as an access token.
    let response = app.refresh_token(login.access_token).await;

    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn should_return_200_and_fresh_pair_for_valid_refresh_token() {
    let app = TestApp::new().await;
    let email = get_random_email();
    let user_id = app.seed_user(&email, TEST_PASSWORD, Some("grower")).await;

    let login = app
        .login(email.clone(), TEST_PASSWORD.to_string())
        .await
        .json::<LoginResponse>()
        .await
        .expect("login response should deserialize");

    let response = app.refresh_token(login.refresh_token.clone()).await;
    assert_eq!(response.status().as_u16(), 200);

    let body = response
        .json::<RefreshResponse>()
        .await
        .expect("refresh response should deserialize");

    let access = app
        .token_service
        .verify_access_token(&body.access_token)
        .expect("rotated access token should verify");
    assert_eq!(access.sub, user_id);
    assert_eq!(access.role.as_deref(), Some("grower"));

    let refresh = app
        .token_service
        .verify_refresh_token(&body.refresh_token)
        .expect("rotated refresh token should verify");
    assert_eq!(refresh.sub, user_id);
    // The version travels with the session until a store starts bumping it.
    assert_eq!(refresh.token_version, INITIAL_TOKEN_VERSION);
}

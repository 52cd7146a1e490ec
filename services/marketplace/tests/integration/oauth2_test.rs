use serde_json::json;

use quickclick_auth_types::token::validate_access_token;
use quickclick_domain::user::AuthProvider;
use quickclick_marketplace::error::MarketplaceError;
use quickclick_marketplace::usecase::oauth2::OAuth2LoginUseCase;

use crate::helpers::{MockOAuth2Port, MockUserRepo, TEST_JWT_SECRET, test_user};

fn google_attributes(email: &str) -> serde_json::Value {
    json!({
        "sub": "108234",
        "name": "Alice Google",
        "email": email,
        "picture": "https://lh3.example.com/alice.png",
    })
}

fn usecase(
    users: MockUserRepo,
    port: MockOAuth2Port,
) -> OAuth2LoginUseCase<MockUserRepo, MockOAuth2Port> {
    OAuth2LoginUseCase {
        users,
        attributes: port,
        jwt_secret: TEST_JWT_SECRET.to_owned(),
        access_token_ttl_secs: 600,
    }
}

#[tokio::test]
async fn should_register_new_google_user() {
    let users = MockUserRepo::empty();
    let handle = users.users_handle();
    let usecase = usecase(
        users,
        MockOAuth2Port::returning(google_attributes("alice@gmail.com")),
    );

    let Ok(output) = usecase.execute("google", "provider-token").await else {
        panic!("expected oauth2 login to succeed");
    };

    let stored = handle.lock().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].provider, AuthProvider::Google);
    assert_eq!(stored[0].provider_id.as_deref(), Some("108234"));
    assert_eq!(stored[0].username, "Alice Google");
    assert!(!stored[0].email_verified);

    assert_eq!(output.principal.email, "alice@gmail.com");
    let info = validate_access_token(&output.token.access_token, TEST_JWT_SECRET).unwrap();
    assert_eq!(info.user_id, stored[0].id);
}

#[tokio::test]
async fn should_refresh_profile_of_existing_google_user() {
    let mut existing = test_user(4, "alice@gmail.com");
    existing.provider = AuthProvider::Google;
    let users = MockUserRepo::new(vec![existing]);
    let handle = users.users_handle();
    let usecase = usecase(
        users,
        MockOAuth2Port::returning(google_attributes("alice@gmail.com")),
    );

    let Ok(output) = usecase.execute("GOOGLE", "provider-token").await else {
        panic!("expected oauth2 login to succeed");
    };

    assert_eq!(output.principal.id, 4);
    let stored = handle.lock().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].username, "Alice Google");
    assert_eq!(
        stored[0].image_url.as_deref(),
        Some("https://lh3.example.com/alice.png")
    );
}

#[tokio::test]
async fn should_reject_account_registered_with_other_provider() {
    let usecase = usecase(
        MockUserRepo::new(vec![test_user(1, "alice@gmail.com")]),
        MockOAuth2Port::returning(google_attributes("alice@gmail.com")),
    );

    let Err(err) = usecase.execute("google", "provider-token").await else {
        panic!("expected provider mismatch");
    };

    assert!(matches!(err, MarketplaceError::OAuth2AuthenticationProcessing(_)));
    assert_eq!(
        err.to_string(),
        "Looks like you're signed up with LOCAL account. Please use your LOCAL account to login."
    );
}

#[tokio::test]
async fn should_require_email_from_provider() {
    let usecase = usecase(
        MockUserRepo::empty(),
        MockOAuth2Port::returning(json!({ "sub": "1", "name": "No Mail" })),
    );

    let Err(err) = usecase.execute("google", "provider-token").await else {
        panic!("expected missing email to fail");
    };

    assert_eq!(err.to_string(), "Email not found from OAuth2 provider");
}

#[tokio::test]
async fn should_reject_unsupported_registration_id() {
    let usecase = usecase(
        MockUserRepo::empty(),
        MockOAuth2Port::returning(google_attributes("alice@gmail.com")),
    );

    let Err(err) = usecase.execute("facebook", "provider-token").await else {
        panic!("expected unsupported provider to fail");
    };

    assert_eq!(
        err.to_string(),
        "Sorry! Login with facebook is not supported yet."
    );
}

#[tokio::test]
async fn should_surface_provider_rejection() {
    let users = MockUserRepo::empty();
    let handle = users.users_handle();
    let usecase = usecase(users, MockOAuth2Port::rejecting());

    let Err(err) = usecase.execute("google", "expired-token").await else {
        panic!("expected provider rejection");
    };

    assert!(matches!(err, MarketplaceError::OAuth2AuthenticationProcessing(_)));
    assert!(handle.lock().unwrap().is_empty());
}

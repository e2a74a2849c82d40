use veracity::presentation::config::AuthSettings;
use veracity::presentation::handlers::{CredentialCheck, verify_credentials};

// sha256("hunter2")
const HUNTER2_DIGEST: &str = "f52fbd32b2b3b86ff88ef6c490628285f482af15ddcb29541f94bcf526a3f6c7";

fn configured() -> AuthSettings {
    AuthSettings {
        email: Some("editor@example.com".to_string()),
        password_sha256: Some(HUNTER2_DIGEST.to_uppercase()),
    }
}

#[test]
fn given_matching_pair_when_verifying_then_accepts() {
    assert_eq!(
        verify_credentials(&configured(), "editor@example.com", "hunter2"),
        CredentialCheck::Accepted
    );
}

#[test]
fn given_wrong_password_when_verifying_then_rejects() {
    assert_eq!(
        verify_credentials(&configured(), "editor@example.com", "hunter3"),
        CredentialCheck::Rejected
    );
}

#[test]
fn given_wrong_email_when_verifying_then_rejects() {
    assert_eq!(
        verify_credentials(&configured(), "someone@example.com", "hunter2"),
        CredentialCheck::Rejected
    );
}

#[test]
fn given_plaintext_password_configured_when_verifying_then_rejects() {
    let auth = AuthSettings {
        email: Some("editor@example.com".to_string()),
        password_sha256: Some("hunter2".to_string()),
    };

    assert_eq!(
        verify_credentials(&auth, "editor@example.com", "hunter2"),
        CredentialCheck::Rejected
    );
}

#[test]
fn given_no_credentials_when_verifying_then_reports_not_configured() {
    assert_eq!(
        verify_credentials(&AuthSettings::default(), "a@b.c", "x"),
        CredentialCheck::NotConfigured
    );
}

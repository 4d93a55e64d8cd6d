#![cfg(test)]

use crate::types::VerifyEmailResponse;

#[test]
fn verify_email_response_reads_message() {
    let body: VerifyEmailResponse =
        serde_json::from_str(r#"{"message":"Email verified"}"#).unwrap();
    assert_eq!(body.message(), Some("Email verified"));
    assert_eq!(body.error(), None);
}

#[test]
fn verify_email_response_ignores_unknown_fields() {
    let body: VerifyEmailResponse =
        serde_json::from_str(r#"{"error":"Token expired","code":"EXPIRED"}"#).unwrap();
    assert_eq!(body.error(), Some("Token expired"));
}

#[test]
fn verify_email_response_treats_blank_text_as_missing() {
    let body: VerifyEmailResponse =
        serde_json::from_str(r#"{"message":"  ","error":""}"#).unwrap();
    assert_eq!(body.message(), None);
    assert_eq!(body.error(), None);
}

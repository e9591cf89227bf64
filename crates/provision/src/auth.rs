//! Identity provider definition: email/password sign-in for app users.

use serde::{Deserialize, Serialize};

/// Password policy enforced by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordPolicy {
    pub min_length: u32,
    pub require_lowercase: bool,
    pub require_uppercase: bool,
    pub require_numbers: bool,
    pub require_special_characters: bool,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: 8,
            require_lowercase: true,
            require_uppercase: true,
            require_numbers: true,
            require_special_characters: true,
        }
    }
}

/// Email sign-in definition with code-style verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthDefinition {
    pub verification_email_style: String,
    pub verification_email_subject: String,
    /// Body template; `{code}` is substituted by the provider.
    pub verification_email_body: String,
    pub password_format: PasswordPolicy,
}

impl AuthDefinition {
    /// The Birdwatch sign-in policy.
    pub fn birdwatch() -> Self {
        Self {
            verification_email_style: "CODE".into(),
            verification_email_subject: "Birdwatch verification".into(),
            verification_email_body: "Your Birdwatch code is {code}. It expires in 15 minutes."
                .into(),
            password_format: PasswordPolicy::default(),
        }
    }
}

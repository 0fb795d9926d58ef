use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed set of error codes the backend returns as a plain-text body on
/// non-success responses. Anything outside the set degrades to
/// `UndefinedError`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    InvalidTeamNameAscii,
    InvalidTeamNameLength,
    InvalidJson,
    InvalidAvatar,
    InvalidEmail,
    InvalidCountry,
    InvalidWebsite,
    InvalidCaptcha,
    InvalidFlag,
    InvalidPasswordLength,
    InvalidCurrentPassword,
    InvalidPasswordOrUsername,
    InternalError,
    EmailOrNameAlreadyExists,
    NotAuthorize,
    AlreadySolved,
    UndefinedError,
}

impl ErrorCode {
    pub fn parse(body: &str) -> Self {
        match body {
            "invalid_team_name_ascii" => Self::InvalidTeamNameAscii,
            "invalid_team_name_length" => Self::InvalidTeamNameLength,
            "invalid_json" => Self::InvalidJson,
            "invalid_avatar" => Self::InvalidAvatar,
            "invalid_email" => Self::InvalidEmail,
            "invalid_country" => Self::InvalidCountry,
            "invalid_website" => Self::InvalidWebsite,
            "invalid_captcha" => Self::InvalidCaptcha,
            "invalid_flag" => Self::InvalidFlag,
            "invalid_password_length" => Self::InvalidPasswordLength,
            "invalid_current_password" => Self::InvalidCurrentPassword,
            "invalid_password_or_username" => Self::InvalidPasswordOrUsername,
            "internal_error" => Self::InternalError,
            "email_or_name_already_exists" => Self::EmailOrNameAlreadyExists,
            "not_authorize" => Self::NotAuthorize,
            "already_solved" => Self::AlreadySolved,
            _ => Self::UndefinedError,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidTeamNameAscii => "invalid_team_name_ascii",
            Self::InvalidTeamNameLength => "invalid_team_name_length",
            Self::InvalidJson => "invalid_json",
            Self::InvalidAvatar => "invalid_avatar",
            Self::InvalidEmail => "invalid_email",
            Self::InvalidCountry => "invalid_country",
            Self::InvalidWebsite => "invalid_website",
            Self::InvalidCaptcha => "invalid_captcha",
            Self::InvalidFlag => "invalid_flag",
            Self::InvalidPasswordLength => "invalid_password_length",
            Self::InvalidCurrentPassword => "invalid_current_password",
            Self::InvalidPasswordOrUsername => "invalid_password_or_username",
            Self::InternalError => "internal_error",
            Self::EmailOrNameAlreadyExists => "email_or_name_already_exists",
            Self::NotAuthorize => "not_authorize",
            Self::AlreadySolved => "already_solved",
            Self::UndefinedError => "undefined_error",
        }
    }

    /// Fixed code-to-text table for inline user messages.
    pub fn message(&self) -> &'static str {
        match self {
            Self::InvalidTeamNameAscii => {
                "Invalid team name. Should contains only ascii characters!"
            }
            Self::InvalidTeamNameLength => "Invalid team name. Should have at least 1 character!",
            Self::InvalidJson => "Invalid payload. I you get this error contact with admins!",
            Self::InvalidAvatar => "Avatar should have max. 200kb and max. 256px width or height.",
            Self::InvalidEmail => "Email is invalid.",
            Self::InvalidCountry => "Country code is invalid.",
            Self::InvalidWebsite => "URL must start with \"https://\"",
            Self::InvalidCaptcha => "Captcha is invalid. Try again.",
            Self::InvalidFlag => "Invalid flag.",
            Self::InvalidPasswordLength => "Password should have min. 8 characters.",
            Self::InvalidCurrentPassword => "Current password is invalid.",
            Self::InvalidPasswordOrUsername => "Team not exists or invalid password",
            Self::InternalError => {
                "Internal error. I you get this error recently contact with admins!"
            }
            Self::EmailOrNameAlreadyExists => "Team name or email already exists.",
            Self::NotAuthorize => "Not authorize. Please login :)",
            Self::AlreadySolved => "You already solved this challenge.",
            Self::UndefinedError => "Unknown error. Try again.",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failed API call: either a known backend code or a transport/decoding
/// failure carrying its raw description.
#[derive(Clone, Debug, PartialEq)]
pub enum ApiError {
    Code(ErrorCode),
    Network(String),
}

impl ApiError {
    /// Resolves to the inline message shown to the user.
    pub fn message(&self) -> String {
        match self {
            Self::Code(code) => code.message().to_string(),
            Self::Network(text) => text.clone(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Code(code) => write!(f, "api error: {code}"),
            Self::Network(text) => write!(f, "network error: {text}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_roundtrips_every_known_code() {
        let codes = [
            ErrorCode::InvalidTeamNameAscii,
            ErrorCode::InvalidTeamNameLength,
            ErrorCode::InvalidJson,
            ErrorCode::InvalidAvatar,
            ErrorCode::InvalidEmail,
            ErrorCode::InvalidCountry,
            ErrorCode::InvalidWebsite,
            ErrorCode::InvalidCaptcha,
            ErrorCode::InvalidFlag,
            ErrorCode::InvalidPasswordLength,
            ErrorCode::InvalidCurrentPassword,
            ErrorCode::InvalidPasswordOrUsername,
            ErrorCode::InternalError,
            ErrorCode::EmailOrNameAlreadyExists,
            ErrorCode::NotAuthorize,
            ErrorCode::AlreadySolved,
        ];
        for code in codes {
            assert_eq!(ErrorCode::parse(code.as_str()), code);
        }
    }

    #[test]
    fn unrecognized_bodies_become_undefined_error() {
        assert_eq!(ErrorCode::parse("totally_new_code"), ErrorCode::UndefinedError);
        assert_eq!(ErrorCode::parse(""), ErrorCode::UndefinedError);
        assert_eq!(
            ErrorCode::parse("totally_new_code").message(),
            "Unknown error. Try again."
        );
    }

    #[test]
    fn not_authorize_maps_to_login_prompt() {
        assert_eq!(
            ErrorCode::parse("not_authorize").message(),
            "Not authorize. Please login :)"
        );
    }

    #[test]
    fn network_errors_pass_their_text_through() {
        let err = ApiError::Network("fetch failed".into());
        assert_eq!(err.message(), "fetch failed");
        let err = ApiError::Code(ErrorCode::AlreadySolved);
        assert_eq!(err.message(), "You already solved this challenge.");
    }
}

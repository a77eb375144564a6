use regex::Regex;

use common::model::user::User;

/// The two locally-distinguished login failures. Both are retryable in
/// place; neither persists a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthFailure {
    InvalidCredentials,
    NotAdmin,
}

impl AuthFailure {
    pub fn message(&self) -> &'static str {
        match self {
            AuthFailure::InvalidCredentials => "Invalid email or password",
            AuthFailure::NotAdmin => "Only admin users can login",
        }
    }
}

/// Picks the first user whose email and password both match, then requires
/// the admin role. The credential check runs before the role check so a
/// wrong password never leaks whether the account is an admin.
pub fn authenticate<'a>(
    users: &'a [User],
    email: &str,
    password: &str,
) -> Result<&'a User, AuthFailure> {
    let user = users
        .iter()
        .find(|u| u.email == email && u.password == password)
        .ok_or(AuthFailure::InvalidCredentials)?;
    if !user.is_admin() {
        return Err(AuthFailure::NotAdmin);
    }
    Ok(user)
}

/// Shape check only; the data service decides whether the address exists.
pub fn validate_email(value: &str) -> Option<String> {
    let re = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    if value.trim().is_empty() {
        Some("Email is required".to_string())
    } else if !re.is_match(value.trim()) {
        Some("Invalid email address".to_string())
    } else {
        None
    }
}

pub fn validate_password(value: &str) -> Option<String> {
    if value.is_empty() {
        Some("Password is required".to_string())
    } else if value.chars().count() < 6 {
        Some("Password must be at least 6 characters".to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(email: &str, password: &str, role: &str) -> User {
        User {
            id: "1".to_string(),
            name: "Ana".to_string(),
            email: email.to_string(),
            password: password.to_string(),
            role: role.to_string(),
        }
    }

    #[test]
    fn admin_with_matching_credentials_authenticates() {
        let users = vec![user("a@x.com", "secret", "admin")];
        let result = authenticate(&users, "a@x.com", "secret");
        assert_eq!(result.expect("should authenticate").id, "1");
    }

    #[test]
    fn wrong_password_is_invalid_credentials() {
        let users = vec![user("a@x.com", "secret", "admin")];
        assert_eq!(
            authenticate(&users, "a@x.com", "nope"),
            Err(AuthFailure::InvalidCredentials)
        );
    }

    #[test]
    fn non_admin_is_rejected_with_the_role_message() {
        let users = vec![user("a@x.com", "secret", "guest")];
        assert_eq!(
            authenticate(&users, "a@x.com", "secret"),
            Err(AuthFailure::NotAdmin)
        );
    }

    #[test]
    fn empty_result_set_is_invalid_credentials() {
        assert_eq!(
            authenticate(&[], "a@x.com", "secret"),
            Err(AuthFailure::InvalidCredentials)
        );
    }

    #[test]
    fn email_shape_is_checked() {
        assert!(validate_email("").is_some());
        assert!(validate_email("not-an-email").is_some());
        assert!(validate_email("a@x").is_some());
        assert!(validate_email("a@x.com").is_none());
    }

    #[test]
    fn password_needs_six_characters() {
        assert!(validate_password("").is_some());
        assert!(validate_password("12345").is_some());
        assert!(validate_password("123456").is_none());
    }
}

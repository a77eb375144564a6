use serde::{Deserialize, Serialize};

/// Role required to authenticate into the console.
pub const ADMIN_ROLE: &str = "admin";

/// A user record from the `/users` collection. Passwords are plaintext and
/// compared client-side; this console has no real credential security.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(deserialize_with = "super::de_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }

    /// Projection persisted client-side after a successful login. The
    /// password never leaves the login flow.
    pub fn session(&self) -> SessionUser {
        SessionUser {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role.clone(),
        }
    }
}

/// The stored session record; its presence gates protected views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(deserialize_with = "super::de_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin() -> User {
        User {
            id: "1".to_string(),
            name: "Ana".to_string(),
            email: "a@x.com".to_string(),
            password: "secret".to_string(),
            role: "admin".to_string(),
        }
    }

    #[test]
    fn session_projection_drops_the_password() {
        let user = admin();
        let session = user.session();
        let json = serde_json::to_string(&session).expect("session should serialize");
        assert!(!json.contains("secret"));
        assert_eq!(session.id, "1");
        assert_eq!(session.role, "admin");
    }

    #[test]
    fn admin_role_is_exact() {
        let mut user = admin();
        assert!(user.is_admin());
        user.role = "guest".to_string();
        assert!(!user.is_admin());
        user.role = "Admin".to_string();
        assert!(!user.is_admin());
    }

    #[test]
    fn deserializes_numeric_id() {
        let json = r#"{"id": 3, "name": "Ana", "email": "a@x.com", "password": "pw", "role": "admin"}"#;
        let user: User = serde_json::from_str(json).expect("record should parse");
        assert_eq!(user.id, "3");
    }
}

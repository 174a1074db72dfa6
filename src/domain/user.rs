//! User domain entity and its client-facing projections.

use serde::Serialize;
use utoipa::ToSchema;

use super::Password;

/// User domain entity
#[derive(Debug, Clone)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password: Password,
}

/// Created user (returned by `POST /user`).
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserResponse {
    /// Generated user identifier
    #[schema(example = 1)]
    pub id: i32,
    /// User display name
    #[schema(example = "John Doe")]
    pub name: String,
    /// User email address
    #[schema(example = "user@example.com")]
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

/// Reduced user view used by user reads and nested under a blog's creator.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserView {
    #[schema(example = "John Doe")]
    pub name: String,
    #[schema(example = "user@example.com")]
    pub email: String,
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        Self {
            name: user.name,
            email: user.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: 3,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password: Password::from_hash("$argon2id$fake".to_string()),
        }
    }

    #[test]
    fn test_user_view_hides_id_and_password() {
        let json = serde_json::to_value(UserView::from(sample_user())).unwrap();
        let object = json.as_object().unwrap();

        assert_eq!(object.len(), 2);
        assert_eq!(object["name"], "Ada");
        assert_eq!(object["email"], "ada@example.com");
        assert!(!object.contains_key("password"));
    }

    #[test]
    fn test_user_response_keeps_id_but_not_password() {
        let json = serde_json::to_value(UserResponse::from(sample_user())).unwrap();

        assert_eq!(json["id"], 3);
        assert!(json.get("password").is_none());
    }
}

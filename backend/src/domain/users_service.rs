//! Users resource operations.

use std::sync::Arc;

use super::error::Error;
use super::existence::map_store_error;
use super::ports::UserRepository;
use super::user::User;

/// Read operations over the users table.
#[derive(Clone)]
pub struct UsersService {
    users: Arc<dyn UserRepository>,
}

impl UsersService {
    /// Create the service over a users port.
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Fetch one user by exact username.
    ///
    /// Usernames skip identifier validation: any non-empty path segment is
    /// syntactically valid and resolved purely by existence.
    ///
    /// # Errors
    /// 404 `"User does not exist"` on a lookup miss.
    pub async fn fetch_user(&self, username: &str) -> Result<User, Error> {
        self.users
            .find_by_username(username)
            .await
            .map_err(map_store_error)?
            .ok_or_else(|| Error::not_found("User does not exist"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::MemoryContentStore;
    use crate::domain::ErrorCode;

    fn service() -> UsersService {
        UsersService::new(Arc::new(MemoryContentStore::seeded()))
    }

    #[actix_web::test]
    async fn finds_seeded_user() {
        let user = service().fetch_user("paper_crane").await.expect("seeded");
        assert_eq!(user.name, "Ines Kovac");
        assert!(user.avatar_url.starts_with("https://"));
    }

    #[actix_web::test]
    async fn miss_is_entity_specific_not_found() {
        let err = service()
            .fetch_user("not-a-yuser")
            .await
            .expect_err("missing user");
        assert_eq!(err.code(), ErrorCode::NotFound);
        assert_eq!(err.message(), "User does not exist");
    }
}

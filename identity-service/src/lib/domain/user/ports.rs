use async_trait::async_trait;

use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserProfile;
use crate::user::errors::UserError;
use crate::user::models::EmailAddress;
use crate::user::models::Username;

/// Port for user domain service operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new identity.
    ///
    /// Checks run in a fixed order: role policy, email uniqueness, username
    /// uniqueness, then hashing and the write. Nothing is persisted on failure.
    ///
    /// # Arguments
    /// * `command` - Validated command with username, email, name, password, and role
    ///
    /// # Returns
    /// Storage-assigned identifier of the new identity
    ///
    /// # Errors
    /// * `AdminCreationNotAllowed` - Admin role requested while policy forbids it
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `Password` - Hashing failed
    /// * `DatabaseError` - Database operation failed
    async fn register(&self, command: RegisterUserCommand) -> Result<UserId, UserError>;

    /// Resolve an identity by username (or email when username is empty)
    /// and check its password.
    ///
    /// # Returns
    /// Profile of the authenticated identity
    ///
    /// # Errors
    /// * `NotFound` - No identity matches the resolution key
    /// * `InvalidCredentials` - Password does not match
    /// * `Password` - Stored hash is corrupt
    /// * `DatabaseError` - Database operation failed
    async fn login(&self, command: LoginCommand) -> Result<UserProfile, UserError>;

    /// Retrieve user by unique identifier.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_user(&self, id: &UserId) -> Result<UserProfile, UserError>;
}

/// Persistence operations for user aggregate.
///
/// Lookups only see identities that have not been deleted.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist new user to storage.
    ///
    /// # Arguments
    /// * `user` - Identity to insert
    ///
    /// # Returns
    /// Identifier assigned by storage
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Unique index on username rejected the row
    /// * `EmailAlreadyExists` - Unique index on email rejected the row
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: NewUser) -> Result<UserId, UserError>;

    /// Retrieve user by identifier.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;

    /// Retrieve user by username.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;

    /// Retrieve user by email address.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError>;
}

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::LoginKey;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::RegistrationPolicy;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserProfile;
use crate::domain::user::models::Username;
use crate::user::errors::ErrorKind;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for registration and login.
///
/// Concrete implementation of UserServicePort with dependency injection.
/// Holds no mutable state; the registration policy is fixed at construction.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    password_hasher: auth::PasswordHasher,
    policy: RegistrationPolicy,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `policy` - Registration rules loaded at startup
    ///
    /// # Returns
    /// Configured user service instance
    pub fn new(repository: Arc<UR>, policy: RegistrationPolicy) -> Self {
        Self::with_password_hasher(repository, policy, auth::PasswordHasher::new())
    }

    /// Create a service with a specific password hasher.
    pub fn with_password_hasher(
        repository: Arc<UR>,
        policy: RegistrationPolicy,
        password_hasher: auth::PasswordHasher,
    ) -> Self {
        Self {
            repository,
            password_hasher,
            policy,
        }
    }

    async fn resolve_login(&self, key: LoginKey) -> Result<Option<User>, UserError> {
        // A key that fails validation cannot belong to any stored identity
        match key {
            LoginKey::Username(raw) => match Username::new(raw) {
                Ok(username) => self.repository.find_by_username(&username).await,
                Err(_) => Ok(None),
            },
            LoginKey::Email(raw) => match EmailAddress::new(raw) {
                Ok(email) => self.repository.find_by_email(&email).await,
                Err(_) => Ok(None),
            },
        }
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn register(&self, command: RegisterUserCommand) -> Result<UserId, UserError> {
        if !self.policy.permits(command.role) {
            tracing::warn!(
                username = %command.username,
                "Rejected admin registration: admin creation is disabled"
            );
            return Err(UserError::AdminCreationNotAllowed);
        }

        if self
            .repository
            .find_by_email(&command.email)
            .await?
            .is_some()
        {
            return Err(UserError::EmailAlreadyExists(command.email.to_string()));
        }

        if self
            .repository
            .find_by_username(&command.username)
            .await?
            .is_some()
        {
            return Err(UserError::UsernameAlreadyExists(
                command.username.to_string(),
            ));
        }

        let password_hash = self.password_hasher.hash(&command.password)?;

        let role = command.role;
        let user = NewUser {
            username: command.username,
            email: command.email,
            name: command.name,
            password_hash,
            role,
        };

        // The unique indexes still decide races between concurrent registrations
        let user_id = self.repository.create(user).await.inspect_err(|e| {
            if e.kind() == ErrorKind::Conflict {
                tracing::warn!(error = %e, "Registration lost a uniqueness race");
            } else {
                tracing::error!(error = %e, "Failed to persist new user");
            }
        })?;

        tracing::info!(user_id = %user_id, role = %role, "User registered");

        Ok(user_id)
    }

    async fn login(&self, command: LoginCommand) -> Result<UserProfile, UserError> {
        let user = self
            .resolve_login(command.key())
            .await?
            .ok_or(UserError::NotFound)?;

        if !self
            .password_hasher
            .verify(&command.password, &user.password_hash)?
        {
            tracing::info!(user_id = %user.id, "Login rejected: invalid credentials");
            return Err(UserError::InvalidCredentials);
        }

        Ok(user.into())
    }

    async fn get_user(&self, id: &UserId) -> Result<UserProfile, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .map(UserProfile::from)
            .ok_or(UserError::NotFound)
    }
}

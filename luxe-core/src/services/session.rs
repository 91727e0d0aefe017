//! Session service - identity, authorization and profile edits
//!
//! The session is a single persisted user record. Every mutation of the
//! session user is written to the session store and copied into the
//! matching credential record, so the next login sees the same profile.

use std::sync::Arc;

use uuid::Uuid;

use crate::config::AgentCredentials;
use crate::domain::result::{Error, Result};
use crate::domain::{Credential, Role, User, UserUpdate};
use crate::ports::{CredentialStore, SessionStore};
use crate::services::password::{hash_password, verify_password};
use crate::services::LoggingService;

/// Minimum password length for every account
pub const MIN_PASSWORD_LEN: usize = 8;

/// Signup form input
#[derive(Debug, Clone, Default)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    /// Repeated password, checked when present
    pub confirm_password: Option<String>,
    pub phone: Option<String>,
}

pub struct SessionService {
    credentials: Arc<dyn CredentialStore>,
    sessions: Arc<dyn SessionStore>,
    agent: AgentCredentials,
    logger: Option<Arc<LoggingService>>,
}

impl SessionService {
    pub fn new(
        credentials: Arc<dyn CredentialStore>,
        sessions: Arc<dyn SessionStore>,
        agent: AgentCredentials,
    ) -> Self {
        Self {
            credentials,
            sessions,
            agent,
            logger: None,
        }
    }

    pub fn with_logger(mut self, logger: Arc<LoggingService>) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Register a regular user and sign them in
    pub fn signup(&self, request: SignupRequest) -> Result<User> {
        let user = self.register(request, Role::User, None)?;
        self.log_event("signup");
        Ok(user)
    }

    /// Register an agent account. Agents also need a licence number.
    pub fn signup_agent(&self, request: SignupRequest, license_number: &str) -> Result<User> {
        let license = license_number.trim();
        if license.is_empty() {
            return Err(Error::validation("License number is required"));
        }

        let user = self.register(request, Role::Agent, Some(license.to_string()))?;
        self.log_event("agent_signup");
        Ok(user)
    }

    fn register(
        &self,
        request: SignupRequest,
        role: Role,
        license_number: Option<String>,
    ) -> Result<User> {
        let name = request.name.trim();
        let email = request.email.trim();
        if name.is_empty() {
            return Err(Error::validation("Name is required"));
        }
        if email.is_empty() {
            return Err(Error::validation("Email is required"));
        }
        if request.password.is_empty() {
            return Err(Error::validation("Password is required"));
        }
        if request.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(Error::validation(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LEN
            )));
        }
        if let Some(confirm) = &request.confirm_password {
            if *confirm != request.password {
                return Err(Error::validation("Passwords do not match"));
            }
        }

        if self.credentials.find_credential_by_email(email)?.is_some() {
            return Err(Error::AlreadyExists);
        }

        let mut user = User::new(Uuid::new_v4().to_string(), email, name, role);
        user.phone = request
            .phone
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty());

        let mut credential = Credential::from_user(&user, hash_password(&request.password)?);
        credential.license_number = license_number;
        self.credentials.insert_credential(&credential)?;

        self.establish(&user)?;
        Ok(user)
    }

    /// Sign in with a registered email and password
    pub fn login(&self, email: &str, password: &str) -> Result<User> {
        let credential = self
            .credentials
            .find_credential_by_email(email.trim())?
            .filter(|c| verify_password(password, &c.password_hash))
            .ok_or(Error::InvalidCredentials)?;

        let user = credential.to_user();
        self.establish(&user)?;
        self.log_event("login");
        Ok(user)
    }

    /// Sign in to the agent portal: the built-in agent login, or any
    /// registered agent account
    pub fn login_agent(&self, email: &str, password: &str) -> Result<User> {
        let email = email.trim();

        let user = if email == self.agent.email && password == self.agent.password {
            User::new(
                self.agent.id.clone(),
                self.agent.email.clone(),
                self.agent.name.clone(),
                Role::Agent,
            )
        } else {
            self.credentials
                .find_credential_by_email(email)?
                .filter(|c| c.role == Role::Agent)
                .filter(|c| verify_password(password, &c.password_hash))
                .ok_or(Error::InvalidCredentials)?
                .to_user()
        };

        self.establish(&user)?;
        self.log_event("agent_login");
        Ok(user)
    }

    pub fn logout(&self) -> Result<()> {
        self.sessions.clear_session()?;
        self.log_event("logout");
        Ok(())
    }

    /// Restore the persisted session.
    ///
    /// A record that no longer parses is cleared and treated as signed out.
    pub fn current(&self) -> Result<Option<User>> {
        let stored = self.sessions.load_session()?;
        let json = match (stored.authenticated, stored.user_json) {
            (true, Some(json)) => json,
            _ => return Ok(None),
        };

        match serde_json::from_str::<User>(&json) {
            Ok(user) => Ok(Some(user)),
            Err(e) => {
                if let Some(logger) = &self.logger {
                    let _ = logger.log_error("session_corrupt", &e.to_string(), None);
                }
                self.sessions.clear_session()?;
                Ok(None)
            }
        }
    }

    pub fn require_user(&self) -> Result<User> {
        self.current()?.ok_or(Error::Unauthenticated)
    }

    pub fn require_role(&self, role: Role) -> Result<User> {
        let user = self.require_user()?;
        if user.role != role {
            return Err(Error::forbidden(format!("requires the {} role", role)));
        }
        Ok(user)
    }

    /// Merge profile changes into the session user and its credential record
    pub fn update_user(&self, update: &UserUpdate) -> Result<User> {
        let mut user = self.require_user()?;

        if let Some(name) = &update.name {
            if name.trim().is_empty() {
                return Err(Error::validation("Name is required"));
            }
        }
        if let Some(email) = &update.email {
            let email = email.trim();
            if email.is_empty() {
                return Err(Error::validation("Email is required"));
            }
            if let Some(owner) = self.credentials.find_credential_by_email(email)? {
                if owner.user_id != user.id {
                    return Err(Error::AlreadyExists);
                }
            }
        }

        let trimmed = UserUpdate {
            name: update.name.as_ref().map(|n| n.trim().to_string()),
            email: update.email.as_ref().map(|e| e.trim().to_string()),
            phone: update.phone.as_ref().map(|p| p.trim().to_string()),
        };
        user.apply(&trimmed);
        self.persist(&user)?;
        Ok(user)
    }

    /// Add a listing id to the session user's favorites. Adding an existing
    /// favorite changes nothing.
    pub fn add_favorite(&self, property_id: &str) -> Result<User> {
        let mut user = self.require_user()?;
        if user.add_favorite(property_id) {
            self.persist(&user)?;
        }
        Ok(user)
    }

    pub fn remove_favorite(&self, property_id: &str) -> Result<User> {
        let mut user = self.require_user()?;
        if user.remove_favorite(property_id) {
            self.persist(&user)?;
        }
        Ok(user)
    }

    fn establish(&self, user: &User) -> Result<()> {
        self.sessions.save_session(&serde_json::to_string(user)?)
    }

    /// Write the user to the credential record (when one exists) and then
    /// to the session
    fn persist(&self, user: &User) -> Result<()> {
        if let Some(mut credential) = self.credentials.find_credential_by_id(&user.id)? {
            credential.sync_profile(user);
            self.credentials.update_credential(&credential)?;
        }
        self.establish(user)
    }

    fn log_event(&self, event: &str) {
        if let Some(logger) = &self.logger {
            let _ = logger.log_event(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::duckdb::DuckDbRepository;

    fn service() -> (SessionService, Arc<DuckDbRepository>) {
        let repo = Arc::new(DuckDbRepository::open_in_memory().unwrap());
        repo.ensure_schema().unwrap();
        let service = SessionService::new(repo.clone(), repo.clone(), AgentCredentials::default());
        (service, repo)
    }

    fn request(name: &str, email: &str, password: &str) -> SignupRequest {
        SignupRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_signup_establishes_session() {
        let (service, _) = service();
        let user = service.signup(request("Ann", "ann@x.com", "hunter22")).unwrap();

        assert_eq!(user.role, Role::User);
        assert_eq!(service.current().unwrap(), Some(user));
    }

    #[test]
    fn test_signup_requires_fields() {
        let (service, repo) = service();
        let err = service.signup(request("  ", "ann@x.com", "hunter22")).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        let err = service.signup(request("Ann", "ann@x.com", "")).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert!(repo.list_credentials().unwrap().is_empty());
    }

    #[test]
    fn test_signup_rejects_short_password() {
        let (service, repo) = service();
        let err = service.signup(request("Ann", "ann@x.com", "1234567")).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert!(repo.list_credentials().unwrap().is_empty());
        assert!(service.current().unwrap().is_none());
    }

    #[test]
    fn test_signup_rejects_mismatched_confirmation() {
        let (service, repo) = service();
        let mut mismatched = request("Ann", "ann@x.com", "hunter22");
        mismatched.confirm_password = Some("hunter23".to_string());
        let err = service.signup(mismatched).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert!(repo.list_credentials().unwrap().is_empty());

        let mut confirmed = request("Ann", "ann@x.com", "hunter22");
        confirmed.confirm_password = Some("hunter22".to_string());
        assert!(service.signup(confirmed).is_ok());
    }

    #[test]
    fn test_login_checks_password() {
        let (service, _) = service();
        service.signup(request("Ann", "ann@x.com", "hunter22")).unwrap();
        service.logout().unwrap();

        assert!(matches!(
            service.login("ann@x.com", "wrong"),
            Err(Error::InvalidCredentials)
        ));
        assert!(matches!(
            service.login("nobody@x.com", "hunter22"),
            Err(Error::InvalidCredentials)
        ));
        assert!(service.current().unwrap().is_none());

        let user = service.login("ann@x.com", "hunter22").unwrap();
        assert_eq!(user.name, "Ann");
    }

    #[test]
    fn test_agent_signup_rules() {
        let (service, _) = service();
        let err = service
            .signup_agent(request("Bo", "bo@x.com", "short"), "LIC-1")
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));

        let err = service
            .signup_agent(request("Bo", "bo@x.com", "longenough"), " ")
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));

        let agent = service
            .signup_agent(request("Bo", "bo@x.com", "longenough"), "LIC-1")
            .unwrap();
        assert!(agent.is_agent());
    }

    #[test]
    fn test_login_agent_builtin_and_registered() {
        let (service, _) = service();
        let builtin = service.login_agent("agent@luxe.com", "agent123").unwrap();
        assert_eq!(builtin.id, "agent-1");
        assert_eq!(builtin.role, Role::Agent);

        service
            .signup_agent(request("Bo", "bo@x.com", "longenough"), "LIC-1")
            .unwrap();
        service.signup(request("Ann", "ann@x.com", "password1")).unwrap();

        assert!(service.login_agent("bo@x.com", "longenough").is_ok());
        assert!(matches!(
            service.login_agent("ann@x.com", "password1"),
            Err(Error::InvalidCredentials)
        ));
        assert!(matches!(
            service.login_agent("agent@luxe.com", "nope"),
            Err(Error::InvalidCredentials)
        ));
    }

    #[test]
    fn test_require_role() {
        let (service, _) = service();
        assert!(matches!(service.require_user(), Err(Error::Unauthenticated)));

        service.signup(request("Ann", "ann@x.com", "hunter22")).unwrap();
        assert!(matches!(
            service.require_role(Role::Agent),
            Err(Error::Forbidden(_))
        ));
        assert!(service.require_role(Role::User).is_ok());
    }

    #[test]
    fn test_update_user_rejects_taken_email() {
        let (service, repo) = service();
        service.signup(request("Ann", "ann@x.com", "hunter22")).unwrap();
        service.signup(request("Bo", "bo@x.com", "hunter22")).unwrap();

        let err = service
            .update_user(&UserUpdate {
                email: Some("ann@x.com".to_string()),
                ..Default::default()
            })
            .unwrap_err();
        assert!(matches!(err, Error::AlreadyExists));

        let user = service
            .update_user(&UserUpdate {
                name: Some("Bob".to_string()),
                phone: Some("555-0101".to_string()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(user.name, "Bob");

        let stored = repo.find_credential_by_email("bo@x.com").unwrap().unwrap();
        assert_eq!(stored.name, "Bob");
        assert_eq!(stored.phone.as_deref(), Some("555-0101"));
    }

    #[test]
    fn test_favorites_for_builtin_agent_stay_in_session() {
        let (service, repo) = service();
        service.login_agent("agent@luxe.com", "agent123").unwrap();

        let user = service.add_favorite("3").unwrap();
        assert_eq!(user.favorites, vec!["3".to_string()]);
        assert!(repo.list_credentials().unwrap().is_empty());
    }

    #[test]
    fn test_corrupt_session_is_cleared() {
        let (service, repo) = service();
        repo.save_session("{\"id\": 42").unwrap();

        assert!(service.current().unwrap().is_none());
        assert!(!repo.load_session().unwrap().authenticated);
    }
}

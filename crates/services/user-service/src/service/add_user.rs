//! Add user use case.
//!
//! Business rules that need the existing population, and so cannot live
//! inside a single value object:
//! - no two users share a normalized email
//! - no two users share an email domain

use std::sync::{Arc, Mutex, PoisonError};

use tracing::{debug, info};

use domain::{DomainError, DomainResult, Email, Name, Password, User};

use crate::repository::UserRepository;

/// Raw input for [`AddUser::execute`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddUserRequest {
    pub email: String,
    pub name: String,
    pub password: String,
}

/// Validates, checks uniqueness rules and persists a new user.
///
/// The rule checks and the save run as one step under an internal lock, so
/// concurrent callers sharing one `AddUser` cannot both pass the domain rule.
/// The repository itself is not locked across calls: every writer of a given
/// repository must go through the same `AddUser` instance.
pub struct AddUser {
    repo: Arc<dyn UserRepository>,
    write_lock: Mutex<()>,
}

impl AddUser {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self {
            repo,
            write_lock: Mutex::new(()),
        }
    }

    /// Run the use case.
    ///
    /// Order: email, name and password validation (value object errors are
    /// returned unchanged), then the exact-email rule, then the domain rule.
    pub fn execute(&self, request: &AddUserRequest) -> DomainResult<User> {
        let email = Email::new(&request.email)?;
        let name = Name::new(&request.name)?;
        let password = Password::new(&request.password)?;

        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        self.check_business_rules(&email)?;

        let user = User::create(email, name, password)?;
        self.repo.save(&user);

        info!(user_id = %user.id(), email = %user.email(), "user added");
        Ok(user)
    }

    fn check_business_rules(&self, email: &Email) -> DomainResult<()> {
        if self.repo.find_by_email(email.as_str()).is_some() {
            debug!(email = %email, "rejecting duplicate email");
            return Err(DomainError::DuplicateEmail(email.as_str().to_string()));
        }

        let domain = email.domain();
        if self
            .repo
            .find_all()
            .iter()
            .any(|user| user.email().domain() == domain)
        {
            debug!(domain, "rejecting duplicate domain");
            return Err(DomainError::DuplicateDomain(domain.to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockUserRepository;

    fn request(email: &str) -> AddUserRequest {
        AddUserRequest {
            email: email.to_string(),
            name: "Test User".to_string(),
            password: "Pass1234".to_string(),
        }
    }

    fn existing(email: &str) -> User {
        User::reconstruct(
            "existing",
            Email::new(email).unwrap(),
            Name::new("Someone").unwrap(),
            Password::new("Other1234").unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_invalid_input_never_touches_repository() {
        // No expectations: any repository call panics.
        let repo = MockUserRepository::new();
        let add_user = AddUser::new(Arc::new(repo));

        let err = add_user.execute(&request("not-an-email")).unwrap_err();
        assert_eq!(err, DomainError::validation("email format is invalid"));

        let mut bad_name = request("a@b.com");
        bad_name.name = "X".to_string();
        assert_eq!(
            add_user.execute(&bad_name).unwrap_err(),
            DomainError::validation("name must be at least 2 characters")
        );

        let mut bad_password = request("a@b.com");
        bad_password.password = "12345678".to_string();
        assert_eq!(
            add_user.execute(&bad_password).unwrap_err(),
            DomainError::validation("password must contain at least one letter")
        );
    }

    #[test]
    fn test_email_checked_before_name() {
        let add_user = AddUser::new(Arc::new(MockUserRepository::new()));
        let req = AddUserRequest {
            email: "".to_string(),
            name: "".to_string(),
            password: "".to_string(),
        };

        assert_eq!(
            add_user.execute(&req).unwrap_err(),
            DomainError::validation("email cannot be empty")
        );
    }

    #[test]
    fn test_duplicate_email_skips_domain_check_and_save() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .withf(|email| email == "user@test.com")
            .times(1)
            .returning(|email| Some(existing(email)));
        repo.expect_find_all().never();
        repo.expect_save().never();

        let add_user = AddUser::new(Arc::new(repo));
        let err = add_user.execute(&request("User@Test.com")).unwrap_err();

        assert_eq!(err, DomainError::DuplicateEmail("user@test.com".to_string()));
    }

    #[test]
    fn test_duplicate_domain_rejected() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().returning(|_| None);
        repo.expect_find_all()
            .times(1)
            .returning(|| vec![existing("a@gmail.com")]);
        repo.expect_save().never();

        let add_user = AddUser::new(Arc::new(repo));
        let err = add_user.execute(&request("b@gmail.com")).unwrap_err();

        assert_eq!(err, DomainError::DuplicateDomain("gmail.com".to_string()));
    }

    #[test]
    fn test_success_saves_user_once() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().returning(|_| None);
        repo.expect_find_all()
            .returning(|| vec![existing("a@gmail.com")]);
        repo.expect_save()
            .withf(|user| user.email().as_str() == "b@yahoo.com")
            .times(1)
            .return_const(());

        let add_user = AddUser::new(Arc::new(repo));
        let user = add_user.execute(&request("b@yahoo.com")).unwrap();

        assert_eq!(user.name().as_str(), "Test User");
        assert!(user.password().matches("Pass1234"));
    }
}

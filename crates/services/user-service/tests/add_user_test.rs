//! Add user use case tests against both repository adapters.

use std::sync::Arc;

use tempfile::TempDir;

use domain::DomainError;
use user_service_lib::{
    storage_repository, AddUser, AddUserRequest, GetAllUsers, InMemoryUserRepository,
    JsonStorage, UserRepository,
};

fn request(email: &str) -> AddUserRequest {
    AddUserRequest {
        email: email.to_string(),
        name: "Jorge".to_string(),
        password: "Password123".to_string(),
    }
}

fn storage_backed(dir: &TempDir) -> (Arc<JsonStorage>, Arc<dyn UserRepository>) {
    let storage = Arc::new(JsonStorage::open(dir.path().join("store.json")));
    let repo = storage_repository(&storage);
    (storage, repo)
}

#[test]
fn test_same_domain_rejected() {
    let dir = TempDir::new().unwrap();
    let (_storage, repo) = storage_backed(&dir);
    let add_user = AddUser::new(repo);

    add_user.execute(&request("a@gmail.com")).unwrap();
    let err = add_user.execute(&request("b@gmail.com")).unwrap_err();

    assert_eq!(err, DomainError::DuplicateDomain("gmail.com".to_string()));
    assert!(err.to_string().contains("gmail.com"));
}

#[test]
fn test_different_domains_accepted() {
    let dir = TempDir::new().unwrap();
    let (storage, repo) = storage_backed(&dir);
    let add_user = AddUser::new(repo);

    let first = add_user.execute(&request("a@gmail.com")).unwrap();
    let second = add_user.execute(&request("b@yahoo.com")).unwrap();

    assert_ne!(first, second);
    assert_eq!(storage.all_users().len(), 2);
}

#[test]
fn test_duplicate_email_is_case_insensitive() {
    let repo: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
    let add_user = AddUser::new(repo);

    add_user.execute(&request("User@Test.com")).unwrap();
    let err = add_user.execute(&request("user@test.com")).unwrap_err();

    assert_eq!(
        err.to_string(),
        "cannot add user: a user with email user@test.com already exists."
    );
}

#[test]
fn test_validation_error_surfaces_verbatim() {
    let repo: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
    let add_user = AddUser::new(repo);

    let mut req = request("a@gmail.com");
    req.password = "PasswordOnly".to_string();

    assert_eq!(
        add_user.execute(&req).unwrap_err().to_string(),
        "password must contain at least one number"
    );
}

#[test]
fn test_added_users_survive_reopen() {
    let dir = TempDir::new().unwrap();
    {
        let (_storage, repo) = storage_backed(&dir);
        AddUser::new(repo).execute(&request("a@gmail.com")).unwrap();
    }

    let (_storage, repo) = storage_backed(&dir);
    let users = GetAllUsers::new(Arc::clone(&repo)).execute();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].email().as_str(), "a@gmail.com");

    let err = AddUser::new(repo)
        .execute(&request("other@gmail.com"))
        .unwrap_err();
    assert!(err.is_conflict());
}

#[test]
fn test_corrupt_stored_user_does_not_block_domain() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("store.json"),
        r#"{"users": [{"id": "u1", "email": "old@gmail.com", "name": "Bad 1", "password": "Pass1234"}]}"#,
    )
    .unwrap();

    let (_storage, repo) = storage_backed(&dir);
    let user = AddUser::new(repo).execute(&request("new@gmail.com")).unwrap();

    assert_eq!(user.email().domain(), "gmail.com");
}

#[test]
fn test_concurrent_adds_keep_domain_rule() {
    let dir = TempDir::new().unwrap();
    let (storage, repo) = storage_backed(&dir);
    let add_user = AddUser::new(repo);

    let accepted = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let add_user = &add_user;
                scope.spawn(move || add_user.execute(&request(&format!("user{i}@gmail.com"))))
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .filter(Result::is_ok)
            .count()
    });

    assert_eq!(accepted, 1);
    assert_eq!(storage.all_users().len(), 1);
}

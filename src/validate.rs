//! Validation built from conjunctions and disjunctions of simple predicates.

use log::debug;

pub const USERNAME_ERROR: &str = "Username must be at least 3 alphanumeric characters";
pub const PASSWORD_ERROR: &str = "Password must be at least 8 characters with uppercase and digit";
pub const EMAIL_ERROR: &str = "Email must contain @ and valid domain";

fn username_valid(username: &str) -> bool {
    username.chars().count() >= 3 && username.chars().all(char::is_alphanumeric)
}

fn password_valid(password: &str) -> bool {
    password.chars().count() >= 8
        && password.chars().any(char::is_uppercase)
        && password.chars().any(char::is_numeric)
}

fn email_valid(email: &str) -> bool {
    // domain is whatever follows the last `@`
    match email.rsplit_once('@') {
        Some((_, domain)) => domain.contains('.'),
        None => false,
    }
}

/// Validates a sign-up form.
///
/// Every condition is checked, so all failures are reported together. The input
/// is valid iff the returned list is empty.
pub fn validate_user_input(username: &str, password: &str, email: &str) -> (bool, Vec<String>) {
    let username_ok = username_valid(username);
    let password_ok = password_valid(password);
    let email_ok = email_valid(email);

    let mut errors = Vec::new();
    if !username_ok {
        errors.push(USERNAME_ERROR.to_string());
    }
    if !password_ok {
        errors.push(PASSWORD_ERROR.to_string());
    }
    if !email_ok {
        errors.push(EMAIL_ERROR.to_string());
    }

    let is_valid = username_ok && password_ok && email_ok;
    debug!(
        "validate_user_input({:?}, _, {:?}): username={}, password={}, email={}",
        username, email, username_ok, password_ok, email_ok
    );
    (is_valid, errors)
}

/// Access is granted if `(admin ∨ owner) ∨ public`.
pub fn check_access_permissions(
    user_role: &str,
    resource_owner: &str,
    current_user: &str,
    resource_public: bool,
) -> bool {
    let is_admin = user_role == "admin";
    let is_owner = current_user == resource_owner;
    (is_admin || is_owner) || resource_public
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    #[test]
    fn test_valid_john() {
        let (ok, errors) = validate_user_input("john", "Password123", "john@email.com");
        assert!(ok);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_all_invalid() {
        let (ok, errors) = validate_user_input("ab", "weak", "invalid-email");
        assert!(!ok);
        assert_eq!(errors, vec![USERNAME_ERROR, PASSWORD_ERROR, EMAIL_ERROR]);
    }

    #[test]
    fn test_valid_admin() {
        let (ok, errors) = validate_user_input("admin", "StrongPass1", "admin@company.com");
        assert!(ok);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_single_failures() {
        assert_eq!(
            validate_user_input("jo hn", "Password123", "john@email.com").1,
            vec![USERNAME_ERROR]
        );
        assert_eq!(
            validate_user_input("john", "password123", "john@email.com").1,
            vec![PASSWORD_ERROR]
        );
        assert_eq!(validate_user_input("john", "Passwordxx", "john@email.com").1, vec![PASSWORD_ERROR]);
        assert_eq!(validate_user_input("john", "Password123", "john.email@com").1, vec![EMAIL_ERROR]);
        assert_eq!(validate_user_input("", "Password123", "a@b.c").1, vec![USERNAME_ERROR]);
    }

    #[test]
    fn test_password_accepts_non_ascii_digit() {
        let (ok, errors) = validate_user_input("john", "Password\u{0663}", "john@email.com");
        assert!(ok);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_email_uses_last_at() {
        assert!(email_valid("a@b@c.d"));
        assert!(!email_valid("a@b.c@d"));
    }

    #[test]
    fn test_access() {
        assert!(check_access_permissions("admin", "alice", "bob", false));
        assert!(check_access_permissions("user", "alice", "alice", false));
        assert!(check_access_permissions("user", "alice", "bob", true));
        assert!(!check_access_permissions("user", "alice", "bob", false));
    }
}

//! Pretty output formatting.

use userapi_core::health::HealthStatus;
use userapi_core::user::User;

/// Format a user for display.
pub fn format_user(user: &User) -> String {
    format!("{}\n  ID: {}\n  Email: {}", user.name, user.id, user.email)
}

/// Format users for display.
pub fn format_users(users: &[User]) -> String {
    if users.is_empty() {
        return "No users found.".to_string();
    }
    let mut output = format!("USERS ({})\n", users.len());
    output.push_str(&"-".repeat(40));
    for user in users {
        output.push_str(&format!("\n{}", format_user(user)));
        output.push('\n');
    }
    output
}

pub fn format_health(health: &HealthStatus) -> String {
    format!("Status: {}\n  {}", health.status, health.message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use userapi_core::user::NewUser;

    #[test]
    fn test_format_user() {
        let user = User::with_id(5, NewUser::new("Jane", "jane@x.com"));

        assert_eq!(format_user(&user), "Jane\n  ID: 5\n  Email: jane@x.com");
    }

    #[test]
    fn test_format_users_empty() {
        assert_eq!(format_users(&[]), "No users found.");
    }

    #[test]
    fn test_format_users_lists_each_user() {
        let users = vec![
            User::with_id(1, NewUser::new("John", "john@x.com")),
            User::with_id(2, NewUser::new("Jane", "jane@x.com")),
        ];

        let output = format_users(&users);

        assert!(output.starts_with("USERS (2)\n"));
        assert!(output.contains("John\n  ID: 1"));
        assert!(output.contains("Jane\n  ID: 2"));
    }

    #[test]
    fn test_format_health() {
        assert_eq!(
            format_health(&HealthStatus::healthy()),
            "Status: healthy\n  Application is running"
        );
    }
}

use super::aggregate::{User, UserRole, UserStatus};
use crate::domain::common::{utc_date, Lifecycle, MediaRef, RecordId};

fn user(
    id: &str,
    name: &str,
    email: &str,
    role: UserRole,
    joined: (u32, u32),
    last_active: (u32, u32),
    avatar: &str,
) -> User {
    let joined = utc_date(2024, joined.0, joined.1);
    User {
        id: RecordId::new(id),
        lifecycle: Lifecycle::at(joined, joined, None),
        name: name.to_string(),
        email: email.to_string(),
        role,
        status: UserStatus::Active,
        avatar: MediaRef::new(avatar),
        last_active: Some(utc_date(2024, last_active.0, last_active.1)),
    }
}

/// Демо-пользователи админки
pub fn seed_users() -> Vec<User> {
    vec![
        user(
            "1",
            "John Doe",
            "john.doe@example.com",
            UserRole::User,
            (1, 15),
            (3, 20),
            "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=100&h=100&fit=crop&crop=face",
        ),
        user(
            "2",
            "Jane Smith",
            "jane.smith@example.com",
            UserRole::Admin,
            (2, 1),
            (3, 19),
            "https://images.unsplash.com/photo-1494790108755-2616b612b786?w=100&h=100&fit=crop&crop=face",
        ),
        user(
            "3",
            "Mike Johnson",
            "mike.johnson@example.com",
            UserRole::User,
            (1, 20),
            (3, 10),
            "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=100&h=100&fit=crop&crop=face",
        ),
        user(
            "4",
            "Sarah Wilson",
            "sarah.wilson@example.com",
            UserRole::User,
            (3, 15),
            (3, 18),
            "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=100&h=100&fit=crop&crop=face",
        ),
    ]
}

use crate::domain::common::{Choice, Facet, Lifecycle, MediaRef, Record, RecordId, SortKey};
use crate::enums::BadgeVariant;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

// ============================================================================
// Facets
// ============================================================================

/// Статус учетной записи
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
}

impl Choice for UserStatus {
    fn all() -> &'static [Self] {
        &[UserStatus::Active, UserStatus::Inactive]
    }

    fn code(&self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            UserStatus::Active => "Active",
            UserStatus::Inactive => "Inactive",
        }
    }
}

impl Facet for UserStatus {
    fn badge(&self) -> BadgeVariant {
        match self {
            UserStatus::Active => BadgeVariant::Success,
            UserStatus::Inactive => BadgeVariant::Neutral,
        }
    }
}

/// Роль пользователя (фасет категории)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    User,
}

impl Choice for UserRole {
    fn all() -> &'static [Self] {
        &[UserRole::Admin, UserRole::User]
    }

    fn code(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::User => "user",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            UserRole::Admin => "Admin",
            UserRole::User => "User",
        }
    }
}

impl Facet for UserRole {
    fn badge(&self) -> BadgeVariant {
        match self {
            UserRole::Admin => BadgeVariant::Primary,
            UserRole::User => BadgeVariant::Neutral,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserSort {
    #[default]
    Default,
    Name,
    Newest,
}

impl Choice for UserSort {
    fn all() -> &'static [Self] {
        &[UserSort::Default, UserSort::Name, UserSort::Newest]
    }

    fn code(&self) -> &'static str {
        match self {
            UserSort::Default => "default",
            UserSort::Name => "name",
            UserSort::Newest => "newest",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            UserSort::Default => "Default",
            UserSort::Name => "Name (A-Z)",
            UserSort::Newest => "Recently Joined",
        }
    }
}

impl SortKey for UserSort {}

// ============================================================================
// Aggregate
// ============================================================================

/// Пользователь сайта. `created_at` - дата регистрации.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: RecordId,
    #[serde(flatten)]
    pub lifecycle: Lifecycle,

    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub status: UserStatus,
    pub avatar: MediaRef,
    #[serde(rename = "lastActive")]
    pub last_active: Option<DateTime<Utc>>,
}

impl Record for User {
    type Status = UserStatus;
    type Category = UserRole;
    type Sort = UserSort;
    type Dto = UserDto;

    fn element_name() -> &'static str {
        "User"
    }

    fn list_name() -> &'static str {
        "Users"
    }

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    fn lifecycle_mut(&mut self) -> &mut Lifecycle {
        &mut self.lifecycle
    }

    fn title(&self) -> &str {
        &self.name
    }

    fn status(&self) -> UserStatus {
        self.status
    }

    fn category(&self) -> UserRole {
        self.role
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str()]
    }

    fn compare_by(&self, other: &Self, sort: UserSort) -> Ordering {
        match sort {
            UserSort::Default => Ordering::Equal,
            UserSort::Name => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            UserSort::Newest => other.lifecycle.created_at.cmp(&self.lifecycle.created_at),
        }
    }

    fn template() -> UserDto {
        UserDto {
            name: Some(String::new()),
            email: Some(String::new()),
            role: Some(UserRole::User),
            status: Some(UserStatus::Active),
            avatar: Some(MediaRef::default()),
        }
    }

    fn from_dto(id: RecordId, lifecycle: Lifecycle, dto: UserDto) -> Self {
        Self {
            id,
            lifecycle,
            name: dto.name.unwrap_or_default(),
            email: dto.email.unwrap_or_default(),
            role: dto.role.unwrap_or(UserRole::User),
            status: dto.status.unwrap_or(UserStatus::Active),
            avatar: dto.avatar.unwrap_or_default(),
            last_active: None,
        }
    }

    fn apply(&mut self, dto: UserDto) {
        if let Some(v) = dto.name {
            self.name = v;
        }
        if let Some(v) = dto.email {
            self.email = v;
        }
        if let Some(v) = dto.role {
            self.role = v;
        }
        if let Some(v) = dto.status {
            self.status = v;
        }
        if let Some(v) = dto.avatar {
            self.avatar = v;
        }
    }

    fn to_dto(&self) -> UserDto {
        UserDto {
            name: Some(self.name.clone()),
            email: Some(self.email.clone()),
            role: Some(self.role),
            status: Some(self.status),
            avatar: Some(self.avatar.clone()),
        }
    }

    fn set_media(dto: &mut UserDto, media: MediaRef) {
        dto.avatar = Some(media);
    }

    fn tags_mut(_dto: &mut UserDto) -> Option<&mut Vec<String>> {
        None
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания/обновления пользователя
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserDto {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<UserRole>,
    pub status: Option<UserStatus>,
    pub avatar: Option<MediaRef>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::utc_date;

    #[test]
    fn test_search_covers_name_and_email() {
        let user = User::from_dto(
            RecordId::new("1"),
            Lifecycle::new(utc_date(2024, 1, 15)),
            UserDto {
                name: Some("John Doe".into()),
                email: Some("john.doe@example.com".into()),
                ..Default::default()
            },
        );
        assert!(user.matches_search("DOE"));
        assert!(user.matches_search("example.com"));
        assert!(!user.matches_search("smith"));
        assert!(user.matches_search(""));
    }

    #[test]
    fn test_defaults() {
        let user = User::from_dto(
            RecordId::new("x"),
            Lifecycle::new(utc_date(2024, 1, 15)),
            UserDto::default(),
        );
        assert_eq!(user.role, UserRole::User);
        assert_eq!(user.status, UserStatus::Active);
        assert_eq!(user.last_active, None);
    }
}

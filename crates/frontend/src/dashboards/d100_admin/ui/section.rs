/// Раздел админки
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Overview,
    Users,
    Tours,
    Gallery,
    Blog,
}

impl Section {
    pub fn all() -> &'static [Section] {
        &[
            Section::Overview,
            Section::Users,
            Section::Tours,
            Section::Gallery,
            Section::Blog,
        ]
    }

    /// Пункт меню
    pub fn label(&self) -> &'static str {
        match self {
            Section::Overview => "Overview",
            Section::Users => "User Management",
            Section::Tours => "Tours & Packages",
            Section::Gallery => "Gallery Management",
            Section::Blog => "Blog Management",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Section::Overview => "dashboard",
            Section::Users => "users",
            Section::Tours => "tours",
            Section::Gallery => "gallery",
            Section::Blog => "blog",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overview_first() {
        assert_eq!(Section::all()[0], Section::Overview);
        assert_eq!(Section::all().len(), 5);
    }
}

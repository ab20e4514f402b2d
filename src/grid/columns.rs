//! Column descriptors and the per-cell rendering rules.
//!
//! The descriptors only declare intent (label, width class, responsive
//! visibility, cell kind); the ui module applies them per frame against
//! the current terminal width.

use ratatui::layout::Constraint;

use super::Status;

/// Width class for a column, resolved to a layout constraint by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnWidth {
    Small,
    Medium,
    Large,
}

/// Viewport class derived from terminal width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viewport {
    Small,
    Medium,
    Large,
}

/// Terminal columns below which we drop to the next viewport class
const MEDIUM_MIN_COLS: u16 = 80;
const LARGE_MIN_COLS: u16 = 110;

pub fn viewport_class(width: u16) -> Viewport {
    if width >= LARGE_MIN_COLS {
        Viewport::Large
    } else if width >= MEDIUM_MIN_COLS {
        Viewport::Medium
    } else {
        Viewport::Small
    }
}

/// How a cell's raw value is turned into display content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Text,
    StatusBadge,
    ProgressBar,
    Actions,
}

#[derive(Debug, Clone, Copy)]
pub struct ColumnSpec {
    pub key: &'static str,
    pub title: &'static str,
    pub width: Option<ColumnWidth>,
    /// None = always visible; Some = only at these viewport classes
    pub responsive: Option<&'static [Viewport]>,
    pub kind: CellKind,
}

impl ColumnSpec {
    pub fn visible_at(&self, viewport: Viewport) -> bool {
        match self.responsive {
            None => true,
            Some(classes) => classes.contains(&viewport),
        }
    }

    pub fn constraint(&self) -> Constraint {
        match self.width {
            Some(ColumnWidth::Small) => Constraint::Length(6),
            Some(ColumnWidth::Medium) => Constraint::Length(12),
            Some(ColumnWidth::Large) => Constraint::Min(24),
            None => Constraint::Fill(1),
        }
    }
}

/// The grid's column set, in display order
pub const COLUMNS: &[ColumnSpec] = &[
    ColumnSpec {
        key: "id",
        title: "ID",
        width: Some(ColumnWidth::Small),
        responsive: Some(&[Viewport::Large]),
        kind: CellKind::Text,
    },
    ColumnSpec {
        key: "name",
        title: "Full Name",
        width: None,
        responsive: None,
        kind: CellKind::Text,
    },
    ColumnSpec {
        key: "age",
        title: "Age",
        width: Some(ColumnWidth::Small),
        responsive: Some(&[Viewport::Medium, Viewport::Large]),
        kind: CellKind::Text,
    },
    ColumnSpec {
        key: "email",
        title: "Email Address",
        width: Some(ColumnWidth::Large),
        responsive: Some(&[Viewport::Large]),
        kind: CellKind::Text,
    },
    ColumnSpec {
        key: "status",
        title: "Status",
        width: Some(ColumnWidth::Medium),
        responsive: None,
        kind: CellKind::StatusBadge,
    },
    ColumnSpec {
        key: "progress",
        title: "Progress",
        width: None,
        responsive: None,
        kind: CellKind::ProgressBar,
    },
    ColumnSpec {
        key: "actions",
        title: "Actions",
        width: Some(ColumnWidth::Medium),
        responsive: None,
        kind: CellKind::Actions,
    },
];

/// Columns visible at the given viewport class, in display order
pub fn visible_columns(viewport: Viewport) -> Vec<&'static ColumnSpec> {
    COLUMNS.iter().filter(|c| c.visible_at(viewport)).collect()
}

/// Badge tone for a status value: Active is the green one, anything
/// else gets the red one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Positive,
    Negative,
}

pub fn badge_tone(status: Status) -> BadgeTone {
    match status {
        Status::Active => BadgeTone::Positive,
        _ => BadgeTone::Negative,
    }
}

/// Fill color bucket for a progress value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillLevel {
    High,
    Mid,
    Low,
}

pub fn fill_level(progress: u8) -> FillLevel {
    if progress > 70 {
        FillLevel::High
    } else if progress > 30 {
        FillLevel::Mid
    } else {
        FillLevel::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_classes_by_width() {
        assert_eq!(viewport_class(60), Viewport::Small);
        assert_eq!(viewport_class(79), Viewport::Small);
        assert_eq!(viewport_class(80), Viewport::Medium);
        assert_eq!(viewport_class(109), Viewport::Medium);
        assert_eq!(viewport_class(110), Viewport::Large);
    }

    #[test]
    fn responsive_columns_hide_below_their_class() {
        let small: Vec<&str> = visible_columns(Viewport::Small)
            .iter()
            .map(|c| c.key)
            .collect();
        assert_eq!(small, vec!["name", "status", "progress", "actions"]);

        let medium: Vec<&str> = visible_columns(Viewport::Medium)
            .iter()
            .map(|c| c.key)
            .collect();
        assert_eq!(medium, vec!["name", "age", "status", "progress", "actions"]);

        let large: Vec<&str> = visible_columns(Viewport::Large)
            .iter()
            .map(|c| c.key)
            .collect();
        assert_eq!(
            large,
            vec!["id", "name", "age", "email", "status", "progress", "actions"]
        );
    }

    #[test]
    fn column_without_responsive_set_is_always_visible() {
        let name = COLUMNS.iter().find(|c| c.key == "name").unwrap();
        assert!(name.visible_at(Viewport::Small));
        assert!(name.visible_at(Viewport::Medium));
        assert!(name.visible_at(Viewport::Large));
    }

    #[test]
    fn badge_tones() {
        assert_eq!(badge_tone(Status::Active), BadgeTone::Positive);
        assert_eq!(badge_tone(Status::Inactive), BadgeTone::Negative);
    }

    #[test]
    fn fill_levels_at_boundaries() {
        assert_eq!(fill_level(85), FillLevel::High);
        assert_eq!(fill_level(71), FillLevel::High);
        assert_eq!(fill_level(70), FillLevel::Mid);
        assert_eq!(fill_level(31), FillLevel::Mid);
        assert_eq!(fill_level(30), FillLevel::Low);
        assert_eq!(fill_level(20), FillLevel::Low);
        assert_eq!(fill_level(0), FillLevel::Low);
    }
}

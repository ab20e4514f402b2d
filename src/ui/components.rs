//! Cell content builders for the derived columns: status badges,
//! progress bars and the per-row delete action.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::grid::columns::{badge_tone, fill_level, BadgeTone, FillLevel};
use crate::grid::Status;
use crate::theme::Theme;

/// Padded inline label, tinted by status
pub fn status_badge(status: Status, theme: &Theme) -> Span<'static> {
    let (bg, fg) = match badge_tone(status) {
        BadgeTone::Positive => (theme.badge_positive, theme.success),
        BadgeTone::Negative => (theme.badge_negative, theme.danger),
    };
    Span::styled(format!(" {} ", status), Style::default().fg(fg).bg(bg))
}

fn fill_color(level: FillLevel, theme: &Theme) -> Color {
    match level {
        FillLevel::High => theme.success,
        FillLevel::Mid => theme.warning,
        FillLevel::Low => theme.danger,
    }
}

/// Track of block glyphs with a fill proportional to the value.
/// `width` is the cell width in terminal columns.
pub fn progress_cell(progress: u8, width: u16, theme: &Theme) -> Line<'static> {
    let progress = progress.min(100);
    let width = width as usize;
    let filled = width * progress as usize / 100;

    Line::from(vec![
        Span::styled(
            "█".repeat(filled),
            Style::default().fg(fill_color(fill_level(progress), theme)),
        ),
        Span::styled(
            "░".repeat(width - filled),
            Style::default().fg(theme.text_dim),
        ),
    ])
}

/// Delete affordance shown in the actions column
pub fn delete_action(theme: &Theme) -> Span<'static> {
    Span::styled(
        "󰆴 (d)elete",
        Style::default().fg(theme.danger).add_modifier(Modifier::BOLD),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_badge_uses_green_tones() {
        let theme = Theme::default();
        let badge = status_badge(Status::Active, &theme);
        assert_eq!(badge.content.as_ref(), " Active ");
        assert_eq!(badge.style.fg, Some(theme.success));
        assert_eq!(badge.style.bg, Some(theme.badge_positive));
    }

    #[test]
    fn inactive_badge_uses_red_tones() {
        let theme = Theme::default();
        let badge = status_badge(Status::Inactive, &theme);
        assert_eq!(badge.content.as_ref(), " Inactive ");
        assert_eq!(badge.style.fg, Some(theme.danger));
        assert_eq!(badge.style.bg, Some(theme.badge_negative));
    }

    #[test]
    fn progress_fill_scales_to_cell_width() {
        let theme = Theme::default();
        let line = progress_cell(85, 20, &theme);
        assert_eq!(line.spans[0].content.chars().count(), 17); // 85% of 20
        assert_eq!(line.spans[1].content.chars().count(), 3);
        assert_eq!(line.spans[0].style.fg, Some(theme.success));
    }

    #[test]
    fn progress_colors_by_threshold() {
        let theme = Theme::default();
        let high = progress_cell(85, 10, &theme);
        let mid = progress_cell(50, 10, &theme);
        let low = progress_cell(20, 10, &theme);
        assert_eq!(high.spans[0].style.fg, Some(theme.success));
        assert_eq!(mid.spans[0].style.fg, Some(theme.warning));
        assert_eq!(low.spans[0].style.fg, Some(theme.danger));
    }

    #[test]
    fn progress_at_twenty_fills_a_fifth() {
        let theme = Theme::default();
        let line = progress_cell(20, 10, &theme);
        assert_eq!(line.spans[0].content.chars().count(), 2);
        assert_eq!(line.spans[1].content.chars().count(), 8);
    }

    #[test]
    fn out_of_range_progress_is_clamped() {
        let theme = Theme::default();
        let line = progress_cell(250, 10, &theme);
        assert_eq!(line.spans[0].content.chars().count(), 10);
        assert_eq!(line.spans[1].content.chars().count(), 0);
    }
}

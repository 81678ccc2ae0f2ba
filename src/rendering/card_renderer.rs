//! Friend card rendering.
//!
//! Paints one friend card into its allocated rect: avatar placeholder,
//! name, presence status, world line, and the "last seen" line for offline
//! friends. Selection and hover states come from the caller so the painter
//! stays free of selection logic.

use crate::utils::truncate_label;
use beacon::{Friend, ThemeColors, adjust_brightness, with_alpha};
use egui::{Align2, Color32, CornerRadius, FontId, Pos2, Rect, Stroke, StrokeKind, Vec2};

const CARD_ROUNDING: CornerRadius = CornerRadius::same(6);
const CARD_PADDING: f32 = 12.0;
const AVATAR_RADIUS: f32 = 22.0;
const STATUS_DOT_RADIUS: f32 = 5.0;

/// Paints one friend card.
pub fn render_friend_card(
    ui: &egui::Ui,
    rect: Rect,
    friend: &Friend,
    last_seen: Option<&str>,
    is_selected: bool,
    is_hovered: bool,
    colors: &ThemeColors,
) {
    let painter = ui.painter();

    // Card body
    let fill = if is_selected {
        colors.selection
    } else if is_hovered {
        colors.card_hover
    } else {
        colors.card_background
    };
    let stroke = if is_selected {
        Stroke::new(2.0, colors.selection_stroke)
    } else {
        Stroke::new(1.0, colors.card_border)
    };
    painter.rect_filled(rect, CARD_ROUNDING, fill);
    painter.rect_stroke(rect, CARD_ROUNDING, stroke, StrokeKind::Inside);

    let status = friend.effective_status();
    let status_color = colors.status_color(status);

    // Avatar placeholder: tinted disc with the name's initial.
    let avatar_center = Pos2::new(
        rect.left() + CARD_PADDING + AVATAR_RADIUS,
        rect.top() + CARD_PADDING + AVATAR_RADIUS,
    );
    painter.circle_filled(avatar_center, AVATAR_RADIUS, avatar_color(friend, colors));
    let initial = friend
        .display_name
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_else(|| "?".to_string());
    painter.text(
        avatar_center,
        Align2::CENTER_CENTER,
        initial,
        FontId::proportional(20.0),
        colors.text_strong,
    );

    // Status dot on the avatar edge.
    let dot_center = avatar_center + Vec2::new(AVATAR_RADIUS * 0.7, AVATAR_RADIUS * 0.7);
    painter.circle_filled(dot_center, STATUS_DOT_RADIUS, status_color);
    painter.circle_stroke(dot_center, STATUS_DOT_RADIUS, Stroke::new(1.5, fill));

    // Text block to the right of the avatar.
    let text_left = rect.left() + CARD_PADDING + AVATAR_RADIUS * 2.0 + 10.0;
    let text_width = (rect.right() - CARD_PADDING - text_left).max(0.0);
    let max_chars = (text_width / 7.5) as usize;

    let name_pos = Pos2::new(text_left, rect.top() + CARD_PADDING + 4.0);
    painter.text(
        name_pos,
        Align2::LEFT_TOP,
        truncate_label(&friend.display_name, max_chars),
        FontId::proportional(15.0),
        colors.text_strong,
    );

    let status_pos = name_pos + Vec2::new(0.0, 22.0);
    painter.text(
        status_pos,
        Align2::LEFT_TOP,
        status.label(),
        FontId::proportional(12.0),
        status_color,
    );

    // Status description / world line
    let mut line_pos = status_pos + Vec2::new(0.0, 18.0);
    if !friend.status_description.is_empty() {
        painter.text(
            line_pos,
            Align2::LEFT_TOP,
            truncate_label(&friend.status_description, max_chars),
            FontId::proportional(12.0),
            colors.text,
        );
        line_pos += Vec2::new(0.0, 18.0);
    }

    if let Some(last_seen) = last_seen {
        painter.text(
            line_pos,
            Align2::LEFT_TOP,
            format!("last seen {last_seen}"),
            FontId::proportional(11.0),
            colors.text_dim,
        );
    } else if !friend.is_offline() {
        painter.text(
            line_pos,
            Align2::LEFT_TOP,
            truncate_label(&location_label(friend), max_chars),
            FontId::proportional(11.0),
            colors.text_dim,
        );
    }
}

/// Stable per-friend avatar tint derived from the ID, kept readable by
/// blending toward the card palette.
fn avatar_color(friend: &Friend, colors: &ThemeColors) -> Color32 {
    let mut hash: u32 = 2166136261;
    for byte in friend.id.bytes() {
        hash ^= byte as u32;
        hash = hash.wrapping_mul(16777619);
    }
    let base = Color32::from_rgb(
        96 + (hash & 0x7f) as u8,
        96 + ((hash >> 8) & 0x7f) as u8,
        96 + ((hash >> 16) & 0x7f) as u8,
    );
    if friend.is_offline() {
        adjust_brightness(with_alpha(base, 255), 0.55)
    } else {
        base
    }
}

fn location_label(friend: &Friend) -> String {
    if friend.location.starts_with("wrld_") {
        "in a world".to_string()
    } else if friend.location == "private" {
        "in a private world".to_string()
    } else {
        friend.location.clone()
    }
}

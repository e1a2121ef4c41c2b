use ratatui::layout::Rect;

use crate::ui::surface::PanelGravity;

/// Rect of `width` x `height` centered in `area`, clipped to it.
pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Horizontally centered rect stuck to the top or bottom edge of `area`.
pub fn anchored_rect(area: Rect, width: u16, height: u16, gravity: PanelGravity) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let y = match gravity {
        PanelGravity::Top => area.y,
        PanelGravity::Bottom => area.y + area.height - height,
    };
    Rect {
        x: area.x + (area.width - width) / 2,
        y,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_is_clipped() {
        let area = Rect::new(0, 0, 20, 10);
        assert_eq!(centered_rect_by_size(area, 10, 4), Rect::new(5, 3, 10, 4));
        assert_eq!(centered_rect_by_size(area, 40, 40), area);
    }

    #[test]
    fn anchored_rect_follows_gravity() {
        let area = Rect::new(0, 0, 40, 20);
        assert_eq!(anchored_rect(area, 20, 5, PanelGravity::Top).y, 0);
        assert_eq!(anchored_rect(area, 20, 5, PanelGravity::Bottom).y, 15);
    }
}

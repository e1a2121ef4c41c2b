use crate::ui::surface::HostSurface;

/// The menu grid never changes width.
pub const MENU_COLUMNS: usize = 4;

/// Most caption lines drawn under an icon.
pub const CAPTION_LINES: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuMetrics {
    /// Columns per cell, borders excluded.
    pub cell_width: u16,
}

impl MenuMetrics {
    pub fn for_surface(surface: &HostSurface) -> Self {
        Self {
            cell_width: if surface.wide { 14 } else { 10 },
        }
    }

    pub fn menu_width(&self) -> u16 {
        self.cell_width * MENU_COLUMNS as u16 + 2
    }
}

/// Split `title` into at most [`CAPTION_LINES`] lines of `width` chars,
/// ending in `…` when it does not fit.
pub fn caption_lines(title: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in title.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };
        if current.is_empty() || candidate.chars().count() <= width {
            current = candidate;
        } else {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    let overflow = lines.len() > CAPTION_LINES;
    lines.truncate(CAPTION_LINES);
    let last = lines.len().saturating_sub(1);
    for (index, line) in lines.iter_mut().enumerate() {
        let len = line.chars().count();
        if len > width {
            *line = ellipsize(line, width);
        } else if overflow && index == last {
            if len < width {
                line.push('…');
            } else {
                *line = ellipsize(line, width);
            }
        }
    }
    lines
}

fn ellipsize(line: &str, width: usize) -> String {
    let kept: String = line.chars().take(width.saturating_sub(1)).collect();
    format!("{kept}…")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_widens_cells() {
        let narrow = MenuMetrics::for_surface(&HostSurface::default());
        let wide = MenuMetrics::for_surface(&HostSurface {
            width: 120,
            wide: true,
            ..HostSurface::default()
        });
        assert!(wide.cell_width > narrow.cell_width);
        assert_eq!(narrow.menu_width(), 42);
    }

    #[test]
    fn captions_wrap_to_two_lines() {
        assert_eq!(caption_lines("Copy", 8), vec!["Copy"]);
        assert_eq!(caption_lines("Search web", 8), vec!["Search", "web"]);
        let long = caption_lines("Read this page aloud please", 8);
        assert_eq!(long.len(), 2);
        assert!(long[1].ends_with('…'));
        assert!(long.iter().all(|line| line.chars().count() <= 8));
    }
}

// Top navigation: anchor links, scroll offsets and the skip-to-content link.

/// Nav menu entries as (section id, label).
pub const NAV_LINKS: [(&str, &str); 2] = [("home", "Home"), ("learning", "Learn")];

/// Gap left between the sticky nav bar and a section scrolled into view.
pub const SCROLL_GAP: f64 = 20.0;
/// How far below the nav bar a section must reach to count as the one being read.
pub const ACTIVE_PROBE: f64 = 100.0;

pub const LOAD_ANNOUNCEMENT: &str = "Website fully loaded";

/// Viewport-relative box of a navigable section.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBox {
    pub id: &'static str,
    pub top: f64,
    pub height: f64,
}

/// Section under the probe line just below the nav bar. Later sections win when
/// several overlap it.
pub fn active_section(sections: &[SectionBox], nav_height: f64) -> Option<&'static str> {
    let probe = nav_height + ACTIVE_PROBE;
    sections
        .iter()
        .rfind(|s| s.top <= probe && s.top + s.height > probe)
        .map(|s| s.id)
}

/// Document scroll offset that puts a section just below the nav bar.
pub fn scroll_target(section_top: f64, page_offset: f64, nav_height: f64) -> f64 {
    section_top + page_offset - nav_height - SCROLL_GAP
}

/// The skip link sits off-screen until it receives keyboard focus.
pub fn skip_link_style(focused: bool) -> String {
    let top = if focused { 6 } else { -40 };
    format!(
        "position:absolute; left:6px; top:{top}px; background:#6C5CE7; color:#fff; \
         padding:8px; text-decoration:none; z-index:10001; border-radius:4px;"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boxes(home_top: f64) -> [SectionBox; 2] {
        [
            SectionBox { id: "home", top: home_top, height: 500.0 },
            SectionBox { id: "learning", top: home_top + 500.0, height: 900.0 },
        ]
    }

    #[test]
    fn active_section_follows_scroll() {
        assert_eq!(active_section(&boxes(60.0), 60.0), Some("home"));
        assert_eq!(active_section(&boxes(-400.0), 60.0), Some("learning"));
        // scrolled past everything
        assert_eq!(active_section(&boxes(-2000.0), 60.0), None);
    }

    #[test]
    fn hidden_sections_never_match() {
        let hidden = [SectionBox { id: "home", top: 0.0, height: 0.0 }];
        assert_eq!(active_section(&hidden, 0.0), None);
    }

    #[test]
    fn scroll_target_clears_the_nav_bar() {
        assert_eq!(scroll_target(300.0, 1000.0, 60.0), 1220.0);
    }

    #[test]
    fn skip_link_only_shows_on_focus() {
        assert!(skip_link_style(false).contains("top:-40px"));
        assert!(skip_link_style(true).contains("top:6px"));
    }
}

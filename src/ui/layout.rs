use tui::layout::{Constraint, Layout, Rect};

pub const TAB_BAR_HEIGHT: u16 = 3;
pub const LOG_PANE_HEIGHT: u16 = 8;

/// Screen areas for one frame: tab bar, main view, status line, and the log
/// pane when it is toggled on.
pub struct LayoutAreas {
    pub tab_bar: [Rect; 2],
    pub main: Rect,
    pub status: Rect,
    pub logs: Option<Rect>,
}

impl LayoutAreas {
    pub fn new(area: Rect, full_screen: bool, show_logs: bool) -> Self {
        let [body, status] = Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(area);

        let (body, logs) = if show_logs {
            let [body, logs] =
                Layout::vertical([Constraint::Fill(1), Constraint::Length(LOG_PANE_HEIGHT)]).areas(body);
            (body, Some(logs))
        } else {
            (body, None)
        };

        if full_screen {
            return LayoutAreas {
                tab_bar: [Rect::ZERO, Rect::ZERO],
                main: body,
                status,
                logs,
            };
        }

        let [tab, main] =
            Layout::vertical([Constraint::Length(TAB_BAR_HEIGHT), Constraint::Fill(1)]).areas(body);

        LayoutAreas {
            tab_bar: Self::split_tab_bar(tab),
            main,
            status,
            logs,
        }
    }

    fn split_tab_bar(area: Rect) -> [Rect; 2] {
        Layout::horizontal([Constraint::Percentage(85), Constraint::Percentage(15)]).areas(area)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_screen_hides_tab_bar() {
        let areas = LayoutAreas::new(Rect::new(0, 0, 100, 40), true, false);
        assert_eq!(areas.tab_bar, [Rect::ZERO, Rect::ZERO]);
        assert_eq!(areas.main.height, 39);
        assert_eq!(areas.status.y, 39);
    }

    #[test]
    fn log_pane_takes_bottom_rows() {
        let areas = LayoutAreas::new(Rect::new(0, 0, 100, 40), false, true);
        let logs = areas.logs.expect("log pane");
        assert_eq!(logs.height, LOG_PANE_HEIGHT);
        assert_eq!(areas.main.y, TAB_BAR_HEIGHT);
        assert_eq!(areas.main.bottom(), logs.y);
    }
}

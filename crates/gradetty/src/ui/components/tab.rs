use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Tabs as TabsWidget};

use crate::app::Tab;
use crate::ui::Component;

/// Tab row rendered above the list content.
pub struct Tabs {
    current_tab: Tab,
}

impl Tabs {
    pub fn new(current_tab: Tab) -> Self {
        Self { current_tab }
    }
}

impl Component for Tabs {
    fn render(&self, f: &mut Frame, area: Rect) {
        let titles = [Tab::Analyses, Tab::Account, Tab::Support].map(Tab::title);
        let selected = match self.current_tab {
            Tab::Analyses => 0,
            Tab::Account => 1,
            Tab::Support => 2,
        };

        let tabs = TabsWidget::new(titles)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .style(Style::default().fg(Color::Gray))
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .select(selected);

        f.render_widget(tabs, area);
    }
}

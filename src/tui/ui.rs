use crate::core::feature_context::FeatureContext;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{ContentPane, FeaturePicker, NavMain, TitleBar};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::Line;

pub const SIDEBAR_WIDTH: u16 = 28;

const HELP_TEXT: &str = "↑↓ Move  Enter Open  Tab Feature  Ctrl+F Pick  ⌫ Clear  q Quit";

pub fn draw_ui(frame: &mut Frame, app: &App, context: FeatureContext<'_>, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let [title_area, main_area, help_area] =
        Layout::vertical([Length(1), Min(0), Length(1)]).areas(frame.area());
    let [sidebar_area, content_area] =
        Layout::horizontal([Length(SIDEBAR_WIDTH), Min(0)]).areas(main_area);

    TitleBar::new(
        context.current_feature.name.clone(),
        app.status_message.clone(),
    )
    .render(frame, title_area);

    let sidebar_has_focus = tui.feature_picker.is_none();
    NavMain::new(context, &mut tui.sidebar, sidebar_has_focus).render(frame, sidebar_area);
    ContentPane::new(context, app).render(frame, content_area);

    frame.render_widget(
        Line::styled(HELP_TEXT, Style::default().fg(Color::DarkGray)),
        help_area,
    );

    if let Some(picker) = tui.feature_picker.as_mut() {
        FeaturePicker::new(picker).render(frame, frame.area());
    }
}

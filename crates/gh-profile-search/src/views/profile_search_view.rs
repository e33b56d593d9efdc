//! Profile search view
//!
//! Search input on top, profile panel on the left, repository list on the
//! right and a one-line footer with activity and key hints.

use crate::actions::{Action, NavigationAction, SearchAction, TextInputAction};
use crate::capabilities::PanelCapabilities;
use crate::state::{AppState, Focus};
use crate::view_models::{ProfilePanelViewModel, ProfileSearchViewModel};
use crate::views::{View, ViewId};
use gh_profile_search_theme::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

/// The search screen
#[derive(Debug, Clone)]
pub struct ProfileSearchView;

impl ProfileSearchView {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ProfileSearchView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for ProfileSearchView {
    fn view_id(&self) -> ViewId {
        ViewId::ProfileSearch
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        render(state, area, f);
    }

    fn capabilities(&self, state: &AppState) -> PanelCapabilities {
        match state.search.focus {
            Focus::Input => PanelCapabilities::TEXT_INPUT,
            Focus::List => {
                PanelCapabilities::ITEM_NAVIGATION | PanelCapabilities::VIM_NAVIGATION_BINDINGS
            }
        }
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }

    fn translate_navigation(&self, nav: NavigationAction) -> Option<Action> {
        let action = match nav {
            NavigationAction::Next => SearchAction::SelectNext,
            NavigationAction::Previous => SearchAction::SelectPrevious,
            NavigationAction::ToTop => SearchAction::SelectFirst,
            NavigationAction::ToBottom => SearchAction::SelectLast,
        };
        Some(Action::Search(action))
    }

    fn translate_text_input(&self, input: TextInputAction) -> Option<Action> {
        let action = match input {
            TextInputAction::Char(c) => SearchAction::QueryChar(c),
            TextInputAction::Backspace => SearchAction::QueryBackspace,
            TextInputAction::ClearLine => SearchAction::QueryClear,
            TextInputAction::Confirm => SearchAction::Submit,
            TextInputAction::Escape => SearchAction::FocusList,
        };
        Some(Action::Search(action))
    }

    fn accepts_action(&self, action: &Action) -> bool {
        matches!(
            action,
            Action::Search(_) | Action::Navigate(_) | Action::TextInput(_) | Action::Global(_)
        )
    }
}

fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let vm = ProfileSearchViewModel::from_state(state);

    let error_height = if vm.error.is_some() { 1 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),            // Title + description
            Constraint::Length(3),            // Search input
            Constraint::Length(error_height), // Error line
            Constraint::Min(0),               // Profile + repositories
            Constraint::Length(1),            // Footer
        ])
        .split(area);

    render_header(&vm, theme, chunks[0], f);
    render_input(&vm, theme, chunks[1], f);

    if let Some(error) = &vm.error {
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(format!(" {}", error), theme.error()))),
            chunks[2],
        );
    }

    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(chunks[3]);

    render_profile(vm.profile.as_ref(), theme, content[0], f);
    render_repositories(&vm, theme, content[1], f);
    render_footer(&vm, theme, chunks[4], f);
}

fn render_header(vm: &ProfileSearchViewModel, theme: &Theme, area: Rect, f: &mut Frame) {
    let lines = vec![
        Line::from(Span::styled(vm.title.trim().to_string(), theme.panel_title())),
        Line::from(Span::styled(vm.description.clone(), theme.muted())),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

fn render_input(vm: &ProfileSearchViewModel, theme: &Theme, area: Rect, f: &mut Frame) {
    let border_style = if vm.input_focused {
        theme.panel_border()
    } else {
        theme.panel_border_inactive()
    };

    let block = Block::default()
        .title(" Username ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let mut spans = vec![Span::styled(vm.query.clone(), theme.text())];
    if vm.input_focused {
        spans.push(Span::styled("█", theme.key_hint()));
    }

    f.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn render_profile(
    profile: Option<&ProfilePanelViewModel>,
    theme: &Theme,
    area: Rect,
    f: &mut Frame,
) {
    let block = Block::default()
        .title(" Profile ")
        .borders(Borders::ALL)
        .border_style(theme.panel_border_inactive());

    let lines = match profile {
        Some(profile) => {
            let avatar_style = if profile.avatar_allowed {
                theme.link()
            } else {
                theme.muted()
            };
            vec![
                Line::from(Span::styled(profile.login.clone(), theme.section_header())),
                Line::default(),
                Line::from(Span::styled(profile.bio.clone(), theme.text_secondary())),
                Line::default(),
                Line::from(Span::styled("Avatar", theme.muted())),
                Line::from(Span::styled(profile.avatar_url.clone(), avatar_style)),
            ]
        }
        None => vec![Line::from(Span::styled(
            "Type a username and press Enter",
            theme.muted(),
        ))],
    };

    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

fn render_repositories(vm: &ProfileSearchViewModel, theme: &Theme, area: Rect, f: &mut Frame) {
    let border_style = if vm.input_focused {
        theme.panel_border_inactive()
    } else {
        theme.panel_border()
    };

    let block = Block::default()
        .title(vm.list_title.clone())
        .borders(Borders::ALL)
        .border_style(border_style);

    let items: Vec<ListItem> = vm
        .repositories
        .iter()
        .map(|row| {
            let mut lines = vec![Line::from(vec![
                Span::styled(row.name.clone(), theme.text()),
                Span::raw("  "),
                Span::styled(row.stats.clone(), theme.stars()),
            ])];
            if let Some(description) = &row.description {
                lines.push(Line::from(Span::styled(
                    format!("  {}", description),
                    theme.muted(),
                )));
            }
            lines.push(Line::from(Span::styled(
                format!("  {}", row.html_url),
                theme.link(),
            )));
            ListItem::new(Text::from(lines))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(theme.list_selected())
        .highlight_symbol("▶ ");

    let mut list_state = ListState::default();
    list_state.select(vm.selected_index);

    f.render_stateful_widget(list, area, &mut list_state);
}

fn render_footer(vm: &ProfileSearchViewModel, theme: &Theme, area: Rect, f: &mut Frame) {
    let mut spans = Vec::new();

    if let Some(status) = &vm.status {
        spans.push(Span::styled(format!(" {} ", status), theme.warning()));
        spans.push(Span::styled("│", theme.muted()));
    }

    for (key, description) in &vm.hints {
        spans.push(Span::styled(format!(" {}", key), theme.key_hint()));
        spans.push(Span::styled(format!(" {} ", description), theme.key_description()));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

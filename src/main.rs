mod app;
mod config;
mod data;
mod engine;
mod event;
mod store;
mod ui;

use std::io;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use app::{App, AppScreen, CharacterTab};
use config::Config;
use event::{AppEvent, EventHandler};
use ui::components::character_list::CharacterList;
use ui::components::text_panel::TextPanel;
use ui::layout::AppLayout;
use ui::line_input::InputResult;

#[derive(Parser)]
#[command(name = "matchlab", version, about = "Terminal matchup notebook for fighting-game practice")]
struct Cli {
    #[arg(short, long, help = "Theme name")]
    theme: Option<String>,

    #[arg(short, long, help = "Directory with characters.json / nicknames.json / applekill.json / notes.txt")]
    data_dir: Option<String>,

    #[arg(value_name = "CHARACTER", help = "Character (or nickname) to open at startup")]
    character: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load().unwrap_or_default();
    if let Some(theme) = cli.theme {
        config.theme = theme;
    }
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }

    let mut app = App::new(config);

    if let Some(character) = cli.character {
        match app.set_character(&character) {
            Ok(()) => app.go_to_character(),
            Err(e) => app.set_error(e),
        }
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(Duration::from_millis(100));

    let result = run_app(&mut terminal, &mut app, &events);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            AppEvent::Key(key) => handle_key(app, key),
            AppEvent::Tick | AppEvent::Resize => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match app.screen {
        AppScreen::Menu => handle_menu_key(app, key),
        AppScreen::Lookup => handle_lookup_key(app, key),
        AppScreen::Character => handle_character_key(app, key),
        AppScreen::Practice => handle_practice_key(app, key),
        AppScreen::Roster => handle_roster_key(app, key),
        AppScreen::Settings => handle_settings_key(app, key),
    }
}

fn handle_menu_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Char('1') => app.open_lookup(),
        KeyCode::Char('2') => app.go_to_practice(),
        KeyCode::Char('3') => app.go_to_roster(),
        KeyCode::Char('s') => app.go_to_settings(),
        KeyCode::Up | KeyCode::Char('k') => app.menu.prev(),
        KeyCode::Down | KeyCode::Char('j') => app.menu.next(),
        KeyCode::Enter => match app.menu.selected {
            0 => app.open_lookup(),
            1 => app.go_to_practice(),
            2 => app.go_to_roster(),
            3 => app.go_to_settings(),
            _ => {}
        },
        _ => {}
    }
}

fn handle_lookup_key(app: &mut App, key: KeyEvent) {
    match app.input.handle(key, &app.completion_candidates) {
        InputResult::Submit => {
            let value = app.input.value().to_string();
            match app.set_character(&value) {
                Ok(()) => app.go_to_character(),
                Err(e) => app.set_error(e),
            }
        }
        InputResult::Cancel => {
            if app.selected.is_some() {
                app.go_to_character();
            } else {
                app.go_to_menu();
            }
        }
        InputResult::Continue => {}
    }
}

fn handle_character_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.go_to_menu(),
        KeyCode::Tab => app.cycle_tab(),
        KeyCode::Char('1') => app.set_tab(CharacterTab::Notes),
        KeyCode::Char('2') => app.set_tab(CharacterTab::AppleKills),
        KeyCode::Char('3') => app.set_tab(CharacterTab::Punishes),
        KeyCode::Char('a') => app.add_selected_to_practice(),
        KeyCode::Char('x') | KeyCode::Delete => app.remove_selected_from_practice(),
        KeyCode::Char('/') | KeyCode::Char('c') => app.open_lookup(),
        KeyCode::Down | KeyCode::Char('j') => {
            let max = app
                .current_panel_text()
                .as_str()
                .lines()
                .count()
                .saturating_sub(1) as u16;
            app.panel_scroll = (app.panel_scroll + 1).min(max);
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.panel_scroll = app.panel_scroll.saturating_sub(1);
        }
        _ => {}
    }
}

fn handle_practice_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.go_to_menu(),
        KeyCode::Down | KeyCode::Char('j') => {
            if !app.practice.is_empty() {
                app.practice_selected = (app.practice_selected + 1).min(app.practice.len() - 1);
            }
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.practice_selected = app.practice_selected.saturating_sub(1);
        }
        KeyCode::Char('x') | KeyCode::Delete => app.remove_practice_at_selection(),
        KeyCode::Enter => {
            let rows = app.practice_rows();
            if let Some(row) = rows.get(app.practice_selected) {
                let name = row.name.clone();
                let _ = app.set_character(&name);
                app.go_to_character();
            }
        }
        KeyCode::Char('/') => app.open_lookup(),
        _ => {}
    }
}

fn handle_roster_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.go_to_menu(),
        KeyCode::Down | KeyCode::Char('j') => {
            let len = app.data.roster.len();
            if len > 0 {
                app.roster_selected = (app.roster_selected + 1).min(len - 1);
            }
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.roster_selected = app.roster_selected.saturating_sub(1);
        }
        KeyCode::Enter => app.select_roster_row(),
        KeyCode::Char('a') => {
            let rows = app.roster_rows();
            if let Some(row) = rows.get(app.roster_selected) {
                let name = row.name.clone();
                app.add_to_practice(&name);
            }
        }
        KeyCode::Char('x') | KeyCode::Delete => {
            let rows = app.roster_rows();
            if let Some(row) = rows.get(app.roster_selected) {
                let name = row.name.clone();
                app.remove_from_practice(&name);
            }
        }
        KeyCode::Char('/') => app.open_lookup(),
        _ => {}
    }
}

fn handle_settings_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => {
            let _ = app.config.save();
            app.go_to_menu();
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.settings_selected = app.settings_selected.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if app.settings_selected < 4 {
                app.settings_selected += 1;
            }
        }
        KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => {
            if app.settings_selected == 0 {
                app.settings_cycle_theme(true);
            }
        }
        KeyCode::Left | KeyCode::Char('h') => {
            if app.settings_selected == 0 {
                app.settings_cycle_theme(false);
            }
        }
        _ => {}
    }
}

// --- rendering ---

fn render(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let bg = Block::default().style(Style::default().bg(colors.bg()));
    frame.render_widget(bg, area);

    match app.screen {
        AppScreen::Menu => render_menu(frame, app),
        AppScreen::Lookup => render_lookup(frame, app),
        AppScreen::Character => render_character(frame, app),
        AppScreen::Practice => render_practice(frame, app),
        AppScreen::Roster => render_roster(frame, app),
        AppScreen::Settings => render_settings(frame, app),
    }
}

fn render_header(frame: &mut ratatui::Frame, app: &App, area: Rect, context: &str) {
    let colors = &app.theme.colors;

    let info = format!(
        " {} | Main: {} | {} practicing{}",
        app.config.player_name,
        app.config.main_character,
        app.practice.len(),
        context,
    );
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            " matchlab ",
            Style::default()
                .fg(colors.header_fg())
                .bg(colors.header_bg())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            info,
            Style::default().fg(colors.text_dim()).bg(colors.header_bg()),
        ),
    ]))
    .style(Style::default().bg(colors.header_bg()));
    frame.render_widget(header, area);
}

/// Footer shows the last action's outcome when there is one, key hints
/// otherwise.
fn render_footer(frame: &mut ratatui::Frame, app: &App, area: Rect, hints: &str) {
    let colors = &app.theme.colors;

    let line = if let Some(ref status) = app.status {
        let color = if app.status_is_error {
            colors.error()
        } else {
            colors.success()
        };
        Line::from(Span::styled(format!(" {status}"), Style::default().fg(color)))
    } else {
        Line::from(Span::styled(
            format!(" {hints}"),
            Style::default().fg(colors.text_dim()),
        ))
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn render_menu(frame: &mut ratatui::Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    render_header(frame, app, layout.header, "");

    let menu_area = ui::layout::centered_rect(50, 80, layout.main);
    frame.render_widget(&app.menu, menu_area);

    render_footer(frame, app, layout.footer, "[1-3] Open  [s] Settings  [q] Quit");
}

fn render_lookup(frame: &mut ratatui::Frame, app: &App) {
    let layout = AppLayout::new(frame.area());
    let colors = &app.theme.colors;

    render_header(frame, app, layout.header, "");

    let popup = ui::layout::centered_rect(50, 30, layout.main);
    let block = Block::bordered()
        .title(" Set Character ")
        .border_style(Style::default().fg(colors.border_focused()))
        .style(Style::default().bg(colors.bg()));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let (before, cursor_char, after) = app.input.render_parts();
    let mut spans = vec![
        Span::styled(" > ", Style::default().fg(colors.accent())),
        Span::styled(before.to_string(), Style::default().fg(colors.fg())),
    ];
    match cursor_char {
        Some(ch) => {
            spans.push(Span::styled(
                ch.to_string(),
                Style::default().fg(colors.cursor_fg()).bg(colors.cursor_bg()),
            ));
            spans.push(Span::styled(after.to_string(), Style::default().fg(colors.fg())));
        }
        None => {
            spans.push(Span::styled(
                " ",
                Style::default().bg(colors.cursor_bg()),
            ));
        }
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), rows[0]);

    let current = match app.selected {
        Some(ref name) => format!(" Selected: {name}"),
        None => " No character selected".to_string(),
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            current,
            Style::default().fg(colors.text_dim()),
        ))),
        rows[2],
    );

    render_footer(
        frame,
        app,
        layout.footer,
        "[Tab] Complete  [Enter] Set  [Esc] Back",
    );
}

fn render_character(frame: &mut ratatui::Frame, app: &App) {
    let layout = AppLayout::new(frame.area());
    let colors = &app.theme.colors;

    let context = match app.selected {
        Some(ref name) => format!(" | Selected: {name}"),
        None => " | No character selected".to_string(),
    };
    render_header(frame, app, layout.header, &context);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(3)])
        .split(layout.main);

    // Tab bar
    let tabs = [
        CharacterTab::Notes,
        CharacterTab::AppleKills,
        CharacterTab::Punishes,
    ];
    let mut tab_spans: Vec<Span> = vec![Span::raw(" ")];
    for (i, tab) in tabs.iter().enumerate() {
        let active = *tab == app.tab;
        let style = if active {
            Style::default()
                .fg(colors.accent())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors.text_dim())
        };
        tab_spans.push(Span::styled(format!("[{}] {}", i + 1, tab.title()), style));
        tab_spans.push(Span::raw("  "));
    }
    frame.render_widget(Paragraph::new(Line::from(tab_spans)), rows[0]);

    let title = match app.selected {
        Some(ref name) => format!("{} — {}", name, app.tab.title()),
        None => app.tab.title().to_string(),
    };
    let text = app.current_panel_text();
    let mut panel = TextPanel::new(&title, text.as_str(), app.panel_scroll, app.theme);
    if text.is_placeholder() {
        panel = panel.dimmed();
    }
    frame.render_widget(panel, rows[1]);

    render_footer(
        frame,
        app,
        layout.footer,
        "[Tab/1-3] View  [a] Practice+  [x] Practice-  [/] Lookup  [j/k] Scroll  [Esc] Menu",
    );
}

fn render_practice(frame: &mut ratatui::Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    render_header(frame, app, layout.header, "");

    let list = CharacterList::new(
        "Practice List",
        app.practice_rows(),
        app.practice_selected,
        app.theme,
    );
    frame.render_widget(&list, layout.main);

    render_footer(
        frame,
        app,
        layout.footer,
        "[j/k] Move  [Enter] Open  [x] Remove  [/] Lookup  [Esc] Menu",
    );
}

fn render_roster(frame: &mut ratatui::Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    render_header(frame, app, layout.header, "");

    let list = CharacterList::new(
        "Full Roster",
        app.roster_rows(),
        app.roster_selected,
        app.theme,
    );
    frame.render_widget(&list, layout.main);

    render_footer(
        frame,
        app,
        layout.footer,
        "[j/k] Move  [Enter] Open  [a] Practice+  [x] Practice-  [Esc] Menu",
    );
}

fn render_settings(frame: &mut ratatui::Frame, app: &App) {
    let layout = AppLayout::new(frame.area());
    let colors = &app.theme.colors;

    render_header(frame, app, layout.header, "");

    let centered = ui::layout::centered_rect(60, 80, layout.main);
    let block = Block::bordered()
        .title(" Settings ")
        .border_style(Style::default().fg(colors.accent()))
        .style(Style::default().bg(colors.bg()));
    let inner = block.inner(centered);
    block.render(centered, frame.buffer_mut());

    let fields: Vec<(String, String, bool)> = vec![
        ("Theme".to_string(), app.config.theme.clone(), true),
        ("Player".to_string(), app.config.player_name.clone(), false),
        ("Main".to_string(), app.config.main_character.clone(), false),
        ("Data dir".to_string(), app.config.data_dir.clone(), false),
        (
            "Punish header".to_string(),
            app.config.punish_header.clone(),
            false,
        ),
    ];

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(fields.len() as u16 * 2),
            Constraint::Min(0),
        ])
        .split(inner);

    let help = Paragraph::new(Line::from(Span::styled(
        "  Arrows move, Left/Right change theme, ESC saves. Other fields: edit config.toml",
        Style::default().fg(colors.text_dim()),
    )));
    help.render(rows[0], frame.buffer_mut());

    let field_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            fields
                .iter()
                .map(|_| Constraint::Length(2))
                .collect::<Vec<_>>(),
        )
        .split(rows[1]);

    for (i, (label, value, editable)) in fields.iter().enumerate() {
        let is_selected = i == app.settings_selected;
        let indicator = if is_selected { " > " } else { "   " };
        let value_text = if *editable {
            format!("{indicator}{label}:  < {value} >")
        } else {
            format!("{indicator}{label}:  {value}")
        };

        let style = Style::default()
            .fg(if is_selected { colors.accent() } else { colors.fg() })
            .add_modifier(if is_selected {
                Modifier::BOLD
            } else {
                Modifier::empty()
            });
        Paragraph::new(Line::from(Span::styled(value_text, style)))
            .render(field_layout[i], frame.buffer_mut());
    }

    render_footer(frame, app, layout.footer, "[ESC] Save & back");
}

//! UI rendering using ratatui
//!
//! One view, three stages:
//! - Setup: name entry, player list, start control
//! - Reveal: one card per player, dragged up to uncover the word
//! - Summary: players in the round, new word / edit players

use crate::app::{App, SetupFocus, Stage, SummaryOption};
use crate::game::reveal::FULL_PROGRESS;
use crate::game::validation::MIN_PLAYERS;
use crate::game::Assignment;
use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

/// Widest the reveal card gets
const CARD_MAX_WIDTH: u16 = 44;

/// Render the screen for the current stage
pub fn render(frame: &mut Frame, app: &App) {
    match app.stage() {
        Stage::Setup => render_setup(frame, app),
        Stage::Reveal => render_reveal(frame, app),
        Stage::Summary => render_summary(frame, app),
    }
}

/// Render the setup screen
fn render_setup(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title + instructions
            Constraint::Length(3), // Name input
            Constraint::Length(1), // Error
            Constraint::Length(1), // Player count
            Constraint::Min(3),    // Player list
            Constraint::Length(3), // Start
            Constraint::Length(1), // Footer
        ])
        .margin(1)
        .split(area);

    let title = Paragraph::new(vec![
        Line::from("IMPOSTOR").style(Style::default().fg(Color::Yellow).bold()),
        Line::from("Add everyone's name. When the game starts we pick a secret word and an impostor at random.")
            .style(Style::default().fg(Color::DarkGray)),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    frame.render_widget(title, layout[0]);

    // Name input
    let input_focused = app.focus == SetupFocus::NameInput;
    let input_text = if input_focused {
        format!("> {}_", app.name_input)
    } else {
        format!("> {}", app.name_input)
    };
    let input = Paragraph::new(input_text)
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(focus_style(input_focused))
                .title("Player name (Enter to add)"),
        );
    frame.render_widget(input, layout[1]);

    // Inline error
    if let Some(error) = app.error() {
        let error = Paragraph::new(error.to_string()).style(Style::default().fg(Color::Red));
        frame.render_widget(error, layout[2]);
    }

    // Player count
    let count = app.players().len();
    let count_line = Line::from(vec![
        Span::styled("Players  ", Style::default().fg(Color::White).bold()),
        Span::styled(player_count_label(count), Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(count_line), layout[3]);

    // Player list
    let list_focused = app.focus == SetupFocus::PlayerList;
    let list_block = Block::default()
        .borders(Borders::ALL)
        .border_style(focus_style(list_focused))
        .title("Del removes the highlighted player");

    if app.players().is_empty() {
        let empty = Paragraph::new(format!(
            "No players yet. Add at least {} to start.",
            number_word(MIN_PLAYERS)
        ))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(list_block);
        frame.render_widget(empty, layout[4]);
    } else {
        let items: Vec<ListItem> = app
            .players()
            .iter()
            .enumerate()
            .map(|(i, player)| {
                let highlighted = list_focused && i == app.selected_player;
                let prefix = if highlighted { "> " } else { "  " };
                let style = if highlighted {
                    Style::default().fg(Color::Yellow).bold()
                } else {
                    Style::default().fg(Color::White)
                };
                ListItem::new(format!("{}{}", prefix, player.name)).style(style)
            })
            .collect();
        frame.render_widget(List::new(items).block(list_block), layout[4]);
    }

    // Start
    let start_focused = app.focus == SetupFocus::StartButton;
    let start = Paragraph::new(vec![
        Line::from(format!(
            "You need at least {} players to start the game.",
            number_word(MIN_PLAYERS)
        ))
        .style(Style::default().fg(Color::Gray)),
        Line::from(button("Start game", app.is_ready_to_play(), start_focused)),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(start, layout[5]);

    let footer = Paragraph::new("Tab Switch  Enter Add/Start  ↑↓ Select  Esc Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, layout[6]);
}

/// Layout of the reveal screen: header, card, next, hint, footer
fn reveal_layout(area: Rect) -> [Rect; 5] {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Turn, name, instructions
            Constraint::Min(8),    // Card
            Constraint::Length(1), // Next
            Constraint::Length(1), // Hint
            Constraint::Length(1), // Footer
        ])
        .margin(1)
        .split(area);

    let card = centered_width(layout[1], CARD_MAX_WIDTH);
    [layout[0], card, layout[2], layout[3], layout[4]]
}

/// Where the reveal card sits on a screen of the given size
pub fn reveal_card_area(area: Rect) -> Rect {
    reveal_layout(area)[1]
}

/// Render the reveal screen for the current card
fn render_reveal(frame: &mut Frame, app: &App) {
    let Some(assignment) = app.current_assignment() else {
        return;
    };
    let [header_area, card_area, next_area, hint_area, footer_area] = reveal_layout(frame.area());

    let header = Paragraph::new(vec![
        Line::from(format!("TURN {} OF {}", app.position(), app.assignments().len()))
            .style(Style::default().fg(Color::DarkGray)),
        Line::from(assignment.player.name.as_str())
            .style(Style::default().fg(Color::White).bold()),
        Line::from("Pass the device to this player. Press and drag the card up to see the secret word.")
            .style(Style::default().fg(Color::DarkGray)),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    frame.render_widget(header, header_area);

    render_card(frame, card_area, assignment, app);

    let label = if app.is_last_card() {
        "Done"
    } else {
        "Pass to next player"
    };
    let next = Paragraph::new(Line::from(button(label, app.can_advance(), true)))
        .alignment(Alignment::Center);
    frame.render_widget(next, next_area);

    if !app.gesture().has_peeked() {
        let hint = Paragraph::new("The button unlocks once the card has been lifted all the way.")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(hint, hint_area);
    }

    let footer = Paragraph::new("Drag up with the mouse, or Space + ↑↓  Enter Next  Esc Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, footer_area);
}

/// Render the card: the word underneath, the cover sliding up over it
fn render_card(frame: &mut Frame, area: Rect, assignment: &Assignment, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" WORD ")
        .title_alignment(Alignment::Center);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let gesture = app.gesture();
    if gesture.word_visible() {
        let word_color = if assignment.is_impostor {
            Color::Red
        } else {
            Color::White
        };
        let mut lines = vec![Line::from(assignment.word.as_str())
            .style(Style::default().fg(word_color).bold())];
        if assignment.is_impostor {
            lines.push(Line::default());
            lines.push(
                Line::from("You are the impostor!").style(Style::default().fg(Color::Red).bold()),
            );
        }
        let top = inner.height.saturating_sub(lines.len() as u16) / 2;
        let word_area = Rect::new(inner.x, inner.y + top, inner.width, inner.height - top);
        let word = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(word, word_area);
    }

    let covered = cover_height(inner.height, gesture.progress());
    if covered == 0 {
        return;
    }
    let cover_area = Rect::new(inner.x, inner.y, inner.width, covered);
    frame.render_widget(Clear, cover_area);

    let cover_style = Style::default().bg(Color::DarkGray).fg(Color::White);
    let mut cover_lines = Vec::new();
    if covered >= 3 {
        cover_lines.resize(usize::from(covered.saturating_sub(2) / 2), Line::default());
        cover_lines.push(Line::from("↑").bold());
        cover_lines.push(Line::from("DRAG UP").bold());
    }
    let cover = Paragraph::new(cover_lines)
        .style(cover_style)
        .alignment(Alignment::Center);
    frame.render_widget(cover, cover_area);
}

/// Rows of the card still covered at the given progress
fn cover_height(height: u16, progress: u8) -> u16 {
    let remaining = u32::from(FULL_PROGRESS - progress.min(FULL_PROGRESS));
    (u32::from(height) * remaining / u32::from(FULL_PROGRESS)) as u16
}

/// Render the end-of-round summary
fn render_summary(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title + prompt
            Constraint::Min(4),    // Players
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Options
            Constraint::Length(1), // Footer
        ])
        .margin(1)
        .split(area);

    let title = Paragraph::new(vec![
        Line::from("Everyone is ready!").style(Style::default().fg(Color::Green).bold()),
        Line::from("Start talking and try to find out who the impostor is.")
            .style(Style::default().fg(Color::DarkGray)),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    frame.render_widget(title, layout[0]);

    let items: Vec<ListItem> = app
        .players()
        .iter()
        .map(|p| ListItem::new(format!("  ● {}", p.name)).style(Style::default().fg(Color::White)))
        .collect();
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title("Players this round"),
    );
    frame.render_widget(list, layout[1]);

    let mut spans = Vec::new();
    for (i, option) in SummaryOption::all().iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("   "));
        }
        spans.push(button(option.label(), true, i == app.summary_selected));
    }
    let options = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(options, layout[3]);

    let footer = Paragraph::new("←→ Select  Enter Confirm  N New word  E Edit players  Esc Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, layout[4]);
}

/// A bracketed button label
fn button(label: &str, enabled: bool, focused: bool) -> Span<'static> {
    let text = if focused && enabled {
        format!("> [ {} ] <", label)
    } else {
        format!("[ {} ]", label)
    };
    let style = match (enabled, focused) {
        (false, _) => Style::default().fg(Color::DarkGray),
        (true, true) => Style::default().fg(Color::Black).bg(Color::Yellow).bold(),
        (true, false) => Style::default().fg(Color::White),
    };
    Span::styled(text, style)
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Horizontally centre a column of at most `width` cells
fn centered_width(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect::new(area.x + (area.width - width) / 2, area.y, width, area.height)
}

/// "1 player", "3 players"
fn player_count_label(count: usize) -> String {
    if count == 1 {
        "1 player".to_string()
    } else {
        format!("{} players", count)
    }
}

fn number_word(n: usize) -> String {
    match n {
        2 => "two".to_string(),
        3 => "three".to_string(),
        4 => "four".to_string(),
        _ => n.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::game::words::WordList;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use ratatui::backend::TestBackend;

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(90, 32)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn app_with_players(names: &[&str]) -> App {
        let mut app = App::with_rng(
            &Config::default(),
            WordList::from_words(["Volcano"]),
            StdRng::seed_from_u64(11),
        );
        for name in names {
            app.name_input = name.to_string();
            app.submit_name();
        }
        app
    }

    #[test]
    fn test_player_count_label() {
        assert_eq!(player_count_label(0), "0 players");
        assert_eq!(player_count_label(1), "1 player");
        assert_eq!(player_count_label(2), "2 players");
    }

    #[test]
    fn test_cover_height() {
        assert_eq!(cover_height(10, 0), 10);
        assert_eq!(cover_height(10, 50), 5);
        assert_eq!(cover_height(10, 100), 0);
        assert_eq!(cover_height(10, 250), 0);
    }

    #[test]
    fn test_centered_width() {
        let area = Rect::new(2, 3, 100, 10);
        let centered = centered_width(area, 40);
        assert_eq!(centered, Rect::new(32, 3, 40, 10));
        assert_eq!(centered_width(Rect::new(0, 0, 20, 5), 40).width, 20);
    }

    #[test]
    fn test_card_area_inside_screen() {
        let area = Rect::new(0, 0, 90, 32);
        let card = reveal_card_area(area);
        assert!(card.width <= CARD_MAX_WIDTH);
        assert!(card.height >= 8);
        assert_eq!(area.intersection(card), card);
    }

    #[test]
    fn test_setup_render_empty() {
        let app = app_with_players(&[]);
        let text = screen_text(&app);
        assert!(text.contains("IMPOSTOR"));
        assert!(text.contains("No players yet"));
        assert!(text.contains("0 players"));
    }

    #[test]
    fn test_setup_render_lists_players_and_error() {
        let mut app = app_with_players(&["Ana", "Bea"]);
        app.start_game();
        let text = screen_text(&app);
        assert!(text.contains("Ana"));
        assert!(text.contains("Bea"));
        assert!(text.contains("2 players"));
        assert!(text.contains("You need at least 3 players to start."));
    }

    #[test]
    fn test_reveal_render_hides_word() {
        let mut app = app_with_players(&["Ana", "Bea", "Carla"]);
        app.start_game();
        let text = screen_text(&app);
        let name = &app.current_assignment().unwrap().player.name;
        assert!(text.contains("TURN 1 OF 3"));
        assert!(text.contains(name.as_str()));
        assert!(text.contains("Pass to next player"));
        assert!(!text.contains("Volcano"));
        assert!(!text.contains("You are the impostor!"));
    }

    #[test]
    fn test_reveal_render_shows_word_while_held() {
        let mut app = app_with_players(&["Ana", "Bea", "Carla"]);
        app.start_game();
        app.pointer_down(30);
        app.pointer_move(0);
        let text = screen_text(&app);
        let word = &app.current_assignment().unwrap().word;
        assert!(text.contains(word.as_str()));
    }

    #[test]
    fn test_reveal_render_keeps_word_spelling() {
        let mut app = App::with_rng(
            &Config::default(),
            WordList::from_words(["Ping Pong"]),
            StdRng::seed_from_u64(11),
        );
        for name in ["Ana", "Bea", "Carla"] {
            app.name_input = name.to_string();
            app.submit_name();
        }
        app.start_game();
        while app.current_assignment().unwrap().is_impostor {
            app.pointer_down(30);
            app.pointer_move(0);
            app.pointer_up();
            app.advance_player();
        }
        app.pointer_down(30);
        app.pointer_move(0);
        let text = screen_text(&app);
        assert!(text.contains("Ping Pong"));
        assert!(!text.contains("PING PONG"));
    }

    #[test]
    fn test_reveal_render_last_card_label() {
        let mut app = app_with_players(&["Ana", "Bea", "Carla"]);
        app.start_game();
        for _ in 0..2 {
            app.pointer_down(30);
            app.pointer_move(0);
            app.pointer_up();
            app.advance_player();
        }
        let text = screen_text(&app);
        assert!(text.contains("TURN 3 OF 3"));
        assert!(text.contains("Done"));
    }

    #[test]
    fn test_summary_render() {
        let mut app = app_with_players(&["Ana", "Bea", "Carla"]);
        app.start_game();
        while app.stage() == Stage::Reveal {
            app.pointer_down(30);
            app.pointer_move(0);
            app.pointer_up();
            app.advance_player();
        }
        let text = screen_text(&app);
        assert!(text.contains("Everyone is ready!"));
        assert!(text.contains("New word"));
        assert!(text.contains("Edit players"));
        assert!(text.contains("Carla"));
        assert!(!text.contains("Volcano"));
    }
}

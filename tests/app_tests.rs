// App-level tests: key handling, demo teardown and rendering

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use quinn_deck::config::Config;
use quinn_deck::deck::PROMPT_SLIDE;
use quinn_deck::demo::Phase;
use quinn_deck::nav::Direction;
use quinn_deck::ui::keymap::Action;
use quinn_deck::ui::App;
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};
use std::time::{Duration, Instant};

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn still_config() -> Config {
    Config {
        animations: false,
        ..Config::default()
    }
}

fn draw(app: &mut App, now: Instant, width: u16, height: u16) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("test terminal");
    terminal
        .draw(|f| app.render(f, now))
        .expect("draw into test backend");
    terminal.backend().buffer().clone()
}

fn screen_text(buffer: &Buffer) -> String {
    let width = buffer.area.width as usize;
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_new_app_opens_on_first_slide() {
    let app = App::new(&Config::default(), Instant::now()).expect("default config is valid");
    assert_eq!(app.nav.current_index(), 0);
    assert_eq!(app.demo.phase(), Phase::Idle);
    assert!(app.transition.is_none());
    assert!(!app.should_quit);
}

#[test]
fn test_new_app_honours_start_slide() {
    let config = Config {
        start_slide: 4,
        ..Config::default()
    };
    let app = App::new(&config, Instant::now()).expect("valid start slide");
    assert_eq!(app.nav.current_index(), 3);
}

#[test]
fn test_new_app_rejects_bad_start_slide() {
    let config = Config {
        start_slide: 7,
        ..Config::default()
    };
    assert!(App::new(&config, Instant::now()).is_err());
}

#[test]
fn test_new_app_rejects_tiny_demo_speed() {
    let mut config = Config::default();
    config.demo.speed = 1e-20;
    assert!(App::new(&config, Instant::now()).is_err());
}

#[test]
fn test_arrow_keys_navigate_and_start_transition() {
    let now = Instant::now();
    let mut app = App::new(&Config::default(), now).expect("app");

    app.handle_key_event(press(KeyCode::Right), now);
    assert_eq!(app.nav.current_index(), 1);
    assert_eq!(app.nav.direction(), Direction::Forward);
    assert!(app.transition.is_some());
    assert_eq!(app.entered_at, now);

    app.handle_key_event(press(KeyCode::Left), now);
    assert_eq!(app.nav.current_index(), 0);
    assert_eq!(app.nav.direction(), Direction::Backward);

    app.handle_key_event(press(KeyCode::Left), now);
    assert_eq!(app.nav.current_index(), 0);
}

#[test]
fn test_key_release_is_ignored() {
    let now = Instant::now();
    let mut app = App::new(&Config::default(), now).expect("app");
    let release = KeyEvent::new_with_kind(KeyCode::Right, KeyModifiers::NONE, KeyEventKind::Release);
    app.handle_key_event(release, now);
    assert_eq!(app.nav.current_index(), 0);
}

#[test]
fn test_number_keys_jump_and_quit_keys() {
    let now = Instant::now();
    let mut app = App::new(&Config::default(), now).expect("app");

    app.handle_key_event(press(KeyCode::Char('5')), now);
    assert_eq!(app.nav.current_index(), 4);
    app.handle_key_event(press(KeyCode::Char('9')), now);
    assert_eq!(app.nav.current_index(), 4);
    app.handle_key_event(press(KeyCode::End), now);
    assert_eq!(app.nav.current_index(), 5);
    app.handle_key_event(press(KeyCode::Home), now);
    assert_eq!(app.nav.current_index(), 0);

    app.handle_key_event(press(KeyCode::Char('q')), now);
    assert!(app.should_quit);
}

#[test]
fn test_demo_only_starts_on_prompt_slide() {
    let now = Instant::now();
    let mut app = App::new(&still_config(), now).expect("app");
    app.apply(Action::StartDemo, now);
    assert_eq!(app.demo.phase(), Phase::Idle);

    app.apply(Action::GoTo(PROMPT_SLIDE), now);
    app.apply(Action::StartDemo, now);
    assert_eq!(app.demo.phase(), Phase::Running);
    // the first step is shown immediately
    assert_eq!(app.demo.state().cursor, Some(0));
}

#[test]
fn test_demo_waits_for_prompt_to_finish_typing() {
    let t0 = Instant::now();
    let mut app = App::new(&Config::default(), t0).expect("app");
    app.apply(Action::GoTo(PROMPT_SLIDE), t0);
    assert!(app.typewriter.is_typing(t0));

    app.handle_key_event(press(KeyCode::Enter), t0);
    assert_eq!(app.demo.phase(), Phase::Idle);

    let typed = app.typewriter.finishes_at();
    app.handle_key_event(press(KeyCode::Enter), typed);
    assert_eq!(app.demo.phase(), Phase::Running);
}

#[test]
fn test_tick_advances_demo_and_status() {
    let t0 = Instant::now();
    let mut app = App::new(&still_config(), t0).expect("app");
    app.apply(Action::GoTo(PROMPT_SLIDE), t0);
    app.apply(Action::StartDemo, t0);

    app.tick(t0 + Duration::from_millis(1800));
    assert_eq!(app.demo.state().cursor, Some(1));
    assert_eq!(app.status_message, "Demo step 2/7");

    app.tick(t0 + Duration::from_secs(30));
    assert_eq!(app.demo.phase(), Phase::Finished);
    assert_eq!(app.status_message, "Escalation email ready");
}

#[test]
fn test_leaving_prompt_slide_resets_demo() {
    let t0 = Instant::now();
    let mut app = App::new(&still_config(), t0).expect("app");
    app.apply(Action::GoTo(PROMPT_SLIDE), t0);
    app.apply(Action::StartDemo, t0);
    app.tick(t0 + Duration::from_millis(2000));
    assert_eq!(app.demo.state().cursor, Some(1));

    app.handle_key_event(press(KeyCode::Right), t0 + Duration::from_millis(2100));
    assert_eq!(app.demo.phase(), Phase::Idle);

    // pending steps of the abandoned run never land
    app.tick(t0 + Duration::from_secs(30));
    assert_eq!(app.demo.state().cursor, None);
    assert!(!app.demo.state().artifact_revealed);
}

#[test]
fn test_returning_to_prompt_restarts_typing() {
    let t0 = Instant::now();
    let mut app = App::new(&Config::default(), t0).expect("app");
    app.apply(Action::GoTo(PROMPT_SLIDE), t0);
    let later = app.typewriter.finishes_at() + Duration::from_secs(1);
    assert!(!app.typewriter.is_typing(later));

    app.apply(Action::Next, later);
    app.apply(Action::Prev, later);
    assert!(app.typewriter.is_typing(later));
}

#[test]
fn test_reset_key_returns_demo_to_idle() {
    let t0 = Instant::now();
    let mut app = App::new(&still_config(), t0).expect("app");
    app.apply(Action::GoTo(PROMPT_SLIDE), t0);
    app.apply(Action::StartDemo, t0);

    app.handle_key_event(press(KeyCode::Char('r')), t0 + Duration::from_millis(500));
    assert_eq!(app.demo.phase(), Phase::Idle);
    assert_eq!(app.nav.current_index(), PROMPT_SLIDE);
}

#[test]
fn test_every_slide_renders() {
    let now = Instant::now();
    let mut app = App::new(&still_config(), now).expect("app");
    let titles = [
        "Q U I N N",
        "The Friction",
        "Scheduling Assistant",
        "Brain",
        "doesn't give up",
        "The Impact",
    ];
    for (index, title) in titles.iter().enumerate() {
        app.apply(Action::GoTo(index), now);
        let text = screen_text(&draw(&mut app, now, 140, 48));
        assert!(text.contains(title), "slide {} is missing {:?}", index + 1, title);
        assert!(text.contains(&format!("{} / 6", index + 1)));
    }
}

#[test]
fn test_render_survives_tiny_terminal() {
    let now = Instant::now();
    let mut app = App::new(&still_config(), now).expect("app");
    for index in 0..6 {
        app.apply(Action::GoTo(index), now);
        draw(&mut app, now, 12, 6);
    }
}

#[test]
fn test_finished_demo_shows_email() {
    let t0 = Instant::now();
    let mut app = App::new(&still_config(), t0).expect("app");
    app.apply(Action::GoTo(PROMPT_SLIDE), t0);
    app.apply(Action::StartDemo, t0);
    let done = t0 + Duration::from_secs(30);
    app.tick(done);

    let text = screen_text(&draw(&mut app, done, 140, 60));
    assert!(text.contains("Escalation email generated"));
    assert!(text.contains("SUGGESTED SLOTS"));
}

#[test]
fn test_clicking_a_tab_jumps_to_its_slide() {
    let now = Instant::now();
    let mut app = App::new(&still_config(), now).expect("app");
    draw(&mut app, now, 140, 40);

    let (rect, index) = app.hit_regions.tabs[3];
    assert_eq!(index, 3);
    let click = MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: rect.x + 1,
        row: rect.y,
        modifiers: KeyModifiers::NONE,
    };
    app.handle_mouse_event(click, now);
    assert_eq!(app.nav.current_index(), 3);

    let next = app.hit_regions.next;
    let click = MouseEvent {
        column: next.x,
        row: next.y,
        ..click
    };
    app.handle_mouse_event(click, now);
    assert_eq!(app.nav.current_index(), 4);
}

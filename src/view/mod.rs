//! Terminal UI shell (impure).
//!
//! Owns the terminal, the event loop, and every side effect: raw mode,
//! reloads, theme persistence. All decisions are delegated to the pure
//! state types; the shell translates key events into state transitions and
//! redraws.

pub mod carousel;
pub mod help;
pub mod image_overlay;
pub mod layout;
pub mod styles;
pub mod timeline;

use crate::config::{save_theme, KeyBindings, ResolvedConfig};
use crate::model::{AppError, KeyAction};
use crate::parser::parse_portfolio;
use crate::source::DocumentSource;
use crate::state::{system_prefers_dark, AppState};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use layout::LayoutMetrics;
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;
use std::io;
use std::time::Duration;
use styles::{ColorConfig, Palette};
use tracing::{debug, info, warn};

/// How long the event loop waits for input before redrawing.
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Load the document from `source` and run the UI until quit.
///
/// # Errors
///
/// Fails on unreadable input, an unparseable document, or terminal I/O.
pub fn run_with_source(
    source: DocumentSource,
    config: ResolvedConfig,
    colors: ColorConfig,
) -> Result<(), AppError> {
    let text = source.load()?;
    let portfolio = parse_portfolio(&text)?;
    info!(
        entries = portfolio.entries.len(),
        source = %source.display_name(),
        "Document loaded"
    );

    let theme = config.theme.parse().unwrap_or_default();
    let state = AppState::new(portfolio, &config.images_dir, theme);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, EnterAlternateScreen)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let mut app = TuiApp::new(terminal, state, source, config, colors);
    let result = app.run();

    disable_raw_mode()?;
    crossterm::execute!(io::stdout(), LeaveAlternateScreen)?;

    result.map_err(AppError::Terminal)
}

/// The running application: terminal, state, and loop bookkeeping.
///
/// Generic over the backend so tests can drive it with `TestBackend`.
pub struct TuiApp<B: Backend> {
    terminal: Terminal<B>,
    state: AppState,
    source: DocumentSource,
    config: ResolvedConfig,
    bindings: KeyBindings,
    colors: ColorConfig,
    prefers_dark: bool,
    metrics: LayoutMetrics,
    pending_jump_to_latest: bool,
    should_quit: bool,
}

impl<B: Backend> TuiApp<B> {
    /// Build the app around an already-prepared terminal.
    pub fn new(
        terminal: Terminal<B>,
        state: AppState,
        source: DocumentSource,
        config: ResolvedConfig,
        colors: ColorConfig,
    ) -> Self {
        let pending_jump_to_latest = config.jump_to_latest;
        Self {
            terminal,
            state,
            source,
            config,
            bindings: KeyBindings::default(),
            colors,
            prefers_dark: system_prefers_dark(),
            metrics: LayoutMetrics::default(),
            pending_jump_to_latest,
            should_quit: false,
        }
    }

    /// Run the event loop until quit.
    pub fn run(&mut self) -> io::Result<()> {
        while !self.should_quit {
            self.draw()?;
            if event::poll(POLL_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
                    Event::Resize(_, _) => {}
                    _ => {}
                }
            }
        }
        Ok(())
    }

    /// Current state, for tests.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    fn draw(&mut self) -> io::Result<()> {
        if self.pending_jump_to_latest {
            let size = self.terminal.size()?;
            let max = layout::scroll_max(&self.state, size.width, size.height);
            self.state.scroll.scroll_to_latest(max);
            self.pending_jump_to_latest = false;
        }

        let palette = Palette::new(self.state.theme.resolve(self.prefers_dark), self.colors);
        let source_name = self.source.display_name();
        let state = &mut self.state;
        let metrics = &mut self.metrics;
        self.terminal.draw(|frame| {
            *metrics = layout::render_app(frame, state, &palette, &source_name);
            if let Some(image) = &state.open_image {
                image_overlay::render_image_overlay(frame, image, &palette);
            } else if state.help_visible {
                help::render_help(frame, &palette);
            }
        })?;
        Ok(())
    }

    /// Dispatch one key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }
        let Some(action) = self.bindings.get(key) else {
            return;
        };

        // Overlays swallow everything except dismissal and quitting.
        if self.state.overlay_visible() {
            match action {
                KeyAction::Quit => self.should_quit = true,
                KeyAction::CloseOverlay => self.state.close_overlay(),
                KeyAction::Help => self.state.help_visible = !self.state.help_visible,
                _ => {}
            }
            return;
        }

        let max = self.metrics.scroll_max;
        match action {
            KeyAction::ScrollUp => self.state.scroll.scroll_up(1),
            KeyAction::ScrollDown => self.state.scroll.scroll_down(1, max),
            KeyAction::PageUp => self.state.scroll.scroll_up(self.metrics.page_rows),
            KeyAction::PageDown => self.state.scroll.scroll_down(self.metrics.page_rows, max),
            KeyAction::ScrollToTop => self.state.scroll.scroll_to_top(),
            KeyAction::ScrollToLatest => {
                self.state.scroll.scroll_to_latest(max);
                if let Some(last) = self.state.portfolio().entries.len().checked_sub(1) {
                    self.state.focused_entry = Some(last);
                }
            }
            KeyAction::NextEntry => {
                self.state.focus_next_entry();
                self.scroll_focused_into_view();
            }
            KeyAction::PrevEntry => {
                self.state.focus_prev_entry();
                self.scroll_focused_into_view();
            }
            KeyAction::CarouselPrev => self.state.step_carousel(-1),
            KeyAction::CarouselNext => self.state.step_carousel(1),
            KeyAction::ActivateImage(position) => self.state.activate_image(position),
            KeyAction::OpenActive => self.state.open_active_image(),
            KeyAction::CloseOverlay => {}
            KeyAction::ToggleTheme => {
                let mode = self.state.toggle_theme(self.prefers_dark);
                save_theme(mode.name());
                debug!(theme = mode.name(), "Theme toggled");
            }
            KeyAction::Reload => self.reload(),
            KeyAction::Help => self.state.help_visible = true,
            KeyAction::Quit => self.should_quit = true,
        }
    }

    /// Align the viewport with the focused entry's first row.
    fn scroll_focused_into_view(&mut self) {
        let Some(index) = self.state.focused_entry else {
            return;
        };
        let width = if self.metrics.content_width > 0 {
            self.metrics.content_width
        } else {
            return;
        };
        let offsets = timeline::entry_offsets(&self.state, width);
        if let Some(&offset) = offsets.get(index) {
            self.state.scroll.vertical_offset = offset.min(self.metrics.scroll_max);
        }
    }

    fn reload(&mut self) {
        if !self.source.is_reloadable() {
            debug!("Reload requested for a non-reloadable source");
            return;
        }
        let reloaded = self
            .source
            .load()
            .map_err(AppError::from)
            .and_then(|text| parse_portfolio(&text).map_err(AppError::from));
        match reloaded {
            Ok(portfolio) => {
                info!(entries = portfolio.entries.len(), "Document reloaded");
                self.state
                    .replace_portfolio(portfolio, &self.config.images_dir);
            }
            Err(e) => warn!("Reload failed, keeping the current document: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Entry, ImageData, Portfolio, IMAGES_DIR};
    use crate::state::ThemeMode;
    use ratatui::backend::TestBackend;

    fn test_app(entries: usize) -> TuiApp<TestBackend> {
        let portfolio = Portfolio {
            name: Some("Ada".to_string()),
            entries: (0..entries)
                .map(|i| Entry {
                    title: Some(format!("Entry {i}")),
                    images: vec![
                        ImageData::Reference(format!("{i}-a.png")),
                        ImageData::Reference(format!("{i}-b.png")),
                    ],
                    ..Entry::default()
                })
                .collect(),
            ..Portfolio::default()
        };
        let state = AppState::new(portfolio, IMAGES_DIR, ThemeMode::Dark);
        let terminal = Terminal::new(TestBackend::new(80, 24)).expect("terminal");
        let config = ResolvedConfig {
            jump_to_latest: false,
            ..ResolvedConfig::default()
        };
        TuiApp::new(
            terminal,
            state,
            DocumentSource::Stdin,
            config,
            ColorConfig::from_env_and_args(true),
        )
    }

    fn press(app: &mut TuiApp<TestBackend>, code: KeyCode, modifiers: KeyModifiers) {
        app.draw().expect("draw before key");
        app.handle_key(KeyEvent::new(code, modifiers));
    }

    #[test]
    fn scroll_keys_move_the_viewport() {
        let mut app = test_app(6);
        press(&mut app, KeyCode::Char('j'), KeyModifiers::NONE);
        assert_eq!(app.state().scroll.vertical_offset, 1);
        press(&mut app, KeyCode::Char('k'), KeyModifiers::NONE);
        assert_eq!(app.state().scroll.vertical_offset, 0);
    }

    #[test]
    fn latest_jump_lands_at_the_bottom_and_focuses_last() {
        let mut app = test_app(6);
        press(&mut app, KeyCode::Char('G'), KeyModifiers::SHIFT);
        assert!(app.state().scroll.at_bottom(app.metrics.scroll_max));
        assert_eq!(app.state().focused_entry, Some(5));
        press(&mut app, KeyCode::Char('g'), KeyModifiers::NONE);
        assert_eq!(app.state().scroll.vertical_offset, 0);
    }

    #[test]
    fn carousel_keys_route_to_the_focused_entry() {
        let mut app = test_app(2);
        press(&mut app, KeyCode::Right, KeyModifiers::NONE);
        assert_eq!(app.state().focused_carousel().map(|c| c.active_index()), Some(1));
        press(&mut app, KeyCode::Left, KeyModifiers::NONE);
        assert_eq!(app.state().focused_carousel().map(|c| c.active_index()), Some(0));
    }

    #[test]
    fn enter_opens_and_escape_closes_the_overlay() {
        let mut app = test_app(1);
        press(&mut app, KeyCode::Enter, KeyModifiers::NONE);
        assert!(app.state().open_image.is_some());

        // A navigation key is swallowed while the overlay is up.
        press(&mut app, KeyCode::Char('j'), KeyModifiers::NONE);
        assert_eq!(app.state().scroll.vertical_offset, 0);

        press(&mut app, KeyCode::Esc, KeyModifiers::NONE);
        assert!(app.state().open_image.is_none());
    }

    #[test]
    fn digit_keys_activate_carousel_items() {
        let mut app = test_app(1);
        press(&mut app, KeyCode::Char('2'), KeyModifiers::NONE);
        assert_eq!(app.state().focused_carousel().map(|c| c.active_index()), Some(1));
        assert!(app.state().open_image.is_none(), "a move does not open");

        press(&mut app, KeyCode::Char('2'), KeyModifiers::NONE);
        assert!(app.state().open_image.is_some(), "re-activating opens");
    }

    #[test]
    fn quit_keys_stop_the_loop() {
        let mut app = test_app(1);
        press(&mut app, KeyCode::Char('q'), KeyModifiers::NONE);
        assert!(app.should_quit);

        let mut app = test_app(1);
        press(&mut app, KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.should_quit);
    }

    #[test]
    fn entry_focus_follows_tab_and_scrolls() {
        let mut app = test_app(6);
        app.state.focused_entry = Some(0);
        press(&mut app, KeyCode::Tab, KeyModifiers::NONE);
        assert_eq!(app.state().focused_entry, Some(1));
        let offsets = timeline::entry_offsets(app.state(), app.metrics.content_width);
        assert_eq!(
            app.state().scroll.vertical_offset,
            offsets[1].min(app.metrics.scroll_max)
        );
    }
}

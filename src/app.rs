use ratatui::{
    DefaultTerminal,
    crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use color_eyre::Result;
use throbber_widgets_tui::ThrobberState;

use crate::api::{ApiHealth, QueryResult, RagClient};
use crate::config::ChatConfig;
use crate::event::{AppEvent, Event, EventHandler};
use crate::session::{ConversationSession, SessionId, TurnError};
use crate::ui::{chat_manager::ChatManager, projection};
use crate::{log_debug, log_info, log_warn};

/// Application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    pub running: bool,
    pub config: ChatConfig,
    /// Session id, transcript, depth and the outstanding turn
    pub session: ConversationSession,
    pub client: RagClient,
    /// Last health probe result, `None` until the first one lands
    pub health: Option<ApiHealth>,
    /// Sequence number of the last probe spawned
    health_seq: u64,
    /// Sequence number of the probe behind `health`
    health_applied: u64,
    pub chat_manager: ChatManager,
    pub throbber_state: ThrobberState,
    /// Event handler.
    pub events: EventHandler,
}

impl App {
    /// Constructs a new instance of [`App`]. Must be called inside the tokio runtime.
    pub fn new(config: ChatConfig) -> Result<Self> {
        Self::with_events(config, EventHandler::new())
    }

    pub fn with_events(config: ChatConfig, events: EventHandler) -> Result<Self> {
        let client = RagClient::new(&config.api)?;
        let session = ConversationSession::new(config.chat.greeting.clone(), config.default_depth());
        log_info!("Session {} started against {}", session.id(), client.root_url());

        Ok(Self {
            running: true,
            config,
            session,
            client,
            health: None,
            health_seq: 0,
            health_applied: 0,
            chat_manager: ChatManager::new(),
            throbber_state: ThrobberState::default(),
            events,
        })
    }

    /// Run the application's main loop.
    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        self.spawn_health_probe();
        let mut needs_redraw = true;

        while self.running {
            if needs_redraw {
                terminal.draw(|frame| frame.render_widget(&mut self, frame.area()))?;
                needs_redraw = false;
            }

            match self.events.next().await? {
                Event::Tick => {
                    // Only the spinner moves on its own
                    if self.session.is_waiting() {
                        self.throbber_state.calc_next();
                        needs_redraw = true;
                    }
                }
                Event::Crossterm(event) => match event {
                    crossterm::event::Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                        self.handle_key_events(key_event)?;
                    }
                    crossterm::event::Event::Resize(_, _) => needs_redraw = true,
                    _ => {}
                },
                Event::App(app_event) => {
                    self.handle_app_event(app_event);
                    needs_redraw = true;
                }
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    pub fn handle_key_events(&mut self, key_event: KeyEvent) -> Result<()> {
        if let Some(app_event) = self.map_key(key_event) {
            self.events.send(app_event);
        }
        Ok(())
    }

    fn map_key(&self, key_event: KeyEvent) -> Option<AppEvent> {
        let has_selection = self.chat_manager.selected_sources.is_some();

        let app_event = match key_event.code {
            KeyCode::Char('c' | 'C') if key_event.modifiers == KeyModifiers::CONTROL => AppEvent::Quit,
            KeyCode::Char('l' | 'L') if key_event.modifiers == KeyModifiers::CONTROL => AppEvent::Reset,
            KeyCode::Esc if has_selection => AppEvent::ClearSelection,
            KeyCode::Esc => AppEvent::Quit,
            KeyCode::Enter if has_selection => AppEvent::ToggleSources,
            KeyCode::Enter => AppEvent::Submit,
            KeyCode::Tab => AppEvent::CycleSources(1),
            KeyCode::BackTab => AppEvent::CycleSources(-1),
            KeyCode::Left => AppEvent::DepthDown,
            KeyCode::Right => AppEvent::DepthUp,
            KeyCode::PageUp | KeyCode::Up => AppEvent::ScrollUp,
            KeyCode::PageDown | KeyCode::Down => AppEvent::ScrollDown,
            KeyCode::Backspace => AppEvent::Backspace,
            // Ctrl/Alt chords are not text
            KeyCode::Char(ch)
                if matches!(key_event.modifiers, KeyModifiers::NONE | KeyModifiers::SHIFT) =>
            {
                AppEvent::Input(ch)
            }
            _ => return None,
        };
        Some(app_event)
    }

    pub fn handle_app_event(&mut self, app_event: AppEvent) {
        let waiting = self.session.is_waiting();

        match app_event {
            AppEvent::Quit => self.quit(),
            // The input box is locked while a question is outstanding
            AppEvent::Input(ch) if !waiting => self.chat_manager.handle_input(ch),
            AppEvent::Backspace if !waiting => self.chat_manager.backspace(),
            AppEvent::Submit if !waiting => self.submit_question(),
            AppEvent::Reset if !waiting => self.reset_conversation(),
            AppEvent::Input(_) | AppEvent::Backspace | AppEvent::Submit | AppEvent::Reset => {
                log_debug!("Ignoring input while a turn is outstanding");
            }
            AppEvent::ScrollUp => self.chat_manager.scroll_up(),
            AppEvent::ScrollDown => self.chat_manager.scroll_down(),
            AppEvent::CycleSources(direction) => {
                let available = projection::sources_indices(self.session.transcript().all());
                self.chat_manager.cycle_sources(direction, &available);
            }
            AppEvent::ToggleSources => {
                self.chat_manager.toggle_selected();
            }
            AppEvent::ClearSelection => self.chat_manager.clear_selection(),
            AppEvent::DepthUp => self.session.set_depth(self.session.depth().increment()),
            AppEvent::DepthDown => self.session.set_depth(self.session.depth().decrement()),
            AppEvent::TurnFinished { session_id, result } => self.finish_turn(&session_id, result),
            AppEvent::HealthChecked { seq, health } => self.apply_health(seq, health),
        }
    }

    /// Set running to false to quit the application.
    pub fn quit(&mut self) {
        self.running = false;
    }

    fn submit_question(&mut self) {
        let question = self.chat_manager.take_input();

        let request = match self.session.begin_turn(question) {
            Ok(request) => request,
            Err(TurnError::EmptyQuestion) => return,
            Err(e) => {
                log_warn!("Question not sent: {}", e);
                return;
            }
        };

        log_debug!("Asking (depth {}): {}", request.depth.get(), request.question);
        self.chat_manager.clear_selection();
        self.chat_manager.scroll_to_bottom();

        let client = self.client.clone();
        let sender = self.events.sender();
        tokio::spawn(async move {
            let result = client
                .ask(&request.question, request.depth, &request.session_id)
                .await;
            let _ = sender.send(Event::App(AppEvent::TurnFinished {
                session_id: request.session_id,
                result,
            }));
        });
    }

    fn finish_turn(&mut self, session_id: &SessionId, result: QueryResult) {
        match self.session.complete_turn(session_id, result) {
            Ok(()) => {
                log_debug!("Answer received for session {}", session_id);
                self.chat_manager.scroll_to_bottom();
                self.spawn_health_probe();
            }
            Err(e) => log_warn!("Dropping answer: {}", e),
        }
    }

    fn reset_conversation(&mut self) {
        self.session.reset();
        self.chat_manager.clear();
        self.spawn_health_probe();
    }

    fn spawn_health_probe(&mut self) {
        self.health_seq += 1;
        let seq = self.health_seq;
        let client = self.client.clone();
        let sender = self.events.sender();
        tokio::spawn(async move {
            let health = client.probe_health().await;
            let _ = sender.send(Event::App(AppEvent::HealthChecked { seq, health }));
        });
    }

    fn apply_health(&mut self, seq: u64, health: ApiHealth) {
        if seq < self.health_applied {
            log_debug!("Dropping health probe #{} ({:?}), #{} already applied", seq, health, self.health_applied);
            return;
        }
        if self.health != Some(health) {
            log_info!("API health: {:?}", health);
        }
        self.health_applied = seq;
        self.health = Some(health);
    }
}

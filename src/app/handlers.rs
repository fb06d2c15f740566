use crate::app::{App, InputEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ExitReason {
    Quit,
    Interrupted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SessionState {
    Browsing,
    Terminated(ExitReason),
}

impl App {
    /// Applies one input to the browser. `Terminated` is absorbing.
    pub(crate) fn handle_event(&mut self, event: InputEvent) -> SessionState {
        if let SessionState::Terminated(_) = self.state {
            return self.state;
        }
        match event {
            InputEvent::Quit => self.state = SessionState::Terminated(ExitReason::Quit),
            InputEvent::Interrupt => {
                self.state = SessionState::Terminated(ExitReason::Interrupted);
            }
            InputEvent::Back => {
                if !self.history.is_empty() {
                    self.ascend();
                }
            }
            InputEvent::Up => {
                if self.selected > 0 {
                    self.move_selection(-1);
                }
            }
            InputEvent::Down => {
                if self.selected + 1 < self.visible_len() {
                    self.move_selection(1);
                }
            }
            InputEvent::Enter => {
                if let Some(entry) = self.current_entry().filter(|e| e.is_dir).cloned() {
                    self.descend(&entry);
                }
            }
            InputEvent::Digit(_) | InputEvent::Other => {}
        }
        if let SessionState::Terminated(reason) = self.state {
            self.log_line(&format!("Session ended ({reason:?})"));
        }
        self.state
    }
}

use crate::app::InputEvent;
use crate::app::helpers::clamp_index;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PickerOutcome {
    Chosen(String),
    Cancelled,
    Interrupted,
    InvalidChoice(u8),
}

/// Selection list shown when no remote was given on the command line.
#[derive(Debug, Clone)]
pub(crate) struct RemotePicker {
    pub(crate) remotes: Vec<String>,
    pub(crate) selected: usize,
    pub(crate) outcome: Option<PickerOutcome>,
}

impl RemotePicker {
    pub(crate) fn new(remotes: Vec<String>) -> Self {
        Self {
            remotes,
            selected: 0,
            outcome: None,
        }
    }

    /// Applies one input; returns the outcome once the picker is finished.
    pub(crate) fn handle_event(&mut self, event: InputEvent) -> Option<PickerOutcome> {
        if self.outcome.is_some() {
            return self.outcome.clone();
        }
        match event {
            InputEvent::Quit => self.outcome = Some(PickerOutcome::Cancelled),
            InputEvent::Interrupt => self.outcome = Some(PickerOutcome::Interrupted),
            InputEvent::Up => {
                self.selected = clamp_index(self.selected, -1, self.remotes.len());
            }
            InputEvent::Down => {
                self.selected = clamp_index(self.selected, 1, self.remotes.len());
            }
            InputEvent::Enter => {
                if let Some(remote) = self.remotes.get(self.selected) {
                    self.outcome = Some(PickerOutcome::Chosen(remote.clone()));
                }
            }
            InputEvent::Digit(number) => {
                let chosen = usize::from(number)
                    .checked_sub(1)
                    .and_then(|index| self.remotes.get(index));
                self.outcome = Some(match chosen {
                    Some(remote) => PickerOutcome::Chosen(remote.clone()),
                    None => PickerOutcome::InvalidChoice(number),
                });
            }
            InputEvent::Back | InputEvent::Other => {}
        }
        self.outcome.clone()
    }
}

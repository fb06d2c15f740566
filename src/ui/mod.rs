pub(crate) use browser::draw_browser;
pub(crate) use pickers::draw_remote_picker;

mod browser;
mod constants;
mod helpers;
mod pickers;

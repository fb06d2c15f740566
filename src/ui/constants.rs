pub(crate) const HEADER_LABEL: &str = "rclone explorer";
pub(crate) const HELP_TEXT: &str = "Press ENTER to open, 'q' to quit, 'b' to go back";
pub(crate) const PICKER_TITLE: &str = "rclone explorer - select a remote";
pub(crate) const PICKER_HELP_TEXT: &str = "Press ENTER or 1-9 to select, 'q' to quit";

pub(crate) const DIR_ICON: &str = "📁 ";
pub(crate) const FILE_ICON: &str = "📄 ";
pub(crate) const DIR_LABEL: &str = "<DIR>";
pub(crate) const EMPTY_LABEL: &str = "(empty directory)";
pub(crate) const FAILED_PREFIX: &str = "Listing failed: ";

pub(crate) const SIZE_COLUMN_WIDTH: usize = 10;
pub(crate) const NAME_MARGIN: usize = 10;

pub(crate) const STATUS_ROW: usize = 2;
pub(crate) const FIRST_ITEM_ROW: usize = 3;
/// Header, help, status and one spare row at the bottom.
pub(crate) const RESERVED_ROWS: usize = 4;

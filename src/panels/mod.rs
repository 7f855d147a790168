mod central_panel;
mod dialogs;
mod tools_panel;

pub use central_panel::central_panel;
pub use dialogs::{error_dialog, save_dialog};
pub use tools_panel::tools_panel;

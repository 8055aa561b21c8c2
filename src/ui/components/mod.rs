mod help;
mod status;

/// Small reusable widgets shared by the screens
pub struct UiComponent;

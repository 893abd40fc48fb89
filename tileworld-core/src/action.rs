/// What the host should do after an editor handled an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorAction {
    None,
    /// Pop navigation: the editor is done.
    Close,
    /// Show the toolbox popup.
    OpenToolbox,
}

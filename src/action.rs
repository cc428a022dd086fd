use crate::prefs::Section;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    ToggleDisplayMode,
    ToggleDetailPanel,
    ToggleSection(Section),
    ToggleHelp,
    Refresh,
    None,
}

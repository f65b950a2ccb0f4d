use crate::controller::Phase;

/// Per-phase labels for the panel around the OLED
pub trait Screen {
    fn title(&self) -> &'static str;
    fn help(&self) -> &'static str;
}

pub struct MenuScreen;

impl Screen for MenuScreen {
    fn title(&self) -> &'static str {
        "select game"
    }

    fn help(&self) -> &'static str {
        "↑/↓ turn knob · pgup/pgdn coarse · space select · esc quit"
    }
}

/// Custom max number and game size entry
pub struct EntryScreen {
    title: &'static str,
}

impl Screen for EntryScreen {
    fn title(&self) -> &'static str {
        self.title
    }

    fn help(&self) -> &'static str {
        "↑/↓ turn knob · home/end extremes · space confirm · esc quit"
    }
}

pub struct DrawScreen;

impl Screen for DrawScreen {
    fn title(&self) -> &'static str {
        "picks"
    }

    fn help(&self) -> &'static str {
        "space draw · esc quit"
    }
}

/// Helper to construct the appropriate screen for the current phase
pub fn current_screen(phase: Phase) -> Box<dyn Screen> {
    match phase {
        Phase::MenuSelect => Box::new(MenuScreen),
        Phase::CustomMaxNumber => Box::new(EntryScreen {
            title: "max number",
        }),
        Phase::CustomGameSize { .. } => Box::new(EntryScreen {
            title: "how many in game",
        }),
        Phase::Drawing => Box::new(DrawScreen),
    }
}

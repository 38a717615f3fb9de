//! Class builders for the survey form. Markup carries utility classes; the
//! stylesheet that gives them meaning is served by the host page.

/// Display theme for the whole card; ephemeral view state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Emoji on the toggle button, showing the mode currently active.
    pub fn icon(self) -> &'static str {
        match self {
            Theme::Light => "☀️",
            Theme::Dark => "🌙",
        }
    }
}

pub const TOGGLE_ROW: &str = "flex justify-end mb-6";
pub const COLUMN: &str = "space-y-6";
pub const ERROR_TEXT: &str = "text-red-500 text-sm mt-1";
pub const RESOURCE_LIST: &str = "list-disc list-inside mt-2";

pub fn page(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => {
            "min-h-screen p-5 flex justify-center items-center bg-gradient-to-r from-purple-50 to-blue-50 text-gray-800"
        }
        Theme::Dark => "min-h-screen p-5 flex justify-center items-center bg-gray-900 text-white",
    }
}

pub fn card(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => {
            "p-8 rounded-2xl shadow-2xl w-full max-w-4xl border transition-all duration-300 bg-white border-gray-100"
        }
        Theme::Dark => {
            "p-8 rounded-2xl shadow-2xl w-full max-w-4xl border transition-all duration-300 bg-gray-800 border-gray-700"
        }
    }
}

pub fn toggle_button(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => {
            "p-2 rounded-full focus:outline-none transition-all duration-300 bg-gray-200 hover:bg-gray-300"
        }
        Theme::Dark => {
            "p-2 rounded-full focus:outline-none transition-all duration-300 bg-gray-700 hover:bg-gray-600"
        }
    }
}

pub fn title(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "text-3xl font-bold text-center mb-8 text-gray-800",
        Theme::Dark => "text-3xl font-bold text-center mb-8 text-white",
    }
}

pub fn label(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "block text-sm font-medium mb-2 text-gray-700",
        Theme::Dark => "block text-sm font-medium mb-2 text-gray-300",
    }
}

pub fn control(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => {
            "w-full px-4 py-3 border rounded-xl focus:outline-none focus:ring-2 transition-all bg-white border-gray-300 focus:ring-purple-500 text-gray-800"
        }
        Theme::Dark => {
            "w-full px-4 py-3 border rounded-xl focus:outline-none focus:ring-2 transition-all bg-gray-700 border-gray-600 focus:ring-purple-500 text-white"
        }
    }
}

pub fn submit_button(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => {
            "w-full mt-8 py-3 rounded-xl font-semibold transition-all duration-300 shadow-lg bg-gradient-to-r from-purple-500 to-blue-500 hover:from-purple-600 hover:to-blue-600 text-white"
        }
        Theme::Dark => {
            "w-full mt-8 py-3 rounded-xl font-semibold transition-all duration-300 shadow-lg bg-gradient-to-r from-purple-600 to-blue-600 hover:from-purple-700 hover:to-blue-700 text-white"
        }
    }
}

pub fn result_panel(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => {
            "mt-8 p-4 rounded-xl text-center border transition-all duration-300 bg-gradient-to-r from-purple-50 to-blue-50 border-gray-200"
        }
        Theme::Dark => {
            "mt-8 p-4 rounded-xl text-center border transition-all duration-300 bg-gray-700 border-gray-600"
        }
    }
}

pub fn recommendation_panel(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => {
            "mt-8 p-4 rounded-xl border transition-all duration-300 bg-gradient-to-r from-purple-50 to-blue-50 border-gray-200"
        }
        Theme::Dark => "mt-8 p-4 rounded-xl border transition-all duration-300 bg-gray-700 border-gray-600",
    }
}

pub fn panel_heading(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "text-lg font-semibold text-purple-800",
        Theme::Dark => "text-lg font-semibold text-purple-400",
    }
}

pub fn result_value(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "text-blue-800",
        Theme::Dark => "text-blue-400",
    }
}

pub fn panel_body(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "mt-2 text-gray-700",
        Theme::Dark => "mt-2 text-gray-300",
    }
}

pub fn panel_text(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "text-gray-700",
        Theme::Dark => "text-gray-300",
    }
}

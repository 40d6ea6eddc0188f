//! REPL configuration.

/// Configuration for the interactive loop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplConfig {
    /// Prompt shown before each line.
    pub prompt: String,

    /// Whether to print the welcome banner.
    pub show_banner: bool,

    /// Maximum number of history entries kept by the line editor.
    pub history_size: usize,

    /// Whether `Quit` ends the loop as well as releasing the orchard.
    pub exit_on_quit: bool,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: "orchard> ".to_string(),
            show_banner: true,
            history_size: 1000,
            exit_on_quit: true,
        }
    }
}

impl ReplConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Turns the banner on or off.
    #[must_use]
    pub const fn with_banner(mut self, show_banner: bool) -> Self {
        self.show_banner = show_banner;
        self
    }

    /// Sets the history size.
    #[must_use]
    pub const fn with_history_size(mut self, history_size: usize) -> Self {
        self.history_size = history_size;
        self
    }

    /// Sets whether `Quit` ends the loop.
    #[must_use]
    pub const fn with_exit_on_quit(mut self, exit_on_quit: bool) -> Self {
        self.exit_on_quit = exit_on_quit;
        self
    }
}

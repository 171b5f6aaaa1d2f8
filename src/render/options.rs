/// An output format of call outcomes.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, clap::ValueEnum)]
pub enum RenderFormat {
    /// Tab-separated fields, one per line.
    #[default]
    Text,
    /// A single JSON object.
    Json,
}

/// Rendering options.
#[derive(Debug, Default, Eq, PartialEq)]
pub struct RenderOptions {
    count: bool,
    format: RenderFormat,
}

impl RenderOptions {
    /// Creates rendering options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether a field count header is rendered in text.
    pub const fn count(&self) -> bool {
        self.count
    }

    /// Returns an output format.
    pub const fn format(&self) -> RenderFormat {
        self.format
    }

    /// Sets whether a field count header is rendered in text.
    pub const fn set_count(mut self, count: bool) -> Self {
        self.count = count;
        self
    }

    /// Sets an output format.
    pub const fn set_format(mut self, format: RenderFormat) -> Self {
        self.format = format;
        self
    }
}

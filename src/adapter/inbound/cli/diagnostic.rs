//! Miette diagnostics for configuration files.
//!
//! `config validate` renders TOML syntax errors with the offending snippet
//! highlighted instead of a bare message.

use miette::{Diagnostic, GraphicalReportHandler, GraphicalTheme, SourceSpan};
use thiserror::Error;

/// Configuration error with source location context.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(mishkat::config))]
pub struct ConfigDiagnostic {
    pub message: String,

    #[source_code]
    pub src: String,

    #[label("here")]
    pub span: SourceSpan,

    #[help]
    pub help: Option<String>,
}

impl ConfigDiagnostic {
    #[must_use]
    pub fn new(message: impl Into<String>, src: impl Into<String>, offset: usize, len: usize) -> Self {
        Self {
            message: message.into(),
            src: src.into(),
            span: (offset, len).into(),
            help: None,
        }
    }

    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Build a diagnostic from a TOML parse failure, if it carries a span.
    #[must_use]
    pub fn from_toml(err: &toml::de::Error, src: &str) -> Option<Self> {
        let span = err.span()?;
        Some(
            Self::new(err.message(), src, span.start, span.end.saturating_sub(span.start))
                .with_help("see config.toml.example for the accepted keys"),
        )
    }

    /// Render with miette's graphical handler (no colour).
    #[must_use]
    pub fn render(&self) -> String {
        let mut rendered = String::new();
        let handler = GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor());
        if handler.render_report(&mut rendered, self).is_err() {
            return self.message.clone();
        }
        rendered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_errors_carry_a_span() {
        let src = "[http]\ntimeout_ms = \"fast\"\n";
        let err = toml::from_str::<toml::Value>("[http\n").expect_err("malformed");
        assert!(ConfigDiagnostic::from_toml(&err, "[http\n").is_some());

        let diagnostic = ConfigDiagnostic::new("expected integer", src, 20, 6);
        let rendered = diagnostic.render();
        assert!(rendered.contains("expected integer"));
        assert!(rendered.contains("timeout_ms"));
    }
}

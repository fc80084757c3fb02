use super::Span;

#[derive(Clone, Debug)]
pub struct Diagnostic {
    pub severity: Severity,
    pub code: Option<String>,
    pub message: String,
    pub labels: Vec<Label>,
    pub notes: Vec<String>,
}

impl Diagnostic {
    pub fn new(severity: Severity) -> Self {
        Self {
            severity,
            code: None,
            message: String::new(),
            labels: Vec::new(),
            notes: Vec::new(),
        }
    }

    pub fn error() -> Self {
        Self::new(Severity::Error)
    }

    pub fn warning() -> Self {
        Self::new(Severity::Warning)
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_labels(mut self, labels: Vec<Label>) -> Self {
        self.labels.extend(labels);
        self
    }

    pub fn with_notes(mut self, notes: Vec<String>) -> Self {
        self.notes.extend(notes);
        self
    }
}

#[derive(Clone, Debug)]
pub struct Label {
    pub style: LabelStyle,
    pub span: Span,
    pub message: String,
}

impl Label {
    pub fn new(style: LabelStyle, span: Span) -> Self {
        Self {
            style,
            span,
            message: String::new(),
        }
    }

    pub fn primary(span: Span) -> Self {
        Self::new(LabelStyle::Primary, span)
    }

    pub fn secondary(span: Span) -> Self {
        Self::new(LabelStyle::Secondary, span)
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum LabelStyle {
    Primary,
    Secondary,
}

/// Ordered from least to most severe.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Severity {
    Warning,
    Error,
}

use codespan_reporting::diagnostic::{self, LabelStyle};
use codespan_reporting::files::SimpleFile;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};
use codespan_reporting::term::{self, Config, DisplayStyle};
use log::error;

use kempe_common::message::{self, Diagnostic, Messages, Severity};
use kempe_common::Driver;

pub struct ConsoleDriver {
    file: SimpleFile<String, String>,
    writer: StandardStream,
    config: Config,
}

impl ConsoleDriver {
    pub fn new(name: String, source: String, color: ColorChoice) -> Self {
        Self {
            file: SimpleFile::new(name, source),
            writer: StandardStream::stderr(color),
            config: Config {
                display_style: DisplayStyle::Rich,
                ..Default::default()
            },
        }
    }
}

impl Driver for ConsoleDriver {
    fn report(&mut self, messages: Messages) {
        for msg in messages.msgs {
            let diag = convert(msg);
            if let Err(e) = term::emit(&mut self.writer.lock(), &self.config, &self.file, &diag) {
                error!("unable to print diagnostic: {e}");
            }
        }
    }
}

fn convert(msg: Diagnostic) -> diagnostic::Diagnostic<()> {
    let severity = match msg.severity {
        Severity::Warning => diagnostic::Severity::Warning,
        Severity::Error => diagnostic::Severity::Error,
    };

    let labels = msg
        .labels
        .into_iter()
        .map(|label| {
            let style = match label.style {
                message::LabelStyle::Primary => LabelStyle::Primary,
                message::LabelStyle::Secondary => LabelStyle::Secondary,
            };

            diagnostic::Label::new(style, (), label.span).with_message(label.message)
        })
        .collect();

    let diag = diagnostic::Diagnostic::new(severity)
        .with_message(msg.message)
        .with_labels(labels)
        .with_notes(msg.notes);

    match msg.code {
        Some(code) => diag.with_code(code),
        None => diag,
    }
}

use super::{Diagnostic, Label, MessageAdder, Span};

const MISSING_CAPACITY: &str = "EI00";
const CAPACITY_NOT_AN_INT: &str = "EI01";
const CAPACITY_NOT_POSITIVE: &str = "EI02";
const EXTRA_CAPACITY_TOKENS: &str = "EI03";
const CAPACITY_OUT_OF_RANGE: &str = "EI04";
const REPEATED_VARIABLE: &str = "WI00";

impl<'a> MessageAdder<'a> {
    pub fn input_missing_capacity(&mut self) {
        let labels = vec![Label::primary(self.at)];
        let notes = vec![String::from(
            "the first line holds the number of available registers",
        )];

        self.add(
            Diagnostic::error()
                .with_code(MISSING_CAPACITY)
                .with_message("expected a register capacity")
                .with_labels(labels)
                .with_notes(notes),
        );
    }

    pub fn input_capacity_not_an_int(&mut self, text: &str) {
        let labels =
            vec![Label::primary(self.at).with_message(format!("`{text}` is not an integer"))];

        self.add(
            Diagnostic::error()
                .with_code(CAPACITY_NOT_AN_INT)
                .with_message("register capacity must be an integer")
                .with_labels(labels),
        );
    }

    pub fn input_capacity_not_positive(&mut self) {
        let labels = vec![Label::primary(self.at)];
        let notes = vec![String::from("at least one register must be available")];

        self.add(
            Diagnostic::error()
                .with_code(CAPACITY_NOT_POSITIVE)
                .with_message("register capacity must be positive")
                .with_labels(labels)
                .with_notes(notes),
        );
    }

    pub fn input_capacity_out_of_range(&mut self) {
        let labels = vec![Label::primary(self.at).with_message("this is too many registers")];
        let notes = vec![format!("the largest supported capacity is {}", usize::MAX)];

        self.add(
            Diagnostic::error()
                .with_code(CAPACITY_OUT_OF_RANGE)
                .with_message("register capacity is out of range")
                .with_labels(labels)
                .with_notes(notes),
        );
    }

    pub fn input_extra_capacity_tokens(&mut self, capacity: Span) {
        let labels = vec![
            Label::primary(self.at).with_message("unexpected tokens"),
            Label::secondary(capacity).with_message("capacity given here"),
        ];

        self.add(
            Diagnostic::error()
                .with_code(EXTRA_CAPACITY_TOKENS)
                .with_message("the capacity line must hold a single integer")
                .with_labels(labels),
        );
    }

    pub fn input_repeated_variable(&mut self, name: &str, first: Span) {
        let labels = vec![
            Label::primary(self.at).with_message("repeated here"),
            Label::secondary(first).with_message("first listed here"),
        ];

        self.add(
            Diagnostic::warning()
                .with_code(REPEATED_VARIABLE)
                .with_message(format!("`{name}` is listed twice in one program point"))
                .with_labels(labels),
        );
    }
}

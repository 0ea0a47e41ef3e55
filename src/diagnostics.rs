//! Advisory diagnostics
//!
//! Invalid input never stops a formatting call. Instead the entry point
//! reports a [`Diagnostic`] to a [`DiagnosticSink`] and carries on with its
//! fallback value. The default sink forwards to `tracing`; tests and callers
//! that want to inspect warnings can inject a [`CollectingSink`].

use std::fmt;
use std::sync::{Arc, Mutex};

/// What was wrong with the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// Value is neither a number nor a numeric string
    InvalidNumber,
    /// Value is not a genuine finite number
    NotANumber,
    /// Date input was absent
    MissingDate,
    /// Date input could not be interpreted as a point in time
    InvalidDate,
    /// List had no non-blank items
    EmptyList,
}

impl DiagnosticKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticKind::InvalidNumber => "invalid_number",
            DiagnosticKind::NotANumber => "not_a_number",
            DiagnosticKind::MissingDate => "missing_date",
            DiagnosticKind::InvalidDate => "invalid_date",
            DiagnosticKind::EmptyList => "empty_list",
        }
    }
}

/// A single advisory warning produced by an entry point
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Name of the entry point that saw the input, e.g. `format_currency`
    pub context: &'static str,
    pub kind: DiagnosticKind,
    /// Rendering of the offending input
    pub input: String,
}

impl Diagnostic {
    pub fn new(context: &'static str, kind: DiagnosticKind, input: impl Into<String>) -> Self {
        Self {
            context,
            kind,
            input: input.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            DiagnosticKind::InvalidNumber => write!(
                f,
                "[{}] invalid value passed: \"{}\". Expected a number or numeric string.",
                self.context, self.input
            ),
            DiagnosticKind::NotANumber => write!(
                f,
                "[{}] invalid numeric value: \"{}\". Expected a number.",
                self.context, self.input
            ),
            DiagnosticKind::MissingDate => {
                write!(f, "[{}] received null or undefined date", self.context)
            }
            DiagnosticKind::InvalidDate => {
                write!(f, "[{}] invalid date input: \"{}\"", self.context, self.input)
            }
            DiagnosticKind::EmptyList => write!(
                f,
                "[{}] \"items\" must contain at least one non-empty string",
                self.context
            ),
        }
    }
}

/// Destination for advisory diagnostics
pub trait DiagnosticSink {
    fn report(&self, diagnostic: Diagnostic);
}

/// Emits every diagnostic as a `tracing` warning
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, diagnostic: Diagnostic) {
        tracing::warn!(
            context = diagnostic.context,
            kind = diagnostic.kind.as_str(),
            input = %diagnostic.input,
            "{}",
            diagnostic
        );
    }
}

/// Keeps diagnostics in memory; clones share the same buffer
#[derive(Debug, Clone, Default)]
pub struct CollectingSink {
    entries: Arc<Mutex<Vec<Diagnostic>>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything reported so far
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        match self.entries.lock() {
            Ok(entries) => entries.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.diagnostics().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drain the buffer
    pub fn take(&self) -> Vec<Diagnostic> {
        match self.entries.lock() {
            Ok(mut entries) => std::mem::take(&mut *entries),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&self, diagnostic: Diagnostic) {
        match self.entries.lock() {
            Ok(mut entries) => entries.push(diagnostic),
            Err(poisoned) => poisoned.into_inner().push(diagnostic),
        }
    }
}

/// Discards diagnostics
impl DiagnosticSink for () {
    fn report(&self, _diagnostic: Diagnostic) {}
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &S {
    fn report(&self, diagnostic: Diagnostic) {
        (**self).report(diagnostic)
    }
}

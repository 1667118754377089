//! Step-by-step narration of the arithmetic and the protocol
//!
//! The engine reports what it is doing through a [`Narrator`]. Narration is
//! output only: nothing a narrator does can change a computed value.

use core::fmt;

/// How a narrated line should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleHint {
    /// Start of a protocol phase
    Heading,
    /// A numbered protocol step
    Step,
    /// An intermediate value
    Detail,
    /// Successful outcome
    Success,
    /// Rejection or failure
    Failure,
}

impl StyleHint {
    /// Lower-case label used as a structured log field
    pub fn as_str(self) -> &'static str {
        match self {
            StyleHint::Heading => "heading",
            StyleHint::Step => "step",
            StyleHint::Detail => "detail",
            StyleHint::Success => "success",
            StyleHint::Failure => "failure",
        }
    }
}

impl fmt::Display for StyleHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sink for `(message, style)` narration pairs
pub trait Narrator: Send + Sync {
    /// Report one line
    fn narrate(&self, message: fmt::Arguments<'_>, style: StyleHint);
}

/// Narrator that drops everything
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentNarrator;

impl Narrator for SilentNarrator {
    #[inline]
    fn narrate(&self, _message: fmt::Arguments<'_>, _style: StyleHint) {}
}

/// Narrator that forwards every line to `tracing`
///
/// Headings and outcomes go out at `INFO`, steps at `DEBUG` and
/// intermediate values at `TRACE`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNarrator;

impl Narrator for TracingNarrator {
    fn narrate(&self, message: fmt::Arguments<'_>, style: StyleHint) {
        let label = style.as_str();
        match style {
            StyleHint::Heading | StyleHint::Success => {
                tracing::info!(target: "ecgost::narration", style = label, "{}", message)
            }
            StyleHint::Failure => {
                tracing::warn!(target: "ecgost::narration", style = label, "{}", message)
            }
            StyleHint::Step => {
                tracing::debug!(target: "ecgost::narration", style = label, "{}", message)
            }
            StyleHint::Detail => {
                tracing::trace!(target: "ecgost::narration", style = label, "{}", message)
            }
        }
    }
}

impl<N: Narrator + ?Sized> Narrator for Box<N> {
    fn narrate(&self, message: fmt::Arguments<'_>, style: StyleHint) {
        (**self).narrate(message, style)
    }
}

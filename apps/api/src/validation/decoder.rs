//! Response decoder — turns the model's freeform answer into a
//! [`ValidationResult`], never failing.
//!
//! The model is asked for a two-line `TOOLTIP:` / `EXAMPLE:` answer but
//! routinely deviates: markers go missing, markdown sneaks in, lines merge
//! or split. The decoder walks the reply line by line with a small state
//! machine and falls back to hard defaults, so decoding is total — the only
//! failure the caller ever sees from the pipeline is the model call itself.

use crate::validation::field::{FieldKind, ValidationResult};

// Markers are matched case-insensitively; the search keys are lowercase.
const TOOLTIP_TOKEN: &str = "tooltip:";
const EXAMPLE_TOKEN: &str = "example:";

/// Substituted when no usable tooltip text survives extraction.
pub const DEFAULT_TOOLTIP: &str = "Check your input.";

// ────────────────────────────────────────────────────────────────────────────
// Scanner
// ────────────────────────────────────────────────────────────────────────────

/// Scanner states. Marker lines whose text continues on a later line park in
/// the `Awaiting*` states. `Done` means the example is settled; the scan
/// still watches for a late tooltip there when none was captured, and stops
/// once both values are. Marker tokens themselves never reach the output
/// values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// No marker seen yet; plain lines accumulate as preamble.
    SeekingTooltip,
    /// `TOOLTIP:` seen with nothing after it on that line.
    AwaitingTooltipText,
    /// Tooltip captured; looking for `EXAMPLE:`.
    SeekingExample,
    /// `EXAMPLE:` seen with nothing after it on that line.
    AwaitingExampleText,
    Done,
}

/// Decodes a raw model reply. Total: always produces a non-empty tooltip
/// and a non-empty example, substituting defaults where extraction comes up
/// empty. The field kind selects which default example applies.
pub fn decode(raw_text: &str, kind: FieldKind) -> ValidationResult {
    let mut state = ScanState::SeekingTooltip;
    let mut tooltip = String::new();
    let mut example = String::new();
    let mut preamble: Vec<&str> = Vec::new();

    for line in raw_text.lines() {
        state = match state {
            ScanState::SeekingTooltip => {
                if let Some((_, rest)) = split_at_marker(line, TOOLTIP_TOKEN) {
                    take_tooltip(rest, &mut tooltip, &mut example)
                } else if let Some((before, rest)) = split_at_marker(line, EXAMPLE_TOKEN) {
                    // No TOOLTIP marker so far: everything before the first
                    // EXAMPLE marker serves as the tooltip.
                    preamble.push(before);
                    tooltip = join_preamble(&preamble);
                    take_example(rest, &mut example)
                } else {
                    preamble.push(line);
                    ScanState::SeekingTooltip
                }
            }
            ScanState::AwaitingTooltipText => {
                if let Some((_, rest)) = split_at_marker(line, TOOLTIP_TOKEN) {
                    take_tooltip(rest, &mut tooltip, &mut example)
                } else if let Some((before, rest)) = split_at_marker(line, EXAMPLE_TOKEN) {
                    set_if_nonblank(&mut tooltip, before);
                    take_example(rest, &mut example)
                } else if !line.trim().is_empty() {
                    tooltip = line.trim().to_string();
                    ScanState::SeekingExample
                } else {
                    ScanState::AwaitingTooltipText
                }
            }
            ScanState::SeekingExample => {
                if let Some((_, rest)) = split_at_marker(line, EXAMPLE_TOKEN) {
                    take_example(rest, &mut example)
                } else {
                    ScanState::SeekingExample
                }
            }
            ScanState::AwaitingExampleText => {
                if let Some((_, rest)) = split_at_marker(line, TOOLTIP_TOKEN) {
                    // A tooltip line arriving here is re-captured; marker
                    // lines never become example text.
                    take_tooltip(rest, &mut tooltip, &mut example)
                } else if let Some((_, rest)) = split_at_marker(line, EXAMPLE_TOKEN) {
                    take_example(rest, &mut example)
                } else if !line.trim().is_empty() {
                    example = line.trim().to_string();
                    ScanState::Done
                } else {
                    ScanState::AwaitingExampleText
                }
            }
            ScanState::Done => {
                // Example settled but no tooltip captured yet: a late
                // tooltip line with inline text can still supply it. The
                // scan never reopens example capture; the first example
                // stands.
                if let Some((_, rest)) = split_at_marker(line, TOOLTIP_TOKEN) {
                    let text = match split_at_marker(rest, EXAMPLE_TOKEN) {
                        Some((before, _)) => before,
                        None => rest,
                    };
                    set_if_nonblank(&mut tooltip, last_segment(text, TOOLTIP_TOKEN));
                }
                ScanState::Done
            }
        };
        if state == ScanState::Done && !tooltip.is_empty() {
            break;
        }
    }

    // Free-text reply with no marker anywhere: the whole reply is the tooltip.
    if state == ScanState::SeekingTooltip {
        tooltip = join_preamble(&preamble);
    }

    let tooltip = sanitize(&tooltip);
    let example = sanitize(&example);

    ValidationResult {
        tooltip: if tooltip.is_empty() {
            DEFAULT_TOOLTIP.to_string()
        } else {
            tooltip
        },
        example: if example.is_empty() {
            kind.default_example().to_string()
        } else {
            example
        },
    }
}

/// Consumes the text following a `TOOLTIP:` marker. The tooltip may share
/// its line with an `EXAMPLE:` marker or continue on a later line. Repeated
/// markers on one line resolve to the text after the last one.
fn take_tooltip(rest: &str, tooltip: &mut String, example: &mut String) -> ScanState {
    if let Some((before, after)) = split_at_marker(rest, EXAMPLE_TOKEN) {
        set_if_nonblank(tooltip, last_segment(before, TOOLTIP_TOKEN));
        take_example(after, example)
    } else {
        let rest = last_segment(rest, TOOLTIP_TOKEN);
        if rest.trim().is_empty() {
            ScanState::AwaitingTooltipText
        } else {
            *tooltip = rest.trim().to_string();
            ScanState::SeekingExample
        }
    }
}

/// Consumes the text following an `EXAMPLE:` marker. An empty remainder
/// means the example continues on a later line. A `TOOLTIP:` marker on the
/// same line ends the example text early; marker tokens never count as
/// example content.
fn take_example(rest: &str, example: &mut String) -> ScanState {
    let rest = match split_at_marker(rest, TOOLTIP_TOKEN) {
        Some((before, _)) => before,
        None => rest,
    };
    if rest.trim().is_empty() {
        ScanState::AwaitingExampleText
    } else {
        *example = rest.trim().to_string();
        ScanState::Done
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Text helpers
// ────────────────────────────────────────────────────────────────────────────

/// Case-insensitive marker search within one line. Returns the text before
/// and after the first occurrence. ASCII folding keeps byte offsets valid.
fn split_at_marker<'a>(line: &'a str, marker_lower: &str) -> Option<(&'a str, &'a str)> {
    let start = line.to_ascii_lowercase().find(marker_lower)?;
    Some((&line[..start], &line[start + marker_lower.len()..]))
}

/// Text after the final occurrence of the marker, or all of `text` when the
/// marker is absent.
fn last_segment<'a>(text: &'a str, marker_lower: &str) -> &'a str {
    let mut rest = text;
    while let Some((_, tail)) = split_at_marker(rest, marker_lower) {
        rest = tail;
    }
    rest
}

fn join_preamble(lines: &[&str]) -> String {
    lines.join("\n").trim().to_string()
}

fn set_if_nonblank(slot: &mut String, text: &str) {
    let trimmed = text.trim();
    if !trimmed.is_empty() {
        *slot = trimmed.to_string();
    }
}

/// Strips the markdown artifacts the model habitually adds (`**` emphasis,
/// backtick code spans), then trims.
fn sanitize(text: &str) -> String {
    text.replace("**", "").replace('`', "").trim().to_string()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

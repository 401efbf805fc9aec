use std::sync::Arc;

use crate::foundation::core::FrameIndex;
use crate::foundation::error::{TypewriterError, TypewriterResult};
use crate::foundation::rng::Rng64;
use crate::reveal::engine::{EngineFactory, EngineOpts, RevealEngine, RevealUnit};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Piece {
    Char(char),
    Pause(u64),
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Unit {
    text: String,
    pause_before: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Step {
    text: String,
    reveal_at: u64,
}

/// Default reveal engine: prints the payload one unit at a time.
///
/// Payload markup:
///
/// - `\x` inserts `x` literally (use `\{` and `\\` for braces and backslashes);
/// - `{N}` holds the reveal for `N` extra frames before the next unit.
///
/// The unit revealed at step `k` becomes visible at the cumulative sum of all preceding step
/// durations (`step_frames` plus seeded jitter, never negative) and pauses.
#[derive(Clone, Debug)]
pub struct TypeWriter {
    opts: EngineOpts,
    raw: String,
    steps: Vec<Step>,
}

impl TypeWriter {
    /// Create an engine with no payload.
    pub fn new(opts: EngineOpts) -> Self {
        Self {
            opts,
            raw: String::new(),
            steps: Vec::new(),
        }
    }

    /// Factory producing [`TypeWriter`] engines.
    pub fn factory() -> EngineFactory {
        Arc::new(|opts: &EngineOpts| -> Box<dyn RevealEngine> {
            Box::new(TypeWriter::new(opts.clone()))
        })
    }

    /// First frame at which the whole payload is visible.
    pub fn completed_at(&self) -> FrameIndex {
        FrameIndex(self.steps.last().map_or(0, |s| s.reveal_at))
    }

    fn schedule(&self, units: Vec<Unit>) -> Vec<Step> {
        let mut rng = Rng64::new(self.opts.seed);
        let mut t = 0u64;
        units
            .into_iter()
            .map(|u| {
                let jitter = rng.next_symmetric(self.opts.sigma);
                let step = (i64::from(self.opts.step_frames) + jitter).max(0) as u64;
                t = t.saturating_add(u.pause_before).saturating_add(step);
                Step {
                    text: u.text,
                    reveal_at: t,
                }
            })
            .collect()
    }
}

impl RevealEngine for TypeWriter {
    fn set_payload(&mut self, payload: &str) {
        self.raw.clear();
        self.raw.push_str(payload);
        self.steps.clear();
    }

    fn parse(&mut self) -> TypewriterResult<()> {
        let pieces = lex(&self.raw)?;
        let units = group(&pieces, self.opts.unit);
        self.steps = self.schedule(units);
        Ok(())
    }

    fn render_into(&self, position: FrameIndex, out: &mut String) {
        let visible = self.steps.partition_point(|s| s.reveal_at <= position.0);
        for s in &self.steps[..visible] {
            out.push_str(&s.text);
        }
    }
}

fn lex(raw: &str) -> TypewriterResult<Vec<Piece>> {
    let mut out = Vec::with_capacity(raw.len());
    let mut chars = raw.char_indices();
    while let Some((at, c)) = chars.next() {
        match c {
            '\\' => {
                let Some((_, escaped)) = chars.next() else {
                    return Err(TypewriterError::payload_parse(format!(
                        "dangling escape at byte {at}"
                    )));
                };
                out.push(Piece::Char(escaped));
            }
            '{' => {
                let mut body = String::new();
                loop {
                    match chars.next() {
                        Some((_, '}')) => break,
                        Some((_, d)) => body.push(d),
                        None => {
                            return Err(TypewriterError::payload_parse(format!(
                                "unterminated pause at byte {at}"
                            )));
                        }
                    }
                }
                let frames = body.trim().parse::<u64>().map_err(|_| {
                    TypewriterError::payload_parse(format!("invalid pause '{{{body}}}' at byte {at}"))
                })?;
                out.push(Piece::Pause(frames));
            }
            c => out.push(Piece::Char(c)),
        }
    }
    Ok(out)
}

fn flush(cur: &mut String, pause: u64, units: &mut Vec<Unit>) {
    if !cur.is_empty() {
        units.push(Unit {
            text: std::mem::take(cur),
            pause_before: pause,
        });
    }
}

fn group(pieces: &[Piece], unit: RevealUnit) -> Vec<Unit> {
    let mut units = Vec::new();
    let mut cur = String::new();
    let mut cur_pause = 0u64;
    let mut pending = 0u64;

    for &piece in pieces {
        match piece {
            Piece::Pause(n) => {
                // A pause always closes the unit in progress.
                flush(&mut cur, cur_pause, &mut units);
                pending = pending.saturating_add(n);
            }
            Piece::Char(c) => {
                let boundary = match unit {
                    RevealUnit::Char => !cur.is_empty(),
                    RevealUnit::Word => cur.ends_with(char::is_whitespace) && !c.is_whitespace(),
                    RevealUnit::Line => cur.ends_with('\n'),
                };
                if boundary {
                    flush(&mut cur, cur_pause, &mut units);
                }
                if cur.is_empty() {
                    cur_pause = std::mem::take(&mut pending);
                }
                cur.push(c);
            }
        }
    }
    flush(&mut cur, cur_pause, &mut units);
    units
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/typewriter.rs"]
mod tests;

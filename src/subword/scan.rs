//! The two difference-sequence scans.
//!
//! Both scans walk `diffs` once with a three-state machine. `start` marks
//! where the candidate window begins; `pending` counts rising steps seen
//! (while rising) or steps still expected (while closing/completing).

use super::{Subword, SubwordKind};
use crate::word::Letter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReturnState {
    Idle,
    Rising,
    /// Zero pivot seen; consuming the fall.
    Closing,
}

/// Find maximal return words and loops.
pub(super) fn scan_return_words(letters: &[Letter], diffs: &[i32], out: &mut Vec<Subword>) {
    let last = diffs.len() - 1;
    let mut state = ReturnState::Idle;
    let mut start = 0usize;
    let mut pending = 0usize;

    for (i, &d) in diffs.iter().enumerate() {
        match d {
            0 => {
                // A zero inside a rise is the pivot, unless the word ends
                // here and no fall can follow. Anywhere else it is a loop.
                if state == ReturnState::Rising && i != last {
                    state = ReturnState::Closing;
                } else {
                    out.push(Subword::new(SubwordKind::Loop, &letters[i..i + 2]));
                    state = ReturnState::Idle;
                    pending = 0;
                }
            }
            1 => {
                match state {
                    ReturnState::Idle => start = i,
                    ReturnState::Closing => {
                        // Fall cut short by a new rise: the window shrinks to
                        // the symmetric part, dropping the unmatched leading
                        // rises. The new rise starts its own candidate.
                        start += pending;
                        out.push(Subword::new(SubwordKind::Return, &letters[start..=i]));
                        start = i;
                        pending = 0;
                    }
                    ReturnState::Rising => {}
                }
                state = ReturnState::Rising;
                pending += 1;
            }
            -1 => {
                if state == ReturnState::Closing {
                    pending -= 1;
                    if pending == 0 || i == last {
                        // Last-residual case: the fall reaches the end of
                        // the word before balancing the rise.
                        if i == last {
                            start += pending;
                        }
                        out.push(Subword::new(SubwordKind::Return, &letters[start..=i + 1]));
                        state = ReturnState::Idle;
                        pending = 0;
                    }
                } else {
                    state = ReturnState::Idle;
                    pending = 0;
                }
            }
            _ => {
                if state == ReturnState::Closing {
                    // Fall cut short by an arbitrary jump: keep the
                    // symmetric part found so far.
                    start += pending;
                    out.push(Subword::new(SubwordKind::Return, &letters[start..=i]));
                }
                state = ReturnState::Idle;
                pending = 0;
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RepeatState {
    Idle,
    Rising,
    /// Drop seen; consuming the second rise.
    Completing,
}

/// Find maximal repeat words.
pub(super) fn scan_repeat_words(letters: &[Letter], diffs: &[i32], out: &mut Vec<Subword>) {
    let mut state = RepeatState::Idle;
    let mut start = 0usize;
    let mut pending = 0usize;

    for (i, &d) in diffs.iter().enumerate() {
        if d == 1 {
            match state {
                RepeatState::Idle => {
                    state = RepeatState::Rising;
                    start = i;
                    pending = 1;
                }
                RepeatState::Rising => pending += 1,
                RepeatState::Completing => {
                    pending -= 1;
                    if pending == 0 {
                        out.push(Subword::new(SubwordKind::Repeat, &letters[start..=i + 1]));
                        state = RepeatState::Idle;
                    }
                }
            }
        } else if state == RepeatState::Rising && d < 0 && d.unsigned_abs() as usize <= pending {
            // The drop: the rise resumes |d| steps down, so the repeat
            // covers only the trailing |d| rising steps before it.
            let dropped = d.unsigned_abs() as usize;
            start += pending - dropped;
            pending = dropped;
            state = RepeatState::Completing;
        } else {
            state = RepeatState::Idle;
            pending = 0;
        }
    }
}

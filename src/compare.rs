use std::{
    cmp::Ordering::{self, Equal, Greater, Less},
    convert::Infallible,
};

use crate::{
    cursor::Cursor,
    digits::DigitRun,
    error::{CompareError, Side},
};

/// Compares two UTF-8 byte strings in alphanumeric order.
///
/// Runs of ASCII digits compare by numeric value, everything else by code point.
/// Malformed bytes decode to U+FFFD and compare as that character.
pub fn compare(left: &[u8], right: &[u8]) -> Ordering {
    match scan(left, right, |cursor, _| Ok::<_, Infallible>(cursor.next_lossy())) {
        Ok(ord) => ord,
        Err(never) => match never {},
    }
}

pub fn compare_str(left: &str, right: &str) -> Ordering {
    compare(left.as_bytes(), right.as_bytes())
}

/// Strict "less than" predicate, for use as a sort callback.
pub fn less(left: &str, right: &str) -> bool {
    compare_str(left, right) == Less
}

/// Like [`compare`], but a malformed UTF-8 sequence met during the scan is an error.
///
/// Only the part of each operand scanned before the result was decided is validated.
pub fn try_compare(left: &[u8], right: &[u8]) -> Result<Ordering, CompareError> {
    scan(left, right, |cursor, side| {
        cursor.try_next().map_err(|offset| {
            tracing::debug!(%side, offset, "rejecting malformed operand");
            CompareError::MalformedUtf8 { side, offset }
        })
    })
}

fn scan<E>(
    left: &[u8],
    right: &[u8],
    mut next: impl FnMut(&mut Cursor<'_>, Side) -> Result<Option<char>, E>,
) -> Result<Ordering, E> {
    let mut l_cursor = Cursor::new(left);
    let mut r_cursor = Cursor::new(right);
    let mut l_run = DigitRun::new();
    let mut r_run = DigitRun::new();

    macro_rules! return_unless_equal {
        ($ord:expr) => {
            match $ord {
                Equal => {}
                lastcmp => return Ok(lastcmp),
            }
        };
    }

    while !l_cursor.is_exhausted() || !r_cursor.is_exhausted() {
        let mut l = next(&mut l_cursor, Side::Left)?;
        let mut r = next(&mut r_cursor, Side::Right)?;
        let l_digit = l.is_some_and(|c| l_run.push(c));
        let r_digit = r.is_some_and(|c| r_run.push(c));
        if l_digit && r_digit {
            continue;
        }

        // a run closes once both sides hold digits or one side has ended
        if (!l_run.is_empty() && !r_run.is_empty()) || l.is_none() || r.is_none() {
            // the side still inside its run reads on to its own boundary
            if l_digit {
                l = finish_run(&mut l_cursor, Side::Left, &mut l_run, &mut next)?;
            }
            if r_digit {
                r = finish_run(&mut r_cursor, Side::Right, &mut r_run, &mut next)?;
            }
            if !l_run.is_empty() || !r_run.is_empty() {
                return_unless_equal!(l_run.cmp(&r_run));
            }
            l_run.clear();
            r_run.clear();
        }

        // an exhausted side orders first
        return_unless_equal!(l.cmp(&r));
    }

    if !l_run.is_empty() || !r_run.is_empty() {
        return_unless_equal!(l_run.cmp(&r_run));
    }

    Ok(left.len().cmp(&right.len()))
}

/// Pushes digits until the run ends. Returns the boundary character, `None` at end of input.
fn finish_run<E>(
    cursor: &mut Cursor<'_>,
    side: Side,
    run: &mut DigitRun,
    next: &mut impl FnMut(&mut Cursor<'_>, Side) -> Result<Option<char>, E>,
) -> Result<Option<char>, E> {
    loop {
        match next(cursor, side)? {
            Some(c) if run.push(c) => {}
            boundary => return Ok(boundary),
        }
    }
}

//! Parenthesis balance check.
//!
//! Runs over the whole pattern before anything else looks at it, so the
//! compiler can assume every unescaped `(` has a matching `)`.

use rega_core::{meta, scan};

use crate::PatternError;

/// Reject patterns whose unescaped parentheses do not pair up.
///
/// A `)` preceded by fewer `(` than its own rank is unopened. Otherwise, when
/// the counts differ, the first `(` with no matching `)` is reported.
pub fn validate_groups(pattern: &str) -> Result<(), PatternError> {
    let opens = scan::find_unescaped(pattern, meta::GROUP_START, false);
    let closes = scan::find_unescaped(pattern, meta::GROUP_END, false);

    for (rank, &close) in closes.iter().enumerate() {
        let opened_before = opens.iter().take_while(|&&open| open < close).count();
        if opened_before <= rank {
            return Err(PatternError::UnopenedGroup { offset: close });
        }
    }

    if let Some(&open) = opens
        .iter()
        .find(|&&open| scan::find_group_end(pattern, open).is_none())
    {
        return Err(PatternError::UnclosedGroup { offset: open });
    }

    Ok(())
}

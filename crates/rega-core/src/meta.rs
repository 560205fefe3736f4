//! Pattern metacharacters.
//!
//! The escape character and the non-capture marker are not metacharacters on
//! their own: the escape only changes how the next character is read, and the
//! marker only has meaning right after a group opening.

pub const ESCAPE: &str = "\\";

pub const STRING_START: &str = "^";
pub const STRING_END: &str = "$";

pub const GROUP_START: &str = "(";
pub const GROUP_END: &str = ")";
pub const NON_CAPTURE: &str = "?:";

pub const OR: &str = "|";

pub const ZERO_OR_MORE: &str = "*";

//! Error recovery for [`Parser::parse_unit`](crate::Parser::parse_unit).

use ry_ir::{TokenCode, TokenSet};

use crate::cursor::Cursor;

/// Tokens a unit can resume at after a broken statement.
pub(crate) const STATEMENT_BOUNDARY: TokenSet = TokenSet::single(TokenCode::Semicolon);

/// Advance the cursor until reaching a token in the recovery set or the end.
///
/// Returns `true` if a recovery token was found.
pub(crate) fn synchronize(cursor: &mut Cursor<'_>, recovery: TokenSet) -> bool {
    while !cursor.is_at_end() {
        if cursor.check_set(recovery) {
            return true;
        }
        cursor.advance();
    }
    false
}

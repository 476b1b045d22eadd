//! Request validation predicates.
//!
//! One pure function per domain rule. These gate every query before any
//! network I/O happens; they are also exported so callers can pre-check
//! parameters and avoid burning API quota on requests that cannot succeed.

use crate::types::Chamber;

/// Latest congress the upstream dataset covers.
///
/// Default upper bound for [`is_valid_congress`]. Override it per client via
/// [`crate::config::Config::current_congress`] or
/// [`is_valid_congress_as_of`] when the dataset moves forward.
pub const CURRENT_SESSION: i64 = 115;

/// Whether `offset` is usable as a pagination cursor.
///
/// The upstream API pages in blocks of 20. Negative offsets are rejected;
/// nothing upstream pages backwards.
#[must_use]
pub const fn is_valid_offset(offset: i64) -> bool {
    offset >= 0 && offset % 20 == 0
}

/// Whether `value` belongs to the closed vocabulary `allowed`.
///
/// An empty vocabulary rejects everything, as does an empty value.
#[must_use]
pub fn is_valid_type(value: &str, allowed: &[&str]) -> bool {
    !value.is_empty() && allowed.contains(&value)
}

/// Whether `chamber` names a chamber of Congress (`"senate"` or `"house"`).
#[must_use]
pub fn is_valid_chamber(chamber: &str) -> bool {
    is_valid_type(chamber, &Chamber::VALUES)
}

/// Whether `session` is a queryable congress.
///
/// Bounded above by [`CURRENT_SESSION`] and below by `earliest` when the
/// endpoint imposes one.
#[must_use]
pub fn is_valid_congress(session: i64, earliest: Option<i64>) -> bool {
    is_valid_congress_as_of(session, earliest, CURRENT_SESSION)
}

/// [`is_valid_congress`] with an explicit latest-known congress.
#[must_use]
pub fn is_valid_congress_as_of(session: i64, earliest: Option<i64>, current: i64) -> bool {
    session <= current && earliest.is_none_or(|e| session >= e)
}

/// Whether `api_key` is plausibly usable (non-empty).
#[must_use]
pub fn is_valid_api_key(api_key: &str) -> bool {
    !api_key.is_empty()
}

/// Whether `bill_id` is a house-resolution identifier: `hres` followed by
/// one or more digits, nothing else.
#[must_use]
pub fn is_valid_bill_id(bill_id: &str) -> bool {
    bill_id.strip_prefix("hres").is_some_and(|digits| {
        !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
    })
}

/// Whether `member_id` is a bioguide-style member identifier: exactly one
/// uppercase letter followed by exactly six digits.
#[must_use]
pub fn is_valid_member_id(member_id: &str) -> bool {
    let bytes = member_id.as_bytes();
    bytes.len() == 7
        && bytes[0].is_ascii_uppercase()
        && bytes[1..].iter().all(u8::is_ascii_digit)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Every congress above the current session is rejected
        #[test]
        fn congress_above_current_rejected(session in 116i64..100_000) {
            prop_assert!(!is_valid_congress(session, None));
        }

        /// Every congress from 1 through the current session is accepted
        #[test]
        fn congress_up_to_current_accepted(session in 1i64..=115) {
            prop_assert!(is_valid_congress(session, None));
        }

        /// With a lower bound, validity is exactly the closed range check
        #[test]
        fn congress_matches_range_predicate(session: i64, earliest: i64) {
            prop_assert_eq!(
                is_valid_congress(session, Some(earliest)),
                session <= CURRENT_SESSION && session >= earliest
            );
        }

        /// Non-negative multiples of 20 are always valid offsets
        #[test]
        fn offset_multiples_accepted(page in 0i64..1_000_000) {
            prop_assert!(is_valid_offset(page * 20));
        }

        /// Everything that is not a non-negative multiple of 20 is rejected
        #[test]
        fn offset_matches_predicate(offset: i64) {
            prop_assert_eq!(is_valid_offset(offset), offset >= 0 && offset % 20 == 0);
        }

        /// Valid member IDs survive the full-string check; any extra
        /// character on either side breaks them
        #[test]
        fn member_id_rejects_padding(letter in prop::char::range('A', 'Z'), digits in 0u32..=999_999) {
            let id = format!("{letter}{digits:06}");
            let leading_padded = format!(" {id}");
            let trailing_padded = format!("{id}0");
            prop_assert!(is_valid_member_id(&id));
            prop_assert!(!is_valid_member_id(&leading_padded));
            prop_assert!(!is_valid_member_id(&trailing_padded));
        }
    }
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::calendar::is_within_window;
use crate::types::Member;
use time::OffsetDateTime;

/// Returns true if `member` holds a season card active at `now`.
///
/// Both ends of the card's validity are inclusive.
#[must_use]
pub fn is_season_card_valid(member: &Member, now: OffsetDateTime) -> bool {
    member
        .valid_season_card
        .is_some_and(|card| is_within_window(now, Some(card.valid_from), Some(card.valid_to)))
}

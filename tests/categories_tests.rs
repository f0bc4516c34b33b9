// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use finpulse::categories::{palette, palette_kind};
use finpulse::models::EntryType;

#[test]
fn palette_kinds() {
    assert_eq!(palette().count(), 12);
    assert_eq!(palette_kind("Salary"), Some(EntryType::Income));
    assert_eq!(palette_kind(" food & drinks "), Some(EntryType::Expense));
    assert_eq!(palette_kind("Crypto"), None);
}

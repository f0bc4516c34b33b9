// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::categories::palette;
use crate::utils::pretty_table;
use anyhow::Result;

pub fn handle() -> Result<()> {
    let data = palette()
        .map(|(kind, name)| vec![name.to_string(), kind.to_string()])
        .collect();
    println!("{}", pretty_table(&["Category", "Type"], data));
    Ok(())
}

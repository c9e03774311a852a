// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Reading and interrogating the observation header (.h) files written by LOFAR
station LCUs alongside each raw statistics dump.
 */

pub mod cmd_parsing;
pub mod filenames;
pub mod glob;
pub mod header;

mod cli;

// Re-exports.
pub use cli::{Obsheader, ObsheaderError};
pub use header::{LdatType, ObservationHeader};

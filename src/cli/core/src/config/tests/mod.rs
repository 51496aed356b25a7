/* src/cli/core/src/config/tests/mod.rs */

use super::*;
use super::loader::{CONFIG_FILE, find_busbar_config, load_busbar_config};

mod parsing;
mod validation;

/* src/cli/core/src/paths.rs */

use anyhow::{Result, bail};
use busbar_engine::{RouteTable, path_report, validate_table};

use crate::ui;

/// Validate the built-in route table and print the markdown report.
pub fn run_paths() -> Result<()> {
  let table = RouteTable::builtin();
  let report = validate_table(&table);

  ui::banner("paths");
  for warning in &report.warnings {
    ui::warn(warning);
  }
  for error in &report.errors {
    ui::fail(error);
  }
  if !report.is_valid() {
    bail!("route table has {} error(s)", report.errors.len());
  }
  ui::ok(&format!("{} routes, {} templates", report.route_count, report.template_count));
  ui::blank();
  println!("{}", path_report(&table));
  Ok(())
}

//! Tool command implementation

use crate::error::Result;
use crate::tool::ToolLocation;
use crate::ui::display;

/// Print the resolved macpack location and whether it exists
pub fn run() -> Result<()> {
    let tool = ToolLocation::resolve()?;
    display::display_tool(&tool);
    Ok(())
}

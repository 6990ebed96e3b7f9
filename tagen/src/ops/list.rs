//! List operation - functions grouped by `GroupId`.

use tagen_codegen::schema::{DisplayStyle, FunctionGroups, FunctionListDisplay};
use tagen_ir::ApiIR;

use crate::reports::ListReport;

/// Execute the list operation.
pub fn list(api: &ApiIR, style: DisplayStyle) -> ListReport {
    let groups = FunctionGroups::new(api);
    let listing = FunctionListDisplay::new(&groups)
        .style(style)
        .indent("  ")
        .to_string();

    ListReport {
        function_count: api.len(),
        group_count: groups.len(),
        listing,
    }
}

//! List command report data structures.

use super::output::{Output, Report};

/// Report data from listing the schema.
#[derive(Debug)]
pub struct ListReport {
    pub function_count: usize,
    pub group_count: usize,
    /// Rendered function list.
    pub listing: String,
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        if self.function_count == 0 {
            out.preformatted("No functions defined");
            return;
        }

        out.title(&format!(
            "{} functions in {} groups",
            self.function_count, self.group_count
        ));
        out.preformatted(&self.listing);
    }
}

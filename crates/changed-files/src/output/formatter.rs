use changed_files_operations::operations::DetectOutput;

use crate::error::Result;

pub(crate) trait OutputFormatter {
    fn format(&self, output: &DetectOutput) -> Result<String>;
}

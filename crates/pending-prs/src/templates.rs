use report_core::ReportTemplates;

/// Preambles compiled into the binary
pub const TEMPLATES: ReportTemplates<'static> = ReportTemplates {
    by_repository: include_str!("../templates/by_repository.txt"),
    unattended: include_str!("../templates/unattended.txt"),
};

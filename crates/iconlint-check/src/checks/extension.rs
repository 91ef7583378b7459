//! IconExtension: file extensions that disagree with the sniffed format

use super::{Check, CheckContext};
use crate::diagnostic::Diagnostic;
use crate::issue::IssueId;

/// File extension disagrees with the sniffed format
pub struct ExtensionCheck;

impl Check for ExtensionCheck {
    fn name(&self) -> &'static str {
        "extension"
    }

    fn issues(&self) -> &'static [IssueId] {
        &[IssueId::Extension]
    }

    fn run(&self, ctx: &CheckContext<'_>, out: &mut Vec<Diagnostic>) {
        for (_, file) in ctx.snapshot.files() {
            let Some(info) = file.image() else {
                continue;
            };
            if !info.format.matches_extension(&file.extension) {
                // Report the extension as written, not the lower-cased one
                let named = file
                    .name
                    .rsplit_once('.')
                    .map_or(file.extension.as_str(), |(_, ext)| ext);
                out.push(Diagnostic::new(
                    IssueId::Extension,
                    &file.path,
                    format!(
                        "Misleading file extension; named .{} but the file format is {}",
                        named, info.format
                    ),
                ));
            }
        }
    }
}

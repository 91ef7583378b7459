//! IconUnreadable

use super::{Check, CheckContext};
use crate::diagnostic::Diagnostic;
use crate::issue::IssueId;

/// Bitmaps whose contents cannot be decoded
pub struct UnreadableCheck;

impl Check for UnreadableCheck {
    fn name(&self) -> &'static str {
        "unreadable"
    }

    fn issues(&self) -> &'static [IssueId] {
        &[IssueId::Unreadable]
    }

    fn run(&self, ctx: &CheckContext<'_>, out: &mut Vec<Diagnostic>) {
        for (_, file) in ctx.snapshot.files() {
            if let Some(reason) = file.unreadable_reason() {
                out.push(Diagnostic::new(
                    IssueId::Unreadable,
                    &file.path,
                    format!("The image {} could not be decoded: {}", file.name, reason),
                ));
            }
        }
    }
}

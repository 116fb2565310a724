//! Prompt Port
//!
//! Interactive yes/no confirmation at risk points of a sync run.

/// Asks the operator to confirm a step.
///
/// Returns `false` for "no" and for any failure to ask (closed stdin,
/// interrupted read), so a broken terminal never approves a destructive step.
pub trait Prompt {
    fn confirm(&self, message: &str) -> bool;
}

/// Approves every confirmation. Used for `--yes`.
pub struct AlwaysConfirm;

impl Prompt for AlwaysConfirm {
    fn confirm(&self, _message: &str) -> bool {
        true
    }
}

impl<T: Prompt + ?Sized> Prompt for &T {
    fn confirm(&self, message: &str) -> bool {
        (**self).confirm(message)
    }
}

impl<T: Prompt + ?Sized> Prompt for Box<T> {
    fn confirm(&self, message: &str) -> bool {
        (**self).confirm(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_confirm_says_yes() {
        assert!(AlwaysConfirm.confirm("Delete everything?"));
    }
}

// src/services/confirmation.rs
//
// Yes/no gate consulted before destructive actions

#[cfg_attr(test, mockall::automock)]
pub trait Confirmation {
    /// Ask the user; `true` means go ahead
    fn confirm(&self, prompt: &str) -> bool;
}

/// Approves everything. For scripted runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct AlwaysConfirm;

impl Confirmation for AlwaysConfirm {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}

/// Declines everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NeverConfirm;

impl Confirmation for NeverConfirm {
    fn confirm(&self, _prompt: &str) -> bool {
        false
    }
}

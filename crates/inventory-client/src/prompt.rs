//! Blocking alert / confirmation seam.
//!
//! The dashboard reports failures and asks before destructive actions
//! through this trait, so the terminal binary and the tests can each supply
//! their own.

/// Question asked before deleting a product.
pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this product?";

/// Blocking user interaction.
pub trait Prompt {
    /// Shows a message and waits for acknowledgement.
    fn alert(&self, message: &str);

    /// Asks a yes/no question. `true` means proceed.
    fn confirm(&self, message: &str) -> bool;
}

impl<P: Prompt + ?Sized> Prompt for &P {
    fn alert(&self, message: &str) {
        (**self).alert(message)
    }

    fn confirm(&self, message: &str) -> bool {
        (**self).confirm(message)
    }
}

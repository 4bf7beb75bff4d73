use crate::core::Result;
use crate::modules::checkout::models::CheckoutOptions;

/// Vendor checkout UI
///
/// `open` takes the widget by value: one activation per constructed widget.
pub trait CheckoutWidget {
    /// Hand control to the vendor UI
    fn open(self) -> Result<()>;
}

/// Constructs widgets from checkout options
pub trait WidgetBuilder: Send + Sync {
    type Widget: CheckoutWidget;

    fn build(&self, options: CheckoutOptions) -> Result<Self::Widget>;
}

use crate::Result;

/// An event listener on a host element, registered for as long as the
/// element is connected to the document.
pub trait HostListener {
    fn attach(&mut self) -> Result<()>;

    fn detach(&mut self);

    fn is_attached(&self) -> bool;
}

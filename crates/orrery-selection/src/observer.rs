use orrery_bodies::BodyDescriptor;

/// Receives the selected body whenever the selection changes.
///
/// `None` means the selection was cleared. Closures taking
/// `Option<&BodyDescriptor>` implement this trait directly.
pub trait SelectionObserver {
    fn on_selection_changed(&mut self, body: Option<&BodyDescriptor>);
}

impl<F> SelectionObserver for F
where
    F: FnMut(Option<&BodyDescriptor>),
{
    fn on_selection_changed(&mut self, body: Option<&BodyDescriptor>) {
        self(body)
    }
}

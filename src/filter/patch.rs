use crate::producer::Producer;

/// Scoped ownership of a patched producer field.
///
/// Creating the guard writes the patched text and raises the reload signal; dropping it writes the
/// original text back and clears the signal. Drop also runs while unwinding, so a panicking
/// downstream render still restores the field.
pub(crate) struct PatchGuard<'p> {
    producer: &'p mut Producer,
    field: &'p str,
    original: &'p str,
}

impl<'p> PatchGuard<'p> {
    pub(crate) fn apply(
        producer: &'p mut Producer,
        field: &'p str,
        original: &'p str,
        patched: String,
    ) -> Self {
        producer.set_field(field, patched);
        producer.set_force_reload(true);
        Self {
            producer,
            field,
            original,
        }
    }

    pub(crate) fn producer(&mut self) -> &mut Producer {
        self.producer
    }
}

impl Drop for PatchGuard<'_> {
    fn drop(&mut self) {
        self.producer.set_field(self.field, self.original.to_owned());
        self.producer.set_force_reload(false);
    }
}

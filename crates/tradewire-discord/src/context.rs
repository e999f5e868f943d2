use tradewire_core::types::OutboundSink;
use tradewire_extract::Extractor;

/// Collaborators injected into the Discord handler.
///
/// The handler never constructs its clients; the extraction client and the
/// outbound channel both arrive through this trait.
pub trait RelayAppContext: Send + Sync {
    fn extractor(&self) -> &Extractor;
    fn outbound(&self) -> &dyn OutboundSink;
}

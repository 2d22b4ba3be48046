use plv_types::StateDocument;

/// Which path produced a resolved state document.
///
/// The fallback chains are deliberate behavior, so the outcome is tagged
/// explicitly rather than inferred from the final values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResolutionSource {
    /// Reconstructed from a history snapshot at-or-before the requested
    /// instant.
    FromHistory,
    /// Composed from current state; no timestamp was requested.
    FromCurrent,
    /// A timestamp was requested but no snapshot existed at or before it;
    /// composed from current state with the requested instant attached.
    FromCurrentAtRequested,
}

/// Result of resolving one object: the document plus provenance.
///
/// `synthesized_coordinates` is orthogonal to `source`: it marks that the
/// object had no stored coordinates and the default set was substituted.
/// It can co-occur with either current-state source.
#[derive(Clone, Debug, PartialEq)]
pub struct Resolution {
    pub document: StateDocument,
    pub source: ResolutionSource,
    pub synthesized_coordinates: bool,
}

impl Resolution {
    /// Returns `true` if the document was reconstructed from history.
    pub fn is_historical(&self) -> bool {
        self.source == ResolutionSource::FromHistory
    }
}

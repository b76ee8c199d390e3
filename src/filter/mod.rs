/// Combined facet filters and the visibility predicate
pub mod criteria;
/// Facet dimensions, tagged values and per-facet value sets
pub mod facet;

pub use criteria::FilterCriteria;
pub use facet::{Facet, FacetSet, FacetValue};

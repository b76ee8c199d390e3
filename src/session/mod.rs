/// Session state tying catalog, filters, selection and teams together
pub mod state;

pub use state::Session;

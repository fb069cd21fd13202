pub mod api_envelope;

pub use api_envelope::ApiEnvelope;

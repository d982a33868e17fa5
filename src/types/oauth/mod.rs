//! OAuth2 installation vocabulary.

mod application_integration_type;

pub use self::application_integration_type::ApplicationIntegrationType;

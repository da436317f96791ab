//! Type conversions for GatewayError

use super::types::GatewayError;
use crate::core::router::RouterError;

impl From<RouterError> for GatewayError {
    fn from(err: RouterError) -> Self {
        match err {
            RouterError::NoProvidersConfigured => GatewayError::NoProvidersConfigured,
            RouterError::AllProvidersFailed { attempts } => GatewayError::AllProvidersFailed {
                attempts: attempts.len(),
            },
        }
    }
}

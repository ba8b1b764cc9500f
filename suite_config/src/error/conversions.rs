//! Conversions between external error types and `ConfError`.

use figment::Error as FigmentError;

use super::ConfError;

impl From<FigmentError> for ConfError {
    fn from(e: FigmentError) -> Self {
        Self::Profile(Box::new(e))
    }
}

use thiserror::Error;

use crate::contact::ContactFields;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DeliveryError {
    #[error("Não foi possível enviar sua mensagem: {0}")]
    Transport(String),
}

/// Asynchronous boundary a submitted form is handed to.
///
/// The site ships with a simulated implementation (a fixed delay that
/// always succeeds); a deployment wires a real transport here and the
/// form drives its Failed/retry path off the returned error.
pub trait ContactDelivery {
    #[allow(async_fn_in_trait)]
    async fn deliver(&self, payload: &ContactFields) -> Result<(), DeliveryError>;
}

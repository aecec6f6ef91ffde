use barbucho_state::contact::ContactFields;
use barbucho_state::delivery::ContactDelivery;
use barbucho_state::delivery::DeliveryError;
use gloo_timers::future::TimeoutFuture;
use tracing::trace;

/// How long the stand-in "request" takes.
pub const SIMULATED_DELIVERY_MS: u32 = 1_500;

/// Placeholder transport: waits a fixed delay and reports success.
/// A deployment replaces this with a real client behind the same trait.
#[derive(Clone, Copy, Debug, Default)]
pub struct SimulatedDelivery;

impl ContactDelivery for SimulatedDelivery {
    async fn deliver(&self, payload: &ContactFields) -> Result<(), DeliveryError> {
        trace!("delivering contact message from '{}'", payload.name);
        TimeoutFuture::new(SIMULATED_DELIVERY_MS).await;
        Ok(())
    }
}

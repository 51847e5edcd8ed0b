// Core request/reply plumbing shared by every operation module.
use prost::Message;

use crate::error::{DqError, Result};
use crate::transport::Engine;

/// Common shape of every engine output message: a success flag and an error
/// text in fields 1 and 2.
pub trait EngineReply {
    fn success(&self) -> bool;
    fn err_msg(&self) -> &str;
}

macro_rules! engine_reply {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl EngineReply for $ty {
                fn success(&self) -> bool {
                    self.success
                }
                fn err_msg(&self) -> &str {
                    &self.err_msg
                }
            }
        )+
    };
}

engine_reply!(
    dqproto::datetime::CreateCalendarOutput,
    dqproto::irmarket::CreateIborIndexOutput,
    dqproto::irmarket::BuildDepoOutput,
    dqproto::irmarket::BuildFraOutput,
    dqproto::irmarket::BuildIrVanillaInstrumentOutput,
    dqproto::analytics::IrYieldCurveBuildingOutput,
    dqproto::credit::CreateCreditParCurveOutput,
    dqproto::credit::CreditCurveBuildingOutput,
    dqproto::credit::CreditDefaultSwapPricingOutput,
    dqproto::cm::CmVolSurfaceBuildingOutput,
    dqproto::cm::CmOptionPricingOutput,
    dqproto::fx::FxForwardPricingOutput,
    dqproto::fx::FxSwapPricingOutput,
    dqproto::fx::FxNdfPricingOutput,
    dqproto::fi::BuildBondYieldCurveOutput,
    dqproto::fi::VanillaBondPricingOutput,
);

/// Typed front door to the analytics engine. The operation methods live in
/// the per-asset-class modules; they all funnel through [`Self::call`].
pub struct AnalyticsClient<E> {
    engine: E,
}

impl<E: Engine> AnalyticsClient<E> {
    pub fn new(engine: E) -> Self {
        AnalyticsClient { engine }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub(crate) async fn call<Req, Res>(&self, name: &str, input: &Req) -> Result<Res>
    where
        Req: Message,
        Res: Message + Default + EngineReply,
    {
        tracing::debug!(operation = name, "sending engine request");
        let reply = self.engine.process(name, input.encode_to_vec()).await?;
        let output = Res::decode(reply.as_slice())?;
        if !output.success() {
            tracing::error!(
                operation = name,
                err = output.err_msg(),
                "engine returned failure"
            );
            return Err(DqError::EngineError(output.err_msg().to_string()));
        }
        Ok(output)
    }
}

// FX pricing: market data set, risk settings and the forward/swap/NDF
// pricers.
use dqproto::analytics::{
    IrCurveRiskSettings, IrYieldCurve, PriceRiskSettings, PriceVolRiskSettings, PricingResults,
    PricingSettings, ThetaRiskSettings, VolRiskSettings, VolatilitySurface,
};
use dqproto::datetime::Date;
use dqproto::fx::{
    FxForwardPricingInput, FxForwardPricingOutput, FxMktDataSet, FxNdfPricingInput,
    FxNdfPricingOutput, FxRiskSettings, FxSwapPricingInput, FxSwapPricingOutput,
};
use dqproto::market::{FxForward, FxNonDeliverableForward, FxSpotRate, FxSwap};

use crate::client::AnalyticsClient;
use crate::error::{DqError, Result};
use crate::transport::Engine;

pub fn create_fx_mkt_data_set(
    as_of_date: Date,
    domestic_discount_curve: IrYieldCurve,
    foreign_discount_curve: IrYieldCurve,
    spot: FxSpotRate,
    vol_surface: Option<VolatilitySurface>,
) -> FxMktDataSet {
    FxMktDataSet {
        as_of_date: Some(as_of_date),
        domestic_discount_curve: Some(domestic_discount_curve),
        foreign_discount_curve: Some(foreign_discount_curve),
        spot: Some(spot),
        vol_surface,
    }
}

pub fn create_fx_risk_settings(
    ir_curve_settings: IrCurveRiskSettings,
    price_settings: PriceRiskSettings,
    vol_settings: VolRiskSettings,
    price_vol_settings: PriceVolRiskSettings,
    theta_settings: ThetaRiskSettings,
) -> FxRiskSettings {
    FxRiskSettings {
        ir_curve_settings: Some(ir_curve_settings),
        price_settings: Some(price_settings),
        vol_settings: Some(vol_settings),
        price_vol_settings: Some(price_vol_settings),
        theta_settings: Some(theta_settings),
    }
}

impl<E: Engine> AnalyticsClient<E> {
    pub async fn fx_forward_pricer(
        &self,
        pricing_date: Date,
        instrument: FxForward,
        mkt_data_set: FxMktDataSet,
        pricing_settings: PricingSettings,
        risk_settings: FxRiskSettings,
    ) -> Result<PricingResults> {
        let input = FxForwardPricingInput {
            pricing_date: Some(pricing_date),
            instrument: Some(instrument),
            mkt_data_set: Some(mkt_data_set),
            pricing_settings: Some(pricing_settings),
            risk_settings: Some(risk_settings),
        };
        let output: FxForwardPricingOutput = self.call("FX_FORWARD_PRICER", &input).await?;
        output
            .results
            .ok_or_else(|| DqError::EngineError("FX_FORWARD_PRICER returned no results".into()))
    }

    pub async fn fx_swap_pricer(
        &self,
        pricing_date: Date,
        instrument: FxSwap,
        mkt_data_set: FxMktDataSet,
        pricing_settings: PricingSettings,
        risk_settings: FxRiskSettings,
    ) -> Result<PricingResults> {
        let input = FxSwapPricingInput {
            pricing_date: Some(pricing_date),
            instrument: Some(instrument),
            mkt_data_set: Some(mkt_data_set),
            pricing_settings: Some(pricing_settings),
            risk_settings: Some(risk_settings),
        };
        let output: FxSwapPricingOutput = self.call("FX_SWAP_PRICER", &input).await?;
        output
            .results
            .ok_or_else(|| DqError::EngineError("FX_SWAP_PRICER returned no results".into()))
    }

    pub async fn fx_ndf_pricer(
        &self,
        pricing_date: Date,
        instrument: FxNonDeliverableForward,
        mkt_data_set: FxMktDataSet,
        pricing_settings: PricingSettings,
        risk_settings: FxRiskSettings,
    ) -> Result<PricingResults> {
        let input = FxNdfPricingInput {
            pricing_date: Some(pricing_date),
            instrument: Some(instrument),
            mkt_data_set: Some(mkt_data_set),
            pricing_settings: Some(pricing_settings),
            risk_settings: Some(risk_settings),
        };
        let output: FxNdfPricingOutput = self.call("FX_NDF_PRICER", &input).await?;
        output
            .results
            .ok_or_else(|| DqError::EngineError("FX_NDF_PRICER returned no results".into()))
    }
}

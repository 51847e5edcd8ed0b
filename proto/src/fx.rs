//! FX market data set, risk settings and pricing messages
//! (`dqfxanalytics.proto`).

use crate::analytics::{
    IrCurveRiskSettings, IrYieldCurve, PriceRiskSettings, PriceVolRiskSettings, PricingResults,
    PricingSettings, ThetaRiskSettings, VolRiskSettings, VolatilitySurface,
};
use crate::datetime::Date;
use crate::market::{FxForward, FxNonDeliverableForward, FxSpotRate, FxSwap};

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FxMktDataSet {
    #[prost(message, optional, tag = "1")]
    pub as_of_date: Option<Date>,
    #[prost(message, optional, tag = "2")]
    pub domestic_discount_curve: Option<IrYieldCurve>,
    #[prost(message, optional, tag = "3")]
    pub foreign_discount_curve: Option<IrYieldCurve>,
    #[prost(message, optional, tag = "4")]
    pub spot: Option<FxSpotRate>,
    #[prost(message, optional, tag = "5")]
    pub vol_surface: Option<VolatilitySurface>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FxRiskSettings {
    #[prost(message, optional, tag = "1")]
    pub ir_curve_settings: Option<IrCurveRiskSettings>,
    #[prost(message, optional, tag = "2")]
    pub price_settings: Option<PriceRiskSettings>,
    #[prost(message, optional, tag = "3")]
    pub vol_settings: Option<VolRiskSettings>,
    #[prost(message, optional, tag = "4")]
    pub price_vol_settings: Option<PriceVolRiskSettings>,
    #[prost(message, optional, tag = "5")]
    pub theta_settings: Option<ThetaRiskSettings>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FxForwardPricingInput {
    #[prost(message, optional, tag = "1")]
    pub pricing_date: Option<Date>,
    #[prost(message, optional, tag = "2")]
    pub instrument: Option<FxForward>,
    #[prost(message, optional, tag = "3")]
    pub mkt_data_set: Option<FxMktDataSet>,
    #[prost(message, optional, tag = "4")]
    pub pricing_settings: Option<PricingSettings>,
    #[prost(message, optional, tag = "5")]
    pub risk_settings: Option<FxRiskSettings>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FxForwardPricingOutput {
    #[prost(bool, tag = "1")]
    pub success: bool,
    #[prost(string, tag = "2")]
    pub err_msg: String,
    #[prost(message, optional, tag = "3")]
    pub results: Option<PricingResults>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FxSwapPricingInput {
    #[prost(message, optional, tag = "1")]
    pub pricing_date: Option<Date>,
    #[prost(message, optional, tag = "2")]
    pub instrument: Option<FxSwap>,
    #[prost(message, optional, tag = "3")]
    pub mkt_data_set: Option<FxMktDataSet>,
    #[prost(message, optional, tag = "4")]
    pub pricing_settings: Option<PricingSettings>,
    #[prost(message, optional, tag = "5")]
    pub risk_settings: Option<FxRiskSettings>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FxSwapPricingOutput {
    #[prost(bool, tag = "1")]
    pub success: bool,
    #[prost(string, tag = "2")]
    pub err_msg: String,
    #[prost(message, optional, tag = "3")]
    pub results: Option<PricingResults>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FxNdfPricingInput {
    #[prost(message, optional, tag = "1")]
    pub pricing_date: Option<Date>,
    #[prost(message, optional, tag = "2")]
    pub instrument: Option<FxNonDeliverableForward>,
    #[prost(message, optional, tag = "3")]
    pub mkt_data_set: Option<FxMktDataSet>,
    #[prost(message, optional, tag = "4")]
    pub pricing_settings: Option<PricingSettings>,
    #[prost(message, optional, tag = "5")]
    pub risk_settings: Option<FxRiskSettings>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FxNdfPricingOutput {
    #[prost(bool, tag = "1")]
    pub success: bool,
    #[prost(string, tag = "2")]
    pub err_msg: String,
    #[prost(message, optional, tag = "3")]
    pub results: Option<PricingResults>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message;

    #[test]
    fn forward_pricing_input_round_trips() {
        let input = FxForwardPricingInput {
            pricing_date: Some(Date { year: 2022, month: 3, day: 9 }),
            instrument: Some(FxForward {
                buy_currency: "USD".into(),
                buy_amount: 1_000_000.0,
                sell_currency: "CNY".into(),
                sell_amount: 6_700_000.0,
                delivery_date: Some(Date { year: 2022, month: 6, day: 9 }),
                expiry_date: Some(Date { year: 2022, month: 6, day: 7 }),
            }),
            mkt_data_set: Some(FxMktDataSet {
                as_of_date: Some(Date { year: 2022, month: 3, day: 9 }),
                domestic_discount_curve: None,
                foreign_discount_curve: None,
                spot: Some(FxSpotRate {
                    rate: Some(crate::market::FxRate {
                        value: 6.6916,
                        price_currency: "CNY".into(),
                        unit_currency: "USD".into(),
                    }),
                    reference_date: Some(Date { year: 2022, month: 3, day: 9 }),
                    spot_date: Some(Date { year: 2022, month: 3, day: 11 }),
                }),
                vol_surface: None,
            }),
            pricing_settings: None,
            risk_settings: None,
        };
        let decoded = FxForwardPricingInput::decode(input.encode_to_vec().as_slice()).unwrap();
        assert_eq!(decoded, input);
    }
}

//! Commodity and equity option quotes, vol surface building and option
//! pricing (`dqcmanalytics.proto`).

use crate::analytics::{
    DividendCurveRiskSettings, IrCurveRiskSettings, IrYieldCurve, PriceRiskSettings,
    PriceVolRiskSettings, PricingResults, PricingSettings, ThetaRiskSettings, VolRiskSettings,
    VolatilitySurface, VolatilitySurfaceDefinition,
};
use crate::datetime::Date;
use crate::market::{AmericanOption, DigitalOption, EuropeanOption};
use crate::numerics::Vector;

/// Listed option quotes grouped by expiry, one row per term date.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CmOptionQuoteMatrix {
    #[prost(enumeration = "crate::market::ExerciseType", tag = "1")]
    pub exercise_type: i32,
    #[prost(enumeration = "crate::market::UnderlyingType", tag = "2")]
    pub underlying_type: i32,
    #[prost(string, tag = "3")]
    pub underlying: String,
    #[prost(message, repeated, tag = "4")]
    pub rows: Vec<cm_option_quote_matrix::Row>,
}

pub mod cm_option_quote_matrix {
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Row {
        #[prost(message, optional, tag = "1")]
        pub term_date: Option<super::Date>,
        #[prost(message, repeated, tag = "2")]
        pub quotes: Vec<Quote>,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Quote {
        #[prost(enumeration = "crate::market::PayoffType", tag = "1")]
        pub payoff_type: i32,
        #[prost(double, tag = "2")]
        pub strike: f64,
        #[prost(double, tag = "3")]
        pub price: f64,
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CmVolSurfaceBuildingInput {
    #[prost(message, optional, tag = "1")]
    pub reference_date: Option<Date>,
    #[prost(message, optional, tag = "2")]
    pub definition: Option<VolatilitySurfaceDefinition>,
    #[prost(message, optional, tag = "3")]
    pub quote_matrix: Option<CmOptionQuoteMatrix>,
    #[prost(message, optional, tag = "4")]
    pub underlying_prices: Option<Vector>,
    #[prost(message, optional, tag = "5")]
    pub discount_curve: Option<IrYieldCurve>,
    #[prost(message, optional, tag = "6")]
    pub forward_curve: Option<IrYieldCurve>,
    #[prost(message, optional, tag = "7")]
    pub building_params: Option<Vector>,
    #[prost(string, tag = "8")]
    pub underlying: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CmVolSurfaceBuildingOutput {
    #[prost(bool, tag = "1")]
    pub success: bool,
    #[prost(string, tag = "2")]
    pub err_msg: String,
    #[prost(message, optional, tag = "3")]
    pub volatility_surface: Option<VolatilitySurface>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CmMktDataSet {
    #[prost(message, optional, tag = "1")]
    pub as_of_date: Option<Date>,
    #[prost(message, optional, tag = "2")]
    pub discount_curve: Option<IrYieldCurve>,
    #[prost(double, tag = "3")]
    pub underlying_price: f64,
    #[prost(message, optional, tag = "4")]
    pub vol_surface: Option<VolatilitySurface>,
    #[prost(message, optional, tag = "5")]
    pub dividend_curve: Option<IrYieldCurve>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CmRiskSettings {
    #[prost(message, optional, tag = "1")]
    pub ir_curve_settings: Option<IrCurveRiskSettings>,
    #[prost(message, optional, tag = "2")]
    pub price_settings: Option<PriceRiskSettings>,
    #[prost(message, optional, tag = "3")]
    pub vol_settings: Option<VolRiskSettings>,
    #[prost(message, optional, tag = "4")]
    pub price_vol_settings: Option<PriceVolRiskSettings>,
    #[prost(message, optional, tag = "5")]
    pub dividend_curve_settings: Option<DividendCurveRiskSettings>,
    #[prost(message, optional, tag = "6")]
    pub theta_settings: Option<ThetaRiskSettings>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CmOptionPricingInput {
    #[prost(message, optional, tag = "1")]
    pub pricing_date: Option<Date>,
    #[prost(message, optional, tag = "5")]
    pub mkt_data_set: Option<CmMktDataSet>,
    #[prost(message, optional, tag = "6")]
    pub pricing_settings: Option<PricingSettings>,
    #[prost(message, optional, tag = "7")]
    pub risk_settings: Option<CmRiskSettings>,
    #[prost(oneof = "cm_option_pricing_input::Instrument", tags = "2, 3, 4")]
    pub instrument: Option<cm_option_pricing_input::Instrument>,
}

pub mod cm_option_pricing_input {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Instrument {
        #[prost(message, tag = "2")]
        European(super::EuropeanOption),
        #[prost(message, tag = "3")]
        American(super::AmericanOption),
        #[prost(message, tag = "4")]
        Digital(super::DigitalOption),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CmOptionPricingOutput {
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
    fn quote_matrix_wire_bytes_are_stable() {
        let matrix = CmOptionQuoteMatrix {
            exercise_type: crate::market::ExerciseType::American as i32,
            underlying_type: crate::market::UnderlyingType::Commodity as i32,
            underlying: "CU2209".into(),
            rows: vec![cm_option_quote_matrix::Row {
                term_date: Some(Date { year: 2022, month: 9, day: 15 }),
                quotes: vec![cm_option_quote_matrix::Quote {
                    payoff_type: crate::market::PayoffType::Call as i32,
                    strike: 71000.0,
                    price: 1210.0,
                }],
            }],
        };
        let expected: &[u8] = b"\x08\x02\x10\x02\x1a\x06CU2209\"\x1f\n\x07\x08\xe6\x0f\x10\t\x18\x0f\x12\x14\x08\x01\x11\x00\x00\x00\x00\x80U\xf1@\x19\x00\x00\x00\x00\x00\xe8\x92@";
        assert_eq!(matrix.encode_to_vec(), expected);
    }

    #[test]
    fn pricing_input_keeps_one_instrument() {
        let input = CmOptionPricingInput {
            pricing_date: Some(Date { year: 2022, month: 3, day: 9 }),
            mkt_data_set: None,
            pricing_settings: None,
            risk_settings: None,
            instrument: Some(cm_option_pricing_input::Instrument::European(EuropeanOption {
                payoff_type: crate::market::PayoffType::Call as i32,
                strike: 71000.0,
                delivery_date: Some(Date { year: 2022, month: 9, day: 16 }),
                expiry_date: Some(Date { year: 2022, month: 9, day: 15 }),
                nominal: 1.0,
                payoff_currency: "CNY".into(),
                underlying_type: crate::market::UnderlyingType::Commodity as i32,
                underlying_currency: "CNY".into(),
                underlying: "CU2209".into(),
            })),
        };
        let decoded = CmOptionPricingInput::decode(input.encode_to_vec().as_slice()).unwrap();
        assert_eq!(decoded, input);
        match decoded.instrument {
            Some(cm_option_pricing_input::Instrument::European(opt)) => {
                assert_eq!(opt.underlying, "CU2209");
            }
            other => panic!("unexpected instrument {other:?}"),
        }
    }
}

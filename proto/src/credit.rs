//! Credit instruments, par curves and CDS pricing messages
//! (`dqcranalytics.proto`).

use crate::analytics::{
    CreditCurve, CreditCurveRiskSettings, IrCurveRiskSettings, IrYieldCurve, ParCurvePillar,
    PricingResults, PricingSettings, ThetaRiskSettings,
};
use crate::datetime::Date;

/// Numerical correction applied to the CDS protection-leg integral.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum NumericalFix {
    NoneFix = 0,
    TaylorFix = 1,
}

impl NumericalFix {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            NumericalFix::NoneFix => "NONE_FIX",
            NumericalFix::TaylorFix => "TAYLOR_FIX",
        }
    }

    pub fn from_str_name(value: &str) -> Option<Self> {
        match value {
            "NONE_FIX" => Some(NumericalFix::NoneFix),
            "TAYLOR_FIX" => Some(NumericalFix::TaylorFix),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum AccrualBias {
    Halfdaybias = 0,
    Nobias = 1,
}

impl AccrualBias {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            AccrualBias::Halfdaybias => "HALFDAYBIAS",
            AccrualBias::Nobias => "NOBIAS",
        }
    }

    pub fn from_str_name(value: &str) -> Option<Self> {
        match value {
            "HALFDAYBIAS" => Some(AccrualBias::Halfdaybias),
            "NOBIAS" => Some(AccrualBias::Nobias),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum ForwardsInCouponPeriod {
    Flat = 0,
    Piecewise = 1,
}

impl ForwardsInCouponPeriod {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            ForwardsInCouponPeriod::Flat => "FLAT",
            ForwardsInCouponPeriod::Piecewise => "PIECEWISE",
        }
    }

    pub fn from_str_name(value: &str) -> Option<Self> {
        match value {
            "FLAT" => Some(ForwardsInCouponPeriod::Flat),
            "PIECEWISE" => Some(ForwardsInCouponPeriod::Piecewise),
            _ => None,
        }
    }
}

// --- Par curve --------------------------------------------------------------

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreditParCurve {
    #[prost(message, optional, tag = "1")]
    pub reference_date: Option<Date>,
    #[prost(string, tag = "2")]
    pub currency: String,
    #[prost(message, repeated, tag = "3")]
    pub pillars: Vec<ParCurvePillar>,
    #[prost(string, tag = "4")]
    pub name: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateCreditParCurveInput {
    #[prost(message, optional, tag = "1")]
    pub reference_date: Option<Date>,
    #[prost(string, tag = "2")]
    pub currency: String,
    #[prost(message, repeated, tag = "3")]
    pub pillars: Vec<ParCurvePillar>,
    #[prost(string, tag = "4")]
    pub curve_name: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateCreditParCurveOutput {
    #[prost(bool, tag = "1")]
    pub success: bool,
    #[prost(string, tag = "2")]
    pub err_msg: String,
    #[prost(message, optional, tag = "3")]
    pub par_curve: Option<CreditParCurve>,
}

// --- Curve building ---------------------------------------------------------

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreditCurveBuildingInput {
    #[prost(message, optional, tag = "1")]
    pub par_curve: Option<CreditParCurve>,
    #[prost(string, tag = "2")]
    pub curve_name: String,
    #[prost(message, optional, tag = "3")]
    pub reference_date: Option<Date>,
    #[prost(message, optional, tag = "4")]
    pub discount_curve: Option<IrYieldCurve>,
    #[prost(string, tag = "5")]
    pub building_method: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreditCurveBuildingOutput {
    #[prost(bool, tag = "1")]
    pub success: bool,
    #[prost(string, tag = "2")]
    pub err_msg: String,
    #[prost(message, optional, tag = "3")]
    pub credit_curve: Option<CreditCurve>,
}

// --- Instrument and pricing -------------------------------------------------

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreditDefaultSwap {
    #[prost(message, optional, tag = "1")]
    pub start_date: Option<Date>,
    #[prost(message, optional, tag = "2")]
    pub maturity_date: Option<Date>,
    #[prost(string, tag = "3")]
    pub reference_entity: String,
    #[prost(string, tag = "4")]
    pub currency: String,
    #[prost(double, tag = "5")]
    pub nominal: f64,
    #[prost(double, tag = "6")]
    pub coupon_rate: f64,
    #[prost(enumeration = "crate::datetime::DayCountConvention", tag = "7")]
    pub day_count_convention: i32,
    #[prost(enumeration = "crate::datetime::Frequency", tag = "8")]
    pub payment_frequency: i32,
    #[prost(string, repeated, tag = "9")]
    pub calendars: Vec<String>,
    #[prost(int32, tag = "10")]
    pub settlement_days: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CrMktDataSet {
    #[prost(message, optional, tag = "1")]
    pub as_of_date: Option<Date>,
    #[prost(message, optional, tag = "2")]
    pub discount_curve: Option<IrYieldCurve>,
    #[prost(message, optional, tag = "3")]
    pub credit_curve: Option<CreditCurve>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CrRiskSettings {
    #[prost(message, optional, tag = "1")]
    pub ir_curve_settings: Option<IrCurveRiskSettings>,
    #[prost(message, optional, tag = "2")]
    pub theta_settings: Option<ThetaRiskSettings>,
    #[prost(message, optional, tag = "3")]
    pub cs_curve_settings: Option<CreditCurveRiskSettings>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreditDefaultSwapPricingInput {
    #[prost(message, optional, tag = "1")]
    pub pricing_date: Option<Date>,
    #[prost(message, optional, tag = "2")]
    pub instrument: Option<CreditDefaultSwap>,
    #[prost(message, optional, tag = "3")]
    pub mkt_data_set: Option<CrMktDataSet>,
    #[prost(message, optional, tag = "4")]
    pub pricing_settings: Option<PricingSettings>,
    #[prost(message, optional, tag = "5")]
    pub risk_settings: Option<CrRiskSettings>,
    #[prost(bool, tag = "6")]
    pub use_scenario: bool,
    #[prost(string, tag = "7")]
    pub scenario_tag: String,
    #[prost(string, tag = "8")]
    pub portfolio_tag: String,
    #[prost(string, tag = "9")]
    pub trade_tag: String,
    #[prost(string, tag = "10")]
    pub request_tag: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreditDefaultSwapPricingOutput {
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
    fn par_curve_input_wire_bytes_are_stable() {
        let input = CreateCreditParCurveInput {
            reference_date: Some(Date { year: 2022, month: 3, day: 9 }),
            currency: "CNY".into(),
            pillars: vec![ParCurvePillar {
                instrument_name: "CDS_1Y".into(),
                instrument_type: crate::market::InstrumentType::CreditDefaultSwap as i32,
                tenor: Some(crate::datetime::Period {
                    length: 1,
                    units: crate::datetime::TimeUnit::Years as i32,
                }),
                quote: 0.0065,
                start_convention: crate::datetime::InstrumentStartConvention::SpotStart as i32,
            }],
            curve_name: "CNY_XYZ_CORP".into(),
        };
        let expected: &[u8] = b"\n\x07\x08\xe6\x0f\x10\x03\x18\t\x12\x03CNY\x1a\x1c\n\x06CDS_1Y\x10\x89'\x1a\x04\x08\x01\x10\x04!9\xb4\xc8v\xbe\x9fz?(\x01\"\x0cCNY_XYZ_CORP";
        assert_eq!(input.encode_to_vec(), expected);
    }

    #[test]
    fn cds_pricing_input_round_trips() {
        let input = CreditDefaultSwapPricingInput {
            pricing_date: Some(Date { year: 2022, month: 3, day: 9 }),
            instrument: Some(CreditDefaultSwap {
                start_date: Some(Date { year: 2021, month: 12, day: 21 }),
                maturity_date: Some(Date { year: 2026, month: 12, day: 20 }),
                reference_entity: "XYZ_CORP".into(),
                currency: "CNY".into(),
                nominal: 10_000_000.0,
                coupon_rate: 0.01,
                day_count_convention: crate::datetime::DayCountConvention::Act360 as i32,
                payment_frequency: crate::datetime::Frequency::Quarterly as i32,
                calendars: vec!["CAL_CFETS".into()],
                settlement_days: 1,
            }),
            mkt_data_set: None,
            pricing_settings: None,
            risk_settings: Some(CrRiskSettings {
                ir_curve_settings: Some(IrCurveRiskSettings {
                    delta: true,
                    shift: 0.0001,
                    ..Default::default()
                }),
                theta_settings: Some(ThetaRiskSettings {
                    theta: true,
                    shift: 1,
                    scaling_factor: 1.0 / 365.0,
                }),
                cs_curve_settings: Some(CreditCurveRiskSettings {
                    delta: true,
                    shift: 0.0001,
                    ..Default::default()
                }),
            }),
            use_scenario: false,
            scenario_tag: String::new(),
            portfolio_tag: String::new(),
            trade_tag: String::new(),
            request_tag: String::new(),
        };
        let decoded =
            CreditDefaultSwapPricingInput::decode(input.encode_to_vec().as_slice()).unwrap();
        assert_eq!(decoded, input);
    }
}

//! Fixed income: bond curves, vanilla bonds and bond pricing
//! (`dqfianalytics.proto`).

use crate::analytics::{
    CreditCurve, CreditCurveRiskSettings, IrCurveRiskSettings, IrYieldCurve, IrYieldCurveType,
    PricingResults, ThetaRiskSettings,
};
use crate::datetime::Date;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum BondQuoteType {
    YieldToMaturity = 0,
    CleanPrice = 1,
    DirtyPrice = 2,
    ParRate = 3,
}

impl BondQuoteType {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            BondQuoteType::YieldToMaturity => "YIELD_TO_MATURITY",
            BondQuoteType::CleanPrice => "CLEAN_PRICE",
            BondQuoteType::DirtyPrice => "DIRTY_PRICE",
            BondQuoteType::ParRate => "PAR_RATE",
        }
    }

    pub fn from_str_name(value: &str) -> Option<Self> {
        match value {
            "YIELD_TO_MATURITY" => Some(BondQuoteType::YieldToMaturity),
            "CLEAN_PRICE" => Some(BondQuoteType::CleanPrice),
            "DIRTY_PRICE" => Some(BondQuoteType::DirtyPrice),
            "PAR_RATE" => Some(BondQuoteType::ParRate),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum BondPricingMethod {
    Std = 0,
    Csi = 1,
    Ccdc = 2,
    Cfets = 3,
}

impl BondPricingMethod {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            BondPricingMethod::Std => "STD_BOND_PRICING_METHOD",
            BondPricingMethod::Csi => "CSI_BOND_PRICING_METHOD",
            BondPricingMethod::Ccdc => "CCDC_BOND_PRICING_METHOD",
            BondPricingMethod::Cfets => "CFETS_BOND_PRICING_METHOD",
        }
    }

    pub fn from_str_name(value: &str) -> Option<Self> {
        match value {
            "STD_BOND_PRICING_METHOD" => Some(BondPricingMethod::Std),
            "CSI_BOND_PRICING_METHOD" => Some(BondPricingMethod::Csi),
            "CCDC_BOND_PRICING_METHOD" => Some(BondPricingMethod::Ccdc),
            "CFETS_BOND_PRICING_METHOD" => Some(BondPricingMethod::Cfets),
            _ => None,
        }
    }
}

/// Per-request bond measures. The misspelt yield-to-maturity name is part of
/// the engine contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum BondSpecificPricingRequest {
    YieldToMatuirtyRequest = 0,
    DirtyPriceRequest = 1,
    CleanPriceRequest = 2,
    AccruedInterestRequest = 3,
    SimpleDurationRequest = 4,
    ModifiedDurationRequest = 5,
    MacaulayDurationRequest = 6,
    ConvexityRequest = 7,
    BasisPointValueRequest = 8,
}

impl BondSpecificPricingRequest {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            BondSpecificPricingRequest::YieldToMatuirtyRequest => "YIELD_TO_MATUIRTY_REQUEST",
            BondSpecificPricingRequest::DirtyPriceRequest => "DIRTY_PRICE_REQUEST",
            BondSpecificPricingRequest::CleanPriceRequest => "CLEAN_PRICE_REQUEST",
            BondSpecificPricingRequest::AccruedInterestRequest => "ACCRUED_INTEREST_REQUEST",
            BondSpecificPricingRequest::SimpleDurationRequest => "SIMPLE_DURATION_REQUEST",
            BondSpecificPricingRequest::ModifiedDurationRequest => "MODIFIED_DURATION_REQUEST",
            BondSpecificPricingRequest::MacaulayDurationRequest => "MACAULAY_DURATION_REQUEST",
            BondSpecificPricingRequest::ConvexityRequest => "CONVEXITY_REQUEST",
            BondSpecificPricingRequest::BasisPointValueRequest => "BASIS_POINT_VALUE_REQUEST",
        }
    }

    pub fn from_str_name(value: &str) -> Option<Self> {
        match value {
            "YIELD_TO_MATUIRTY_REQUEST" => {
                Some(BondSpecificPricingRequest::YieldToMatuirtyRequest)
            }
            "DIRTY_PRICE_REQUEST" => Some(BondSpecificPricingRequest::DirtyPriceRequest),
            "CLEAN_PRICE_REQUEST" => Some(BondSpecificPricingRequest::CleanPriceRequest),
            "ACCRUED_INTEREST_REQUEST" => {
                Some(BondSpecificPricingRequest::AccruedInterestRequest)
            }
            "SIMPLE_DURATION_REQUEST" => Some(BondSpecificPricingRequest::SimpleDurationRequest),
            "MODIFIED_DURATION_REQUEST" => {
                Some(BondSpecificPricingRequest::ModifiedDurationRequest)
            }
            "MACAULAY_DURATION_REQUEST" => {
                Some(BondSpecificPricingRequest::MacaulayDurationRequest)
            }
            "CONVEXITY_REQUEST" => Some(BondSpecificPricingRequest::ConvexityRequest),
            "BASIS_POINT_VALUE_REQUEST" => {
                Some(BondSpecificPricingRequest::BasisPointValueRequest)
            }
            _ => None,
        }
    }
}

// --- Curve building ---------------------------------------------------------

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BondYieldCurveBuildSettings {
    #[prost(string, tag = "1")]
    pub curve_name: String,
    #[prost(enumeration = "IrYieldCurveType", tag = "2")]
    pub curve_type: i32,
    #[prost(enumeration = "crate::numerics::InterpMethod", tag = "3")]
    pub interp_method: i32,
    #[prost(enumeration = "crate::numerics::ExtrapMethod", tag = "4")]
    pub extrap_method: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BondParCurve {
    #[prost(message, optional, tag = "1")]
    pub reference_date: Option<Date>,
    #[prost(string, tag = "2")]
    pub currency: String,
    #[prost(message, repeated, tag = "3")]
    pub pillars: Vec<bond_par_curve::Pillar>,
    #[prost(enumeration = "BondQuoteType", tag = "4")]
    pub quote_type: i32,
    #[prost(string, tag = "5")]
    pub name: String,
}

pub mod bond_par_curve {
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Pillar {
        #[prost(string, tag = "1")]
        pub instrument_name: String,
        #[prost(double, tag = "2")]
        pub quote: f64,
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BondYieldCurveBuildSettingsContainer {
    #[prost(string, tag = "1")]
    pub target_curve_name: String,
    #[prost(message, optional, tag = "2")]
    pub build_settings: Option<BondYieldCurveBuildSettings>,
    #[prost(message, optional, tag = "3")]
    pub par_curve: Option<BondParCurve>,
    #[prost(enumeration = "crate::datetime::DayCountConvention", tag = "4")]
    pub day_count_convention: i32,
    #[prost(enumeration = "crate::numerics::CompoundingType", tag = "5")]
    pub compounding_type: i32,
    #[prost(enumeration = "crate::datetime::Frequency", tag = "6")]
    pub frequency: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BuildBondYieldCurveInput {
    #[prost(message, optional, tag = "1")]
    pub reference_date: Option<Date>,
    #[prost(message, optional, tag = "2")]
    pub build_settings: Option<BondYieldCurveBuildSettingsContainer>,
    #[prost(bool, tag = "3")]
    pub calc_jacobian: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BuildBondYieldCurveOutput {
    #[prost(bool, tag = "1")]
    pub success: bool,
    #[prost(string, tag = "2")]
    pub err_msg: String,
    #[prost(message, optional, tag = "3")]
    pub ir_yield_curve: Option<IrYieldCurve>,
}

// --- Instrument and pricing -------------------------------------------------

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct VanillaBond {
    #[prost(message, optional, tag = "1")]
    pub issue_date: Option<Date>,
    #[prost(message, optional, tag = "2")]
    pub maturity_date: Option<Date>,
    #[prost(double, tag = "3")]
    pub coupon_rate: f64,
    #[prost(string, tag = "4")]
    pub currency: String,
    #[prost(enumeration = "crate::datetime::DayCountConvention", tag = "5")]
    pub day_count_convention: i32,
    #[prost(enumeration = "crate::datetime::Frequency", tag = "6")]
    pub payment_frequency: i32,
    #[prost(string, repeated, tag = "7")]
    pub calendars: Vec<String>,
    #[prost(double, tag = "8")]
    pub nominal: f64,
    #[prost(int32, tag = "9")]
    pub settlement_days: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FiMktDataSet {
    #[prost(message, optional, tag = "1")]
    pub as_of_date: Option<Date>,
    #[prost(message, optional, tag = "2")]
    pub discount_curve: Option<IrYieldCurve>,
    #[prost(message, optional, tag = "3")]
    pub spread_curve: Option<CreditCurve>,
    #[prost(message, optional, tag = "4")]
    pub forward_curve: Option<IrYieldCurve>,
    #[prost(message, optional, tag = "5")]
    pub underlying_discount_curve: Option<IrYieldCurve>,
    #[prost(message, optional, tag = "6")]
    pub underlying_income_curve: Option<IrYieldCurve>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FiRiskSettings {
    #[prost(message, optional, tag = "1")]
    pub ir_curve_settings: Option<IrCurveRiskSettings>,
    #[prost(message, optional, tag = "2")]
    pub theta_settings: Option<ThetaRiskSettings>,
    #[prost(message, optional, tag = "3")]
    pub cs_curve_settings: Option<CreditCurveRiskSettings>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct VanillaBondPricingInput {
    #[prost(message, optional, tag = "1")]
    pub pricing_date: Option<Date>,
    #[prost(message, optional, tag = "2")]
    pub instrument: Option<VanillaBond>,
    #[prost(double, tag = "3")]
    pub quote: f64,
    #[prost(enumeration = "BondQuoteType", tag = "4")]
    pub quote_type: i32,
    #[prost(enumeration = "BondPricingMethod", tag = "5")]
    pub pricing_method: i32,
    #[prost(message, optional, tag = "6")]
    pub mkt_data_set: Option<FiMktDataSet>,
    #[prost(message, optional, tag = "7")]
    pub risk_settings: Option<FiRiskSettings>,
    #[prost(
        enumeration = "BondSpecificPricingRequest",
        repeated,
        packed = "true",
        tag = "8"
    )]
    pub specific_requests: Vec<i32>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct VanillaBondPricingOutput {
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
    fn bond_par_curve_wire_bytes_are_stable() {
        let curve = BondParCurve {
            reference_date: Some(Date { year: 2022, month: 3, day: 9 }),
            currency: "CNY".into(),
            pillars: vec![
                bond_par_curve::Pillar { instrument_name: "CNY_TREAS_1Y".into(), quote: 0.021 },
                bond_par_curve::Pillar { instrument_name: "CNY_TREAS_5Y".into(), quote: 0.0265 },
            ],
            quote_type: BondQuoteType::YieldToMaturity as i32,
            name: "CNY_TREAS".into(),
        };
        let expected: &[u8] = b"\n\x07\x08\xe6\x0f\x10\x03\x18\t\x12\x03CNY\x1a\x17\n\x0cCNY_TREAS_1Y\x11\x1b/\xdd$\x06\x81\x95?\x1a\x17\n\x0cCNY_TREAS_5Y\x11\x89A`\xe5\xd0\"\x9b?*\tCNY_TREAS";
        assert_eq!(curve.encode_to_vec(), expected);
    }

    #[test]
    fn bond_pricing_input_round_trips() {
        let input = VanillaBondPricingInput {
            pricing_date: Some(Date { year: 2022, month: 3, day: 9 }),
            instrument: Some(VanillaBond {
                issue_date: Some(Date { year: 2021, month: 6, day: 10 }),
                maturity_date: Some(Date { year: 2026, month: 6, day: 10 }),
                coupon_rate: 0.03,
                currency: "CNY".into(),
                day_count_convention: crate::datetime::DayCountConvention::ActActIsda as i32,
                payment_frequency: crate::datetime::Frequency::Annual as i32,
                calendars: vec!["CAL_CFETS".into()],
                nominal: 100.0,
                settlement_days: 1,
            }),
            quote: 0.0285,
            quote_type: BondQuoteType::YieldToMaturity as i32,
            pricing_method: BondPricingMethod::Cfets as i32,
            mkt_data_set: None,
            risk_settings: None,
            specific_requests: vec![
                BondSpecificPricingRequest::DirtyPriceRequest as i32,
                BondSpecificPricingRequest::ModifiedDurationRequest as i32,
            ],
        };
        let decoded = VanillaBondPricingInput::decode(input.encode_to_vec().as_slice()).unwrap();
        assert_eq!(decoded, input);
    }
}

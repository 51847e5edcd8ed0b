//! Market data, FX and option instrument messages (`dqmarket.proto`).

use crate::datetime::{Date, Period};
use crate::numerics::Matrix;

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Currency {
    #[prost(string, tag = "1")]
    pub name: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CurrencyPair {
    #[prost(message, optional, tag = "1")]
    pub base_currency: Option<Currency>,
    #[prost(message, optional, tag = "2")]
    pub quote_currency: Option<Currency>,
}

/// A quoted exchange rate: `value` units of `price_currency` per one unit
/// of `unit_currency`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FxRate {
    #[prost(double, tag = "1")]
    pub value: f64,
    #[prost(string, tag = "2")]
    pub price_currency: String,
    #[prost(string, tag = "3")]
    pub unit_currency: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FxSpotRate {
    #[prost(message, optional, tag = "1")]
    pub rate: Option<FxRate>,
    #[prost(message, optional, tag = "2")]
    pub reference_date: Option<Date>,
    #[prost(message, optional, tag = "3")]
    pub spot_date: Option<Date>,
}

/// A dated series of observations (fixings, quotes). Values travel as a
/// single-column matrix, the engine's layout convention.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TimeSeries {
    #[prost(message, repeated, tag = "1")]
    pub dates: Vec<Date>,
    #[prost(message, optional, tag = "2")]
    pub values: Option<Matrix>,
    #[prost(enumeration = "time_series::Mode", tag = "3")]
    pub mode: i32,
    #[prost(string, tag = "4")]
    pub name: String,
}

pub mod time_series {
    #[derive(
        Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration,
    )]
    #[repr(i32)]
    pub enum Mode {
        TsForwardMode = 0,
        TsBackwardMode = 1,
    }

    impl Mode {
        pub fn as_str_name(&self) -> &'static str {
            match self {
                Mode::TsForwardMode => "TS_FORWARD_MODE",
                Mode::TsBackwardMode => "TS_BACKWARD_MODE",
            }
        }

        pub fn from_str_name(value: &str) -> Option<Self> {
            match value {
                "TS_FORWARD_MODE" => Some(Mode::TsForwardMode),
                "TS_BACKWARD_MODE" => Some(Mode::TsBackwardMode),
                _ => None,
            }
        }
    }
}

/// Instrument type codes. The discriminants are the engine's wire codes,
/// grouped by asset class (1xxx cash, 2xxx rates, 3xxx FX, 4xxx options,
/// 5xxx credit, 6xxx bonds).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum InstrumentType {
    InvalidInstrumentType = 0,
    Deposit = 1001,
    Fra = 2001,
    IrVanillaSwap = 2002,
    FxSpot = 3001,
    FxForward = 3002,
    FxSwap = 3003,
    FxNonDeliverableForward = 3004,
    EuropeanOption = 4001,
    AmericanOption = 4002,
    DigitalOption = 4003,
    CreditDefaultSwap = 5001,
    VanillaBond = 6001,
}

impl InstrumentType {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            InstrumentType::InvalidInstrumentType => "INVALID_INSTRUMENT_TYPE",
            InstrumentType::Deposit => "DEPOSIT",
            InstrumentType::Fra => "FRA",
            InstrumentType::IrVanillaSwap => "IR_VANILLA_SWAP",
            InstrumentType::FxSpot => "FX_SPOT",
            InstrumentType::FxForward => "FX_FORWARD",
            InstrumentType::FxSwap => "FX_SWAP",
            InstrumentType::FxNonDeliverableForward => "FX_NON_DELIVERABLE_FORWARD",
            InstrumentType::EuropeanOption => "EUROPEAN_OPTION",
            InstrumentType::AmericanOption => "AMERICAN_OPTION",
            InstrumentType::DigitalOption => "DIGITAL_OPTION",
            InstrumentType::CreditDefaultSwap => "CREDIT_DEFAULT_SWAP",
            InstrumentType::VanillaBond => "VANILLA_BOND",
        }
    }

    pub fn from_str_name(value: &str) -> Option<Self> {
        match value {
            "INVALID_INSTRUMENT_TYPE" => Some(InstrumentType::InvalidInstrumentType),
            "DEPOSIT" => Some(InstrumentType::Deposit),
            "FRA" => Some(InstrumentType::Fra),
            "IR_VANILLA_SWAP" => Some(InstrumentType::IrVanillaSwap),
            "FX_SPOT" => Some(InstrumentType::FxSpot),
            "FX_FORWARD" => Some(InstrumentType::FxForward),
            "FX_SWAP" => Some(InstrumentType::FxSwap),
            "FX_NON_DELIVERABLE_FORWARD" => Some(InstrumentType::FxNonDeliverableForward),
            "EUROPEAN_OPTION" => Some(InstrumentType::EuropeanOption),
            "AMERICAN_OPTION" => Some(InstrumentType::AmericanOption),
            "DIGITAL_OPTION" => Some(InstrumentType::DigitalOption),
            "CREDIT_DEFAULT_SWAP" => Some(InstrumentType::CreditDefaultSwap),
            "VANILLA_BOND" => Some(InstrumentType::VanillaBond),
            _ => None,
        }
    }
}

// --- FX templates -----------------------------------------------------------

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FxSpotTemplate {
    #[prost(enumeration = "InstrumentType", tag = "1")]
    pub instrument_type: i32,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(message, optional, tag = "3")]
    pub currency_pair: Option<CurrencyPair>,
    #[prost(enumeration = "crate::datetime::BusinessDayConvention", tag = "4")]
    pub spot_day_convention: i32,
    // Field 5 is reserved in the engine contract.
    #[prost(message, optional, tag = "6")]
    pub spot_delay: Option<Period>,
    #[prost(string, repeated, tag = "7")]
    pub calendars: Vec<String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FxForwardTemplate {
    #[prost(enumeration = "InstrumentType", tag = "1")]
    pub instrument_type: i32,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(message, optional, tag = "3")]
    pub currency_pair: Option<CurrencyPair>,
    #[prost(enumeration = "crate::datetime::BusinessDayConvention", tag = "4")]
    pub delivery_day_convention: i32,
    #[prost(enumeration = "crate::datetime::BusinessDayConvention", tag = "5")]
    pub fixing_day_convention: i32,
    #[prost(message, optional, tag = "6")]
    pub fixing_offset: Option<Period>,
    #[prost(string, repeated, tag = "7")]
    pub calendars: Vec<String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FxSwapTemplate {
    #[prost(enumeration = "InstrumentType", tag = "1")]
    pub instrument_type: i32,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(message, optional, tag = "3")]
    pub currency_pair: Option<CurrencyPair>,
    #[prost(enumeration = "crate::datetime::InstrumentStartConvention", tag = "4")]
    pub start_convention: i32,
    #[prost(enumeration = "crate::datetime::BusinessDayConvention", tag = "5")]
    pub start_day_convention: i32,
    #[prost(enumeration = "crate::datetime::BusinessDayConvention", tag = "6")]
    pub end_day_convention: i32,
    #[prost(message, optional, tag = "7")]
    pub fixing_offset: Option<Period>,
    #[prost(enumeration = "crate::datetime::BusinessDayConvention", tag = "8")]
    pub fixing_day_convention: i32,
    #[prost(string, repeated, tag = "9")]
    pub calendars: Vec<String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FxNdfTemplate {
    #[prost(enumeration = "InstrumentType", tag = "1")]
    pub instrument_type: i32,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(message, optional, tag = "3")]
    pub currency_pair: Option<CurrencyPair>,
    #[prost(enumeration = "crate::datetime::BusinessDayConvention", tag = "4")]
    pub delivery_day_convention: i32,
    #[prost(enumeration = "crate::datetime::BusinessDayConvention", tag = "5")]
    pub fixing_day_convention: i32,
    #[prost(message, optional, tag = "6")]
    pub fixing_offset: Option<Period>,
    #[prost(string, repeated, tag = "7")]
    pub calendars: Vec<String>,
    #[prost(string, tag = "8")]
    pub settlement_currency: String,
}

// --- FX instruments ---------------------------------------------------------

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FxForward {
    #[prost(string, tag = "1")]
    pub buy_currency: String,
    #[prost(double, tag = "2")]
    pub buy_amount: f64,
    #[prost(string, tag = "3")]
    pub sell_currency: String,
    #[prost(double, tag = "4")]
    pub sell_amount: f64,
    #[prost(message, optional, tag = "5")]
    pub delivery_date: Option<Date>,
    #[prost(message, optional, tag = "6")]
    pub expiry_date: Option<Date>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FxSwap {
    #[prost(string, tag = "1")]
    pub near_buy_currency: String,
    #[prost(double, tag = "2")]
    pub near_buy_amount: f64,
    #[prost(string, tag = "3")]
    pub near_sell_currency: String,
    #[prost(double, tag = "4")]
    pub near_sell_amount: f64,
    #[prost(message, optional, tag = "5")]
    pub near_delivery_date: Option<Date>,
    #[prost(message, optional, tag = "6")]
    pub near_expiry_date: Option<Date>,
    #[prost(string, tag = "7")]
    pub far_buy_currency: String,
    #[prost(double, tag = "8")]
    pub far_buy_amount: f64,
    #[prost(string, tag = "9")]
    pub far_sell_currency: String,
    #[prost(double, tag = "10")]
    pub far_sell_amount: f64,
    #[prost(message, optional, tag = "11")]
    pub far_delivery_date: Option<Date>,
    #[prost(message, optional, tag = "12")]
    pub far_expiry_date: Option<Date>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FxNonDeliverableForward {
    #[prost(string, tag = "1")]
    pub buy_currency: String,
    #[prost(double, tag = "2")]
    pub buy_amount: f64,
    #[prost(string, tag = "3")]
    pub sell_currency: String,
    #[prost(double, tag = "4")]
    pub sell_amount: f64,
    #[prost(message, optional, tag = "5")]
    pub delivery_date: Option<Date>,
    #[prost(message, optional, tag = "6")]
    pub expiry_date: Option<Date>,
    #[prost(string, tag = "7")]
    pub settlement_currency: String,
}

// --- Options ----------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum PayoffType {
    InvalidPayoffType = 0,
    Call = 1,
    Put = 2,
}

impl PayoffType {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            PayoffType::InvalidPayoffType => "INVALID_PAYOFF_TYPE",
            PayoffType::Call => "CALL",
            PayoffType::Put => "PUT",
        }
    }

    pub fn from_str_name(value: &str) -> Option<Self> {
        match value {
            "INVALID_PAYOFF_TYPE" => Some(PayoffType::InvalidPayoffType),
            "CALL" => Some(PayoffType::Call),
            "PUT" => Some(PayoffType::Put),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum ExerciseType {
    InvalidExerciseType = 0,
    European = 1,
    American = 2,
}

impl ExerciseType {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            ExerciseType::InvalidExerciseType => "INVALID_EXERCISE_TYPE",
            ExerciseType::European => "EUROPEAN",
            ExerciseType::American => "AMERICAN",
        }
    }

    pub fn from_str_name(value: &str) -> Option<Self> {
        match value {
            "INVALID_EXERCISE_TYPE" => Some(ExerciseType::InvalidExerciseType),
            "EUROPEAN" => Some(ExerciseType::European),
            "AMERICAN" => Some(ExerciseType::American),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum UnderlyingType {
    InvalidUnderlyingType = 0,
    Equity = 1,
    Commodity = 2,
    FutureUnderlyingType = 3,
    FxUnderlyingType = 4,
}

impl UnderlyingType {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            UnderlyingType::InvalidUnderlyingType => "INVALID_UNDERLYING_TYPE",
            UnderlyingType::Equity => "EQUITY",
            UnderlyingType::Commodity => "COMMODITY",
            UnderlyingType::FutureUnderlyingType => "FUTURE_UNDERLYING_TYPE",
            UnderlyingType::FxUnderlyingType => "FX_UNDERLYING_TYPE",
        }
    }

    pub fn from_str_name(value: &str) -> Option<Self> {
        match value {
            "INVALID_UNDERLYING_TYPE" => Some(UnderlyingType::InvalidUnderlyingType),
            "EQUITY" => Some(UnderlyingType::Equity),
            "COMMODITY" => Some(UnderlyingType::Commodity),
            "FUTURE_UNDERLYING_TYPE" => Some(UnderlyingType::FutureUnderlyingType),
            "FX_UNDERLYING_TYPE" => Some(UnderlyingType::FxUnderlyingType),
            _ => None,
        }
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EuropeanOption {
    #[prost(enumeration = "PayoffType", tag = "1")]
    pub payoff_type: i32,
    #[prost(double, tag = "2")]
    pub strike: f64,
    #[prost(message, optional, tag = "3")]
    pub delivery_date: Option<Date>,
    #[prost(message, optional, tag = "4")]
    pub expiry_date: Option<Date>,
    #[prost(double, tag = "5")]
    pub nominal: f64,
    #[prost(string, tag = "6")]
    pub payoff_currency: String,
    #[prost(enumeration = "UnderlyingType", tag = "7")]
    pub underlying_type: i32,
    #[prost(string, tag = "8")]
    pub underlying_currency: String,
    #[prost(string, tag = "9")]
    pub underlying: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AmericanOption {
    #[prost(enumeration = "PayoffType", tag = "1")]
    pub payoff_type: i32,
    #[prost(double, tag = "2")]
    pub strike: f64,
    #[prost(message, optional, tag = "3")]
    pub expiry_date: Option<Date>,
    #[prost(int32, tag = "4")]
    pub settlement_days: i32,
    #[prost(double, tag = "5")]
    pub nominal: f64,
    #[prost(string, tag = "6")]
    pub payoff_currency: String,
    #[prost(enumeration = "UnderlyingType", tag = "7")]
    pub underlying_type: i32,
    #[prost(string, tag = "8")]
    pub underlying_currency: String,
    #[prost(string, tag = "9")]
    pub underlying: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DigitalOption {
    #[prost(enumeration = "PayoffType", tag = "1")]
    pub payoff_type: i32,
    #[prost(double, tag = "2")]
    pub strike: f64,
    #[prost(message, optional, tag = "3")]
    pub delivery_date: Option<Date>,
    #[prost(message, optional, tag = "4")]
    pub expiry_date: Option<Date>,
    #[prost(double, tag = "5")]
    pub cash: f64,
    #[prost(double, tag = "6")]
    pub asset: f64,
    #[prost(double, tag = "7")]
    pub nominal: f64,
    #[prost(string, tag = "8")]
    pub payoff_currency: String,
    #[prost(enumeration = "UnderlyingType", tag = "9")]
    pub underlying_type: i32,
    #[prost(string, tag = "10")]
    pub underlying_currency: String,
    #[prost(string, tag = "11")]
    pub underlying: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum StrikeType {
    InvalidStrikeType = 0,
    Atm = 1,
    Fixed = 2,
}

impl StrikeType {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            StrikeType::InvalidStrikeType => "INVALID_STRIKE_TYPE",
            StrikeType::Atm => "ATM",
            StrikeType::Fixed => "FIXED",
        }
    }

    pub fn from_str_name(value: &str) -> Option<Self> {
        match value {
            "INVALID_STRIKE_TYPE" => Some(StrikeType::InvalidStrikeType),
            "ATM" => Some(StrikeType::Atm),
            "FIXED" => Some(StrikeType::Fixed),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum AveragingMethod {
    InvalidAveragingMethod = 0,
    Arithmetic = 1,
    Geometric = 2,
}

impl AveragingMethod {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            AveragingMethod::InvalidAveragingMethod => "INVALID_AVERAGING_METHOD",
            AveragingMethod::Arithmetic => "ARITHMETIC",
            AveragingMethod::Geometric => "GEOMETRIC",
        }
    }

    pub fn from_str_name(value: &str) -> Option<Self> {
        match value {
            "INVALID_AVERAGING_METHOD" => Some(AveragingMethod::InvalidAveragingMethod),
            "ARITHMETIC" => Some(AveragingMethod::Arithmetic),
            "GEOMETRIC" => Some(AveragingMethod::Geometric),
            _ => None,
        }
    }
}

/// Continuous observation monitors the underlying at all times; discrete
/// observation only on the listed schedule dates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum ObservationType {
    InvalidObservationType = 0,
    Continuous = 1,
    Discrete = 2,
}

impl ObservationType {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            ObservationType::InvalidObservationType => "INVALID_OBSERVATION_TYPE",
            ObservationType::Continuous => "CONTINUOUS",
            ObservationType::Discrete => "DISCRETE",
        }
    }

    pub fn from_str_name(value: &str) -> Option<Self> {
        match value {
            "INVALID_OBSERVATION_TYPE" => Some(ObservationType::InvalidObservationType),
            "CONTINUOUS" => Some(ObservationType::Continuous),
            "DISCRETE" => Some(ObservationType::Discrete),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum BarrierType {
    InvalidBarrierType = 0,
    Up = 1,
    Down = 2,
}

impl BarrierType {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            BarrierType::InvalidBarrierType => "INVALID_BARRIER_TYPE",
            BarrierType::Up => "UP",
            BarrierType::Down => "DOWN",
        }
    }

    pub fn from_str_name(value: &str) -> Option<Self> {
        match value {
            "INVALID_BARRIER_TYPE" => Some(BarrierType::InvalidBarrierType),
            "UP" => Some(BarrierType::Up),
            "DOWN" => Some(BarrierType::Down),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum PaymentType {
    InvalidPaymentType = 0,
    CashPayment = 1,
    AssetPayment = 2,
}

impl PaymentType {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            PaymentType::InvalidPaymentType => "INVALID_PAYMENT_TYPE",
            PaymentType::CashPayment => "CASH",
            PaymentType::AssetPayment => "ASSET",
        }
    }

    pub fn from_str_name(value: &str) -> Option<Self> {
        match value {
            "INVALID_PAYMENT_TYPE" => Some(PaymentType::InvalidPaymentType),
            "CASH" => Some(PaymentType::CashPayment),
            "ASSET" => Some(PaymentType::AssetPayment),
            _ => None,
        }
    }
}

/// Averaging option. The strike only applies when `strike_type` is FIXED;
/// ATM strikes are resolved by the engine at pricing time.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AsianOption {
    #[prost(enumeration = "PayoffType", tag = "1")]
    pub payoff_type: i32,
    #[prost(enumeration = "StrikeType", tag = "2")]
    pub strike_type: i32,
    #[prost(double, tag = "3")]
    pub strike: f64,
    #[prost(message, optional, tag = "4")]
    pub delivery_date: Option<Date>,
    #[prost(message, optional, tag = "5")]
    pub expiry_date: Option<Date>,
    #[prost(enumeration = "AveragingMethod", tag = "6")]
    pub averaging_method: i32,
    #[prost(enumeration = "ObservationType", tag = "7")]
    pub observation_type: i32,
    #[prost(message, repeated, tag = "8")]
    pub fixing_dates: Vec<Date>,
    #[prost(double, tag = "9")]
    pub nominal: f64,
    #[prost(string, tag = "10")]
    pub payoff_currency: String,
    #[prost(enumeration = "UnderlyingType", tag = "11")]
    pub underlying_type: i32,
    #[prost(string, tag = "12")]
    pub underlying_currency: String,
    #[prost(string, tag = "13")]
    pub underlying: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct OneTouchOption {
    #[prost(message, optional, tag = "1")]
    pub expiry_date: Option<Date>,
    #[prost(message, optional, tag = "2")]
    pub delivery_date: Option<Date>,
    #[prost(enumeration = "BarrierType", tag = "3")]
    pub barrier_type: i32,
    #[prost(double, tag = "4")]
    pub barrier_value: f64,
    #[prost(enumeration = "ObservationType", tag = "5")]
    pub observation_type: i32,
    #[prost(message, repeated, tag = "6")]
    pub observation_dates: Vec<Date>,
    #[prost(enumeration = "PaymentType", tag = "7")]
    pub payment_type: i32,
    #[prost(double, tag = "8")]
    pub cash: f64,
    #[prost(double, tag = "9")]
    pub asset: f64,
    #[prost(int32, tag = "10")]
    pub settlement_days: i32,
    #[prost(double, tag = "11")]
    pub nominal: f64,
    #[prost(string, tag = "12")]
    pub payoff_currency: String,
    #[prost(enumeration = "UnderlyingType", tag = "13")]
    pub underlying_type: i32,
    #[prost(string, tag = "14")]
    pub underlying_currency: String,
    #[prost(string, tag = "15")]
    pub underlying: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SingleBarrierOption {
    #[prost(enumeration = "PayoffType", tag = "1")]
    pub payoff_type: i32,
    #[prost(double, tag = "2")]
    pub strike: f64,
    #[prost(message, optional, tag = "3")]
    pub expiry_date: Option<Date>,
    #[prost(message, optional, tag = "4")]
    pub delivery_date: Option<Date>,
    #[prost(enumeration = "BarrierType", tag = "5")]
    pub barrier_type: i32,
    #[prost(double, tag = "6")]
    pub barrier_value: f64,
    #[prost(enumeration = "ObservationType", tag = "7")]
    pub observation_type: i32,
    #[prost(message, repeated, tag = "8")]
    pub observation_dates: Vec<Date>,
    #[prost(enumeration = "PaymentType", tag = "9")]
    pub payment_type: i32,
    #[prost(double, tag = "10")]
    pub cash: f64,
    #[prost(double, tag = "11")]
    pub asset: f64,
    #[prost(int32, tag = "12")]
    pub settlement_days: i32,
    #[prost(double, tag = "13")]
    pub nominal: f64,
    #[prost(string, tag = "14")]
    pub payoff_currency: String,
    #[prost(enumeration = "UnderlyingType", tag = "15")]
    pub underlying_type: i32,
    #[prost(string, tag = "16")]
    pub underlying_currency: String,
    #[prost(string, tag = "17")]
    pub underlying: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message;

    #[test]
    fn currency_pair_wire_bytes_are_stable() {
        // Recorded for USD/CNY.
        let pair = CurrencyPair {
            base_currency: Some(Currency { name: "USD".into() }),
            quote_currency: Some(Currency { name: "CNY".into() }),
        };
        assert_eq!(pair.encode_to_vec(), b"\n\x05\n\x03USD\x12\x05\n\x03CNY");
    }

    #[test]
    fn fx_rate_wire_bytes_are_stable() {
        // Recorded for 6.6916 CNY per USD.
        let rate = FxRate {
            value: 6.6916,
            price_currency: "CNY".into(),
            unit_currency: "USD".into(),
        };
        assert_eq!(
            rate.encode_to_vec(),
            b"\t\x87\xa7W\xca2\xc4\x1a@\x12\x03CNY\x1a\x03USD"
        );
    }

    #[test]
    fn fx_spot_rate_wire_bytes_are_stable() {
        let rate = FxRate {
            value: 6.6916,
            price_currency: "CNY".into(),
            unit_currency: "USD".into(),
        };
        let spot = FxSpotRate {
            rate: Some(rate),
            reference_date: Some(Date { year: 2022, month: 3, day: 9 }),
            spot_date: Some(Date { year: 2022, month: 3, day: 9 }),
        };
        assert_eq!(
            spot.encode_to_vec(),
            b"\n\x13\t\x87\xa7W\xca2\xc4\x1a@\x12\x03CNY\x1a\x03USD\x12\x07\x08\xe6\x0f\x10\x03\x18\t\x1a\x07\x08\xe6\x0f\x10\x03\x18\t"
        );
    }

    #[test]
    fn time_series_wire_bytes_are_stable() {
        // Recorded for a two-point SHIBOR 3M fixing series.
        let series = TimeSeries {
            dates: vec![
                Date { year: 2022, month: 3, day: 3 },
                Date { year: 2022, month: 3, day: 4 },
            ],
            values: Some(Matrix::column(&[0.01, 0.03])),
            mode: time_series::Mode::TsForwardMode as i32,
            name: "SHIBOR_3M".into(),
        };
        assert_eq!(
            series.encode_to_vec(),
            b"\n\x07\x08\xe6\x0f\x10\x03\x18\x03\n\x07\x08\xe6\x0f\x10\x03\x18\x04\x12\x18\x08\x02\x10\x01\x1a\x10{\x14\xaeG\xe1z\x84?\xb8\x1e\x85\xebQ\xb8\x9e? \x01\"\tSHIBOR_3M"
        );
    }

    #[test]
    fn fx_spot_template_wire_bytes_are_stable() {
        let template = FxSpotTemplate {
            instrument_type: InstrumentType::FxSpot as i32,
            name: "TestFxSpot".into(),
            currency_pair: Some(CurrencyPair {
                base_currency: Some(Currency { name: "USD".into() }),
                quote_currency: Some(Currency { name: "CNY".into() }),
            }),
            spot_day_convention: crate::datetime::BusinessDayConvention::Following as i32,
            spot_delay: Some(Period {
                length: 1,
                units: crate::datetime::TimeUnit::Days as i32,
            }),
            calendars: vec!["CAL_CFETS".into()],
        };
        assert_eq!(
            template.encode_to_vec(),
            b"\x08\xb9\x17\x12\nTestFxSpot\x1a\x0e\n\x05\n\x03USD\x12\x05\n\x03CNY \x012\x04\x08\x01\x10\x01:\tCAL_CFETS"
        );
    }

    #[test]
    fn instrument_type_codes_match_contract() {
        assert_eq!(InstrumentType::Deposit as i32, 1001);
        assert_eq!(InstrumentType::Fra as i32, 2001);
        assert_eq!(InstrumentType::IrVanillaSwap as i32, 2002);
        assert_eq!(InstrumentType::FxSpot as i32, 3001);
    }
}

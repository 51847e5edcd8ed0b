//! Interest rate reference indices, leg/schedule definitions, instrument
//! templates and built instruments (`dqirmarket.proto`).

use crate::datetime::{Date, Period};
use crate::market::TimeSeries;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum LegType {
    InvalidLegType = 0,
    FixedLeg = 1,
    FloatingLeg = 2,
}

impl LegType {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            LegType::InvalidLegType => "INVALID_LEG_TYPE",
            LegType::FixedLeg => "FIXED_LEG",
            LegType::FloatingLeg => "FLOATING_LEG",
        }
    }

    pub fn from_str_name(value: &str) -> Option<Self> {
        match value {
            "INVALID_LEG_TYPE" => Some(LegType::InvalidLegType),
            "FIXED_LEG" => Some(LegType::FixedLeg),
            "FLOATING_LEG" => Some(LegType::FloatingLeg),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum PaymentDiscountMethod {
    InvalidPaymentDiscountMethod = 0,
    NoDiscount = 1,
    Discount = 2,
}

impl PaymentDiscountMethod {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            PaymentDiscountMethod::InvalidPaymentDiscountMethod => {
                "INVALID_PAYMENT_DISCOUNT_METHOD"
            }
            PaymentDiscountMethod::NoDiscount => "NO_DISCOUNT",
            PaymentDiscountMethod::Discount => "DISCOUNT",
        }
    }

    pub fn from_str_name(value: &str) -> Option<Self> {
        match value {
            "INVALID_PAYMENT_DISCOUNT_METHOD" => {
                Some(PaymentDiscountMethod::InvalidPaymentDiscountMethod)
            }
            "NO_DISCOUNT" => Some(PaymentDiscountMethod::NoDiscount),
            "DISCOUNT" => Some(PaymentDiscountMethod::Discount),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum RateCalcMethod {
    InvalidRateCalcMethod = 0,
    Standard = 1,
    Averaging = 2,
}

impl RateCalcMethod {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            RateCalcMethod::InvalidRateCalcMethod => "INVALID_RATE_CALC_METHOD",
            RateCalcMethod::Standard => "STANDARD",
            RateCalcMethod::Averaging => "AVERAGING",
        }
    }

    pub fn from_str_name(value: &str) -> Option<Self> {
        match value {
            "INVALID_RATE_CALC_METHOD" => Some(RateCalcMethod::InvalidRateCalcMethod),
            "STANDARD" => Some(RateCalcMethod::Standard),
            "AVERAGING" => Some(RateCalcMethod::Averaging),
            _ => None,
        }
    }
}

/// Notional exchange flavors. The engine contract uses 1 for "no exchange",
/// not 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum NotionalExchange {
    UnspecifiedNotionalExchange = 0,
    InvalidNotionalExchange = 1,
    InitialExchange = 2,
    FinalExchange = 3,
    InitialFinalExchange = 4,
}

impl NotionalExchange {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            NotionalExchange::UnspecifiedNotionalExchange => "UNSPECIFIED_NOTIONAL_EXCHANGE",
            NotionalExchange::InvalidNotionalExchange => "INVALID_NOTIONAL_EXCHANGE",
            NotionalExchange::InitialExchange => "INITIAL_EXCHANGE",
            NotionalExchange::FinalExchange => "FINAL_EXCHANGE",
            NotionalExchange::InitialFinalExchange => "INITIAL_FINAL_EXCHANGE",
        }
    }

    pub fn from_str_name(value: &str) -> Option<Self> {
        match value {
            "UNSPECIFIED_NOTIONAL_EXCHANGE" => {
                Some(NotionalExchange::UnspecifiedNotionalExchange)
            }
            "INVALID_NOTIONAL_EXCHANGE" => Some(NotionalExchange::InvalidNotionalExchange),
            "INITIAL_EXCHANGE" => Some(NotionalExchange::InitialExchange),
            "FINAL_EXCHANGE" => Some(NotionalExchange::FinalExchange),
            "INITIAL_FINAL_EXCHANGE" => Some(NotionalExchange::InitialFinalExchange),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum ScheduleReference {
    InvalidScheduleReference = 0,
    Standalone = 1,
    RelativeToAccrual = 3,
}

impl ScheduleReference {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            ScheduleReference::InvalidScheduleReference => "INVALID_SCHEDULE_REFERENCE",
            ScheduleReference::Standalone => "STANDALONE",
            ScheduleReference::RelativeToAccrual => "RELATIVE_TO_ACCRUAL",
        }
    }

    pub fn from_str_name(value: &str) -> Option<Self> {
        match value {
            "INVALID_SCHEDULE_REFERENCE" => Some(ScheduleReference::InvalidScheduleReference),
            "STANDALONE" => Some(ScheduleReference::Standalone),
            "RELATIVE_TO_ACCRUAL" => Some(ScheduleReference::RelativeToAccrual),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum RelativeSchedulePosition {
    InvalidRelativeSchedulePosition = 0,
    PeriodEnd = 1,
    PeriodStart = 2,
}

impl RelativeSchedulePosition {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            RelativeSchedulePosition::InvalidRelativeSchedulePosition => {
                "INVALID_RELATIVE_SCHEDULE_POSITION"
            }
            RelativeSchedulePosition::PeriodEnd => "PERIOD_END",
            RelativeSchedulePosition::PeriodStart => "PERIOD_START",
        }
    }

    pub fn from_str_name(value: &str) -> Option<Self> {
        match value {
            "INVALID_RELATIVE_SCHEDULE_POSITION" => {
                Some(RelativeSchedulePosition::InvalidRelativeSchedulePosition)
            }
            "PERIOD_END" => Some(RelativeSchedulePosition::PeriodEnd),
            "PERIOD_START" => Some(RelativeSchedulePosition::PeriodStart),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum PayReceiveFlag {
    Pay = 0,
    Receive = 1,
}

impl PayReceiveFlag {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            PayReceiveFlag::Pay => "PAY",
            PayReceiveFlag::Receive => "RECEIVE",
        }
    }

    pub fn from_str_name(value: &str) -> Option<Self> {
        match value {
            "PAY" => Some(PayReceiveFlag::Pay),
            "RECEIVE" => Some(PayReceiveFlag::Receive),
            _ => None,
        }
    }
}

// --- Reference indices ------------------------------------------------------

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct IborIndex {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(message, optional, tag = "2")]
    pub index_tenor: Option<Period>,
    #[prost(string, tag = "3")]
    pub currency: String,
    #[prost(string, repeated, tag = "4")]
    pub calendars: Vec<String>,
    #[prost(int32, tag = "5")]
    pub fixing_days: i32,
    #[prost(enumeration = "crate::datetime::DayCountConvention", tag = "6")]
    pub day_count_convention: i32,
    #[prost(enumeration = "crate::datetime::BusinessDayConvention", tag = "7")]
    pub fixing_day_convention: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateIborIndexInput {
    #[prost(message, optional, tag = "1")]
    pub ibor_index: Option<IborIndex>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateIborIndexOutput {
    #[prost(bool, tag = "1")]
    pub success: bool,
    #[prost(string, tag = "2")]
    pub err_msg: String,
}

// --- Schedule and leg definitions -------------------------------------------

/// One date schedule recipe: how the engine should roll a run of dates.
/// A standalone schedule generates its own dates; a relative one is derived
/// from the accrual schedule with an `offset` applied.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ScheduleDefinition {
    #[prost(enumeration = "ScheduleReference", tag = "1")]
    pub reference: i32,
    #[prost(enumeration = "RelativeSchedulePosition", tag = "2")]
    pub relative_position: i32,
    #[prost(string, repeated, tag = "3")]
    pub calendars: Vec<String>,
    #[prost(enumeration = "crate::datetime::Frequency", tag = "4")]
    pub frequency: i32,
    #[prost(enumeration = "crate::datetime::BusinessDayConvention", tag = "5")]
    pub business_day_convention: i32,
    #[prost(enumeration = "crate::datetime::StubPolicy", tag = "6")]
    pub stub_policy: i32,
    #[prost(enumeration = "crate::datetime::BrokenPeriodType", tag = "7")]
    pub broken_period_type: i32,
    #[prost(message, optional, tag = "8")]
    pub offset: Option<Period>,
    #[prost(enumeration = "crate::datetime::DateGenerationMode", tag = "9")]
    pub date_generation_mode: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LegScheduleDefinitions {
    #[prost(message, optional, tag = "1")]
    pub accrual: Option<ScheduleDefinition>,
    #[prost(message, optional, tag = "2")]
    pub payment: Option<ScheduleDefinition>,
    #[prost(message, optional, tag = "3")]
    pub fixing: Option<ScheduleDefinition>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct InterestRateLegDefinition {
    #[prost(enumeration = "LegType", tag = "1")]
    pub leg_type: i32,
    #[prost(string, tag = "2")]
    pub currency: String,
    #[prost(enumeration = "crate::datetime::DayCountConvention", tag = "3")]
    pub day_count_convention: i32,
    #[prost(string, tag = "4")]
    pub reference_index: String,
    #[prost(enumeration = "PaymentDiscountMethod", tag = "5")]
    pub payment_discount_method: i32,
    #[prost(enumeration = "RateCalcMethod", tag = "6")]
    pub rate_calc_method: i32,
    #[prost(enumeration = "NotionalExchange", tag = "7")]
    pub notional_exchange: i32,
    /// Always set by the builders; the engine treats an unset value as a
    /// malformed leg.
    #[prost(bool, tag = "8")]
    pub const_notional: bool,
    /// Money market legs (deposits, FRAs) keep their maturity unadjusted at
    /// the leg level; schedule rolling happens separately.
    #[prost(enumeration = "crate::datetime::BusinessDayConvention", tag = "9")]
    pub maturity_day_convention: i32,
    /// FRA legs settle the discounted payoff at period start.
    #[prost(bool, tag = "10")]
    pub advance_payment: bool,
    #[prost(message, optional, tag = "13")]
    pub schedules: Option<LegScheduleDefinitions>,
}

// --- Instrument templates ---------------------------------------------------

/// Template shared by deposits, FRAs and vanilla swaps. Single-leg products
/// carry one leg definition, swaps two.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct IrInstrumentTemplate {
    #[prost(enumeration = "crate::market::InstrumentType", tag = "1")]
    pub instrument_type: i32,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(message, optional, tag = "3")]
    pub start_delay: Option<Period>,
    #[prost(message, repeated, tag = "4")]
    pub leg_definitions: Vec<InterestRateLegDefinition>,
    #[prost(enumeration = "crate::datetime::InstrumentStartConvention", tag = "5")]
    pub start_convention: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LegFixings {
    #[prost(message, repeated, tag = "1")]
    pub fixings: Vec<leg_fixings::Entry>,
}

pub mod leg_fixings {
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Entry {
        #[prost(string, tag = "1")]
        pub reference_index: String,
        #[prost(message, optional, tag = "2")]
        pub fixings: Option<super::TimeSeries>,
    }
}

// --- Built instruments ------------------------------------------------------

/// One accrual period of a generated cash flow. `fixing_date` doubles as the
/// accrual start on fixed legs; `rate` is only present once the period has
/// fixed.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CouponPeriod {
    #[prost(message, optional, tag = "1")]
    pub fixing_date: Option<Date>,
    #[prost(message, optional, tag = "2")]
    pub accrual_start_date: Option<Date>,
    #[prost(message, optional, tag = "3")]
    pub accrual_end_date: Option<Date>,
    #[prost(double, tag = "4")]
    pub rate: f64,
    #[prost(double, tag = "5")]
    pub notional_factor: f64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct InterestCalculation {
    #[prost(message, optional, tag = "1")]
    pub period: Option<CouponPeriod>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CashFlow {
    #[prost(message, optional, tag = "1")]
    pub payment_date: Option<Date>,
    #[prost(message, optional, tag = "2")]
    pub interest: Option<InterestCalculation>,
    #[prost(double, tag = "3")]
    pub amount: f64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CashFlowSchedule {
    #[prost(message, repeated, tag = "1")]
    pub cash_flows: Vec<CashFlow>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct InterestRateLeg {
    #[prost(enumeration = "PayReceiveFlag", tag = "1")]
    pub pay_receive: i32,
    #[prost(message, optional, tag = "2")]
    pub definition: Option<InterestRateLegDefinition>,
    #[prost(message, optional, tag = "3")]
    pub cash_flow_schedule: Option<CashFlowSchedule>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Notional {
    #[prost(string, tag = "1")]
    pub currency: String,
    #[prost(double, tag = "2")]
    pub amount: f64,
}

/// A leg of a built instrument. `rate` is the contractual fixed rate or
/// spread, signed by leg direction.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct InstrumentLeg {
    #[prost(message, optional, tag = "1")]
    pub interest_rate_leg: Option<InterestRateLeg>,
    #[prost(double, tag = "2")]
    pub rate: f64,
    #[prost(message, optional, tag = "3")]
    pub notional: Option<Notional>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct InstrumentInfo {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(int32, tag = "2")]
    pub leg_count: i32,
    #[prost(enumeration = "crate::market::InstrumentType", tag = "3")]
    pub instrument_type: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct InterestRateInstrument {
    #[prost(message, optional, tag = "1")]
    pub info: Option<InstrumentInfo>,
    #[prost(message, repeated, tag = "2")]
    pub legs: Vec<InstrumentLeg>,
}

// --- Build operations -------------------------------------------------------

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BuildDepoInput {
    #[prost(enumeration = "PayReceiveFlag", tag = "1")]
    pub pay_receive: i32,
    #[prost(double, tag = "2")]
    pub rate: f64,
    #[prost(message, optional, tag = "3")]
    pub start_date: Option<Date>,
    #[prost(message, optional, tag = "4")]
    pub maturity_date: Option<Date>,
    #[prost(message, optional, tag = "5")]
    pub template: Option<IrInstrumentTemplate>,
    #[prost(double, tag = "6")]
    pub nominal: f64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BuildDepoOutput {
    #[prost(bool, tag = "1")]
    pub success: bool,
    #[prost(string, tag = "2")]
    pub err_msg: String,
    #[prost(message, optional, tag = "3")]
    pub instrument: Option<InterestRateInstrument>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BuildFraInput {
    #[prost(enumeration = "PayReceiveFlag", tag = "1")]
    pub pay_receive: i32,
    #[prost(double, tag = "2")]
    pub rate: f64,
    #[prost(message, optional, tag = "3")]
    pub start_date: Option<Date>,
    #[prost(message, optional, tag = "4")]
    pub maturity_date: Option<Date>,
    #[prost(message, optional, tag = "5")]
    pub template: Option<IrInstrumentTemplate>,
    #[prost(message, optional, tag = "6")]
    pub leg_fixings: Option<LegFixings>,
    #[prost(double, tag = "7")]
    pub nominal: f64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BuildFraOutput {
    #[prost(bool, tag = "1")]
    pub success: bool,
    #[prost(string, tag = "2")]
    pub err_msg: String,
    #[prost(message, optional, tag = "3")]
    pub instrument: Option<InterestRateInstrument>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BuildIrVanillaInstrumentInput {
    #[prost(enumeration = "PayReceiveFlag", tag = "1")]
    pub pay_receive: i32,
    #[prost(double, tag = "2")]
    pub fixed_rate: f64,
    #[prost(double, tag = "3")]
    pub spread: f64,
    #[prost(message, optional, tag = "4")]
    pub start_date: Option<Date>,
    #[prost(message, optional, tag = "5")]
    pub maturity_date: Option<Date>,
    #[prost(message, optional, tag = "6")]
    pub template: Option<IrInstrumentTemplate>,
    #[prost(double, tag = "7")]
    pub nominal: f64,
    #[prost(message, optional, tag = "8")]
    pub leg_fixings: Option<LegFixings>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BuildIrVanillaInstrumentOutput {
    #[prost(bool, tag = "1")]
    pub success: bool,
    #[prost(string, tag = "2")]
    pub err_msg: String,
    #[prost(message, optional, tag = "3")]
    pub instrument: Option<InterestRateInstrument>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message;

    fn fixed_leg_definition() -> InterestRateLegDefinition {
        InterestRateLegDefinition {
            leg_type: LegType::FixedLeg as i32,
            currency: "CNY".into(),
            day_count_convention: crate::datetime::DayCountConvention::Act365Fixed as i32,
            reference_index: String::new(),
            payment_discount_method: PaymentDiscountMethod::NoDiscount as i32,
            rate_calc_method: RateCalcMethod::Standard as i32,
            notional_exchange: NotionalExchange::InvalidNotionalExchange as i32,
            const_notional: true,
            maturity_day_convention: 0,
            advance_payment: false,
            schedules: Some(LegScheduleDefinitions {
                accrual: Some(ScheduleDefinition {
                    reference: ScheduleReference::Standalone as i32,
                    relative_position: 0,
                    calendars: vec!["CAL_CFETS".into()],
                    frequency: crate::datetime::Frequency::Quarterly as i32,
                    business_day_convention:
                        crate::datetime::BusinessDayConvention::ModifiedFollowing as i32,
                    stub_policy: crate::datetime::StubPolicy::Initial as i32,
                    broken_period_type: crate::datetime::BrokenPeriodType::Long as i32,
                    offset: None,
                    date_generation_mode: 0,
                }),
                payment: Some(ScheduleDefinition {
                    reference: ScheduleReference::RelativeToAccrual as i32,
                    relative_position: RelativeSchedulePosition::PeriodEnd as i32,
                    calendars: vec!["CAL_CFETS".into()],
                    frequency: crate::datetime::Frequency::Quarterly as i32,
                    business_day_convention:
                        crate::datetime::BusinessDayConvention::ModifiedFollowing as i32,
                    stub_policy: crate::datetime::StubPolicy::Final as i32,
                    broken_period_type: crate::datetime::BrokenPeriodType::Short as i32,
                    offset: Some(Period {
                        length: 0,
                        units: crate::datetime::TimeUnit::Days as i32,
                    }),
                    date_generation_mode: crate::datetime::DateGenerationMode::InArrears as i32,
                }),
                fixing: Some(ScheduleDefinition {
                    reference: ScheduleReference::RelativeToAccrual as i32,
                    relative_position: RelativeSchedulePosition::PeriodEnd as i32,
                    calendars: Vec::new(),
                    frequency: 0,
                    business_day_convention: 0,
                    stub_policy: 0,
                    broken_period_type: crate::datetime::BrokenPeriodType::Short as i32,
                    offset: Some(Period {
                        length: 0,
                        units: crate::datetime::TimeUnit::Days as i32,
                    }),
                    date_generation_mode: crate::datetime::DateGenerationMode::InArrears as i32,
                }),
            }),
        }
    }

    #[test]
    fn leg_definition_wire_bytes_are_stable() {
        // Engine-recorded bytes for a quarterly CNY fixed leg.
        let expected: &[u8] = b"\x08\x01\x12\x03CNY\x18\x02(\x010\x018\x01@\x01jD\n\x15\x08\x01\x1a\tCAL_CFETS \x04(\x020\x018\x02\x12\x1d\x08\x03\x10\x01\x1a\tCAL_CFETS \x04(\x020\x028\x01B\x02\x10\x01H\x02\x1a\x0c\x08\x03\x10\x018\x01B\x02\x10\x01H\x02";
        assert_eq!(fixed_leg_definition().encode_to_vec(), expected);
    }

    #[test]
    fn swap_template_carries_both_legs() {
        let template = IrInstrumentTemplate {
            instrument_type: crate::market::InstrumentType::IrVanillaSwap as i32,
            name: "CNY_SHIBOR_3M".into(),
            start_delay: Some(Period {
                length: 1,
                units: crate::datetime::TimeUnit::Days as i32,
            }),
            leg_definitions: vec![fixed_leg_definition(), fixed_leg_definition()],
            start_convention: crate::datetime::InstrumentStartConvention::SpotStart as i32,
        };
        let decoded = IrInstrumentTemplate::decode(template.encode_to_vec().as_slice()).unwrap();
        assert_eq!(decoded.leg_definitions.len(), 2);
        assert_eq!(decoded, template);
    }

    #[test]
    fn built_deposit_decodes_from_engine_bytes() {
        // Engine-recorded BUILD_DEPO reply body: a paid CNY 3m deposit at
        // 30.5% on 3,000,000 notional, maturing 2022-06-27.
        let recorded: &[u8] = b"\x0a\x07\x0a\x00\x10\x01\x18\xe9\x07\x12\xb7\x01\x0a\x9b\x01\x12[\x08\x01\x12\x03CNY\x18\x01(\x010\x018\x01@\x01H\x05jF\x0a\x16\x08\x01\x1a\x09CAL_CFETS \xe7\x07(\x020\x018\x02\x12\x1e\x08\x03\x10\x01\x1a\x09CAL_CFETS \xe7\x07(\x020\x028\x01B\x02\x10\x01H\x02\x1a\x0c\x08\x03\x10\x018\x01B\x02\x10\x01H\x02\x1a<\x0a:\x0a\x07\x08\xe6\x0f\x10\x06\x18\x1b\x12&\x0a$\x0a\x07\x08\xe6\x0f\x10\x03\x18\x19\x12\x07\x08\xe6\x0f\x10\x03\x18\x19\x1a\x07\x08\xe6\x0f\x10\x06\x18\x1b)\x00\x00\x00\x00\x00\x00\xf0?\x19\x00\x00\x00\x00`\xe3F\xc1\x11\x85\xebQ\xb8\x1e\x85\xd3?\x1a\x0e\x0a\x03CNY\x11\x00\x00\x00\x00`\xe3F\xc1";
        let instrument = InterestRateInstrument::decode(recorded).unwrap();

        let info = instrument.info.unwrap();
        assert_eq!(info.instrument_type, crate::market::InstrumentType::Deposit as i32);
        assert_eq!(info.leg_count, 1);

        assert_eq!(instrument.legs.len(), 1);
        let leg = &instrument.legs[0];
        assert_eq!(leg.rate, 0.305);
        let notional = leg.notional.as_ref().unwrap();
        assert_eq!(notional.currency, "CNY");
        assert_eq!(notional.amount, -3_000_000.0);

        let rate_leg = leg.interest_rate_leg.as_ref().unwrap();
        assert_eq!(rate_leg.pay_receive, PayReceiveFlag::Pay as i32);
        let flows = &rate_leg.cash_flow_schedule.as_ref().unwrap().cash_flows;
        assert_eq!(flows.len(), 1);
        assert_eq!(flows[0].payment_date, Some(Date { year: 2022, month: 6, day: 27 }));
        assert_eq!(flows[0].amount, -3_000_000.0);
        let period = flows[0].interest.as_ref().unwrap().period.as_ref().unwrap();
        assert_eq!(period.accrual_start_date, Some(Date { year: 2022, month: 3, day: 25 }));
        assert_eq!(period.accrual_end_date, Some(Date { year: 2022, month: 6, day: 27 }));
        assert_eq!(period.notional_factor, 1.0);
    }

    #[test]
    fn build_depo_input_round_trips() {
        let input = BuildDepoInput {
            pay_receive: PayReceiveFlag::Receive as i32,
            rate: 0.02,
            start_date: Some(Date { year: 2022, month: 3, day: 9 }),
            maturity_date: Some(Date { year: 2022, month: 6, day: 9 }),
            template: Some(IrInstrumentTemplate {
                instrument_type: crate::market::InstrumentType::Deposit as i32,
                name: "CNY_CASH".into(),
                start_delay: Some(Period {
                    length: 1,
                    units: crate::datetime::TimeUnit::Days as i32,
                }),
                leg_definitions: vec![fixed_leg_definition()],
                start_convention: crate::datetime::InstrumentStartConvention::SpotStart as i32,
            }),
            nominal: 1_000_000.0,
        };
        let decoded = BuildDepoInput::decode(input.encode_to_vec().as_slice()).unwrap();
        assert_eq!(decoded, input);
    }
}

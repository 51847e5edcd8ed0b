//! Date, period and calendar messages (`dqdatetime.proto`).

/// A calendar date. Serialized as plain year/month/day fields; all date
/// arithmetic happens engine-side.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Date {
    #[prost(int32, tag = "1")]
    pub year: i32,
    #[prost(int32, tag = "2")]
    pub month: i32,
    #[prost(int32, tag = "3")]
    pub day: i32,
}

/// A tenor such as "3M" or "-2D". Negative lengths are used for offsets
/// counted backwards (e.g. fixing offsets).
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Period {
    #[prost(int32, tag = "1")]
    pub length: i32,
    #[prost(enumeration = "TimeUnit", tag = "2")]
    pub units: i32,
}

/// A named holiday calendar registered with the engine.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Calendar {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(message, repeated, tag = "2")]
    pub holidays: Vec<Date>,
    #[prost(message, repeated, tag = "3")]
    pub special_business_days: Vec<Date>,
}

/// Input for the CREATE_CALENDAR request.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateCalendarInput {
    #[prost(message, optional, tag = "1")]
    pub calendar: Option<Calendar>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateCalendarOutput {
    #[prost(bool, tag = "1")]
    pub success: bool,
    #[prost(string, tag = "2")]
    pub err_msg: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum TimeUnit {
    InvalidTimeUnit = 0,
    Days = 1,
    Weeks = 2,
    Months = 3,
    Years = 4,
}

impl TimeUnit {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            TimeUnit::InvalidTimeUnit => "INVALID_TIME_UNIT",
            TimeUnit::Days => "DAYS",
            TimeUnit::Weeks => "WEEKS",
            TimeUnit::Months => "MONTHS",
            TimeUnit::Years => "YEARS",
        }
    }

    pub fn from_str_name(value: &str) -> Option<Self> {
        match value {
            "INVALID_TIME_UNIT" => Some(TimeUnit::InvalidTimeUnit),
            "DAYS" => Some(TimeUnit::Days),
            "WEEKS" => Some(TimeUnit::Weeks),
            "MONTHS" => Some(TimeUnit::Months),
            "YEARS" => Some(TimeUnit::Years),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum BusinessDayConvention {
    InvalidBusinessDayConvention = 0,
    Following = 1,
    ModifiedFollowing = 2,
    Preceding = 3,
    ModifiedPreceding = 4,
    Unadjusted = 5,
}

impl BusinessDayConvention {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            BusinessDayConvention::InvalidBusinessDayConvention => {
                "INVALID_BUSINESS_DAY_CONVENTION"
            }
            BusinessDayConvention::Following => "FOLLOWING",
            BusinessDayConvention::ModifiedFollowing => "MODIFIED_FOLLOWING",
            BusinessDayConvention::Preceding => "PRECEDING",
            BusinessDayConvention::ModifiedPreceding => "MODIFIED_PRECEDING",
            BusinessDayConvention::Unadjusted => "UNADJUSTED",
        }
    }

    pub fn from_str_name(value: &str) -> Option<Self> {
        match value {
            "INVALID_BUSINESS_DAY_CONVENTION" => {
                Some(BusinessDayConvention::InvalidBusinessDayConvention)
            }
            "FOLLOWING" => Some(BusinessDayConvention::Following),
            "MODIFIED_FOLLOWING" => Some(BusinessDayConvention::ModifiedFollowing),
            "PRECEDING" => Some(BusinessDayConvention::Preceding),
            "MODIFIED_PRECEDING" => Some(BusinessDayConvention::ModifiedPreceding),
            "UNADJUSTED" => Some(BusinessDayConvention::Unadjusted),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum DayCountConvention {
    InvalidDayCountConvention = 0,
    Act360 = 1,
    Act365Fixed = 2,
    ActActIsda = 3,
    Thirty360 = 4,
    Bus252 = 5,
}

impl DayCountConvention {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            DayCountConvention::InvalidDayCountConvention => "INVALID_DAY_COUNT_CONVENTION",
            DayCountConvention::Act360 => "ACT_360",
            DayCountConvention::Act365Fixed => "ACT_365_FIXED",
            DayCountConvention::ActActIsda => "ACT_ACT_ISDA",
            DayCountConvention::Thirty360 => "THIRTY_360",
            DayCountConvention::Bus252 => "BUS_252",
        }
    }

    pub fn from_str_name(value: &str) -> Option<Self> {
        match value {
            "INVALID_DAY_COUNT_CONVENTION" => Some(DayCountConvention::InvalidDayCountConvention),
            "ACT_360" => Some(DayCountConvention::Act360),
            "ACT_365_FIXED" => Some(DayCountConvention::Act365Fixed),
            "ACT_ACT_ISDA" => Some(DayCountConvention::ActActIsda),
            "THIRTY_360" => Some(DayCountConvention::Thirty360),
            "BUS_252" => Some(DayCountConvention::Bus252),
            _ => None,
        }
    }
}

/// Schedule frequencies. `Once` carries the out-of-band engine code used
/// for single-period instruments such as deposits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum Frequency {
    InvalidFrequency = 0,
    Annual = 1,
    SemiAnnual = 2,
    TriAnnual = 3,
    Quarterly = 4,
    Bimonthly = 5,
    Monthly = 6,
    Biweekly = 7,
    Weekly = 8,
    Daily = 9,
    Once = 999,
}

impl Frequency {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Frequency::InvalidFrequency => "INVALID_FREQUENCY",
            Frequency::Annual => "ANNUAL",
            Frequency::SemiAnnual => "SEMI_ANNUAL",
            Frequency::TriAnnual => "TRI_ANNUAL",
            Frequency::Quarterly => "QUARTERLY",
            Frequency::Bimonthly => "BIMONTHLY",
            Frequency::Monthly => "MONTHLY",
            Frequency::Biweekly => "BIWEEKLY",
            Frequency::Weekly => "WEEKLY",
            Frequency::Daily => "DAILY",
            Frequency::Once => "ONCE",
        }
    }

    pub fn from_str_name(value: &str) -> Option<Self> {
        match value {
            "INVALID_FREQUENCY" => Some(Frequency::InvalidFrequency),
            "ANNUAL" => Some(Frequency::Annual),
            "SEMI_ANNUAL" => Some(Frequency::SemiAnnual),
            "TRI_ANNUAL" => Some(Frequency::TriAnnual),
            "QUARTERLY" => Some(Frequency::Quarterly),
            "BIMONTHLY" => Some(Frequency::Bimonthly),
            "MONTHLY" => Some(Frequency::Monthly),
            "BIWEEKLY" => Some(Frequency::Biweekly),
            "WEEKLY" => Some(Frequency::Weekly),
            "DAILY" => Some(Frequency::Daily),
            "ONCE" => Some(Frequency::Once),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum StubPolicy {
    InvalidStubPolicy = 0,
    Initial = 1,
    Final = 2,
}

impl StubPolicy {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            StubPolicy::InvalidStubPolicy => "INVALID_STUB_POLICY",
            StubPolicy::Initial => "INITIAL",
            StubPolicy::Final => "FINAL",
        }
    }

    pub fn from_str_name(value: &str) -> Option<Self> {
        match value {
            "INVALID_STUB_POLICY" => Some(StubPolicy::InvalidStubPolicy),
            "INITIAL" => Some(StubPolicy::Initial),
            "FINAL" => Some(StubPolicy::Final),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum BrokenPeriodType {
    InvalidBrokenPeriodType = 0,
    Short = 1,
    Long = 2,
}

impl BrokenPeriodType {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            BrokenPeriodType::InvalidBrokenPeriodType => "INVALID_BROKEN_PERIOD_TYPE",
            BrokenPeriodType::Short => "SHORT",
            BrokenPeriodType::Long => "LONG",
        }
    }

    pub fn from_str_name(value: &str) -> Option<Self> {
        match value {
            "INVALID_BROKEN_PERIOD_TYPE" => Some(BrokenPeriodType::InvalidBrokenPeriodType),
            "SHORT" => Some(BrokenPeriodType::Short),
            "LONG" => Some(BrokenPeriodType::Long),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum DateGenerationMode {
    InvalidDateGenerationMode = 0,
    InAdvance = 1,
    InArrears = 2,
}

impl DateGenerationMode {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            DateGenerationMode::InvalidDateGenerationMode => "INVALID_DATE_GENERATION_MODE",
            DateGenerationMode::InAdvance => "IN_ADVANCE",
            DateGenerationMode::InArrears => "IN_ARREARS",
        }
    }

    pub fn from_str_name(value: &str) -> Option<Self> {
        match value {
            "INVALID_DATE_GENERATION_MODE" => Some(DateGenerationMode::InvalidDateGenerationMode),
            "IN_ADVANCE" => Some(DateGenerationMode::InAdvance),
            "IN_ARREARS" => Some(DateGenerationMode::InArrears),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum DateRollConvention {
    InvalidDateRollConvention = 0,
    Eom = 1,
    Imm = 2,
}

impl DateRollConvention {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            DateRollConvention::InvalidDateRollConvention => "INVALID_DATE_ROLL_CONVENTION",
            DateRollConvention::Eom => "EOM",
            DateRollConvention::Imm => "IMM",
        }
    }

    pub fn from_str_name(value: &str) -> Option<Self> {
        match value {
            "INVALID_DATE_ROLL_CONVENTION" => Some(DateRollConvention::InvalidDateRollConvention),
            "EOM" => Some(DateRollConvention::Eom),
            "IMM" => Some(DateRollConvention::Imm),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum InstrumentStartConvention {
    InvalidInstrumentStartConvention = 0,
    SpotStart = 1,
    ForwardStart = 2,
}

impl InstrumentStartConvention {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            InstrumentStartConvention::InvalidInstrumentStartConvention => {
                "INVALID_INSTRUMENT_START_CONVENTION"
            }
            InstrumentStartConvention::SpotStart => "SPOT_START",
            InstrumentStartConvention::ForwardStart => "FORWARD_START",
        }
    }

    pub fn from_str_name(value: &str) -> Option<Self> {
        match value {
            "INVALID_INSTRUMENT_START_CONVENTION" => {
                Some(InstrumentStartConvention::InvalidInstrumentStartConvention)
            }
            "SPOT_START" => Some(InstrumentStartConvention::SpotStart),
            "FORWARD_START" => Some(InstrumentStartConvention::ForwardStart),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message;

    #[test]
    fn date_wire_bytes_are_stable() {
        // Recorded from the engine contract: 2022-03-03.
        let date = Date { year: 2022, month: 3, day: 3 };
        assert_eq!(date.encode_to_vec(), b"\x08\xe6\x0f\x10\x03\x18\x03");
    }

    #[test]
    fn negative_period_length_round_trips() {
        let period = Period { length: -2, units: TimeUnit::Days as i32 };
        let bytes = period.encode_to_vec();
        let back = Period::decode(bytes.as_slice()).unwrap();
        assert_eq!(back, period);
    }

    #[test]
    fn enum_str_names_round_trip() {
        for dc in [
            DayCountConvention::Act360,
            DayCountConvention::Act365Fixed,
            DayCountConvention::ActActIsda,
        ] {
            assert_eq!(DayCountConvention::from_str_name(dc.as_str_name()), Some(dc));
        }
        assert_eq!(Frequency::from_str_name("ONCE"), Some(Frequency::Once));
        assert_eq!(Frequency::Once as i32, 999);
    }
}

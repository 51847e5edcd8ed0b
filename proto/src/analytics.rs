//! Curves, volatility surfaces, pricing settings, risk settings and pricing
//! results shared by every asset class (`dqanalytics.proto`).

use crate::datetime::{Date, Period};
use crate::numerics::{Matrix, Vector};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum IrYieldCurveType {
    InvalidIrYieldCurveType = 0,
    ZeroRateCurve = 1,
    DiscountFactorCurve = 2,
}

impl IrYieldCurveType {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            IrYieldCurveType::InvalidIrYieldCurveType => "INVALID_IR_YIELD_CURVE_TYPE",
            IrYieldCurveType::ZeroRateCurve => "ZERO_RATE_CURVE",
            IrYieldCurveType::DiscountFactorCurve => "DISCOUNT_FACTOR_CURVE",
        }
    }

    pub fn from_str_name(value: &str) -> Option<Self> {
        match value {
            "INVALID_IR_YIELD_CURVE_TYPE" => Some(IrYieldCurveType::InvalidIrYieldCurveType),
            "ZERO_RATE_CURVE" => Some(IrYieldCurveType::ZeroRateCurve),
            "DISCOUNT_FACTOR_CURVE" => Some(IrYieldCurveType::DiscountFactorCurve),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum SmileMethod {
    InvalidSmileMethod = 0,
    LinearSmileMethod = 1,
    CubicSmileMethod = 2,
    SviSmileMethod = 3,
}

impl SmileMethod {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            SmileMethod::InvalidSmileMethod => "INVALID_SMILE_METHOD",
            SmileMethod::LinearSmileMethod => "LINEAR_SMILE_METHOD",
            SmileMethod::CubicSmileMethod => "CUBIC_SMILE_METHOD",
            SmileMethod::SviSmileMethod => "SVI_SMILE_METHOD",
        }
    }

    pub fn from_str_name(value: &str) -> Option<Self> {
        match value {
            "INVALID_SMILE_METHOD" => Some(SmileMethod::InvalidSmileMethod),
            "LINEAR_SMILE_METHOD" => Some(SmileMethod::LinearSmileMethod),
            "CUBIC_SMILE_METHOD" => Some(SmileMethod::CubicSmileMethod),
            "SVI_SMILE_METHOD" => Some(SmileMethod::SviSmileMethod),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum WingStrikeType {
    InvalidWingStrikeType = 0,
    Delta = 1,
    Strike = 2,
    Moneyness = 3,
}

impl WingStrikeType {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            WingStrikeType::InvalidWingStrikeType => "INVALID_WING_STRIKE_TYPE",
            WingStrikeType::Delta => "DELTA",
            WingStrikeType::Strike => "STRIKE",
            WingStrikeType::Moneyness => "MONEYNESS",
        }
    }

    pub fn from_str_name(value: &str) -> Option<Self> {
        match value {
            "INVALID_WING_STRIKE_TYPE" => Some(WingStrikeType::InvalidWingStrikeType),
            "DELTA" => Some(WingStrikeType::Delta),
            "STRIKE" => Some(WingStrikeType::Strike),
            "MONEYNESS" => Some(WingStrikeType::Moneyness),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum PricingModelName {
    InvalidPricingModelName = 0,
    BlackScholesMerton = 1,
    DupireLocalVolModel = 2,
    HestonModel = 3,
}

impl PricingModelName {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            PricingModelName::InvalidPricingModelName => "INVALID_PRICING_MODEL_NAME",
            PricingModelName::BlackScholesMerton => "BLACK_SCHOLES_MERTON",
            PricingModelName::DupireLocalVolModel => "DUPIRE_LOCAL_VOL_MODEL",
            PricingModelName::HestonModel => "HESTON_MODEL",
        }
    }

    pub fn from_str_name(value: &str) -> Option<Self> {
        match value {
            "INVALID_PRICING_MODEL_NAME" => Some(PricingModelName::InvalidPricingModelName),
            "BLACK_SCHOLES_MERTON" => Some(PricingModelName::BlackScholesMerton),
            "DUPIRE_LOCAL_VOL_MODEL" => Some(PricingModelName::DupireLocalVolModel),
            "HESTON_MODEL" => Some(PricingModelName::HestonModel),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum PricingMethodName {
    InvalidPricingMethodName = 0,
    Analytical = 1,
    Pde = 2,
    MonteCarlo = 3,
}

impl PricingMethodName {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            PricingMethodName::InvalidPricingMethodName => "INVALID_PRICING_METHOD_NAME",
            PricingMethodName::Analytical => "ANALYTICAL",
            PricingMethodName::Pde => "PDE",
            PricingMethodName::MonteCarlo => "MONTE_CARLO",
        }
    }

    pub fn from_str_name(value: &str) -> Option<Self> {
        match value {
            "INVALID_PRICING_METHOD_NAME" => Some(PricingMethodName::InvalidPricingMethodName),
            "ANALYTICAL" => Some(PricingMethodName::Analytical),
            "PDE" => Some(PricingMethodName::Pde),
            "MONTE_CARLO" => Some(PricingMethodName::MonteCarlo),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum MinMaxType {
    InvalidMinMaxType = 0,
    MmtAbsolute = 1,
    MmtNumStdevs = 2,
}

impl MinMaxType {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            MinMaxType::InvalidMinMaxType => "INVALID_MIN_MAX_TYPE",
            MinMaxType::MmtAbsolute => "MMT_ABSOLUTE",
            MinMaxType::MmtNumStdevs => "MMT_NUM_STDEVS",
        }
    }

    pub fn from_str_name(value: &str) -> Option<Self> {
        match value {
            "INVALID_MIN_MAX_TYPE" => Some(MinMaxType::InvalidMinMaxType),
            "MMT_ABSOLUTE" => Some(MinMaxType::MmtAbsolute),
            "MMT_NUM_STDEVS" => Some(MinMaxType::MmtNumStdevs),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum GridType {
    InvalidGridType = 0,
    UniformGrid = 1,
    AdaptiveGrid = 2,
}

impl GridType {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            GridType::InvalidGridType => "INVALID_GRID_TYPE",
            GridType::UniformGrid => "UNIFORM_GRID",
            GridType::AdaptiveGrid => "ADAPTIVE_GRID",
        }
    }

    pub fn from_str_name(value: &str) -> Option<Self> {
        match value {
            "INVALID_GRID_TYPE" => Some(GridType::InvalidGridType),
            "UNIFORM_GRID" => Some(GridType::UniformGrid),
            "ADAPTIVE_GRID" => Some(GridType::AdaptiveGrid),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum UniformNumberType {
    InvalidUniformNumberType = 0,
    PseudoNumber = 1,
    SobolNumber = 2,
}

impl UniformNumberType {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            UniformNumberType::InvalidUniformNumberType => "INVALID_UNIFORM_NUMBER_TYPE",
            UniformNumberType::PseudoNumber => "PSEUDO_NUMBER",
            UniformNumberType::SobolNumber => "SOBOL_NUMBER",
        }
    }

    pub fn from_str_name(value: &str) -> Option<Self> {
        match value {
            "INVALID_UNIFORM_NUMBER_TYPE" => Some(UniformNumberType::InvalidUniformNumberType),
            "PSEUDO_NUMBER" => Some(UniformNumberType::PseudoNumber),
            "SOBOL_NUMBER" => Some(UniformNumberType::SobolNumber),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum WienerProcessBuildMethod {
    InvalidWienerProcessBuildMethod = 0,
    DirectMethod = 1,
    BrownianBridgeMethod = 2,
}

impl WienerProcessBuildMethod {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            WienerProcessBuildMethod::InvalidWienerProcessBuildMethod => {
                "INVALID_WIENER_PROCESS_BUILD_METHOD"
            }
            WienerProcessBuildMethod::DirectMethod => "DIRECT_METHOD",
            WienerProcessBuildMethod::BrownianBridgeMethod => "BROWNIAN_BRIDGE_METHOD",
        }
    }

    pub fn from_str_name(value: &str) -> Option<Self> {
        match value {
            "INVALID_WIENER_PROCESS_BUILD_METHOD" => {
                Some(WienerProcessBuildMethod::InvalidWienerProcessBuildMethod)
            }
            "DIRECT_METHOD" => Some(WienerProcessBuildMethod::DirectMethod),
            "BROWNIAN_BRIDGE_METHOD" => Some(WienerProcessBuildMethod::BrownianBridgeMethod),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum GaussianNumberMethod {
    InvalidGaussianNumberMethod = 0,
    BoxMullerMethod = 1,
    InverseCumulativeMethod = 2,
}

impl GaussianNumberMethod {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            GaussianNumberMethod::InvalidGaussianNumberMethod => {
                "INVALID_GAUSSIAN_NUMBER_METHOD"
            }
            GaussianNumberMethod::BoxMullerMethod => "BOX_MULLER_METHOD",
            GaussianNumberMethod::InverseCumulativeMethod => "INVERSE_CUMULATIVE_METHOD",
        }
    }

    pub fn from_str_name(value: &str) -> Option<Self> {
        match value {
            "INVALID_GAUSSIAN_NUMBER_METHOD" => {
                Some(GaussianNumberMethod::InvalidGaussianNumberMethod)
            }
            "BOX_MULLER_METHOD" => Some(GaussianNumberMethod::BoxMullerMethod),
            "INVERSE_CUMULATIVE_METHOD" => Some(GaussianNumberMethod::InverseCumulativeMethod),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum FiniteDifferenceMethod {
    InvalidFiniteDifferenceMethod = 0,
    ForwardDifferenceMethod = 1,
    CentralDifferenceMethod = 2,
    BackwardDifferenceMethod = 3,
}

impl FiniteDifferenceMethod {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            FiniteDifferenceMethod::InvalidFiniteDifferenceMethod => {
                "INVALID_FINITE_DIFFERENCE_METHOD"
            }
            FiniteDifferenceMethod::ForwardDifferenceMethod => "FORWARD_DIFFERENCE_METHOD",
            FiniteDifferenceMethod::CentralDifferenceMethod => "CENTRAL_DIFFERENCE_METHOD",
            FiniteDifferenceMethod::BackwardDifferenceMethod => "BACKWARD_DIFFERENCE_METHOD",
        }
    }

    pub fn from_str_name(value: &str) -> Option<Self> {
        match value {
            "INVALID_FINITE_DIFFERENCE_METHOD" => {
                Some(FiniteDifferenceMethod::InvalidFiniteDifferenceMethod)
            }
            "FORWARD_DIFFERENCE_METHOD" => Some(FiniteDifferenceMethod::ForwardDifferenceMethod),
            "CENTRAL_DIFFERENCE_METHOD" => Some(FiniteDifferenceMethod::CentralDifferenceMethod),
            "BACKWARD_DIFFERENCE_METHOD" => {
                Some(FiniteDifferenceMethod::BackwardDifferenceMethod)
            }
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum RiskGranularity {
    TotalRisk = 0,
    TermBucketRisk = 1,
    TermStrikeBucketRisk = 2,
}

impl RiskGranularity {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            RiskGranularity::TotalRisk => "TOTAL_RISK",
            RiskGranularity::TermBucketRisk => "TERM_BUCKET_RISK",
            RiskGranularity::TermStrikeBucketRisk => "TERM_STRIKE_BUCKET_RISK",
        }
    }

    pub fn from_str_name(value: &str) -> Option<Self> {
        match value {
            "TOTAL_RISK" => Some(RiskGranularity::TotalRisk),
            "TERM_BUCKET_RISK" => Some(RiskGranularity::TermBucketRisk),
            "TERM_STRIKE_BUCKET_RISK" => Some(RiskGranularity::TermStrikeBucketRisk),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum ThreadingMode {
    SingleThreadingMode = 0,
    MultiThreadingMode = 1,
}

impl ThreadingMode {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            ThreadingMode::SingleThreadingMode => "SINGLE_THREADING_MODE",
            ThreadingMode::MultiThreadingMode => "MULTI_THREADING_MODE",
        }
    }

    pub fn from_str_name(value: &str) -> Option<Self> {
        match value {
            "SINGLE_THREADING_MODE" => Some(ThreadingMode::SingleThreadingMode),
            "MULTI_THREADING_MODE" => Some(ThreadingMode::MultiThreadingMode),
            _ => None,
        }
    }
}

// --- Curves -----------------------------------------------------------------

/// A pillar instrument quote used to bootstrap a curve.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ParCurvePillar {
    #[prost(string, tag = "1")]
    pub instrument_name: String,
    #[prost(enumeration = "crate::market::InstrumentType", tag = "2")]
    pub instrument_type: i32,
    #[prost(message, optional, tag = "3")]
    pub tenor: Option<Period>,
    #[prost(double, tag = "4")]
    pub quote: f64,
    #[prost(enumeration = "crate::datetime::InstrumentStartConvention", tag = "5")]
    pub start_convention: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct IrParRateCurve {
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
pub struct IrYieldCurve {
    #[prost(enumeration = "IrYieldCurveType", tag = "1")]
    pub curve_type: i32,
    #[prost(message, optional, tag = "2")]
    pub reference_date: Option<Date>,
    #[prost(string, tag = "3")]
    pub currency: String,
    #[prost(message, repeated, tag = "4")]
    pub term_dates: Vec<Date>,
    #[prost(message, optional, tag = "5")]
    pub zero_rates: Option<Vector>,
    #[prost(enumeration = "crate::datetime::DayCountConvention", tag = "6")]
    pub day_count_convention: i32,
    #[prost(enumeration = "crate::numerics::InterpMethod", tag = "7")]
    pub interp_method: i32,
    #[prost(enumeration = "crate::numerics::ExtrapMethod", tag = "8")]
    pub extrap_method: i32,
    #[prost(enumeration = "crate::numerics::CompoundingType", tag = "9")]
    pub compounding_type: i32,
    #[prost(enumeration = "crate::datetime::Frequency", tag = "10")]
    pub frequency: i32,
    #[prost(string, tag = "11")]
    pub name: String,
}

/// A bootstrapped survival curve: hazard rates over term dates.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreditCurve {
    #[prost(message, optional, tag = "1")]
    pub reference_date: Option<Date>,
    #[prost(message, repeated, tag = "2")]
    pub term_dates: Vec<Date>,
    #[prost(message, optional, tag = "3")]
    pub hazard_rates: Option<Vector>,
    #[prost(enumeration = "crate::numerics::InterpMethod", tag = "4")]
    pub interp_method: i32,
    #[prost(enumeration = "crate::numerics::ExtrapMethod", tag = "5")]
    pub extrap_method: i32,
    #[prost(string, tag = "6")]
    pub name: String,
}

// --- Volatility surfaces ----------------------------------------------------

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct VolatilitySurfaceDefinition {
    #[prost(enumeration = "SmileMethod", tag = "1")]
    pub smile_method: i32,
    #[prost(enumeration = "WingStrikeType", tag = "2")]
    pub wing_strike_type: i32,
    #[prost(double, tag = "3")]
    pub lower_bound: f64,
    #[prost(double, tag = "4")]
    pub upper_bound: f64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct VolatilitySmile {
    #[prost(message, optional, tag = "1")]
    pub term_date: Option<Date>,
    #[prost(message, optional, tag = "2")]
    pub strikes: Option<Vector>,
    #[prost(message, optional, tag = "3")]
    pub vols: Option<Vector>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct VolatilitySurface {
    #[prost(message, optional, tag = "1")]
    pub definition: Option<VolatilitySurfaceDefinition>,
    #[prost(message, optional, tag = "2")]
    pub reference_date: Option<Date>,
    #[prost(message, repeated, tag = "3")]
    pub smiles: Vec<VolatilitySmile>,
    #[prost(string, tag = "4")]
    pub underlying: String,
    #[prost(string, tag = "5")]
    pub name: String,
}

// --- Pricing settings -------------------------------------------------------

/// Model choice plus flat model parameters. The meaning of the constant
/// parameters is model and product specific.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PricingModelSettings {
    #[prost(enumeration = "PricingModelName", tag = "1")]
    pub model_name: i32,
    #[prost(message, optional, tag = "2")]
    pub constant_params: Option<Vector>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PdeSettings {
    #[prost(int32, tag = "1")]
    pub t_size: i32,
    #[prost(int32, tag = "2")]
    pub x_size: i32,
    #[prost(double, tag = "3")]
    pub x_min: f64,
    #[prost(double, tag = "4")]
    pub x_max: f64,
    #[prost(enumeration = "MinMaxType", tag = "5")]
    pub x_min_max_type: i32,
    #[prost(double, tag = "6")]
    pub x_density: f64,
    #[prost(enumeration = "GridType", tag = "7")]
    pub x_grid_type: i32,
    #[prost(enumeration = "crate::numerics::InterpMethod", tag = "8")]
    pub x_interp_method: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MonteCarloSettings {
    #[prost(int32, tag = "1")]
    pub num_simulations: i32,
    #[prost(enumeration = "UniformNumberType", tag = "2")]
    pub uniform_number_type: i32,
    #[prost(int32, tag = "3")]
    pub seed: i32,
    #[prost(enumeration = "WienerProcessBuildMethod", tag = "4")]
    pub wiener_process_build_method: i32,
    #[prost(enumeration = "GaussianNumberMethod", tag = "5")]
    pub gaussian_number_method: i32,
    #[prost(bool, tag = "6")]
    pub use_antithetic: bool,
    #[prost(int32, tag = "7")]
    pub num_steps: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PricingSettings {
    #[prost(string, tag = "1")]
    pub pricing_currency: String,
    #[prost(bool, tag = "2")]
    pub include_current_flow: bool,
    #[prost(message, optional, tag = "3")]
    pub model_settings: Option<PricingModelSettings>,
    #[prost(enumeration = "PricingMethodName", tag = "4")]
    pub pricing_method: i32,
    #[prost(message, optional, tag = "5")]
    pub pde_settings: Option<PdeSettings>,
    #[prost(message, optional, tag = "6")]
    pub monte_carlo_settings: Option<MonteCarloSettings>,
    #[prost(bool, tag = "7")]
    pub cash_flows: bool,
}

// --- Risk settings ----------------------------------------------------------

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct IrCurveRiskSettings {
    #[prost(bool, tag = "1")]
    pub delta: bool,
    #[prost(bool, tag = "2")]
    pub gamma: bool,
    #[prost(bool, tag = "3")]
    pub curvature: bool,
    #[prost(double, tag = "4")]
    pub shift: f64,
    #[prost(double, tag = "5")]
    pub curvature_shift: f64,
    #[prost(enumeration = "FiniteDifferenceMethod", tag = "6")]
    pub method: i32,
    #[prost(enumeration = "RiskGranularity", tag = "7")]
    pub granularity: i32,
    #[prost(double, tag = "8")]
    pub scaling_factor: f64,
    #[prost(enumeration = "ThreadingMode", tag = "9")]
    pub threading_mode: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PriceRiskSettings {
    #[prost(bool, tag = "1")]
    pub delta: bool,
    #[prost(bool, tag = "2")]
    pub gamma: bool,
    #[prost(bool, tag = "3")]
    pub curvature: bool,
    #[prost(double, tag = "4")]
    pub shift: f64,
    #[prost(double, tag = "5")]
    pub curvature_shift: f64,
    #[prost(enumeration = "FiniteDifferenceMethod", tag = "6")]
    pub method: i32,
    #[prost(double, tag = "7")]
    pub scaling_factor: f64,
    #[prost(enumeration = "ThreadingMode", tag = "8")]
    pub threading_mode: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct VolRiskSettings {
    #[prost(bool, tag = "1")]
    pub vega: bool,
    #[prost(bool, tag = "2")]
    pub volga: bool,
    #[prost(double, tag = "3")]
    pub shift: f64,
    #[prost(enumeration = "FiniteDifferenceMethod", tag = "4")]
    pub method: i32,
    #[prost(enumeration = "RiskGranularity", tag = "5")]
    pub granularity: i32,
    #[prost(double, tag = "6")]
    pub scaling_factor: f64,
    #[prost(enumeration = "ThreadingMode", tag = "7")]
    pub threading_mode: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PriceVolRiskSettings {
    #[prost(bool, tag = "1")]
    pub vanna: bool,
    #[prost(double, tag = "2")]
    pub price_shift: f64,
    #[prost(double, tag = "3")]
    pub vol_shift: f64,
    #[prost(enumeration = "FiniteDifferenceMethod", tag = "4")]
    pub method: i32,
    #[prost(enumeration = "RiskGranularity", tag = "5")]
    pub granularity: i32,
    #[prost(double, tag = "6")]
    pub price_scaling_factor: f64,
    #[prost(double, tag = "7")]
    pub vol_scaling_factor: f64,
    #[prost(enumeration = "ThreadingMode", tag = "8")]
    pub threading_mode: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ThetaRiskSettings {
    #[prost(bool, tag = "1")]
    pub theta: bool,
    #[prost(int32, tag = "2")]
    pub shift: i32,
    #[prost(double, tag = "3")]
    pub scaling_factor: f64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DividendCurveRiskSettings {
    #[prost(bool, tag = "1")]
    pub delta: bool,
    #[prost(bool, tag = "2")]
    pub gamma: bool,
    #[prost(double, tag = "3")]
    pub shift: f64,
    #[prost(enumeration = "FiniteDifferenceMethod", tag = "4")]
    pub method: i32,
    #[prost(enumeration = "RiskGranularity", tag = "5")]
    pub granularity: i32,
    #[prost(double, tag = "6")]
    pub scaling_factor: f64,
    #[prost(enumeration = "ThreadingMode", tag = "7")]
    pub threading_mode: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreditCurveRiskSettings {
    #[prost(bool, tag = "1")]
    pub delta: bool,
    #[prost(bool, tag = "2")]
    pub gamma: bool,
    #[prost(double, tag = "3")]
    pub shift: f64,
    #[prost(enumeration = "FiniteDifferenceMethod", tag = "4")]
    pub method: i32,
    #[prost(enumeration = "RiskGranularity", tag = "5")]
    pub granularity: i32,
    #[prost(double, tag = "6")]
    pub scaling_factor: f64,
    #[prost(enumeration = "ThreadingMode", tag = "7")]
    pub threading_mode: i32,
}

// --- Results ----------------------------------------------------------------

/// One named risk block; bucketed results come back as a term-by-strike
/// matrix, total risk as a 1x1.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RiskRecord {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(message, repeated, tag = "2")]
    pub term_dates: Vec<Date>,
    #[prost(message, optional, tag = "3")]
    pub values: Option<Matrix>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PricingResults {
    #[prost(double, tag = "1")]
    pub present_value: f64,
    #[prost(string, tag = "2")]
    pub currency: String,
    #[prost(message, repeated, tag = "3")]
    pub cash_flows: Vec<crate::irmarket::CashFlow>,
    #[prost(message, repeated, tag = "4")]
    pub risk_records: Vec<RiskRecord>,
}

// --- Curve building ---------------------------------------------------------

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct IrYieldCurveBuildingInput {
    #[prost(message, optional, tag = "1")]
    pub reference_date: Option<Date>,
    #[prost(string, tag = "2")]
    pub target_curve_name: String,
    #[prost(message, optional, tag = "3")]
    pub par_curve: Option<IrParRateCurve>,
    #[prost(message, optional, tag = "4")]
    pub discount_curve: Option<IrYieldCurve>,
    #[prost(string, tag = "5")]
    pub building_method: String,
    #[prost(bool, tag = "6")]
    pub calc_jacobian: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct IrYieldCurveBuildingOutput {
    #[prost(bool, tag = "1")]
    pub success: bool,
    #[prost(string, tag = "2")]
    pub err_msg: String,
    #[prost(message, optional, tag = "3")]
    pub ir_yield_curve: Option<IrYieldCurve>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message;

    #[test]
    fn zero_curve_wire_bytes_are_stable() {
        let curve = IrYieldCurve {
            curve_type: IrYieldCurveType::ZeroRateCurve as i32,
            reference_date: Some(Date { year: 2022, month: 3, day: 9 }),
            currency: "CNY".into(),
            term_dates: vec![
                Date { year: 2022, month: 6, day: 9 },
                Date { year: 2023, month: 3, day: 9 },
            ],
            zero_rates: Some(Vector::from_values(&[0.02, 0.025])),
            day_count_convention: crate::datetime::DayCountConvention::Act365Fixed as i32,
            interp_method: crate::numerics::InterpMethod::LinearInterp as i32,
            extrap_method: crate::numerics::ExtrapMethod::FlatExtrap as i32,
            compounding_type: crate::numerics::CompoundingType::ContinuousCompounding as i32,
            frequency: crate::datetime::Frequency::Annual as i32,
            name: "CNY_SHIBOR_3M".into(),
        };
        let expected: &[u8] = b"\x08\x01\x12\x07\x08\xe6\x0f\x10\x03\x18\t\x1a\x03CNY\"\x07\x08\xe6\x0f\x10\x06\x18\t\"\x07\x08\xe7\x0f\x10\x03\x18\t*\x12\n\x10{\x14\xaeG\xe1z\x94?\x9a\x99\x99\x99\x99\x99\x99?0\x028\x01@\x01H\x03P\x01Z\rCNY_SHIBOR_3M";
        assert_eq!(curve.encode_to_vec(), expected);
    }

    #[test]
    fn pricing_results_round_trip() {
        let results = PricingResults {
            present_value: 1234.5,
            currency: "CNY".into(),
            cash_flows: Vec::new(),
            risk_records: vec![RiskRecord {
                name: "DELTA".into(),
                term_dates: vec![Date { year: 2023, month: 3, day: 9 }],
                values: Some(Matrix::column(&[0.5])),
            }],
        };
        let decoded = PricingResults::decode(results.encode_to_vec().as_slice()).unwrap();
        assert_eq!(decoded, results);
    }

    #[test]
    fn default_settings_encode_empty() {
        assert!(PricingSettings::default().encode_to_vec().is_empty());
        assert!(IrCurveRiskSettings::default().encode_to_vec().is_empty());
    }
}

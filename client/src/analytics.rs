// Shared analytics vocabulary: curves, pricing settings, risk settings and
// the yield curve bootstrap operation.
use dqproto::analytics::{
    CreditCurveRiskSettings, DividendCurveRiskSettings, FiniteDifferenceMethod,
    GaussianNumberMethod, GridType, IrCurveRiskSettings, IrParRateCurve,
    IrYieldCurve, IrYieldCurveBuildingInput, IrYieldCurveBuildingOutput, IrYieldCurveType,
    MinMaxType, MonteCarloSettings, ParCurvePillar, PdeSettings, PriceRiskSettings,
    PriceVolRiskSettings, PricingMethodName, PricingModelName, PricingModelSettings,
    PricingSettings, RiskGranularity, SmileMethod, ThetaRiskSettings, ThreadingMode,
    UniformNumberType, VolRiskSettings, VolatilitySurfaceDefinition, WienerProcessBuildMethod,
    WingStrikeType,
};
use dqproto::datetime::{Date, DayCountConvention, Frequency};
use dqproto::numerics::{CompoundingType, ExtrapMethod, InterpMethod, Vector};

use crate::client::AnalyticsClient;
use crate::datetime::{parse_period, to_instrument_start_convention};
use crate::error::{DqError, Result};
use crate::market::to_instrument_type;
use crate::transport::Engine;

fn normalized(text: &str) -> String {
    text.trim().to_uppercase()
}

pub fn to_interp_method(text: &str) -> Result<InterpMethod> {
    InterpMethod::from_str_name(&normalized(text))
        .ok_or_else(|| DqError::unknown_name("interpolation method", text))
}

pub fn to_extrap_method(text: &str) -> Result<ExtrapMethod> {
    ExtrapMethod::from_str_name(&normalized(text))
        .ok_or_else(|| DqError::unknown_name("extrapolation method", text))
}

pub fn to_compounding_type(text: &str) -> Result<CompoundingType> {
    CompoundingType::from_str_name(&normalized(text))
        .ok_or_else(|| DqError::unknown_name("compounding type", text))
}

pub fn to_ir_yield_curve_type(text: &str) -> Result<IrYieldCurveType> {
    IrYieldCurveType::from_str_name(&normalized(text))
        .ok_or_else(|| DqError::unknown_name("yield curve type", text))
}

pub fn to_smile_method(text: &str) -> Result<SmileMethod> {
    SmileMethod::from_str_name(&normalized(text))
        .ok_or_else(|| DqError::unknown_name("smile method", text))
}

pub fn to_wing_strike_type(text: &str) -> Result<WingStrikeType> {
    WingStrikeType::from_str_name(&normalized(text))
        .ok_or_else(|| DqError::unknown_name("wing strike type", text))
}

pub fn to_pricing_model_name(text: &str) -> Result<PricingModelName> {
    PricingModelName::from_str_name(&normalized(text))
        .ok_or_else(|| DqError::unknown_name("pricing model", text))
}

pub fn to_pricing_method_name(text: &str) -> Result<PricingMethodName> {
    PricingMethodName::from_str_name(&normalized(text))
        .ok_or_else(|| DqError::unknown_name("pricing method", text))
}

pub fn to_min_max_type(text: &str) -> Result<MinMaxType> {
    MinMaxType::from_str_name(&normalized(text))
        .ok_or_else(|| DqError::unknown_name("min/max type", text))
}

pub fn to_grid_type(text: &str) -> Result<GridType> {
    GridType::from_str_name(&normalized(text))
        .ok_or_else(|| DqError::unknown_name("grid type", text))
}

pub fn to_uniform_number_type(text: &str) -> Result<UniformNumberType> {
    UniformNumberType::from_str_name(&normalized(text))
        .ok_or_else(|| DqError::unknown_name("uniform number type", text))
}

pub fn to_wiener_process_build_method(text: &str) -> Result<WienerProcessBuildMethod> {
    WienerProcessBuildMethod::from_str_name(&normalized(text))
        .ok_or_else(|| DqError::unknown_name("wiener process build method", text))
}

pub fn to_gaussian_number_method(text: &str) -> Result<GaussianNumberMethod> {
    GaussianNumberMethod::from_str_name(&normalized(text))
        .ok_or_else(|| DqError::unknown_name("gaussian number method", text))
}

pub fn to_finite_difference_method(text: &str) -> Result<FiniteDifferenceMethod> {
    FiniteDifferenceMethod::from_str_name(&normalized(text))
        .ok_or_else(|| DqError::unknown_name("finite difference method", text))
}

pub fn to_risk_granularity(text: &str) -> Result<RiskGranularity> {
    RiskGranularity::from_str_name(&normalized(text))
        .ok_or_else(|| DqError::unknown_name("risk granularity", text))
}

pub fn to_threading_mode(text: &str) -> Result<ThreadingMode> {
    ThreadingMode::from_str_name(&normalized(text))
        .ok_or_else(|| DqError::unknown_name("threading mode", text))
}

// --- Curves -----------------------------------------------------------------

/// Assembles a zero rate curve from already-known term dates and rates, e.g.
/// when replaying a curve the engine built earlier.
#[allow(clippy::too_many_arguments)]
pub fn create_ir_yield_curve(
    as_of_date: Date,
    currency: &str,
    term_dates: Vec<Date>,
    zero_rates: &[f64],
    day_count: &str,
    interp_method: &str,
    extrap_method: &str,
    compounding_type: &str,
    frequency: &str,
    name: &str,
) -> Result<IrYieldCurve> {
    if term_dates.len() != zero_rates.len() {
        return Err(DqError::InvalidInput(format!(
            "curve '{}' has {} term dates but {} zero rates",
            name,
            term_dates.len(),
            zero_rates.len()
        )));
    }
    Ok(IrYieldCurve {
        curve_type: IrYieldCurveType::ZeroRateCurve as i32,
        reference_date: Some(as_of_date),
        currency: currency.trim().to_uppercase(),
        term_dates,
        zero_rates: Some(Vector::from_values(zero_rates)),
        day_count_convention: DayCountConvention::from_str_name(&normalized(day_count))
            .ok_or_else(|| DqError::unknown_name("day count convention", day_count))?
            as i32,
        interp_method: to_interp_method(interp_method)? as i32,
        extrap_method: to_extrap_method(extrap_method)? as i32,
        compounding_type: to_compounding_type(compounding_type)? as i32,
        frequency: Frequency::from_str_name(&normalized(frequency))
            .ok_or_else(|| DqError::unknown_name("frequency", frequency))? as i32,
        name: name.trim().to_uppercase(),
    })
}

/// One bootstrap pillar: `(instrument name, instrument type, tenor, quote)`
/// plus the start convention.
pub fn create_par_curve_pillar(
    instrument_name: &str,
    instrument_type: &str,
    tenor: &str,
    quote: f64,
    start_convention: &str,
) -> Result<ParCurvePillar> {
    Ok(ParCurvePillar {
        instrument_name: instrument_name.trim().to_uppercase(),
        instrument_type: to_instrument_type(instrument_type)? as i32,
        tenor: Some(parse_period(tenor)?),
        quote,
        start_convention: to_instrument_start_convention(start_convention)? as i32,
    })
}

pub fn create_ir_par_rate_curve(
    as_of_date: Date,
    currency: &str,
    name: &str,
    pillars: Vec<ParCurvePillar>,
) -> IrParRateCurve {
    IrParRateCurve {
        reference_date: Some(as_of_date),
        currency: currency.trim().to_uppercase(),
        pillars,
        name: name.trim().to_uppercase(),
    }
}

pub fn create_volatility_surface_definition(
    smile_method: &str,
    wing_strike_type: &str,
    lower_bound: f64,
    upper_bound: f64,
) -> Result<VolatilitySurfaceDefinition> {
    Ok(VolatilitySurfaceDefinition {
        smile_method: to_smile_method(smile_method)? as i32,
        wing_strike_type: to_wing_strike_type(wing_strike_type)? as i32,
        lower_bound,
        upper_bound,
    })
}

// --- Pricing settings -------------------------------------------------------

pub fn create_model_settings(
    model_name: &str,
    constant_params: &[f64],
) -> Result<PricingModelSettings> {
    Ok(PricingModelSettings {
        model_name: to_pricing_model_name(model_name)? as i32,
        constant_params: Some(Vector::from_values(constant_params)),
    })
}

#[allow(clippy::too_many_arguments)]
pub fn create_pde_settings(
    t_size: i32,
    x_size: i32,
    x_min: f64,
    x_max: f64,
    x_min_max_type: &str,
    x_density: f64,
    x_grid_type: &str,
    x_interp_method: &str,
) -> Result<PdeSettings> {
    Ok(PdeSettings {
        t_size,
        x_size,
        x_min,
        x_max,
        x_min_max_type: to_min_max_type(x_min_max_type)? as i32,
        x_density,
        x_grid_type: to_grid_type(x_grid_type)? as i32,
        x_interp_method: to_interp_method(x_interp_method)? as i32,
    })
}

pub fn create_monte_carlo_settings(
    num_simulations: i32,
    uniform_number_type: &str,
    seed: i32,
    wiener_process_build_method: &str,
    gaussian_number_method: &str,
    use_antithetic: bool,
    num_steps: i32,
) -> Result<MonteCarloSettings> {
    Ok(MonteCarloSettings {
        num_simulations,
        uniform_number_type: to_uniform_number_type(uniform_number_type)? as i32,
        seed,
        wiener_process_build_method: to_wiener_process_build_method(
            wiener_process_build_method,
        )? as i32,
        gaussian_number_method: to_gaussian_number_method(gaussian_number_method)? as i32,
        use_antithetic,
        num_steps,
    })
}

#[allow(clippy::too_many_arguments)]
pub fn create_pricing_settings(
    pricing_currency: &str,
    include_current_flow: bool,
    model_settings: PricingModelSettings,
    pricing_method: &str,
    pde_settings: Option<PdeSettings>,
    monte_carlo_settings: Option<MonteCarloSettings>,
    cash_flows: bool,
) -> Result<PricingSettings> {
    Ok(PricingSettings {
        pricing_currency: pricing_currency.trim().to_uppercase(),
        include_current_flow,
        model_settings: Some(model_settings),
        pricing_method: to_pricing_method_name(pricing_method)? as i32,
        pde_settings,
        monte_carlo_settings,
        cash_flows,
    })
}

/// Pricing settings for products whose value does not depend on a model
/// choice. The engine still expects a model settings block; it travels empty.
pub fn create_model_free_pricing_settings(
    pricing_currency: &str,
    include_current_flow: bool,
    cash_flows: bool,
) -> PricingSettings {
    PricingSettings {
        pricing_currency: pricing_currency.trim().to_uppercase(),
        include_current_flow,
        model_settings: Some(PricingModelSettings::default()),
        pricing_method: PricingMethodName::Analytical as i32,
        pde_settings: None,
        monte_carlo_settings: None,
        cash_flows,
    }
}

// --- Risk settings ----------------------------------------------------------

#[allow(clippy::too_many_arguments)]
pub fn create_ir_curve_risk_settings(
    delta: bool,
    gamma: bool,
    curvature: bool,
    shift: f64,
    curvature_shift: f64,
    method: &str,
    granularity: &str,
    scaling_factor: f64,
    threading_mode: &str,
) -> Result<IrCurveRiskSettings> {
    Ok(IrCurveRiskSettings {
        delta,
        gamma,
        curvature,
        shift,
        curvature_shift,
        method: to_finite_difference_method(method)? as i32,
        granularity: to_risk_granularity(granularity)? as i32,
        scaling_factor,
        threading_mode: to_threading_mode(threading_mode)? as i32,
    })
}

#[allow(clippy::too_many_arguments)]
pub fn create_price_risk_settings(
    delta: bool,
    gamma: bool,
    curvature: bool,
    shift: f64,
    curvature_shift: f64,
    method: &str,
    scaling_factor: f64,
    threading_mode: &str,
) -> Result<PriceRiskSettings> {
    Ok(PriceRiskSettings {
        delta,
        gamma,
        curvature,
        shift,
        curvature_shift,
        method: to_finite_difference_method(method)? as i32,
        scaling_factor,
        threading_mode: to_threading_mode(threading_mode)? as i32,
    })
}

pub fn create_vol_risk_settings(
    vega: bool,
    volga: bool,
    shift: f64,
    method: &str,
    granularity: &str,
    scaling_factor: f64,
    threading_mode: &str,
) -> Result<VolRiskSettings> {
    Ok(VolRiskSettings {
        vega,
        volga,
        shift,
        method: to_finite_difference_method(method)? as i32,
        granularity: to_risk_granularity(granularity)? as i32,
        scaling_factor,
        threading_mode: to_threading_mode(threading_mode)? as i32,
    })
}

#[allow(clippy::too_many_arguments)]
pub fn create_price_vol_risk_settings(
    vanna: bool,
    price_shift: f64,
    vol_shift: f64,
    method: &str,
    granularity: &str,
    price_scaling_factor: f64,
    vol_scaling_factor: f64,
    threading_mode: &str,
) -> Result<PriceVolRiskSettings> {
    Ok(PriceVolRiskSettings {
        vanna,
        price_shift,
        vol_shift,
        method: to_finite_difference_method(method)? as i32,
        granularity: to_risk_granularity(granularity)? as i32,
        price_scaling_factor,
        vol_scaling_factor,
        threading_mode: to_threading_mode(threading_mode)? as i32,
    })
}

pub fn create_dividend_curve_risk_settings(
    delta: bool,
    gamma: bool,
    shift: f64,
    method: &str,
    granularity: &str,
    scaling_factor: f64,
    threading_mode: &str,
) -> Result<DividendCurveRiskSettings> {
    Ok(DividendCurveRiskSettings {
        delta,
        gamma,
        shift,
        method: to_finite_difference_method(method)? as i32,
        granularity: to_risk_granularity(granularity)? as i32,
        scaling_factor,
        threading_mode: to_threading_mode(threading_mode)? as i32,
    })
}

pub fn create_credit_curve_risk_settings(
    delta: bool,
    gamma: bool,
    shift: f64,
    method: &str,
    granularity: &str,
    scaling_factor: f64,
    threading_mode: &str,
) -> Result<CreditCurveRiskSettings> {
    Ok(CreditCurveRiskSettings {
        delta,
        gamma,
        shift,
        method: to_finite_difference_method(method)? as i32,
        granularity: to_risk_granularity(granularity)? as i32,
        scaling_factor,
        threading_mode: to_threading_mode(threading_mode)? as i32,
    })
}

pub fn create_theta_risk_settings(theta: bool, shift: i32, scaling_factor: f64) -> ThetaRiskSettings {
    ThetaRiskSettings {
        theta,
        shift,
        scaling_factor,
    }
}

// --- Engine operations ------------------------------------------------------

impl<E: Engine> AnalyticsClient<E> {
    /// Bootstraps a yield curve from par instrument quotes.
    pub async fn ir_yield_curve_builder(
        &self,
        reference_date: Date,
        target_curve_name: &str,
        par_curve: IrParRateCurve,
        discount_curve: Option<IrYieldCurve>,
        building_method: &str,
        calc_jacobian: bool,
    ) -> Result<IrYieldCurve> {
        let input = IrYieldCurveBuildingInput {
            reference_date: Some(reference_date),
            target_curve_name: target_curve_name.trim().to_uppercase(),
            par_curve: Some(par_curve),
            discount_curve,
            building_method: building_method.trim().to_uppercase(),
            calc_jacobian,
        };
        let output: IrYieldCurveBuildingOutput =
            self.call("IR_YIELD_CURVE_BUILDER", &input).await?;
        output.ir_yield_curve.ok_or_else(|| {
            DqError::EngineError("IR_YIELD_CURVE_BUILDER returned no curve".into())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datetime::make_date;
    use prost::Message;

    #[test]
    fn zero_curve_builder_bytes_are_stable() {
        let curve = create_ir_yield_curve(
            make_date(2022, 3, 9),
            "cny",
            vec![make_date(2022, 6, 9), make_date(2023, 3, 9)],
            &[0.02, 0.025],
            "ACT_365_FIXED",
            "LINEAR_INTERP",
            "FLAT_EXTRAP",
            "CONTINUOUS_COMPOUNDING",
            "ANNUAL",
            "cny_shibor_3m",
        )
        .unwrap();
        let expected: &[u8] = b"\x08\x01\x12\x07\x08\xe6\x0f\x10\x03\x18\t\x1a\x03CNY\"\x07\x08\xe6\x0f\x10\x06\x18\t\"\x07\x08\xe7\x0f\x10\x03\x18\t*\x12\n\x10{\x14\xaeG\xe1z\x94?\x9a\x99\x99\x99\x99\x99\x99?0\x028\x01@\x01H\x03P\x01Z\rCNY_SHIBOR_3M";
        assert_eq!(curve.encode_to_vec(), expected);
    }

    #[test]
    fn curve_rejects_mismatched_pillars() {
        assert!(create_ir_yield_curve(
            make_date(2022, 3, 9),
            "CNY",
            vec![make_date(2022, 6, 9)],
            &[0.02, 0.025],
            "ACT_365_FIXED",
            "LINEAR_INTERP",
            "FLAT_EXTRAP",
            "CONTINUOUS_COMPOUNDING",
            "ANNUAL",
            "X",
        )
        .is_err());
    }

    #[test]
    fn pde_settings_accept_engine_names() {
        let settings = create_pde_settings(
            201,
            401,
            -5.0,
            5.0,
            "MMT_NUM_STDEVS",
            0.001,
            "ADAPTIVE_GRID",
            "CUBIC_SPLINE_INTERP",
        )
        .unwrap();
        assert_eq!(settings.x_grid_type, GridType::AdaptiveGrid as i32);
        assert_eq!(
            settings.x_interp_method,
            InterpMethod::CubicSplineInterp as i32
        );
    }

    #[test]
    fn monte_carlo_settings_accept_engine_names() {
        let settings = create_monte_carlo_settings(
            8096,
            "SOBOL_NUMBER",
            1023,
            "BROWNIAN_BRIDGE_METHOD",
            "INVERSE_CUMULATIVE_METHOD",
            false,
            1,
        )
        .unwrap();
        assert_eq!(
            settings.uniform_number_type,
            UniformNumberType::SobolNumber as i32
        );
        assert!(!settings.use_antithetic);
    }

    #[test]
    fn unknown_model_is_rejected() {
        assert!(create_model_settings("SABR", &[]).is_err());
    }
}

// Credit: par curve registration, survival curve bootstrap and CDS pricing.
use dqproto::analytics::{
    CreditCurve, CreditCurveRiskSettings, IrCurveRiskSettings, IrYieldCurve, ParCurvePillar,
    PricingModelSettings, PricingResults, PricingSettings, ThetaRiskSettings,
};
use dqproto::credit::{
    AccrualBias, CrMktDataSet, CrRiskSettings, CreateCreditParCurveInput,
    CreateCreditParCurveOutput, CreditCurveBuildingInput, CreditCurveBuildingOutput,
    CreditDefaultSwap, CreditDefaultSwapPricingInput, CreditDefaultSwapPricingOutput,
    CreditParCurve, ForwardsInCouponPeriod, NumericalFix,
};
use dqproto::datetime::Date;
use dqproto::numerics::Vector;

use crate::analytics::to_pricing_method_name;
use crate::client::AnalyticsClient;
use crate::datetime::{to_day_count_convention, to_frequency};
use crate::error::{DqError, Result};
use crate::transport::Engine;

fn is_unset(text: &str) -> bool {
    let trimmed = text.trim();
    trimmed.is_empty() || trimmed.eq_ignore_ascii_case("nan")
}

/// Empty input means the engine default, `NONE_FIX`.
pub fn to_numerical_fix(text: &str) -> Result<NumericalFix> {
    if is_unset(text) {
        return Ok(NumericalFix::NoneFix);
    }
    NumericalFix::from_str_name(&text.trim().to_uppercase())
        .ok_or_else(|| DqError::unknown_name("numerical fix", text))
}

/// Empty input means the engine default, `HALFDAYBIAS`.
pub fn to_accrual_bias(text: &str) -> Result<AccrualBias> {
    if is_unset(text) {
        return Ok(AccrualBias::Halfdaybias);
    }
    AccrualBias::from_str_name(&text.trim().to_uppercase())
        .ok_or_else(|| DqError::unknown_name("accrual bias", text))
}

/// Empty input means the engine default, `FLAT`.
pub fn to_forwards_in_coupon_period(text: &str) -> Result<ForwardsInCouponPeriod> {
    if is_unset(text) {
        return Ok(ForwardsInCouponPeriod::Flat);
    }
    ForwardsInCouponPeriod::from_str_name(&text.trim().to_uppercase())
        .ok_or_else(|| DqError::unknown_name("forwards in coupon period", text))
}

/// CDS pricing settings. The ISDA-model switches travel as flat model
/// parameters in the order the engine expects: include current flow,
/// numerical fix, accrual bias, forwards in coupon period.
pub fn create_cds_pricing_settings(
    pricing_currency: &str,
    include_current_flow: bool,
    cash_flows: bool,
    numerical_fix: &str,
    accrual_bias: &str,
    fwds_in_cpn_period: &str,
) -> Result<PricingSettings> {
    let params = [
        f64::from(include_current_flow as i32),
        f64::from(to_numerical_fix(numerical_fix)? as i32),
        f64::from(to_accrual_bias(accrual_bias)? as i32),
        f64::from(to_forwards_in_coupon_period(fwds_in_cpn_period)? as i32),
    ];
    Ok(PricingSettings {
        pricing_currency: pricing_currency.trim().to_uppercase(),
        include_current_flow,
        model_settings: Some(PricingModelSettings {
            model_name: 0,
            constant_params: Some(Vector::from_values(&params)),
        }),
        pricing_method: to_pricing_method_name("ANALYTICAL")? as i32,
        pde_settings: None,
        monte_carlo_settings: None,
        cash_flows,
    })
}

pub fn create_cr_risk_settings(
    ir_curve_settings: IrCurveRiskSettings,
    cs_curve_settings: CreditCurveRiskSettings,
    theta_settings: ThetaRiskSettings,
) -> CrRiskSettings {
    CrRiskSettings {
        ir_curve_settings: Some(ir_curve_settings),
        theta_settings: Some(theta_settings),
        cs_curve_settings: Some(cs_curve_settings),
    }
}

pub fn create_cr_mkt_data_set(
    as_of_date: Date,
    discount_curve: IrYieldCurve,
    credit_curve: CreditCurve,
) -> CrMktDataSet {
    CrMktDataSet {
        as_of_date: Some(as_of_date),
        discount_curve: Some(discount_curve),
        credit_curve: Some(credit_curve),
    }
}

#[allow(clippy::too_many_arguments)]
pub fn create_credit_default_swap(
    start_date: Date,
    maturity_date: Date,
    reference_entity: &str,
    currency: &str,
    nominal: f64,
    coupon_rate: f64,
    day_count: &str,
    payment_frequency: &str,
    calendars: &[&str],
    settlement_days: i32,
) -> Result<CreditDefaultSwap> {
    Ok(CreditDefaultSwap {
        start_date: Some(start_date),
        maturity_date: Some(maturity_date),
        reference_entity: reference_entity.trim().to_uppercase(),
        currency: currency.trim().to_uppercase(),
        nominal,
        coupon_rate,
        day_count_convention: to_day_count_convention(day_count)? as i32,
        payment_frequency: to_frequency(payment_frequency)? as i32,
        calendars: calendars.iter().map(|c| c.to_string()).collect(),
        settlement_days,
    })
}

// --- Engine operations ------------------------------------------------------

impl<E: Engine> AnalyticsClient<E> {
    /// Registers a credit par curve with the engine and returns the stored
    /// form.
    pub async fn create_credit_par_curve(
        &self,
        reference_date: Date,
        currency: &str,
        pillars: Vec<ParCurvePillar>,
        curve_name: &str,
    ) -> Result<CreditParCurve> {
        let input = CreateCreditParCurveInput {
            reference_date: Some(reference_date),
            currency: currency.trim().to_uppercase(),
            pillars,
            curve_name: curve_name.trim().to_uppercase(),
        };
        let output: CreateCreditParCurveOutput =
            self.call("CREATE_CREDIT_PAR_CURVE", &input).await?;
        output.par_curve.ok_or_else(|| {
            DqError::EngineError("CREATE_CREDIT_PAR_CURVE returned no curve".into())
        })
    }

    /// Bootstraps a survival curve from CDS par spreads.
    pub async fn credit_curve_builder(
        &self,
        reference_date: Date,
        curve_name: &str,
        par_curve: CreditParCurve,
        discount_curve: IrYieldCurve,
        building_method: &str,
    ) -> Result<CreditCurve> {
        let input = CreditCurveBuildingInput {
            par_curve: Some(par_curve),
            curve_name: curve_name.trim().to_uppercase(),
            reference_date: Some(reference_date),
            discount_curve: Some(discount_curve),
            building_method: building_method.trim().to_uppercase(),
        };
        let output: CreditCurveBuildingOutput =
            self.call("CREDIT_CURVE_BUILDER", &input).await?;
        output
            .credit_curve
            .ok_or_else(|| DqError::EngineError("CREDIT_CURVE_BUILDER returned no curve".into()))
    }

    pub async fn credit_default_swap_pricer(
        &self,
        pricing_date: Date,
        instrument: CreditDefaultSwap,
        mkt_data_set: CrMktDataSet,
        pricing_settings: PricingSettings,
        risk_settings: CrRiskSettings,
    ) -> Result<PricingResults> {
        let input = CreditDefaultSwapPricingInput {
            pricing_date: Some(pricing_date),
            instrument: Some(instrument),
            mkt_data_set: Some(mkt_data_set),
            pricing_settings: Some(pricing_settings),
            risk_settings: Some(risk_settings),
            use_scenario: false,
            scenario_tag: String::new(),
            portfolio_tag: String::new(),
            trade_tag: String::new(),
            request_tag: String::new(),
        };
        let output: CreditDefaultSwapPricingOutput =
            self.call("CREDIT_DEFAULT_SWAP_PRICER", &input).await?;
        output.results.ok_or_else(|| {
            DqError::EngineError("CREDIT_DEFAULT_SWAP_PRICER returned no results".into())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_strings_fall_back_to_engine_defaults() {
        assert_eq!(to_numerical_fix("").unwrap(), NumericalFix::NoneFix);
        assert_eq!(to_numerical_fix("nan").unwrap(), NumericalFix::NoneFix);
        assert_eq!(to_accrual_bias(" ").unwrap(), AccrualBias::Halfdaybias);
        assert_eq!(
            to_forwards_in_coupon_period("").unwrap(),
            ForwardsInCouponPeriod::Flat
        );
    }

    #[test]
    fn explicit_names_still_parse() {
        assert_eq!(to_numerical_fix("TAYLOR_FIX").unwrap(), NumericalFix::TaylorFix);
        assert_eq!(to_accrual_bias("nobias").unwrap(), AccrualBias::Nobias);
        assert!(to_numerical_fix("SOME_FIX").is_err());
    }

    #[test]
    fn cds_settings_pack_model_switches() {
        let settings =
            create_cds_pricing_settings("CNY", true, false, "TAYLOR_FIX", "NOBIAS", "FLAT")
                .unwrap();
        let params = settings
            .model_settings
            .unwrap()
            .constant_params
            .unwrap()
            .to_values();
        assert_eq!(params, vec![1.0, 1.0, 1.0, 0.0]);
    }
}

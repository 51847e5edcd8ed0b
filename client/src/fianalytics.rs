// Fixed income: bond yield curve building and vanilla bond pricing.
use dqproto::analytics::{
    CreditCurve, CreditCurveRiskSettings, IrCurveRiskSettings, IrYieldCurve, PricingResults,
    ThetaRiskSettings,
};
use dqproto::datetime::Date;
use dqproto::fi::{
    bond_par_curve, BondParCurve, BondPricingMethod, BondQuoteType,
    BondSpecificPricingRequest, BondYieldCurveBuildSettings, BondYieldCurveBuildSettingsContainer,
    BuildBondYieldCurveInput, BuildBondYieldCurveOutput, FiMktDataSet, FiRiskSettings,
    VanillaBond, VanillaBondPricingInput, VanillaBondPricingOutput,
};

use crate::analytics::{
    to_compounding_type, to_extrap_method, to_interp_method, to_ir_yield_curve_type,
};
use crate::client::AnalyticsClient;
use crate::datetime::{to_day_count_convention, to_frequency};
use crate::error::{DqError, Result};
use crate::transport::Engine;

pub fn to_bond_quote_type(text: &str) -> Result<BondQuoteType> {
    BondQuoteType::from_str_name(&text.trim().to_uppercase())
        .ok_or_else(|| DqError::unknown_name("bond quote type", text))
}

/// Accepts either the full contract name (`CFETS_BOND_PRICING_METHOD`) or
/// the bare mnemonic (`CFETS`).
pub fn to_bond_pricing_method(text: &str) -> Result<BondPricingMethod> {
    let mut name = text.trim().to_uppercase();
    if !name.ends_with("_BOND_PRICING_METHOD") {
        name.push_str("_BOND_PRICING_METHOD");
    }
    BondPricingMethod::from_str_name(&name)
        .ok_or_else(|| DqError::unknown_name("bond pricing method", text))
}

pub fn to_bond_specific_pricing_request(text: &str) -> Result<BondSpecificPricingRequest> {
    BondSpecificPricingRequest::from_str_name(&text.trim().to_uppercase())
        .ok_or_else(|| DqError::unknown_name("bond pricing request", text))
}

pub fn create_bond_yield_curve_build_settings(
    curve_name: &str,
    curve_type: &str,
    interp_method: &str,
    extrap_method: &str,
) -> Result<BondYieldCurveBuildSettings> {
    Ok(BondYieldCurveBuildSettings {
        curve_name: curve_name.trim().to_uppercase(),
        curve_type: to_ir_yield_curve_type(curve_type)? as i32,
        interp_method: to_interp_method(interp_method)? as i32,
        extrap_method: to_extrap_method(extrap_method)? as i32,
    })
}

/// Bond par curve from `(instrument name, quote)` pairs, quoted uniformly.
pub fn create_bond_par_curve(
    reference_date: Date,
    currency: &str,
    pillars: &[(&str, f64)],
    quote_type: &str,
    name: &str,
) -> Result<BondParCurve> {
    Ok(BondParCurve {
        reference_date: Some(reference_date),
        currency: currency.trim().to_uppercase(),
        pillars: pillars
            .iter()
            .map(|(instrument_name, quote)| bond_par_curve::Pillar {
                instrument_name: instrument_name.trim().to_uppercase(),
                quote: *quote,
            })
            .collect(),
        quote_type: to_bond_quote_type(quote_type)? as i32,
        name: name.trim().to_uppercase(),
    })
}

pub fn create_bond_curve_build_settings_container(
    target_curve_name: &str,
    build_settings: BondYieldCurveBuildSettings,
    par_curve: BondParCurve,
    day_count: &str,
    compounding_type: &str,
    frequency: &str,
) -> Result<BondYieldCurveBuildSettingsContainer> {
    Ok(BondYieldCurveBuildSettingsContainer {
        target_curve_name: target_curve_name.trim().to_uppercase(),
        build_settings: Some(build_settings),
        par_curve: Some(par_curve),
        day_count_convention: to_day_count_convention(day_count)? as i32,
        compounding_type: to_compounding_type(compounding_type)? as i32,
        frequency: to_frequency(frequency)? as i32,
    })
}

#[allow(clippy::too_many_arguments)]
pub fn create_vanilla_bond(
    issue_date: Date,
    maturity_date: Date,
    coupon_rate: f64,
    currency: &str,
    day_count: &str,
    payment_frequency: &str,
    calendars: &[&str],
    nominal: f64,
    settlement_days: i32,
) -> Result<VanillaBond> {
    Ok(VanillaBond {
        issue_date: Some(issue_date),
        maturity_date: Some(maturity_date),
        coupon_rate,
        currency: currency.trim().to_uppercase(),
        day_count_convention: to_day_count_convention(day_count)? as i32,
        payment_frequency: to_frequency(payment_frequency)? as i32,
        calendars: calendars.iter().map(|c| c.to_string()).collect(),
        nominal,
        settlement_days,
    })
}

pub fn create_fi_mkt_data_set(
    as_of_date: Date,
    discount_curve: IrYieldCurve,
    spread_curve: Option<CreditCurve>,
    forward_curve: Option<IrYieldCurve>,
) -> FiMktDataSet {
    FiMktDataSet {
        as_of_date: Some(as_of_date),
        discount_curve: Some(discount_curve),
        spread_curve,
        forward_curve,
        underlying_discount_curve: None,
        underlying_income_curve: None,
    }
}

pub fn create_fi_risk_settings(
    ir_curve_settings: IrCurveRiskSettings,
    cs_curve_settings: CreditCurveRiskSettings,
    theta_settings: ThetaRiskSettings,
) -> FiRiskSettings {
    FiRiskSettings {
        ir_curve_settings: Some(ir_curve_settings),
        theta_settings: Some(theta_settings),
        cs_curve_settings: Some(cs_curve_settings),
    }
}

// --- Engine operations ------------------------------------------------------

impl<E: Engine> AnalyticsClient<E> {
    /// Bootstraps a bond yield curve from uniformly-quoted bond pillars.
    pub async fn bond_yield_curve_builder(
        &self,
        reference_date: Date,
        build_settings: BondYieldCurveBuildSettingsContainer,
        calc_jacobian: bool,
    ) -> Result<IrYieldCurve> {
        let input = BuildBondYieldCurveInput {
            reference_date: Some(reference_date),
            build_settings: Some(build_settings),
            calc_jacobian,
        };
        let output: BuildBondYieldCurveOutput =
            self.call("BOND_YIELD_CURVE_BUILDER", &input).await?;
        output.ir_yield_curve.ok_or_else(|| {
            DqError::EngineError("BOND_YIELD_CURVE_BUILDER returned no curve".into())
        })
    }

    /// Prices a vanilla bond from a single market quote, optionally asking
    /// for specific measures like durations or accrued interest.
    #[allow(clippy::too_many_arguments)]
    pub async fn vanilla_bond_pricer(
        &self,
        pricing_date: Date,
        instrument: VanillaBond,
        quote: f64,
        quote_type: &str,
        pricing_method: &str,
        mkt_data_set: FiMktDataSet,
        risk_settings: FiRiskSettings,
        specific_requests: &[&str],
    ) -> Result<PricingResults> {
        let mut requests = Vec::with_capacity(specific_requests.len());
        for request in specific_requests {
            requests.push(to_bond_specific_pricing_request(request)? as i32);
        }
        let input = VanillaBondPricingInput {
            pricing_date: Some(pricing_date),
            instrument: Some(instrument),
            quote,
            quote_type: to_bond_quote_type(quote_type)? as i32,
            pricing_method: to_bond_pricing_method(pricing_method)? as i32,
            mkt_data_set: Some(mkt_data_set),
            risk_settings: Some(risk_settings),
            specific_requests: requests,
        };
        let output: VanillaBondPricingOutput =
            self.call("VANILLA_BOND_PRICER", &input).await?;
        output
            .results
            .ok_or_else(|| DqError::EngineError("VANILLA_BOND_PRICER returned no results".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datetime::make_date;
    use prost::Message;

    #[test]
    fn bond_par_curve_bytes_are_stable() {
        let curve = create_bond_par_curve(
            make_date(2022, 3, 9),
            "cny",
            &[("cny_treas_1y", 0.021), ("cny_treas_5y", 0.0265)],
            "YIELD_TO_MATURITY",
            "cny_treas",
        )
        .unwrap();
        let expected: &[u8] = b"\n\x07\x08\xe6\x0f\x10\x03\x18\t\x12\x03CNY\x1a\x17\n\x0cCNY_TREAS_1Y\x11\x1b/\xdd$\x06\x81\x95?\x1a\x17\n\x0cCNY_TREAS_5Y\x11\x89A`\xe5\xd0\"\x9b?*\tCNY_TREAS";
        assert_eq!(curve.encode_to_vec(), expected);
    }

    #[test]
    fn pricing_method_uses_contract_names() {
        assert_eq!(
            BondPricingMethod::Cfets.as_str_name(),
            "CFETS_BOND_PRICING_METHOD"
        );
        assert_eq!(
            to_bond_pricing_method("CFETS_BOND_PRICING_METHOD").unwrap(),
            BondPricingMethod::Cfets
        );
        assert_eq!(to_bond_pricing_method("ccdc").unwrap(), BondPricingMethod::Ccdc);
        assert!(to_bond_pricing_method("XYZ").is_err());
    }

    #[test]
    fn contract_misspelling_is_honored() {
        assert_eq!(
            to_bond_specific_pricing_request("YIELD_TO_MATUIRTY_REQUEST").unwrap(),
            BondSpecificPricingRequest::YieldToMatuirtyRequest
        );
        assert!(to_bond_specific_pricing_request("YIELD_TO_MATURITY_REQUEST").is_err());
    }
}

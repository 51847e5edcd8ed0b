// Commodity and equity options: quote matrix assembly, vol surface building
// and option pricing.
use dqproto::analytics::{
    DividendCurveRiskSettings, IrCurveRiskSettings, IrYieldCurve, PriceRiskSettings,
    PriceVolRiskSettings, PricingResults, PricingSettings, ThetaRiskSettings, VolRiskSettings,
    VolatilitySurface, VolatilitySurfaceDefinition,
};
use dqproto::cm::{
    cm_option_pricing_input, cm_option_quote_matrix, CmMktDataSet, CmOptionPricingInput,
    CmOptionPricingOutput, CmOptionQuoteMatrix, CmRiskSettings, CmVolSurfaceBuildingInput,
    CmVolSurfaceBuildingOutput,
};
use dqproto::datetime::Date;
use dqproto::market::{AmericanOption, EuropeanOption};
use dqproto::numerics::Vector;

use crate::client::AnalyticsClient;
use crate::error::{DqError, Result};
use crate::market::{to_exercise_type, to_payoff_type, to_underlying_type};
use crate::transport::Engine;

/// One expiry row of an option quote matrix: the term date and its
/// `(payoff, strike, price)` quotes.
pub struct QuoteRow<'a> {
    pub term_date: Date,
    pub quotes: &'a [(&'a str, f64, f64)],
}

pub fn create_cm_option_quote_matrix(
    exercise_type: &str,
    underlying_type: &str,
    underlying: &str,
    rows: &[QuoteRow<'_>],
) -> Result<CmOptionQuoteMatrix> {
    let mut out_rows = Vec::with_capacity(rows.len());
    for row in rows {
        let mut quotes = Vec::with_capacity(row.quotes.len());
        for (payoff, strike, price) in row.quotes {
            quotes.push(cm_option_quote_matrix::Quote {
                payoff_type: to_payoff_type(payoff)? as i32,
                strike: *strike,
                price: *price,
            });
        }
        out_rows.push(cm_option_quote_matrix::Row {
            term_date: Some(row.term_date.clone()),
            quotes,
        });
    }
    Ok(CmOptionQuoteMatrix {
        exercise_type: to_exercise_type(exercise_type)? as i32,
        underlying_type: to_underlying_type(underlying_type)? as i32,
        underlying: underlying.to_string(),
        rows: out_rows,
    })
}

pub fn create_cm_mkt_data_set(
    as_of_date: Date,
    discount_curve: IrYieldCurve,
    underlying_price: f64,
    vol_surface: VolatilitySurface,
    dividend_curve: Option<IrYieldCurve>,
) -> CmMktDataSet {
    CmMktDataSet {
        as_of_date: Some(as_of_date),
        discount_curve: Some(discount_curve),
        underlying_price,
        vol_surface: Some(vol_surface),
        dividend_curve,
    }
}

#[allow(clippy::too_many_arguments)]
pub fn create_cm_risk_settings(
    ir_curve_settings: IrCurveRiskSettings,
    price_settings: PriceRiskSettings,
    vol_settings: VolRiskSettings,
    price_vol_settings: PriceVolRiskSettings,
    dividend_curve_settings: Option<DividendCurveRiskSettings>,
    theta_settings: ThetaRiskSettings,
) -> CmRiskSettings {
    CmRiskSettings {
        ir_curve_settings: Some(ir_curve_settings),
        price_settings: Some(price_settings),
        vol_settings: Some(vol_settings),
        price_vol_settings: Some(price_vol_settings),
        dividend_curve_settings,
        theta_settings: Some(theta_settings),
    }
}

// --- Engine operations ------------------------------------------------------

impl<E: Engine> AnalyticsClient<E> {
    /// Calibrates a volatility surface from listed option quotes.
    #[allow(clippy::too_many_arguments)]
    pub async fn cm_vol_surface_builder(
        &self,
        reference_date: Date,
        definition: VolatilitySurfaceDefinition,
        quote_matrix: CmOptionQuoteMatrix,
        underlying_prices: &[f64],
        discount_curve: IrYieldCurve,
        forward_curve: Option<IrYieldCurve>,
        building_params: &[f64],
        underlying: &str,
    ) -> Result<VolatilitySurface> {
        let input = CmVolSurfaceBuildingInput {
            reference_date: Some(reference_date),
            definition: Some(definition),
            quote_matrix: Some(quote_matrix),
            underlying_prices: Some(Vector::from_values(underlying_prices)),
            discount_curve: Some(discount_curve),
            forward_curve,
            building_params: Some(Vector::from_values(building_params)),
            underlying: underlying.to_string(),
        };
        let output: CmVolSurfaceBuildingOutput =
            self.call("CM_VOL_SURFACE_BUILDER", &input).await?;
        output.volatility_surface.ok_or_else(|| {
            DqError::EngineError("CM_VOL_SURFACE_BUILDER returned no surface".into())
        })
    }

    pub async fn cm_european_option_pricer(
        &self,
        pricing_date: Date,
        instrument: EuropeanOption,
        mkt_data_set: CmMktDataSet,
        pricing_settings: PricingSettings,
        risk_settings: CmRiskSettings,
    ) -> Result<PricingResults> {
        let input = CmOptionPricingInput {
            pricing_date: Some(pricing_date),
            mkt_data_set: Some(mkt_data_set),
            pricing_settings: Some(pricing_settings),
            risk_settings: Some(risk_settings),
            instrument: Some(cm_option_pricing_input::Instrument::European(instrument)),
        };
        let output: CmOptionPricingOutput =
            self.call("CM_EUROPEAN_OPTION_PRICER", &input).await?;
        output.results.ok_or_else(|| {
            DqError::EngineError("CM_EUROPEAN_OPTION_PRICER returned no results".into())
        })
    }

    pub async fn cm_american_option_pricer(
        &self,
        pricing_date: Date,
        instrument: AmericanOption,
        mkt_data_set: CmMktDataSet,
        pricing_settings: PricingSettings,
        risk_settings: CmRiskSettings,
    ) -> Result<PricingResults> {
        let input = CmOptionPricingInput {
            pricing_date: Some(pricing_date),
            mkt_data_set: Some(mkt_data_set),
            pricing_settings: Some(pricing_settings),
            risk_settings: Some(risk_settings),
            instrument: Some(cm_option_pricing_input::Instrument::American(instrument)),
        };
        let output: CmOptionPricingOutput =
            self.call("CM_AMERICAN_OPTION_PRICER", &input).await?;
        output.results.ok_or_else(|| {
            DqError::EngineError("CM_AMERICAN_OPTION_PRICER returned no results".into())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datetime::make_date;
    use prost::Message;

    #[test]
    fn quote_matrix_bytes_are_stable() {
        let matrix = create_cm_option_quote_matrix(
            "AMERICAN",
            "COMMODITY",
            "CU2209",
            &[QuoteRow {
                term_date: make_date(2022, 9, 15),
                quotes: &[("CALL", 71000.0, 1210.0)],
            }],
        )
        .unwrap();
        let expected: &[u8] = b"\x08\x02\x10\x02\x1a\x06CU2209\"\x1f\n\x07\x08\xe6\x0f\x10\t\x18\x0f\x12\x14\x08\x01\x11\x00\x00\x00\x00\x80U\xf1@\x19\x00\x00\x00\x00\x00\xe8\x92@";
        assert_eq!(matrix.encode_to_vec(), expected);
    }

    #[test]
    fn bad_payoff_name_is_rejected() {
        let err = create_cm_option_quote_matrix(
            "AMERICAN",
            "COMMODITY",
            "CU2209",
            &[QuoteRow {
                term_date: make_date(2022, 9, 15),
                quotes: &[("STRADDLE", 71000.0, 1210.0)],
            }],
        );
        assert!(err.is_err());
    }
}

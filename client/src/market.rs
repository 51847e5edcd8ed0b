// Market data builders: currencies, FX quotes, time series, instrument
// templates and option payoffs.
use dqproto::datetime::Date;
use dqproto::market::{
    time_series, AmericanOption, AsianOption, AveragingMethod, BarrierType, Currency,
    CurrencyPair, DigitalOption, EuropeanOption, ExerciseType, FxForward, FxForwardTemplate,
    FxNdfTemplate, FxNonDeliverableForward, FxRate, FxSpotRate, FxSpotTemplate, FxSwap,
    FxSwapTemplate, InstrumentType, ObservationType, OneTouchOption, PaymentType, PayoffType,
    SingleBarrierOption, StrikeType, TimeSeries, UnderlyingType,
};
use dqproto::numerics::Matrix;

use crate::datetime::{parse_period, to_business_day_convention, to_instrument_start_convention};
use crate::error::{DqError, Result};

pub fn to_currency(name: &str) -> Currency {
    Currency {
        name: name.trim().to_uppercase(),
    }
}

/// Splits a six-letter pair like `usdcny` into base and quote currencies.
pub fn to_ccy_pair(pair: &str) -> Result<CurrencyPair> {
    let normalized = pair.trim().to_uppercase();
    if normalized.len() != 6 {
        return Err(DqError::InvalidInput(format!(
            "invalid currency pair '{}'",
            pair
        )));
    }
    Ok(CurrencyPair {
        base_currency: Some(Currency {
            name: normalized[..3].to_string(),
        }),
        quote_currency: Some(Currency {
            name: normalized[3..].to_string(),
        }),
    })
}

pub fn to_time_series_mode(text: &str) -> Result<time_series::Mode> {
    let name = text.trim().to_uppercase();
    if name.is_empty() {
        return Ok(time_series::Mode::TsForwardMode);
    }
    time_series::Mode::from_str_name(&name)
        .ok_or_else(|| DqError::unknown_name("time series mode", text))
}

pub fn to_payoff_type(text: &str) -> Result<PayoffType> {
    PayoffType::from_str_name(&text.trim().to_uppercase())
        .ok_or_else(|| DqError::unknown_name("payoff type", text))
}

pub fn to_exercise_type(text: &str) -> Result<ExerciseType> {
    ExerciseType::from_str_name(&text.trim().to_uppercase())
        .ok_or_else(|| DqError::unknown_name("exercise type", text))
}

pub fn to_underlying_type(text: &str) -> Result<UnderlyingType> {
    UnderlyingType::from_str_name(&text.trim().to_uppercase())
        .ok_or_else(|| DqError::unknown_name("underlying type", text))
}

pub fn to_instrument_type(text: &str) -> Result<InstrumentType> {
    InstrumentType::from_str_name(&text.trim().to_uppercase())
        .ok_or_else(|| DqError::unknown_name("instrument type", text))
}

pub fn to_strike_type(text: &str) -> Result<StrikeType> {
    StrikeType::from_str_name(&text.trim().to_uppercase())
        .ok_or_else(|| DqError::unknown_name("strike type", text))
}

pub fn to_averaging_method(text: &str) -> Result<AveragingMethod> {
    AveragingMethod::from_str_name(&text.trim().to_uppercase())
        .ok_or_else(|| DqError::unknown_name("averaging method", text))
}

pub fn to_observation_type(text: &str) -> Result<ObservationType> {
    ObservationType::from_str_name(&text.trim().to_uppercase())
        .ok_or_else(|| DqError::unknown_name("observation type", text))
}

pub fn to_barrier_type(text: &str) -> Result<BarrierType> {
    BarrierType::from_str_name(&text.trim().to_uppercase())
        .ok_or_else(|| DqError::unknown_name("barrier type", text))
}

pub fn to_payment_type(text: &str) -> Result<PaymentType> {
    PaymentType::from_str_name(&text.trim().to_uppercase())
        .ok_or_else(|| DqError::unknown_name("payment type", text))
}

/// Builds a dated observation series. Values travel as a single-column
/// matrix; the series name is stored uppercase.
pub fn create_time_series(
    dates: Vec<Date>,
    values: &[f64],
    mode: &str,
    name: &str,
) -> Result<TimeSeries> {
    if dates.len() != values.len() {
        return Err(DqError::InvalidInput(format!(
            "time series '{}' has {} dates but {} values",
            name,
            dates.len(),
            values.len()
        )));
    }
    Ok(TimeSeries {
        dates,
        values: Some(Matrix::column(values)),
        mode: to_time_series_mode(mode)? as i32,
        name: name.trim().to_uppercase(),
    })
}

pub fn create_foreign_exchange_rate(
    value: f64,
    price_currency: &str,
    unit_currency: &str,
) -> FxRate {
    FxRate {
        value,
        price_currency: price_currency.trim().to_uppercase(),
        unit_currency: unit_currency.trim().to_uppercase(),
    }
}

pub fn create_fx_spot_rate(rate: FxRate, reference_date: Date, spot_date: Date) -> FxSpotRate {
    FxSpotRate {
        rate: Some(rate),
        reference_date: Some(reference_date),
        spot_date: Some(spot_date),
    }
}

// --- Templates --------------------------------------------------------------

pub fn create_fx_spot_template(
    name: &str,
    currency_pair: &str,
    spot_day_convention: &str,
    calendars: &[&str],
    spot_delay: &str,
) -> Result<FxSpotTemplate> {
    Ok(FxSpotTemplate {
        instrument_type: InstrumentType::FxSpot as i32,
        name: name.to_string(),
        currency_pair: Some(to_ccy_pair(currency_pair)?),
        spot_day_convention: to_business_day_convention(spot_day_convention)? as i32,
        spot_delay: Some(parse_period(spot_delay)?),
        calendars: calendars.iter().map(|c| c.to_string()).collect(),
    })
}

pub fn create_fx_forward_template(
    name: &str,
    currency_pair: &str,
    delivery_day_convention: &str,
    fixing_day_convention: &str,
    fixing_offset: &str,
    calendars: &[&str],
) -> Result<FxForwardTemplate> {
    Ok(FxForwardTemplate {
        instrument_type: InstrumentType::FxForward as i32,
        name: name.to_string(),
        currency_pair: Some(to_ccy_pair(currency_pair)?),
        delivery_day_convention: to_business_day_convention(delivery_day_convention)? as i32,
        fixing_day_convention: to_business_day_convention(fixing_day_convention)? as i32,
        fixing_offset: Some(parse_period(fixing_offset)?),
        calendars: calendars.iter().map(|c| c.to_string()).collect(),
    })
}

#[allow(clippy::too_many_arguments)]
pub fn create_fx_swap_template(
    name: &str,
    currency_pair: &str,
    start_convention: &str,
    start_day_convention: &str,
    end_day_convention: &str,
    fixing_offset: &str,
    fixing_day_convention: &str,
    calendars: &[&str],
) -> Result<FxSwapTemplate> {
    Ok(FxSwapTemplate {
        instrument_type: InstrumentType::FxSwap as i32,
        name: name.to_string(),
        currency_pair: Some(to_ccy_pair(currency_pair)?),
        start_convention: to_instrument_start_convention(start_convention)? as i32,
        start_day_convention: to_business_day_convention(start_day_convention)? as i32,
        end_day_convention: to_business_day_convention(end_day_convention)? as i32,
        fixing_offset: Some(parse_period(fixing_offset)?),
        fixing_day_convention: to_business_day_convention(fixing_day_convention)? as i32,
        calendars: calendars.iter().map(|c| c.to_string()).collect(),
    })
}

pub fn create_fx_ndf_template(
    name: &str,
    currency_pair: &str,
    delivery_day_convention: &str,
    fixing_day_convention: &str,
    fixing_offset: &str,
    calendars: &[&str],
    settlement_currency: &str,
) -> Result<FxNdfTemplate> {
    Ok(FxNdfTemplate {
        instrument_type: InstrumentType::FxNonDeliverableForward as i32,
        name: name.to_string(),
        currency_pair: Some(to_ccy_pair(currency_pair)?),
        delivery_day_convention: to_business_day_convention(delivery_day_convention)? as i32,
        fixing_day_convention: to_business_day_convention(fixing_day_convention)? as i32,
        fixing_offset: Some(parse_period(fixing_offset)?),
        calendars: calendars.iter().map(|c| c.to_string()).collect(),
        settlement_currency: settlement_currency.trim().to_uppercase(),
    })
}

// --- Instruments ------------------------------------------------------------

pub fn create_fx_forward(
    buy_currency: &str,
    buy_amount: f64,
    sell_currency: &str,
    sell_amount: f64,
    delivery_date: Date,
    expiry_date: Date,
) -> FxForward {
    FxForward {
        buy_currency: buy_currency.trim().to_uppercase(),
        buy_amount,
        sell_currency: sell_currency.trim().to_uppercase(),
        sell_amount,
        delivery_date: Some(delivery_date),
        expiry_date: Some(expiry_date),
    }
}

pub fn create_fx_swap(near: FxForward, far: FxForward) -> FxSwap {
    FxSwap {
        near_buy_currency: near.buy_currency,
        near_buy_amount: near.buy_amount,
        near_sell_currency: near.sell_currency,
        near_sell_amount: near.sell_amount,
        near_delivery_date: near.delivery_date,
        near_expiry_date: near.expiry_date,
        far_buy_currency: far.buy_currency,
        far_buy_amount: far.buy_amount,
        far_sell_currency: far.sell_currency,
        far_sell_amount: far.sell_amount,
        far_delivery_date: far.delivery_date,
        far_expiry_date: far.expiry_date,
    }
}

pub fn create_fx_non_deliverable_forward(
    forward: FxForward,
    settlement_currency: &str,
) -> FxNonDeliverableForward {
    FxNonDeliverableForward {
        buy_currency: forward.buy_currency,
        buy_amount: forward.buy_amount,
        sell_currency: forward.sell_currency,
        sell_amount: forward.sell_amount,
        delivery_date: forward.delivery_date,
        expiry_date: forward.expiry_date,
        settlement_currency: settlement_currency.trim().to_uppercase(),
    }
}

#[allow(clippy::too_many_arguments)]
pub fn create_european_option(
    payoff_type: &str,
    strike: f64,
    delivery_date: Date,
    expiry_date: Date,
    nominal: f64,
    payoff_currency: &str,
    underlying_type: &str,
    underlying_currency: &str,
    underlying: &str,
) -> Result<EuropeanOption> {
    Ok(EuropeanOption {
        payoff_type: to_payoff_type(payoff_type)? as i32,
        strike,
        delivery_date: Some(delivery_date),
        expiry_date: Some(expiry_date),
        nominal,
        payoff_currency: payoff_currency.trim().to_uppercase(),
        underlying_type: to_underlying_type(underlying_type)? as i32,
        underlying_currency: underlying_currency.trim().to_uppercase(),
        underlying: underlying.to_string(),
    })
}

#[allow(clippy::too_many_arguments)]
pub fn create_american_option(
    payoff_type: &str,
    strike: f64,
    expiry_date: Date,
    settlement_days: i32,
    nominal: f64,
    payoff_currency: &str,
    underlying_type: &str,
    underlying_currency: &str,
    underlying: &str,
) -> Result<AmericanOption> {
    Ok(AmericanOption {
        payoff_type: to_payoff_type(payoff_type)? as i32,
        strike,
        expiry_date: Some(expiry_date),
        settlement_days,
        nominal,
        payoff_currency: payoff_currency.trim().to_uppercase(),
        underlying_type: to_underlying_type(underlying_type)? as i32,
        underlying_currency: underlying_currency.trim().to_uppercase(),
        underlying: underlying.to_string(),
    })
}

#[allow(clippy::too_many_arguments)]
pub fn create_digital_option(
    payoff_type: &str,
    strike: f64,
    delivery_date: Date,
    expiry_date: Date,
    cash: f64,
    asset: f64,
    nominal: f64,
    payoff_currency: &str,
    underlying_type: &str,
    underlying_currency: &str,
    underlying: &str,
) -> Result<DigitalOption> {
    Ok(DigitalOption {
        payoff_type: to_payoff_type(payoff_type)? as i32,
        strike,
        delivery_date: Some(delivery_date),
        expiry_date: Some(expiry_date),
        cash,
        asset,
        nominal,
        payoff_currency: payoff_currency.trim().to_uppercase(),
        underlying_type: to_underlying_type(underlying_type)? as i32,
        underlying_currency: underlying_currency.trim().to_uppercase(),
        underlying: underlying.to_string(),
    })
}

/// Averaging payoff over the fixing schedule. The strike is ignored when
/// `strike_type` is ATM.
#[allow(clippy::too_many_arguments)]
pub fn create_asian_option(
    payoff_type: &str,
    strike_type: &str,
    strike: f64,
    delivery_date: Date,
    expiry_date: Date,
    averaging_method: &str,
    observation_type: &str,
    fixing_dates: Vec<Date>,
    nominal: f64,
    payoff_currency: &str,
    underlying_type: &str,
    underlying_currency: &str,
    underlying: &str,
) -> Result<AsianOption> {
    Ok(AsianOption {
        payoff_type: to_payoff_type(payoff_type)? as i32,
        strike_type: to_strike_type(strike_type)? as i32,
        strike,
        delivery_date: Some(delivery_date),
        expiry_date: Some(expiry_date),
        averaging_method: to_averaging_method(averaging_method)? as i32,
        observation_type: to_observation_type(observation_type)? as i32,
        fixing_dates,
        nominal,
        payoff_currency: payoff_currency.trim().to_uppercase(),
        underlying_type: to_underlying_type(underlying_type)? as i32,
        underlying_currency: underlying_currency.trim().to_uppercase(),
        underlying: underlying.to_string(),
    })
}

#[allow(clippy::too_many_arguments)]
pub fn create_one_touch_option(
    expiry_date: Date,
    delivery_date: Date,
    barrier_type: &str,
    barrier_value: f64,
    observation_type: &str,
    observation_dates: Vec<Date>,
    payment_type: &str,
    cash: f64,
    asset: f64,
    settlement_days: i32,
    nominal: f64,
    payoff_currency: &str,
    underlying_type: &str,
    underlying_currency: &str,
    underlying: &str,
) -> Result<OneTouchOption> {
    Ok(OneTouchOption {
        expiry_date: Some(expiry_date),
        delivery_date: Some(delivery_date),
        barrier_type: to_barrier_type(barrier_type)? as i32,
        barrier_value,
        observation_type: to_observation_type(observation_type)? as i32,
        observation_dates,
        payment_type: to_payment_type(payment_type)? as i32,
        cash,
        asset,
        settlement_days,
        nominal,
        payoff_currency: payoff_currency.trim().to_uppercase(),
        underlying_type: to_underlying_type(underlying_type)? as i32,
        underlying_currency: underlying_currency.trim().to_uppercase(),
        underlying: underlying.to_string(),
    })
}

#[allow(clippy::too_many_arguments)]
pub fn create_single_barrier_option(
    payoff_type: &str,
    strike: f64,
    expiry_date: Date,
    delivery_date: Date,
    barrier_type: &str,
    barrier_value: f64,
    observation_type: &str,
    observation_dates: Vec<Date>,
    payment_type: &str,
    cash: f64,
    asset: f64,
    settlement_days: i32,
    nominal: f64,
    payoff_currency: &str,
    underlying_type: &str,
    underlying_currency: &str,
    underlying: &str,
) -> Result<SingleBarrierOption> {
    Ok(SingleBarrierOption {
        payoff_type: to_payoff_type(payoff_type)? as i32,
        strike,
        expiry_date: Some(expiry_date),
        delivery_date: Some(delivery_date),
        barrier_type: to_barrier_type(barrier_type)? as i32,
        barrier_value,
        observation_type: to_observation_type(observation_type)? as i32,
        observation_dates,
        payment_type: to_payment_type(payment_type)? as i32,
        cash,
        asset,
        settlement_days,
        nominal,
        payoff_currency: payoff_currency.trim().to_uppercase(),
        underlying_type: to_underlying_type(underlying_type)? as i32,
        underlying_currency: underlying_currency.trim().to_uppercase(),
        underlying: underlying.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datetime::make_date;
    use prost::Message;

    #[test]
    fn currency_pair_splits_and_uppercases() {
        let pair = to_ccy_pair("usdcny").unwrap();
        assert_eq!(pair.encode_to_vec(), b"\n\x05\n\x03USD\x12\x05\n\x03CNY");
        assert!(to_ccy_pair("usd").is_err());
    }

    #[test]
    fn fx_rate_bytes_match_recorded_request() {
        let rate = create_foreign_exchange_rate(6.6916, "cny", "usd");
        assert_eq!(
            rate.encode_to_vec(),
            b"\t\x87\xa7W\xca2\xc4\x1a@\x12\x03CNY\x1a\x03USD"
        );
    }

    #[test]
    fn time_series_bytes_match_recorded_request() {
        let series = create_time_series(
            vec![make_date(2022, 3, 3), make_date(2022, 3, 4)],
            &[0.01, 0.03],
            "TS_FORWARD_MODE",
            "shibor_3m",
        )
        .unwrap();
        assert_eq!(
            series.encode_to_vec(),
            b"\n\x07\x08\xe6\x0f\x10\x03\x18\x03\n\x07\x08\xe6\x0f\x10\x03\x18\x04\x12\x18\x08\x02\x10\x01\x1a\x10{\x14\xaeG\xe1z\x84?\xb8\x1e\x85\xebQ\xb8\x9e? \x01\"\tSHIBOR_3M"
        );
    }

    #[test]
    fn time_series_rejects_mismatched_lengths() {
        let err = create_time_series(vec![make_date(2022, 3, 3)], &[0.01, 0.03], "", "x");
        assert!(err.is_err());
    }

    #[test]
    fn asian_option_bytes_are_stable() {
        let option = create_asian_option(
            "call",
            "FIXED",
            6.6,
            make_date(2020, 2, 21),
            make_date(2020, 2, 21),
            "ARITHMETIC",
            "DISCRETE",
            vec![make_date(2020, 2, 20)],
            1_000_000.0,
            "cny",
            "FX_UNDERLYING_TYPE",
            "cny",
            "USDCNY",
        )
        .unwrap();
        assert_eq!(
            option.encode_to_vec(),
            b"\x08\x01\x10\x02\x19ffffff\x1a@\"\x07\x08\xe4\x0f\x10\x02\x18\x15*\x07\x08\xe4\x0f\x10\x02\x18\x150\x018\x02B\x07\x08\xe4\x0f\x10\x02\x18\x14I\x00\x00\x00\x00\x80\x84.AR\x03CNYX\x04b\x03CNYj\x06USDCNY"
        );
    }

    #[test]
    fn one_touch_option_bytes_are_stable() {
        let option = create_one_touch_option(
            make_date(2020, 2, 21),
            make_date(2020, 2, 21),
            "UP",
            6.7,
            "CONTINUOUS",
            vec![],
            "CASH",
            1.0,
            0.0,
            1,
            1_000_000.0,
            "cny",
            "FX_UNDERLYING_TYPE",
            "cny",
            "USDCNY",
        )
        .unwrap();
        assert_eq!(
            option.encode_to_vec(),
            b"\n\x07\x08\xe4\x0f\x10\x02\x18\x15\x12\x07\x08\xe4\x0f\x10\x02\x18\x15\x18\x01!\xcd\xcc\xcc\xcc\xcc\xcc\x1a@(\x018\x01A\x00\x00\x00\x00\x00\x00\xf0?P\x01Y\x00\x00\x00\x00\x80\x84.Ab\x03CNYh\x04r\x03CNYz\x06USDCNY"
        );
    }

    #[test]
    fn single_barrier_option_bytes_are_stable() {
        let option = create_single_barrier_option(
            "PUT",
            6.6,
            make_date(2020, 2, 21),
            make_date(2020, 2, 21),
            "DOWN",
            6.3,
            "CONTINUOUS",
            vec![],
            "CASH",
            0.0,
            0.0,
            1,
            1_000_000.0,
            "cny",
            "FX_UNDERLYING_TYPE",
            "cny",
            "USDCNY",
        )
        .unwrap();
        assert_eq!(
            option.encode_to_vec(),
            b"\x08\x02\x11ffffff\x1a@\x1a\x07\x08\xe4\x0f\x10\x02\x18\x15\"\x07\x08\xe4\x0f\x10\x02\x18\x15(\x021333333\x19@8\x01H\x01`\x01i\x00\x00\x00\x00\x80\x84.Ar\x03CNYx\x04\x82\x01\x03CNY\x8a\x01\x06USDCNY"
        );
    }

    #[test]
    fn unknown_barrier_inputs_are_rejected() {
        assert!(to_barrier_type("SIDEWAYS").is_err());
        assert!(to_averaging_method("HARMONIC").is_err());
        assert!(to_payment_type("SHARES").is_err());
    }

    #[test]
    fn fx_spot_template_bytes_match_recorded_request() {
        let template = create_fx_spot_template(
            "TestFxSpot",
            "USDCNY",
            "FOLLOWING",
            &["CAL_CFETS"],
            "1d",
        )
        .unwrap();
        assert_eq!(
            template.encode_to_vec(),
            b"\x08\xb9\x17\x12\nTestFxSpot\x1a\x0e\n\x05\n\x03USD\x12\x05\n\x03CNY \x012\x04\x08\x01\x10\x01:\tCAL_CFETS"
        );
    }
}

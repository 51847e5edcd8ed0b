//! End-to-end client tests against a canned in-process engine.

use std::collections::HashMap;
use std::sync::Mutex;

use prost::Message;

use dqlink::analytics::{create_ir_par_rate_curve, create_par_curve_pillar};
use dqlink::irmarket::create_depo_template;
use dqlink::{AnalyticsClient, DqError, Engine, Result};
use dqproto::analytics::{IrYieldCurve, IrYieldCurveBuildingInput, IrYieldCurveBuildingOutput};
use dqproto::datetime::Date;
use dqproto::irmarket::{BuildDepoOutput, CreateIborIndexInput, CreateIborIndexOutput};

/// Replays recorded engine replies keyed by operation name and keeps every
/// request it saw for inspection.
struct MockEngine {
    replies: HashMap<String, Vec<u8>>,
    calls: Mutex<Vec<(String, Vec<u8>)>>,
}

impl MockEngine {
    fn new() -> Self {
        MockEngine { replies: HashMap::new(), calls: Mutex::new(Vec::new()) }
    }

    fn with_reply(mut self, name: &str, reply: impl Message) -> Self {
        self.replies.insert(name.to_string(), reply.encode_to_vec());
        self
    }

    fn calls(&self) -> Vec<(String, Vec<u8>)> {
        self.calls.lock().unwrap().clone()
    }
}

#[tonic::async_trait]
impl Engine for MockEngine {
    async fn process(&self, name: &str, payload: Vec<u8>) -> Result<Vec<u8>> {
        self.calls.lock().unwrap().push((name.to_string(), payload));
        self.replies
            .get(name)
            .cloned()
            .ok_or_else(|| DqError::EngineError(format!("unexpected operation '{}'", name)))
    }
}

fn date(year: i32, month: i32, day: i32) -> Date {
    Date { year, month, day }
}

#[tokio::test]
async fn create_ibor_index_sends_the_expected_request() {
    let engine = MockEngine::new().with_reply(
        "CREATE_IBOR_INDEX",
        CreateIborIndexOutput { success: true, err_msg: String::new() },
    );
    let client = AnalyticsClient::new(engine);

    client
        .create_ibor_index("shibor_3m", "3m", "cny", &["CAL_CFETS"], 1)
        .await
        .unwrap();

    let calls = client.engine().calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "CREATE_IBOR_INDEX");

    let sent = CreateIborIndexInput::decode(calls[0].1.as_slice()).unwrap();
    let index = sent.ibor_index.unwrap();
    assert_eq!(index.name, "SHIBOR_3M");
    assert_eq!(index.currency, "CNY");
    assert_eq!(index.fixing_days, 1);
}

#[tokio::test]
async fn engine_failure_surfaces_the_error_message() {
    let engine = MockEngine::new().with_reply(
        "BUILD_DEPO",
        BuildDepoOutput {
            success: false,
            err_msg: "unknown calendar CAL_NOPE".into(),
            instrument: None,
        },
    );
    let client = AnalyticsClient::new(engine);

    let template = create_depo_template("cny_depo", "cny", "CAL_NOPE").unwrap();
    let err = client
        .build_depo("PAY", 0.02, date(2022, 3, 9), date(2022, 6, 9), template, 1_000_000.0)
        .await
        .unwrap_err();

    assert!(matches!(err, DqError::EngineError(msg) if msg.contains("CAL_NOPE")));
}

#[tokio::test]
async fn curve_builder_returns_the_bootstrapped_curve() {
    let curve = IrYieldCurve {
        name: "CNY_SHIBOR_3M".into(),
        currency: "CNY".into(),
        ..Default::default()
    };
    let engine = MockEngine::new().with_reply(
        "IR_YIELD_CURVE_BUILDER",
        IrYieldCurveBuildingOutput {
            success: true,
            err_msg: String::new(),
            ir_yield_curve: Some(curve.clone()),
        },
    );
    let client = AnalyticsClient::new(engine);

    let pillar =
        create_par_curve_pillar("cny_shibor_3m_1y", "ir_vanilla_swap", "1y", 0.0256, "SPOT_START")
            .unwrap();
    let par_curve =
        create_ir_par_rate_curve(date(2022, 3, 9), "cny", "cny_shibor_3m", vec![pillar]);

    let built = client
        .ir_yield_curve_builder(date(2022, 3, 9), "cny_shibor_3m", par_curve, None, "bootstrap", false)
        .await
        .unwrap();
    assert_eq!(built, curve);

    let calls = client.engine().calls();
    let sent = IrYieldCurveBuildingInput::decode(calls[0].1.as_slice()).unwrap();
    assert_eq!(sent.target_curve_name, "CNY_SHIBOR_3M");
    assert_eq!(sent.building_method, "BOOTSTRAP");
    assert!(!sent.calc_jacobian);
}

#[tokio::test]
async fn unexpected_operation_is_rejected() {
    let client = AnalyticsClient::new(MockEngine::new());
    let err = client
        .create_ibor_index("shibor_3m", "3m", "cny", &[], 1)
        .await
        .unwrap_err();
    assert!(matches!(err, DqError::EngineError(msg) if msg.contains("CREATE_IBOR_INDEX")));
}

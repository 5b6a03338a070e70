use std::cell::{Cell, RefCell};

use async_trait::async_trait;
use futures::executor::block_on;
use records::ModelStatus;

use super::*;
use crate::state::models::ModelsState;

#[derive(Default)]
struct FakeApi {
    models: Vec<AiModel>,
    fail: bool,
    calls: RefCell<Vec<String>>,
    fetches: Cell<usize>,
    created: RefCell<Vec<AiModelPayload>>,
}

impl FakeApi {
    fn outcome(&self, call: String) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(call);
        if self.fail { Err(ApiError::Status { status: 500 }) } else { Ok(()) }
    }
}

#[async_trait(?Send)]
impl ModelApi for FakeApi {
    async fn fetch_models(&self) -> Result<Vec<AiModel>, ApiError> {
        self.fetches.set(self.fetches.get() + 1);
        if self.fail {
            return Err(ApiError::Request("offline".to_owned()));
        }
        Ok(self.models.clone())
    }

    async fn create_model(&self, payload: &AiModelPayload) -> Result<(), ApiError> {
        self.created.borrow_mut().push(payload.clone());
        self.outcome(format!("create:{}", payload.name))
    }

    async fn update_model(&self, id: &str, payload: &AiModelPayload) -> Result<(), ApiError> {
        self.outcome(format!("update:{id}:{}", payload.name))
    }

    async fn delete_model(&self, id: &str) -> Result<(), ApiError> {
        self.outcome(format!("delete:{id}"))
    }

    async fn toggle_default(&self, id: &str) -> Result<(), ApiError> {
        self.outcome(format!("toggle-default:{id}"))
    }

    async fn toggle_status(&self, id: &str) -> Result<(), ApiError> {
        self.outcome(format!("toggle-status:{id}"))
    }
}

#[derive(Default)]
struct Recorder {
    successes: RefCell<Vec<String>>,
    errors: RefCell<Vec<String>>,
}

impl Notifier for Recorder {
    fn success(&self, title: &str, _message: &str) {
        self.successes.borrow_mut().push(title.to_owned());
    }

    fn error(&self, _title: &str, message: &str) {
        self.errors.borrow_mut().push(message.to_owned());
    }
}

fn model(id: &str, name: &str, status: ModelStatus) -> AiModel {
    AiModel {
        id: id.to_owned(),
        name: name.to_owned(),
        provider: "openai".to_owned(),
        description: "A model for testing".to_owned(),
        api_key: "sk".to_owned(),
        base_url: String::new(),
        model_type: "chat".to_owned(),
        max_tokens: 2048,
        temperature: 0.2,
        status,
        capabilities: vec!["chat".to_owned()],
        is_default: false,
    }
}

// =============================================================
// Loading through the cache
// =============================================================

#[test]
fn load_fetches_once_until_invalidated() {
    let api = FakeApi { models: vec![model("1", "GPT", ModelStatus::Active)], ..FakeApi::default() };
    let controller = ModelListController::new(api, QueryCache::new(), Recorder::default());

    assert_eq!(block_on(controller.load()).unwrap().len(), 1);
    assert_eq!(block_on(controller.load()).unwrap().len(), 1);
    assert_eq!(controller.api.fetches.get(), 1);

    controller.cache().invalidate(AI_MODELS);
    block_on(controller.load()).unwrap();
    assert_eq!(controller.api.fetches.get(), 2);
}

#[test]
fn load_failure_is_returned() {
    let api = FakeApi { fail: true, ..FakeApi::default() };
    let controller = ModelListController::new(api, QueryCache::new(), Recorder::default());
    assert_eq!(block_on(controller.load()), Err(ApiError::Request("offline".to_owned())));
}

// =============================================================
// Mutations
// =============================================================

#[test]
fn successful_mutation_invalidates_and_notifies() {
    let api = FakeApi::default();
    let cache = QueryCache::new();
    cache.set(AI_MODELS, Vec::<AiModel>::new());
    let controller = ModelListController::new(api, cache.clone(), Recorder::default());

    let result = block_on(controller.execute(&ModelMutation::ToggleDefault("7".to_owned())));

    assert_eq!(result, Ok(()));
    assert!(cache.is_stale(AI_MODELS));
    assert_eq!(controller.api.calls.borrow().as_slice(), &["toggle-default:7".to_owned()]);
    assert_eq!(controller.notifier.successes.borrow().as_slice(), &["Default updated".to_owned()]);
    assert!(controller.notifier.errors.borrow().is_empty());
}

#[test]
fn failed_mutation_reports_error_and_keeps_cache_fresh() {
    let api = FakeApi { fail: true, ..FakeApi::default() };
    let cache = QueryCache::new();
    cache.set(AI_MODELS, vec![model("1", "GPT", ModelStatus::Active)]);
    let controller = ModelListController::new(api, cache.clone(), Recorder::default());

    let result = block_on(controller.execute(&ModelMutation::ToggleStatus("1".to_owned())));

    assert_eq!(result, Err(ApiError::Status { status: 500 }));
    assert!(!cache.is_stale(AI_MODELS));
    assert_eq!(cache.get::<Vec<AiModel>>(AI_MODELS).unwrap()[0].status, ModelStatus::Active);
    assert_eq!(controller.notifier.errors.borrow().as_slice(), &["Failed to change model status.".to_owned()]);
    assert!(controller.notifier.successes.borrow().is_empty());
}

#[test]
fn each_mutation_hits_its_endpoint() {
    let api = FakeApi::default();
    let controller = ModelListController::new(api, QueryCache::new(), Recorder::default());
    let payload = model("1", "GPT", ModelStatus::Active).to_payload();

    for mutation in [
        ModelMutation::Create(payload.clone()),
        ModelMutation::Update { id: "1".to_owned(), payload },
        ModelMutation::Delete("1".to_owned()),
        ModelMutation::ToggleDefault("1".to_owned()),
        ModelMutation::ToggleStatus("1".to_owned()),
    ] {
        block_on(controller.execute(&mutation)).unwrap();
    }

    assert_eq!(
        controller.api.calls.borrow().as_slice(),
        &[
            "create:GPT".to_owned(),
            "update:1:GPT".to_owned(),
            "delete:1".to_owned(),
            "toggle-default:1".to_owned(),
            "toggle-status:1".to_owned(),
        ]
    );
    assert_eq!(
        controller.notifier.successes.borrow().as_slice(),
        &[
            "Model created".to_owned(),
            "Model updated".to_owned(),
            "Model deleted".to_owned(),
            "Default updated".to_owned(),
            "Status updated".to_owned(),
        ]
    );
}

// =============================================================
// End-to-end handler flows
// =============================================================

#[test]
fn edit_flow_updates_target_id_and_clears_editing() {
    let api = FakeApi::default();
    let controller = ModelListController::new(api, QueryCache::new(), Recorder::default());
    let mut state = ModelsState { items: vec![model("9", "GPT", ModelStatus::Active)], ..ModelsState::default() };

    state.open_configure("9");
    let mut payload = state.items[0].to_payload();
    payload.name = "GPT-4".to_owned();
    let mutation = state.take_submission(payload);
    block_on(controller.execute(&mutation)).unwrap();

    assert_eq!(controller.api.calls.borrow().as_slice(), &["update:9:GPT-4".to_owned()]);
    assert!(state.editing.is_none());
}

#[test]
fn add_flow_creates_and_clears_editing() {
    let api = FakeApi::default();
    let controller = ModelListController::new(api, QueryCache::new(), Recorder::default());
    let mut state = ModelsState::default();

    state.open_create();
    let mut payload = AiModelPayload::default();
    payload.name = "Fresh".to_owned();
    let mutation = state.take_submission(payload);
    block_on(controller.execute(&mutation)).unwrap();

    assert_eq!(controller.api.calls.borrow().as_slice(), &["create:Fresh".to_owned()]);
    assert!(state.editing.is_none());
}

#[test]
fn failed_update_clears_then_restores_edit_context() {
    let api = FakeApi { fail: true, ..FakeApi::default() };
    let controller = ModelListController::new(api, QueryCache::new(), Recorder::default());
    let mut state = ModelsState { items: vec![model("4", "GPT", ModelStatus::Active)], ..ModelsState::default() };

    state.open_configure("4");
    let mutation = state.take_submission(state.items[0].to_payload());
    assert!(state.editing.is_none());

    if block_on(controller.execute(&mutation)).is_err() {
        state.restore_failed_update(&mutation);
    }
    assert_eq!(state.editing.as_ref().map(|m| m.id.as_str()), Some("4"));
    assert_eq!(controller.notifier.errors.borrow().as_slice(), &["Failed to update AI model.".to_owned()]);
}

#[test]
fn duplicate_issues_create_without_id() {
    let api = FakeApi::default();
    let controller = ModelListController::new(api, QueryCache::new(), Recorder::default());
    let source = model("5", "X", ModelStatus::Active);

    block_on(controller.execute(&ModelMutation::duplicate(&source))).unwrap();

    let created = controller.api.created.borrow();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].name, "X (Copy)");
    assert_eq!(created[0].status, ModelStatus::Testing);
    assert_eq!(created[0].capabilities, vec!["chat".to_owned()]);
    assert_eq!(controller.notifier.successes.borrow().as_slice(), &["Model created".to_owned()]);
}
